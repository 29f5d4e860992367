pub mod user_repo;
pub use user_repo::UserRepository;
pub mod business_repo;
pub use business_repo::BusinessRepository;
pub mod booking_repo;
pub use booking_repo::BookingRepository;
pub mod settlement_repo;
pub use settlement_repo::SettlementRepository;
pub mod notification_repo;
pub use notification_repo::NotificationRepository;
pub mod review_repo;
pub use review_repo::ReviewRepository;
pub mod settings_repo;
pub use settings_repo::SettingsRepository;
