pub mod auth;
pub mod booking_service;
pub mod business_service;
pub mod notification_service;
pub mod settlement_service;
