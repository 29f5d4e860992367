// src/config.rs

use std::{env, sync::Arc, time::Duration};

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
    common::i18n::I18nStore,
    db::{
        BookingRepository, BusinessRepository, NotificationRepository, ReviewRepository,
        SettingsRepository, SettlementRepository, UserRepository,
    },
    services::{
        auth::AuthService, booking_service::BookingService, business_service::BusinessService,
        notification_service::NotificationService, settlement_service::SettlementService,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: String,
    pub i18n_store: Arc<I18nStore>,
    pub auth_service: AuthService,
    pub booking_service: BookingService,
    pub business_service: BusinessService,
    pub settlement_service: SettlementService,
    pub notification_service: NotificationService,
    pub review_repo: ReviewRepository,
    pub settings_repo: SettingsRepository,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let business_repo = BusinessRepository::new(db_pool.clone());
        let booking_repo = BookingRepository::new(db_pool.clone());
        let settlement_repo = SettlementRepository::new(db_pool.clone());
        let notification_repo = NotificationRepository::new(db_pool.clone());
        let review_repo = ReviewRepository::new(db_pool.clone());
        let settings_repo = SettingsRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo, jwt_secret.clone(), db_pool.clone());
        let notification_service =
            NotificationService::new(notification_repo, db_pool.clone());
        let business_service = BusinessService::new(business_repo.clone(), db_pool.clone());
        let booking_service = BookingService::new(
            booking_repo,
            business_repo,
            settlement_repo.clone(),
            notification_service.clone(),
            db_pool.clone(),
        );
        let settlement_service = SettlementService::new(settlement_repo, db_pool.clone());

        Ok(Self {
            db_pool,
            jwt_secret,
            i18n_store: Arc::new(I18nStore::new()),
            auth_service,
            booking_service,
            business_service,
            settlement_service,
            notification_service,
            review_repo,
            settings_repo,
        })
    }
}
