// src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

// Importações principais
use crate::config::AppState;
use crate::docs::ApiDoc;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas públicas (vitrine, autenticação, configuração do site)
    let public_routes = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/auth/register", post(handlers::auth::register))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/categories", get(handlers::businesses::list_categories))
        .route("/api/businesses", get(handlers::businesses::list_businesses))
        .route("/api/businesses/{id}", get(handlers::businesses::get_business))
        .route("/api/businesses/{id}/reviews", get(handlers::reviews::list_reviews))
        .route("/api/settings", get(handlers::settings::get_settings));

    // Rotas protegidas pelo middleware de autenticação.
    // As rotas administrativas e de vendedor ainda passam pelo guardião de
    // papel (RequireRole) dentro de cada handler.
    let protected_routes = Router::new()
        // Usuário
        .route("/api/users/me", get(handlers::auth::get_me))
        // Reservas
        .route("/api/bookings/service", post(handlers::bookings::create_booking))
        .route("/api/bookings", get(handlers::bookings::list_bookings))
        .route("/api/bookings/customer/me", get(handlers::bookings::my_bookings))
        .route("/api/bookings/{id}", get(handlers::bookings::get_booking))
        .route("/api/bookings/{id}/confirm", put(handlers::bookings::confirm_booking))
        .route("/api/bookings/{id}/complete", put(handlers::bookings::complete_booking))
        .route("/api/bookings/{id}/cancel", put(handlers::bookings::cancel_booking))
        // Negócios (área do vendedor + favoritos)
        .route("/api/businesses", post(handlers::businesses::register_business))
        .route("/api/businesses/mine", get(handlers::businesses::my_businesses))
        .route("/api/businesses/saved/me", get(handlers::businesses::list_saved_businesses))
        .route(
            "/api/businesses/{id}/save",
            post(handlers::businesses::save_business).delete(handlers::businesses::unsave_business),
        )
        .route("/api/businesses/{id}/reviews", post(handlers::reviews::create_review))
        // Repasses
        .route("/api/settlements/mine", get(handlers::settlements::my_settlements))
        // Notificações
        .route("/api/notifications", get(handlers::notifications::list_notifications))
        .route(
            "/api/notifications/{id}/read",
            put(handlers::notifications::mark_notification_read),
        )
        // Categorias e configuração (escrita é só admin)
        .route("/api/categories", post(handlers::businesses::create_category))
        .route("/api/settings", put(handlers::settings::update_settings))
        // Administração
        .route(
            "/api/admin/businesses/{id}/status",
            put(handlers::businesses::moderate_business),
        )
        .route(
            "/api/admin/bookings/{id}/payment",
            put(handlers::bookings::update_payment_status),
        )
        .route("/api/admin/settlements", get(handlers::settlements::list_settlements))
        .route(
            "/api/admin/settlements/{id}/status",
            put(handlers::settlements::update_settlement_status),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
