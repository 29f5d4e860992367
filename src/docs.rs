// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::common::pagination::Paginated;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,

        // --- Users ---
        handlers::auth::get_me,

        // --- Bookings ---
        handlers::bookings::create_booking,
        handlers::bookings::list_bookings,
        handlers::bookings::my_bookings,
        handlers::bookings::get_booking,
        handlers::bookings::confirm_booking,
        handlers::bookings::complete_booking,
        handlers::bookings::cancel_booking,
        handlers::bookings::update_payment_status,

        // --- Businesses ---
        handlers::businesses::list_businesses,
        handlers::businesses::get_business,
        handlers::businesses::register_business,
        handlers::businesses::my_businesses,
        handlers::businesses::moderate_business,
        handlers::businesses::save_business,
        handlers::businesses::unsave_business,
        handlers::businesses::list_saved_businesses,
        handlers::businesses::list_categories,
        handlers::businesses::create_category,

        // --- Settlements ---
        handlers::settlements::list_settlements,
        handlers::settlements::my_settlements,
        handlers::settlements::update_settlement_status,

        // --- Notifications ---
        handlers::notifications::list_notifications,
        handlers::notifications::mark_notification_read,

        // --- Reviews ---
        handlers::reviews::create_review,
        handlers::reviews::list_reviews,

        // --- Settings ---
        handlers::settings::get_settings,
        handlers::settings::update_settings,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::UserRole,
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Bookings ---
            models::booking::BookingStatus,
            models::booking::PaymentStatus,
            models::booking::Booking,
            handlers::bookings::CreateBookingPayload,
            handlers::bookings::CancelBookingPayload,
            handlers::bookings::UpdatePaymentPayload,

            // --- Businesses ---
            models::business::BusinessStatus,
            models::business::Business,
            models::business::Category,
            handlers::businesses::CreateBusinessPayload,
            handlers::businesses::ModerateBusinessPayload,
            handlers::businesses::CreateCategoryPayload,

            // --- Settlements ---
            models::settlement::SettlementStatus,
            models::settlement::DateRange,
            models::settlement::Settlement,
            handlers::settlements::UpdateSettlementPayload,

            // --- Notifications ---
            models::notification::NotificationKind,
            models::notification::Notification,

            // --- Reviews ---
            models::review::Review,
            models::review::BusinessReviews,
            handlers::reviews::CreateReviewPayload,

            // --- Settings ---
            models::settings::WebsiteConfig,
            models::settings::UpdateWebsiteConfigRequest,

            // --- Envelopes paginados ---
            Paginated<models::booking::Booking>,
            Paginated<models::business::Business>,
            Paginated<models::settlement::Settlement>,
            Paginated<models::notification::Notification>,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Dados do Usuário e Perfil"),
        (name = "Bookings", description = "Ciclo de Vida das Reservas"),
        (name = "Businesses", description = "Vitrine, Registro e Moderação de Negócios"),
        (name = "Settlements", description = "Repasses aos Vendedores"),
        (name = "Notifications", description = "Caixa de Entrada de Notificações"),
        (name = "Reviews", description = "Avaliações de Negócios"),
        (name = "Categories", description = "Categorias de Serviços"),
        (name = "Settings", description = "Configuração Pública do Site")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
