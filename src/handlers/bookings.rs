// src/handlers/bookings.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    common::{
        error::{ApiError, AppError},
        pagination::{PageParams, Paginated},
    },
    config::AppState,
    middleware::{
        auth::AuthenticatedUser,
        i18n::Locale,
        rbac::{AdminOnly, RequireRole},
    },
    models::booking::{Booking, BookingStatus, PaymentStatus},
};

// =============================================================================
//  PAYLOADS
// =============================================================================

fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount <= Decimal::ZERO {
        let mut error = ValidationError::new("amount");
        error.message = Some("O valor deve ser maior que zero.".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingPayload {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440001")]
    pub business_id: Uuid,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Wedding catering")]
    pub service: String,

    #[schema(value_type = String, format = Date, example = "2026-10-15")]
    pub event_date: NaiveDate,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "18:00")]
    pub event_time: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "MG Marg, Gangtok")]
    pub location: String,

    #[schema(example = 120)]
    pub guest_count: Option<i32>,

    pub special_requests: Option<String>,

    #[validate(custom(function = validate_amount))]
    #[schema(example = "1000.00")]
    pub amount: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingPayload {
    #[schema(example = "Event was postponed")]
    pub cancellation_reason: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentPayload {
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    pub status: Option<BookingStatus>,

    #[param(example = "catering")]
    pub search: Option<String>,

    #[param(example = 1)]
    pub page: Option<i64>,

    #[param(example = 10)]
    pub limit: Option<i64>,
}

impl BookingListQuery {
    fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            limit: self.limit,
        }
    }
}

// =============================================================================
//  CRIAÇÃO E CONSULTA
// =============================================================================

// POST /api/bookings/service
#[utoipa::path(
    post,
    path = "/api/bookings/service",
    tag = "Bookings",
    request_body = CreateBookingPayload,
    responses(
        (status = 201, description = "Reserva criada", body = Booking),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Negócio não encontrado"),
        (status = 409, description = "Negócio não aprovado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_booking(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateBookingPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let booking = app_state
        .booking_service
        .create_booking(
            &user,
            payload.business_id,
            &payload.service,
            payload.event_date,
            &payload.event_time,
            &payload.location,
            payload.guest_count,
            payload.special_requests.as_deref(),
            payload.amount,
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(booking)))
}

// GET /api/bookings
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "Bookings",
    params(BookingListQuery),
    responses(
        (status = 200, description = "Reservas visíveis para o solicitante", body = Paginated<Booking>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_bookings(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Query(query): Query<BookingListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let params = query.page_params();

    let (bookings, total) = app_state
        .booking_service
        .list(
            &user,
            query.status,
            query.search.as_deref(),
            params.limit(),
            params.offset(),
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(Paginated::new(bookings, &params, total))))
}

// GET /api/bookings/customer/me
#[utoipa::path(
    get,
    path = "/api/bookings/customer/me",
    tag = "Bookings",
    params(BookingListQuery),
    responses(
        (status = 200, description = "Reservas do próprio usuário", body = Paginated<Booking>)
    ),
    security(("api_jwt" = []))
)]
pub async fn my_bookings(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Query(query): Query<BookingListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let params = query.page_params();

    let (bookings, total) = app_state
        .booking_service
        .list_own(&user, query.status, params.limit(), params.offset())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(Paginated::new(bookings, &params, total))))
}

// GET /api/bookings/{id}
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID da reserva")),
    responses(
        (status = 200, description = "Detalhe da reserva", body = Booking),
        (status = 403, description = "Reserva de outro usuário"),
        (status = 404, description = "Reserva não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_booking(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let booking = app_state
        .booking_service
        .get(id, &user)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(booking)))
}

// =============================================================================
//  TRANSIÇÕES DO CICLO DE VIDA
// =============================================================================

// PUT /api/bookings/{id}/confirm
#[utoipa::path(
    put,
    path = "/api/bookings/{id}/confirm",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID da reserva")),
    responses(
        (status = 200, description = "Reserva confirmada", body = Booking),
        (status = 422, description = "Transição não permitida")
    ),
    security(("api_jwt" = []))
)]
pub async fn confirm_booking(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let booking = app_state
        .booking_service
        .transition(id, BookingStatus::Confirmed, None, &user)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(booking)))
}

// PUT /api/bookings/{id}/complete
#[utoipa::path(
    put,
    path = "/api/bookings/{id}/complete",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID da reserva")),
    responses(
        (status = 200, description = "Reserva concluída (gera liquidação se paga)", body = Booking),
        (status = 422, description = "Transição não permitida")
    ),
    security(("api_jwt" = []))
)]
pub async fn complete_booking(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let booking = app_state
        .booking_service
        .transition(id, BookingStatus::Completed, None, &user)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(booking)))
}

// PUT /api/bookings/{id}/cancel
#[utoipa::path(
    put,
    path = "/api/bookings/{id}/cancel",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID da reserva")),
    request_body = CancelBookingPayload,
    responses(
        (status = 200, description = "Reserva cancelada", body = Booking),
        (status = 400, description = "Motivo de cancelamento ausente"),
        (status = 422, description = "Transição não permitida")
    ),
    security(("api_jwt" = []))
)]
pub async fn cancel_booking(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CancelBookingPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let booking = app_state
        .booking_service
        .transition(
            id,
            BookingStatus::Cancelled,
            payload.cancellation_reason.as_deref(),
            &user,
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(booking)))
}

// PUT /api/admin/bookings/{id}/payment
//
// Substituto administrativo do callback do gateway de pagamento: marca a
// reserva como paga/estornada fora do ciclo de vida.
#[utoipa::path(
    put,
    path = "/api/admin/bookings/{id}/payment",
    tag = "Bookings",
    params(("id" = Uuid, Path, description = "ID da reserva")),
    request_body = UpdatePaymentPayload,
    responses(
        (status = 200, description = "Status de pagamento atualizado", body = Booking),
        (status = 403, description = "Apenas admin"),
        (status = 404, description = "Reserva não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_payment_status(
    State(app_state): State<AppState>,
    locale: Locale,
    _admin: RequireRole<AdminOnly>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePaymentPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let booking = app_state
        .booking_service
        .set_payment_status(id, payload.payment_status)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(booking)))
}
