// src/handlers/reviews.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::review::{BusinessReviews, Review},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewPayload {
    #[validate(range(min = 1, max = 5, message = "A nota deve estar entre 1 e 5"))]
    #[schema(example = 5)]
    pub rating: i32,

    #[schema(example = "Great service, arrived on time.")]
    pub comment: Option<String>,
}

// POST /api/businesses/{id}/reviews
#[utoipa::path(
    post,
    path = "/api/businesses/{id}/reviews",
    tag = "Reviews",
    params(("id" = Uuid, Path, description = "ID do negócio")),
    request_body = CreateReviewPayload,
    responses(
        (status = 201, description = "Avaliação criada", body = Review),
        (status = 404, description = "Negócio não encontrado ou não aprovado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_review(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(business_id): Path<Uuid>,
    Json(payload): Json<CreateReviewPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    // Só negócios visíveis na vitrine recebem avaliações.
    app_state
        .business_service
        .get_approved(business_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let review = app_state
        .review_repo
        .create(
            &app_state.db_pool,
            business_id,
            user.id,
            payload.rating,
            payload.comment.as_deref(),
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(review)))
}

// GET /api/businesses/{id}/reviews
#[utoipa::path(
    get,
    path = "/api/businesses/{id}/reviews",
    tag = "Reviews",
    params(("id" = Uuid, Path, description = "ID do negócio")),
    responses(
        (status = 200, description = "Avaliações e média do negócio", body = BusinessReviews),
        (status = 404, description = "Negócio não encontrado ou não aprovado")
    )
)]
pub async fn list_reviews(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(business_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .business_service
        .get_approved(business_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let reviews = app_state
        .review_repo
        .list_for_business(business_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let (average_rating, total) = app_state
        .review_repo
        .summary_for_business(business_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((
        StatusCode::OK,
        Json(BusinessReviews {
            average_rating,
            total,
            reviews,
        }),
    ))
}
