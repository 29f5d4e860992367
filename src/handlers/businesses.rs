// src/handlers/businesses.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        pagination::{PageParams, Paginated},
    },
    config::AppState,
    middleware::{
        auth::AuthenticatedUser,
        i18n::Locale,
        rbac::{AdminOnly, RequireRole, SellerOnly},
    },
    models::business::{Business, BusinessStatus, Category},
};

// =============================================================================
//  PAYLOADS
// =============================================================================

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessPayload {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub category_id: Uuid,

    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    #[schema(example = "Gangtok Catering Co.")]
    pub name: String,

    pub description: Option<String>,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Tibet Road, Gangtok")]
    pub address: String,

    pub phone: Option<String>,

    #[validate(email(message = "invalid_email"))]
    #[schema(example = "contact@gangtokcatering.in")]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModerateBusinessPayload {
    pub status: BusinessStatus,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryPayload {
    #[validate(length(min = 2, message = "O nome deve ter no mínimo 2 caracteres"))]
    #[schema(example = "Plumber")]
    pub name: String,

    #[validate(length(min = 2, message = "O slug deve ter no mínimo 2 caracteres"))]
    #[schema(example = "plumber")]
    pub slug: String,

    #[schema(example = "wrench")]
    pub icon: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct BusinessListQuery {
    pub category: Option<Uuid>,

    #[param(example = "catering")]
    pub search: Option<String>,

    #[param(example = 1)]
    pub page: Option<i64>,

    #[param(example = 10)]
    pub limit: Option<i64>,
}

// =============================================================================
//  VITRINE PÚBLICA
// =============================================================================

// GET /api/businesses
#[utoipa::path(
    get,
    path = "/api/businesses",
    tag = "Businesses",
    params(BusinessListQuery),
    responses(
        (status = 200, description = "Negócios aprovados", body = Paginated<Business>)
    )
)]
pub async fn list_businesses(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<BusinessListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let params = PageParams {
        page: query.page,
        limit: query.limit,
    };

    let (businesses, total) = app_state
        .business_service
        .list_public(
            query.category,
            query.search.as_deref(),
            params.limit(),
            params.offset(),
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(Paginated::new(businesses, &params, total))))
}

// GET /api/businesses/{id}
#[utoipa::path(
    get,
    path = "/api/businesses/{id}",
    tag = "Businesses",
    params(("id" = Uuid, Path, description = "ID do negócio")),
    responses(
        (status = 200, description = "Detalhe do negócio", body = Business),
        (status = 404, description = "Negócio não encontrado ou não aprovado")
    )
)]
pub async fn get_business(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let business = app_state
        .business_service
        .get_approved(id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(business)))
}

// =============================================================================
//  ÁREA DO VENDEDOR
// =============================================================================

// POST /api/businesses
#[utoipa::path(
    post,
    path = "/api/businesses",
    tag = "Businesses",
    request_body = CreateBusinessPayload,
    responses(
        (status = 201, description = "Negócio registrado (aguardando moderação)", body = Business),
        (status = 403, description = "Apenas vendedores"),
        (status = 404, description = "Categoria não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn register_business(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    _seller: RequireRole<SellerOnly>,
    Json(payload): Json<CreateBusinessPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let business = app_state
        .business_service
        .register_business(
            &user,
            payload.category_id,
            &payload.name,
            payload.description.as_deref(),
            &payload.address,
            payload.phone.as_deref(),
            payload.email.as_deref(),
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(business)))
}

// GET /api/businesses/mine
#[utoipa::path(
    get,
    path = "/api/businesses/mine",
    tag = "Businesses",
    responses(
        (status = 200, description = "Negócios do vendedor, em qualquer status", body = Vec<Business>)
    ),
    security(("api_jwt" = []))
)]
pub async fn my_businesses(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    _seller: RequireRole<SellerOnly>,
) -> Result<impl IntoResponse, ApiError> {
    let businesses = app_state
        .business_service
        .list_mine(&user)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(businesses)))
}

// =============================================================================
//  MODERAÇÃO (ADMIN)
// =============================================================================

// PUT /api/admin/businesses/{id}/status
#[utoipa::path(
    put,
    path = "/api/admin/businesses/{id}/status",
    tag = "Businesses",
    params(("id" = Uuid, Path, description = "ID do negócio")),
    request_body = ModerateBusinessPayload,
    responses(
        (status = 200, description = "Status de moderação aplicado", body = Business),
        (status = 403, description = "Apenas admin"),
        (status = 404, description = "Negócio não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn moderate_business(
    State(app_state): State<AppState>,
    locale: Locale,
    _admin: RequireRole<AdminOnly>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ModerateBusinessPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let business = app_state
        .business_service
        .moderate(id, payload.status)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(business)))
}

// =============================================================================
//  FAVORITOS
// =============================================================================

// POST /api/businesses/{id}/save
#[utoipa::path(
    post,
    path = "/api/businesses/{id}/save",
    tag = "Businesses",
    params(("id" = Uuid, Path, description = "ID do negócio")),
    responses(
        (status = 204, description = "Negócio salvo"),
        (status = 404, description = "Negócio não encontrado ou não aprovado")
    ),
    security(("api_jwt" = []))
)]
pub async fn save_business(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .business_service
        .save_business(&user, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// DELETE /api/businesses/{id}/save
#[utoipa::path(
    delete,
    path = "/api/businesses/{id}/save",
    tag = "Businesses",
    params(("id" = Uuid, Path, description = "ID do negócio")),
    responses((status = 204, description = "Negócio removido dos salvos")),
    security(("api_jwt" = []))
)]
pub async fn unsave_business(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .business_service
        .unsave_business(&user, id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}

// GET /api/businesses/saved/me
#[utoipa::path(
    get,
    path = "/api/businesses/saved/me",
    tag = "Businesses",
    responses(
        (status = 200, description = "Negócios salvos pelo usuário", body = Vec<Business>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_saved_businesses(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let businesses = app_state
        .business_service
        .list_saved(&user)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(businesses)))
}

// =============================================================================
//  CATEGORIAS
// =============================================================================

// GET /api/categories
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Categories",
    responses((status = 200, description = "Lista de categorias", body = Vec<Category>))
)]
pub async fn list_categories(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let categories = app_state
        .business_service
        .list_categories()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(categories)))
}

// POST /api/categories
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Categories",
    request_body = CreateCategoryPayload,
    responses(
        (status = 201, description = "Categoria criada", body = Category),
        (status = 403, description = "Apenas admin")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_category(
    State(app_state): State<AppState>,
    locale: Locale,
    _admin: RequireRole<AdminOnly>,
    Json(payload): Json<CreateCategoryPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let category = app_state
        .business_service
        .create_category(&payload.name, &payload.slug, payload.icon.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(category)))
}
