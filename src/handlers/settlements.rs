// src/handlers/settlements.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    common::{
        error::ApiError,
        pagination::{PageParams, Paginated},
    },
    config::AppState,
    middleware::{
        auth::AuthenticatedUser,
        i18n::Locale,
        rbac::{AdminOnly, RequireRole, SellerOnly},
    },
    models::settlement::{DateRange, Settlement, SettlementStatus},
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SettlementListQuery {
    pub status: Option<SettlementStatus>,

    // Janela "agora menos N dias": today/week/month/quarter/year.
    pub date_range: Option<DateRange>,

    #[param(example = "catering")]
    pub search: Option<String>,

    #[param(example = 1)]
    pub page: Option<i64>,

    #[param(example = 10)]
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettlementPayload {
    pub status: SettlementStatus,

    #[schema(example = "PAY-2026-000123")]
    pub payment_reference: Option<String>,
}

// GET /api/admin/settlements
#[utoipa::path(
    get,
    path = "/api/admin/settlements",
    tag = "Settlements",
    params(SettlementListQuery),
    responses(
        (status = 200, description = "Liquidações (visão administrativa)", body = Paginated<Settlement>),
        (status = 403, description = "Apenas admin")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_settlements(
    State(app_state): State<AppState>,
    locale: Locale,
    _admin: RequireRole<AdminOnly>,
    Query(query): Query<SettlementListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let params = PageParams {
        page: query.page,
        limit: query.limit,
    };

    let (settlements, total) = app_state
        .settlement_service
        .list_admin(
            query.status,
            query.date_range,
            query.search.as_deref(),
            params.limit(),
            params.offset(),
        )
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(Paginated::new(settlements, &params, total))))
}

// GET /api/settlements/mine
#[utoipa::path(
    get,
    path = "/api/settlements/mine",
    tag = "Settlements",
    params(SettlementListQuery),
    responses(
        (status = 200, description = "Liquidações do vendedor", body = Paginated<Settlement>),
        (status = 403, description = "Apenas vendedores")
    ),
    security(("api_jwt" = []))
)]
pub async fn my_settlements(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    _seller: RequireRole<SellerOnly>,
    Query(query): Query<SettlementListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let params = PageParams {
        page: query.page,
        limit: query.limit,
    };

    let (settlements, total) = app_state
        .settlement_service
        .list_for_seller(&user, query.status, params.limit(), params.offset())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(Paginated::new(settlements, &params, total))))
}

// PUT /api/admin/settlements/{id}/status
#[utoipa::path(
    put,
    path = "/api/admin/settlements/{id}/status",
    tag = "Settlements",
    params(("id" = Uuid, Path, description = "ID da liquidação")),
    request_body = UpdateSettlementPayload,
    responses(
        (status = 200, description = "Status da liquidação atualizado", body = Settlement),
        (status = 403, description = "Apenas admin"),
        (status = 404, description = "Liquidação não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_settlement_status(
    State(app_state): State<AppState>,
    locale: Locale,
    _admin: RequireRole<AdminOnly>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSettlementPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let settlement = app_state
        .settlement_service
        .update_status(id, payload.status, payload.payment_reference.as_deref())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(settlement)))
}
