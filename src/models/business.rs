// src/models/business.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums (Mapeando o Postgres) ---

// Fluxo de moderação: todo negócio nasce `pending` e só aparece nas
// listagens públicas (e aceita reservas) depois de `approved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "business_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BusinessStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
    Banned,
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    #[schema(example = "Plumber")]
    pub name: String,

    #[schema(example = "plumber")]
    pub slug: String,

    #[schema(example = "wrench")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440001")]
    pub id: Uuid,

    pub owner_id: Uuid,
    pub category_id: Uuid,

    #[schema(example = "Gangtok Catering Co.")]
    pub name: String,

    pub description: Option<String>,

    #[schema(example = "Tibet Road, Gangtok")]
    pub address: String,

    #[schema(example = "+91 98765 43210")]
    pub phone: Option<String>,

    #[schema(example = "contact@gangtokcatering.in")]
    pub email: Option<String>,

    pub status: BusinessStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
