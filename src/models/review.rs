// src/models/review.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    pub business_id: Uuid,
    pub customer_id: Uuid,

    #[schema(example = 5)]
    pub rating: i32,

    #[schema(example = "Great service, arrived on time.")]
    pub comment: Option<String>,

    pub created_at: DateTime<Utc>,
}

// Lista pública de avaliações de um negócio, com a média agregada.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessReviews {
    #[schema(example = 4.6)]
    pub average_rating: Option<f64>,

    #[schema(example = 12)]
    pub total: i64,

    pub reviews: Vec<Review>,
}
