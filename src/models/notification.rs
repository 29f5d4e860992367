// src/models/notification.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "notification_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Booking,
    Settlement,
    General,
}

// Caixa de entrada em banco: nenhum canal externo é acionado.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    pub recipient_id: Uuid,

    pub kind: NotificationKind,

    #[schema(example = "Booking confirmed")]
    pub title: String,

    #[schema(example = "Your booking for Wedding catering is now confirmed.")]
    pub message: String,

    pub booking_id: Option<Uuid>,

    pub is_read: bool,

    pub created_at: DateTime<Utc>,
}
