// src/models/booking.rs

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    // Tabela de transições permitidas do ciclo de vida:
    //   pending   -> confirmed | cancelled
    //   confirmed -> completed | cancelled
    // `completed` e `cancelled` são terminais.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, Completed)
                | (Confirmed, Cancelled)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

// Comissão fixa da plataforma: 15% do valor da reserva, em rúpias com
// duas casas decimais.
pub fn commission_for(amount: Decimal) -> Decimal {
    (amount * Decimal::new(15, 2)).round_dp(2)
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    pub business_id: Uuid,
    pub customer_id: Uuid,

    #[schema(example = "Wedding catering")]
    pub service: String,

    #[schema(value_type = String, format = Date, example = "2026-10-15")]
    pub event_date: NaiveDate,

    #[schema(example = "18:00")]
    pub event_time: String,

    #[schema(example = "MG Marg, Gangtok")]
    pub location: String,

    #[schema(example = 120)]
    pub guest_count: Option<i32>,

    pub special_requests: Option<String>,

    #[schema(example = "1000.00")]
    pub amount: Decimal,

    // Calculada na criação e imutável depois.
    #[schema(example = "150.00")]
    pub commission: Decimal,

    pub payment_status: PaymentStatus,
    pub status: BookingStatus,

    pub cancellation_reason: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commission_is_fifteen_percent() {
        assert_eq!(
            commission_for(Decimal::new(1000_00, 2)),
            Decimal::new(150_00, 2)
        );
        assert_eq!(commission_for(Decimal::new(1, 2)), Decimal::new(0, 2));
        assert_eq!(
            commission_for(Decimal::new(333_33, 2)),
            Decimal::new(50_00, 2)
        );
    }

    #[test]
    fn allowed_transitions_follow_the_table() {
        use BookingStatus::*;

        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Completed));
        assert!(Confirmed.can_transition_to(Cancelled));
    }

    #[test]
    fn illegal_transitions_are_rejected() {
        use BookingStatus::*;

        // Pular a confirmação não é permitido.
        assert!(!Pending.can_transition_to(Completed));

        // Estados terminais não saem do lugar.
        for next in [Pending, Confirmed, Completed, Cancelled] {
            assert!(!Completed.can_transition_to(next));
            assert!(!Cancelled.can_transition_to(next));
        }

        // Nada volta para pending, e auto-transições não existem.
        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Pending.can_transition_to(Pending));
        assert!(!Confirmed.can_transition_to(Confirmed));
    }

    #[test]
    fn terminal_states() {
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(!BookingStatus::Confirmed.is_terminal());
    }
}
