// src/models/settlement.rs

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums (Mapeando o Postgres) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "settlement_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SettlementStatus {
    Pending,
    Processing,
    Completed,
}

// Janela de datas das listagens administrativas, sempre "agora menos N dias".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    Today,
    Week,
    Month,
    Quarter,
    Year,
}

impl DateRange {
    pub fn days(self) -> i64 {
        match self {
            DateRange::Today => 1,
            DateRange::Week => 7,
            DateRange::Month => 30,
            DateRange::Quarter => 90,
            DateRange::Year => 365,
        }
    }

    pub fn cutoff_from(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.days())
    }
}

// O repasse ao vendedor fica disponível 4 dias após a conclusão da reserva.
pub const SETTLEMENT_DELAY_DAYS: i64 = 4;

pub fn settlement_date_from(completed_at: DateTime<Utc>) -> DateTime<Utc> {
    completed_at + Duration::days(SETTLEMENT_DELAY_DAYS)
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    // No máximo uma liquidação por reserva (chave única no banco).
    pub booking_id: Uuid,
    pub business_id: Uuid,
    pub seller_id: Uuid,
    pub customer_id: Uuid,

    #[schema(example = "1000.00")]
    pub gross_amount: Decimal,

    #[schema(example = "150.00")]
    pub commission_amount: Decimal,

    #[schema(example = "850.00")]
    pub net_amount: Decimal,

    pub status: SettlementStatus,

    pub settlement_date: DateTime<Utc>,

    #[schema(example = "PAY-2026-000123")]
    pub payment_reference: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_range_windows() {
        assert_eq!(DateRange::Today.days(), 1);
        assert_eq!(DateRange::Week.days(), 7);
        assert_eq!(DateRange::Month.days(), 30);
        assert_eq!(DateRange::Quarter.days(), 90);
        assert_eq!(DateRange::Year.days(), 365);

        let now = Utc.with_ymd_and_hms(2026, 8, 10, 12, 0, 0).unwrap();
        assert_eq!(
            DateRange::Week.cutoff_from(now),
            Utc.with_ymd_and_hms(2026, 8, 3, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn settlement_date_is_four_days_after_completion() {
        let completed = Utc.with_ymd_and_hms(2026, 8, 10, 9, 30, 0).unwrap();
        assert_eq!(
            settlement_date_from(completed),
            Utc.with_ymd_and_hms(2026, 8, 14, 9, 30, 0).unwrap()
        );
    }

    #[test]
    fn date_range_parses_from_query_values() {
        let parsed: DateRange = serde_json::from_str("\"quarter\"").unwrap();
        assert_eq!(parsed, DateRange::Quarter);
    }
}
