// src/db/settlement_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::settlement::{Settlement, SettlementStatus},
};

#[derive(Debug, Default)]
pub struct SettlementFilter<'a> {
    pub seller_id: Option<Uuid>,
    pub status: Option<SettlementStatus>,
    pub since: Option<DateTime<Utc>>,
    pub search: Option<&'a str>,
}

#[derive(Clone)]
pub struct SettlementRepository {
    pool: PgPool,
}

impl SettlementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Inserção idempotente: a chave única em booking_id garante no máximo
    // uma liquidação por reserva. Num conflito nada é inserido e o chamador
    // recebe None.
    pub async fn create_for_booking<'e, E>(
        &self,
        executor: E,
        booking_id: Uuid,
        business_id: Uuid,
        seller_id: Uuid,
        customer_id: Uuid,
        gross_amount: Decimal,
        commission_amount: Decimal,
        net_amount: Decimal,
        settlement_date: DateTime<Utc>,
    ) -> Result<Option<Settlement>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let settlement = sqlx::query_as::<_, Settlement>(
            r#"
            INSERT INTO settlements (
                booking_id, business_id, seller_id, customer_id,
                gross_amount, commission_amount, net_amount, settlement_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (booking_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(booking_id)
        .bind(business_id)
        .bind(seller_id)
        .bind(customer_id)
        .bind(gross_amount)
        .bind(commission_amount)
        .bind(net_amount)
        .bind(settlement_date)
        .fetch_optional(executor)
        .await?;

        Ok(settlement)
    }

    // A busca textual cobre o nome do serviço reservado e a referência de
    // pagamento do repasse.
    pub async fn list(
        &self,
        filter: &SettlementFilter<'_>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Settlement>, AppError> {
        let settlements = sqlx::query_as::<_, Settlement>(
            r#"
            SELECT s.* FROM settlements s
            JOIN bookings b ON b.id = s.booking_id
            WHERE ($1::uuid IS NULL OR s.seller_id = $1)
              AND ($2::settlement_status IS NULL OR s.status = $2)
              AND ($3::timestamptz IS NULL OR s.settlement_date >= $3)
              AND ($4::text IS NULL OR b.service ILIKE '%' || $4 || '%' OR s.payment_reference ILIKE '%' || $4 || '%')
            ORDER BY s.settlement_date DESC
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(filter.seller_id)
        .bind(filter.status)
        .bind(filter.since)
        .bind(filter.search)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(settlements)
    }

    pub async fn count(&self, filter: &SettlementFilter<'_>) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM settlements s
            JOIN bookings b ON b.id = s.booking_id
            WHERE ($1::uuid IS NULL OR s.seller_id = $1)
              AND ($2::settlement_status IS NULL OR s.status = $2)
              AND ($3::timestamptz IS NULL OR s.settlement_date >= $3)
              AND ($4::text IS NULL OR b.service ILIKE '%' || $4 || '%' OR s.payment_reference ILIKE '%' || $4 || '%')
            "#,
        )
        .bind(filter.seller_id)
        .bind(filter.status)
        .bind(filter.since)
        .bind(filter.search)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    // Sobrescrita direta do status, sem tabela de transições (o fluxo
    // administrativo de repasses é um rótulo, não uma máquina de estados).
    pub async fn update_status<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        status: SettlementStatus,
        payment_reference: Option<&str>,
    ) -> Result<Option<Settlement>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let settlement = sqlx::query_as::<_, Settlement>(
            r#"
            UPDATE settlements
            SET status = $1,
                payment_reference = COALESCE($2, payment_reference),
                updated_at = NOW()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(payment_reference)
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(settlement)
    }
}
