// src/db/booking_repo.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::booking::{Booking, BookingStatus, PaymentStatus},
};

// Filtros de listagem: o escopo (cliente dono ou vendedor dono do negócio)
// vem do serviço; status e busca vêm da query string.
#[derive(Debug, Default)]
pub struct BookingFilter<'a> {
    pub customer_id: Option<Uuid>,
    pub owner_id: Option<Uuid>,
    pub status: Option<BookingStatus>,
    pub search: Option<&'a str>,
}

#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        business_id: Uuid,
        customer_id: Uuid,
        service: &str,
        event_date: NaiveDate,
        event_time: &str,
        location: &str,
        guest_count: Option<i32>,
        special_requests: Option<&str>,
        amount: Decimal,
        commission: Decimal,
    ) -> Result<Booking, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                business_id, customer_id, service, event_date, event_time,
                location, guest_count, special_requests, amount, commission
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(business_id)
        .bind(customer_id)
        .bind(service)
        .bind(event_date)
        .bind(event_time)
        .bind(location)
        .bind(guest_count)
        .bind(special_requests)
        .bind(amount)
        .bind(commission)
        .fetch_one(executor)
        .await?;

        Ok(booking)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Booking>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(booking)
    }

    pub async fn list(
        &self,
        filter: &BookingFilter<'_>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT b.* FROM bookings b
            WHERE ($1::uuid IS NULL OR b.customer_id = $1)
              AND ($2::uuid IS NULL OR b.business_id IN (SELECT id FROM businesses WHERE owner_id = $2))
              AND ($3::booking_status IS NULL OR b.status = $3)
              AND ($4::text IS NULL OR b.service ILIKE '%' || $4 || '%' OR b.location ILIKE '%' || $4 || '%')
            ORDER BY b.created_at DESC
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(filter.customer_id)
        .bind(filter.owner_id)
        .bind(filter.status)
        .bind(filter.search)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    pub async fn count(&self, filter: &BookingFilter<'_>) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM bookings b
            WHERE ($1::uuid IS NULL OR b.customer_id = $1)
              AND ($2::uuid IS NULL OR b.business_id IN (SELECT id FROM businesses WHERE owner_id = $2))
              AND ($3::booking_status IS NULL OR b.status = $3)
              AND ($4::text IS NULL OR b.service ILIKE '%' || $4 || '%' OR b.location ILIKE '%' || $4 || '%')
            "#,
        )
        .bind(filter.customer_id)
        .bind(filter.owner_id)
        .bind(filter.status)
        .bind(filter.search)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    // A comissão nunca é tocada aqui: é calculada na criação e imutável.
    pub async fn update_status<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        status: BookingStatus,
        cancellation_reason: Option<&str>,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<Booking, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET status = $1,
                cancellation_reason = COALESCE($2, cancellation_reason),
                completed_at = COALESCE($3, completed_at),
                updated_at = NOW()
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(cancellation_reason)
        .bind(completed_at)
        .bind(id)
        .fetch_one(executor)
        .await?;

        Ok(booking)
    }

    // Gancho do fluxo de pagamento (no original, o gateway marca a reserva
    // como paga fora do ciclo de vida).
    pub async fn set_payment_status<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        payment_status: PaymentStatus,
    ) -> Result<Option<Booking>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET payment_status = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(payment_status)
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(booking)
    }
}
