// src/db/review_repo.rs

use sqlx::{Executor, PgPool, Postgres, Row};
use uuid::Uuid;

use crate::{common::error::AppError, models::review::Review};

#[derive(Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        business_id: Uuid,
        customer_id: Uuid,
        rating: i32,
        comment: Option<&str>,
    ) -> Result<Review, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (business_id, customer_id, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(business_id)
        .bind(customer_id)
        .bind(rating)
        .bind(comment)
        .fetch_one(executor)
        .await?;

        Ok(review)
    }

    pub async fn list_for_business(&self, business_id: Uuid) -> Result<Vec<Review>, AppError> {
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE business_id = $1 ORDER BY created_at DESC",
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }

    // Média e total agregados para a vitrine do negócio.
    pub async fn summary_for_business(
        &self,
        business_id: Uuid,
    ) -> Result<(Option<f64>, i64), AppError> {
        let row = sqlx::query(
            r#"
            SELECT AVG(rating)::float8 AS average, COUNT(*) AS total
            FROM reviews
            WHERE business_id = $1
            "#,
        )
        .bind(business_id)
        .fetch_one(&self.pool)
        .await?;

        Ok((row.try_get("average")?, row.try_get("total")?))
    }
}
