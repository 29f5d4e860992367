// src/db/business_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::business::{Business, BusinessStatus, Category},
};

#[derive(Clone)]
pub struct BusinessRepository {
    pool: PgPool,
}

impl BusinessRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  NEGÓCIOS
    // =========================================================================

    pub async fn create_business<'e, E>(
        &self,
        executor: E,
        owner_id: Uuid,
        category_id: Uuid,
        name: &str,
        description: Option<&str>,
        address: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Business, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let business = sqlx::query_as::<_, Business>(
            r#"
            INSERT INTO businesses (owner_id, category_id, name, description, address, phone, email)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(category_id)
        .bind(name)
        .bind(description)
        .bind(address)
        .bind(phone)
        .bind(email)
        .fetch_one(executor)
        .await?;

        Ok(business)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Business>, AppError> {
        let business = sqlx::query_as::<_, Business>("SELECT * FROM businesses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(business)
    }

    // Vitrine pública: apenas negócios aprovados, com filtro por categoria
    // e busca por nome/endereço.
    pub async fn list_public(
        &self,
        category_id: Option<Uuid>,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Business>, AppError> {
        let businesses = sqlx::query_as::<_, Business>(
            r#"
            SELECT * FROM businesses
            WHERE status = 'approved'
              AND ($1::uuid IS NULL OR category_id = $1)
              AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%' OR address ILIKE '%' || $2 || '%')
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(category_id)
        .bind(search)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(businesses)
    }

    pub async fn count_public(
        &self,
        category_id: Option<Uuid>,
        search: Option<&str>,
    ) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM businesses
            WHERE status = 'approved'
              AND ($1::uuid IS NULL OR category_id = $1)
              AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%' OR address ILIKE '%' || $2 || '%')
            "#,
        )
        .bind(category_id)
        .bind(search)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    // O vendedor enxerga os próprios negócios em qualquer status.
    pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Business>, AppError> {
        let businesses = sqlx::query_as::<_, Business>(
            "SELECT * FROM businesses WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(businesses)
    }

    pub async fn update_status<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        status: BusinessStatus,
    ) -> Result<Option<Business>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let business = sqlx::query_as::<_, Business>(
            r#"
            UPDATE businesses
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(business)
    }

    // =========================================================================
    //  CATEGORIAS
    // =========================================================================

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }

    pub async fn find_category_by_id(&self, id: Uuid) -> Result<Option<Category>, AppError> {
        let category = sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(category)
    }

    pub async fn create_category<'e, E>(
        &self,
        executor: E,
        name: &str,
        slug: &str,
        icon: Option<&str>,
    ) -> Result<Category, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, slug, icon)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(slug)
        .bind(icon)
        .fetch_one(executor)
        .await?;

        Ok(category)
    }

    // =========================================================================
    //  FAVORITOS
    // =========================================================================

    pub async fn save_for_customer<'e, E>(
        &self,
        executor: E,
        customer_id: Uuid,
        business_id: Uuid,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // Salvar duas vezes é um no-op.
        sqlx::query(
            r#"
            INSERT INTO saved_businesses (customer_id, business_id)
            VALUES ($1, $2)
            ON CONFLICT (customer_id, business_id) DO NOTHING
            "#,
        )
        .bind(customer_id)
        .bind(business_id)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn unsave_for_customer<'e, E>(
        &self,
        executor: E,
        customer_id: Uuid,
        business_id: Uuid,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM saved_businesses WHERE customer_id = $1 AND business_id = $2")
            .bind(customer_id)
            .bind(business_id)
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn list_saved(&self, customer_id: Uuid) -> Result<Vec<Business>, AppError> {
        let businesses = sqlx::query_as::<_, Business>(
            r#"
            SELECT b.* FROM businesses b
            JOIN saved_businesses s ON s.business_id = b.id
            WHERE s.customer_id = $1
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(businesses)
    }
}
