// src/db/settings_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::settings::{UpdateWebsiteConfigRequest, WebsiteConfig},
};

#[derive(Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // A linha única é semeada pela migração; aqui só lemos e atualizamos.
    pub async fn get(&self) -> Result<WebsiteConfig, AppError> {
        let config =
            sqlx::query_as::<_, WebsiteConfig>("SELECT * FROM website_config WHERE id = TRUE")
                .fetch_one(&self.pool)
                .await?;

        Ok(config)
    }

    pub async fn update<'e, E>(
        &self,
        executor: E,
        payload: UpdateWebsiteConfigRequest,
    ) -> Result<WebsiteConfig, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let config = sqlx::query_as::<_, WebsiteConfig>(
            r#"
            UPDATE website_config
            SET site_name        = COALESCE($1, site_name),
                tagline          = COALESCE($2, tagline),
                contact_email    = COALESCE($3, contact_email),
                contact_phone    = COALESCE($4, contact_phone),
                address          = COALESCE($5, address),
                maintenance_mode = COALESCE($6, maintenance_mode),
                updated_at       = NOW()
            WHERE id = TRUE
            RETURNING *
            "#,
        )
        .bind(payload.site_name)
        .bind(payload.tagline)
        .bind(payload.contact_email)
        .bind(payload.contact_phone)
        .bind(payload.address)
        .bind(payload.maintenance_mode)
        .fetch_one(executor)
        .await?;

        Ok(config)
    }
}
