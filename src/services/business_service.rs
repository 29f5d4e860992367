// src/services/business_service.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::BusinessRepository,
    models::{
        auth::User,
        business::{Business, BusinessStatus, Category},
    },
};

#[derive(Clone)]
pub struct BusinessService {
    repo: BusinessRepository,
    pool: PgPool,
}

impl BusinessService {
    pub fn new(repo: BusinessRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    // --- NEGÓCIOS ---

    // Todo negócio nasce `pending` e espera a moderação do admin.
    pub async fn register_business(
        &self,
        owner: &User,
        category_id: Uuid,
        name: &str,
        description: Option<&str>,
        address: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Business, AppError> {
        self.repo
            .find_category_by_id(category_id)
            .await?
            .ok_or(AppError::CategoryNotFound)?;

        self.repo
            .create_business(
                &self.pool,
                owner.id,
                category_id,
                name,
                description,
                address,
                phone,
                email,
            )
            .await
    }

    pub async fn list_public(
        &self,
        category_id: Option<Uuid>,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Business>, i64), AppError> {
        let businesses = self
            .repo
            .list_public(category_id, search, limit, offset)
            .await?;
        let total = self.repo.count_public(category_id, search).await?;

        Ok((businesses, total))
    }

    // A vitrine pública não revela negócios fora de `approved`.
    pub async fn get_approved(&self, id: Uuid) -> Result<Business, AppError> {
        let business = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::BusinessNotFound)?;

        if business.status != BusinessStatus::Approved {
            return Err(AppError::BusinessNotFound);
        }

        Ok(business)
    }

    pub async fn list_mine(&self, owner: &User) -> Result<Vec<Business>, AppError> {
        self.repo.list_by_owner(owner.id).await
    }

    // Moderação: sobrescrita direta do rótulo de status, sem tabela de
    // transições (pending/under_review/approved/rejected/banned).
    pub async fn moderate(&self, id: Uuid, status: BusinessStatus) -> Result<Business, AppError> {
        self.repo
            .update_status(&self.pool, id, status)
            .await?
            .ok_or(AppError::BusinessNotFound)
    }

    // --- CATEGORIAS ---

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.repo.list_categories().await
    }

    pub async fn create_category(
        &self,
        name: &str,
        slug: &str,
        icon: Option<&str>,
    ) -> Result<Category, AppError> {
        self.repo.create_category(&self.pool, name, slug, icon).await
    }

    // --- FAVORITOS ---

    pub async fn save_business(&self, customer: &User, business_id: Uuid) -> Result<(), AppError> {
        // Só faz sentido salvar o que está visível na vitrine.
        self.get_approved(business_id).await?;

        self.repo
            .save_for_customer(&self.pool, customer.id, business_id)
            .await
    }

    pub async fn unsave_business(
        &self,
        customer: &User,
        business_id: Uuid,
    ) -> Result<(), AppError> {
        self.repo
            .unsave_for_customer(&self.pool, customer.id, business_id)
            .await
    }

    pub async fn list_saved(&self, customer: &User) -> Result<Vec<Business>, AppError> {
        self.repo.list_saved(customer.id).await
    }
}
