// src/services/settlement_service.rs

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{SettlementRepository, settlement_repo::SettlementFilter},
    models::{
        auth::User,
        settlement::{DateRange, Settlement, SettlementStatus},
    },
};

#[derive(Clone)]
pub struct SettlementService {
    repo: SettlementRepository,
    pool: PgPool,
}

impl SettlementService {
    pub fn new(repo: SettlementRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    // Listagem administrativa: status, janela de datas e busca textual.
    pub async fn list_admin(
        &self,
        status: Option<SettlementStatus>,
        date_range: Option<DateRange>,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Settlement>, i64), AppError> {
        let filter = SettlementFilter {
            status,
            since: date_range.map(|range| range.cutoff_from(Utc::now())),
            search,
            ..Default::default()
        };

        let settlements = self.repo.list(&filter, limit, offset).await?;
        let total = self.repo.count(&filter).await?;

        Ok((settlements, total))
    }

    // O vendedor só enxerga os próprios repasses.
    pub async fn list_for_seller(
        &self,
        seller: &User,
        status: Option<SettlementStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Settlement>, i64), AppError> {
        let filter = SettlementFilter {
            seller_id: Some(seller.id),
            status,
            ..Default::default()
        };

        let settlements = self.repo.list(&filter, limit, offset).await?;
        let total = self.repo.count(&filter).await?;

        Ok((settlements, total))
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: SettlementStatus,
        payment_reference: Option<&str>,
    ) -> Result<Settlement, AppError> {
        self.repo
            .update_status(&self.pool, id, status, payment_reference)
            .await?
            .ok_or(AppError::SettlementNotFound)
    }
}
