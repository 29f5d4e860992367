// src/services/notification_service.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::NotificationRepository,
    models::{
        auth::{User, UserRole},
        notification::{Notification, NotificationKind},
    },
};

#[derive(Clone)]
pub struct NotificationService {
    repo: NotificationRepository,
    pool: PgPool,
}

impl NotificationService {
    pub fn new(repo: NotificationRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    // Grava na caixa de entrada do destinatário. Aceita um executor para
    // participar da mesma transação do efeito que a originou.
    pub async fn notify<'e, E>(
        &self,
        executor: E,
        recipient_id: Uuid,
        kind: NotificationKind,
        title: &str,
        message: &str,
        booking_id: Option<Uuid>,
    ) -> Result<Notification, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .create(executor, recipient_id, kind, title, message, booking_id)
            .await
    }

    pub async fn list_for(
        &self,
        requester: &User,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Notification>, i64), AppError> {
        let notifications = self
            .repo
            .list_for_recipient(requester.id, limit, offset)
            .await?;
        let total = self.repo.count_for_recipient(requester.id).await?;

        Ok((notifications, total))
    }

    // Marcar como lida: só o destinatário ou um admin.
    pub async fn mark_as_read(
        &self,
        id: Uuid,
        requester: &User,
    ) -> Result<Notification, AppError> {
        let notification = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotificationNotFound)?;

        if notification.recipient_id != requester.id && requester.role != UserRole::Admin {
            return Err(AppError::Forbidden);
        }

        self.repo.mark_as_read(&self.pool, id).await
    }
}
