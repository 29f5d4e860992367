// src/services/booking_service.rs

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{
        BookingRepository, BusinessRepository, SettlementRepository,
        booking_repo::BookingFilter,
    },
    models::{
        auth::{User, UserRole},
        booking::{Booking, BookingStatus, PaymentStatus, commission_for},
        business::BusinessStatus,
        notification::NotificationKind,
        settlement::settlement_date_from,
    },
    services::notification_service::NotificationService,
};

#[derive(Clone)]
pub struct BookingService {
    repo: BookingRepository,
    business_repo: BusinessRepository,
    settlement_repo: SettlementRepository,
    notification_service: NotificationService,
    pool: PgPool,
}

impl BookingService {
    pub fn new(
        repo: BookingRepository,
        business_repo: BusinessRepository,
        settlement_repo: SettlementRepository,
        notification_service: NotificationService,
        pool: PgPool,
    ) -> Self {
        Self {
            repo,
            business_repo,
            settlement_repo,
            notification_service,
            pool,
        }
    }

    // --- CRIAÇÃO ---

    pub async fn create_booking(
        &self,
        customer: &User,
        business_id: Uuid,
        service: &str,
        event_date: NaiveDate,
        event_time: &str,
        location: &str,
        guest_count: Option<i32>,
        special_requests: Option<&str>,
        amount: Decimal,
    ) -> Result<Booking, AppError> {
        // Só negócios aprovados aceitam reservas.
        let business = self
            .business_repo
            .find_by_id(business_id)
            .await?
            .ok_or(AppError::BusinessNotFound)?;

        if business.status != BusinessStatus::Approved {
            return Err(AppError::BusinessNotApproved);
        }

        // Comissão fixa de 15%, congelada no momento da criação.
        let commission = commission_for(amount);

        let mut tx = self.pool.begin().await?;

        let booking = self
            .repo
            .create(
                &mut *tx,
                business_id,
                customer.id,
                service,
                event_date,
                event_time,
                location,
                guest_count,
                special_requests,
                amount,
                commission,
            )
            .await?;

        // Avisa o dono do negócio na mesma transação.
        self.notification_service
            .notify(
                &mut *tx,
                business.owner_id,
                NotificationKind::Booking,
                "New booking request",
                &format!(
                    "New booking for {} on {} at {}.",
                    booking.service, booking.event_date, booking.event_time
                ),
                Some(booking.id),
            )
            .await?;

        tx.commit().await?;

        Ok(booking)
    }

    // --- TRANSIÇÃO DE STATUS ---

    // Aplica a tabela de transições e, na conclusão de uma reserva já paga,
    // gera a liquidação do vendedor dentro da mesma transação.
    pub async fn transition(
        &self,
        booking_id: Uuid,
        new_status: BookingStatus,
        reason: Option<&str>,
        requester: &User,
    ) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await?;

        let booking = self
            .repo
            .find_by_id(&mut *tx, booking_id)
            .await?
            .ok_or(AppError::BookingNotFound)?;

        // Autorização: o cliente dono da reserva ou um admin.
        if booking.customer_id != requester.id && requester.role != UserRole::Admin {
            return Err(AppError::Forbidden);
        }

        if !booking.status.can_transition_to(new_status) {
            return Err(AppError::InvalidStatusTransition {
                from: booking.status,
                to: new_status,
            });
        }

        // O motivo é persistido exatamente como veio; só a presença é checada.
        let reason = reason.filter(|r| !r.trim().is_empty());
        if new_status == BookingStatus::Cancelled
            && reason.is_none()
            && requester.role != UserRole::Admin
        {
            return Err(AppError::CancellationReasonRequired);
        }

        let completed_at = (new_status == BookingStatus::Completed).then(Utc::now);

        let updated = self
            .repo
            .update_status(&mut *tx, booking_id, new_status, reason, completed_at)
            .await?;

        // Conclusão de reserva paga gera exatamente uma liquidação. A chave
        // única em booking_id segura chamadas concorrentes.
        if new_status == BookingStatus::Completed
            && booking.payment_status == PaymentStatus::Paid
        {
            let business = self
                .business_repo
                .find_by_id(booking.business_id)
                .await?
                .ok_or(AppError::BusinessNotFound)?;

            let completed_at = completed_at.unwrap_or_else(Utc::now);
            let created = self
                .settlement_repo
                .create_for_booking(
                    &mut *tx,
                    booking.id,
                    booking.business_id,
                    business.owner_id,
                    booking.customer_id,
                    booking.amount,
                    booking.commission,
                    booking.amount - booking.commission,
                    settlement_date_from(completed_at),
                )
                .await?;

            if created.is_none() {
                tracing::warn!("Liquidação já existia para a reserva {}", booking.id);
            }
        }

        // O cliente é sempre notificado da mudança.
        let (title, message) = match new_status {
            BookingStatus::Confirmed => (
                "Booking confirmed",
                format!("Your booking for {} is now confirmed.", updated.service),
            ),
            BookingStatus::Completed => (
                "Booking completed",
                format!("Your booking for {} has been completed.", updated.service),
            ),
            BookingStatus::Cancelled => (
                "Booking cancelled",
                format!("Your booking for {} was cancelled.", updated.service),
            ),
            BookingStatus::Pending => (
                "Booking updated",
                format!("Your booking for {} was updated.", updated.service),
            ),
        };

        self.notification_service
            .notify(
                &mut *tx,
                updated.customer_id,
                NotificationKind::Booking,
                title,
                &message,
                Some(updated.id),
            )
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    // --- CONSULTAS ---

    // Admin enxerga tudo; cliente só as próprias reservas; vendedor as
    // reservas dos negócios que possui (projeção filtrada, não um segundo
    // vocabulário de status).
    pub async fn list(
        &self,
        requester: &User,
        status: Option<BookingStatus>,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Booking>, i64), AppError> {
        let filter = match requester.role {
            UserRole::Admin => BookingFilter {
                status,
                search,
                ..Default::default()
            },
            UserRole::Customer => BookingFilter {
                customer_id: Some(requester.id),
                status,
                search,
                ..Default::default()
            },
            UserRole::Seller => BookingFilter {
                owner_id: Some(requester.id),
                status,
                search,
                ..Default::default()
            },
        };

        let bookings = self.repo.list(&filter, limit, offset).await?;
        let total = self.repo.count(&filter).await?;

        Ok((bookings, total))
    }

    // Atalho do painel do cliente: sempre as reservas do próprio usuário,
    // independente do papel.
    pub async fn list_own(
        &self,
        requester: &User,
        status: Option<BookingStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Booking>, i64), AppError> {
        let filter = BookingFilter {
            customer_id: Some(requester.id),
            status,
            ..Default::default()
        };

        let bookings = self.repo.list(&filter, limit, offset).await?;
        let total = self.repo.count(&filter).await?;

        Ok((bookings, total))
    }

    pub async fn get(&self, booking_id: Uuid, requester: &User) -> Result<Booking, AppError> {
        let booking = self
            .repo
            .find_by_id(&self.pool, booking_id)
            .await?
            .ok_or(AppError::BookingNotFound)?;

        let allowed = match requester.role {
            UserRole::Admin => true,
            UserRole::Customer => booking.customer_id == requester.id,
            UserRole::Seller => {
                let business = self
                    .business_repo
                    .find_by_id(booking.business_id)
                    .await?
                    .ok_or(AppError::BusinessNotFound)?;
                business.owner_id == requester.id
            }
        };

        if !allowed {
            return Err(AppError::Forbidden);
        }

        Ok(booking)
    }

    // Gancho administrativo do pagamento (no original, o gateway externo
    // marca a reserva como paga). Não cria liquidação retroativa.
    pub async fn set_payment_status(
        &self,
        booking_id: Uuid,
        payment_status: PaymentStatus,
    ) -> Result<Booking, AppError> {
        self.repo
            .set_payment_status(&self.pool, booking_id, payment_status)
            .await?
            .ok_or(AppError::BookingNotFound)
    }
}
