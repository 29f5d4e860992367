// src/common/error.rs

use std::collections::HashMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::{common::i18n::I18nStore, middleware::i18n::Locale, models::booking::BookingStatus};

// Nosso tipo de erro de domínio, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Negócio não encontrado")]
    BusinessNotFound,

    #[error("Reserva não encontrada")]
    BookingNotFound,

    #[error("Liquidação não encontrada")]
    SettlementNotFound,

    #[error("Notificação não encontrada")]
    NotificationNotFound,

    #[error("Categoria não encontrada")]
    CategoryNotFound,

    #[error("Negócio não aprovado para reservas")]
    BusinessNotApproved,

    #[error("Transição de status inválida: {from} -> {to}")]
    InvalidStatusTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("Acesso negado")]
    Forbidden,

    #[error("Motivo de cancelamento obrigatório")]
    CancellationReasonRequired,

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

// A projeção HTTP de um AppError: status + mensagem já localizada.
// É o tipo de rejeição dos handlers, pois implementa IntoResponse.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<HashMap<String, Vec<String>>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => Json(json!({ "error": self.error, "details": details })),
            None => Json(json!({ "error": self.error })),
        };
        (self.status, body).into_response()
    }
}

impl AppError {
    // Chave de tradução + status HTTP de cada variante.
    fn status_and_key(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, "validation_failed"),
            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, "email_exists"),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid_credentials"),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "invalid_token"),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "user_not_found"),
            AppError::BusinessNotFound => (StatusCode::NOT_FOUND, "business_not_found"),
            AppError::BookingNotFound => (StatusCode::NOT_FOUND, "booking_not_found"),
            AppError::SettlementNotFound => (StatusCode::NOT_FOUND, "settlement_not_found"),
            AppError::NotificationNotFound => (StatusCode::NOT_FOUND, "notification_not_found"),
            AppError::CategoryNotFound => (StatusCode::NOT_FOUND, "category_not_found"),
            AppError::BusinessNotApproved => (StatusCode::CONFLICT, "business_not_approved"),
            AppError::InvalidStatusTransition { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_transition")
            }
            AppError::Forbidden => (StatusCode::FORBIDDEN, "forbidden"),
            AppError::CancellationReasonRequired => {
                (StatusCode::BAD_REQUEST, "cancellation_reason_required")
            }
            // Todos os outros (DatabaseError, InternalServerError...) viram 500.
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    // Converte o erro de domínio na resposta HTTP, traduzindo a mensagem
    // para o idioma negociado na requisição.
    pub fn to_api_error(&self, locale: &Locale, store: &I18nStore) -> ApiError {
        let (status, key) = self.status_and_key();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            // O `tracing` loga a mensagem detalhada que `thiserror` nos deu.
            tracing::error!("Erro interno do servidor: {}", self);
        }

        let mut message = store.translate(&locale.0, key).to_string();

        let details = match self {
            AppError::ValidationError(errors) => {
                let mut details = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                Some(details)
            }
            AppError::InvalidStatusTransition { from, to } => {
                message = message
                    .replace("{from}", &from.to_string())
                    .replace("{to}", &to.to_string());
                None
            }
            _ => None,
        };

        ApiError {
            status,
            error: message,
            details,
        }
    }
}

// Fallback sem negociação de idioma, usado pelos guards de middleware,
// onde o catálogo da aplicação ainda não está à mão. Responde em inglês.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let store = I18nStore::new();
        let locale = Locale("en".to_string());
        self.to_api_error(&locale, &store).into_response()
    }
}
