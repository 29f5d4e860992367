// src/middleware/rbac.rs

use std::marker::PhantomData;

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};

use crate::{
    common::error::ApiError,
    models::auth::{User, UserRole},
};

/// 1. O Trait que define o papel exigido pela rota
pub trait RoleDef: Send + Sync + 'static {
    fn role() -> UserRole;
    fn label() -> &'static str;
}

/// 2. O Extractor (Guardião)
pub struct RequireRole<T>(pub PhantomData<T>);

// 3. Implementação do FromRequestParts

impl<T, S> FromRequestParts<S> for RequireRole<T>
where
    T: RoleDef,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // A. Extrai o usuário injetado pelo auth_guard
        let user = parts.extensions.get::<User>().ok_or(ApiError {
            status: StatusCode::UNAUTHORIZED,
            error: "Authentication required.".into(),
            details: None,
        })?;

        // B. Compara o papel
        if user.role != T::role() {
            return Err(ApiError {
                status: StatusCode::FORBIDDEN,
                error: format!("This action requires the '{}' role.", T::label()),
                details: None,
            });
        }

        Ok(RequireRole(PhantomData))
    }
}

// ---
// DEFINIÇÃO DOS PAPÉIS (TIPOS)
// ---

pub struct AdminOnly;
impl RoleDef for AdminOnly {
    fn role() -> UserRole {
        UserRole::Admin
    }
    fn label() -> &'static str {
        "admin"
    }
}

pub struct SellerOnly;
impl RoleDef for SellerOnly {
    fn role() -> UserRole {
        UserRole::Seller
    }
    fn label() -> &'static str {
        "seller"
    }
}
