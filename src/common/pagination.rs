// src/common/pagination.rs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

// Parâmetros de paginação aceitos por todas as rotas de listagem.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[param(example = 1)]
    pub page: Option<i64>,

    #[param(example = 10)]
    pub limit: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}

// Envelope padrão das respostas paginadas.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,

    #[schema(example = 1)]
    pub page: i64,

    #[schema(example = 10)]
    pub limit: i64,

    #[schema(example = 42)]
    pub total: i64,

    #[schema(example = 5)]
    pub total_pages: i64,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, params: &PageParams, total: i64) -> Self {
        let limit = params.limit();
        Self {
            data,
            page: params.page(),
            limit,
            total,
            total_pages: (total + limit - 1) / limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_params_missing() {
        let params = PageParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn limit_is_clamped_and_offset_follows_page() {
        let params = PageParams {
            page: Some(3),
            limit: Some(1000),
        };
        assert_eq!(params.limit(), 100);
        assert_eq!(params.offset(), 200);

        let params = PageParams {
            page: Some(0),
            limit: Some(0),
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        let params = PageParams {
            page: Some(1),
            limit: Some(10),
        };
        let envelope: Paginated<i32> = Paginated::new(vec![], &params, 42);
        assert_eq!(envelope.total_pages, 5);

        let envelope: Paginated<i32> = Paginated::new(vec![], &params, 40);
        assert_eq!(envelope.total_pages, 4);
    }
}
