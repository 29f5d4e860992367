// src/models/settings.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Linha única de configuração pública do site.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteConfig {
    #[schema(ignore)] // Sempre TRUE, é só a âncora da linha única
    #[serde(skip_serializing)]
    pub id: bool,

    #[schema(example = "Easy Life Gangtok")]
    pub site_name: String,

    #[schema(example = "Local services, one booking away")]
    pub tagline: Option<String>,

    #[schema(example = "support@easylifegangtok.in")]
    pub contact_email: String,

    #[schema(example = "+91 3592 000000")]
    pub contact_phone: Option<String>,

    #[schema(example = "MG Marg, Gangtok, Sikkim")]
    pub address: Option<String>,

    #[schema(example = false)]
    pub maintenance_mode: bool,

    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebsiteConfigRequest {
    #[schema(example = "Easy Life Gangtok")]
    pub site_name: Option<String>,

    pub tagline: Option<String>,

    #[schema(example = "support@easylifegangtok.in")]
    pub contact_email: Option<String>,

    pub contact_phone: Option<String>,

    pub address: Option<String>,

    pub maintenance_mode: Option<bool>,
}
