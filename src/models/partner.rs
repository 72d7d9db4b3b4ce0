//! Modelo de Partner
//! 
//! Proveedores y receptores de carga (colección `partners`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub contact: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}
