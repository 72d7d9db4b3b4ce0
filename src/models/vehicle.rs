//! Modelo de Vehicle
//! 
//! Ficha del camión en la colección `vehicles`. La clave del documento es
//! el `id` y no se guarda como campo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vehicle - documento completo, se sobrescribe en cada carga
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(skip)]
    pub id: String,
    pub plate: String,
    pub trailer_plate: String,
    pub vin: String,
    /// `YYYY-MM-DD`
    pub insurance_expiry: String,
    /// `YYYY-MM-DD`
    pub annual_inspection: String,
    pub owner_driver_id: String,
    pub current_driver_id: String,
    pub docs: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_document_skips_id() {
        let vehicle = Vehicle {
            id: "truck001".to_string(),
            plate: "AA-123-BB".to_string(),
            trailer_plate: "T-456-CC".to_string(),
            vin: "VIN1234567890ABCDE".to_string(),
            insurance_expiry: "2026-06-01".to_string(),
            annual_inspection: "2027-01-15".to_string(),
            owner_driver_id: "driver_uid_example".to_string(),
            current_driver_id: "driver_uid_example".to_string(),
            docs: Vec::new(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&vehicle).unwrap();

        assert!(value.get("id").is_none());
        assert_eq!(value["trailerPlate"], "T-456-CC");
        assert_eq!(value["docs"], serde_json::json!([]));
    }
}
