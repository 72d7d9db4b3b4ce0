//! Modelo de roles de usuario
//! 
//! Documento de la colección `users`, con clave igual al uid de la cuenta.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rol de la cuenta dentro de la aplicación
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Dispatcher,
    Driver,
}

/// Registro de semilla de un usuario
#[derive(Debug, Clone, Copy)]
pub struct UserSeed {
    pub id: &'static str,
    pub email: &'static str,
    pub role: Role,
    pub name: &'static str,
}

/// Documento de rol - se escribe siempre con merge
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl UserRole {
    pub fn from_seed(seed: &UserSeed, created_at: DateTime<Utc>) -> Self {
        Self {
            id: seed.id.to_string(),
            email: seed.email.to_string(),
            role: seed.role,
            name: seed.name.to_string(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_user_role_document_fields() {
        let seed = UserSeed {
            id: "admin_uid_example",
            email: "admin@nvts.com",
            role: Role::Admin,
            name: "系统管理员",
        };
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap();
        let value = serde_json::to_value(UserRole::from_seed(&seed, now)).unwrap();

        assert_eq!(value["id"], "admin_uid_example");
        assert_eq!(value["role"], "admin");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
