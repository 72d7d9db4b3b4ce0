//! Cuentas del proveedor de identidad
//! 
//! Solicitud de alta de cuenta y resultado explícito de la operación.

use validator::Validate;

use crate::models::user::UserSeed;

/// Solicitud para crear una cuenta en el proveedor de identidad
#[derive(Debug, Clone, Validate)]
pub struct NewAccount {
    #[validate(length(min = 1, max = 128))]
    pub uid: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,

    pub display_name: String,
    pub email_verified: bool,
}

impl NewAccount {
    /// Cuenta pre-verificada a partir de un registro de semilla
    pub fn from_seed(seed: &UserSeed, password: &str) -> Self {
        Self {
            uid: seed.id.to_string(),
            email: seed.email.to_lowercase(),
            password: password.to_string(),
            display_name: seed.name.to_string(),
            email_verified: true,
        }
    }
}

/// Resultado de `create_account`
///
/// `AlreadyExists` cubre tanto el uid como el email duplicados. Los fallos de
/// transporte del cliente no llegan aquí: se devuelven como `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountOutcome {
    Created,
    AlreadyExists,
    Failed(String),
}

/// Validar la solicitud, convirtiendo los errores en `Failed`
pub fn check_new_account(account: &NewAccount) -> Option<AccountOutcome> {
    account
        .validate()
        .err()
        .map(|e| AccountOutcome::Failed(format!("invalid account data: {}", e)))
}
