//! Modelos del sistema
//! 
//! Este módulo contiene los documentos que el cargador escribe en cada
//! colección, con los nombres de campo en camelCase.

pub mod account;
pub mod partner;
pub mod task;
pub mod user;
pub mod vehicle;

pub use account::{AccountOutcome, NewAccount};
pub use partner::Partner;
pub use task::{Task, TaskStatus};
pub use user::{Role, UserRole, UserSeed};
pub use vehicle::Vehicle;
