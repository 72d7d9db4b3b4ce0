//! Carga inicial de colecciones

pub mod data;
pub mod loader;

pub use loader::{BootstrapLoader, BootstrapReport};
