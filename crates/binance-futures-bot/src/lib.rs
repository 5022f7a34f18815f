/*
[INPUT]:  Public API exports for binance-futures-bot crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod credentials;
pub mod logging;
pub mod orders;
pub mod render;

// Re-export main types for convenience
pub use config::{AppConfig, LoggingConfig};
pub use credentials::{CredentialError, CredentialField, resolve_credentials};
pub use render::Renderer;
