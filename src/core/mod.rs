mod config;
mod credentials;
mod logging;

pub use config::{AppConfig, DEFAULT_API_HOSTNAME, DEFAULT_MODEL, DEFAULT_SYSTEM_MESSAGE};
pub use credentials::{Credential, CredentialProvider, EnvCredential, StaticCredential};
pub use logging::{init_tracing, server_directives};
