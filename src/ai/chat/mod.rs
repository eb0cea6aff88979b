mod core;
mod models;

pub use self::core::{Session, SessionBuilder};
pub use models::{DEFAULT_SUMMARY_SYSTEM_MESSAGE, SUMMARY_PREFIX, Transcript};
