//! Logging utilities
//!
//! The library itself only talks to the `log` facade. Host binaries call
//! [`init_with_default`] once to route records through `env_logger`.

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system with a fallback filter when `RUST_LOG` is unset
pub fn init_with_default(filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}
