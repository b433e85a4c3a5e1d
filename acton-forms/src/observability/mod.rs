//! Observability (structured logging)
//!
//! The renderer emits `tracing` events; installing a subscriber is left to
//! the host application. [`init`] is a convenience for binaries and demos
//! that have no subscriber of their own.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging stack
///
/// Sets up:
/// - Pretty formatting in debug builds, JSON formatting in release builds
/// - Environment-based log level filtering via `RUST_LOG`
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
///
/// # Example
///
/// ```rust,no_run
/// use acton_forms::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init()?;
/// tracing::info!("Form renderer ready");
/// # Ok(())
/// # }
/// ```
pub fn init() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            EnvFilter::new("info,acton_forms=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    #[cfg(debug_assertions)]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?;
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    }

    Ok(())
}
