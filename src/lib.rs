pub mod appointment; // Clinician booking
pub mod cart; // Shopping cart + checkout
pub mod catalog; // Medicine shelf + doctor roster
pub mod config;
pub mod db; // Key-value persistence
pub mod error;
pub mod history; // Append-only event log
pub mod models;
pub mod money;
pub mod pricing; // Subscription discount policy
pub mod session; // Session owner (UI entry point)
pub mod triage; // Symptom → medicine / referral rules

pub use error::AssistantError;
pub use session::Session;

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Honours `RUST_LOG`, falling back to [`config::default_log_filter`].
/// Calling it again once a subscriber is installed is a no-op.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
}
