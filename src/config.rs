use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "MeroDoctor";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Storage slots in the key-value store.
pub const CART_KEY: &str = "meroDoctor_cart";
pub const SUBSCRIPTION_KEY: &str = "meroDoctor_subscription";
pub const HISTORY_KEY: &str = "meroDoctor_history";

/// Per-line cart quantity bounds.
pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 10;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "mero_doctor_lib=info,warn"
}

/// Get the application data directory (`<data dir>/MeroDoctor`).
/// `None` when the platform exposes no data directory.
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_NAME))
}

/// Get the directory the file-backed state store writes to
pub fn state_dir() -> Option<PathBuf> {
    app_data_dir().map(|dir| dir.join("state"))
}
