//! Logging initialization and utilities

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`.
/// Override with RUST_LOG environment variable.
///
/// # Example
/// ```
/// inkscroll::core::logging::init();
/// log::info!("Scene started");
/// ```
pub fn init() {
    // Tolerate a second init from tests or embedding hosts.
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).try_init();
}
