use log::*;

/// Initialise logging for tests. Reads `.env.test` if present so `RUST_LOG` can be set per
/// checkout without exporting it in every shell.
pub fn init_logging() {
    dotenvy::from_filename(".env.test").ok();
    let _ = env_logger::builder().is_test(true).try_init();
    debug!("🚀️ Logging initialised");
}
