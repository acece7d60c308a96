use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Diagnostics go to stderr so stdout only
/// ever carries the compiled document.
pub fn initialize_logger() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("filemux=warn"));

    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global logger: {}", e);
    }
}
