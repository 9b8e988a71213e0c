use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

/// Installs the global subscriber: pretty ANSI output in dev, JSON everywhere else.
pub fn init_tracing(dev: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let subscriber_builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE);

    let result = if dev {
        tracing::subscriber::set_global_default(subscriber_builder.pretty().with_ansi(true).finish())
    } else {
        tracing::subscriber::set_global_default(subscriber_builder.json().with_ansi(false).finish())
    };

    if let Err(e) = result {
        eprintln!("tracing subscriber already set: {}", e);
    }
}

/// Logs panics through tracing. Nothing is recovered; the task that panicked still dies.
pub fn install_panic_logger() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("Uncaught panic: {}", info);
    }));
}
