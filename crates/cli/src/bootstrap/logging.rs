use pdns_backend_domain::config::LogFormat;
use pdns_backend_domain::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins over the configured level when it is set.
pub fn init_logging(config: &Config) {
    let default_directives = format!(
        "{level},sqlx=warn,hyper=warn,reqwest=warn,tower_http=warn",
        level = config.logging.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}
