use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Parse a filter directive such as `info` or `relay_server=debug,info`
pub fn build_filter(directive: &str) -> Result<EnvFilter, String> {
    EnvFilter::try_new(directive).map_err(|e| format!("Invalid log filter '{}': {}", directive, e))
}

/// 初始化日志
pub fn init_logging(directive: &str) -> Result<(), String> {
    let filter = build_filter(directive)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| e.to_string())
}
