use anyhow::Context;
use clap::Parser;
use relay_config::{Config, ConfigManager};
use relay_server::logging::init_logging;
use relay_server::{run_server, AppState};

#[derive(Parser, Debug, Clone)]
#[command(name = "relay-server")]
#[command(about = "Chat relay HTTP server")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Config file path (defaults to ~/.relay/config.json if present)
    #[arg(long, env = "RELAY_CONFIG")]
    config: Option<String>,

    /// Bind host (overrides config)
    #[arg(long, env = "RELAY_HOST")]
    host: Option<String>,

    /// Server port (overrides config)
    #[arg(long, env = "RELAY_PORT")]
    port: Option<u16>,

    /// Upstream chat-completions URL (overrides config)
    #[arg(long, env = "RELAY_UPSTREAM_URL")]
    upstream_url: Option<String>,

    /// Upstream model name (overrides config)
    #[arg(long, env = "RELAY_MODEL")]
    model: Option<String>,

    /// Upstream API key (overrides config)
    #[arg(long, env = "RELAY_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Upstream request timeout in seconds (overrides config)
    #[arg(long, env = "RELAY_UPSTREAM_TIMEOUT")]
    timeout: Option<u64>,

    /// Log filter (overrides config)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,
}

impl Cli {
    /// CLI 参数覆盖配置文件
    fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = &self.upstream_url {
            config.upstream.url = url.clone();
        }
        if let Some(model) = &self.model {
            config.upstream.model = model.clone();
        }
        if let Some(api_key) = &self.api_key {
            config.upstream.api_key = Some(api_key.clone());
        }
        if let Some(timeout) = self.timeout {
            config.upstream.timeout_seconds = timeout;
        }
    }

    fn log_filter(&self, config: &Config) -> String {
        if self.debug {
            "debug".to_string()
        } else if let Some(level) = &self.log_level {
            level.clone()
        } else {
            config.logging.level.to_string()
        }
    }
}

async fn load_config(cli: &Cli) -> anyhow::Result<ConfigManager> {
    match &cli.config {
        Some(path) => {
            let path = relay_config::expand_tilde(path)
                .unwrap_or_else(|| std::path::PathBuf::from(path));
            ConfigManager::load(&path)
                .await
                .with_context(|| format!("Failed to load config from {:?}", path))
        }
        None => ConfigManager::load_default()
            .await
            .context("Failed to load default config"),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let manager = load_config(&cli).await?;
    let config_path = manager.path().map(|p| p.to_path_buf());
    let mut config = manager.into_config();
    cli.apply(&mut config);

    init_logging(&cli.log_filter(&config)).map_err(anyhow::Error::msg)?;

    match &config_path {
        Some(path) => tracing::info!("Config loaded from {:?}", path),
        None => tracing::info!("Using default config"),
    }

    ConfigManager::validate(&config).context("Invalid configuration")?;

    tracing::info!("Upstream Configuration:");
    tracing::info!("  URL: {}", config.upstream.url);
    tracing::info!("  Model: {}", config.upstream.model);
    tracing::info!("  Timeout: {}s", config.upstream.timeout_seconds);

    let state = AppState::from_config(&config).context("Failed to create upstream client")?;

    run_server(state, &config.server.bind_addr())
        .await
        .context("HTTP server error")
}
