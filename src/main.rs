#[cfg(feature = "ssr")]
use std::path::PathBuf;

#[cfg(feature = "ssr")]
#[derive(Debug, clap::Parser)]
#[command(name = "choix", version, about = "Serve the Choix landing page")]
struct Cli {
    #[arg(long, env = "BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    bind: String,
    #[arg(long, env = "CHOIX_CONFIG")]
    config: Option<PathBuf>,
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t)]
    log_format: choix::logging::LogFormat,
    /// Print the home page tree as JSON and exit.
    #[arg(long, default_value_t = false)]
    dump: bool,
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use choix::config::SiteConfig;
    use choix::server::{AppState, home_json, serve};
    use clap::Parser;
    use tracing::info;

    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    choix::logging::init_logging(cli.log_format)?;

    let config = match &cli.config {
        Some(path) => {
            info!(
                stage = "startup",
                event = "config.load.begin",
                config_path = %path.display(),
                "loading site configuration"
            );
            SiteConfig::load(path).context("failed to load site config")?
        }
        None => SiteConfig::default(),
    };
    info!(
        stage = "startup",
        event = "config.load.end",
        result = "ok",
        brand = %config.brand,
        mode_count = config.transport_modes.len(),
        "site configuration ready"
    );

    if cli.dump {
        println!("{}", home_json(&config)?);
        return Ok(());
    }

    serve(&cli.bind, AppState::from_config(&config)).await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // the browser entry point is `mount` in lib.rs
}
