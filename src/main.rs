//! Wiring & DI. Entry point: load config, build Slack adapters, inject into services, serve HTTP.
//! No business logic here.

use dotenv::dotenv;
use onboard_bot::adapters::http::{self, AppState, EnvironmentGuard};
use onboard_bot::adapters::slack::{ModeratorNotifier, SlackClient};
use onboard_bot::ports::{AdminInvitePort, DirectoryPort, InviteErrorPort, MessengerPort};
use onboard_bot::shared::config::AppConfig;
use onboard_bot::usecases::{GreetingService, InviteService, VerifyService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);
    if matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json")) {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    init_tracing();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;
    let bot_token = cfg.bot_token()?;
    let addr = cfg.bind_addr()?;
    let environment = cfg.environment_or_default();

    // --- Slack clients: bot for lookups/messages, admin for invites ---
    let bot = SlackClient::new(cfg.slack_api_url_or_default(), bot_token);
    let admin = match cfg.admin_token() {
        Some(token) => bot.with_token(token),
        None => {
            warn!("ONBOARD_SLACK_ADMIN_TOKEN not set, invites will use the bot token");
            bot.clone()
        }
    };

    let directory: Arc<dyn DirectoryPort> = Arc::new(bot.clone());
    let messenger: Arc<dyn MessengerPort> = Arc::new(bot);
    let admin: Arc<dyn AdminInvitePort> = Arc::new(admin);
    let reporter: Arc<dyn InviteErrorPort> = Arc::new(ModeratorNotifier::new(
        Arc::clone(&messenger),
        cfg.moderators_channel_or_default(),
    ));

    // --- Services ---
    let state = AppState {
        verify: Arc::new(VerifyService::new(directory)),
        greetings: Arc::new(GreetingService::new(messenger)),
        invites: Arc::new(InviteService::new(admin, reporter)),
    };

    let guard = EnvironmentGuard::production(environment);
    if guard.allows() {
        info!(environment = %guard.current, "invite endpoint enabled");
    } else {
        info!(environment = %guard.current, "invite endpoint disabled outside production");
    }
    let app = http::app(state, guard);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("bind {}: {}", addr, e))?;
    info!(%addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
