//! tripchat entry point.
//!
//! Binary name: `tripchat`
//!
//! Loads `.env` and the config file, sets up tracing, then runs the relay
//! server, the terminal chat, or the renderer.

mod cli;
mod http;
mod state;

use std::path::PathBuf;

use clap::Parser;
use clap_complete::generate;
use console::style;

use tripchat_core::chat::collaborator::BoxChatCollaborator;
use tripchat_core::chat::relay::{ChatRelay, RelaySettings};
use tripchat_infra::config::{load_config, resolve_config_path};
use tripchat_infra::llm::create_backend;
use tripchat_infra::relay_client::HttpChatCollaborator;
use tripchat_types::config::{ModelConfig, TripchatConfig};

use cli::chat::loop_runner::{ChatSession, run_chat_loop};
use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; GEMINI_API_KEY may come from the environment.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Shell completions don't need config or tracing
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "tripchat", &mut std::io::stdout());
        return Ok(());
    }

    let filter = tripchat_observe::filter_for_verbosity(cli.verbose, cli.quiet);
    let enable_otel = matches!(cli.command, Commands::Serve { otel: true, .. });
    tripchat_observe::init_tracing(filter, enable_otel)
        .map_err(|e| anyhow::anyhow!("failed to initialise tracing: {e}"))?;

    let config = match resolve_config_path(cli.config.as_deref()) {
        Some(path) => load_config(&path).await,
        None => TripchatConfig::default(),
    };

    let result = run(cli.command, config).await;
    tripchat_observe::shutdown_tracing();
    result
}

async fn run(command: Commands, config: TripchatConfig) -> anyhow::Result<()> {
    match command {
        Commands::Serve {
            host,
            port,
            static_dir,
            api_key,
            otel: _,
        } => {
            let relay = build_relay(&config.model, api_key.as_deref())?;
            let static_dir = static_dir.unwrap_or_else(|| PathBuf::from(&config.server.static_dir));
            let state = AppState::new(relay, Some(static_dir));

            let addr = format!(
                "{}:{}",
                host.unwrap_or(config.server.host),
                port.unwrap_or(config.server.port)
            );
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} tripchat relay listening on {}",
                style("*").cyan().bold(),
                style(format!("http://{addr}")).cyan()
            );
            println!("  {}", style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Chat {
            server,
            direct,
            api_key,
            transcript,
            theme,
        } => {
            let (collaborator, via) = if direct {
                let relay = build_relay(&config.model, api_key.as_deref())?;
                let via = format!("{} (direct)", relay.settings().model);
                (BoxChatCollaborator::new(relay), via)
            } else {
                let url = server.unwrap_or(config.chat.server_url);
                let client = HttpChatCollaborator::new(&url);
                let via = client.endpoint().to_string();
                (BoxChatCollaborator::new(client), via)
            };

            run_chat_loop(ChatSession {
                collaborator,
                via,
                transcript,
                theme: theme.unwrap_or(config.chat.theme),
            })
            .await?;
        }

        Commands::Render {
            file,
            document,
            theme,
            title,
        } => {
            cli::render::run_render(
                file.as_deref(),
                document,
                theme.unwrap_or(config.chat.theme),
                &title,
            )
            .await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn build_relay(model: &ModelConfig, api_key: Option<&str>) -> anyhow::Result<ChatRelay> {
    let backend = create_backend(model, api_key).map_err(|e| {
        anyhow::anyhow!("{e}: set GEMINI_API_KEY (environment or .env) or pass --api-key")
    })?;
    Ok(ChatRelay::new(backend, RelaySettings::from(model)))
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
