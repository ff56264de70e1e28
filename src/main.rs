use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use interview_dashboard::{
    create_router, AnalysisReport, AppState, Config, Dashboard, ReportExporter, SessionConfig,
    SessionState,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "interview-dashboard", version, about = "Mock interview analysis dashboard")]
struct Cli {
    /// Config file path (extension optional)
    #[arg(long, default_value = "config/interview-dashboard")]
    config: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the dashboard and its HTTP surface
    Serve {
        /// Override the bind address
        #[arg(long)]
        bind: Option<String>,

        /// Override the port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Record a session headlessly for N ticks and print the report
    Simulate {
        #[arg(long, default_value_t = 60)]
        seconds: u64,

        #[arg(long)]
        seed: Option<u64>,

        /// Save the report into this directory instead of printing it
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut cfg = Config::load(&cli.config)?;

    info!("Interview Dashboard v{}", env!("CARGO_PKG_VERSION"));
    info!("Loaded config: {}", cfg.service.name);

    match cli.command.unwrap_or(Command::Serve { bind: None, port: None }) {
        Command::Serve { bind, port } => {
            if let Some(bind) = bind {
                cfg.service.http.bind = bind;
            }
            if let Some(port) = port {
                cfg.service.http.port = port;
            }
            serve(cfg).await
        }
        Command::Simulate { seconds, seed, output } => simulate(&cfg, seconds, seed, output),
    }
}

async fn serve(cfg: Config) -> Result<()> {
    let media_source = cfg.media.create_source();
    let exporter = ReportExporter::new(cfg.report.output_path());

    let dashboard = Arc::new(
        Dashboard::mount(cfg.session.to_session_config(), media_source.as_ref(), exporter).await,
    );

    let state = AppState::new(Arc::clone(&dashboard)).with_static_dir(&cfg.service.http.static_dir);
    let router = create_router(state);

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await
        .context("HTTP server failed")?;

    dashboard.unmount().await;

    Ok(())
}

fn simulate(cfg: &Config, seconds: u64, seed: Option<u64>, output: Option<PathBuf>) -> Result<()> {
    let session_config = SessionConfig {
        seed: seed.or(cfg.session.seed),
        ..cfg.session.to_session_config()
    };

    let mut state = SessionState::new(&session_config);
    state.start();
    for _ in 0..seconds {
        state.tick();
    }
    state.stop();

    info!(
        "Simulated {}s: overall score {}, {} samples in history",
        state.duration_secs(),
        state.overall_score(),
        state.history().len()
    );

    let report = AnalysisReport::generate(state.current_scores());

    match output {
        Some(dir) => {
            let path = ReportExporter::new(dir).export(&report)?;
            println!("{}", path.display());
        }
        None => println!("{}", report.to_json()?),
    }

    Ok(())
}
