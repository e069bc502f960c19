use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use leaderboard::config::{Cli, Command, LogFormat, ServeArgs, ShowArgs};
use leaderboard::{router, AppState};
use leaderboard_core::load_leaderboard;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    match cli.command {
        Command::Serve(args) => serve(&cli.source, args).await,
        Command::Show(args) => show(&cli.source, args),
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn serve(source: &Path, args: ServeArgs) -> Result<()> {
    let state = AppState::new(source, &args.display);
    let listener = TcpListener::bind((args.host.as_str(), args.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", args.host, args.port))?;

    info!(
        source = %source.display(),
        display = %args.display.display(),
        "listening on {}",
        listener.local_addr()?
    );
    axum::serve(listener, router(state).into_make_service()).await?;

    Ok(())
}

fn show(source: &Path, args: ShowArgs) -> Result<()> {
    let snapshot = load_leaderboard(source)
        .with_context(|| format!("failed to load leaderboard from {}", source.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["#", "Name", "Badges", "Arcade"]);
    for (rank, record) in snapshot.records.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            record.name.clone(),
            record.badges.to_string(),
            record.arcade.to_string(),
        ]);
    }

    println!("{table}");
    println!("Generated at {}", snapshot.generated_at);
    Ok(())
}
