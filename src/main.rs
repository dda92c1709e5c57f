use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use plan_my_trip::backend::ProxyClient;
use plan_my_trip::config::Config;
use plan_my_trip::models::TripPreferences;
use plan_my_trip::planner::TripPlanner;
use plan_my_trip::{render, server};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "plan-my-trip", about = "Trip-planning chat proxy and client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the /api/chat proxy and serve the site (default).
    Serve,
    /// Ask a running proxy for recommendations.
    Plan(PlanArgs),
}

#[derive(Debug, Args)]
struct PlanArgs {
    #[arg(long, env = "PROXY_URL", default_value = "http://localhost:3000")]
    proxy_url: String,

    #[arg(long, default_value = "")]
    destination: String,

    #[arg(long = "date", default_value = "")]
    travel_date: String,

    #[arg(long, default_value = "")]
    travellers: String,

    #[arg(long, default_value = "")]
    trip_type: String,

    #[arg(long, default_value = "")]
    budget: String,

    #[arg(long)]
    hotel_nearby: bool,

    #[arg(long)]
    best_places: bool,

    /// Write the cards as an HTML page (trip-plan-<millis>.html unless --html is given).
    #[arg(long)]
    export: bool,

    #[arg(long)]
    html: Option<PathBuf>,
}

impl PlanArgs {
    fn preferences(&self) -> TripPreferences {
        TripPreferences {
            destination: self.destination.clone(),
            travel_date: self.travel_date.clone(),
            travellers: self.travellers.clone(),
            trip_type: self.trip_type.clone(),
            budget: self.budget.clone(),
            hotel_nearby: self.hotel_nearby,
            best_places: self.best_places,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let config = Config::from_env()?;
            server::serve(config).await.context("proxy server failed")?;
        }
        Command::Plan(args) => plan(args).await?,
    }
    Ok(())
}

async fn plan(args: PlanArgs) -> anyhow::Result<()> {
    println!("🤖 AI is analyzing your preferences...\n");

    let mut planner = TripPlanner::new(ProxyClient::new(&args.proxy_url));
    let items = planner.submit(args.preferences()).await;

    for item in &items {
        println!("📍 {}", item.title());
        if !item.content().is_empty() {
            println!("   {}", item.content());
        }
        println!();
    }

    if args.export || args.html.is_some() {
        let path = args
            .html
            .unwrap_or_else(|| PathBuf::from(render::default_export_name()));
        std::fs::write(&path, render::render_page(&items))
            .with_context(|| format!("could not write {}", path.display()))?;
        println!("✅ Saved trip plan to {}", path.display());
    }

    Ok(())
}
