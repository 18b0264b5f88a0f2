//! Campaign Dashboard — marketing-campaign analytics over HTTP.
//!
//! Serves the campaign API, or fetches a campaign list and renders the
//! filtered table with its performance summary.

use clap::{Parser, Subcommand};
use dashboard_analytics::{ctr, derive_view, DashboardView};
use dashboard_api::ApiServer;
use dashboard_core::config::AppConfig;
use dashboard_core::StatusFilter;
use dashboard_source::{CampaignClient, CampaignStore};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "campaign-dashboard")]
#[command(about = "Marketing-campaign analytics dashboard")]
#[command(version)]
struct Cli {
    /// HTTP port (overrides config)
    #[arg(long, env = "CAMPAIGN_DASHBOARD__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Campaign backend endpoint URL (overrides config)
    #[arg(long, env = "CAMPAIGN_DASHBOARD__SOURCE__ENDPOINT")]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the campaign dashboard API
    Serve,
    /// Fetch campaigns and render the dashboard view
    View {
        /// Status selection: All, Active, Paused, or any literal status
        #[arg(long, default_value = "All")]
        status: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so the rendered view stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_dashboard=info,tower_http=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(endpoint) = cli.endpoint {
        config.source.endpoint = endpoint;
    }

    match cli.command {
        Command::Serve => serve(config).await,
        Command::View { status } => view(config, &status).await,
    }
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    info!(
        host = %config.api.host,
        http_port = config.api.http_port,
        "Campaign Dashboard API starting up"
    );

    let store = Arc::new(CampaignStore::new());
    let server = ApiServer::new(config, store);
    server.start_http().await
}

async fn view(config: AppConfig, status: &str) -> anyhow::Result<()> {
    let client = CampaignClient::new(&config.source);
    let campaigns = client.fetch_campaigns().await?;

    let filter = StatusFilter::parse(status);
    let view = derive_view(&campaigns, &filter);
    print!("{}", render_view(&view, &filter));
    Ok(())
}

/// Render the filtered table and summary as plain text.
fn render_view(view: &DashboardView, filter: &StatusFilter) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<24} {:<8} {:>10} {:>12} {:>12} {:>8}\n",
        "Campaign", "Status", "Clicks", "Cost", "Impressions", "CTR"
    ));

    if view.campaigns.is_empty() {
        out.push_str("No campaigns found\n");
    }
    for c in &view.campaigns {
        out.push_str(&format!(
            "{:<24} {:<8} {:>10} {:>12.2} {:>12} {:>7.2}%\n",
            c.name,
            c.status,
            c.clicks,
            c.cost,
            c.impressions,
            ctr(c.clicks, c.impressions)
        ));
    }

    let scope = match filter {
        StatusFilter::All => "All Campaigns".to_string(),
        StatusFilter::Only(s) => format!("{s} Only"),
    };
    let s = &view.summary;
    out.push_str(&format!(
        "\nPerformance Summary ({scope})\n\
         Campaigns:   {}\n\
         Clicks:      {}\n\
         Cost:        {}\n\
         Impressions: {}\n\
         Avg CTR:     {:.2}%\n",
        s.count,
        s.total_clicks,
        s.formatted_cost(),
        s.total_impressions,
        s.average_ctr
    ));

    out
}
