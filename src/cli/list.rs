use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::AppConfig;
use crate::dashboard::matches_query;
use crate::records::{
    EntourageRecord, GuestRecord, GuestRequestRecord, PrincipalSponsorRecord, Record, read_rows,
};
use crate::sheets::SheetsClient;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ResourceKind {
    Guests,
    GuestRequests,
    Entourage,
    PrincipalSponsor,
}

pub async fn run(resource: ResourceKind, query: Option<String>) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env()?;
    let client = SheetsClient::new();
    let query = query.unwrap_or_default();

    let output = match resource {
        ResourceKind::Guests => fetch::<GuestRecord>(&client, &config, &query).await?,
        ResourceKind::GuestRequests => fetch::<GuestRequestRecord>(&client, &config, &query).await?,
        ResourceKind::Entourage => fetch::<EntourageRecord>(&client, &config, &query).await?,
        ResourceKind::PrincipalSponsor => {
            fetch::<PrincipalSponsorRecord>(&client, &config, &query).await?
        }
    };

    println!("{}", output);
    Ok(())
}

async fn fetch<R: Record>(client: &SheetsClient, config: &AppConfig, query: &str) -> Result<String> {
    let rows = client.fetch(config.endpoint(R::RESOURCE)).await?;
    let records: Vec<R> = read_rows::<R>(rows)
        .into_iter()
        .filter(|r| matches_query(r, query))
        .collect();

    tracing::info!("Found {} {}", records.len(), R::RESOURCE.plural());
    Ok(serde_json::to_string_pretty(&records)?)
}
