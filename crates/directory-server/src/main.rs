//! # Directory Server
//!
//! Starts the directory's resource actors and runs one bulk request against them, either
//! the built-in demo batch or a JSON file given with `--request`. The bulk response is
//! printed to stdout.
//!
//! ```bash
//! RUST_LOG=info cargo run -p directory-server
//! RUST_LOG=debug cargo run -p directory-server -- --request batch.json --principal ops
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use directory_server::bulk::{BulkOperation, BulkRequest, CallContext};
use directory_server::config::ServerConfig;
use directory_server::lifecycle::DirectorySystem;
use resource_framework::telemetry::setup_tracing;
use serde_json::json;
use std::path::PathBuf;
use tracing::{info, Instrument};

#[derive(Debug, Parser)]
#[command(name = "directory-server", about = "Run a bulk request against the directory")]
struct Cli {
    /// Bulk request JSON file; runs the demo batch when omitted
    #[arg(short, long)]
    request: Option<PathBuf>,

    /// Caller identity recorded on the bulk span
    #[arg(long)]
    principal: Option<String>,
}

fn demo_request() -> BulkRequest {
    BulkRequest {
        error_budget: Some(2),
        operations: vec![
            BulkOperation::create(
                "alice",
                "Users",
                json!({
                    "userName": "alice",
                    "displayName": "Alice Example",
                    "emails": [{ "value": "alice@example.com", "primary": true }]
                }),
            ),
            BulkOperation::create(
                "admins",
                "Groups",
                json!({
                    "displayName": "Administrators",
                    "members": [{ "value": "placeholder-ref:alice", "display": "alice" }]
                }),
            ),
            BulkOperation::create(
                "sync",
                "ServiceCredentials",
                json!({ "name": "billing-sync", "ownerId": "placeholder-ref:alice", "scopes": ["invoices:read"] }),
            ),
            BulkOperation::create(
                "laptop",
                "Devices",
                json!({ "serial": "LT-0042", "assignedTo": "placeholder-ref:alice" }),
            ),
            BulkOperation::update(
                "Users/placeholder-ref:alice",
                json!({ "displayName": "Alice E." }),
            ),
            BulkOperation::delete("Groups/00000000-0000-0000-0000-000000000000"),
        ],
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();
    let config = ServerConfig::from_env().context("failed to load configuration")?;

    let request = match &cli.request {
        Some(path) => {
            let body = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            BulkRequest::from_slice(&body, config.bulk.max_payload_bytes)
                .with_context(|| format!("invalid bulk request in {}", path.display()))?
        }
        None => demo_request(),
    };

    let system = DirectorySystem::new(config).context("failed to start directory system")?;

    let mut ctx = CallContext::new();
    if let Some(principal) = cli.principal {
        ctx = ctx.with_principal(principal);
    }

    let orchestrator = system.orchestrator();
    let span = tracing::info_span!("bulk");
    let response = orchestrator
        .execute(request, &ctx)
        .instrument(span)
        .await
        .context("bulk request failed")?;
    drop(orchestrator);

    info!(
        operations = response.operations.len(),
        failures = response.failures(),
        "Bulk request finished"
    );
    println!("{}", serde_json::to_string_pretty(&response)?);

    system.shutdown().await?;
    Ok(())
}
