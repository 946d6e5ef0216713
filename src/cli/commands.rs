// file: src/cli/commands.rs
// version: 1.0.0
// guid: 769e5631-9038-4d07-9654-0776ffadae4b

//! Command implementations for the CLI

use super::args::{Cli, Commands};
use crate::{
    config::{ConfigLoader, ZoneFactsConfig},
    executor::SystemRunner,
    facts::{self, FactsRequest, FailureReport, ZoneFacts},
    logging::logger::{with_async_operation_span, with_operation_span},
    platform::{self, OsFamily},
    zones::{self, CommandResolver, ZoneCommand, ZoneRecord},
    Result, ZoneFactsError,
};
use std::io::Read;
use std::path::Path;
use tracing::{error, info};

/// Dispatch the parsed command line
pub async fn run(cli: &Cli) -> Result<()> {
    let config = effective_config(cli)?;
    let request = FactsRequest {
        check_mode: cli.check,
    };

    match cli.command() {
        Commands::Facts => facts_command(&config, request).await,
        Commands::List { json, status } => {
            list_command(&config, request, json, status.as_deref()).await
        }
        Commands::Parse { input } => parse_command(input.as_deref(), config.pretty),
        Commands::CheckPrereqs => check_prerequisites_command(&config),
    }
}

/// Merge the optional config file with command line overrides
pub fn effective_config(cli: &Cli) -> Result<ZoneFactsConfig> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::new().load(path)?,
        None => ZoneFactsConfig::default(),
    };

    if let Some(timeout) = cli.timeout {
        config.timeout_seconds = timeout;
    }
    if let Some(search_path) = &cli.search_path {
        config.search_path = Some(search_path.clone());
    }
    if cli.pretty {
        config.pretty = true;
    }

    config.validate()?;
    Ok(config)
}

fn resolver_for(config: &ZoneFactsConfig) -> CommandResolver {
    match &config.search_path {
        Some(search_path) => CommandResolver::with_search_path(search_path),
        None => CommandResolver::new(),
    }
}

async fn gather(config: &ZoneFactsConfig, request: FactsRequest) -> Result<ZoneFacts> {
    let resolver = resolver_for(config);
    let runner = SystemRunner::new(config.timeout());
    let platform = OsFamily::current();

    with_async_operation_span("gather_zone_facts", || {
        facts::gather_zone_facts(&platform, &resolver, &runner, request)
    })
    .await
}

/// Print the failure payload on stdout and hand the error back
fn report_failure(err: ZoneFactsError, pretty: bool) -> ZoneFactsError {
    match facts::to_json(&FailureReport::from(&err), pretty) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to render failure report: {}", e),
    }
    err
}

/// Gather zone facts and print the JSON payload
pub async fn facts_command(config: &ZoneFactsConfig, request: FactsRequest) -> Result<()> {
    let facts = gather(config, request)
        .await
        .map_err(|e| report_failure(e, config.pretty))?;

    println!("{}", facts::to_json(&facts, config.pretty)?);
    Ok(())
}

/// Print configured local zones, optionally filtered by status
pub async fn list_command(
    config: &ZoneFactsConfig,
    request: FactsRequest,
    json_output: bool,
    status: Option<&str>,
) -> Result<()> {
    let facts = gather(config, request).await?;
    let zones: Vec<&ZoneRecord> = match status {
        Some(status) => zones::with_status(facts.zones(), status),
        None => facts.zones().iter().collect(),
    };

    if json_output {
        println!("{}", facts::to_json(&zones, config.pretty)?);
        return Ok(());
    }

    if zones.is_empty() {
        info!("No local zones found");
        return Ok(());
    }

    println!("{}", render_table(&zones));
    info!("Found {} local zones", zones.len());
    Ok(())
}

fn render_table(zones: &[&ZoneRecord]) -> String {
    let mut table = format!(
        "{:<4} {:<16} {:<12} {:<30} {:<10} {}\n",
        "ID", "NAME", "STATUS", "PATH", "BRAND", "IP"
    );
    table.push_str(&format!("{:-<84}", ""));
    for zone in zones {
        table.push_str(&format!(
            "\n{:<4} {:<16} {:<12} {:<30} {:<10} {}",
            zone.id(),
            zone.name(),
            zone.status(),
            zone.path(),
            zone.brand(),
            zone.ip()
        ));
    }
    table
}

/// Parse captured `zoneadm list -i -c -v` output and print the JSON payload
pub fn parse_command(input: Option<&Path>, pretty: bool) -> Result<()> {
    let facts = with_operation_span("parse_zone_list", || -> Result<ZoneFacts> {
        let raw = read_input(input)?;
        ZoneCommand::Zoneadm.parse(&raw).map(ZoneFacts::new)
    })
    .map_err(|e| report_failure(e, pretty))?;

    println!("{}", facts::to_json(&facts, pretty)?);
    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

/// Check that this host can list zones
pub fn check_prerequisites_command(config: &ZoneFactsConfig) -> Result<()> {
    let platform = OsFamily::current();
    info!("Checking prerequisites for listing zones on {}", platform);

    platform::ensure_supported(&platform)?;
    info!("✓ Host operating system is {}", platform);

    let resolved = resolver_for(config).resolve(ZoneCommand::ALL)?;
    info!(
        "✓ {} available at {}",
        resolved.kind.name(),
        resolved.path.display()
    );
    println!("{}", resolved.path.display());

    Ok(())
}
