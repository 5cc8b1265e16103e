pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod scoring;
pub mod services;
pub mod squad;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use colored::Colorize;

use crate::api::fpl_client::FplClient;
use crate::api::presenter::{PhotoLinker, Presenter};
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::Position;
use crate::services::recommendation::RecommendationService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_gameweek() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let client = FplClient::new(&config.provider)?;
        let gameweek = client
            .get_current_gameweek()
            .await
            .context("Failed to determine current gameweek")?;
        println!("{} {}", "Current gameweek:".bold(), gameweek.to_string().green());
        Ok(())
    })
}

pub fn handle_recommend(manager_id: u64) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let client = FplClient::new(&config.provider)?;
        let snapshot = client
            .load_snapshot(manager_id)
            .await
            .with_context(|| format!("Failed to load data for manager {}", manager_id))?;

        let service = RecommendationService::new(&snapshot, &config.scoring);
        let view = presenter(&config).smart_recommendations(&service.smart_recommendations());
        println!("{}", serde_json::to_string_pretty(&view)?);
        Ok(())
    })
}

pub fn handle_swaps(manager_id: u64) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let client = FplClient::new(&config.provider)?;
        let snapshot = client
            .load_snapshot(manager_id)
            .await
            .with_context(|| format!("Failed to load data for manager {}", manager_id))?;

        let service = RecommendationService::new(&snapshot, &config.scoring);
        let summary = service.resolver().summary();
        let swaps = presenter(&config).swaps_by_position(&service.smart_swaps());

        println!(
            "{} (GW {}, bank £{}m)",
            summary.team_name.unwrap_or_default().cyan().bold(),
            summary.current_gameweek,
            summary.transfer_bank
        );
        for position in Position::ALL {
            let Some(group) = swaps.get(&position).filter(|g| !g.is_empty()) else {
                continue;
            };
            println!("\n{}", position.as_str().yellow().bold());
            for swap in group {
                let out = &swap.swap_out;
                println!(
                    "  {} {} (£{}m) - {}",
                    "OUT".red().bold(),
                    out.name.as_deref().unwrap_or("?"),
                    out.price,
                    out.reason
                );
                for option in &swap.swap_in_options {
                    println!(
                        "    {} {} {} (£{}m) - {}",
                        "IN".green(),
                        option.name.as_deref().unwrap_or("?"),
                        option.team,
                        option.price,
                        option.reason
                    );
                }
            }
        }
        Ok(())
    })
}

fn presenter(config: &AppConfig) -> Presenter {
    Presenter::new(PhotoLinker::new(&config.server.public_base_url))
}
