// ABOUTME: Server binary entry point for the Nutrition Buddy backend
// ABOUTME: Loads configuration, constructs the Gemini provider, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

//! # Nutrition Buddy Server Binary
//!
//! Starts the meal-analysis chat backend. Requires `GEMINI_API_KEY` in the
//! environment; the process refuses to start without it.

use anyhow::Result;
use clap::Parser;
use nutrition_buddy::{
    config::ServerConfig,
    llm::{GeminiProvider, LlmProvider},
    logging,
    resources::ServerResources,
    server,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "nutrition-buddy-server")]
#[command(about = "Nutrition Buddy - friendly meal analysis chat backend")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize production logging before anything that can log
    logging::init_from_env()?;

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting Nutrition Buddy server");
    info!("{}", config.summary());

    // Missing credential is fatal: refuse to start rather than degrade
    let provider = GeminiProvider::from_env()?;
    info!(
        "LLM provider initialized: {} (model: {})",
        provider.name(),
        provider.default_model()
    );

    let resources = Arc::new(ServerResources::new(Arc::new(provider), config));

    server::serve(resources).await?;
    Ok(())
}
