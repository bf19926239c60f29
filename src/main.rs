// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! deskfolio - a portfolio presented as a desktop
//!
//! A cross-platform desktop application showing creative projects behind
//! folder icons and draggable windows: video, photo galleries, single
//! images and a toy music player.

mod app;
mod config;
mod desktop;
mod io;
mod models;
mod ui;
mod util;

use app::PortfolioApp;
use anyhow::{Context, Result};
use config::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::load();

    // Initialize logging; RUST_LOG wins over the config filter
    init_logging(config.as_ref().ok().and_then(|c| c.logging.filter.as_deref()));

    let config = config.context("Failed to load configuration")?;
    let title = config.window.title.clone();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0])
            .with_title(&title),
        ..Default::default()
    };

    let app = PortfolioApp::new(config)?;

    // Run the application
    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

fn init_logging(filter: Option<&str>) {
    let mut builder = env_logger::Builder::new();

    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else if let Some(filter) = filter {
        builder.parse_filters(filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }

    builder.init();
}
