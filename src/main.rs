#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

/// Configured spreadsheet-append endpoint, set from the command line
static SHEETS_URL: OnceLock<Option<String>> = OnceLock::new();

/// Endpoint URL for registrations, if one was configured
pub fn sheets_url() -> Option<String> {
    SHEETS_URL.get().cloned().flatten()
}

/// CEIS 2K26 - Under the Stars conference registration
#[derive(Parser, Debug)]
#[command(name = "ceis-desktop")]
#[command(about = "CEIS 2K26 - Under the Stars landing page and registration")]
struct Args {
    /// Spreadsheet-append endpoint URL (defaults to $CEIS_SHEETS_URL)
    #[arg(long)]
    sheets_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let endpoint = args
        .sheets_url
        .or_else(|| std::env::var("CEIS_SHEETS_URL").ok());
    match &endpoint {
        Some(url) => tracing::info!("submitting registrations to {url}"),
        None => tracing::warn!("no sheets endpoint configured; registrations will be logged locally"),
    }
    let _ = SHEETS_URL.set(endpoint);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("CEIS 2K26 - Illuminate Your Path")
            .with_inner_size(LogicalSize::new(1100.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
