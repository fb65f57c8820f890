#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Service Request Intake - desktop form
#[derive(Parser, Debug)]
#[command(name = "intake-desktop")]
#[command(about = "Three-step pediatric services request form")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 640.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,
}

fn main() {
    let args = Args::parse();
    intake_core::logging::setup_logging(args.verbose);

    tracing::info!(width = args.width, height = args.height, "Starting intake form");

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("New Service Request")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
