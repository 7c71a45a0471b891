use clap::Parser;
use eframe::egui;
use std::sync::mpsc;

mod app;
mod controller;
mod index;
mod ui;

use app::DocseekApp;
use index::loader;
use index::SearchOptions;

/// Search client for documentation sites generated by hdoc-style tools.
#[derive(Parser)]
#[command(name = "docseek", version)]
struct Args {
    /// Base URL of the served documentation site, e.g. http://localhost:8080
    docs_url: String,

    /// Maximum number of results to display
    #[arg(long, default_value_t = 90)]
    limit: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let load_receiver = if controller::is_local_docs(&args.docs_url) {
        log::warn!("documentation is on the local filesystem, search disabled");
        None
    } else {
        let (load_tx, load_rx) = mpsc::channel();
        let _loader = loader::spawn_loader(args.docs_url.clone(), load_tx);
        Some(load_rx)
    };

    let options = SearchOptions {
        limit: args.limit,
        ..SearchOptions::default()
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 480.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Docseek",
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(DocseekApp::new(
                cc,
                args.docs_url,
                options,
                load_receiver,
            )))
        }),
    )?;

    Ok(())
}
