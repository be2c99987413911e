//! Curio Collection Explorer - Main Entry Point
//!
//! This is the desktop application entry point that initializes
//! logging, builds the main window and starts the UI event loop.

use curio_ui::AppWindow;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr; RUST_LOG controls the filter.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("starting Curio Collection Explorer");

    // Initialize the application window
    let app = AppWindow::new()?;

    // Run the event loop (blocks until window closes)
    app.run()?;

    Ok(())
}
