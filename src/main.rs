use anyhow::{Context, Result};
use clap::Parser;
use digit_capture::report;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "digit-capture")]
#[command(version)]
#[command(
    about = "Fullscreen canvas that captures a hand-drawn digit as a 28x28 MNIST-style matrix",
    long_about = "Draw a digit with the mouse or a stylus. Every 30 seconds the drawing is \
                  normalized to a 28x28 matrix, printed to stdout and the canvas is cleared. \
                  Press ESC to exit, F11 to toggle fullscreen. Set RUST_LOG to adjust \
                  diagnostics on stderr."
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .init();

    report::write_banner(&mut std::io::stdout().lock()).context("Failed to print banner")?;

    tracing::info!("Digit Capture v{}", env!("CARGO_PKG_VERSION"));
    digit_capture::gui::run_gui().map_err(|e| anyhow::anyhow!("GUI error: {:?}", e))?;

    Ok(())
}
