//! Run the tab steward against a connected extension.
//!
//! Demonstrates:
//! - Building a Steward with custom threshold and port
//! - Waiting for the extension to connect
//! - Running the event loop until Ctrl+C or disconnect
//!
//! Usage:
//!   cargo run --example steward
//!   cargo run --example steward -- --port 9333 --threshold 2
//!   cargo run --example steward -- --no-clipboard --debug
//!   cargo run --example steward -- --no-wait   (run until disconnect)

mod common;

// ============================================================================
// Imports
// ============================================================================

use common::Args;
use tab_steward::{Result, Steward};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    let args = Args::parse();
    common::init_logging(args.debug);

    if let Err(e) = run(args).await {
        eprintln!("\n[ERROR] {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    println!("=== Tab Steward ===\n");

    // ========================================================================
    // Build Steward
    // ========================================================================

    println!("[1] Building steward...");

    let mut builder = Steward::builder()
        .port(args.port)
        .clipboard(!args.no_clipboard);
    if let Some(threshold) = args.threshold {
        builder = builder.threshold(threshold);
    }
    let steward = builder.build()?;

    let options = steward.options();
    println!("    Threshold:    {}/4", options.threshold);
    println!("    Settle delay: {:?}", options.settle_delay);
    println!("    Clipboard:    {}", options.clipboard);
    println!("    ✓ Steward ready\n");

    // ========================================================================
    // Wait for Extension
    // ========================================================================

    println!("[2] Listening...");

    let pending = steward.listen().await?;
    println!("    URL: {}", pending.ws_url());
    println!("    Waiting for the extension to connect...");

    let session = pending.accept().await?;
    let ready = session.ready();
    println!("    ✓ Connected to {} (extension {})\n", ready.browser, ready.version);

    // ========================================================================
    // Run
    // ========================================================================

    println!("[3] Watching tabs. Open a new tab to see it move to the front.\n");

    if args.no_wait {
        let dispatched = session.run().await;
        println!("\n[Done] Extension disconnected after {dispatched} event(s)");
        return Ok(());
    }

    tokio::select! {
        dispatched = session.run() => {
            println!("\n[Done] Extension disconnected after {dispatched} event(s)");
        }
        () = common::wait_for_exit(false) => {
            println!("\n[Cleanup] Shutting down...");
            session.shutdown();
        }
    }

    Ok(())
}
