// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build and validate the extractor configuration
// 3. Walk every prefix the service needs to reveal all its names
// 4. Save the sorted names and print a summary
// 5. Exit with proper code (0 = success, 2 = error)
//
// The runtime is single-threaded on purpose: exactly one request is in
// flight at any time.
// =============================================================================

use anyhow::{Context, Result};
use autocomplete_extractor::cli::Cli;
use autocomplete_extractor::collect::ExtractionSummary;
use autocomplete_extractor::{logger, output, HttpQueryClient, Traversal};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = cli.to_config();
    config.validate().context("Invalid configuration")?;
    let output_path = cli.output_path();

    println!("🔍 Using base URL: {}", config.base_url);
    tracing::debug!(?config, "resolved configuration");

    let client = HttpQueryClient::new(&config).context("Failed to create HTTP client")?;
    let traversal = Traversal::new(config, client);

    let report = traversal.run().await;

    output::write_names(&output_path, &report.names)?;

    let summary = report.summary(&output_path);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn print_summary(summary: &ExtractionSummary) {
    println!();
    println!("--- Extraction Complete ---");
    println!("📊 Summary:");
    println!("   🌐 Total API requests made: {}", summary.total_requests);
    println!("   🔤 Prefixes probed: {}", summary.total_probes);
    if summary.failed_probes > 0 {
        println!(
            "   ⚠️  Failed probes (treated as empty): {}",
            summary.failed_probes
        );
    }
    println!("   📏 Longest prefix probed: {}", summary.max_depth_reached);
    println!("   📋 Total unique names collected: {}", summary.unique_names);
    println!("📁 Results saved to {}", summary.output);
}
