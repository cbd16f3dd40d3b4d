// src/logger.rs
// =============================================================================
// Logging setup for the binary.
//
// Progress lines go through tracing to stdout. RUST_LOG wins when set;
// otherwise --verbose picks between info and debug for this crate.
// =============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "autocomplete_extractor=debug,info"
    } else {
        "autocomplete_extractor=info,warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
