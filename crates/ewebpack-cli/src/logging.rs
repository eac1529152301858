//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; `ewebpack-core`
//! and `ewebpack-adapters` only *emit* spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)     | Filter level |
//! |-------------|--------------|
//! | (none)      | INFO         |
//! | `--verbose` | DEBUG        |
//! | `--quiet`   | ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    // RUST_LOG wins; otherwise every ewebpack crate gets the same level.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate the verbose + quiet flags to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    }
}

fn filter_directive(level: &str) -> String {
    format!("ewebpack={level},ewebpack_core={level},ewebpack_adapters={level}")
}
