//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Diagnostics go to stderr so they never
/// mix with command output.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` raises the level from
/// `warn` to `debug` for the storefront crates.
pub fn init(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("storefront_core=debug,storefront_cache=debug,storefront_data=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose);

    if json {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
