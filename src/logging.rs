use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber
///
/// Logs go to stderr: stdout carries the MCP protocol. `RUST_LOG` overrides
/// the default filter.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "birthday_mcp=debug,info"
    } else {
        "birthday_mcp=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(false)
                .compact(),
        )
        .init();
}
