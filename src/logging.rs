use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging for tools embedding the library.
///
/// `level` is a tracing directive such as `"debug"` or `"ordgraph=trace"`;
/// when `None`, the default is `ordgraph=warn`. The `ORDGRAPH_LOG`
/// environment variable (or `RUST_LOG`) overrides whatever is passed in.
pub fn init_tracing(level: Option<&str>, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = level.unwrap_or("warn");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("ORDGRAPH_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("ordgraph={}", level)
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
