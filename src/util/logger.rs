use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// level. Calling this more than once is a no-op.
pub fn init_logger(verbose: bool) {
    let default = if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .compact()
        .try_init();
}
