use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "typed_drills=debug,info"
    } else {
        "typed_drills=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Compact human-readable output. Returns `false` if a global subscriber was already set.
pub fn init_logger(verbose: bool) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .is_ok()
}

pub fn init_json_logger() -> bool {
    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init()
        .is_ok()
}
