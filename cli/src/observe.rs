use tracing_subscriber::EnvFilter;

/// Initialize a stderr tracing subscriber.
///
/// stdout is reserved for schematic JSON, so logs never go there.
pub fn init_stderr_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,dendrite_core=info,dendrite_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
