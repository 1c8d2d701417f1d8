use tracing_subscriber::EnvFilter;

/// Initializes the diagnostic channel (stdout, `info` by default,
/// overridable via `RUST_LOG`). The run log of record is `report::ReportSink`.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
