/*!
 * Structured Tracing
 * Subscriber setup and per-run spans using the tracing crate
 */

use tracing::{info, info_span, Span};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SCHED_TRACE_JSON: Enable JSON output (default: false)
///
/// `log` records emitted by the policies are forwarded into the same subscriber.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("SCHED_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    // A second init (tests, embedding callers) keeps the existing subscriber
    let result = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    };

    if result.is_ok() {
        info!(json = use_json, "Structured tracing initialized");
    }
}

/// Generate a unique id for correlating the events of one run
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one simulation run
pub fn span_simulation(run_id: &str, policy: &str, processes: usize) -> Span {
    info_span!(
        "simulation",
        run_id = %run_id,
        policy = policy,
        processes = processes,
        elapsed = tracing::field::Empty,
    )
}
