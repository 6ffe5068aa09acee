//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber. Every actor logs its
//! lifecycle and operations with an `entity_type` field, so module targets are hidden to
//! keep lines short.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and per-operation outcomes
//! RUST_LOG=debug cargo run    # full payloads
//! RUST_LOG=directory_server::bulk=debug cargo run
//! ```

/// Initializes the tracing subscriber with `RUST_LOG` filtering and compact output.
///
/// Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
