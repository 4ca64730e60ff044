//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber. Log lines use the compact
//! format without the module prefix (`with_target(false)`); the structured fields carry the
//! context instead.
//!
//! ## Filtering
//!
//! `RUST_LOG` wins when set. Otherwise the level passed by the caller applies (`--log-level`,
//! default `info`).
//!
//! ```bash
//! # Every request, action and state change
//! RUST_LOG=debug cafe-queue
//!
//! # Only the queue, quietly everywhere else
//! RUST_LOG=warn,cafe_queue::order_actor=debug cafe-queue
//! ```
//!
//! ## What Gets Traced
//!
//! With `info`:
//!
//! ```text
//! INFO Café open operating=false menus=5 now=2024-05-01 12:00:00 +09:00
//! INFO Order generation started
//! INFO Order generated order_id=order_1 menus=["Cold Brew", "Americano"] predicted=2024-05-01 12:02:20 +09:00
//! INFO Delay applied order_id=order_1 minutes=2 cascaded=0 predicted=2024-05-01 12:04:20 +09:00
//! INFO Order completed late by 12.3s order_id=order_1
//! ```
//!
//! `debug` adds one line per actor request and the HTTP request spans from `tower-http`.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init: a second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
