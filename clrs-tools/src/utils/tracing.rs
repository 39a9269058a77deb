/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

fn filter_layer() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

/// Install a global subscriber logging to `stdout` that respects `RUST_LOG`, falling back
/// to the "info" level when the variable is unset.
pub fn init_subscriber() {
    tracing_subscriber::registry()
        .with(filter_layer())
        .with(fmt::layer().with_target(true))
        .init();
}

/// Create a subscriber for tests.
///
/// The subscriber is only installed for the current thread until the returned guard is
/// dropped, so concurrently running tests do not conflict.
pub fn init_test_subscriber() -> DefaultGuard {
    tracing_subscriber::registry()
        .with(filter_layer())
        .with(fmt::layer().with_target(true).with_test_writer())
        .set_default()
}
