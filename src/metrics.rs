// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

// Constructors below only fail on an invalid metric name, label or help text.
// All of those are literals, and `every_counter_registers` forces each one.

pub static PROFILE_READS: Lazy<IntCounter> = Lazy::new(|| {
    register(IntCounter::new("profile_reads_total", "Profile read requests served").unwrap())
});

pub static PROFILES_CREATED: Lazy<IntCounter> = Lazy::new(|| {
    register(
        IntCounter::new("profiles_created_total", "Profiles created lazily on first read").unwrap(),
    )
});

pub static PROFILE_UPSERTS: Lazy<IntCounter> = Lazy::new(|| {
    register(IntCounter::new("profile_upserts_total", "Successful profile upserts").unwrap())
});

pub static STORE_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
    register(
        IntCounterVec::new(
            Opts::new("profile_store_failures_total", "Failed store operations"),
            &["operation"],
        )
        .unwrap(),
    )
});

fn register<C>(collector: C) -> C
where
    C: prometheus::core::Collector + Clone + 'static,
{
    // Only fails on duplicate names, which the statics above rule out
    let _ = REGISTRY.register(Box::new(collector.clone()));
    collector
}

/// Render every registered metric in the Prometheus text format.
pub fn gather() -> String {
    let mut buffer = Vec::new();
    if let Err(e) = TextEncoder::new().encode(&REGISTRY.gather(), &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
    }
    String::from_utf8(buffer).unwrap_or_default()
}
