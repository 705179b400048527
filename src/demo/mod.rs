// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The demo run behind the `showcase` binary.
//!
//! [`run`] composes the numeric routines and an [`ItemCollector`] and writes
//! each demo section to the supplied writer. `Added item` notifications go to
//! the injected sink, so the binary passes a `ConsoleSink` to interleave them
//! with the report on stdout while tests record them separately.


use anyhow::Context;
use num_bigint::BigUint;
use std::fmt::Display;
use std::io::Write;
use std::sync::Arc;

use crate::collector::{CollectorStats, ItemCollector, ProcessedItem};
use crate::config::consts::BANNER_WIDTH;
use crate::config::DemoConfig;
use crate::numeric::{fibonacci, find_primes};
use crate::observability::DiagnosticSink;

const TITLE: &str = "Showcase - Rust Demo";
const UNAVAILABLE: &str = "<unavailable>";

/// Everything the demo computed, for callers that want more than the text.
#[derive(Debug, Clone)]
pub struct DemoSummary {
    pub fibonacci: Vec<BigUint>,
    pub primes: Vec<u64>,
    pub processed: Vec<ProcessedItem>,
    pub stats: CollectorStats,
}

/// Host details printed at the end of the demo.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemInfo {
    pub platform: &'static str,
    pub version: &'static str,
    pub current_dir: String,
}

impl SystemInfo {
    pub fn collect() -> Self {
        let current_dir = std::env::current_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|e| {
                tracing::debug!("current directory unavailable: {}", e);
                UNAVAILABLE.to_string()
            });

        Self {
            platform: std::env::consts::OS,
            version: env!("CARGO_PKG_VERSION"),
            current_dir,
        }
    }
}

/// `[a, b, c]` using each value's `Display`.
fn bracketed<T: Display>(values: &[T]) -> String {
    let joined: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", joined.join(", "))
}

/// Run every demo section, writing the report to `out`.
///
/// Only failures to write `out` are reported as errors.
pub fn run<W: Write>(
    out: &mut W,
    config: &DemoConfig,
    sink: Arc<dyn DiagnosticSink>,
) -> anyhow::Result<DemoSummary> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{}", rule).context("writing banner")?;
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", rule)?;

    writeln!(
        out,
        "\n📊 Fibonacci Sequence (first {} terms):",
        config.fibonacci_terms
    )
    .context("writing fibonacci section")?;
    let fibonacci = fibonacci(config.fibonacci_terms);
    writeln!(out, "{}", bracketed(&fibonacci))?;

    writeln!(out, "\n🔢 Prime Numbers up to {}:", config.prime_limit)
        .context("writing primes section")?;
    let primes = find_primes(config.prime_limit);
    writeln!(out, "{}", bracketed(&primes))?;

    writeln!(out, "\n⚙️ Data Processor Demo:").context("writing collector section")?;
    // The sink may print to the same stream; flush so our lines land first.
    out.flush()?;
    let mut collector = ItemCollector::new(config.processor_name.as_str()).with_sink(sink);
    for item in &config.items {
        collector.add(item.clone());
    }

    let processed = collector.process_all();
    for result in &processed {
        let line = serde_json::to_string(result).context("serializing processed item")?;
        writeln!(out, "  {}", line)?;
    }
    let stats = collector.stats();
    writeln!(out, "\nProcessed {} items", processed.len())?;
    writeln!(out, "Stats: {}", stats)?;

    let info = SystemInfo::collect();
    writeln!(out, "\n💻 System Information:").context("writing system section")?;
    writeln!(out, "Platform: {}", info.platform)?;
    writeln!(out, "Crate Version: {}", info.version)?;
    writeln!(out, "Current Directory: {}", info.current_dir)?;

    writeln!(out, "\n✅ Demo completed successfully!")?;
    writeln!(out, "{}", rule)?;
    out.flush()?;

    Ok(DemoSummary {
        fibonacci,
        primes,
        processed,
        stats,
    })
}
