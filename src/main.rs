// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use showcase::config::consts::DEFAULT_LOG_FILTER;
use showcase::config::{config_path_from_env, load_and_validate_config, DemoConfig};
use showcase::demo;
use showcase::observability::messages::demo::{ConfigFallback, ConfigLoaded, DemoAborted};
use showcase::observability::ConsoleSink;

/// Logs go to stderr so stdout carries only the demo report
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A second init (e.g. under a test harness) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Demo config from `SHOWCASE_CONFIG`, or the built-in defaults
fn resolve_config() -> DemoConfig {
    let Some(path) = config_path_from_env() else {
        return DemoConfig::default();
    };

    match load_and_validate_config(&path) {
        Ok(config) => {
            tracing::info!(
                "{}",
                ConfigLoaded {
                    path: &path,
                    item_count: config.items.len(),
                }
            );
            config
        }
        Err(e) => {
            tracing::warn!("{}", ConfigFallback { path: &path, error: &e });
            DemoConfig::default()
        }
    }
}

fn main() {
    init_tracing();

    let config = resolve_config();
    let mut stdout = io::stdout();

    if let Err(e) = demo::run(&mut stdout, &config, Arc::new(ConsoleSink)) {
        tracing::error!("{}", DemoAborted { error: &format!("{:#}", e) });
    }
}
