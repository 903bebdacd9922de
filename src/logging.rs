// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Configures tracing subscriber with env-filter driven log levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DNX Fitness

//! Structured logging setup built on `tracing`.

use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    fn from_env() -> Self {
        match env::var("LOG_FORMAT").as_deref() {
            Ok("compact") => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Log level comes from `RUST_LOG` (default `info`), format from
/// `LOG_FORMAT`. Safe to call more than once; later calls are no-ops.
///
/// # Errors
///
/// Returns an error if the environment filter cannot be built.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // try_init so tests that race on initialization do not panic
    let result = match LogFormat::from_env() {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    drop(result);

    Ok(())
}
