//! # InkKit
//!
//! A handwriting and sketching notebook whose tools live in a floating
//! toolbox that opens under the pointer.
//!
//! ## Architecture
//!
//! InkKit is organized as a workspace with multiple crates:
//!
//! 1. **inkkit-core** - Geometry, toolbox placement, button bindings, tap detection
//! 2. **inkkit-settings** - Configuration files and validation
//! 3. **inkkit-ui** - GTK user interface
//! 4. **inkkit** - Main binary that integrates all crates

pub use inkkit_core::{
    ButtonAction, ButtonId, Error, FloatingToolboxPositioner, Point, Rect, Result, Size,
    ToolboxChrome, ToolboxHost, ToolboxPlacementState,
};

pub use inkkit_settings::{Config, SettingsError, SettingsManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // In Windows GUI mode (release builds), log to a file instead of stdout
    #[cfg(all(target_os = "windows", not(debug_assertions)))]
    {
        use std::fs::OpenOptions;

        let log_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| std::path::PathBuf::from("."));

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_dir.join("inkkit.log"))
        {
            Ok(file) => {
                let fmt_layer = fmt::layer()
                    .with_writer(file)
                    .with_target(true)
                    .with_line_number(true)
                    .with_ansi(false);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .try_init()?;
            }
            Err(_) => {
                tracing_subscriber::registry().with(env_filter).try_init()?;
            }
        }
    }

    #[cfg(not(all(target_os = "windows", not(debug_assertions))))]
    {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
