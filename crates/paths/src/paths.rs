//! Path context for runtime environment detection and app-local data paths.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Identifies the runtime environment where the application is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnvironment {
    /// Running via `cargo run` or in development mode
    Development,
    /// Running as an installed binary in production
    Production,
}

/// Context for resolving where the app keeps its local data.
///
/// In development the data lives next to the project so it is easy to inspect
/// and wipe; in production it lives in the platform's local-data directory.
#[derive(Debug, Clone)]
pub struct PathContext {
    /// The runtime environment (development or production)
    environment: RuntimeEnvironment,
    /// Base path for all application data
    base_path: Arc<Path>,
    /// Application identifier (e.g., "intake")
    app_id: &'static str,
}

impl PathContext {
    /// Creates a new PathContext with automatic environment detection.
    pub fn new(app_id: &'static str) -> Self {
        let environment = Self::detect_environment();
        let base_path = Self::determine_base_path(environment);

        Self {
            environment,
            base_path: base_path.into(),
            app_id,
        }
    }

    /// Creates a PathContext with an explicit base path (useful for testing).
    pub fn with_base_path(base_path: PathBuf, app_id: &'static str) -> Self {
        let environment = Self::detect_environment();

        Self {
            environment,
            base_path: base_path.into(),
            app_id,
        }
    }

    /// Detects the runtime environment based on executable location.
    fn detect_environment() -> RuntimeEnvironment {
        // Check if running from cargo (development)
        if let Ok(exe_path) = std::env::current_exe() {
            if exe_path.components().any(|c| c.as_os_str() == "target") {
                return RuntimeEnvironment::Development;
            }
        }

        // Check for cargo environment variables
        if std::env::var("CARGO").is_ok() || std::env::var("CARGO_MANIFEST_DIR").is_ok() {
            return RuntimeEnvironment::Development;
        }

        RuntimeEnvironment::Production
    }

    /// Determines the base path based on the runtime environment.
    fn determine_base_path(environment: RuntimeEnvironment) -> PathBuf {
        match environment {
            RuntimeEnvironment::Development => {
                // In development, use project root or current directory
                if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
                    PathBuf::from(manifest_dir)
                } else if let Ok(current_dir) = std::env::current_dir() {
                    current_dir
                } else {
                    PathBuf::from(".")
                }
            }
            RuntimeEnvironment::Production => {
                // In production, use the platform-specific data directory
                dirs::data_local_dir()
                    .map(|dir| dir.join("Intake"))
                    .unwrap_or_else(|| PathBuf::from("."))
            }
        }
    }

    /// Returns the runtime environment.
    pub fn environment(&self) -> RuntimeEnvironment {
        self.environment
    }

    /// Returns the base path.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the app identifier.
    pub fn app_id(&self) -> &str {
        self.app_id
    }

    /// Returns the data directory path: `<base>/<app_id>/data/`
    pub fn data_dir(&self) -> PathBuf {
        self.base_path.join(self.app_id).join("data")
    }

    /// Returns the path of a record file inside the data directory:
    /// `<base>/<app_id>/data/<key>.json`
    pub fn record_file(&self, key: &str) -> PathBuf {
        self.data_dir().join(format!("{}.json", key))
    }

    /// Ensures the data directory exists.
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        let data_dir = self.data_dir();
        if !data_dir.exists() {
            std::fs::create_dir_all(&data_dir)?;
        }
        Ok(())
    }
}
