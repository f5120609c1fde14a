//! Cell recognition through the Tesseract command line binary.

use super::CellRecognizer;
use crate::core::constants::{DEFAULT_TESSERACT_BINARY, TESSERACT_CMD_ENV};
use crate::core::{GridScanError, TesseractConfig};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Recognizes cell text by invoking the Tesseract executable.
///
/// Each call writes the crop to a temporary PNG, runs the binary with
/// `stdout` as the output target, and returns the trimmed standard output.
/// The binary is resolved in order from the explicit configuration path,
/// the `TESSERACT_CMD` environment variable, and finally a plain
/// `tesseract` looked up on `PATH`.
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    binary_path: PathBuf,
    language: Option<String>,
    psm: u32,
}

impl TesseractRecognizer {
    /// Creates a recognizer with the default configuration.
    pub fn new() -> Self {
        Self::from_config(&TesseractConfig::default())
    }

    /// Creates a recognizer from a configuration, resolving the binary.
    pub fn from_config(config: &TesseractConfig) -> Self {
        let binary_path = config
            .binary_path
            .clone()
            .or_else(|| std::env::var_os(TESSERACT_CMD_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TESSERACT_BINARY));

        Self {
            binary_path,
            language: config.language.clone(),
            psm: config.psm,
        }
    }

    /// Sets the recognition language passed as `-l`.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the page segmentation mode passed as `--psm`.
    pub fn with_psm(mut self, psm: u32) -> Self {
        self.psm = psm;
        self
    }

    /// Returns the resolved path of the Tesseract binary.
    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    /// Returns the page segmentation mode in use.
    pub fn psm(&self) -> u32 {
        self.psm
    }
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CellRecognizer for TesseractRecognizer {
    fn recognize(&self, cell: &DynamicImage) -> Result<String, GridScanError> {
        let file = tempfile::Builder::new()
            .prefix("gridscan_cell_")
            .suffix(".png")
            .tempfile()
            .map_err(|e| {
                GridScanError::recognition_with_source("Failed to create temporary cell image", e)
            })?;
        cell.save(file.path()).map_err(|e| {
            GridScanError::recognition_with_source("Failed to write temporary cell image", e)
        })?;

        let mut command = Command::new(&self.binary_path);
        command
            .arg(file.path())
            .arg("stdout")
            .arg("--psm")
            .arg(self.psm.to_string());
        if let Some(language) = &self.language {
            command.arg("-l").arg(language);
        }

        let output = command.output().map_err(|e| {
            GridScanError::recognition_with_source(
                format!("Failed to run '{}'", self.binary_path.display()),
                e,
            )
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GridScanError::recognition(format!(
                "'{}' exited with {}: {}",
                self.binary_path.display(),
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(
            target: "recognize",
            chars = text.len(),
            "Recognized cell text"
        );
        Ok(text)
    }
}
