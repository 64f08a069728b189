//! Presentation capability for stylesheets returned by the service.
//!
//! The result page picks up its theme from whatever [`Presentation`] the
//! caller hands to the submission flow.

use std::path::{Path, PathBuf};

/// Applies stylesheet text to the result view.
pub trait Presentation {
    fn apply_stylesheet(&mut self, css: &str) -> Result<(), PresentationError>;
}

/// Writes the stylesheet to a file served alongside the result page.
#[derive(Debug, Clone)]
pub struct StylesheetFile {
    path: PathBuf,
}

impl StylesheetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Presentation for StylesheetFile {
    fn apply_stylesheet(&mut self, css: &str) -> Result<(), PresentationError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PresentationError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::write(&self.path, css).map_err(|e| PresentationError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        log::info!("Theme stylesheet written to {}", self.path.display());
        Ok(())
    }
}

/// Keeps injected stylesheets in memory, in injection order.
#[derive(Debug, Clone, Default)]
pub struct InjectedStyles {
    sheets: Vec<String>,
}

impl InjectedStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheets(&self) -> &[String] {
        &self.sheets
    }
}

impl Presentation for InjectedStyles {
    fn apply_stylesheet(&mut self, css: &str) -> Result<(), PresentationError> {
        self.sheets.push(css.to_string());
        Ok(())
    }
}

/// Discards stylesheets.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPresentation;

impl Presentation for NoPresentation {
    fn apply_stylesheet(&mut self, _css: &str) -> Result<(), PresentationError> {
        log::debug!("Theme stylesheet ignored");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PresentationError {
    #[error("Failed to write stylesheet '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
