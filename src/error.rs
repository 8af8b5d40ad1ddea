// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Theme(#[from] tinct_theme::ThemeError),

    #[error("unknown preset {name:?} (try `tinct presets`)")]
    UnknownPreset { name: String },
}

impl CliError {
    /// Process exit status: 2 for unmet contrast, 1 for everything else.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Theme(tinct_theme::ThemeError::UnsatisfiableContrast { .. }) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsatisfiable_contrast_has_its_own_exit_code() {
        let error = CliError::from(tinct_theme::ThemeError::UnsatisfiableContrast { issues: Vec::new() });
        assert_eq!(error.exit_code(), 2);
        assert_eq!(CliError::UnknownPreset { name: "x".into() }.exit_code(), 1);
    }

    #[test]
    fn preset_error_names_the_preset() {
        let error = CliError::UnknownPreset { name: "neon".into() };
        assert!(error.to_string().contains("\"neon\""));
    }
}
