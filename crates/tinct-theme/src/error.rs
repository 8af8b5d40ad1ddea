// SPDX-License-Identifier: MIT

//! Error taxonomy for the theme pipeline.
//!
//! Extraction and selection fail fast: a bad image or an empty palette is
//! reported immediately and never papered over with a default role.
//! Parameter-table problems are *not* errors at this level: a single bad
//! rule is omitted from the table and logged, so one malformed entry never
//! aborts a 236-parameter generation.

use tinct_color::ParseColorError;

use crate::contrast::ContrastIssue;

pub type Result<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// Empty color list, zero opaque pixels, inconsistent buffer, bad options.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A role or literal given as a malformed hex string.
    #[error(transparent)]
    Color(#[from] ParseColorError),

    /// Contrast requirements the corrector could not satisfy even at the
    /// lightness extremes.
    #[error("{} contrast requirement(s) cannot be satisfied", issues.len())]
    UnsatisfiableContrast { issues: Vec<ContrastIssue> },

    /// A rule table that could not be loaded at all.
    #[error("malformed parameter rule table: {reason}")]
    RuleTable { reason: String },
}

impl ThemeError {
    #[must_use]
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_constructor_preserves_reason() {
        let error = ThemeError::invalid("no opaque pixels");
        assert_eq!(error.to_string(), "invalid input: no opaque pixels");
    }

    #[test]
    fn color_errors_convert() {
        fn parse() -> Result<tinct_color::Rgb> {
            Ok(tinct_color::Rgb::hex("#nope00")?)
        }
        assert!(matches!(parse(), Err(ThemeError::Color(_))));
    }
}
