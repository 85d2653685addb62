//! Error rendering using miette
//!
//! [`SequenceError`] carries a diagnostic code and, where useful, a help
//! line. This module turns it into a framed report for terminals.

use crate::SequenceError;
use miette::{GraphicalReportHandler, GraphicalTheme, ThemeCharacters, ThemeStyles};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The character set to use for rendering.
    /// Defaults to Unicode for rich visual output.
    pub charset: CharSet,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig {
    const fn default() -> Self {
        Self {
            color: true,
            charset: CharSet::Unicode,
        }
    }

    fn theme(&self) -> GraphicalTheme {
        let characters = match self.charset {
            CharSet::Unicode => ThemeCharacters::unicode(),
            CharSet::Ascii => ThemeCharacters::ascii(),
        };
        let styles = if self.color {
            ThemeStyles::ansi()
        } else {
            ThemeStyles::none()
        };
        GraphicalTheme { characters, styles }
    }
}

/// Render an error with formatting to stderr using default config.
///
/// # Example
/// ```no_run
/// use arrayish::{IndexedSequence, render_error};
///
/// let seq = IndexedSequence::<i32>::new();
/// if let Err(e) = seq.reduce(|a, b, _, _| a + b) {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &SequenceError) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use arrayish::{IndexedSequence, RenderConfig, render_error_to};
///
/// let seq = IndexedSequence::<i32>::new();
/// let err = seq.reduce(|a, b, _, _| a + b).unwrap_err();
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&err, &mut buf, &config).unwrap();
/// let output = String::from_utf8_lossy(&buf);
/// assert!(output.contains("reduce of empty sequence"));
/// ```
pub fn render_error_to(
    error: &SequenceError,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let handler = GraphicalReportHandler::new_themed(config.theme()).with_links(false);

    let mut out = String::new();
    handler
        .render_report(&mut out, error)
        .map_err(std::io::Error::other)?;
    writer.write_all(out.as_bytes())
}
