//! Normalizes the two accepted calling conventions into a [`PlotConfig`]
//!
//! Older callers pass jitter and style positionally after the samples and
//! keys; current callers pass named options. Either shape is accepted, but a
//! single call may not mix them.

use crate::config::PlotConfig;
use notbox_core::{Error, Result};
use tracing::warn;

/// Value of a named option
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Real(f64),
    Bool(bool),
    Text(String),
}

impl OptionValue {
    fn kind(&self) -> &'static str {
        match self {
            OptionValue::Real(_) => "number",
            OptionValue::Bool(_) => "boolean",
            OptionValue::Text(_) => "text",
        }
    }

    fn expect_real(&self, name: &str) -> Result<f64> {
        match self {
            OptionValue::Real(v) => Ok(*v),
            other => Err(wrong_type(name, "number", other)),
        }
    }

    fn expect_text(&self, name: &str) -> Result<&str> {
        match self {
            OptionValue::Text(s) => Ok(s),
            other => Err(wrong_type(name, "text", other)),
        }
    }

    /// Booleans, or the numbers 0 and 1
    fn expect_flag(&self, name: &str) -> Result<bool> {
        match self {
            OptionValue::Bool(b) => Ok(*b),
            OptionValue::Real(v) if *v == 0.0 => Ok(false),
            OptionValue::Real(v) if *v == 1.0 => Ok(true),
            other => Err(wrong_type(name, "boolean", other)),
        }
    }
}

fn wrong_type(name: &str, expected: &str, got: &OptionValue) -> Error {
    Error::InvalidParameter(format!(
        "Option '{name}' expects a {expected}, got a {}",
        got.kind()
    ))
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Real(v)
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Text(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Text(v)
    }
}

/// Deprecated positional arguments: jitter then style
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyArgs {
    pub jitter: Option<f64>,
    pub style: Option<String>,
}

impl LegacyArgs {
    fn is_empty(&self) -> bool {
        self.jitter.is_none() && self.style.is_none()
    }
}

/// The configuration part of a plot call, in either convention
///
/// ```rust
/// use notbox_plot::{CallArgs, Style};
///
/// let config = CallArgs::new()
///     .option("style", "line")
///     .option("markMedian", true)
///     .normalize()
///     .unwrap();
/// assert_eq!(config.style, Style::Line);
/// assert!(config.mark_median);
///
/// // Positional and named arguments cannot be combined
/// let mixed = CallArgs::new().legacy_jitter(0.2).option("style", "line");
/// assert!(mixed.normalize().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    legacy: LegacyArgs,
    options: Vec<(String, OptionValue)>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positional jitter argument
    pub fn legacy_jitter(mut self, jitter: f64) -> Self {
        self.legacy.jitter = Some(jitter);
        self
    }

    /// Positional style argument
    pub fn legacy_style(mut self, style: impl Into<String>) -> Self {
        self.legacy.style = Some(style.into());
        self
    }

    /// Named option; later occurrences of the same name win
    pub fn option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.push((name.into(), value.into()));
        self
    }

    /// Resolve to one validated configuration
    pub fn normalize(&self) -> Result<PlotConfig> {
        let mut config = PlotConfig::default();

        if !self.legacy.is_empty() {
            if !self.options.is_empty() {
                let names: Vec<&str> = self.options.iter().map(|(n, _)| n.as_str()).collect();
                return Err(Error::ConflictingConventions(format!(
                    "positional jitter/style cannot be combined with named options ({})",
                    names.join(", ")
                )));
            }
            warn!("positional jitter/style arguments are deprecated; use named options");
            if let Some(jitter) = self.legacy.jitter {
                config.jitter = jitter;
            }
            if let Some(style) = &self.legacy.style {
                config.style = style.parse()?;
            }
        }

        for (name, value) in &self.options {
            match name.to_ascii_lowercase().as_str() {
                "jitter" => config.jitter = value.expect_real(name)?,
                "style" => config.style = value.expect_text(name)?.parse()?,
                "interval" => config.interval = value.expect_text(name)?.parse()?,
                "markmedian" => config.mark_median = value.expect_flag(name)?,
                _ => return Err(Error::UnknownOption(name.clone())),
            }
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Style;
    use notbox_interval::IntervalKind;

    #[test]
    fn test_empty_call_gives_defaults() {
        assert_eq!(CallArgs::new().normalize().unwrap(), PlotConfig::default());
    }

    #[test]
    fn test_legacy_convention() {
        let config = CallArgs::new()
            .legacy_jitter(0.6)
            .legacy_style("sdline")
            .normalize()
            .unwrap();
        assert_eq!(config.jitter, 0.6);
        assert_eq!(config.style, Style::SdLine);
        assert_eq!(config.interval, IntervalKind::Sem);
    }

    #[test]
    fn test_keyword_convention() {
        let config = CallArgs::new()
            .option("Jitter", 0.1)
            .option("style", "LINE")
            .option("interval", "tInterval")
            .option("markMedian", 1.0)
            .normalize()
            .unwrap();
        assert_eq!(config.jitter, 0.1);
        assert_eq!(config.style, Style::Line);
        assert_eq!(config.interval, IntervalKind::TInterval);
        assert!(config.mark_median);
    }

    #[test]
    fn test_mixing_conventions_is_rejected() {
        let err = CallArgs::new()
            .legacy_style("line")
            .option("interval", "SEM")
            .normalize()
            .unwrap_err();
        assert!(matches!(err, Error::ConflictingConventions(_)));
        assert!(err.to_string().contains("interval"));
    }

    #[test]
    fn test_unknown_tokens_and_options() {
        assert!(matches!(
            CallArgs::new().option("style", "violin").normalize(),
            Err(Error::UnknownStyle(_))
        ));
        assert!(matches!(
            CallArgs::new().option("interval", "bootstrap").normalize(),
            Err(Error::UnknownInterval(_))
        ));
        assert!(matches!(
            CallArgs::new().legacy_style("violin").normalize(),
            Err(Error::UnknownStyle(_))
        ));
        assert!(matches!(
            CallArgs::new().option("colour", "red").normalize(),
            Err(Error::UnknownOption(ref n)) if n == "colour"
        ));
    }

    #[test]
    fn test_wrong_value_types() {
        assert!(matches!(
            CallArgs::new().option("jitter", "wide").normalize(),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            CallArgs::new().option("markMedian", 2.0).normalize(),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            CallArgs::new().option("style", true).normalize(),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_negative_jitter_rejected() {
        assert!(CallArgs::new().legacy_jitter(-1.0).normalize().is_err());
        assert!(CallArgs::new().option("jitter", -1.0).normalize().is_err());
    }

    #[test]
    fn test_last_option_wins() {
        let config = CallArgs::new()
            .option("style", "line")
            .option("style", "sdline")
            .normalize()
            .unwrap();
        assert_eq!(config.style, Style::SdLine);
    }
}
