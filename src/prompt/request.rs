//! The immutable description of one prompt.

use crate::prompt::value::Promptable;

/// Everything the engine needs to ask for one value of type `T`.
///
/// A request is built fresh per acquisition and never mutated by the
/// engine. Both option lists may be present at once; which one is
/// consulted follows the classification priority order, and for numeric
/// and enum ranges the respective list doubles as the pair of inclusive
/// bounds.
#[derive(Debug, Clone)]
pub struct AcquisitionRequest<T> {
    /// Message printed once, before any option rendering.
    pub message: Option<String>,
    /// Treat the configured option pair as inclusive bounds.
    pub is_range: bool,
    /// Permit picking options by their 1-based display number.
    pub allow_numbers: bool,
    /// Render the option list (or range hint) before the first read.
    pub show_options: bool,
    /// Plain-text options; also carries the bounds of a numeric range.
    pub string_options: Option<Vec<String>>,
    /// Enumeration-member options; also carries the bounds of an enum range.
    pub enum_options: Option<Vec<T>>,
}

impl<T> Default for AcquisitionRequest<T> {
    fn default() -> Self {
        Self {
            message: None,
            is_range: false,
            allow_numbers: true,
            show_options: true,
            string_options: None,
            enum_options: None,
        }
    }
}

impl<T> AcquisitionRequest<T> {
    /// String options, empty when none are configured.
    pub fn string_choices(&self) -> &[String] {
        self.string_options.as_deref().unwrap_or(&[])
    }

    /// Enum options, empty when none are configured.
    pub fn enum_choices(&self) -> &[T] {
        self.enum_options.as_deref().unwrap_or(&[])
    }

    /// True when a non-empty string-option list is configured.
    pub fn has_string_options(&self) -> bool {
        !self.string_choices().is_empty()
    }

    /// True when a non-empty enum-option list is configured.
    pub fn has_enum_options(&self) -> bool {
        !self.enum_choices().is_empty()
    }
}

impl<T: Promptable> AcquisitionRequest<T> {
    /// A bare request with only a message: unrestricted enums and plain
    /// scalars.
    pub fn plain(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Inclusive numeric range; the bounds render and re-parse through
    /// the string-option pair.
    pub fn numeric_range(message: impl Into<String>, min: T, max: T) -> Self {
        Self {
            is_range: true,
            string_options: Some(vec![min.to_string(), max.to_string()]),
            ..Self::plain(message)
        }
    }

    /// Inclusive range over an enumeration, bounded by two members.
    pub fn enum_range(message: impl Into<String>, min: T, max: T) -> Self {
        Self {
            is_range: true,
            enum_options: Some(vec![min, max]),
            ..Self::plain(message)
        }
    }

    /// Pick one of a fixed set of strings (converted to `T` on accept).
    pub fn with_string_options(
        message: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            string_options: Some(options.into_iter().map(Into::into).collect()),
            ..Self::plain(message)
        }
    }

    /// Pick one of a fixed set of enumeration members.
    pub fn with_enum_options(
        message: impl Into<String>,
        options: impl IntoIterator<Item = T>,
    ) -> Self {
        Self {
            enum_options: Some(options.into_iter().collect()),
            ..Self::plain(message)
        }
    }
}
