//! Conversion strategies: one line of text against one resolved category.
//!
//! Everything here is pure. Each strategy either produces a value or a
//! [`RejectReason`]; parse failures from the underlying scalar never
//! escape as errors, they become rejections.

use thiserror::Error;

use crate::prompt::category::ValueCategory;
use crate::prompt::request::AcquisitionRequest;
use crate::prompt::value::{Promptable, ValueKind};

/// Why a line of input was turned away. `Display` is the user-facing
/// diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// Blank or all-whitespace line.
    #[error("input was empty")]
    Empty,
    /// The text is not a representation of the target type.
    #[error("'{input}' is not a valid {type_name}")]
    Format {
        input: String,
        type_name: &'static str,
    },
    /// Parsed fine but fell outside the configured bounds.
    #[error("value must be between {min} and {max}")]
    OutOfRange { min: String, max: String },
    /// Matched no option and no enumeration member.
    #[error("input does not match any of the available options")]
    NoMatch,
}

/// Outcome of validating one line: a value or a reason, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome<T> {
    Accepted(T),
    Rejected(RejectReason),
}

impl<T> ParseOutcome<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ParseOutcome::Accepted(_))
    }
}

/// Validate one line of input against the resolved category.
///
/// The boolean-pair shortcut runs first whenever the target is boolean
/// and exactly two string options are configured, regardless of what the
/// category says; everything else dispatches on the category. Surrounding
/// whitespace is ignored and blank input is rejected before any
/// conversion is attempted.
pub fn validate<T: Promptable>(
    raw: &str,
    request: &AcquisitionRequest<T>,
    category: &ValueCategory<T>,
) -> ParseOutcome<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return ParseOutcome::Rejected(RejectReason::Empty);
    }

    if T::KIND == ValueKind::Bool {
        if let [yes, no] = request.string_choices() {
            return match_boolean_pair(raw, yes, no);
        }
    }

    match category {
        ValueCategory::NumericRange { min, max } => match_numeric_range(raw, min, max),
        ValueCategory::EnumRange { min, max } => match_enum_range(raw, *min, *max),
        ValueCategory::EnumOptions => {
            match_enum_options(raw, request.enum_choices(), request.allow_numbers)
        }
        ValueCategory::StringOptions => {
            match_string_options(raw, request.string_choices(), request.allow_numbers)
        }
        ValueCategory::Enum => match resolve_enum_name::<T>(raw, request.allow_numbers) {
            Some(value) => ParseOutcome::Accepted(value),
            None => ParseOutcome::Rejected(RejectReason::NoMatch),
        },
        ValueCategory::Generic => match_generic(raw),
    }
}

fn match_boolean_pair<T: Promptable>(raw: &str, yes: &str, no: &str) -> ParseOutcome<T> {
    let truth = if raw.eq_ignore_ascii_case(yes) {
        Some(true)
    } else if raw.eq_ignore_ascii_case(no) {
        Some(false)
    } else {
        // The numeric shortcuts stay fixed at 1/2 whatever the pair says,
        // and are not gated on allow_numbers.
        match raw.parse::<i64>() {
            Ok(1) => Some(true),
            Ok(2) => Some(false),
            _ => None,
        }
    };
    match truth.and_then(T::from_bool) {
        Some(value) => ParseOutcome::Accepted(value),
        None => ParseOutcome::Rejected(RejectReason::NoMatch),
    }
}

fn match_numeric_range<T: Promptable>(raw: &str, min: &T, max: &T) -> ParseOutcome<T> {
    let Some(value) = T::parse_text(raw) else {
        return ParseOutcome::Rejected(RejectReason::Format {
            input: raw.to_string(),
            type_name: T::type_name(),
        });
    };
    if value >= *min && value <= *max {
        ParseOutcome::Accepted(value)
    } else {
        ParseOutcome::Rejected(RejectReason::OutOfRange {
            min: min.to_string(),
            max: max.to_string(),
        })
    }
}

fn match_enum_range<T: Promptable>(raw: &str, min: i64, max: i64) -> ParseOutcome<T> {
    // Range mode always honors numeric selection for enums.
    let Some(value) = resolve_enum_name::<T>(raw, true) else {
        return ParseOutcome::Rejected(RejectReason::NoMatch);
    };
    let ordinal = value.ordinal();
    if ordinal >= min && ordinal <= max {
        ParseOutcome::Accepted(value)
    } else {
        ParseOutcome::Rejected(RejectReason::OutOfRange {
            min: bound_name::<T>(min),
            max: bound_name::<T>(max),
        })
    }
}

/// Render an ordinal bound by its member name when one is defined.
fn bound_name<T: Promptable>(ordinal: i64) -> String {
    T::from_ordinal(ordinal).map_or_else(|| ordinal.to_string(), |value| value.to_string())
}

fn match_enum_options<T: Promptable>(
    raw: &str,
    options: &[T],
    allow_numbers: bool,
) -> ParseOutcome<T> {
    let position = position_pick(raw, allow_numbers);
    for (index, option) in options.iter().enumerate() {
        if raw.eq_ignore_ascii_case(&option.to_string()) || position == Some(index + 1) {
            return ParseOutcome::Accepted(option.clone());
        }
    }
    ParseOutcome::Rejected(RejectReason::NoMatch)
}

fn match_string_options<T: Promptable>(
    raw: &str,
    options: &[String],
    allow_numbers: bool,
) -> ParseOutcome<T> {
    let position = position_pick(raw, allow_numbers);
    let mut unconvertible = None;
    for (index, option) in options.iter().enumerate() {
        if !(raw.eq_ignore_ascii_case(option) || position == Some(index + 1)) {
            continue;
        }
        match T::parse_text(option) {
            Some(value) => return ParseOutcome::Accepted(value),
            // A matched option that will not convert rejects, but later
            // options still get their chance.
            None => {
                unconvertible = Some(RejectReason::Format {
                    input: option.clone(),
                    type_name: T::type_name(),
                });
            }
        }
    }
    ParseOutcome::Rejected(unconvertible.unwrap_or(RejectReason::NoMatch))
}

/// Strategy shared by unrestricted enums and enum ranges: match a
/// defined member name (case-insensitive), or, when numeric selection is
/// on, a display number `n` resolving to the member with ordinal `n - 1`.
/// Numeric text never matches a raw discriminant value directly.
fn resolve_enum_name<T: Promptable>(raw: &str, allow_numbers: bool) -> Option<T> {
    if let Some(value) = T::variants()
        .iter()
        .find(|variant| raw.eq_ignore_ascii_case(&variant.to_string()))
    {
        return Some(value.clone());
    }
    if allow_numbers {
        if let Ok(display) = raw.parse::<i64>() {
            return T::from_ordinal(display - 1);
        }
    }
    None
}

fn position_pick(raw: &str, allow_numbers: bool) -> Option<usize> {
    if allow_numbers {
        raw.parse::<usize>().ok()
    } else {
        None
    }
}

fn match_generic<T: Promptable>(raw: &str) -> ParseOutcome<T> {
    match T::parse_text(raw) {
        Some(value) => ParseOutcome::Accepted(value),
        None => ParseOutcome::Rejected(RejectReason::Format {
            input: raw.to_string(),
            type_name: T::type_name(),
        }),
    }
}
