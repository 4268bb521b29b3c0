//! Request classification: deciding which validation strategy applies.

use crate::prompt::request::AcquisitionRequest;
use crate::prompt::value::{Promptable, ValueKind};

/// The validation strategy resolved for one acquisition.
///
/// Exactly one category holds per request; range categories capture their
/// bounds at classification time so validation and presentation read the
/// same values.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueCategory<T> {
    /// Inclusive ordinal range over an enumeration.
    EnumRange { min: i64, max: i64 },
    /// Inclusive numeric range with already-parsed bounds.
    NumericRange { min: T, max: T },
    /// Pick from the request's enumeration-member list.
    EnumOptions,
    /// Pick from the request's string list.
    StringOptions,
    /// Any defined member of the target enumeration.
    Enum,
    /// Plain scalar conversion with no further constraint.
    Generic,
}

/// Resolve the category for `request`.
///
/// Predicates run in a fixed priority order and the first hit wins:
/// `EnumRange`, `NumericRange`, `EnumOptions`, `StringOptions`, `Enum`,
/// then the `Generic` catch-all. A predicate that half-applies (a range
/// flag without a usable bound pair, say) simply falls through to the
/// next one. Pure and total: same request, same category, no I/O.
pub fn classify<T: Promptable>(request: &AcquisitionRequest<T>) -> ValueCategory<T> {
    if request.is_range && T::KIND == ValueKind::Enum {
        if let Some([min, max]) = request.enum_options.as_deref() {
            return ValueCategory::EnumRange {
                min: min.ordinal(),
                max: max.ordinal(),
            };
        }
    }

    if request.is_range && T::KIND == ValueKind::Numeric {
        if let Some([low, high]) = request.string_options.as_deref() {
            if let (Some(min), Some(max)) = (T::parse_text(low), T::parse_text(high)) {
                return ValueCategory::NumericRange { min, max };
            }
        }
    }

    if request.has_enum_options() {
        return ValueCategory::EnumOptions;
    }

    if request.has_string_options() {
        return ValueCategory::StringOptions;
    }

    if T::KIND == ValueKind::Enum {
        return ValueCategory::Enum;
    }

    ValueCategory::Generic
}
