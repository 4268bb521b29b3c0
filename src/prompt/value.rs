//! Scalar capabilities for the prompt engine.
//!
//! `Promptable` is a closed capability contract: each supported scalar
//! declares up front which validation family it belongs to and how raw
//! text becomes a value, so the engine never inspects types at runtime.
//! Enumerations additionally expose their members and ordinals; the
//! [`prompt_enum!`](crate::prompt_enum) macro generates those
//! implementations from a plain variant list.

use std::fmt::Display;

/// Broad family a promptable type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `bool`; eligible for the boolean-pair shortcut.
    Bool,
    /// Integers and floats; eligible for numeric ranges.
    Numeric,
    /// Closed enumerations with named members and stable ordinals.
    Enum,
    /// Plain text and any other scalar with no special handling.
    Text,
}

/// A scalar the engine can acquire from the console.
///
/// `Display` doubles as the user-facing rendering: option lists show each
/// value via `Display`, and case-insensitive text matching compares
/// against the same rendering. The enumeration methods keep their
/// defaults for every other kind and are never consulted for them.
pub trait Promptable: Clone + PartialOrd + Display + 'static {
    /// Which validation family the type belongs to.
    const KIND: ValueKind;

    /// Short type name used in prompts and diagnostics.
    fn type_name() -> &'static str;

    /// Parse trimmed input text into a value. `None` means the text is
    /// not a representation of this type.
    fn parse_text(raw: &str) -> Option<Self>;

    /// All defined members in declaration order. Empty unless `KIND` is
    /// [`ValueKind::Enum`].
    fn variants() -> &'static [Self] {
        &[]
    }

    /// Underlying ordinal of an enumeration member.
    fn ordinal(&self) -> i64 {
        0
    }

    /// The member carrying `ordinal`, if one is defined.
    fn from_ordinal(_ordinal: i64) -> Option<Self> {
        None
    }

    /// Build a value from a boolean-pair match. Only boolean targets
    /// answer this.
    fn from_bool(_value: bool) -> Option<Self> {
        None
    }
}

impl Promptable for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn type_name() -> &'static str {
        "bool"
    }

    fn parse_text(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    fn from_bool(value: bool) -> Option<Self> {
        Some(value)
    }
}

impl Promptable for String {
    const KIND: ValueKind = ValueKind::Text;

    fn type_name() -> &'static str {
        "String"
    }

    fn parse_text(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

macro_rules! impl_numeric_promptable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Promptable for $ty {
                const KIND: ValueKind = ValueKind::Numeric;

                fn type_name() -> &'static str {
                    stringify!($ty)
                }

                fn parse_text(raw: &str) -> Option<Self> {
                    raw.parse().ok()
                }
            }
        )+
    };
}

impl_numeric_promptable!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Declares a console-ready enumeration.
///
/// Expands to the enum itself plus `Display` (the variant name) and
/// [`Promptable`] implementations. Discriminants are written out so the
/// ordinal mapping stays stable when variants are reordered:
///
/// ```ignore
/// confab::prompt_enum! {
///     pub enum Difficulty {
///         Easy = 0,
///         Normal = 1,
///         Hard = 2,
///     }
/// }
/// ```
#[macro_export]
macro_rules! prompt_enum {
    (
        $(#[$outer:meta])*
        $vis:vis enum $name:ident {
            $($(#[$inner:meta])* $variant:ident = $ordinal:expr),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        $vis enum $name {
            $($(#[$inner])* $variant = $ordinal),+
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(match self {
                    $(Self::$variant => stringify!($variant)),+
                })
            }
        }

        impl $crate::prompt::Promptable for $name {
            const KIND: $crate::prompt::ValueKind = $crate::prompt::ValueKind::Enum;

            fn type_name() -> &'static str {
                stringify!($name)
            }

            fn parse_text(raw: &str) -> Option<Self> {
                <Self as $crate::prompt::Promptable>::variants()
                    .iter()
                    .copied()
                    .find(|variant| raw.eq_ignore_ascii_case(&variant.to_string()))
            }

            fn variants() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn ordinal(&self) -> i64 {
                *self as i64
            }

            fn from_ordinal(ordinal: i64) -> Option<Self> {
                <Self as $crate::prompt::Promptable>::variants()
                    .iter()
                    .copied()
                    .find(|variant| $crate::prompt::Promptable::ordinal(variant) == ordinal)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::prompt_enum! {
        enum Signal {
            Go = 0,
            Slow = 1,
            Stop = 2,
        }
    }

    crate::prompt_enum! {
        /// Ordinal 2 is deliberately undefined.
        enum Gap {
            Low = 0,
            High = 3,
        }
    }

    #[test]
    fn test_numeric_parse_accepts_valid_text() {
        assert_eq!(i32::parse_text("42"), Some(42));
        assert_eq!(i32::parse_text("-7"), Some(-7));
        assert_eq!(f64::parse_text("2.5"), Some(2.5));
        assert_eq!(u8::parse_text("255"), Some(255));
    }

    #[test]
    fn test_numeric_parse_rejects_invalid_text() {
        assert_eq!(i32::parse_text("forty"), None);
        assert_eq!(i32::parse_text("4.2"), None);
        assert_eq!(u8::parse_text("256"), None, "out of range for u8");
        assert_eq!(u32::parse_text("-1"), None);
    }

    #[test]
    fn test_bool_parse_is_case_insensitive() {
        assert_eq!(bool::parse_text("true"), Some(true));
        assert_eq!(bool::parse_text("TRUE"), Some(true));
        assert_eq!(bool::parse_text("False"), Some(false));
        assert_eq!(bool::parse_text("yes"), None);
    }

    #[test]
    fn test_string_parse_passes_text_through() {
        assert_eq!(String::parse_text("hello"), Some("hello".to_string()));
    }

    #[test]
    fn test_enum_display_is_the_variant_name() {
        assert_eq!(Signal::Go.to_string(), "Go");
        assert_eq!(Signal::Stop.to_string(), "Stop");
    }

    #[test]
    fn test_enum_variants_keep_declaration_order() {
        assert_eq!(Signal::variants(), &[Signal::Go, Signal::Slow, Signal::Stop]);
    }

    #[test]
    fn test_enum_parse_matches_names_case_insensitively() {
        assert_eq!(Signal::parse_text("slow"), Some(Signal::Slow));
        assert_eq!(Signal::parse_text("STOP"), Some(Signal::Stop));
        assert_eq!(Signal::parse_text("halt"), None);
        assert_eq!(Signal::parse_text("1"), None, "names only; numbering is the engine's job");
    }

    #[test]
    fn test_enum_ordinals_round_trip() {
        assert_eq!(Signal::Slow.ordinal(), 1);
        assert_eq!(Signal::from_ordinal(2), Some(Signal::Stop));
        assert_eq!(Signal::from_ordinal(3), None);
    }

    #[test]
    fn test_sparse_enum_skips_undefined_ordinals() {
        assert_eq!(Gap::High.ordinal(), 3);
        assert_eq!(Gap::from_ordinal(3), Some(Gap::High));
        assert_eq!(Gap::from_ordinal(1), None);
        assert_eq!(Gap::from_ordinal(2), None);
    }

    #[test]
    fn test_non_enum_kinds_have_no_variants() {
        assert!(<i32 as Promptable>::variants().is_empty());
        assert!(<String as Promptable>::variants().is_empty());
        assert_eq!(i32::from_ordinal(0), None);
    }

    #[test]
    fn test_from_bool_only_answers_for_bool() {
        assert_eq!(bool::from_bool(true), Some(true));
        assert_eq!(i32::from_bool(true), None);
        assert_eq!(String::from_bool(false), None);
    }
}
