//! Option rendering for the resolved category.

use std::io;

use crate::prompt::category::ValueCategory;
use crate::prompt::console::LineSink;
use crate::prompt::request::AcquisitionRequest;
use crate::prompt::value::Promptable;

const OPTIONS_HEADER: &str = "Please enter one of the available options:";

/// Render the advisory option text for `category`.
///
/// Called at most once per acquisition, and suppressed entirely when the
/// request's `show_options` flag is off. Display numbering is 1-based;
/// ordinals inside an enum range that name no defined member are skipped.
/// Rendering never affects validation.
pub fn present<T, W>(
    request: &AcquisitionRequest<T>,
    category: &ValueCategory<T>,
    sink: &mut W,
) -> io::Result<()>
where
    T: Promptable,
    W: LineSink + ?Sized,
{
    if !request.show_options {
        return Ok(());
    }

    match category {
        ValueCategory::EnumRange { min, max } => {
            sink.write_line(OPTIONS_HEADER, None)?;
            for ordinal in *min..=*max {
                if let Some(value) = T::from_ordinal(ordinal) {
                    sink.write_line(&format!("{}: {}", ordinal + 1, value), None)?;
                }
            }
        }
        ValueCategory::NumericRange { min, max } => {
            sink.write_line(
                &format!("Please enter a value between {} and {}:", min, max),
                None,
            )?;
        }
        ValueCategory::EnumOptions => {
            sink.write_line(OPTIONS_HEADER, None)?;
            for (index, option) in request.enum_choices().iter().enumerate() {
                write_option(sink, index, &option.to_string(), request.allow_numbers)?;
            }
        }
        ValueCategory::StringOptions => {
            sink.write_line(OPTIONS_HEADER, None)?;
            for (index, option) in request.string_choices().iter().enumerate() {
                write_option(sink, index, option, request.allow_numbers)?;
            }
        }
        ValueCategory::Enum => {
            sink.write_line(OPTIONS_HEADER, None)?;
            for value in T::variants() {
                sink.write_line(&format!("{}: {}", value.ordinal() + 1, value), None)?;
            }
        }
        ValueCategory::Generic => {
            sink.write_line(
                &format!("Please enter a value of type: {}", T::type_name()),
                None,
            )?;
        }
    }

    Ok(())
}

fn write_option<W: LineSink + ?Sized>(
    sink: &mut W,
    index: usize,
    option: &str,
    allow_numbers: bool,
) -> io::Result<()> {
    if allow_numbers {
        sink.write_line(&format!("{}: {}", index + 1, option), None)
    } else {
        sink.write_line(option, None)
    }
}
