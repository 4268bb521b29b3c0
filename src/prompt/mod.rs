//! The typed prompt engine: ask, read, classify, validate, retry.
//!
//! One acquisition runs through four stages. [`classify`] resolves an
//! [`AcquisitionRequest`] into exactly one [`ValueCategory`] by a fixed
//! priority order; [`present`] renders the advisory option text for that
//! category once; [`validate`] turns a single line of input into a
//! [`ParseOutcome`] with no I/O at all; and [`acquire`] drives the loop,
//! reporting rejections through the sink and re-reading until a line
//! passes. Input and output go through the narrow [`LineSource`] and
//! [`LineSink`] seams so the whole engine can be scripted in tests.

pub mod acquire;
pub mod category;
pub mod console;
pub mod present;
pub mod request;
pub mod validate;
pub mod value;

pub use acquire::*;
pub use category::*;
pub use console::*;
pub use present::*;
pub use request::*;
pub use validate::*;
pub use value::*;
