//! Event conversion.
//!
//! Converters turn a calendar's events into another representation. The
//! registry resolves a raw name (configured alias or type identifier) to a
//! single lazily-built converter instance and delegates the conversion to
//! it.

mod factory;
mod ical;
mod json;
mod registry;
mod resolve;

pub use factory::ConvertibleEventFactory;
pub use ical::IcalConverter;
pub use json::JsonConverter;
pub use registry::{ConverterCtor, ConverterRegistry};
pub use resolve::canonical_name;

use crate::calendar::CalendarModel;
use crate::error::CalconvResult;

/// Options passed through to the resolved converter, verbatim.
pub type ConvertOptions = serde_json::Map<String, serde_json::Value>;

/// Rendered output of a conversion; its structure belongs to the converter.
pub type Converted = String;

/// Capability a converter must expose: turn a calendar's events into
/// another representation.
pub trait Converter: Send + Sync {
    fn convert(
        &self,
        calendar: &dyn CalendarModel,
        options: &ConvertOptions,
    ) -> CalconvResult<Converted>;
}
