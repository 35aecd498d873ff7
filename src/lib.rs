//! Converter and source resolution for calendar events.
//!
//! This crate resolves symbolic names (configured aliases or type
//! identifiers) to single, lazily-built handler instances and delegates
//! to them:
//! - `convert` module: the converter registry, name canonicalization and
//!   the built-in converters
//! - `source` module: the source locator layered over an external container
//! - `Event`, `Calendar` and `CalendarConfig` types the converters consume

pub mod calendar;
pub mod config;
pub mod convert;
pub mod error;
pub mod event;
pub mod source;

// Re-export the main entry points at crate root for convenience
pub use calendar::{Calendar, CalendarModel};
pub use config::{AliasTable, CalendarConfig, ConverterDecl};
pub use convert::{
    ConvertOptions, Converted, Converter, ConverterRegistry, ConvertibleEventFactory,
};
pub use error::{CalconvError, CalconvResult};
pub use event::Event;
pub use source::{BuildOptions, CalendarSource, SourceContainer, SourceLocator};
