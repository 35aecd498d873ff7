//! Calendar event sources.
//!
//! Sources supply the events a calendar is populated from. Their identity,
//! caching and lifetime belong to an external container; this module adds
//! the domain validity check on top of that container.

mod container;
mod locator;

pub use container::SourceContainer;
pub use locator::SourceLocator;

use crate::error::CalconvResult;
use crate::event::Event;

/// Options passed through to the container's build operation, verbatim.
pub type BuildOptions = serde_json::Map<String, serde_json::Value>;

/// Capability a source must expose: supply events under a source name.
pub trait CalendarSource: Send + Sync {
    fn name(&self) -> &str;
    fn events(&self) -> CalconvResult<Vec<Event>>;
}
