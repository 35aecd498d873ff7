//! External source container contract.

use std::sync::Arc;

use crate::error::CalconvResult;
use crate::source::{BuildOptions, CalendarSource};

/// Contract of the external container that owns source instances.
///
/// Identity, caching and scoping policy live behind this trait. The
/// locator never stores instances itself; whether `get` returns a shared
/// instance or constructs on demand is the container's decision.
pub trait SourceContainer: Send + Sync {
    /// Whether the container knows `name`.
    fn has(&self, name: &str) -> bool;

    /// Retrieve the instance stored under `name`.
    fn get(&self, name: &str) -> CalconvResult<Arc<dyn CalendarSource>>;

    /// Build an instance for `name` with the given options.
    fn build(&self, name: &str, options: &BuildOptions) -> CalconvResult<Arc<dyn CalendarSource>>;
}
