//! Source location over an external container.

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use crate::error::{CalconvError, CalconvResult};
use crate::source::container::SourceContainer;
use crate::source::{BuildOptions, CalendarSource};

/// Locates calendar event sources by name.
///
/// The locator holds no instances of its own: retrieval, caching and
/// lifetime belong to the container. Its job is the validity check layered
/// on top, plus the startup-time record of loadable source types.
pub struct SourceLocator {
    container: Arc<dyn SourceContainer>,
    /// Names asserted at registration time to denote conforming source types.
    types: HashSet<String>,
}

impl SourceLocator {
    pub fn new(container: Arc<dyn SourceContainer>) -> Self {
        SourceLocator {
            container,
            types: HashSet::new(),
        }
    }

    /// The backing container.
    pub fn container(&self) -> &dyn SourceContainer {
        self.container.as_ref()
    }

    /// Record `name` as a loadable source type.
    ///
    /// The trait bound is the conformance check, performed once here rather
    /// than on every lookup.
    pub fn register_type<S: CalendarSource + 'static>(&mut self, name: &str) {
        debug!(
            "registering source type {} as '{name}'",
            std::any::type_name::<S>()
        );
        self.types.insert(name.to_string());
    }

    /// Whether the container knows `name`.
    pub fn has(&self, name: &str) -> bool {
        self.container.has(name)
    }

    /// Retrieve the source stored under `name`.
    ///
    /// Fails with `SourceNotFound` unless the name passes the validity
    /// check; on success the returned instance is whatever the container
    /// holds (or constructs) for that name.
    pub fn get(&self, name: &str) -> CalconvResult<Arc<dyn CalendarSource>> {
        if !self.is_valid_source(name) {
            debug!("source '{name}' failed validity check");
            return Err(CalconvError::SourceNotFound(name.to_string()));
        }

        self.container.get(name)
    }

    /// Build a source with options.
    ///
    /// Thin proxy to the container's build operation: no validation and no
    /// caching happen here, even for names that would fail the validity
    /// check.
    pub fn build(&self, name: &str, options: &BuildOptions) -> CalconvResult<Arc<dyn CalendarSource>> {
        self.container.build(name, options)
    }

    /// A name is valid when the container knows it or when a source type
    /// was registered under it. The container probe comes first only
    /// because it is the cheaper check; either branch alone suffices.
    fn is_valid_source(&self, name: &str) -> bool {
        self.container.has(name) || self.types.contains(name)
    }
}
