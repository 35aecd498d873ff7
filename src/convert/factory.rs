//! Convertible event construction.

use crate::calendar::CalendarModel;
use crate::config::AliasTable;
use crate::event::Event;

/// Builds the events a converter consumes.
///
/// Every converter instance receives one of these at build time, scoped to
/// the registered-converters table of the calendar that triggered the
/// build, so converters can consult the configured event mappings without
/// reaching back into configuration themselves.
#[derive(Debug, Clone, Default)]
pub struct ConvertibleEventFactory {
    registered: AliasTable,
}

impl ConvertibleEventFactory {
    pub fn new(registered: AliasTable) -> Self {
        ConvertibleEventFactory { registered }
    }

    /// The converter declarations this factory was scoped to.
    pub fn registered(&self) -> &AliasTable {
        &self.registered
    }

    /// Events of the given calendar in conversion order (by start time,
    /// then uid, so converter output is stable across runs).
    pub fn collect(&self, calendar: &dyn CalendarModel) -> Vec<Event> {
        let mut events = calendar.events().to_vec();
        events.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.uid.cmp(&b.uid)));
        events
    }
}
