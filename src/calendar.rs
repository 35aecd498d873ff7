//! Calendar model the registries resolve against.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;
use crate::event::Event;

/// Capability a calendar must expose for conversion: its configuration
/// (carrying the registered-converters table) and its events.
pub trait CalendarModel {
    fn name(&self) -> &str;
    fn config(&self) -> &CalendarConfig;
    fn events(&self) -> &[Event];
}

/// An in-memory calendar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Calendar {
    pub name: String,
    pub config: CalendarConfig,
    pub events: Vec<Event>,
}

impl Calendar {
    pub fn new(name: &str) -> Self {
        Calendar {
            name: name.to_string(),
            config: CalendarConfig::default(),
            events: Vec::new(),
        }
    }

    pub fn with_config(name: &str, config: CalendarConfig) -> Self {
        Calendar {
            name: name.to_string(),
            config,
            events: Vec::new(),
        }
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }
}

impl CalendarModel for Calendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn config(&self) -> &CalendarConfig {
        &self.config
    }

    fn events(&self) -> &[Event] {
        &self.events
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
