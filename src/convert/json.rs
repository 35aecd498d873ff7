//! JSON converter.

use serde_json::json;

use crate::calendar::CalendarModel;
use crate::convert::factory::ConvertibleEventFactory;
use crate::convert::{ConvertOptions, Converted, Converter};
use crate::error::{CalconvError, CalconvResult};

/// Renders a calendar and its events as a JSON document.
///
/// Honors a boolean `pretty` option for indented output.
pub struct JsonConverter {
    events: ConvertibleEventFactory,
}

impl JsonConverter {
    pub fn new(events: ConvertibleEventFactory) -> Self {
        JsonConverter { events }
    }
}

impl Converter for JsonConverter {
    fn convert(
        &self,
        calendar: &dyn CalendarModel,
        options: &ConvertOptions,
    ) -> CalconvResult<Converted> {
        let document = json!({
            "calendar": calendar.name(),
            "events": self.events.collect(calendar),
        });

        let pretty = options
            .get("pretty")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        let rendered = if pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };

        rendered.map_err(|e| CalconvError::Serialization(e.to_string()))
    }
}
