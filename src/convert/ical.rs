//! iCalendar converter.

use icalendar::{Calendar as IcsCalendar, Component, EventLike};

use crate::calendar::CalendarModel;
use crate::convert::factory::ConvertibleEventFactory;
use crate::convert::{ConvertOptions, Converted, Converter};
use crate::error::CalconvResult;

/// Renders a calendar's events as an iCalendar (RFC 5545) document.
pub struct IcalConverter {
    events: ConvertibleEventFactory,
}

impl IcalConverter {
    pub fn new(events: ConvertibleEventFactory) -> Self {
        IcalConverter { events }
    }
}

impl Converter for IcalConverter {
    fn convert(
        &self,
        calendar: &dyn CalendarModel,
        _options: &ConvertOptions,
    ) -> CalconvResult<Converted> {
        let mut cal = IcsCalendar::new();
        cal.name(calendar.name());

        for event in self.events.collect(calendar) {
            let mut ics_event = icalendar::Event::new();
            ics_event.uid(&event.uid);
            ics_event.summary(&event.summary);
            ics_event.starts(event.start);
            ics_event.ends(event.end);

            if let Some(ref desc) = event.description {
                ics_event.description(desc);
            }

            if let Some(ref loc) = event.location {
                ics_event.location(loc);
            }

            cal.push(ics_event.done());
        }

        Ok(cal.done().to_string())
    }
}
