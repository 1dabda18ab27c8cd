use std::fmt::Write as _;

use chrono::{NaiveDate, NaiveDateTime};

use crate::alarm::model::{RangeParameters, format_hm, format_ymd};
use crate::alarm::range::{AlarmSlot, expand_range, preview};

/// View-model for the wake-alarm panel. Everything it shows is a pure
/// function of these inputs plus the `now` passed to `render`.
#[derive(Debug, Clone)]
pub struct Panel {
    pub who: String,
    pub reference: NaiveDate,
    pub arrival: Option<NaiveDateTime>,
    pub params: RangeParameters,
}

impl Panel {
    pub fn slots(&self, now: NaiveDateTime) -> Vec<AlarmSlot> {
        match self.arrival {
            Some(arrival) => expand_range(arrival, &self.params, now),
            None => Vec::new(),
        }
    }

    pub fn render(&self, now: NaiveDateTime) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "wake alarms · {} · {}",
            self.who,
            format_ymd(self.reference)
        );

        let Some(arrival) = self.arrival else {
            let _ = writeln!(out, "no arrival time was provided");
            let _ = writeln!(
                out,
                "pass --arrival <DATETIME> or --arrival-time <HH:MM> (combined with --date)"
            );
            return out;
        };

        let _ = writeln!(
            out,
            "arrival: {} ({})",
            format_hm(arrival),
            format_ymd(arrival.date())
        );
        let _ = writeln!(
            out,
            "window: {} min before to {} min before, every {} min",
            self.params.from_minutes, self.params.to_minutes, self.params.step_minutes
        );

        let slots = self.slots(now);
        let summary = preview(&slots);
        match (summary.first, summary.last) {
            (Some(first), Some(last)) => {
                let _ = writeln!(
                    out,
                    "planned alarms: {} · first {} · last {}",
                    summary.count,
                    format_hm(first),
                    format_hm(last)
                );
                let times = slots
                    .iter()
                    .map(|slot| format_hm(slot.at))
                    .collect::<Vec<_>>()
                    .join(", ");
                let _ = writeln!(out, "upcoming: {times}");
            }
            _ => {
                let _ = writeln!(out, "planned alarms: 0");
                let _ = writeln!(out, "no valid alarms in the configured range");
            }
        }
        out
    }
}
