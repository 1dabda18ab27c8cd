use chrono::{Duration, NaiveDateTime, Timelike};

use crate::alarm::model::RangeParameters;

/// One generated alarm within the look-back window.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct AlarmSlot {
    pub hour: u32,
    pub minute: u32,
    pub at: NaiveDateTime,
}

/// Summary over a generated slot list.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct Preview {
    pub count: usize,
    pub first: Option<NaiveDateTime>,
    pub last: Option<NaiveDateTime>,
}

/// Expands the look-back window into evenly spaced alarm slots.
///
/// The window runs from `arrival - from_minutes` up to and including
/// `arrival - to_minutes`. A window whose end precedes its start produces
/// nothing; `to_minutes < from_minutes` is the normal "closer to arrival"
/// shape, not an inversion. Candidates at or before `now` are dropped.
pub fn expand_range(
    arrival: NaiveDateTime,
    params: &RangeParameters,
    now: NaiveDateTime,
) -> Vec<AlarmSlot> {
    let start = arrival - Duration::minutes(params.from_minutes);
    let end = arrival - Duration::minutes(params.to_minutes);
    if end < start {
        return Vec::new();
    }

    let step = Duration::minutes(params.step_minutes);
    let mut slots = Vec::new();
    let mut candidate = start;
    while candidate <= end {
        if candidate > now {
            slots.push(AlarmSlot {
                hour: candidate.hour(),
                minute: candidate.minute(),
                at: candidate,
            });
        }
        candidate += step;
    }
    slots
}

pub fn preview(slots: &[AlarmSlot]) -> Preview {
    Preview {
        count: slots.len(),
        first: slots.first().map(|slot| slot.at),
        last: slots.last().map(|slot| slot.at),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn datetime(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 10)
            .expect("valid date")
            .and_hms_opt(hour, minute, 0)
            .expect("valid datetime")
    }

    fn params(from: i64, to: i64, step: i64) -> RangeParameters {
        RangeParameters::new(from, to, step)
    }

    #[test]
    fn expands_default_window_before_arrival() {
        let slots = expand_range(datetime(8, 0), &params(120, 10, 10), datetime(5, 0));
        assert_eq!(slots.len(), 12);
        assert_eq!(slots[0].at, datetime(6, 0));
        assert_eq!(slots[11].at, datetime(7, 50));
        assert_eq!((slots[0].hour, slots[0].minute), (6, 0));
    }

    #[test]
    fn slots_are_ordered_and_inside_the_window() {
        let arrival = datetime(8, 0);
        let range = params(120, 10, 10);
        let slots = expand_range(arrival, &range, datetime(5, 0));
        let start = arrival - Duration::minutes(range.from_minutes);
        let end = arrival - Duration::minutes(range.to_minutes);
        for pair in slots.windows(2) {
            assert!(pair[0].at < pair[1].at);
        }
        for slot in &slots {
            assert!(slot.at >= start && slot.at <= end);
        }
    }

    #[test]
    fn inverted_bounds_produce_nothing() {
        let slots = expand_range(datetime(8, 0), &params(10, 120, 10), datetime(5, 0));
        assert!(slots.is_empty());
    }

    #[test]
    fn past_candidates_are_dropped() {
        let slots = expand_range(datetime(8, 0), &params(120, 10, 10), datetime(7, 0));
        assert_eq!(slots.len(), 5);
        assert_eq!(slots[0].at, datetime(7, 10));
        assert_eq!(slots[4].at, datetime(7, 50));
    }

    #[test]
    fn candidate_exactly_at_now_is_dropped() {
        let slots = expand_range(datetime(8, 0), &params(120, 10, 10), datetime(6, 0));
        assert_eq!(slots[0].at, datetime(6, 10));
    }

    #[test]
    fn equal_bounds_yield_a_single_slot() {
        let slots = expand_range(datetime(8, 0), &params(30, 30, 10), datetime(5, 0));
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].at, datetime(7, 30));
    }

    #[test]
    fn expansion_is_idempotent_for_a_fixed_now() {
        let first = expand_range(datetime(8, 0), &params(120, 10, 10), datetime(5, 0));
        let second = expand_range(datetime(8, 0), &params(120, 10, 10), datetime(5, 0));
        assert_eq!(first, second);
    }

    #[test]
    fn preview_summarizes_count_and_endpoints() {
        let slots = expand_range(datetime(8, 0), &params(120, 10, 10), datetime(5, 0));
        let summary = preview(&slots);
        assert_eq!(summary.count, 12);
        assert_eq!(summary.first, Some(datetime(6, 0)));
        assert_eq!(summary.last, Some(datetime(7, 50)));
    }

    #[test]
    fn preview_of_empty_list_has_no_endpoints() {
        let summary = preview(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.first, None);
        assert_eq!(summary.last, None);
    }
}
