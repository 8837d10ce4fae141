use chrono::{Datelike, Duration, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::dto::slot::TimeSlotDto;

/// Courts open at 06:00; the grid shows hours through 23:00.
pub const GRID_OPEN_HOUR: u32 = 6;
pub const GRID_HOUR_COUNT: usize = 18;

pub const DAYS_PER_WEEK: usize = 7;

/// Seven consecutive calendar days, Monday-first, scoping one weekly grid view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    days: [NaiveDate; DAYS_PER_WEEK],
}

impl WeekRange {
    /// The week containing `pivot`. A Sunday pivot counts as day 7 of the
    /// week that started the previous Monday, so the range always opens on
    /// a Monday.
    pub fn containing(pivot: NaiveDate) -> Self {
        let monday = pivot - Duration::days(pivot.weekday().num_days_from_monday() as i64);
        let mut days = [monday; DAYS_PER_WEEK];
        for (offset, day) in days.iter_mut().enumerate() {
            *day = monday + Duration::days(offset as i64);
        }
        Self { days }
    }

    /// The same range moved by `delta_weeks` whole weeks. Pure; navigation
    /// arbitrarily far into the past or future is allowed.
    pub fn shifted(&self, delta_weeks: i64) -> Self {
        let mut days = self.days;
        for day in days.iter_mut() {
            *day = *day + Duration::days(delta_weeks * DAYS_PER_WEEK as i64);
        }
        Self { days }
    }

    pub fn days(&self) -> &[NaiveDate; DAYS_PER_WEEK] {
        &self.days
    }

    pub fn monday(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn sunday(&self) -> NaiveDate {
        self.days[DAYS_PER_WEEK - 1]
    }

    /// Column index of `date` within this week, if it falls inside it.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|d| *d == date)
    }

    /// ISO `YYYY-MM-DD` strings, one per column, for headers and API calls.
    pub fn iso_days(&self) -> [String; DAYS_PER_WEEK] {
        self.days
            .map(|d| d.format("%Y-%m-%d").to_string())
    }

    /// Header label such as "26 Feb – 03 Mar 2024".
    pub fn label(&self) -> String {
        format!(
            "{} – {}",
            self.monday().format("%d %b"),
            self.sunday().format("%d %b %Y")
        )
    }
}

/// One grid cell's worth of renderable slot data: a `TimeSlotDto` projected
/// onto a day column and hour row. Rebuilt from scratch on every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotBlock {
    pub id: i64,
    /// 0–6, column within the producing [`WeekRange`].
    pub day_index: usize,
    /// Hour-of-day row anchor, 0–23.
    pub start_hour: u32,
    /// Visual span in hour rows, always at least 1.
    pub duration_hours: u32,
    pub is_available: bool,
    pub slot_number: u32,
    /// The full source record, carried for the block's action handlers.
    pub slot: TimeSlotDto,
}

/// Fixed-format "HH:00" row labels for the grid's hour axis.
pub fn hour_labels(start_hour: u32, count: usize) -> Vec<String> {
    (0..count)
        .map(|offset| format!("{:02}:00", start_hour as usize + offset))
        .collect()
}

/// The default 06:00–23:00 operating window.
pub fn grid_hour_labels() -> Vec<String> {
    hour_labels(GRID_OPEN_HOUR, GRID_HOUR_COUNT)
}

/// Projects fetched slots onto the displayed week.
///
/// Slots whose start date is not in `week` are dropped, not errors: callers
/// may fetch a superset of the displayed dates. A slot whose end hour is not
/// after its start hour renders as a single row; the record itself is never
/// touched. Output order follows input order.
pub fn build_slot_blocks(slots: &[TimeSlotDto], week: &WeekRange) -> Vec<SlotBlock> {
    slots
        .iter()
        .filter_map(|slot| {
            let day_index = week.index_of(slot.start_time.date())?;
            let start_hour = slot.start_time.hour();
            let span = slot.end_time.hour() as i64 - start_hour as i64;
            let duration_hours = if span <= 0 { 1 } else { span as u32 };
            Some(SlotBlock {
                id: slot.id,
                day_index,
                start_hour,
                duration_hours,
                is_available: slot.is_available,
                slot_number: slot.slot_number,
                slot: slot.clone(),
            })
        })
        .collect()
}

/// The blocks anchored at one day/hour cell, in input order. Overlapping
/// bookings legitimately share a cell; the renderer stacks them.
pub fn cell_blocks<'a>(blocks: &'a [SlotBlock], day_index: usize, hour: u32) -> Vec<&'a SlotBlock> {
    blocks
        .iter()
        .filter(|b| b.day_index == day_index && b.start_hour == hour)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};
    // NOTE: pretty_assertions::assert_eq is intentionally not imported here because it
    // conflicts with the assert_eq! generated by the test_case attribute macro below.
    use proptest::prelude::*;
    use rstest::rstest;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn slot(id: i64, day: NaiveDate, start_hour: u32, end_hour: u32) -> TimeSlotDto {
        TimeSlotDto {
            id,
            court_id: 1,
            slot_number: id as u32,
            start_time: day.and_hms_opt(start_hour, 0, 0).unwrap(),
            end_time: day.and_hms_opt(end_hour, 0, 0).unwrap(),
            is_available: true,
            price: 20.0,
        }
    }

    #[rstest]
    #[case::sunday_pivot(date(2024, 3, 3), date(2024, 2, 26))]
    #[case::monday_pivot(date(2024, 2, 26), date(2024, 2, 26))]
    #[case::midweek_pivot(date(2024, 2, 28), date(2024, 2, 26))]
    #[case::leap_day_pivot(date(2024, 2, 29), date(2024, 2, 26))]
    #[case::year_boundary(date(2025, 1, 1), date(2024, 12, 30))]
    fn test_week_containing_opens_on_monday(#[case] pivot: NaiveDate, #[case] monday: NaiveDate) {
        let week = WeekRange::containing(pivot);
        assert_eq!(week.monday(), monday);
        assert_eq!(week.monday().weekday(), Weekday::Mon);
        for pair in week.days().windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_sunday_pivot_is_last_column() {
        // 2024-03-03 is a Sunday: day 7 of the week starting 2024-02-26.
        let week = WeekRange::containing(date(2024, 3, 3));
        assert_eq!(week.sunday(), date(2024, 3, 3));
        assert_eq!(week.index_of(date(2024, 3, 3)), Some(6));
    }

    #[test]
    fn test_iso_days_format() {
        let week = WeekRange::containing(date(2024, 2, 26));
        let iso = week.iso_days();
        assert_eq!(iso[0], "2024-02-26");
        assert_eq!(iso[6], "2024-03-03");
    }

    #[test]
    fn test_shift_moves_whole_weeks() {
        let week = WeekRange::containing(date(2024, 2, 26));
        assert_eq!(week.shifted(1).monday(), date(2024, 3, 4));
        assert_eq!(week.shifted(-1).monday(), date(2024, 2, 19));
        assert_eq!(week.shifted(0), week);
    }

    #[test]
    fn test_unmatched_slot_is_dropped() {
        let week = WeekRange::containing(date(2024, 2, 26));
        let inside = slot(1, date(2024, 2, 27), 10, 11);
        let outside = slot(2, date(2024, 1, 1), 10, 11);
        let blocks = build_slot_blocks(&[inside, outside], &week);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].id, 1);
        assert_eq!(blocks[0].day_index, 1);
    }

    #[test_case(10, 10 => 1 ; "same hour floors to one")]
    #[test_case(10, 11 => 1 ; "single hour")]
    #[test_case(14, 17 => 3 ; "multi hour span")]
    #[test_case(23, 1 => 1 ; "midnight crossing floors to one")]
    fn test_duration_hours(start_hour: u32, end_hour: u32) -> u32 {
        let day = date(2024, 2, 27);
        let week = WeekRange::containing(day);
        let s = slot(1, day, start_hour, end_hour);
        build_slot_blocks(&[s], &week)[0].duration_hours
    }

    #[test]
    fn test_blocks_preserve_input_order_and_stack() {
        let week = WeekRange::containing(date(2024, 2, 26));
        let wednesday = date(2024, 2, 28);
        let first = slot(10, wednesday, 14, 15);
        let second = slot(11, wednesday, 14, 16);
        let elsewhere = slot(12, wednesday, 9, 10);
        let blocks = build_slot_blocks(&[first, second, elsewhere], &week);

        let cell = cell_blocks(&blocks, 2, 14);
        assert_eq!(cell.len(), 2);
        assert_eq!(cell[0].id, 10);
        assert_eq!(cell[1].id, 11);
        assert!(cell_blocks(&blocks, 2, 10).is_empty());
    }

    #[test]
    fn test_build_is_idempotent() {
        let week = WeekRange::containing(date(2024, 2, 26));
        let slots = vec![
            slot(1, date(2024, 2, 26), 6, 8),
            slot(2, date(2024, 3, 3), 22, 23),
        ];
        assert_eq!(
            build_slot_blocks(&slots, &week),
            build_slot_blocks(&slots, &week)
        );
    }

    #[test]
    fn test_block_carries_source_record() {
        let week = WeekRange::containing(date(2024, 2, 26));
        let source = slot(5, date(2024, 2, 26), 10, 12);
        let blocks = build_slot_blocks(std::slice::from_ref(&source), &week);
        assert_eq!(blocks[0].slot, source);
        assert_eq!(blocks[0].slot_number, source.slot_number);
        assert!(blocks[0].is_available);
    }

    #[test]
    fn test_default_hour_labels_cover_operating_window() {
        let labels = grid_hour_labels();
        assert_eq!(labels.len(), 18);
        assert_eq!(labels.first().unwrap(), "06:00");
        assert_eq!(labels.last().unwrap(), "23:00");
        for label in &labels {
            assert_eq!(label.len(), 5);
            assert!(label.ends_with(":00"));
        }
    }

    // Days from 1900-01-01 through ~2100 keep the proptest ranges well away
    // from chrono's representable limits.
    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (693_596i32..766_644).prop_map(|n| NaiveDate::from_num_days_from_ce_opt(n).unwrap())
    }

    proptest! {
        #[test]
        fn prop_week_is_monday_first_and_seven_long(pivot in arb_date()) {
            let week = WeekRange::containing(pivot);
            prop_assert_eq!(week.monday().weekday(), Weekday::Mon);
            prop_assert_eq!(week.days().len(), 7);
            for pair in week.days().windows(2) {
                prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
            }
            prop_assert!(week.index_of(pivot).is_some());
        }

        #[test]
        fn prop_shift_is_reversible(pivot in arb_date(), delta in -500i64..500) {
            let week = WeekRange::containing(pivot);
            prop_assert_eq!(week.shifted(delta).shifted(-delta), week);
        }

        #[test]
        fn prop_shift_is_additive(pivot in arb_date(), a in -200i64..200, b in -200i64..200) {
            let week = WeekRange::containing(pivot);
            prop_assert_eq!(week.shifted(a).shifted(b), week.shifted(a + b));
        }

        #[test]
        fn prop_every_block_lands_in_range(pivot in arb_date(), offsets in proptest::collection::vec((0i64..21, 6u32..23), 0..20)) {
            let week = WeekRange::containing(pivot);
            // Scatter slots across three weeks; only the displayed one keeps them.
            let slots: Vec<_> = offsets
                .iter()
                .enumerate()
                .map(|(i, (day_offset, hour))| {
                    slot(i as i64, week.monday() - Duration::days(7) + Duration::days(*day_offset), *hour, hour + 1)
                })
                .collect();
            let blocks = build_slot_blocks(&slots, &week);
            for block in &blocks {
                prop_assert!(block.day_index < 7);
                prop_assert_eq!(week.days()[block.day_index], block.slot.start_time.date());
                prop_assert!(block.duration_hours >= 1);
            }
        }
    }
}
