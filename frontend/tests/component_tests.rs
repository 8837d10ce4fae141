#[cfg(test)]
mod component_tests {
    use std::rc::Rc;

    use chrono::NaiveDate;
    use frontend::state::list::{ListAction, ListViewState, ModalKind, ModalState};
    use frontend::state::schedule::{ScheduleAction, ScheduleViewState, SlotModalState};
    use shared::{build_slot_blocks, cell_blocks, BookingFilter, TimeSlotDto, WeekRange};
    use yew::Reducible;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // A week of API-shaped slot JSON must survive decode, placement, and
    // per-cell lookup exactly as the grid screen drives it.
    #[test]
    fn test_api_payload_to_grid_cells() {
        let payload = r#"[
            {"id": 1, "courtId": 3, "slotNumber": 1, "startTime": "2024-02-26T06:00:00",
             "endTime": "2024-02-26T07:00:00", "isAvailable": true, "price": 15.0},
            {"id": 2, "courtId": 3, "slotNumber": 2, "startTime": "2024-02-28T14:00:00",
             "endTime": "2024-02-28T16:00:00", "isAvailable": false, "price": 22.0},
            {"id": 3, "courtId": 3, "slotNumber": 3, "startTime": "2024-03-04T09:00:00",
             "endTime": "2024-03-04T10:00:00", "isAvailable": true, "price": 15.0}
        ]"#;
        let slots: Vec<TimeSlotDto> = serde_json::from_str(payload).unwrap();
        let week = WeekRange::containing(date(2024, 2, 26));

        let blocks = build_slot_blocks(&slots, &week);

        // Slot 3 belongs to the following week and is dropped.
        assert_eq!(blocks.len(), 2);
        assert_eq!(cell_blocks(&blocks, 0, 6).len(), 1);
        let wednesday_block = cell_blocks(&blocks, 2, 14);
        assert_eq!(wednesday_block.len(), 1);
        assert_eq!(wednesday_block[0].duration_hours, 2);
        assert!(!wednesday_block[0].is_available);
        assert!(cell_blocks(&blocks, 6, 14).is_empty());
    }

    // A full user pass over a management screen: type a filter, apply it,
    // page forward, open a confirm dialog, and close it.
    #[test]
    fn test_list_screen_state_flow() {
        let mut state: Rc<ListViewState<BookingFilter>> = Rc::new(ListViewState::default());

        let mut draft = state.draft.clone();
        draft.query = "centre".to_string();
        state = state.reduce(ListAction::EditDraft(draft));
        assert_eq!(state.applied, BookingFilter::default());

        state = state.reduce(ListAction::ApplyFilters);
        assert_eq!(state.applied.query, "centre");
        assert_eq!(state.page, 1);

        state = state.reduce(ListAction::GoToPage(3));
        assert_eq!(state.page, 3);

        state = state.reduce(ListAction::OpenModal(ModalKind::ConfirmDelete, 12));
        assert_eq!(state.modal.target(), Some(12));

        state = state.reduce(ListAction::CloseModal);
        assert_eq!(state.modal, ModalState::Closed);
        // Closing a dialog never loses the filter or the page.
        assert_eq!(state.applied.query, "centre");
        assert_eq!(state.page, 3);
    }

    // Week navigation drives the same WeekRange the grid builder consumes.
    #[test]
    fn test_schedule_state_flow() {
        let mut state = Rc::new(ScheduleViewState::for_pivot(date(2024, 3, 3)));
        assert_eq!(state.week.monday(), date(2024, 2, 26));

        state = state.reduce(ScheduleAction::SelectCourt(7));
        state = state.reduce(ScheduleAction::NextWeek);
        state = state.reduce(ScheduleAction::NextWeek);
        assert_eq!(state.week.monday(), date(2024, 3, 11));

        state = state.reduce(ScheduleAction::GoToWeekOf(date(2024, 3, 3)));
        assert_eq!(state.week.monday(), date(2024, 2, 26));
        assert_eq!(state.court_id, Some(7));

        state = state.reduce(ScheduleAction::OpenCreate(date(2024, 2, 27)));
        assert_eq!(
            state.modal,
            SlotModalState::Create {
                day: date(2024, 2, 27)
            }
        );
    }
}
