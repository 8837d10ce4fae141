use std::rc::Rc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::WeekRange;
use yew::Reducible;

/// Dialog state for the slot-management screen. Create is keyed by the day
/// column that was clicked; edit and delete by the slot row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotModalState {
    #[default]
    Closed,
    Create {
        day: NaiveDate,
    },
    Edit {
        slot_id: i64,
    },
    ConfirmDelete {
        slot_id: i64,
    },
}

/// The whole visible state of the weekly slot-management screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleViewState {
    pub court_id: Option<i64>,
    pub week: WeekRange,
    pub modal: SlotModalState,
}

impl ScheduleViewState {
    /// Initial state for the week containing `pivot` (normally today).
    pub fn for_pivot(pivot: NaiveDate) -> Self {
        Self {
            court_id: None,
            week: WeekRange::containing(pivot),
            modal: SlotModalState::Closed,
        }
    }
}

pub enum ScheduleAction {
    SelectCourt(i64),
    PrevWeek,
    NextWeek,
    /// Jump to the week containing the given date ("This week" passes today).
    GoToWeekOf(NaiveDate),
    OpenCreate(NaiveDate),
    OpenEdit(i64),
    OpenConfirmDelete(i64),
    CloseModal,
}

impl Reducible for ScheduleViewState {
    type Action = ScheduleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ScheduleAction::SelectCourt(court_id) => {
                next.court_id = Some(court_id);
                next.modal = SlotModalState::Closed;
            }
            ScheduleAction::PrevWeek => next.week = next.week.shifted(-1),
            ScheduleAction::NextWeek => next.week = next.week.shifted(1),
            ScheduleAction::GoToWeekOf(date) => next.week = WeekRange::containing(date),
            ScheduleAction::OpenCreate(day) => next.modal = SlotModalState::Create { day },
            ScheduleAction::OpenEdit(slot_id) => next.modal = SlotModalState::Edit { slot_id },
            ScheduleAction::OpenConfirmDelete(slot_id) => {
                next.modal = SlotModalState::ConfirmDelete { slot_id }
            }
            ScheduleAction::CloseModal => next.modal = SlotModalState::Closed,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reduce(state: ScheduleViewState, action: ScheduleAction) -> ScheduleViewState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_week_navigation_round_trip() {
        let state = ScheduleViewState::for_pivot(date(2024, 3, 3));
        let week = state.week;
        let forward = reduce(state, ScheduleAction::NextWeek);
        assert_eq!(forward.week.monday(), date(2024, 3, 4));
        let back = reduce(forward, ScheduleAction::PrevWeek);
        assert_eq!(back.week, week);
    }

    #[test]
    fn test_go_to_week_of_today() {
        let state = ScheduleViewState::for_pivot(date(2024, 1, 1));
        let jumped = reduce(state, ScheduleAction::GoToWeekOf(date(2024, 3, 7)));
        assert_eq!(jumped.week.monday(), date(2024, 3, 4));
    }

    #[test]
    fn test_selecting_court_closes_any_modal() {
        let mut state = ScheduleViewState::for_pivot(date(2024, 3, 3));
        state.modal = SlotModalState::Edit { slot_id: 9 };
        let next = reduce(state, ScheduleAction::SelectCourt(2));
        assert_eq!(next.court_id, Some(2));
        assert_eq!(next.modal, SlotModalState::Closed);
    }

    #[test]
    fn test_modal_transitions() {
        let state = ScheduleViewState::for_pivot(date(2024, 3, 3));
        let create = reduce(state, ScheduleAction::OpenCreate(date(2024, 3, 1)));
        assert_eq!(
            create.modal,
            SlotModalState::Create {
                day: date(2024, 3, 1)
            }
        );
        let confirm = reduce(create, ScheduleAction::OpenConfirmDelete(4));
        assert_eq!(confirm.modal, SlotModalState::ConfirmDelete { slot_id: 4 });
        let closed = reduce(confirm, ScheduleAction::CloseModal);
        assert_eq!(closed.modal, SlotModalState::Closed);
    }
}
