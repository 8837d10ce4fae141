use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::Reducible;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Which dialog a management screen has open, and for which row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalKind {
    View,
    Edit,
    ConfirmDelete,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        kind: ModalKind,
        target_id: i64,
    },
}

impl ModalState {
    pub fn is_open(&self, kind: ModalKind) -> bool {
        matches!(self, ModalState::Open { kind: k, .. } if *k == kind)
    }

    pub fn target(&self) -> Option<i64> {
        match self {
            ModalState::Open { target_id, .. } => Some(*target_id),
            ModalState::Closed => None,
        }
    }
}

/// The whole visible state of one management screen, in one serializable
/// record. `draft` is what the filter inputs edit; `applied` is what the
/// current query ran with. The two only converge on ApplyFilters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListViewState<F> {
    pub draft: F,
    pub applied: F,
    pub page: u32,
    pub page_size: u32,
    pub modal: ModalState,
}

impl<F: Default> Default for ListViewState<F> {
    fn default() -> Self {
        Self {
            draft: F::default(),
            applied: F::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            modal: ModalState::Closed,
        }
    }
}

pub enum ListAction<F> {
    /// Replace the draft filter with an edited copy.
    EditDraft(F),
    /// Run the query with the draft filter, back on page 1.
    ApplyFilters,
    /// Reset both filters and return to page 1.
    ClearFilters,
    GoToPage(u32),
    OpenModal(ModalKind, i64),
    CloseModal,
}

impl<F> Reducible for ListViewState<F>
where
    F: Clone + Default + PartialEq,
{
    type Action = ListAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ListAction::EditDraft(draft) => next.draft = draft,
            ListAction::ApplyFilters => {
                next.applied = next.draft.clone();
                next.page = 1;
            }
            ListAction::ClearFilters => {
                next.draft = F::default();
                next.applied = F::default();
                next.page = 1;
            }
            ListAction::GoToPage(page) => next.page = page.max(1),
            ListAction::OpenModal(kind, target_id) => {
                next.modal = ModalState::Open { kind, target_id }
            }
            ListAction::CloseModal => next.modal = ModalState::Closed,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{BookingFilter, BookingStatus};

    fn reduce<F: Clone + Default + PartialEq>(
        state: ListViewState<F>,
        action: ListAction<F>,
    ) -> ListViewState<F> {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_edit_draft_leaves_applied_untouched() {
        let state: ListViewState<BookingFilter> = ListViewState::default();
        let edited = BookingFilter {
            query: "smith".to_string(),
            ..BookingFilter::default()
        };
        let next = reduce(state, ListAction::EditDraft(edited.clone()));
        assert_eq!(next.draft, edited);
        assert_eq!(next.applied, BookingFilter::default());
    }

    #[test]
    fn test_apply_copies_draft_and_resets_page() {
        let mut state: ListViewState<BookingFilter> = ListViewState::default();
        state.draft.status = Some(BookingStatus::Pending);
        state.page = 4;
        let next = reduce(state, ListAction::ApplyFilters);
        assert_eq!(next.applied.status, Some(BookingStatus::Pending));
        assert_eq!(next.page, 1);
    }

    #[test]
    fn test_clear_resets_everything_but_page_size() {
        let mut state: ListViewState<BookingFilter> = ListViewState::default();
        state.draft.query = "smith".to_string();
        state.applied.query = "smith".to_string();
        state.page = 3;
        state.page_size = 25;
        let next = reduce(state, ListAction::ClearFilters);
        assert_eq!(next.draft, BookingFilter::default());
        assert_eq!(next.applied, BookingFilter::default());
        assert_eq!(next.page, 1);
        assert_eq!(next.page_size, 25);
    }

    #[test]
    fn test_page_is_clamped_to_one() {
        let state: ListViewState<BookingFilter> = ListViewState::default();
        let next = reduce(state, ListAction::GoToPage(0));
        assert_eq!(next.page, 1);
    }

    #[test]
    fn test_modal_open_close() {
        let state: ListViewState<BookingFilter> = ListViewState::default();
        let open = reduce(state, ListAction::OpenModal(ModalKind::ConfirmDelete, 17));
        assert!(open.modal.is_open(ModalKind::ConfirmDelete));
        assert_eq!(open.modal.target(), Some(17));
        let closed = reduce(open, ListAction::CloseModal);
        assert_eq!(closed.modal, ModalState::Closed);
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let mut state: ListViewState<BookingFilter> = ListViewState::default();
        state.page = 2;
        state.modal = ModalState::Open {
            kind: ModalKind::View,
            target_id: 5,
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: ListViewState<BookingFilter> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
