use shared::{FeedbackDto, FeedbackFilter, Paged};
use yew::prelude::*;

use crate::api::feedback::{delete_feedback, get_feedback};
use crate::components::common_modal::ConfirmModal;
use crate::components::common_toast::{Toast, ToastContext};
use crate::components::pagination::Pagination;
use crate::state::list::{ListAction, ListViewState, ModalKind, DEFAULT_PAGE_SIZE};

fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Feedback moderation: browse customer reviews, filter by star rating, and
/// remove abusive ones.
#[function_component(FeedbackManagement)]
pub fn feedback_management() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let state = use_reducer(ListViewState::<FeedbackFilter>::default);
    let data = use_state(|| Paged::<FeedbackDto>::empty(DEFAULT_PAGE_SIZE));
    let loading = use_state(|| false);
    let refresh = use_state(|| 0u32);

    {
        let data = data.clone();
        let loading = loading.clone();
        let toast_context = toast_context.clone();
        use_effect_with(
            (state.applied.clone(), state.page, state.page_size, *refresh),
            move |(filter, page, page_size, _)| {
                let filter = filter.clone();
                let page = *page;
                let page_size = *page_size;
                loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    match get_feedback(&filter, page, page_size).await {
                        Ok(paged) => data.set(paged),
                        Err(e) => toast_context.add_toast.emit(Toast::error(e.to_string())),
                    }
                    loading.set(false);
                });
            },
        );
    }

    let on_query_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut draft = state.draft.clone();
            draft.query = input.value();
            state.dispatch(ListAction::EditDraft(draft));
        })
    };
    let on_rating_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut draft = state.draft.clone();
            draft.rating = select.value().parse::<u8>().ok();
            state.dispatch(ListAction::EditDraft(draft));
        })
    };
    let apply_filters = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ListAction::ApplyFilters))
    };
    let clear_filters = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ListAction::ClearFilters))
    };
    let on_page_change = {
        let state = state.clone();
        Callback::from(move |page: u32| state.dispatch(ListAction::GoToPage(page)))
    };

    let request_delete = {
        let state = state.clone();
        Callback::from(move |id: i64| {
            state.dispatch(ListAction::OpenModal(ModalKind::ConfirmDelete, id))
        })
    };
    let close_modal = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(ListAction::CloseModal))
    };
    let confirm_delete = {
        let state = state.clone();
        let toast_context = toast_context.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            let Some(id) = state.modal.target() else {
                return;
            };
            let state = state.clone();
            let toast_context = toast_context.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_feedback(id).await {
                    Ok(()) => {
                        toast_context.add_toast.emit(Toast::success("Feedback removed"));
                        refresh.set(*refresh + 1);
                    }
                    Err(e) => toast_context.add_toast.emit(Toast::error(e.to_string())),
                }
                state.dispatch(ListAction::CloseModal);
            });
        })
    };

    html! {
        <div>
            <div class="bg-white rounded-lg shadow-sm p-4 mb-6">
                <div class="flex flex-col md:flex-row gap-4">
                    <div class="flex-1">
                        <input
                            type="text"
                            placeholder="Search by customer or court..."
                            value={state.draft.query.clone()}
                            oninput={on_query_input}
                            class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                        />
                    </div>
                    <select
                        onchange={on_rating_change}
                        class="px-3 py-2 border border-gray-300 rounded-lg text-sm"
                    >
                        <option value="" selected={state.draft.rating.is_none()}>{"Any rating"}</option>
                        {for (1..=5u8).rev().map(|r| html! {
                            <option value={r.to_string()} selected={state.draft.rating == Some(r)}>
                                {stars(r)}
                            </option>
                        })}
                    </select>
                    <div class="flex gap-2">
                        <button
                            onclick={apply_filters}
                            disabled={*loading}
                            class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50"
                        >
                            {"Search"}
                        </button>
                        <button
                            onclick={clear_filters}
                            class="px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50"
                        >
                            {"Clear"}
                        </button>
                    </div>
                </div>
            </div>

            <div class="space-y-4">
                {for data.items.iter().map(|feedback| {
                    let id = feedback.id;
                    let on_delete = {
                        let request_delete = request_delete.clone();
                        Callback::from(move |_: MouseEvent| request_delete.emit(id))
                    };
                    html! {
                        <div class="bg-white rounded-lg shadow-sm p-4">
                            <div class="flex items-start justify-between">
                                <div>
                                    <div class="flex items-center gap-2">
                                        <span class="text-sm font-medium text-gray-900">{&feedback.customer_name}</span>
                                        <span class="text-amber-500 text-sm">{stars(feedback.rating)}</span>
                                    </div>
                                    <p class="text-xs text-gray-500">
                                        {&feedback.court_name}
                                        {" · "}
                                        {feedback.created_at.format("%d %b %Y").to_string()}
                                    </p>
                                </div>
                                <button
                                    onclick={on_delete}
                                    class="text-sm text-red-600 hover:text-red-800"
                                >
                                    {"Remove"}
                                </button>
                            </div>
                            <p class="mt-2 text-sm text-gray-700">{&feedback.comment}</p>
                        </div>
                    }
                })}
            </div>
            if data.items.is_empty() && !*loading {
                <div class="p-8 text-center text-gray-500 bg-white rounded-lg shadow-sm">{"No feedback found"}</div>
            }
            <div class="mt-4 bg-white rounded-lg shadow-sm">
                <Pagination
                    page={state.page}
                    page_size={state.page_size}
                    total={data.total}
                    on_page_change={on_page_change}
                />
            </div>

            <ConfirmModal
                is_open={state.modal.is_open(ModalKind::ConfirmDelete)}
                title="Remove feedback"
                message="This permanently removes the review from the court's page."
                confirm_text="Remove"
                danger={true}
                on_confirm={confirm_delete}
                on_cancel={close_modal}
            />
        </div>
    }
}
