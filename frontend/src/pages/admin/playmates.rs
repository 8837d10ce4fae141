use shared::{Paged, PlaymateFilter, PlaymatePostDto, SkillLevel};
use yew::prelude::*;

use crate::api::playmates::{delete_playmate_post, get_playmate_posts};
use crate::components::common_modal::ConfirmModal;
use crate::components::common_toast::{Toast, ToastContext};
use crate::components::pagination::Pagination;
use crate::state::list::{ListAction, ListViewState, ModalKind, DEFAULT_PAGE_SIZE};

/// Playmate board moderation: browse community posts and take down the ones
/// that break the rules.
#[function_component(PlaymateManagement)]
pub fn playmate_management() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let state = use_reducer(ListViewState::<PlaymateFilter>::default);
    let data = use_state(|| Paged::<PlaymatePostDto>::empty(DEFAULT_PAGE_SIZE));
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
                    match get_playmate_posts(&filter, page, page_size).await {
                        Ok(paged) => data.set(paged),
                        Err(e) => toast_context.add_toast.emit(Toast::error(e.to_string())),
                    }
                    loading.set(false);
                });
            },
        );
    }

    let on_sport_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut draft = state.draft.clone();
            draft.sport = input.value();
            state.dispatch(ListAction::EditDraft(draft));
        })
    };
    let on_area_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut draft = state.draft.clone();
            draft.area = input.value();
            state.dispatch(ListAction::EditDraft(draft));
        })
    };
    let on_skill_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut draft = state.draft.clone();
            draft.skill_level = SkillLevel::ALL
                .into_iter()
                .find(|level| level.label() == select.value());
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
                match delete_playmate_post(id).await {
                    Ok(()) => {
                        toast_context.add_toast.emit(Toast::success("Post removed"));
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
                    <input
                        type="text"
                        placeholder="Sport"
                        value={state.draft.sport.clone()}
                        oninput={on_sport_input}
                        class="flex-1 px-4 py-2 border border-gray-300 rounded-lg"
                    />
                    <input
                        type="text"
                        placeholder="Area"
                        value={state.draft.area.clone()}
                        oninput={on_area_input}
                        class="flex-1 px-4 py-2 border border-gray-300 rounded-lg"
                    />
                    <select
                        onchange={on_skill_change}
                        class="px-3 py-2 border border-gray-300 rounded-lg text-sm"
                    >
                        <option value="" selected={state.draft.skill_level.is_none()}>{"Any level"}</option>
                        {for SkillLevel::ALL.iter().map(|level| html! {
                            <option
                                value={level.label()}
                                selected={state.draft.skill_level == Some(*level)}
                            >
                                {level.label()}
                            </option>
                        })}
                    </select>
                    <div class="flex gap-2">
                        <button
                            onclick={apply_filters}
                            class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"
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
                {for data.items.iter().map(|post| {
                    let id = post.id;
                    let on_delete = {
                        let request_delete = request_delete.clone();
                        Callback::from(move |_: MouseEvent| request_delete.emit(id))
                    };
                    html! {
                        <div class="bg-white rounded-lg shadow-sm p-4">
                            <div class="flex items-start justify-between">
                                <div class="flex items-center gap-2 flex-wrap">
                                    <span class="text-sm font-medium text-gray-900">{&post.author_name}</span>
                                    <span class="text-xs px-2 py-1 bg-blue-50 text-blue-700 rounded-full">{&post.sport}</span>
                                    <span class="text-xs px-2 py-1 bg-gray-100 text-gray-600 rounded-full">{&post.area}</span>
                                    <span class="text-xs px-2 py-1 bg-violet-50 text-violet-700 rounded-full">{post.skill_level.label()}</span>
                                </div>
                                <button onclick={on_delete} class="text-sm text-red-600 hover:text-red-800">{"Take down"}</button>
                            </div>
                            <p class="mt-2 text-sm text-gray-700">{&post.message}</p>
                            <p class="mt-1 text-xs text-gray-500">
                                {"Wants to play "}
                                {post.play_date.format("%A %d %b").to_string()}
                                {" · posted "}
                                {post.created_at.format("%d %b %Y").to_string()}
                            </p>
                        </div>
                    }
                })}
            </div>
            if data.items.is_empty() && !*loading {
                <div class="p-8 text-center text-gray-500 bg-white rounded-lg shadow-sm">{"No posts found"}</div>
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
                title="Take down post"
                message="The author will no longer see their post on the playmate board."
                confirm_text="Take down"
                danger={true}
                on_confirm={confirm_delete}
                on_cancel={close_modal}
            />
        </div>
    }
}
