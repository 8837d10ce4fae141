use shared::{PackageDto, PackageFilter, Paged, SavePackageRequest};
use validator::Validate;
use yew::prelude::*;

use crate::api::packages::{create_package, delete_package, get_packages, update_package};
use crate::components::common_modal::ConfirmModal;
use crate::components::common_toast::{Toast, ToastContext};
use crate::components::pagination::Pagination;
use crate::state::list::{ListAction, ListViewState, ModalKind, DEFAULT_PAGE_SIZE};

/// Coaching package management: list, create, edit, and retire packages.
#[function_component(PackageManagement)]
pub fn package_management() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let state = use_reducer(ListViewState::<PackageFilter>::default);
    let data = use_state(|| Paged::<PackageDto>::empty(DEFAULT_PAGE_SIZE));
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
                    match get_packages(&filter, page, page_size).await {
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
    let on_active_toggle = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut draft = state.draft.clone();
            draft.active_only = if input.checked() { Some(true) } else { None };
            state.dispatch(ListAction::EditDraft(draft));
        })
    };
    let apply_filters = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ListAction::ApplyFilters))
    };
    let on_page_change = {
        let state = state.clone();
        Callback::from(move |page: u32| state.dispatch(ListAction::GoToPage(page)))
    };

    // Edit modal with target 0 means "new package".
    let open_create = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ListAction::OpenModal(ModalKind::Edit, 0)))
    };
    let open_edit = {
        let state = state.clone();
        Callback::from(move |id: i64| state.dispatch(ListAction::OpenModal(ModalKind::Edit, id)))
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
    let on_form_saved = {
        let state = state.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            state.dispatch(ListAction::CloseModal);
            refresh.set(*refresh + 1);
        })
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
                match delete_package(id).await {
                    Ok(()) => {
                        toast_context.add_toast.emit(Toast::success("Package deleted"));
                        refresh.set(*refresh + 1);
                    }
                    Err(e) => toast_context.add_toast.emit(Toast::error(e.to_string())),
                }
                state.dispatch(ListAction::CloseModal);
            });
        })
    };

    let editing = state
        .modal
        .target()
        .filter(|id| *id != 0 && state.modal.is_open(ModalKind::Edit))
        .and_then(|id| data.items.iter().find(|p| p.id == id).cloned());

    html! {
        <div>
            <div class="bg-white rounded-lg shadow-sm p-4 mb-6">
                <div class="flex flex-col md:flex-row gap-4 md:items-center">
                    <div class="flex-1">
                        <input
                            type="text"
                            placeholder="Search packages..."
                            value={state.draft.query.clone()}
                            oninput={on_query_input}
                            class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                        />
                    </div>
                    <label class="flex items-center gap-2 text-sm text-gray-600">
                        <input
                            type="checkbox"
                            checked={state.draft.active_only == Some(true)}
                            onchange={on_active_toggle}
                        />
                        {"Active only"}
                    </label>
                    <button
                        onclick={apply_filters}
                        class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"
                    >
                        {"Search"}
                    </button>
                    <button
                        onclick={open_create}
                        class="px-4 py-2 bg-emerald-600 text-white rounded-lg hover:bg-emerald-700"
                    >
                        {"+ New package"}
                    </button>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {for data.items.iter().map(|package| {
                    let id = package.id;
                    let on_edit = {
                        let open_edit = open_edit.clone();
                        Callback::from(move |_: MouseEvent| open_edit.emit(id))
                    };
                    let on_delete = {
                        let request_delete = request_delete.clone();
                        Callback::from(move |_: MouseEvent| request_delete.emit(id))
                    };
                    html! {
                        <div class="bg-white rounded-lg shadow-sm p-4 flex flex-col">
                            <div class="flex items-start justify-between">
                                <h3 class="text-base font-semibold text-gray-900">{&package.title}</h3>
                                if !package.is_active {
                                    <span class="text-xs px-2 py-1 bg-gray-100 text-gray-600 rounded-full">{"Retired"}</span>
                                }
                            </div>
                            <p class="mt-1 text-sm text-gray-600 flex-1">{&package.description}</p>
                            <p class="mt-3 text-sm text-gray-700">
                                {format!(
                                    "{} sessions · valid {} days · {:.2}",
                                    package.sessions, package.validity_days, package.price
                                )}
                            </p>
                            <div class="mt-3 flex justify-end gap-3 text-sm">
                                <button onclick={on_edit} class="text-blue-600 hover:text-blue-800">{"Edit"}</button>
                                <button onclick={on_delete} class="text-red-600 hover:text-red-800">{"Delete"}</button>
                            </div>
                        </div>
                    }
                })}
            </div>
            if data.items.is_empty() && !*loading {
                <div class="p-8 text-center text-gray-500 bg-white rounded-lg shadow-sm">{"No packages found"}</div>
            }
            <div class="mt-4 bg-white rounded-lg shadow-sm">
                <Pagination
                    page={state.page}
                    page_size={state.page_size}
                    total={data.total}
                    on_page_change={on_page_change}
                />
            </div>

            if state.modal.is_open(ModalKind::Edit) {
                <PackageFormModal
                    editing={editing}
                    on_saved={on_form_saved}
                    on_cancel={close_modal.clone()}
                />
            }

            <ConfirmModal
                is_open={state.modal.is_open(ModalKind::ConfirmDelete)}
                title="Delete package"
                message="Customers who already bought this package keep their sessions; the package just stops being sold."
                confirm_text="Delete"
                danger={true}
                on_confirm={confirm_delete}
                on_cancel={close_modal}
            />
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct PackageFormModalProps {
    editing: Option<PackageDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
}

#[function_component(PackageFormModal)]
fn package_form_modal(props: &PackageFormModalProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let title = use_state(|| props.editing.as_ref().map(|p| p.title.clone()).unwrap_or_default());
    let description = use_state(|| {
        props
            .editing
            .as_ref()
            .map(|p| p.description.clone())
            .unwrap_or_default()
    });
    let sessions = use_state(|| {
        props
            .editing
            .as_ref()
            .map(|p| p.sessions.to_string())
            .unwrap_or_else(|| "5".to_string())
    });
    let price = use_state(|| {
        props
            .editing
            .as_ref()
            .map(|p| p.price.to_string())
            .unwrap_or_else(|| "0".to_string())
    });
    let validity_days = use_state(|| {
        props
            .editing
            .as_ref()
            .map(|p| p.validity_days.to_string())
            .unwrap_or_else(|| "90".to_string())
    });
    let saving = use_state(|| false);

    let bind_input = |handle: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };
    let bind_textarea = |handle: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let on_submit = {
        let toast_context = toast_context.clone();
        let props = props.clone();
        let title = title.clone();
        let description = description.clone();
        let sessions = sessions.clone();
        let price = price.clone();
        let validity_days = validity_days.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = SavePackageRequest {
                title: (*title).clone(),
                description: (*description).clone(),
                sessions: sessions.parse().unwrap_or(0),
                price: price.parse().unwrap_or(-1.0),
                validity_days: validity_days.parse().unwrap_or(0),
            };
            if let Err(errors) = request.validate() {
                toast_context
                    .add_toast
                    .emit(Toast::error(errors.to_string()));
                return;
            }

            let toast_context = toast_context.clone();
            let on_saved = props.on_saved.clone();
            let editing = props.editing.clone();
            let saving = saving.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match &editing {
                    Some(package) => update_package(package.id, &request).await,
                    None => create_package(&request).await,
                };
                match result {
                    Ok(saved) => {
                        toast_context
                            .add_toast
                            .emit(Toast::success(format!("Package '{}' saved", saved.title)));
                        on_saved.emit(());
                    }
                    Err(e) => toast_context.add_toast.emit(Toast::error(e.to_string())),
                }
                saving.set(false);
            });
        })
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            <div class="absolute inset-0 bg-black bg-opacity-50"></div>
            <form
                onsubmit={on_submit}
                class="relative bg-white rounded-lg shadow-xl p-6 max-w-md w-full mx-4 space-y-4"
            >
                <h3 class="text-lg font-medium text-gray-900">
                    {if props.editing.is_some() { "Edit package" } else { "New package" }}
                </h3>
                <div>
                    <label class="block text-sm text-gray-600 mb-1">{"Title"}</label>
                    <input
                        type="text"
                        value={(*title).clone()}
                        oninput={bind_input(title.clone())}
                        class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-600 mb-1">{"Description"}</label>
                    <textarea
                        value={(*description).clone()}
                        oninput={bind_textarea(description.clone())}
                        rows="3"
                        class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                    />
                </div>
                <div class="grid grid-cols-3 gap-3">
                    <div>
                        <label class="block text-sm text-gray-600 mb-1">{"Sessions"}</label>
                        <input
                            type="number"
                            value={(*sessions).clone()}
                            oninput={bind_input(sessions.clone())}
                            class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-600 mb-1">{"Price"}</label>
                        <input
                            type="number"
                            step="0.50"
                            value={(*price).clone()}
                            oninput={bind_input(price.clone())}
                            class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-600 mb-1">{"Valid days"}</label>
                        <input
                            type="number"
                            value={(*validity_days).clone()}
                            oninput={bind_input(validity_days.clone())}
                            class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                        />
                    </div>
                </div>
                <div class="flex justify-end gap-2 pt-2">
                    <button
                        type="button"
                        onclick={on_cancel_click}
                        class="px-4 py-2 text-sm font-medium text-gray-700 border border-gray-300 rounded-md hover:bg-gray-50"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        disabled={*saving}
                        class="px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-md hover:bg-blue-700 disabled:opacity-50"
                    >
                        {if *saving { "Saving..." } else { "Save package" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
