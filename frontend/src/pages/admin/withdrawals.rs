use shared::{Paged, WithdrawalDto, WithdrawalFilter, WithdrawalStatus};
use yew::prelude::*;

use crate::api::wallet::{get_withdrawals, resolve_withdrawal};
use crate::components::common_modal::ConfirmModal;
use crate::components::common_toast::{Toast, ToastContext};
use crate::components::pagination::Pagination;
use crate::state::list::{ListAction, ListViewState, ModalKind, DEFAULT_PAGE_SIZE};

/// Wallet withdrawal management: review owner payout requests and approve or
/// reject the pending ones.
#[function_component(WithdrawalManagement)]
pub fn withdrawal_management() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let state = use_reducer(ListViewState::<WithdrawalFilter>::default);
    let data = use_state(|| Paged::<WithdrawalDto>::empty(DEFAULT_PAGE_SIZE));
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
                    match get_withdrawals(&filter, page, page_size).await {
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
    let on_status_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut draft = state.draft.clone();
            draft.status = WithdrawalStatus::ALL
                .into_iter()
                .find(|status| status.label() == select.value());
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

    let resolve = {
        let toast_context = toast_context.clone();
        let refresh = refresh.clone();
        Callback::from(move |(id, status): (i64, WithdrawalStatus)| {
            let toast_context = toast_context.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match resolve_withdrawal(id, status).await {
                    Ok(resolved) => {
                        toast_context.add_toast.emit(Toast::success(format!(
                            "Withdrawal for {} {}",
                            resolved.owner_name,
                            resolved.status.label().to_lowercase()
                        )));
                        refresh.set(*refresh + 1);
                    }
                    Err(e) => toast_context.add_toast.emit(Toast::error(e.to_string())),
                }
            });
        })
    };

    // Rejection burns the request, so it gets the confirm treatment.
    let request_reject = {
        let state = state.clone();
        Callback::from(move |id: i64| {
            state.dispatch(ListAction::OpenModal(ModalKind::ConfirmDelete, id))
        })
    };
    let close_modal = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(ListAction::CloseModal))
    };
    let confirm_reject = {
        let state = state.clone();
        let resolve = resolve.clone();
        Callback::from(move |_: ()| {
            if let Some(id) = state.modal.target() {
                resolve.emit((id, WithdrawalStatus::Rejected));
            }
            state.dispatch(ListAction::CloseModal);
        })
    };

    html! {
        <div>
            <div class="bg-white rounded-lg shadow-sm p-4 mb-6">
                <div class="flex flex-col md:flex-row gap-4">
                    <div class="flex-1">
                        <input
                            type="text"
                            placeholder="Search by owner..."
                            value={state.draft.query.clone()}
                            oninput={on_query_input}
                            class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                        />
                    </div>
                    <select
                        onchange={on_status_change}
                        class="px-3 py-2 border border-gray-300 rounded-lg text-sm"
                    >
                        <option value="" selected={state.draft.status.is_none()}>{"Any status"}</option>
                        {for WithdrawalStatus::ALL.iter().map(|status| html! {
                            <option
                                value={status.label()}
                                selected={state.draft.status == Some(*status)}
                            >
                                {status.label()}
                            </option>
                        })}
                    </select>
                    <button
                        onclick={apply_filters}
                        disabled={*loading}
                        class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50"
                    >
                        {"Search"}
                    </button>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow-sm overflow-hidden">
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Owner"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Amount"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Requested"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                                <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {for data.items.iter().map(|withdrawal| {
                                let id = withdrawal.id;
                                let approve = {
                                    let resolve = resolve.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        resolve.emit((id, WithdrawalStatus::Approved))
                                    })
                                };
                                let reject = {
                                    let request_reject = request_reject.clone();
                                    Callback::from(move |_: MouseEvent| request_reject.emit(id))
                                };
                                html! {
                                    <tr class="hover:bg-gray-50">
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{&withdrawal.owner_name}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{format!("{:.2}", withdrawal.amount)}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{withdrawal.requested_at.format("%d %b %Y %H:%M").to_string()}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{withdrawal.status.label()}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-right text-sm space-x-2">
                                            if withdrawal.status.is_actionable() {
                                                <button onclick={approve} class="text-emerald-600 hover:text-emerald-800">{"Approve"}</button>
                                                <button onclick={reject} class="text-red-600 hover:text-red-800">{"Reject"}</button>
                                            }
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                </div>
                if data.items.is_empty() && !*loading {
                    <div class="p-8 text-center text-gray-500">{"No withdrawal requests found"}</div>
                }
                <Pagination
                    page={state.page}
                    page_size={state.page_size}
                    total={data.total}
                    on_page_change={on_page_change}
                />
            </div>

            <ConfirmModal
                is_open={state.modal.is_open(ModalKind::ConfirmDelete)}
                title="Reject withdrawal"
                message="The owner will be notified and the amount returned to their wallet balance."
                confirm_text="Reject"
                danger={true}
                on_confirm={confirm_reject}
                on_cancel={close_modal}
            />
        </div>
    }
}
