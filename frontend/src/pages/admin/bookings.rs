use chrono::NaiveDate;
use shared::{BookingDto, BookingFilter, BookingStatus, Paged};
use yew::prelude::*;

use crate::api::bookings::{get_bookings, update_booking_status};
use crate::components::common_modal::ConfirmModal;
use crate::components::common_toast::{Toast, ToastContext};
use crate::components::pagination::Pagination;
use crate::state::list::{ListAction, ListViewState, ModalKind, DEFAULT_PAGE_SIZE};

/// Booking management: filter by customer, status, and date; confirm,
/// complete, or cancel individual bookings.
#[function_component(BookingManagement)]
pub fn booking_management() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let state = use_reducer(ListViewState::<BookingFilter>::default);
    let data = use_state(|| Paged::<BookingDto>::empty(DEFAULT_PAGE_SIZE));
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let refresh = use_state(|| 0u32);

    {
        let data = data.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(
            (state.applied.clone(), state.page, state.page_size, *refresh),
            move |(filter, page, page_size, _)| {
                let filter = filter.clone();
                let page = *page;
                let page_size = *page_size;
                loading.set(true);
                error.set(None);
                wasm_bindgen_futures::spawn_local(async move {
                    match get_bookings(&filter, page, page_size).await {
                        Ok(paged) => {
                            data.set(paged);
                            loading.set(false);
                        }
                        Err(e) => {
                            error.set(Some(e.to_string()));
                            loading.set(false);
                        }
                    }
                });
            },
        );
    }

    let edit_draft = {
        let state = state.clone();
        move |mutate: Box<dyn Fn(&mut BookingFilter, String)>| {
            let state = state.clone();
            Callback::from(move |value: String| {
                let mut draft = state.draft.clone();
                mutate(&mut draft, value);
                state.dispatch(ListAction::EditDraft(draft));
            })
        }
    };

    let on_query_input = {
        let set = edit_draft(Box::new(|draft, value| draft.query = value));
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            set.emit(input.value());
        })
    };
    let on_status_change = {
        let set = edit_draft(Box::new(|draft, value| {
            draft.status = BookingStatus::ALL
                .into_iter()
                .find(|s| s.as_param() == value);
        }));
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            set.emit(select.value());
        })
    };
    let on_date_change = {
        let set = edit_draft(Box::new(|draft, value| {
            draft.booking_date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok();
        }));
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            set.emit(input.value());
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

    let set_status = {
        let toast_context = toast_context.clone();
        let refresh = refresh.clone();
        Callback::from(move |(id, status): (i64, BookingStatus)| {
            let toast_context = toast_context.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match update_booking_status(id, status).await {
                    Ok(updated) => {
                        toast_context.add_toast.emit(Toast::success(format!(
                            "Booking for {} is now {}",
                            updated.customer_name,
                            updated.status.label()
                        )));
                        refresh.set(*refresh + 1);
                    }
                    Err(e) => toast_context.add_toast.emit(Toast::error(e.to_string())),
                }
            });
        })
    };

    let request_cancel = {
        let state = state.clone();
        Callback::from(move |id: i64| {
            state.dispatch(ListAction::OpenModal(ModalKind::ConfirmDelete, id))
        })
    };
    let close_modal = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(ListAction::CloseModal))
    };
    let confirm_cancel = {
        let state = state.clone();
        let set_status = set_status.clone();
        Callback::from(move |_: ()| {
            if let Some(id) = state.modal.target() {
                set_status.emit((id, BookingStatus::Cancelled));
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
                            placeholder="Search by customer or court..."
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
                        {for BookingStatus::ALL.iter().map(|status| html! {
                            <option
                                value={status.as_param()}
                                selected={state.draft.status == Some(*status)}
                            >
                                {status.label()}
                            </option>
                        })}
                    </select>
                    <input
                        type="date"
                        value={state.draft.booking_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()}
                        onchange={on_date_change}
                        class="px-3 py-2 border border-gray-300 rounded-lg text-sm"
                    />
                    <div class="flex gap-2">
                        <button
                            onclick={apply_filters}
                            disabled={*loading}
                            class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50"
                        >
                            {if *loading { "Searching..." } else { "Search" }}
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

            if let Some(err) = &*error {
                <div class="bg-red-50 border border-red-200 rounded-lg p-4 mb-6">
                    <div class="flex">
                        <div class="text-red-400">{"⚠️"}</div>
                        <div class="ml-3">
                            <h3 class="text-sm font-medium text-red-800">{"Error"}</h3>
                            <div class="mt-1 text-sm text-red-700">{err}</div>
                        </div>
                    </div>
                </div>
            } else {
                <div class="bg-white rounded-lg shadow-sm overflow-hidden">
                    <div class="overflow-x-auto">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Customer"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Court"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Date"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Time"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Amount"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                                    <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody class="bg-white divide-y divide-gray-200">
                                {for data.items.iter().map(|booking| booking_row(booking, &set_status, &request_cancel))}
                            </tbody>
                        </table>
                    </div>
                    if data.items.is_empty() && !*loading {
                        <div class="p-8 text-center text-gray-500">{"No bookings found"}</div>
                    }
                    <Pagination
                        page={state.page}
                        page_size={state.page_size}
                        total={data.total}
                        on_page_change={on_page_change}
                    />
                </div>
            }

            <ConfirmModal
                is_open={state.modal.is_open(ModalKind::ConfirmDelete)}
                title="Cancel booking"
                message="The customer will be notified and any payment refunded per policy. Continue?"
                confirm_text="Cancel booking"
                danger={true}
                on_confirm={confirm_cancel}
                on_cancel={close_modal}
            />
        </div>
    }
}

fn status_badge(status: BookingStatus) -> Html {
    let classes = match status {
        BookingStatus::Pending => "bg-amber-100 text-amber-800",
        BookingStatus::Confirmed => "bg-emerald-100 text-emerald-800",
        BookingStatus::Completed => "bg-sky-100 text-sky-800",
        BookingStatus::Cancelled => "bg-gray-100 text-gray-600",
    };
    html! {
        <span class={classes!("inline-flex", "px-2", "py-1", "text-xs", "rounded-full", classes)}>
            {status.label()}
        </span>
    }
}

fn booking_row(
    booking: &BookingDto,
    set_status: &Callback<(i64, BookingStatus)>,
    request_cancel: &Callback<i64>,
) -> Html {
    let id = booking.id;
    let confirm = {
        let set_status = set_status.clone();
        Callback::from(move |_: MouseEvent| set_status.emit((id, BookingStatus::Confirmed)))
    };
    let complete = {
        let set_status = set_status.clone();
        Callback::from(move |_: MouseEvent| set_status.emit((id, BookingStatus::Completed)))
    };
    let cancel = {
        let request_cancel = request_cancel.clone();
        Callback::from(move |_: MouseEvent| request_cancel.emit(id))
    };

    html! {
        <tr class="hover:bg-gray-50">
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{&booking.customer_name}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{&booking.court_name}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{booking.booking_date.format("%d %b %Y").to_string()}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                {format!(
                    "{}–{}",
                    booking.start_time.format("%H:%M"),
                    booking.end_time.format("%H:%M")
                )}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{format!("{:.2}", booking.amount)}</td>
            <td class="px-6 py-4 whitespace-nowrap">{status_badge(booking.status)}</td>
            <td class="px-6 py-4 whitespace-nowrap text-right text-sm space-x-2">
                if booking.status == BookingStatus::Pending {
                    <button onclick={confirm} class="text-emerald-600 hover:text-emerald-800">{"Confirm"}</button>
                }
                if booking.status == BookingStatus::Confirmed {
                    <button onclick={complete} class="text-sky-600 hover:text-sky-800">{"Complete"}</button>
                }
                if matches!(booking.status, BookingStatus::Pending | BookingStatus::Confirmed) {
                    <button onclick={cancel} class="text-red-600 hover:text-red-800">{"Cancel"}</button>
                }
            </td>
        </tr>
    }
}
