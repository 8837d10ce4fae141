use chrono::{Local, NaiveDate};
use log::warn;
use shared::{build_slot_blocks, CourtDto, CreateSlotRequest, SlotBlock, TimeSlotDto};
use yew::prelude::*;

use crate::api::courts::get_owned_courts;
use crate::api::slots::{
    create_slot, delete_slot, get_slots_for_date, set_slot_availability, update_slot,
};
use crate::components::common_modal::ConfirmModal;
use crate::components::common_toast::{Toast, ToastContext};
use crate::components::slot_grid::SlotGrid;
use crate::state::schedule::{ScheduleAction, ScheduleViewState, SlotModalState};

/// Weekly slot management: pick a court, walk weeks, and manage the bookable
/// slots on the day × hour grid.
#[function_component(SlotManagement)]
pub fn slot_management() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let today = Local::now().date_naive();

    let state = use_reducer(move || ScheduleViewState::for_pivot(today));
    let courts = use_state(Vec::<CourtDto>::new);
    let slots = use_state(Vec::<TimeSlotDto>::new);
    let loading = use_state(|| false);
    // Bumped after every mutation to refetch the visible week.
    let refresh = use_state(|| 0u32);
    // Guards against a superseded fetch landing after the user moved on.
    let fetch_generation = use_mut_ref(|| 0u32);

    // Load the owner's courts once and select the first.
    {
        let courts = courts.clone();
        let state = state.clone();
        let toast_context = toast_context.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match get_owned_courts().await {
                    Ok(list) => {
                        if let Some(first) = list.first() {
                            state.dispatch(ScheduleAction::SelectCourt(first.id));
                        }
                        courts.set(list);
                    }
                    Err(e) => {
                        toast_context.add_toast.emit(Toast::error(e.to_string()));
                    }
                }
            });
        });
    }

    // Fetch one batch of slots per displayed day whenever the court, the
    // week, or the refresh counter changes.
    {
        let slots = slots.clone();
        let loading = loading.clone();
        let fetch_generation = fetch_generation.clone();
        let toast_context = toast_context.clone();
        use_effect_with(
            (state.court_id, state.week, *refresh),
            move |(court_id, week, _)| {
                let Some(court_id) = *court_id else {
                    slots.set(Vec::new());
                    return;
                };
                let week = *week;
                let generation = {
                    let mut current = fetch_generation.borrow_mut();
                    *current += 1;
                    *current
                };
                loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    let mut fetched = Vec::new();
                    for day in week.days() {
                        match get_slots_for_date(court_id, *day).await {
                            Ok(mut day_slots) => fetched.append(&mut day_slots),
                            Err(e) => {
                                warn!("Slot fetch for {} failed: {}", day, e);
                                toast_context.add_toast.emit(Toast::error(e.to_string()));
                                break;
                            }
                        }
                    }
                    // A newer fetch has started; this result is stale.
                    if *fetch_generation.borrow() != generation {
                        return;
                    }
                    slots.set(fetched);
                    loading.set(false);
                });
            },
        );
    }

    let blocks = build_slot_blocks(&slots, &state.week);

    let on_court_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(id) = select.value().parse::<i64>() {
                state.dispatch(ScheduleAction::SelectCourt(id));
            }
        })
    };

    let on_prev_week = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ScheduleAction::PrevWeek))
    };
    let on_this_week = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ScheduleAction::GoToWeekOf(today)))
    };
    let on_next_week = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ScheduleAction::NextWeek))
    };

    let on_add = {
        let state = state.clone();
        Callback::from(move |day: NaiveDate| state.dispatch(ScheduleAction::OpenCreate(day)))
    };
    let on_edit = {
        let state = state.clone();
        Callback::from(move |block: SlotBlock| state.dispatch(ScheduleAction::OpenEdit(block.id)))
    };
    let on_request_delete = {
        let state = state.clone();
        Callback::from(move |block: SlotBlock| {
            state.dispatch(ScheduleAction::OpenConfirmDelete(block.id))
        })
    };

    let on_toggle_lock = {
        let toast_context = toast_context.clone();
        let refresh = refresh.clone();
        Callback::from(move |block: SlotBlock| {
            let toast_context = toast_context.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match set_slot_availability(block.id, !block.is_available).await {
                    Ok(updated) => {
                        let word = if updated.is_available { "unlocked" } else { "locked" };
                        toast_context
                            .add_toast
                            .emit(Toast::success(format!("Slot #{} {}", updated.slot_number, word)));
                        refresh.set(*refresh + 1);
                    }
                    Err(e) => toast_context.add_toast.emit(Toast::error(e.to_string())),
                }
            });
        })
    };

    let close_modal = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(ScheduleAction::CloseModal))
    };

    let on_confirm_delete = {
        let state = state.clone();
        let toast_context = toast_context.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            let SlotModalState::ConfirmDelete { slot_id } = state.modal else {
                return;
            };
            let state = state.clone();
            let toast_context = toast_context.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_slot(slot_id).await {
                    Ok(()) => {
                        toast_context.add_toast.emit(Toast::success("Slot deleted"));
                        refresh.set(*refresh + 1);
                    }
                    Err(e) => toast_context.add_toast.emit(Toast::error(e.to_string())),
                }
                state.dispatch(ScheduleAction::CloseModal);
            });
        })
    };

    let on_form_saved = {
        let state = state.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            state.dispatch(ScheduleAction::CloseModal);
            refresh.set(*refresh + 1);
        })
    };

    let form_modal = match state.modal {
        SlotModalState::Create { day } => {
            let court_id = state.court_id.unwrap_or_default();
            html! {
                <SlotFormModal
                    court_id={court_id}
                    day={day}
                    editing={None::<TimeSlotDto>}
                    on_saved={on_form_saved.clone()}
                    on_cancel={close_modal.clone()}
                />
            }
        }
        SlotModalState::Edit { slot_id } => {
            match slots.iter().find(|s| s.id == slot_id).cloned() {
                Some(slot) => html! {
                    <SlotFormModal
                        court_id={slot.court_id}
                        day={slot.start_time.date()}
                        editing={Some(slot)}
                        on_saved={on_form_saved.clone()}
                        on_cancel={close_modal.clone()}
                    />
                },
                None => html! {},
            }
        }
        _ => html! {},
    };

    html! {
        <div>
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-3 mb-4">
                <div class="flex items-center gap-3">
                    <label class="text-sm text-gray-600">{"Court"}</label>
                    <select
                        onchange={on_court_change}
                        class="px-3 py-2 border border-gray-300 rounded-lg text-sm"
                    >
                        {for courts.iter().map(|court| {
                            html! {
                                <option
                                    value={court.id.to_string()}
                                    selected={state.court_id == Some(court.id)}
                                >
                                    {format!("{} ({})", court.name, court.sport)}
                                </option>
                            }
                        })}
                    </select>
                </div>
                <div class="flex items-center gap-2">
                    <button onclick={on_prev_week} class="px-3 py-2 border border-gray-300 rounded-lg text-sm hover:bg-gray-50">
                        {"← Previous"}
                    </button>
                    <span class="text-sm font-medium text-gray-800">{state.week.label()}</span>
                    <button onclick={on_this_week} class="px-3 py-2 border border-gray-300 rounded-lg text-sm hover:bg-gray-50">
                        {"This week"}
                    </button>
                    <button onclick={on_next_week} class="px-3 py-2 border border-gray-300 rounded-lg text-sm hover:bg-gray-50">
                        {"Next →"}
                    </button>
                </div>
            </div>

            if *loading {
                <div class="p-4 text-center text-gray-500 text-sm">{"Loading slots..."}</div>
            }

            <SlotGrid
                week={state.week}
                blocks={blocks}
                today={today}
                on_add={on_add}
                on_edit={on_edit}
                on_toggle_lock={on_toggle_lock}
                on_delete={on_request_delete}
            />

            {form_modal}

            <ConfirmModal
                is_open={matches!(state.modal, SlotModalState::ConfirmDelete { .. })}
                title="Delete slot"
                message="This removes the slot and any pending bookings against it. This cannot be undone."
                confirm_text="Delete"
                danger={true}
                on_confirm={on_confirm_delete}
                on_cancel={close_modal}
            />
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct SlotFormModalProps {
    court_id: i64,
    day: NaiveDate,
    editing: Option<TimeSlotDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
}

/// Create/edit form for one slot. Validation runs client-side through the
/// shared request type before anything is sent.
#[function_component(SlotFormModal)]
fn slot_form_modal(props: &SlotFormModalProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let slot_number = use_state(|| {
        props
            .editing
            .as_ref()
            .map(|s| s.slot_number.to_string())
            .unwrap_or_else(|| "1".to_string())
    });
    let start_time = use_state(|| {
        props
            .editing
            .as_ref()
            .map(|s| s.start_time.format("%H:%M").to_string())
            .unwrap_or_else(|| "09:00".to_string())
    });
    let end_time = use_state(|| {
        props
            .editing
            .as_ref()
            .map(|s| s.end_time.format("%H:%M").to_string())
            .unwrap_or_else(|| "10:00".to_string())
    });
    let price = use_state(|| {
        props
            .editing
            .as_ref()
            .map(|s| s.price.to_string())
            .unwrap_or_else(|| "0".to_string())
    });
    let saving = use_state(|| false);

    let bind_input = |handle: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let on_submit = {
        let toast_context = toast_context.clone();
        let props = props.clone();
        let slot_number = slot_number.clone();
        let start_time = start_time.clone();
        let end_time = end_time.clone();
        let price = price.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = CreateSlotRequest {
                court_id: props.court_id,
                slot_number: slot_number.parse().unwrap_or(0),
                date: props.day,
                start_time: (*start_time).clone(),
                end_time: (*end_time).clone(),
                price: price.parse().unwrap_or(-1.0),
            };
            let request = match request.validated() {
                Ok(request) => request,
                Err(e) => {
                    toast_context.add_toast.emit(Toast::error(e.to_string()));
                    return;
                }
            };

            let toast_context = toast_context.clone();
            let on_saved = props.on_saved.clone();
            let editing = props.editing.clone();
            let saving = saving.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match &editing {
                    Some(slot) => update_slot(slot.id, &request).await,
                    None => create_slot(&request).await,
                };
                match result {
                    Ok(saved) => {
                        toast_context
                            .add_toast
                            .emit(Toast::success(format!("Slot #{} saved", saved.slot_number)));
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

    let heading = if props.editing.is_some() {
        "Edit slot"
    } else {
        "New slot"
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            <div class="absolute inset-0 bg-black bg-opacity-50"></div>
            <form
                onsubmit={on_submit}
                class="relative bg-white rounded-lg shadow-xl p-6 max-w-md w-full mx-4 space-y-4"
            >
                <h3 class="text-lg font-medium text-gray-900">
                    {heading}{" — "}{props.day.format("%A %d %b").to_string()}
                </h3>
                <div>
                    <label class="block text-sm text-gray-600 mb-1">{"Slot number"}</label>
                    <input
                        type="number"
                        value={(*slot_number).clone()}
                        oninput={bind_input(slot_number.clone())}
                        class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                    />
                </div>
                <div class="grid grid-cols-2 gap-3">
                    <div>
                        <label class="block text-sm text-gray-600 mb-1">{"Start time"}</label>
                        <input
                            type="time"
                            value={(*start_time).clone()}
                            oninput={bind_input(start_time.clone())}
                            class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-600 mb-1">{"End time"}</label>
                        <input
                            type="time"
                            value={(*end_time).clone()}
                            oninput={bind_input(end_time.clone())}
                            class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                        />
                    </div>
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
                        {if *saving { "Saving..." } else { "Save slot" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
