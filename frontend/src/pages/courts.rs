use shared::{CourtDto, CourtFilter, Paged};
use yew::prelude::*;

use crate::api::courts::get_courts;
use crate::components::pagination::Pagination;
use crate::state::list::{ListAction, ListViewState, DEFAULT_PAGE_SIZE};

/// Public court listing: search by name, sport, or city and browse what can
/// be booked.
#[function_component(Courts)]
pub fn courts() -> Html {
    let state = use_reducer(ListViewState::<CourtFilter>::default);
    let data = use_state(|| Paged::<CourtDto>::empty(DEFAULT_PAGE_SIZE));
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let data = data.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(
            (state.applied.clone(), state.page, state.page_size),
            move |(filter, page, page_size)| {
                let filter = filter.clone();
                let page = *page;
                let page_size = *page_size;
                loading.set(true);
                error.set(None);
                wasm_bindgen_futures::spawn_local(async move {
                    match get_courts(&filter, page, page_size).await {
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

    let on_query_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut draft = state.draft.clone();
            draft.query = input.value();
            state.dispatch(ListAction::EditDraft(draft));
        })
    };
    let on_sport_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut draft = state.draft.clone();
            draft.sport = input.value();
            state.dispatch(ListAction::EditDraft(draft));
        })
    };
    let on_city_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut draft = state.draft.clone();
            draft.city = input.value();
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

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="p-4 sticky top-0 z-40 bg-white shadow-sm">
                <div class="container mx-auto flex justify-between items-center flex-wrap gap-3">
                    <h1 class="text-xl font-medium">{"Find a court"}</h1>
                </div>
            </header>

            <main class="container mx-auto px-4 py-6">
                <div class="bg-white rounded-lg shadow-sm p-4 mb-6">
                    <div class="flex flex-col md:flex-row gap-4">
                        <input
                            type="text"
                            placeholder="Search courts..."
                            value={state.draft.query.clone()}
                            oninput={on_query_input}
                            class="flex-1 px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                        />
                        <input
                            type="text"
                            placeholder="Sport"
                            value={state.draft.sport.clone()}
                            oninput={on_sport_input}
                            class="px-4 py-2 border border-gray-300 rounded-lg"
                        />
                        <input
                            type="text"
                            placeholder="City"
                            value={state.draft.city.clone()}
                            oninput={on_city_input}
                            class="px-4 py-2 border border-gray-300 rounded-lg"
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
                    <>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                            {for data.items.iter().map(court_card)}
                        </div>
                        if data.items.is_empty() && !*loading {
                            <div class="p-8 text-center text-gray-500 bg-white rounded-lg shadow-sm">{"No courts found"}</div>
                        }
                        <div class="mt-4 bg-white rounded-lg shadow-sm">
                            <Pagination
                                page={state.page}
                                page_size={state.page_size}
                                total={data.total}
                                on_page_change={on_page_change}
                            />
                        </div>
                    </>
                }
            </main>
        </div>
    }
}

fn court_card(court: &CourtDto) -> Html {
    html! {
        <div class="bg-white rounded-lg shadow-sm overflow-hidden">
            if let Some(image_url) = &court.image_url {
                <img src={image_url.clone()} alt={court.name.clone()} class="w-full h-40 object-cover" />
            } else {
                <div class="w-full h-40 bg-gradient-to-br from-gray-50 to-gray-100"></div>
            }
            <div class="p-4">
                <div class="flex items-start justify-between">
                    <h3 class="text-base font-semibold text-gray-900">{&court.name}</h3>
                    <span class="text-xs px-2 py-1 bg-blue-50 text-blue-700 rounded-full">{&court.sport}</span>
                </div>
                <p class="mt-1 text-sm text-gray-500">{format!("{}, {}", court.address, court.city)}</p>
                <p class="mt-2 text-sm font-medium text-gray-800">
                    {format!("{:.2} / hour", court.price_per_hour)}
                </p>
            </div>
        </div>
    }
}
