use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="p-4 bg-white shadow-sm">
                <div class="container mx-auto">
                    <h1 class="text-xl font-medium">{"About Courtbook"}</h1>
                </div>
            </header>

            <main class="container mx-auto px-4 py-8 max-w-3xl space-y-8">
                <section class="bg-white rounded-lg shadow-sm p-6">
                    <h2 class="text-lg font-semibold text-gray-900 mb-3">{"For players"}</h2>
                    <p class="text-gray-600 leading-relaxed">
                        {"Courtbook lists sports courts with live weekly availability. Search by \
                          sport and city, pick an open slot on the calendar, and your booking is \
                          confirmed by the court owner. If you're short a partner, the playmate \
                          board connects you with players at your level nearby."}
                    </p>
                </section>

                <section class="bg-white rounded-lg shadow-sm p-6">
                    <h2 class="text-lg font-semibold text-gray-900 mb-3">{"For court owners"}</h2>
                    <p class="text-gray-600 leading-relaxed">
                        {"Owners manage their courts from one dashboard: publish bookable slots on \
                          a weekly grid, confirm and track bookings, answer customer feedback, \
                          sell coaching packages, and withdraw earnings from the platform wallet."}
                    </p>
                </section>

                <section class="bg-white rounded-lg shadow-sm p-6">
                    <h2 class="text-lg font-semibold text-gray-900 mb-3">{"How slots work"}</h2>
                    <p class="text-gray-600 leading-relaxed">
                        {"Every court's week runs Monday to Sunday, 06:00 to midnight. Owners open \
                          hour slots on the grid; a slot is either available or locked. Booked \
                          slots stay visible so everyone sees the same picture of the week."}
                    </p>
                </section>
            </main>
        </div>
    }
}
