use yew::prelude::*;

use crate::Page;

#[derive(Properties, Clone, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let on_browse_courts = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Courts))
    };
    let on_learn_more = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::About))
    };

    html! {
        <div class="home-page min-h-screen bg-gradient-to-br from-emerald-50 via-white to-sky-50">
            // Hero Section
            <div class="relative overflow-hidden">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-12 sm:py-16 lg:py-20">
                    <div class="text-center max-w-4xl mx-auto">
                        <h1 class="text-3xl sm:text-4xl lg:text-5xl xl:text-6xl font-bold text-gray-900 mb-6 sm:mb-8 leading-tight">
                            <span class="bg-gradient-to-r from-emerald-600 to-sky-600 bg-clip-text text-transparent">
                                {"Book your next game on Courtbook"}
                            </span>
                        </h1>
                        <p class="text-lg sm:text-xl lg:text-2xl text-gray-600 mb-8 sm:mb-12 leading-relaxed max-w-3xl mx-auto">
                            {"Tennis, padel, badminton, and futsal courts near you. "}
                            <span class="font-medium text-gray-800">{"Pick a slot, show up, play."}</span>
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 sm:gap-6 justify-center items-center">
                            <button
                                onclick={on_browse_courts.clone()}
                                class="w-full sm:w-auto inline-flex items-center justify-center px-8 py-4 text-lg font-semibold text-white bg-gradient-to-r from-emerald-600 to-sky-600 rounded-xl shadow-lg hover:shadow-xl transform hover:-translate-y-1 transition-all duration-200 active:scale-95 min-h-[56px]"
                            >
                                <span class="mr-2 text-xl">{"🎾"}</span>
                                {"Browse courts"}
                            </button>
                            <button
                                onclick={on_learn_more}
                                class="w-full sm:w-auto inline-flex items-center justify-center px-8 py-4 text-lg font-semibold text-emerald-700 bg-white border-2 border-emerald-200 rounded-xl shadow-lg hover:shadow-xl hover:bg-emerald-50 transform hover:-translate-y-1 transition-all duration-200 active:scale-95 min-h-[56px]"
                            >
                                {"How it works"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            // Features Section
            <div class="py-12 sm:py-16 lg:py-20 bg-white">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-12 sm:mb-16">
                        <h2 class="text-2xl sm:text-3xl lg:text-4xl font-bold text-gray-900 mb-4">
                            {"Why Courtbook?"}
                        </h2>
                        <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                            {"Everything players and court owners need in one place"}
                        </p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 sm:gap-8">
                        <div class="bg-gradient-to-br from-emerald-50 to-teal-50 rounded-2xl p-6 sm:p-8 text-center hover:shadow-lg transition-all duration-200 transform hover:-translate-y-1">
                            <div class="w-16 h-16 bg-emerald-100 rounded-full flex items-center justify-center mx-auto mb-4 sm:mb-6">
                                <span class="text-2xl sm:text-3xl">{"🗓"}</span>
                            </div>
                            <h3 class="text-xl sm:text-2xl font-semibold text-gray-900 mb-3">{"Live weekly availability"}</h3>
                            <p class="text-gray-600 leading-relaxed">
                                {"See every open slot on a weekly grid and book in two taps"}
                            </p>
                        </div>

                        <div class="bg-gradient-to-br from-sky-50 to-blue-50 rounded-2xl p-6 sm:p-8 text-center hover:shadow-lg transition-all duration-200 transform hover:-translate-y-1">
                            <div class="w-16 h-16 bg-sky-100 rounded-full flex items-center justify-center mx-auto mb-4 sm:mb-6">
                                <span class="text-2xl sm:text-3xl">{"👥"}</span>
                            </div>
                            <h3 class="text-xl sm:text-2xl font-semibold text-gray-900 mb-3">{"Find a playmate"}</h3>
                            <p class="text-gray-600 leading-relaxed">
                                {"Post on the playmate board and never miss a game for lack of a partner"}
                            </p>
                        </div>

                        <div class="bg-gradient-to-br from-violet-50 to-purple-50 rounded-2xl p-6 sm:p-8 text-center hover:shadow-lg transition-all duration-200 transform hover:-translate-y-1">
                            <div class="w-16 h-16 bg-violet-100 rounded-full flex items-center justify-center mx-auto mb-4 sm:mb-6">
                                <span class="text-2xl sm:text-3xl">{"🏆"}</span>
                            </div>
                            <h3 class="text-xl sm:text-2xl font-semibold text-gray-900 mb-3">{"Coaching packages"}</h3>
                            <p class="text-gray-600 leading-relaxed">
                                {"Book session blocks with club coaches at package prices"}
                            </p>
                        </div>
                    </div>
                </div>
            </div>

            // Call to Action Section
            <div class="py-12 sm:py-16 bg-gray-50">
                <div class="container mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-2xl sm:text-3xl lg:text-4xl font-bold text-gray-900 mb-4">
                        {"Ready to play?"}
                    </h2>
                    <p class="text-lg text-gray-600 mb-8 max-w-2xl mx-auto">
                        {"Hundreds of courts across the country are listed on Courtbook"}
                    </p>
                    <button
                        onclick={on_browse_courts}
                        class="inline-flex items-center justify-center px-8 py-4 text-lg font-semibold text-white bg-gradient-to-r from-emerald-600 to-sky-600 rounded-xl shadow-lg hover:shadow-xl transform hover:-translate-y-1 transition-all duration-200 active:scale-95 min-h-[56px]"
                    >
                        {"Find your court"}
                    </button>
                </div>
            </div>
        </div>
    }
}
