use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gray-900 text-gray-400">
            <div class="container mx-auto px-4 py-6 flex flex-col sm:flex-row items-center justify-between gap-2 text-sm">
                <span>{"© 2024 Courtbook. All rights reserved."}</span>
                <span>{"Built for players and court owners."}</span>
            </div>
        </footer>
    }
}
