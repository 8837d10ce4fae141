use yew::prelude::*;

use crate::pages::admin::bookings::BookingManagement;
use crate::pages::admin::feedback::FeedbackManagement;
use crate::pages::admin::packages::PackageManagement;
use crate::pages::admin::playmates::PlaymateManagement;
use crate::pages::admin::slots::SlotManagement;
use crate::pages::admin::withdrawals::WithdrawalManagement;

pub mod bookings;
pub mod feedback;
pub mod packages;
pub mod playmates;
pub mod slots;
pub mod withdrawals;

#[derive(Clone, Copy, PartialEq, Debug)]
enum AdminSection {
    Bookings,
    Slots,
    Feedback,
    Packages,
    Playmates,
    Withdrawals,
}

impl AdminSection {
    const ALL: [AdminSection; 6] = [
        AdminSection::Bookings,
        AdminSection::Slots,
        AdminSection::Feedback,
        AdminSection::Packages,
        AdminSection::Playmates,
        AdminSection::Withdrawals,
    ];

    fn label(&self) -> &'static str {
        match self {
            AdminSection::Bookings => "📅 Bookings",
            AdminSection::Slots => "🗓 Court slots",
            AdminSection::Feedback => "⭐ Feedback",
            AdminSection::Packages => "🎾 Packages",
            AdminSection::Playmates => "👥 Playmates",
            AdminSection::Withdrawals => "💰 Withdrawals",
        }
    }
}

/// Management dashboard shell: one section visible at a time, switched by
/// tab state rather than URL.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let current_section = use_state(|| AdminSection::Bookings);

    let on_tab_click = {
        let current_section = current_section.clone();
        Callback::from(move |section: AdminSection| {
            current_section.set(section);
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="p-4 bg-white shadow-sm">
                <div class="container mx-auto">
                    <h1 class="text-xl font-medium">{"Management Dashboard"}</h1>
                    <p class="text-sm text-gray-500">{"Bookings, court slots, feedback, packages, playmates, and payouts"}</p>
                </div>
            </header>

            <main class="container mx-auto px-4 py-6">
                <div class="flex flex-wrap gap-2 mb-6">
                    {for AdminSection::ALL.iter().map(|section| {
                        let is_active = *current_section == *section;
                        let onclick = {
                            let on_tab_click = on_tab_click.clone();
                            let section = *section;
                            Callback::from(move |_: MouseEvent| on_tab_click.emit(section))
                        };
                        html! {
                            <button
                                onclick={onclick}
                                class={classes!(
                                    "px-4", "py-2", "text-sm", "rounded-lg", "border",
                                    if is_active {
                                        "bg-blue-600 text-white border-blue-600"
                                    } else {
                                        "bg-white text-gray-700 border-gray-300 hover:bg-gray-50"
                                    }
                                )}
                            >
                                {section.label()}
                            </button>
                        }
                    })}
                </div>

                {match *current_section {
                    AdminSection::Bookings => html! { <BookingManagement /> },
                    AdminSection::Slots => html! { <SlotManagement /> },
                    AdminSection::Feedback => html! { <FeedbackManagement /> },
                    AdminSection::Packages => html! { <PackageManagement /> },
                    AdminSection::Playmates => html! { <PlaymateManagement /> },
                    AdminSection::Withdrawals => html! { <WithdrawalManagement /> },
                }}
            </main>
        </div>
    }
}
