//! Display Options Component
//!
//! Header controls for grouping, sorting and panel visibility.

use leptos::prelude::*;

use crate::store::{
    store_set_grouping, store_set_sorting, store_toggle_display_options, use_app_store,
    AppStateStoreFields,
};
use crate::view_state::{Grouping, Sorting};

/// Grouping select options
const GROUPING_OPTIONS: &[(Grouping, &str)] = &[
    (Grouping::Status, "Group by Status"),
    (Grouping::User, "Group by User"),
    (Grouping::Priority, "Group by Priority"),
];

/// Sorting select options
const SORTING_OPTIONS: &[(Sorting, &str)] = &[
    (Sorting::Priority, "Sort by Priority"),
    (Sorting::Title, "Sort by Title"),
];

/// Header panel: a toggle button, plus grouping/sorting selects when open.
///
/// All input routes through the store mutation entry points, which persist
/// the choice before the next render.
#[component]
pub fn DisplayOptions() -> impl IntoView {
    let store = use_app_store();

    let on_grouping_change = move |ev: web_sys::Event| {
        if let Some(grouping) = Grouping::from_value(&event_target_value(&ev)) {
            store_set_grouping(&store, grouping);
        }
    };

    let on_sorting_change = move |ev: web_sys::Event| {
        if let Some(sorting) = Sorting::from_value(&event_target_value(&ev)) {
            store_set_sorting(&store, sorting);
        }
    };

    view! {
        <div class="header">
            {move || if store.display_options_visible().get() {
                view! {
                    <div class="display-options">
                        <button on:click=move |_| store_toggle_display_options(&store)>
                            "Close Options"
                        </button>
                        <select on:change=on_grouping_change>
                            {GROUPING_OPTIONS.iter().map(|(option, label)| {
                                let option = *option;
                                view! {
                                    <option
                                        value=option.as_str()
                                        selected=move || store.grouping().get() == option
                                    >
                                        {*label}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                        <select on:change=on_sorting_change>
                            {SORTING_OPTIONS.iter().map(|(option, label)| {
                                let option = *option;
                                view! {
                                    <option
                                        value=option.as_str()
                                        selected=move || store.sorting().get() == option
                                    >
                                        {*label}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                }.into_any()
            } else {
                view! {
                    <button on:click=move |_| store_toggle_display_options(&store)>
                        "Display Options"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
