//! Kanban Board App
//!
//! Root component: loads board data once and renders the grouped columns.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{DisplayOptions, TicketColumn};
use crate::grouping::group_tickets;
use crate::store::{store_set_board_data, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // View preferences are restored from local storage before first render
    let store = Store::new(AppState::new());

    // Provide context to all children
    provide_context(store);

    // Load board data on mount; a failed fetch leaves both lists empty
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_board_data().await {
                Ok(data) => {
                    web_sys::console::log_1(
                        &format!(
                            "[BOARD] Loaded {} tickets, {} users",
                            data.tickets.len(),
                            data.users.len()
                        )
                        .into(),
                    );
                    store_set_board_data(&store, data.tickets, data.users);
                }
                Err(error) => {
                    web_sys::console::error_1(
                        &format!("[BOARD] Error fetching data: {}", error).into(),
                    );
                }
            }
        });
    });

    let loaded = move || !store.tickets().get().is_empty() && !store.users().get().is_empty();

    let grouped = Memo::new(move |_| {
        group_tickets(
            &store.tickets().get(),
            &store.users().get(),
            store.grouping().get(),
            store.sorting().get(),
        )
    });

    view! {
        <div class="kanban-board">
            <DisplayOptions />
            {move || if loaded() {
                let grouping = store.grouping().get();
                view! {
                    <div class="board">
                        {grouped
                            .get()
                            .into_iter()
                            .map(|group| view! { <TicketColumn group=group grouping=grouping /> })
                            .collect_view()}
                    </div>
                }.into_any()
            } else {
                view! { <div class="loading">"Loading..."</div> }.into_any()
            }}
        </div>
    }
}
