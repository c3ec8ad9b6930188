//! Board State Store
//!
//! Reactive application state plus the view-preference mutation entry points.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Ticket, User};
use crate::view_state::{self, Grouping, Sorting, ViewState};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tickets from the last successful fetch
    pub tickets: Vec<Ticket>,
    /// Users from the last successful fetch
    pub users: Vec<User>,
    /// Active partition key
    pub grouping: Grouping,
    /// Active within-column ordering
    pub sorting: Sorting,
    /// Whether the display options panel is open
    pub display_options_visible: bool,
}

impl AppState {
    /// Fresh state with view preferences restored from local storage
    pub fn new() -> Self {
        let restored = view_state::load();
        Self {
            grouping: restored.grouping,
            sorting: restored.sorting,
            display_options_visible: restored.display_options_visible,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

fn persist_view_state(store: &AppStore) {
    view_state::save(&ViewState {
        grouping: store.grouping().get(),
        sorting: store.sorting().get(),
        display_options_visible: store.display_options_visible().get(),
    });
}

/// Replace both lists from a fetched payload; both land in the same tick
pub fn store_set_board_data(store: &AppStore, tickets: Vec<Ticket>, users: Vec<User>) {
    store.tickets().set(tickets);
    store.users().set(users);
}

/// Switch the partition key and persist the choice
pub fn store_set_grouping(store: &AppStore, grouping: Grouping) {
    store.grouping().set(grouping);
    persist_view_state(store);
}

/// Switch the ordering rule and persist the choice
pub fn store_set_sorting(store: &AppStore, sorting: Sorting) {
    store.sorting().set(sorting);
    persist_view_state(store);
}

/// Flip the options panel open/closed and persist the choice
pub fn store_toggle_display_options(store: &AppStore) {
    let visible = store.display_options_visible().get();
    store.display_options_visible().set(!visible);
    persist_view_state(store);
}
