//! Ticket Column Component
//!
//! One labeled group of tickets on the board.

use leptos::prelude::*;

use crate::components::TicketCard;
use crate::grouping::TicketGroup;
use crate::view_state::Grouping;

/// Labeled column rendering its tickets in engine-provided order
#[component]
pub fn TicketColumn(group: TicketGroup, grouping: Grouping) -> impl IntoView {
    let heading = if grouping == Grouping::User {
        format!("Assigned to: {}", group.label)
    } else {
        group.label.clone()
    };

    view! {
        <div class="ticket-group">
            <h2 class="ticket-group-title">{heading}</h2>
            <ul class="ticket-list">
                {group
                    .tickets
                    .into_iter()
                    .map(|ticket| view! { <TicketCard ticket=ticket /> })
                    .collect_view()}
            </ul>
        </div>
    }
}
