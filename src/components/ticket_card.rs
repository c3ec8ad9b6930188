//! Ticket Card Component
//!
//! Single ticket rendered inside a column.

use leptos::prelude::*;

use crate::models::Ticket;

/// One ticket: title, id, tag list and priority, with a status-derived class
#[component]
pub fn TicketCard(ticket: Ticket) -> impl IntoView {
    let container_class = format!("ticket-container {}", ticket.status.to_lowercase());
    let tags = ticket.tag.join(", ");

    view! {
        <li class="ticket">
            <div class=container_class>
                <h3 class="ticket-title">{ticket.title}</h3>
                <div class="ticket-content">
                    <div class="ticket-details">
                        <span class="ticket-tag">"Tag: " {tags}</span>
                        <span class="ticket-id">"ID: " {ticket.id}</span>
                        <span class="ticket-priority">"Priority: " {ticket.priority}</span>
                    </div>
                </div>
            </div>
        </li>
    }
}
