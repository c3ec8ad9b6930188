//! UI Components
//!
//! Board-specific Leptos components.

mod display_options;
mod ticket_card;
mod ticket_column;

pub use display_options::DisplayOptions;
pub use ticket_card::TicketCard;
pub use ticket_column::TicketColumn;
