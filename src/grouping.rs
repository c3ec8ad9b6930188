//! Grouping Engine
//!
//! Pure grouping/sorting over the loaded ticket list.

use std::collections::HashMap;

use unicase::UniCase;

use crate::models::{Ticket, User};
use crate::view_state::{Grouping, Sorting};

/// Label used when a ticket references a user that is not in the list
pub const UNKNOWN_USER: &str = "Unknown User";

/// One board column: a group label and its tickets in display order
#[derive(Debug, Clone, PartialEq)]
pub struct TicketGroup {
    pub label: String,
    pub tickets: Vec<Ticket>,
}

/// Display name for a ticket's assignee; unknown ids get a fixed placeholder
pub fn user_display_name(users: &[User], user_id: &str) -> String {
    users
        .iter()
        .find(|user| user.id == user_id)
        .map(|user| user.name.clone())
        .unwrap_or_else(|| UNKNOWN_USER.to_string())
}

fn group_label(ticket: &Ticket, users: &[User], grouping: Grouping) -> String {
    match grouping {
        Grouping::Status => ticket.status.clone(),
        Grouping::User => user_display_name(users, &ticket.user_id),
        Grouping::Priority => ticket.priority.to_string(),
    }
}

/// Partition tickets into columns and order each column's contents.
///
/// Columns appear in first-encounter order over the ticket list. Priority
/// sorting is descending and stable (ties keep their prior relative order);
/// title sorting is case-insensitive ascending, raw title as tiebreaker.
pub fn group_tickets(
    tickets: &[Ticket],
    users: &[User],
    grouping: Grouping,
    sorting: Sorting,
) -> Vec<TicketGroup> {
    let mut groups: Vec<TicketGroup> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for ticket in tickets {
        let label = group_label(ticket, users, grouping);
        let slot = match slots.get(&label) {
            Some(&slot) => slot,
            None => {
                slots.insert(label.clone(), groups.len());
                groups.push(TicketGroup {
                    label,
                    tickets: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[slot].tickets.push(ticket.clone());
    }

    for group in &mut groups {
        match sorting {
            Sorting::Priority => {
                group.tickets.sort_by(|a, b| b.priority.cmp(&a.priority));
            }
            Sorting::Title => {
                group.tickets.sort_by(|a, b| {
                    UniCase::new(a.title.as_str())
                        .cmp(&UniCase::new(b.title.as_str()))
                        .then_with(|| a.title.cmp(&b.title))
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_ticket(id: &str, title: &str, status: &str, priority: i32, user_id: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: title.to_string(),
            status: status.to_string(),
            priority,
            tag: vec!["Feature Request".to_string()],
            user_id: user_id.to_string(),
        }
    }

    fn make_user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn sample_users() -> Vec<User> {
        vec![make_user("usr-1", "Alice"), make_user("usr-2", "Bob")]
    }

    #[test]
    fn groups_by_status_and_sorts_by_priority() {
        let tickets = vec![
            make_ticket("1", "B", "Todo", 2, "usr-1"),
            make_ticket("2", "A", "Todo", 5, "usr-2"),
        ];
        let groups = group_tickets(&tickets, &sample_users(), Grouping::Status, Sorting::Priority);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "Todo");
        let ids: Vec<&str> = groups[0].tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn groups_by_user_resolves_names() {
        let tickets = vec![
            make_ticket("1", "B", "Todo", 2, "usr-1"),
            make_ticket("2", "A", "Todo", 5, "usr-2"),
        ];
        let groups = group_tickets(&tickets, &sample_users(), Grouping::User, Sorting::Priority);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Alice");
        assert_eq!(groups[0].tickets[0].id, "1");
        assert_eq!(groups[1].label, "Bob");
        assert_eq!(groups[1].tickets[0].id, "2");
    }

    #[test]
    fn unknown_assignee_gets_placeholder() {
        let tickets = vec![make_ticket("1", "A", "Todo", 1, "usr-9")];
        let groups = group_tickets(&tickets, &sample_users(), Grouping::User, Sorting::Priority);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, UNKNOWN_USER);
    }

    #[test]
    fn groups_by_priority_uses_numeric_labels() {
        let tickets = vec![
            make_ticket("1", "A", "Todo", 4, "usr-1"),
            make_ticket("2", "B", "Done", 0, "usr-1"),
            make_ticket("3", "C", "Todo", 4, "usr-2"),
        ];
        let groups = group_tickets(&tickets, &sample_users(), Grouping::Priority, Sorting::Title);

        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["4", "0"]);
        assert_eq!(groups[0].tickets.len(), 2);
    }

    #[test]
    fn no_ticket_lost_or_duplicated() {
        let tickets = vec![
            make_ticket("1", "D", "Todo", 1, "usr-1"),
            make_ticket("2", "C", "In progress", 3, "usr-2"),
            make_ticket("3", "B", "Todo", 3, "usr-9"),
            make_ticket("4", "A", "Done", 0, "usr-2"),
        ];
        for grouping in [Grouping::Status, Grouping::User, Grouping::Priority] {
            let groups = group_tickets(&tickets, &sample_users(), grouping, Sorting::Title);
            let mut ids: Vec<&str> = groups
                .iter()
                .flat_map(|g| g.tickets.iter().map(|t| t.id.as_str()))
                .collect();
            ids.sort();
            assert_eq!(ids, vec!["1", "2", "3", "4"]);
        }
    }

    #[test]
    fn priority_sort_is_stable_and_non_increasing() {
        let tickets = vec![
            make_ticket("1", "first", "Todo", 3, "usr-1"),
            make_ticket("2", "second", "Todo", 5, "usr-1"),
            make_ticket("3", "third", "Todo", 3, "usr-1"),
            make_ticket("4", "fourth", "Todo", 3, "usr-1"),
        ];
        let groups = group_tickets(&tickets, &sample_users(), Grouping::Status, Sorting::Priority);

        let ids: Vec<&str> = groups[0].tickets.iter().map(|t| t.id.as_str()).collect();
        // equal priorities keep their original relative order
        assert_eq!(ids, vec!["2", "1", "3", "4"]);
        for pair in groups[0].tickets.windows(2) {
            assert!(pair[0].priority >= pair[1].priority);
        }
    }

    #[test]
    fn title_sort_is_case_insensitive_ascending() {
        let tickets = vec![
            make_ticket("1", "banana", "Todo", 1, "usr-1"),
            make_ticket("2", "Apple", "Todo", 1, "usr-1"),
            make_ticket("3", "cherry", "Todo", 1, "usr-1"),
        ];
        let groups = group_tickets(&tickets, &sample_users(), Grouping::Status, Sorting::Title);

        let titles: Vec<&str> = groups[0].tickets.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn bucket_order_follows_first_encounter() {
        let tickets = vec![
            make_ticket("1", "A", "In progress", 1, "usr-1"),
            make_ticket("2", "B", "Todo", 1, "usr-1"),
            make_ticket("3", "C", "In progress", 1, "usr-1"),
            make_ticket("4", "D", "Done", 1, "usr-1"),
        ];
        let groups = group_tickets(&tickets, &sample_users(), Grouping::Status, Sorting::Priority);

        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["In progress", "Todo", "Done"]);
    }

    #[test]
    fn grouping_is_idempotent() {
        let tickets = vec![
            make_ticket("1", "B", "Todo", 2, "usr-1"),
            make_ticket("2", "A", "Done", 5, "usr-2"),
        ];
        let users = sample_users();
        let first = group_tickets(&tickets, &users, Grouping::User, Sorting::Title);
        let second = group_tickets(&tickets, &users, Grouping::User, Sorting::Title);
        assert_eq!(first, second);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let tickets = vec![
            make_ticket("1", "B", "Todo", 2, "usr-1"),
            make_ticket("2", "A", "Todo", 5, "usr-2"),
        ];
        let users = sample_users();
        let before = tickets.clone();
        let _ = group_tickets(&tickets, &users, Grouping::Status, Sorting::Priority);
        assert_eq!(tickets, before);
    }

    #[test]
    fn empty_ticket_list_yields_no_groups() {
        let groups = group_tickets(&[], &sample_users(), Grouping::Status, Sorting::Priority);
        assert!(groups.is_empty());
    }
}
