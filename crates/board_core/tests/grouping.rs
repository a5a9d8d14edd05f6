use board_core::{
    group_and_sort, GroupMode, SortMode, Ticket, UNSPECIFIED_GROUP_KEY,
};

fn ticket(id: &str, title: &str, status: &str, user: &str, priority: i64) -> Ticket {
    Ticket {
        id: id.to_string(),
        title: title.to_string(),
        status: Some(status.to_string()),
        user: Some(user.to_string()),
        priority: Some(priority),
    }
}

fn sample_pair() -> Vec<Ticket> {
    vec![
        ticket("1", "B", "Open", "alice", 2),
        ticket("2", "A", "Open", "bob", 4),
    ]
}

#[test]
fn groups_by_status_and_sorts_by_priority_descending() {
    let board = group_and_sort(&sample_pair(), GroupMode::Status, SortMode::Priority);

    assert_eq!(board.groups.len(), 1);
    let open = &board.groups[0];
    assert_eq!(open.key, "Open");
    assert_eq!(open.tickets[0].id, "2"); // priority 4 before 2
    assert_eq!(open.tickets[1].id, "1");
}

#[test]
fn groups_by_user_and_sorts_by_title() {
    let board = group_and_sort(&sample_pair(), GroupMode::User, SortMode::Title);

    assert_eq!(board.groups.len(), 2);
    assert_eq!(board.groups[0].key, "alice");
    assert_eq!(board.groups[0].tickets[0].id, "1");
    assert_eq!(board.groups[1].key, "bob");
    assert_eq!(board.groups[1].tickets[0].id, "2");
}

#[test]
fn empty_input_yields_empty_board() {
    let board = group_and_sort(&[], GroupMode::Status, SortMode::Priority);
    assert!(board.groups.is_empty());
}

#[test]
fn partition_preserves_every_ticket_exactly_once() {
    let tickets = vec![
        ticket("1", "Fix login", "Open", "alice", 3),
        ticket("2", "Ship docs", "Done", "bob", 1),
        ticket("3", "Patch CVE", "Open", "carol", 4),
        ticket("4", "Tune cache", "Backlog", "alice", 0),
        ticket("5", "Retry queue", "Done", "bob", 2),
    ];

    for group_by in [GroupMode::Status, GroupMode::User, GroupMode::Priority] {
        for sort_by in [SortMode::Priority, SortMode::Title] {
            let board = group_and_sort(&tickets, group_by, sort_by);
            let mut seen: Vec<String> = board
                .groups
                .iter()
                .flat_map(|g| g.tickets.iter().map(|t| t.id.clone()))
                .collect();
            seen.sort();
            assert_eq!(seen, vec!["1", "2", "3", "4", "5"]);
            assert!(board.groups.iter().all(|g| !g.tickets.is_empty()));
        }
    }
}

#[test]
fn group_keys_keep_first_seen_order() {
    let tickets = vec![
        ticket("1", "a", "Review", "x", 0),
        ticket("2", "b", "Open", "x", 0),
        ticket("3", "c", "Review", "x", 0),
        ticket("4", "d", "Done", "x", 0),
    ];

    let board = group_and_sort(&tickets, GroupMode::Status, SortMode::Priority);
    let keys: Vec<&str> = board.groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["Review", "Open", "Done"]);
}

#[test]
fn priority_sort_is_stable_on_ties() {
    let tickets = vec![
        ticket("first", "m", "Open", "x", 2),
        ticket("second", "k", "Open", "x", 2),
        ticket("third", "z", "Open", "x", 2),
    ];

    let board = group_and_sort(&tickets, GroupMode::Status, SortMode::Priority);
    let ids: Vec<&str> = board.groups[0]
        .tickets
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[test]
fn priority_sort_is_non_increasing() {
    let tickets = vec![
        ticket("1", "a", "Open", "x", 1),
        ticket("2", "b", "Open", "x", 4),
        ticket("3", "c", "Open", "x", 0),
        ticket("4", "d", "Open", "x", 3),
    ];

    let board = group_and_sort(&tickets, GroupMode::Status, SortMode::Priority);
    let priorities: Vec<i64> = board.groups[0]
        .tickets
        .iter()
        .map(|t| t.priority.unwrap())
        .collect();
    assert_eq!(priorities, vec![4, 3, 1, 0]);
}

#[test]
fn title_sort_is_case_insensitive_and_non_decreasing() {
    let tickets = vec![
        ticket("1", "banana", "Open", "x", 0),
        ticket("2", "Apple", "Open", "x", 0),
        ticket("3", "cherry", "Open", "x", 0),
    ];

    let board = group_and_sort(&tickets, GroupMode::Status, SortMode::Title);
    let titles: Vec<&str> = board.groups[0]
        .tickets
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Apple", "banana", "cherry"]);
}

#[test]
fn missing_attribute_groups_under_sentinel_key() {
    let mut unassigned = ticket("1", "a", "Open", "x", 0);
    unassigned.user = None;
    let tickets = vec![unassigned, ticket("2", "b", "Open", "bob", 1)];

    let board = group_and_sort(&tickets, GroupMode::User, SortMode::Priority);
    let keys: Vec<&str> = board.groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec![UNSPECIFIED_GROUP_KEY, "bob"]);
}

#[test]
fn missing_priority_sorts_last_under_priority_sort() {
    let mut unprioritized = ticket("low", "a", "Open", "x", 0);
    unprioritized.priority = None;
    let tickets = vec![unprioritized, ticket("high", "b", "Open", "x", 0)];

    let board = group_and_sort(&tickets, GroupMode::Status, SortMode::Priority);
    let ids: Vec<&str> = board.groups[0]
        .tickets
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["high", "low"]);
}

#[test]
fn out_of_scale_priorities_sort_numerically() {
    let tickets = vec![
        ticket("1", "a", "Open", "x", 4),
        ticket("2", "b", "Open", "x", 9),
        ticket("3", "c", "Open", "x", -1),
    ];

    let board = group_and_sort(&tickets, GroupMode::Status, SortMode::Priority);
    let ids: Vec<&str> = board.groups[0]
        .tickets
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["2", "1", "3"]);
}

#[test]
fn grouping_by_priority_uses_decimal_keys() {
    let tickets = vec![
        ticket("1", "a", "Open", "x", 4),
        ticket("2", "b", "Done", "y", 0),
        ticket("3", "c", "Open", "z", 4),
    ];

    let board = group_and_sort(&tickets, GroupMode::Priority, SortMode::Title);
    let keys: Vec<&str> = board.groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["4", "0"]);
    assert_eq!(board.groups[0].tickets.len(), 2);
}

#[test]
fn compute_is_idempotent_and_leaves_input_untouched() {
    let tickets = sample_pair();
    let before = tickets.clone();

    let first = group_and_sort(&tickets, GroupMode::Status, SortMode::Priority);
    let second = group_and_sort(&tickets, GroupMode::Status, SortMode::Priority);

    assert_eq!(first, second);
    assert_eq!(tickets, before);
}
