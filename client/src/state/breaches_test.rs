use super::*;

fn breach(email_id: i64, title: &str) -> BreachRecord {
    BreachRecord {
        email_id,
        title: Some(title.to_owned()),
        name: None,
        domain: None,
        breach_date: "2020-01-01".to_owned(),
        description: None,
        data_classes: None,
        is_verified: true,
    }
}

fn email(id: i64, address: &str) -> EmailRecord {
    EmailRecord { id, email: address.to_owned() }
}

// =============================================================
// Grouping
// =============================================================

#[test]
fn grouping_preserves_first_seen_key_order() {
    let groups = group_breaches(vec![breach(3, "a"), breach(1, "b"), breach(3, "c"), breach(2, "d")]);
    let keys: Vec<i64> = groups.iter().map(|g| g.email_id).collect();
    assert_eq!(keys, vec![3, 1, 2]);
}

#[test]
fn grouping_preserves_response_order_within_group() {
    let groups = group_breaches(vec![breach(5, "first"), breach(6, "x"), breach(5, "second"), breach(5, "third")]);
    let titles: Vec<&str> = groups[0].breaches.iter().map(BreachRecord::display_title).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[test]
fn grouping_is_a_partition_of_the_input() {
    let input = vec![breach(2, "a"), breach(1, "b"), breach(2, "c"), breach(9, "d"), breach(1, "e"), breach(2, "f")];
    let groups = group_breaches(input.clone());

    assert!(groups.iter().all(|g| !g.breaches.is_empty()));
    let total: usize = groups.iter().map(|g| g.breaches.len()).sum();
    assert_eq!(total, input.len());

    let mut regrouped: Vec<BreachRecord> = groups.into_iter().flat_map(|g| g.breaches).collect();
    let mut expected = input;
    let key = |b: &BreachRecord| (b.email_id, b.display_title().to_owned());
    regrouped.sort_by_key(key);
    expected.sort_by_key(key);
    assert_eq!(regrouped, expected);
}

#[test]
fn grouping_empty_input_yields_no_groups() {
    assert!(group_breaches(Vec::new()).is_empty());
}

// =============================================================
// Empty result short-circuit
// =============================================================

#[test]
fn zero_breaches_renders_success_without_email_lookup() {
    assert_eq!(plan_breach_view(Vec::new()), BreachStep::Done(BreachView::NoBreaches));
}

#[test]
fn breaches_require_email_lookup() {
    match plan_breach_view(vec![breach(1, "a")]) {
        BreachStep::ResolveEmails(groups) => assert_eq!(groups.len(), 1),
        BreachStep::Done(view) => panic!("unexpected terminal view: {view:?}"),
    }
}

// =============================================================
// Email join
// =============================================================

#[test]
fn known_email_ids_resolve_to_addresses() {
    let groups = group_breaches(vec![breach(1, "a")]);
    let labeled = label_groups(groups, &[email(1, "me@example.com")]);
    assert_eq!(labeled[0].label, "me@example.com");
}

#[test]
fn missing_email_id_uses_placeholder_label() {
    let groups = group_breaches(vec![breach(17, "a")]);
    let labeled = label_groups(groups, &[email(1, "me@example.com")]);
    assert_eq!(labeled[0].label, "Email ID: 17");
}

// =============================================================
// Presentation helpers
// =============================================================

#[test]
fn count_label_pluralizes() {
    assert_eq!(breach_count_label(1), "1 breach");
    assert_eq!(breach_count_label(2), "2 breaches");
    assert_eq!(breach_count_label(12), "12 breaches");
}

#[test]
fn labeled_group_count_matches_records() {
    let labeled = label_groups(group_breaches(vec![breach(1, "a")]), &[]);
    assert_eq!(labeled[0].count_label(), "1 breach");
}

#[test]
fn verification_badge_reflects_flag() {
    assert_eq!(verification_label(true), ("breach-verified", "Verified"));
    assert_eq!(verification_label(false), ("breach-unverified", "Unverified"));
}

// =============================================================
// Card expansion
// =============================================================

#[test]
fn toggling_twice_restores_chevron() {
    let mut state = BreachesState::default();
    let before = chevron_class(state.is_expanded(4));
    assert_eq!(before, "bi-chevron-down");

    assert!(state.toggle(4));
    assert_eq!(chevron_class(state.is_expanded(4)), "bi-chevron-up");

    assert!(!state.toggle(4));
    assert_eq!(chevron_class(state.is_expanded(4)), before);
}

#[test]
fn cards_toggle_independently() {
    let mut state = BreachesState::default();
    state.toggle(1);
    state.toggle(2);
    state.toggle(1);
    assert!(!state.is_expanded(1));
    assert!(state.is_expanded(2));
}

#[test]
fn fresh_render_collapses_all_cards() {
    let mut state = BreachesState::default();
    state.toggle(1);
    let ticket = state.view.begin();
    assert!(state.settle(ticket, Region::Ready(BreachView::NoBreaches)));
    assert!(!state.is_expanded(1));
}

#[test]
fn stale_render_keeps_expansion() {
    let mut state = BreachesState::default();
    let stale = state.view.begin();
    let _current = state.view.begin();
    state.toggle(1);
    assert!(!state.settle(stale, Region::Ready(BreachView::NoBreaches)));
    assert!(state.is_expanded(1));
}
