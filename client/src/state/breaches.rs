//! Breach viewer state: grouping, email join, and card expansion.
//!
//! SYSTEM CONTEXT
//! ==============
//! Breach records reference emails only by id. The viewer groups the flat
//! breach list by `email_id`, then joins against a second email fetch to
//! resolve display addresses.
//!
//! DESIGN
//! ======
//! Grouping is stable: groups appear in first-seen order and records keep the
//! server's order inside each group. Card expansion is a per-email boolean;
//! the chevron is derived from it rather than from animation events.

#[cfg(test)]
#[path = "breaches_test.rs"]
mod breaches_test;

use std::collections::{HashMap, HashSet};

use super::region::{Region, Tracked};
use crate::net::types::{BreachRecord, EmailRecord};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load breaches. Please try again.";
pub const NO_BREACHES_TITLE: &str = "Good news!";
pub const NO_BREACHES_MESSAGE: &str = "No security breaches found for your monitored email addresses.";
pub const EMAIL_LOOKUP_FAILED_MESSAGE: &str = "Failed to load email information";
pub const NO_DATA_CLASSES_MESSAGE: &str = "No data classification available";

/// All breaches recorded for one monitored email. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct BreachGroup {
    pub email_id: i64,
    pub breaches: Vec<BreachRecord>,
}

/// A group with its resolved display label, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledGroup {
    pub email_id: i64,
    pub label: String,
    pub breaches: Vec<BreachRecord>,
}

impl LabeledGroup {
    pub fn count_label(&self) -> String {
        breach_count_label(self.breaches.len())
    }
}

/// What the breach region currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum BreachView {
    /// No breaches at all; the positive empty state.
    NoBreaches,
    Grouped(Vec<LabeledGroup>),
}

/// Next step after the breach list arrives.
#[derive(Clone, Debug, PartialEq)]
pub enum BreachStep {
    /// Nothing to join; render [`BreachView::NoBreaches`] and stop.
    Done(BreachView),
    /// Fetch the email list to label these groups.
    ResolveEmails(Vec<BreachGroup>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BreachesState {
    pub view: Tracked<BreachView>,
    expanded: HashSet<i64>,
}

impl BreachesState {
    pub fn is_expanded(&self, email_id: i64) -> bool {
        self.expanded.contains(&email_id)
    }

    /// Flip one card and return its new expanded state. Other cards are untouched.
    pub fn toggle(&mut self, email_id: i64) -> bool {
        if self.expanded.remove(&email_id) {
            false
        } else {
            self.expanded.insert(email_id);
            true
        }
    }

    /// Apply a freshly rendered view; every card starts collapsed.
    pub fn settle(&mut self, ticket: u64, region: Region<BreachView>) -> bool {
        let applied = self.view.settle(ticket, region);
        if applied {
            self.expanded.clear();
        }
        applied
    }
}

/// Partition `records` by `email_id`, preserving first-seen group order and
/// in-group response order.
pub fn group_breaches(records: Vec<BreachRecord>) -> Vec<BreachGroup> {
    let mut groups: Vec<BreachGroup> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();
    for record in records {
        match index.get(&record.email_id) {
            Some(&slot) => groups[slot].breaches.push(record),
            None => {
                index.insert(record.email_id, groups.len());
                groups.push(BreachGroup { email_id: record.email_id, breaches: vec![record] });
            }
        }
    }
    groups
}

/// Decide whether the breach list needs an email join.
pub fn plan_breach_view(records: Vec<BreachRecord>) -> BreachStep {
    if records.is_empty() {
        return BreachStep::Done(BreachView::NoBreaches);
    }
    BreachStep::ResolveEmails(group_breaches(records))
}

/// Attach display labels to groups using the fetched email list.
pub fn label_groups(groups: Vec<BreachGroup>, emails: &[EmailRecord]) -> Vec<LabeledGroup> {
    let lookup: HashMap<i64, &str> = emails.iter().map(|e| (e.id, e.email.as_str())).collect();
    groups
        .into_iter()
        .map(|group| LabeledGroup {
            email_id: group.email_id,
            label: email_label(group.email_id, &lookup),
            breaches: group.breaches,
        })
        .collect()
}

/// Address for `email_id`, or `Email ID: <id>` when it is no longer listed.
pub fn email_label(email_id: i64, lookup: &HashMap<i64, &str>) -> String {
    lookup
        .get(&email_id)
        .map_or_else(|| format!("Email ID: {email_id}"), |address| (*address).to_owned())
}

/// "1 breach" / "N breaches".
pub fn breach_count_label(count: usize) -> String {
    if count == 1 { "1 breach".to_owned() } else { format!("{count} breaches") }
}

/// Chevron icon class for a card's expanded state.
pub fn chevron_class(expanded: bool) -> &'static str {
    if expanded { "bi-chevron-up" } else { "bi-chevron-down" }
}

pub fn verification_label(is_verified: bool) -> (&'static str, &'static str) {
    if is_verified { ("breach-verified", "Verified") } else { ("breach-unverified", "Unverified") }
}
