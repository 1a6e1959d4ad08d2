//! Search filtering and ordering for the intern directory.
//!
//! [`render`] is a pure function of its inputs and is re-run from scratch on
//! every change to the query or the sort state. Ordering relies on a stable
//! sort so records that compare equal keep their roster order.
//!
//! Text keys compare by Unicode code point (`str::cmp`), which is
//! case-sensitive: `"Zoe" < "alex"`. Start dates compare chronologically.

use std::cmp::Ordering;

use super::InternRecord;

/// Field the directory is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Name,
    Department,
    StartDate,
}

impl SortKey {
    /// Every key, in the order the sort controls are drawn.
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Department, SortKey::StartDate];

    /// Caption shown on the sort control.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Department => "Department",
            SortKey::StartDate => "Start Date",
        }
    }
}

/// Order applied on top of the key comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Active sort key and direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    /// Apply a click on a sort control.
    ///
    /// Re-selecting the active key flips the direction; a different key
    /// becomes active in ascending order.
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Case-insensitive substring match against name, department or role.
///
/// An empty query matches every record.
pub fn matches_query(record: &InternRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [&record.name, &record.department, &record.role]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keep the records matching `query`, in roster order.
pub fn filter<'a>(roster: &'a [InternRecord], query: &str) -> Vec<&'a InternRecord> {
    roster
        .iter()
        .filter(|record| matches_query(record, query))
        .collect()
}

/// Stable in-place sort by `key` in `direction`.
pub fn sort(records: &mut [&InternRecord], key: SortKey, direction: SortDirection) {
    records.sort_by(|a, b| direction.apply(compare_by(a, b, key)));
}

/// Filter then order the roster for display.
pub fn render<'a>(
    roster: &'a [InternRecord],
    query: &str,
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a InternRecord> {
    let mut visible = filter(roster, query);
    sort(&mut visible, key, direction);
    visible
}

fn compare_by(a: &InternRecord, b: &InternRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Department => a.department.cmp(&b.department),
        SortKey::StartDate => a.start_date.cmp(&b.start_date),
    }
}
