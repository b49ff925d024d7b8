//! Client-side list view: search, dropdown choices, and pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every table page fetches its whole collection once and then narrows it in
//! memory. Pages keep a [`Pager`] plus a filter struct in signals; any filter
//! change resets the pager to page 1, and exports read the filtered list
//! rather than the visible slice.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::collections::BTreeSet;
use std::ops::Range;

pub const USER_PAGE_SIZES: [usize; 4] = [5, 10, 20, 50];
pub const JOB_PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];
pub const SERVICE_PAGE_SIZE: usize = 10;

/// Current page (1-based) and page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub per_page: usize,
}

impl Pager {
    pub fn new(per_page: usize) -> Self {
        Self { page: 1, per_page: per_page.max(1) }
    }

    /// `ceil(len / per_page)`; zero for an empty list.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.per_page.max(1))
    }

    /// Controls are only worth showing with more than one page.
    pub fn has_controls(&self, len: usize) -> bool {
        self.total_pages(len) > 1
    }

    /// The page actually displayed, pulled back inside `1..=total_pages`.
    pub fn effective_page(&self, len: usize) -> usize {
        self.page.clamp(1, self.total_pages(len).max(1))
    }

    /// Index range of the displayed page within a list of `len` items.
    pub fn range(&self, len: usize) -> Range<usize> {
        let per_page = self.per_page.max(1);
        let start = ((self.effective_page(len) - 1) * per_page).min(len);
        let end = (start + per_page).min(len);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize, len: usize) {
        self.page = page.clamp(1, self.total_pages(len).max(1));
    }

    pub fn next(&mut self, len: usize) {
        self.go_to(self.effective_page(len) + 1, len);
    }

    pub fn prev(&mut self, len: usize) {
        self.go_to(self.effective_page(len).saturating_sub(1), len);
    }

    pub fn can_next(&self, len: usize) -> bool {
        self.effective_page(len) < self.total_pages(len)
    }

    pub fn can_prev(&self, len: usize) -> bool {
        self.effective_page(len) > 1
    }
}

/// Case-insensitive substring match of `term` against any haystack.
/// A blank term matches everything.
pub fn matches_search<'a, I>(term: &str, haystacks: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .into_iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

/// Dropdown selection: everything, or one exact value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    /// `<select>` value `"all"` (or empty) means no filtering.
    pub fn from_select(value: &str) -> Self {
        match value {
            "" | "all" => Self::All,
            other => Self::Only(other.to_owned()),
        }
    }

    pub fn select_value(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(value) => value,
        }
    }

    /// Exact match after trimming `value`, since dropdown options are
    /// built trimmed by [`distinct_sorted`].
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value.trim(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Distinct non-blank values in sorted order, for filter dropdowns.
pub fn distinct_sorted<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().trim().to_owned())
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Replace the item with the same key, or append it when new.
pub fn upsert_by<T, F>(items: &mut Vec<T>, item: T, key: F)
where
    F: Fn(&T) -> &str,
{
    match items.iter().position(|existing| key(existing) == key(&item)) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}

/// Drop every item whose key is `id`. Returns whether anything was removed.
pub fn remove_by<T, F>(items: &mut Vec<T>, id: &str, key: F) -> bool
where
    F: Fn(&T) -> &str,
{
    let before = items.len();
    items.retain(|item| key(item) != id);
    items.len() != before
}
