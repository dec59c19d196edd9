//! Client-side ordering of directory listings.
//!
//! The default order puts directories first, then compares names the way a
//! person reads them: case- and accent-insensitive, with digit runs compared
//! by numeric value (`file2` before `file10`).

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::models::{Entry, SortDirection, SortField, SortState};

/// Fold a name to its comparison form: NFD, marks dropped, lowercase.
fn fold(s: &str) -> Vec<char> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two digit runs by value without parsing (runs may be huge).
fn cmp_digit_runs(a: &[char], b: &[char]) -> Ordering {
    let strip = |run: &[char]| -> usize { run.iter().take_while(|c| **c == '0').count() };
    let a = &a[strip(a)..];
    let b = &b[strip(b)..];
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Numeric-aware, case-insensitive string comparison.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = fold(a);
    let b = fold(b);
    let (mut i, mut j) = (0, 0);

    loop {
        match (a.get(i), b.get(j)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) if ca.is_ascii_digit() && cb.is_ascii_digit() => {
                let start_a = i;
                while a.get(i).is_some_and(char::is_ascii_digit) {
                    i += 1;
                }
                let start_b = j;
                while b.get(j).is_some_and(char::is_ascii_digit) {
                    j += 1;
                }
                let ord = cmp_digit_runs(&a[start_a..i], &b[start_b..j]);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(ca), Some(cb)) => {
                if ca != cb {
                    return ca.cmp(cb);
                }
                i += 1;
                j += 1;
            }
        }
    }
}

/// Default order: directories first, then natural order by name.
///
/// A directory's trailing `/` is not part of the comparison, so `a/` and
/// `a-b/` order the same way `a` and `a-b` would.
pub fn default_name_order(a: &Entry, b: &Entry) -> Ordering {
    match (a.is_dir(), b.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => natural_cmp(
            a.name.strip_suffix('/').unwrap_or(&a.name),
            b.name.strip_suffix('/').unwrap_or(&b.name),
        ),
        (false, false) => natural_cmp(&a.name, &b.name),
    }
}

/// Comparator for the active sort state.
///
/// Missing sizes and timestamps (directories) count as zero.
pub fn compare(sort: SortState, a: &Entry, b: &Entry) -> Ordering {
    let (Some(field), Some(direction)) = (sort.field, sort.direction) else {
        return default_name_order(a, b);
    };

    let ord = match field {
        SortField::Name => default_name_order(a, b),
        SortField::Size => a.size.unwrap_or(0).cmp(&b.size.unwrap_or(0)),
        SortField::LastModified => a
            .last_modified
            .unwrap_or(0)
            .cmp(&b.last_modified.unwrap_or(0)),
    };

    match direction {
        SortDirection::Ascend => ord,
        SortDirection::Descend => ord.reverse(),
    }
}

/// Rows to display: the parent entry, then the sorted listing.
///
/// Nothing (not even the parent row) is shown before the first listing
/// arrives. The sort is stable, so ties keep the backend's order.
pub fn display_rows(files: Option<&[Entry]>, sort: SortState) -> Vec<Entry> {
    let Some(files) = files else {
        return Vec::new();
    };

    let mut sorted = files.to_vec();
    sorted.sort_by(|a, b| compare(sort, a, b));

    let mut rows = Vec::with_capacity(sorted.len() + 1);
    rows.push(Entry::parent());
    rows.extend(sorted);
    rows
}
