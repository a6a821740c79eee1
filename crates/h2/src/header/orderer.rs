//! Canonical ordering and lookup over decoded header sets.
//!
//! A multi-valued header may arrive as a single entry whose values are joined with NUL
//! bytes. [`sort_and_split`] turns that back into one entry per value and orders the
//! whole set by name, which is the form session code uses for pseudo-header extraction
//! and comparison. Lookups are linear scans; header sets are tens of entries.

use crate::protocol::{HeaderCollection, HeaderField};

const VALUE_SEPARATOR: u8 = b'\0';

/// Returns `raw` ordered by name, with NUL-joined values split into separate entries.
///
/// Names are compared byte-wise. The sort is unstable: entries with equal names may come
/// out in any relative order, except that the values split from one NUL-joined entry stay
/// adjacent and keep their left-to-right order. A value without NUL yields exactly one
/// entry; empty segments (`"a\0"`, `"\0b"`) are kept as empty values.
///
/// Every returned entry borrows from the same storage as `raw`.
///
/// # Example
///
/// ```
/// use micro_h2::header::sort_and_split;
/// use micro_h2::protocol::HeaderField;
///
/// let raw = [HeaderField::new(b"x", b"a\0b"), HeaderField::new(b"accept", b"*/*")];
/// let sorted = sort_and_split(&raw);
///
/// let names: Vec<_> = sorted.iter().map(|h| h.name()).collect();
/// assert_eq!(names, [&b"accept"[..], b"x", b"x"]);
/// ```
pub fn sort_and_split<'a>(raw: &[HeaderField<'a>]) -> HeaderCollection<'a> {
    let mut sorted = raw.to_vec();
    // splitting after the sort keeps the pieces of one value together no matter how the
    // unstable sort orders equal names
    sorted.sort_unstable_by(|a, b| a.name().cmp(b.name()));

    let mut split = Vec::with_capacity(sorted.len());
    for header in sorted {
        let name = header.name();
        split.extend(header.value().split(|&b| b == VALUE_SEPARATOR).map(|value| HeaderField::new(name, value)));
    }
    split
}

/// Returns the entry named `name` if it is the only one.
///
/// Duplicates are reported as absent, the same as a missing header.
pub fn find_unique<'h, 'a>(headers: &'h [HeaderField<'a>], name: &[u8]) -> Option<&'h HeaderField<'a>> {
    let mut found = find_all(headers, name);
    let first = found.next()?;
    found.next().is_none().then_some(first)
}

/// Returns the first entry named `name`, in the order of `headers`.
pub fn find_first<'h, 'a>(headers: &'h [HeaderField<'a>], name: &[u8]) -> Option<&'h HeaderField<'a>> {
    find_all(headers, name).next()
}

/// Iterates over every entry named `name`, in the order of `headers`.
pub fn find_all<'h, 'a, 'n>(headers: &'h [HeaderField<'a>], name: &'n [u8]) -> impl Iterator<Item = &'h HeaderField<'a>> + use<'h, 'a, 'n> {
    headers.iter().filter(move |header| header.name() == name)
}
