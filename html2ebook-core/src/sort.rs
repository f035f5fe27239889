//! Page ordering: numeric-named pages after non-numeric ones
//!
//! Pages whose base name (before the first `.`) is all digits sort ascending
//! by integer value and go last; everything else sorts lexicographically by
//! full relative file name and goes first.

use crate::types::Page;

/// Reorder the collected pages in place. Only reorders, never creates or
/// destroys entries; stable within ties.
pub fn sort_pages(pages: &mut Vec<Page>) {
    let (mut numeric, mut non_numeric): (Vec<Page>, Vec<Page>) = pages
        .drain(..)
        .partition(|p| is_numeric(stem(&p.file_name)));

    non_numeric.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    numeric.sort_by(|a, b| numeric_key(stem(&a.file_name)).cmp(&numeric_key(stem(&b.file_name))));

    pages.extend(non_numeric);
    pages.extend(numeric);
}

/// Base name of a relative path, up to the first `.`.
fn stem(file_name: &str) -> &str {
    let base = file_name.rsplit('/').next().unwrap_or(file_name);
    base.split('.').next().unwrap_or(base)
}

fn is_numeric(stem: &str) -> bool {
    !stem.is_empty() && stem.bytes().all(|b| b.is_ascii_digit())
}

/// Integer ordering for digit strings of any length: strip leading zeros,
/// then compare by (length, digits).
fn numeric_key(stem: &str) -> (usize, &str) {
    let digits = stem.trim_start_matches('0');
    (digits.len(), digits)
}
