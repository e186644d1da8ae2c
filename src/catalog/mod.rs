//! Curated, read-only lookup tables for the cable corpus.
//!
//! Everything here is `const` data or derived once into a `LazyLock`; no
//! table is mutated after start-up.

pub mod acronyms;
pub mod corrections;
pub mod stations;
pub mod titles;
pub mod vocabulary;

/// Binary search in a `(key, value)` table sorted by key.
pub(crate) fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .binary_search_by(|(k, _)| (*k).cmp(key))
        .ok()
        .map(|i| table[i].1)
}

/// Panics in tests if a lookup table is not strictly sorted by key.
#[cfg(test)]
pub(crate) fn assert_sorted_keys(name: &str, table: &[(&str, &str)]) {
    for window in table.windows(2) {
        assert!(
            window[0].0 < window[1].0,
            "{name} not sorted: {:?} >= {:?}",
            window[0].0,
            window[1].0
        );
    }
}

/// Panics in tests if a word list is not strictly sorted.
#[cfg(test)]
pub(crate) fn assert_sorted(name: &str, list: &[&str]) {
    for window in list.windows(2) {
        assert!(
            window[0] < window[1],
            "{name} not sorted: {:?} >= {:?}",
            window[0],
            window[1]
        );
    }
}
