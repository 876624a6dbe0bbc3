//! Ordinal, case-insensitive string comparison.
//!
//! Comparison is per Unicode scalar value after a one-to-one case mapping; it is
//! not locale-aware. A char whose case mapping expands to several chars (`ß`
//! upper-cases to `SS`) is kept as is, so `ß` and `ss` never compare equal.
//! Equality and hashing fold to lower case so that `eq_ignore_case(a, b)`
//! implies equal hashes. Ordering folds to upper case, which places punctuation
//! between `Z` and `a` (e.g. `_`) after letters.

use core::cmp::Ordering;
use core::hash::Hasher;

fn single<I: Iterator<Item = char>>(original: char, mut mapped: I) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => c,
        _ => original,
    }
}

fn fold_lower(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().map(|c| single(c, c.to_lowercase()))
}

fn fold_upper(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().map(|c| single(c, c.to_uppercase()))
}

/// Case-insensitive equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    fold_lower(a).eq(fold_lower(b))
}

/// Feed the lower-cased form of `s` into `state`, followed by a terminator so
/// that consecutive fields cannot run together (`("ab", "c")` vs `("a", "bc")`).
pub fn hash_ignore_case<H: Hasher>(s: &str, state: &mut H) {
    for c in fold_lower(s) {
        state.write_u32(c as u32);
    }
    state.write_u8(0xff);
}

/// Case-insensitive ordinal ordering.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    fold_upper(a).cmp(fold_upper(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;

    fn hash_of(s: &str) -> u64 {
        let mut h = DefaultHasher::new();
        hash_ignore_case(s, &mut h);
        h.finish()
    }

    #[test]
    fn ascii_case_variants_are_equal() {
        assert!(eq_ignore_case("Flour", "fLOUR"));
        assert!(!eq_ignore_case("Flour", "Flours"));
        assert!(eq_ignore_case("", ""));
    }

    #[test]
    fn non_ascii_case_variants_are_equal() {
        assert!(eq_ignore_case("Crème Fraîche", "CRÈME FRAÎCHE"));
        assert_eq!(hash_of("Crème"), hash_of("CRÈME"));
    }

    #[test]
    fn ordering_is_case_insensitive() {
        assert_eq!(cmp_ignore_case("apple pie", "Banana Bread"), Ordering::Less);
        assert_eq!(cmp_ignore_case("APPLE", "apple"), Ordering::Equal);
        assert_eq!(cmp_ignore_case("b", "A"), Ordering::Greater);
    }

    #[test]
    fn expanding_case_mappings_are_not_folded() {
        assert!(!eq_ignore_case("ß", "ss"));
        assert_ne!(cmp_ignore_case("ß", "ss"), Ordering::Equal);
        assert_ne!(cmp_ignore_case("straße", "STRASSE"), Ordering::Equal);
        assert!(eq_ignore_case("Straße", "STRAßE"));
        assert_eq!(cmp_ignore_case("Straße", "STRAßE"), Ordering::Equal);
    }

    #[test]
    fn ordering_places_underscore_after_letters() {
        assert_eq!(cmp_ignore_case("a_", "az"), Ordering::Greater);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a string and its upper/lower-cased forms are equal and hash identically.
        #[test]
        fn case_variants_hash_identically(s in "[A-Za-z0-9 ]{0,24}") {
            let upper = s.to_uppercase();
            let lower = s.to_lowercase();
            prop_assert!(eq_ignore_case(&s, &upper));
            prop_assert!(eq_ignore_case(&s, &lower));
            prop_assert_eq!(hash_of(&s), hash_of(&upper));
            prop_assert_eq!(hash_of(&s), hash_of(&lower));
            prop_assert_eq!(cmp_ignore_case(&s, &upper), Ordering::Equal);
        }
    }
}
