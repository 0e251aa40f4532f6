//! Tests for encoding constants and seeded random sources

#[cfg(test)]
mod tests {
    use archpatterns::support::configuration::{
        DECISION_SEPARATOR, DEFAULT_SEED, MAX_MATRIX_CELLS, SELECTED_CHAR, UNSELECTED_CHAR,
        seeded_rng,
    };
    use rand::Rng;

    // Tests equal seeds produce identical streams
    // Verified by seeding from entropy instead of the argument
    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut first = seeded_rng(DEFAULT_SEED);
        let mut second = seeded_rng(DEFAULT_SEED);

        let a: Vec<u64> = (0..16).map(|_| first.random()).collect();
        let b: Vec<u64> = (0..16).map(|_| second.random()).collect();
        assert_eq!(a, b);
    }

    // Tests different seeds diverge
    #[test]
    fn test_seeded_rng_differs_across_seeds() {
        let mut first = seeded_rng(1);
        let mut second = seeded_rng(2);

        let a: Vec<u64> = (0..4).map(|_| first.random()).collect();
        let b: Vec<u64> = (0..4).map(|_| second.random()).collect();
        assert_ne!(a, b);
    }

    // Tests rendering constants are distinct and the matrix limit is usable
    #[test]
    fn test_constants_are_consistent() {
        assert_ne!(SELECTED_CHAR, UNSELECTED_CHAR);
        assert!(!DECISION_SEPARATOR.is_empty());
        assert!(MAX_MATRIX_CELLS >= 1024 * 1024);
    }
}
