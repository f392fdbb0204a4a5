//! Unit tests for the filtered range generators
//!
//! Covers the lower-limit validation of `even_numbers` and the conservative
//! squaring guard of `descending_squares_divisible_by_seven`.

use collection_quiz::analysis::{
    descending_squares_divisible_by_seven, even_numbers, SQUARE_THRESHOLD,
};
use collection_quiz::errors::AppError;

#[test]
fn test_even_numbers_reference_cases() {
    assert_eq!(even_numbers(10).unwrap(), vec![2, 4, 6, 8]);
    assert_eq!(even_numbers(1).unwrap(), Vec::<i32>::new());
    assert!(matches!(even_numbers(0), Err(AppError::OutOfRange { .. })));
}

#[test]
fn test_even_numbers_matches_naive_filter() {
    for limit in 1..200 {
        let expected: Vec<i32> = (1..limit).filter(|n| n % 2 == 0).collect();
        assert_eq!(even_numbers(limit).unwrap(), expected, "limit {}", limit);
    }
}

#[test]
fn test_even_numbers_large_limit() {
    let values = even_numbers(1_000_001).unwrap();
    assert_eq!(values.len(), 500_000);
    assert_eq!(values.first(), Some(&2));
    assert_eq!(values.last(), Some(&1_000_000));
}

#[test]
fn test_squares_reference_cases() {
    assert_eq!(descending_squares_divisible_by_seven(10).unwrap(), vec![49]);
    assert!(descending_squares_divisible_by_seven(0).unwrap().is_empty());
    assert!(matches!(
        descending_squares_divisible_by_seven(100_000),
        Err(AppError::Overflow { .. })
    ));
}

#[test]
fn test_squares_matches_naive_filter() {
    for limit in -3..300 {
        let mut expected: Vec<i32> = (1..limit.max(1))
            .map(|n| n * n)
            .filter(|sq| sq % 7 == 0)
            .collect();
        expected.sort_unstable_by(|a, b| b.cmp(a));

        assert_eq!(
            descending_squares_divisible_by_seven(limit).unwrap(),
            expected,
            "limit {}",
            limit
        );
    }
}

#[test]
fn test_squares_threshold_is_half_i32_max() {
    assert_eq!(SQUARE_THRESHOLD, 1_073_741_823);

    assert!(descending_squares_divisible_by_seven(32_768).is_ok());

    match descending_squares_divisible_by_seven(32_769) {
        Err(AppError::Overflow {
            value,
            square,
            threshold,
        }) => {
            assert_eq!(value, 32_768);
            assert_eq!(square, 1_073_741_824);
            assert_eq!(threshold, SQUARE_THRESHOLD);
        }
        other => panic!("expected overflow, got {:?}", other),
    }
}
