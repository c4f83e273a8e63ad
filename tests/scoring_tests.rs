// Host-side tests for the distance score curve and score formatting.

use underground_guesser::core::{format_significant, score, score_guess, NormalizedPoint};

#[test]
fn perfect_and_near_guesses_are_capped_at_100() {
    assert_eq!(score(0.0), 100.0);
    assert_eq!(score(0.5), 100.0);
    assert_eq!(score(1.0), 100.0);
    assert!((score(1.5) - 100.0).abs() < 1e-9);
}

#[test]
fn score_follows_the_inverse_curve_past_the_cap() {
    assert!((score(150.0) - 1.0).abs() < 1e-12);
    assert!((score(3.0) - 50.0).abs() < 1e-12);
    assert!((score(300.0) - 0.5).abs() < 1e-12);
}

#[test]
fn score_is_non_increasing_and_non_negative() {
    let mut prev = score(0.0);
    for i in 1..=2000 {
        let d = i as f64 * 0.1;
        let s = score(d);
        assert!(s <= prev, "score increased at distance {d}");
        assert!(s >= 0.0);
        prev = s;
    }
    assert!(score(1e12) >= 0.0);
}

#[test]
fn score_guess_uses_normalized_distance() {
    let answer = NormalizedPoint::new(80.0, 80.0);
    let s = score_guess(NormalizedPoint::new(0.0, 0.0), answer);
    let expected = 150.0 / (80.0_f64 * 80.0 * 2.0).sqrt();
    assert!((s - expected).abs() < 1e-12);
    assert!((s - 1.326).abs() < 1e-3);
}

#[test]
fn significant_digit_formatting() {
    assert_eq!(format_significant(100.0, 4), "100.0");
    assert_eq!(format_significant(1.32583, 4), "1.326");
    assert_eq!(format_significant(0.0, 4), "0.000");
    assert_eq!(format_significant(12.5, 4), "12.50");
    assert_eq!(format_significant(0.25, 4), "0.2500");
    assert_eq!(format_significant(123456.0, 4), "1.235e+5");
    assert_eq!(format_significant(0.000_000_123_4, 4), "1.234e-7");
}

#[test]
fn significant_digit_formatting_counts_rounding_carries() {
    assert_eq!(format_significant(9.99996, 4), "10.00");
    assert_eq!(format_significant(99.9996, 4), "100.0");
    assert_eq!(format_significant(999.96, 4), "1000");
    assert_eq!(format_significant(9999.6, 4), "1.000e+4");
    assert_eq!(format_significant(0.999_96, 4), "1.000");
}
