use aspect_calc_core::types::gcd;
use aspect_calc_core::{compute_ratio, derive_height, derive_width, parse_ratio_text, RatioError};
use rand::Rng;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn simplified_pair_is_in_lowest_terms() {
    let mut rng = rand::thread_rng();

    for _ in 0..2000 {
        let w: i64 = rng.gen_range(1..=100_000);
        let h: i64 = rng.gen_range(1..=100_000);
        let ratio = compute_ratio(w, h).unwrap();
        let pair = ratio.simplified;

        assert_eq!(gcd(pair.numerator as u64, pair.denominator as u64), 1, "{w}x{h}");
        assert!(close(pair.to_float(), w as f64 / h as f64), "{w}x{h}");
        assert!(close(ratio.decimal, pair.to_float()), "{w}x{h}");
    }
}

#[test]
fn zero_height_is_not_applicable_for_any_width() {
    for w in [0, 1, 720, 1920, i64::MAX, -5] {
        assert_eq!(compute_ratio(w, 0), Err(RatioError::NotApplicable));
    }
}

#[test]
fn compute_ratio_has_no_hidden_state() {
    let first = compute_ratio(3840, 1600);
    let second = compute_ratio(3840, 1600);
    assert_eq!(first, second);
    assert_eq!(first.unwrap().simplified.to_string(), "12:5");
}

#[test]
fn parse_both_forms() {
    assert!(close(parse_ratio_text("16:9").unwrap(), 1.777_777_777_777_777_7));
    assert_eq!(parse_ratio_text("2.5"), Ok(2.5));
}

#[test]
fn parse_failures() {
    assert_eq!(parse_ratio_text(""), Err(RatioError::EmptyInput));
    assert_eq!(parse_ratio_text("   "), Err(RatioError::EmptyInput));
    assert_eq!(parse_ratio_text("16:"), Err(RatioError::MalformedColonRatio));
    assert_eq!(parse_ratio_text(":9"), Err(RatioError::MalformedColonRatio));
    assert!(matches!(parse_ratio_text("a:b"), Err(RatioError::NotANumber(_))));
    assert_eq!(parse_ratio_text("16:0"), Err(RatioError::DivisionByZero));
}

#[test]
fn derive_full_hd() {
    assert!(close(derive_height(1920, "16:9").unwrap(), 1080.0));
    assert!(close(derive_width(1080, "16:9").unwrap(), 1920.0));
}

#[test]
fn derive_with_zero_ratio() {
    assert_eq!(derive_height(1920, "0"), Err(RatioError::NotApplicable));
    assert_eq!(derive_width(1080, "0"), Ok(0.0));
}

#[test]
fn derive_round_trip() {
    let ratios = ["16:9", "4:3", "2.39", "1:1", "9:16", "1.85"];
    for ratio in ratios {
        for h in [1, 480, 1080, 2160, 4321] {
            let width = derive_width(h, ratio).unwrap();
            let back = derive_height(width.round() as i64, ratio).unwrap();
            // width was rounded to a whole pixel, so allow one pixel of drift
            assert!((back - h as f64).abs() <= 1.0, "{ratio} {h} -> {width} -> {back}");
        }
    }
}

#[test]
fn derive_round_trip_exact() {
    let ratio = parse_ratio_text("2.39").unwrap();
    let width = derive_width(1000, "2.39").unwrap();
    assert!(close(width / ratio, 1000.0));
}
