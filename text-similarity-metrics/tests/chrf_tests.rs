use text_similarity_core::{CoreError, MetricCalculator};
use text_similarity_metrics::calculators::{score_chrf, ChrfCalculator, MetricInput};
use rust_decimal::Decimal;
use approx::assert_relative_eq;
use test_case::test_case;

#[test]
fn test_chrf_identity() {
    let score = score_chrf("the cat sat on the mat", "the cat sat on the mat", 6, 2.0).unwrap();
    assert_eq!(score, 1.0);
}

#[test]
fn test_chrf_pooled_orders_value() {
    // candidate grams: a, b, ab; reference grams: a, b, c, ab, bc
    let score = score_chrf("ab", "abc", 2, 2.0).unwrap();

    let (precision, recall) = (1.0, 0.6);
    let expected = 5.0 * precision * recall / (4.0 * precision + recall);
    assert_relative_eq!(score, expected, epsilon = 1e-12);
}

#[test]
fn test_chrf_beta_weights_recall() {
    // precision 1.0, recall 0.6
    let recall_heavy = score_chrf("ab", "abc", 2, 2.0).unwrap();
    let balanced = score_chrf("ab", "abc", 2, 1.0).unwrap();

    assert_relative_eq!(balanced, 0.75, epsilon = 1e-12);
    assert!(recall_heavy < balanced);
}

#[test]
fn test_chrf_space_is_word_boundary() {
    // "a_b" vs "a b" marks the space the same way
    assert_eq!(score_chrf("a b", "a_b", 3, 2.0).unwrap(), 1.0);
    assert!(score_chrf("a b", "ab", 3, 2.0).unwrap() < 1.0);
}

#[test_case("", "anything" ; "empty candidate")]
#[test_case("anything", "" ; "empty reference")]
#[test_case("", "" ; "both empty")]
#[test_case("xyz", "abc" ; "disjoint characters")]
fn test_chrf_zero_cases(candidate: &str, reference: &str) {
    assert_eq!(score_chrf(candidate, reference, 6, 2.0).unwrap(), 0.0);
}

#[test_case(0, 2.0 ; "zero order")]
#[test_case(6, 0.0 ; "zero beta")]
#[test_case(6, -1.0 ; "negative beta")]
#[test_case(6, f64::NAN ; "nan beta")]
#[test_case(6, 1e200 ; "beta with overflowing square")]
#[test_case(usize::MAX, 2.0 ; "order past the limit")]
#[test_case(2_000_000_000, 2.0 ; "huge order")]
fn test_chrf_invalid_configuration(n_max: usize, beta: f64) {
    assert!(matches!(
        score_chrf("a", "a", n_max, beta),
        Err(CoreError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_chrf_text_shorter_than_order() {
    // only orders up to the text length contribute
    let score = score_chrf("ab", "ab", 6, 2.0).unwrap();
    assert_eq!(score, 1.0);
}

#[test]
fn test_chrf_huge_beta_stays_in_range() {
    // beta = 1e150 is accepted; the score collapses to recall
    let score = score_chrf("ab", "abc", 2, 1e150).unwrap();
    assert!(score.is_finite());
    assert!((0.0..=1.0).contains(&score));
    assert_relative_eq!(score, 3.0 / 5.0, epsilon = 1e-12);
}

#[test]
fn test_chrf_order_limit_matches_text_length() {
    let at_limit = score_chrf("ab", "abc", text_similarity_core::MAX_NGRAM_ORDER, 2.0).unwrap();
    let at_length = score_chrf("ab", "abc", 3, 2.0).unwrap();
    assert_eq!(at_limit, at_length);
}

#[test]
fn test_chrf_evaluate_record() {
    let result = ChrfCalculator::default().evaluate("abc", "abc");
    assert_eq!(result.score, 1.0);
    assert!(result.elapsed_time_sec >= 0.0);

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["ChrF"].as_f64().unwrap(), 1.0);
}

#[tokio::test]
async fn test_chrf_calculator_trait() {
    let calculator = ChrfCalculator::default();

    let result = calculator
        .calculate(MetricInput::new("blåbærsyltetøy", "blåbærsyltetøy"))
        .await
        .unwrap();
    assert_eq!(result.score, Decimal::ONE);

    let metadata = result.metadata.as_object().unwrap();
    assert_eq!(metadata.get("metric").unwrap().as_str().unwrap(), "chrf");
    assert_eq!(metadata.get("n_max").unwrap().as_u64().unwrap(), 6);
}
