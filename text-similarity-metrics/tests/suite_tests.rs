use pretty_assertions::assert_eq;
use text_similarity_core::{BleuConfig, ChrfConfig, ScoringConfig};
use text_similarity_metrics::SimilaritySuite;

#[test]
fn test_suite_identity_scenario() {
    let report = SimilaritySuite::default().compare("the cat sat on the mat", "the cat sat on the mat");

    assert_eq!(report.bleu.score, 1.0);
    assert_eq!(report.rouge.rouge_1, 1.0);
    assert_eq!(report.rouge.rouge_l.f1, 1.0);
    assert_eq!(report.chrf.score, 1.0);
}

#[test]
fn test_suite_empty_candidate_scenario() {
    let report = SimilaritySuite::default().compare("", "anything");

    assert_eq!(report.bleu.score, 0.0);
    assert_eq!(report.rouge.rouge_1, 0.0);
    assert_eq!(report.rouge.rouge_l.precision, 0.0);
    assert_eq!(report.rouge.rouge_l.recall, 0.0);
    assert_eq!(report.rouge.rouge_l.f1, 0.0);
    assert_eq!(report.chrf.score, 0.0);
}

#[test]
fn test_suite_uses_configured_orders() {
    let config = ScoringConfig {
        bleu: BleuConfig::new(2).unwrap(),
        chrf: ChrfConfig::new(3, 1.0).unwrap(),
    };
    let suite = SimilaritySuite::from_config(&config).unwrap();

    let report = suite.compare("a quick fox", "the quick brown fox jumps");
    assert_eq!(report.bleu.precisions.len(), 2);
}

#[test]
fn test_suite_rejects_invalid_config() {
    let config = ScoringConfig {
        bleu: BleuConfig { max_n: 0 },
        chrf: ChrfConfig::default(),
    };
    assert!(SimilaritySuite::from_config(&config).is_err());
}

#[test]
fn test_report_keyed_by_family() {
    let report = SimilaritySuite::default().compare("a b c", "a b d");
    let json = report.to_json().unwrap();

    let mut families: Vec<&str> = json
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    families.sort_unstable();

    assert_eq!(families, vec!["bleu", "chrf", "elapsed_time_sec", "rouge"]);
    assert!(json["bleu"].get("BLEU").is_some());
    assert!(json["bleu"].get("brevity_penalty").is_some());
    assert!(json["rouge"].get("ROUGE-L").is_some());
    assert!(json["chrf"].get("ChrF").is_some());
}

#[test]
fn test_suite_is_shareable_across_threads() {
    let suite = std::sync::Arc::new(SimilaritySuite::default());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let suite = suite.clone();
            std::thread::spawn(move || {
                let text = format!("thread {i} scores the same text");
                suite.compare(&text, &text).bleu.score
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1.0);
    }
}
