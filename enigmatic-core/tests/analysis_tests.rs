#![allow(missing_docs)]
use enigmatic_core::analysis::analyze;
use enigmatic_core::error::AnalysisError;

#[test]
fn empty_text_is_rejected_explicitly() {
    assert_eq!(analyze("").unwrap_err(), AnalysisError::EmptyText);
}

#[test]
fn length_and_unique_chars_are_counted_on_the_raw_input() {
    let report = analyze("Abba").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(report.length, 4);
    // Case-sensitive: 'A', 'b', 'a' are three distinct characters.
    assert_eq!(report.unique_chars, 3);
}

#[test]
fn single_symbol_text_has_zero_entropy() {
    let report = analyze("AAAA").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(report.entropy, 0.0);
}

#[test]
fn two_equiprobable_symbols_carry_exactly_one_bit() {
    let report = analyze("AB").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(report.entropy, 1.0);
}

#[test]
fn frequencies_are_percentages_that_sum_to_one_hundred() {
    let report = analyze("The quick brown fox jumps over the lazy dog")
        .unwrap_or_else(|e| panic!("{e}"));
    let sum: f64 = report.char_frequency.values().sum();
    assert!((sum - 100.0).abs() < 1e-9, "sum was {sum}");
    assert!(report.char_frequency.values().all(|&p| p > 0.0 && p <= 100.0));
}

#[test]
fn frequencies_fold_case_before_counting() {
    let report = analyze("aA").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(report.char_frequency.len(), 1);
    let freq = report.char_frequency[&'A'];
    assert!((freq - 100.0).abs() < 1e-9);
}

#[test]
fn texts_shorter_than_a_trigram_have_no_ngrams() {
    assert!(analyze("AB").unwrap_or_else(|e| panic!("{e}")).ngrams.is_empty());
}

#[test]
fn ngrams_are_capped_at_ten_fractional_entries() {
    // 30 distinct trigrams, all different.
    let report = analyze("ABCDEFGHIJKLMNOPQRSTUVWXYZABCDEF")
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(report.ngrams.len(), 10);
    assert!(report.ngrams.iter().all(|(_, f)| *f > 0.0 && *f <= 1.0));
}

#[test]
fn most_common_trigram_comes_first() {
    let report = analyze("XYZXYZXYZA").unwrap_or_else(|e| panic!("{e}"));
    let (gram, fraction) = &report.ngrams[0];
    assert_eq!(gram, "XYZ");
    // 3 occurrences out of 8 windows.
    assert!((fraction - 3.0 / 8.0).abs() < 1e-9);
}

#[test]
fn tied_trigrams_keep_first_encountered_order() {
    // Every trigram of "ABCDE" occurs once; scan order must be preserved.
    let report = analyze("ABCDE").unwrap_or_else(|e| panic!("{e}"));
    let grams: Vec<&str> = report.ngrams.iter().map(|(g, _)| g.as_str()).collect();
    assert_eq!(grams, ["ABC", "BCD", "CDE"]);
}

#[test]
fn ngram_counting_folds_case() {
    let report = analyze("abcABC").unwrap_or_else(|e| panic!("{e}"));
    let (gram, fraction) = &report.ngrams[0];
    assert_eq!(gram, "ABC");
    // "ABCABC" has windows ABC BCA CAB ABC: ABC twice out of four.
    assert!((fraction - 0.5).abs() < 1e-9);
}

#[test]
fn analysis_is_deterministic() {
    let a = analyze("Deterministic input").unwrap_or_else(|e| panic!("{e}"));
    let b = analyze("Deterministic input").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(a.length, b.length);
    assert_eq!(a.entropy, b.entropy);
    assert_eq!(a.ngrams, b.ngrams);
    assert_eq!(a.char_frequency, b.char_frequency);
}
