use medboard::fixtures;
use medboard::models::Doctor;
use medboard::{Searchable, search, search_by};

#[test]
fn test_empty_query_returns_everything_in_order() {
    let medicines = fixtures::medicines().unwrap();
    let filtered = search(&medicines, "");
    assert_eq!(filtered.len(), medicines.len());
    for (original, kept) in medicines.iter().zip(&filtered) {
        assert_eq!(original.name, kept.name);
    }
}

#[test]
fn test_search_is_case_insensitive() {
    let medicines = fixtures::medicines().unwrap();
    let filtered = search(&medicines, "amox");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Amoxicillin 500mg");

    let upper = search(&medicines, "AMOX");
    assert_eq!(upper.len(), 1);
    assert_eq!(upper[0].name, "Amoxicillin 500mg");
}

#[test]
fn test_search_is_idempotent() {
    let medicines = fixtures::medicines().unwrap();
    let once: Vec<String> = search(&medicines, "in")
        .into_iter()
        .map(|m| m.name.clone())
        .collect();

    let once_records: Vec<_> = search(&medicines, "in").into_iter().cloned().collect();
    let twice: Vec<String> = search(&once_records, "in")
        .into_iter()
        .map(|m| m.name.clone())
        .collect();

    assert_eq!(once, twice);
}

#[test]
fn test_doctors_match_on_name_or_specialty() {
    let doctors = fixtures::doctors().unwrap();

    let by_name = search(&doctors, "sarah");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Dr. Sarah Johnson");

    let by_specialty = search(&doctors, "cardio");
    assert_eq!(by_specialty.len(), 1);
    assert_eq!(by_specialty[0].specialty, "Cardiology");

    // "medicine" hits both General Medicine and Emergency Medicine
    let shared = search(&doctors, "medicine");
    assert_eq!(shared.len(), 2);
}

#[test]
fn test_extraction_rule_is_caller_defined() {
    let doctors = fixtures::doctors().unwrap();

    // Restrict matching to the email field only
    let by_email = search_by(&doctors, "michael.c@", |doctor: &Doctor| vec![&doctor.email]);
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].name, "Dr. Michael Chen");
}

#[test]
fn test_single_record_matches() {
    let doctors = fixtures::doctors().unwrap();
    assert!(doctors[0].matches("sarah"));
    assert!(doctors[0].matches("CARDIO"));
    assert!(doctors[0].matches("")); // empty query matches everything
    assert!(!doctors[0].matches("neurology"));
}

#[test]
fn test_no_match_yields_empty_not_error() {
    let medicines = fixtures::medicines().unwrap();
    assert!(search(&medicines, "no such medicine").is_empty());
}
