use medboard::config::DashboardConfig;
use medboard::fixtures;
use medboard::models::collections::Roster;
use medboard::view::exam_room::units_to_dispense;
use medboard::view::pharmacy::stock_summary;
use medboard::{ClinicView, DoctorRosterView, ExamRoomView, PharmacyView, StockBands, StockStatus};

#[test]
fn test_roster_view_resets_page_when_the_filter_changes() {
    let doctors = fixtures::doctors().unwrap();
    let mut view = DoctorRosterView::with_config(&DashboardConfig::default());

    view.set_page(1);
    assert_eq!(view.visible_rows(&doctors).len(), 3);

    // Narrowing the filter must never leave a stale page index behind
    view.set_search("cardio");
    assert_eq!(view.page_index(), 0);
    let rows = view.visible_rows(&doctors);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Dr. Sarah Johnson");

    view.set_search("");
    view.set_page(1);
    view.set_page_size(10);
    assert_eq!(view.page_index(), 0);
    assert_eq!(view.visible_rows(&doctors).len(), 8);
    assert_eq!(view.pages(&doctors), 1);
}

#[test]
fn test_pharmacy_end_to_end_ibuprofen_is_critical() {
    let medicines = fixtures::medicines().unwrap();
    let mut view = PharmacyView::new();

    view.set_search("ibuprofen");
    let rows = view.stock_rows(&medicines, StockBands::default());
    assert_eq!(rows.len(), 1);

    let (medicine, status) = rows[0];
    assert_eq!(medicine.name, "Ibuprofen 400mg");
    assert_eq!(medicine.quantity, 23);
    assert_eq!(medicine.min_quantity, 150);
    assert_eq!(status, StockStatus::Critical); // 23/150 is about 15.3%
}

#[test]
fn test_pharmacy_prescription_selection() {
    let prescriptions: Roster<_> = fixtures::prescriptions().unwrap().into_iter().collect();
    let mut view = PharmacyView::new();

    assert!(view.selected_prescription(&prescriptions).is_none());

    view.select_prescription(3);
    let selected = view.selected_prescription(&prescriptions).unwrap();
    assert_eq!(selected.patient_name, "Robert Williams");
    assert_eq!(selected.icd_code, "J06.9");
    assert_eq!(selected.lines.len(), 2);

    view.select_prescription(99); // deleted elsewhere
    assert!(view.selected_prescription(&prescriptions).is_none());
}

#[test]
fn test_stock_summary_counts_the_whole_inventory() {
    let medicines = fixtures::medicines().unwrap();
    let summary = stock_summary(&medicines, StockBands::default());

    assert_eq!(summary.get(&StockStatus::Critical), Some(&2));
    assert_eq!(summary.get(&StockStatus::Low), Some(&1));
    assert_eq!(summary.get(&StockStatus::Good), Some(&5));
}

#[test]
fn test_clinic_draft_rejects_incomplete_lines() {
    let mut view = ClinicView::new();

    assert!(!view.add_line("Paracetamol 500mg", "", "3x daily", "5 days"));
    assert!(view.lines().is_empty());

    assert!(view.add_line("Paracetamol 500mg", "1 tablet", "3x daily", "5 days"));
    assert!(view.add_line("Vitamin D3 1000IU", "1 capsule", "daily", "30 days"));
    assert_eq!(view.lines().len(), 2);

    let first_id = view.lines()[0].id;
    view.remove_line(first_id);
    assert_eq!(view.lines().len(), 1);
    assert_eq!(view.lines()[0].name, "Vitamin D3 1000IU");
}

#[test]
fn test_clinic_patient_selection_follows_the_queue() {
    let queue = fixtures::clinic_queue().unwrap();
    let mut view = ClinicView::new();

    view.select_patient(2);
    assert_eq!(
        view.selected_patient(&queue).map(|p| p.name.as_str()),
        Some("Mary Johnson")
    );
}

#[test]
fn test_exam_room_search_keeps_diacritics() {
    let queue = fixtures::exam_room_queue().unwrap();
    let mut view = ExamRoomView::new();

    view.set_search("trần");
    let matches = view.visible_patients(&queue);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].patient_code, "HS002");

    // No diacritic folding: the plain-ascii query does not match
    view.set_search("tran");
    assert!(view.visible_patients(&queue).is_empty());
}

#[test]
fn test_dispense_totals() {
    let lines = fixtures::dispense_lines().unwrap();
    assert_eq!(lines[0].units_to_dispense(), 28);
    assert_eq!(lines[4].units_to_dispense(), 56);
    assert_eq!(units_to_dispense(&lines), 224);
}
