use medboard::fixtures;
use medboard::models::DoctorStatus;
use medboard::models::collections::Roster;

#[test]
fn test_roster_preserves_insertion_order() {
    let doctors: Roster<_> = fixtures::doctors().unwrap().into_iter().collect();
    assert_eq!(doctors.len(), 8);
    assert_eq!(doctors.all()[0].name, "Dr. Sarah Johnson");
    assert_eq!(doctors.all()[7].name, "Dr. James Martinez");
}

#[test]
fn test_roster_id_lookup() {
    let doctors: Roster<_> = fixtures::doctors().unwrap().into_iter().collect();
    assert_eq!(
        doctors.get(&4).map(|d| d.name.as_str()),
        Some("Dr. David Kim")
    );
    assert!(doctors.get(&99).is_none());
}

#[test]
fn test_roster_push_replaces_by_id_in_place() {
    let mut doctors: Roster<_> = fixtures::doctors().unwrap().into_iter().collect();
    let mut updated = doctors.get(&4).unwrap().clone();
    updated.status = DoctorStatus::Active;
    doctors.push(updated);

    assert_eq!(doctors.len(), 8);
    // Still in its original position
    assert_eq!(doctors.all()[3].id, 4);
    assert_eq!(doctors.all()[3].status, DoctorStatus::Active);
}

#[test]
fn test_roster_predicate_filter() {
    let doctors: Roster<_> = fixtures::doctors().unwrap().into_iter().collect();
    let active = doctors.filter(|d| d.is_active());
    assert_eq!(active.len(), 7);
    let away = doctors.filter(|d| d.status == DoctorStatus::OnLeave);
    assert_eq!(away.len(), 1);
    assert_eq!(away[0].name, "Dr. David Kim");
}
