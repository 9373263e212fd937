use super::*;

fn photo(n: u8) -> DataUrl {
    DataUrl::from_bytes("image/png", &[n, n, n])
}

#[test]
fn insert_get_remove_round_trip() {
    let mut photos = PhotoAssignment::new();
    assert!(photos.is_empty());

    photos.insert(0, photo(1)).unwrap();
    photos.insert(11, photo(2)).unwrap();
    assert_eq!(photos.len(), 2);
    assert_eq!(photos.get(0), Some(&photo(1)));
    assert_eq!(photos.get(5), None);

    assert_eq!(photos.remove(11), Some(photo(2)));
    assert_eq!(photos.remove(11), None);
    assert_eq!(photos.len(), 1);
}

#[test]
fn insert_replaces_existing_assignment() {
    let mut photos = PhotoAssignment::new();
    photos.insert(3, photo(1)).unwrap();
    photos.insert(3, photo(2)).unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos.get(3), Some(&photo(2)));
}

#[test]
fn out_of_range_month_is_rejected() {
    let mut photos = PhotoAssignment::new();
    let err = photos.insert(12, photo(1)).unwrap_err();
    assert!(err.to_string().contains("out of range"));
    assert!(photos.is_empty());
}

#[test]
fn iteration_is_in_month_order() {
    let mut photos = PhotoAssignment::new();
    photos.insert(7, photo(7)).unwrap();
    photos.insert(2, photo(2)).unwrap();
    photos.insert(10, photo(10)).unwrap();
    let months: Vec<usize> = photos.iter().map(|(m, _)| m).collect();
    assert_eq!(months, vec![2, 7, 10]);
}

#[test]
fn assignment_serializes_with_string_month_keys() {
    let mut photos = PhotoAssignment::new();
    photos.insert(4, photo(4)).unwrap();
    let json = serde_json::to_value(&photos).unwrap();
    assert!(json.get("4").is_some());
}

#[test]
fn default_project_matches_startup_state() {
    let project = CalendarProject::default();
    assert_eq!(project.year, 2026);
    assert_eq!(project.language, Language::Lt);
    assert!(project.month_images.is_empty());
}
