use super::*;

#[test]
fn window_bounds_are_inclusive() {
    let w = YearWindow::default();
    assert!(w.contains(2020));
    assert!(w.contains(2100));
    assert!(!w.contains(2019));
    assert!(!w.contains(2101));
}

#[test]
fn window_rejects_inverted_range() {
    assert!(YearWindow::new(2100, 2020).is_err());
    assert_eq!(YearWindow::new(2000, 2000).unwrap().span(), (2000, 2000));
}

#[test]
fn population_parse_marks_bad_cells_invalid() {
    assert_eq!(Population::parse("7840952880").value(), Some(7_840_952_880.0));
    assert_eq!(Population::parse(" 12.5 ").value(), Some(12.5));
    assert!(!Population::parse("").is_valid());
    assert!(!Population::parse("n/a").is_valid());
    assert!(!Population::parse("NaN").is_valid());
    assert!(!Population::parse("inf").is_valid());
}

#[test]
fn population_serializes_invalid_as_null() {
    let s = serde_json::to_string(&Population::INVALID).unwrap();
    assert_eq!(s, "null");
    let s = serde_json::to_string(&Population::new(3.0)).unwrap();
    assert_eq!(s, "3.0");
}
