use patternbook::demos::creational::lazy_evaluation::LazyReport;

#[test]
fn nothing_is_computed_before_first_access() {
    let report = LazyReport::new();
    assert_eq!(report.computation_count(), 0);
}

#[test]
fn computation_happens_exactly_once() {
    let report = LazyReport::new();
    let first = report.content().to_string();
    let second = report.content().to_string();
    assert_eq!(first, second);
    assert_eq!(report.computation_count(), 1);
}

#[test]
fn demo_entry_succeeds() {
    patternbook::demos::creational::lazy_evaluation::main().unwrap();
}
