use patternbook::demos::behavioral::observer::{RecordingObserver, Subject};

#[test]
fn every_attached_observer_is_notified() {
    let mut subject = Subject::new();
    let email = RecordingObserver::new("email");
    let dashboard = RecordingObserver::new("dashboard");
    subject.attach(email.clone());
    subject.attach(dashboard.clone());

    subject.set_state("deploy-started");

    assert_eq!(*email.seen.borrow(), vec!["deploy-started".to_string()]);
    assert_eq!(*dashboard.seen.borrow(), vec!["deploy-started".to_string()]);
}

#[test]
fn detached_observers_stop_receiving_updates() {
    let mut subject = Subject::new();
    let email = RecordingObserver::new("email");
    let dashboard = RecordingObserver::new("dashboard");
    subject.attach(email.clone());
    subject.attach(dashboard.clone());

    subject.detach("email");
    assert_eq!(subject.observer_count(), 1);
    subject.set_state("deploy-finished");

    assert!(email.seen.borrow().is_empty());
    assert_eq!(dashboard.seen.borrow().len(), 1);
}

#[test]
fn demo_entry_succeeds() {
    patternbook::demos::behavioral::observer::run_demo().unwrap();
}
