use patternbook::demos::creational::prototype::{Document, PrototypeRegistry};

fn registry_with_template() -> PrototypeRegistry {
    let mut registry = PrototypeRegistry::new();
    registry.register(
        "report",
        Document {
            kind: "report".to_string(),
            title: "模板".to_string(),
            sections: vec!["进展".to_string()],
        },
    );
    registry
}

#[test]
fn clones_are_independent_of_the_prototype() {
    let registry = registry_with_template();

    let mut copy = registry.clone_of("report").unwrap();
    copy.title = "定制后的标题".to_string();
    copy.sections.push("风险".to_string());

    let template = registry.clone_of("report").unwrap();
    assert_eq!(template.title, "模板");
    assert_eq!(template.sections, vec!["进展".to_string()]);
}

#[test]
fn unknown_prototype_is_an_error() {
    let registry = registry_with_template();
    assert!(registry.clone_of("missing").is_err());
}

#[test]
fn demo_entry_succeeds() {
    patternbook::demos::creational::prototype::main().unwrap();
}
