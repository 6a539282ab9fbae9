use patternbook::demos::creational::abstract_factory::{DarkFactory, LightFactory, WidgetFactory};

#[test]
fn factories_produce_widgets_of_their_own_family() {
    let light = LightFactory.create_button("确定").render();
    let dark = DarkFactory.create_button("确定").render();
    assert!(light.contains("浅色"));
    assert!(dark.contains("深色"));

    assert!(LightFactory.create_checkbox("记住我").render().contains("浅色"));
}

#[test]
fn demo_entry_succeeds() {
    patternbook::demos::creational::abstract_factory::main().unwrap();
}
