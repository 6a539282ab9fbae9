//! 抽象工厂模式: 一个工厂生产一整族相互配套的控件, 切换工厂即切换整个
//! 产品族。

pub trait Button {
    fn render(&self) -> String;
}

pub trait Checkbox {
    fn render(&self) -> String;
}

pub trait WidgetFactory {
    fn theme_name(&self) -> &'static str;
    fn create_button(&self, label: &str) -> Box<dyn Button>;
    fn create_checkbox(&self, label: &str) -> Box<dyn Checkbox>;
}

struct LightButton {
    label: String,
}

struct LightCheckbox {
    label: String,
}

struct DarkButton {
    label: String,
}

struct DarkCheckbox {
    label: String,
}

impl Button for LightButton {
    fn render(&self) -> String {
        format!("[ {} ] (浅色按钮)", self.label)
    }
}

impl Checkbox for LightCheckbox {
    fn render(&self) -> String {
        format!("(x) {} (浅色复选框)", self.label)
    }
}

impl Button for DarkButton {
    fn render(&self) -> String {
        format!("[ {} ] (深色按钮)", self.label)
    }
}

impl Checkbox for DarkCheckbox {
    fn render(&self) -> String {
        format!("(x) {} (深色复选框)", self.label)
    }
}

pub struct LightFactory;
pub struct DarkFactory;

impl WidgetFactory for LightFactory {
    fn theme_name(&self) -> &'static str {
        "浅色主题"
    }

    fn create_button(&self, label: &str) -> Box<dyn Button> {
        Box::new(LightButton {
            label: label.to_string(),
        })
    }

    fn create_checkbox(&self, label: &str) -> Box<dyn Checkbox> {
        Box::new(LightCheckbox {
            label: label.to_string(),
        })
    }
}

impl WidgetFactory for DarkFactory {
    fn theme_name(&self) -> &'static str {
        "深色主题"
    }

    fn create_button(&self, label: &str) -> Box<dyn Button> {
        Box::new(DarkButton {
            label: label.to_string(),
        })
    }

    fn create_checkbox(&self, label: &str) -> Box<dyn Checkbox> {
        Box::new(DarkCheckbox {
            label: label.to_string(),
        })
    }
}

fn render_dialog(factory: &dyn WidgetFactory) {
    println!("\n{}:", factory.theme_name());
    println!("  {}", factory.create_button("确定").render());
    println!("  {}", factory.create_checkbox("记住我").render());
}

pub fn main() -> anyhow::Result<()> {
    println!("{}", "=".repeat(50));
    println!("抽象工厂模式示例");
    println!("{}", "=".repeat(50));

    render_dialog(&LightFactory);
    render_dialog(&DarkFactory);

    println!("\n{}", "=".repeat(50));
    println!("结论: 同一段界面代码可以在产品族之间整体切换");
    println!("{}", "=".repeat(50));
    Ok(())
}
