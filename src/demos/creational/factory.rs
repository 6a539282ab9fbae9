//! 工厂模式: 通过一个创建函数按名称生产不同的导出器, 调用方只依赖
//! `Exporter` trait。

use anyhow::bail;

pub trait Exporter: std::fmt::Debug {
    fn format_name(&self) -> &'static str;
    fn export(&self, payload: &str) -> String;
}

#[derive(Debug)]
struct JsonExporter;
#[derive(Debug)]
struct CsvExporter;

impl Exporter for JsonExporter {
    fn format_name(&self) -> &'static str {
        "json"
    }

    fn export(&self, payload: &str) -> String {
        format!("{{\"payload\": \"{payload}\"}}")
    }
}

impl Exporter for CsvExporter {
    fn format_name(&self) -> &'static str {
        "csv"
    }

    fn export(&self, payload: &str) -> String {
        format!("payload\n{payload}")
    }
}

/// The factory: maps a format name to a concrete exporter.
pub fn create_exporter(format: &str) -> anyhow::Result<Box<dyn Exporter>> {
    match format {
        "json" => Ok(Box::new(JsonExporter)),
        "csv" => Ok(Box::new(CsvExporter)),
        other => bail!("不支持的导出格式: {other}"),
    }
}

pub fn main() -> anyhow::Result<()> {
    println!("{}", "=".repeat(50));
    println!("工厂模式示例");
    println!("{}", "=".repeat(50));

    for format in ["json", "csv"] {
        let exporter = create_exporter(format)?;
        println!("\n使用 {} 导出器:", exporter.format_name());
        println!("{}", exporter.export("设计模式"));
    }

    println!("\n请求一个未注册的格式:");
    match create_exporter("xml") {
        Ok(_) => println!("不应该发生"),
        Err(err) => println!("工厂返回错误: {err}"),
    }

    println!("\n{}", "=".repeat(50));
    println!("结论: 调用方只依赖抽象接口, 创建逻辑集中在工厂中");
    println!("{}", "=".repeat(50));
    Ok(())
}
