//! 原型模式: 以一组已配置好的原型为模板, 克隆后再做少量定制, 避免每次
//! 从零构造。

use anyhow::Context;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub kind: String,
    pub title: String,
    pub sections: Vec<String>,
}

/// Registry of ready-made prototypes, cloned on demand.
pub struct PrototypeRegistry {
    prototypes: HashMap<String, Document>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &str, prototype: Document) {
        self.prototypes.insert(name.to_string(), prototype);
    }

    pub fn clone_of(&self, name: &str) -> anyhow::Result<Document> {
        self.prototypes
            .get(name)
            .cloned()
            .with_context(|| format!("没有名为 '{name}' 的原型"))
    }
}

impl Default for PrototypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub fn main() -> anyhow::Result<()> {
    println!("{}", "=".repeat(50));
    println!("原型模式示例");
    println!("{}", "=".repeat(50));

    let mut registry = PrototypeRegistry::new();
    registry.register(
        "weekly-report",
        Document {
            kind: "report".to_string(),
            title: "周报模板".to_string(),
            sections: vec!["本周进展".to_string(), "下周计划".to_string()],
        },
    );

    println!("\n从原型克隆两份文档并分别定制...");
    let mut first = registry.clone_of("weekly-report")?;
    first.title = "第 31 周周报".to_string();

    let mut second = registry.clone_of("weekly-report")?;
    second.title = "第 32 周周报".to_string();
    second.sections.push("风险提示".to_string());

    println!("first  = {first:?}");
    println!("second = {second:?}");

    println!("\n原型本身未被修改:");
    println!("template = {:?}", registry.clone_of("weekly-report")?);

    println!("\n{}", "=".repeat(50));
    println!("结论: 克隆共享模板比重复搭建便宜, 且原型保持不变");
    println!("{}", "=".repeat(50));
    Ok(())
}
