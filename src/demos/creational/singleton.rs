//! 单例模式: one process-wide instance behind `OnceLock`, with a global
//! access point. The standard library guarantees the initialization runs
//! exactly once even under concurrent first access.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// Process-wide configuration store.
pub struct AppConfig {
    values: Mutex<HashMap<String, String>>,
}

static INSTANCE: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// The single shared instance.
    pub fn global() -> &'static AppConfig {
        INSTANCE.get_or_init(|| AppConfig {
            values: Mutex::new(HashMap::new()),
        })
    }

    pub fn set(&self, key: &str, value: &str) {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.get(key).cloned()
    }
}

pub fn main() -> anyhow::Result<()> {
    println!("{}", "=".repeat(50));
    println!("单例模式示例");
    println!("{}", "=".repeat(50));

    println!("\n第一次获取实例并写入...");
    let first = AppConfig::global();
    first.set("language", "zh-CN");
    println!("first.get(\"language\") = {:?}", first.get("language"));
    println!("first 的地址: {:p}", first as *const AppConfig);

    println!("\n第二次获取实例...");
    let second = AppConfig::global();
    println!("second.get(\"language\") = {:?}", second.get("language"));
    println!("second 的地址: {:p}", second as *const AppConfig);

    println!(
        "\nfirst 和 second 是同一个实例: {}",
        std::ptr::eq(first, second)
    );

    println!("\n通过 second 修改, 通过 first 读取...");
    second.set("language", "en-US");
    println!("first.get(\"language\") = {:?}", first.get("language"));

    println!("\n{}", "=".repeat(50));
    println!("结论: 全局只有一个配置实例");
    println!("{}", "=".repeat(50));
    Ok(())
}
