//! 惰性求值模式: 昂贵的计算推迟到第一次使用时才发生, 之后复用缓存。

use once_cell::sync::OnceCell;

/// A value computed on first access and memoized afterwards.
pub struct LazyReport {
    cell: OnceCell<String>,
    computations: std::cell::Cell<u32>,
}

impl LazyReport {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
            computations: std::cell::Cell::new(0),
        }
    }

    pub fn content(&self) -> &str {
        self.cell.get_or_init(|| {
            self.computations.set(self.computations.get() + 1);
            println!("  (正在执行昂贵的统计计算...)");
            let total: u64 = (1u64..=1_000_000).sum();
            format!("1..=1000000 的总和是 {total}")
        })
    }

    pub fn computation_count(&self) -> u32 {
        self.computations.get()
    }
}

impl Default for LazyReport {
    fn default() -> Self {
        Self::new()
    }
}

pub fn main() -> anyhow::Result<()> {
    println!("{}", "=".repeat(50));
    println!("惰性求值模式示例");
    println!("{}", "=".repeat(50));

    let report = LazyReport::new();
    println!(
        "\n创建后还没有任何计算, 计算次数: {}",
        report.computation_count()
    );

    println!("\n第一次读取:");
    println!("  {}", report.content());
    println!("\n第二次读取:");
    println!("  {}", report.content());

    println!("\n计算总共发生了 {} 次", report.computation_count());

    println!("\n{}", "=".repeat(50));
    println!("结论: 计算只在需要时发生一次, 之后读取都是缓存");
    println!("{}", "=".repeat(50));
    Ok(())
}
