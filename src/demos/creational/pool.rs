//! 对象池模式: 预先创建一组昂贵的连接, 借出与归还代替反复创建销毁。

use anyhow::bail;

#[derive(Debug)]
pub struct Connection {
    pub id: usize,
}

impl Connection {
    fn query(&self, sql: &str) -> String {
        format!("连接 #{} 执行: {sql}", self.id)
    }
}

/// Fixed-size pool; acquiring from an exhausted pool is an error rather
/// than an implicit new allocation.
pub struct ConnectionPool {
    idle: Vec<Connection>,
    capacity: usize,
}

impl ConnectionPool {
    pub fn with_capacity(capacity: usize) -> Self {
        let idle = (0..capacity).map(|id| Connection { id }).collect();
        Self { idle, capacity }
    }

    pub fn acquire(&mut self) -> anyhow::Result<Connection> {
        match self.idle.pop() {
            Some(connection) => Ok(connection),
            None => bail!("连接池已耗尽 (容量 {})", self.capacity),
        }
    }

    pub fn release(&mut self, connection: Connection) {
        self.idle.push(connection);
    }

    pub fn idle_count(&self) -> usize {
        self.idle.len()
    }
}

pub fn main() -> anyhow::Result<()> {
    println!("{}", "=".repeat(50));
    println!("对象池模式示例");
    println!("{}", "=".repeat(50));

    let mut pool = ConnectionPool::with_capacity(2);
    println!("\n初始空闲连接: {}", pool.idle_count());

    let first = pool.acquire()?;
    let second = pool.acquire()?;
    println!("{}", first.query("SELECT 1"));
    println!("{}", second.query("SELECT 2"));
    println!("借出两个后空闲连接: {}", pool.idle_count());

    println!("\n池耗尽时继续借出:");
    match pool.acquire() {
        Ok(_) => println!("不应该发生"),
        Err(err) => println!("对象池返回错误: {err}"),
    }

    pool.release(first);
    pool.release(second);
    println!("\n归还后空闲连接: {}", pool.idle_count());
    let reused = pool.acquire()?;
    println!("{}", reused.query("SELECT 3"));
    pool.release(reused);

    println!("\n{}", "=".repeat(50));
    println!("结论: 昂贵对象被复用, 池的容量是显式的上限");
    println!("{}", "=".repeat(50));
    Ok(())
}
