//! 观察者模式: 主题维护观察者列表, 状态变化时逐个通知, 主题与观察者
//! 之间只通过 `Observer` trait 耦合。

use std::cell::RefCell;
use std::rc::Rc;

pub trait Observer {
    fn name(&self) -> &str;
    fn update(&self, state: &str);
}

/// Concrete subject holding the shared state.
pub struct Subject {
    observers: Vec<Rc<dyn Observer>>,
    state: String,
}

impl Subject {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            state: String::new(),
        }
    }

    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    pub fn detach(&mut self, name: &str) {
        self.observers.retain(|observer| observer.name() != name);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn set_state(&mut self, state: &str) {
        self.state = state.to_string();
        self.notify();
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.update(&self.state);
        }
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::new()
    }
}

/// Test-friendly observer that records every notification it receives.
pub struct RecordingObserver {
    name: String,
    pub seen: RefCell<Vec<String>>,
}

impl RecordingObserver {
    pub fn new(name: &str) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            seen: RefCell::new(Vec::new()),
        })
    }
}

impl Observer for RecordingObserver {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, state: &str) {
        self.seen.borrow_mut().push(state.to_string());
        println!("  [{}] 收到新状态: {state}", self.name);
    }
}

pub fn run_demo() -> anyhow::Result<()> {
    println!("{}", "=".repeat(50));
    println!("观察者模式示例");
    println!("{}", "=".repeat(50));

    let mut subject = Subject::new();
    let email = RecordingObserver::new("邮件通知");
    let dashboard = RecordingObserver::new("监控面板");
    subject.attach(email.clone());
    subject.attach(dashboard.clone());

    println!("\n状态第一次变化:");
    subject.set_state("部署开始");

    println!("\n移除邮件通知后再次变化:");
    subject.detach("邮件通知");
    subject.set_state("部署完成");

    println!(
        "\n邮件通知收到 {} 条, 监控面板收到 {} 条",
        email.seen.borrow().len(),
        dashboard.seen.borrow().len()
    );

    println!("\n{}", "=".repeat(50));
    println!("结论: 主题不需要知道观察者的具体类型, 增减观察者互不影响");
    println!("{}", "=".repeat(50));
    Ok(())
}
