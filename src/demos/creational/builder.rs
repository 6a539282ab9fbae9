//! 建造者模式: 分步组装一个请求对象, `build` 时校验必填项。所有权式的
//! 链式调用让每一步都返回更新后的建造者。

use anyhow::bail;

#[derive(Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Default)]
pub struct HttpRequestBuilder {
    method: Option<String>,
    url: Option<String>,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl HttpRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: &str) -> Self {
        self.method = Some(method.to_string());
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// Assemble the request; the URL is the only required piece.
    pub fn build(self) -> anyhow::Result<HttpRequest> {
        let Some(url) = self.url else {
            bail!("缺少必填项: url");
        };
        Ok(HttpRequest {
            method: self.method.unwrap_or_else(|| "GET".to_string()),
            url,
            headers: self.headers,
            body: self.body,
        })
    }
}

pub fn main() -> anyhow::Result<()> {
    println!("{}", "=".repeat(50));
    println!("建造者模式示例");
    println!("{}", "=".repeat(50));

    println!("\n分步构造一个请求...");
    let request = HttpRequestBuilder::new()
        .method("POST")
        .url("https://example.com/api")
        .header("content-type", "application/json")
        .body("{\"hello\": \"world\"}")
        .build()?;
    println!("{} {}", request.method, request.url);
    for (name, value) in &request.headers {
        println!("  {name}: {value}");
    }
    if let Some(body) = &request.body {
        println!("  body: {body}");
    }

    println!("\n漏掉必填项时 build 会失败:");
    match HttpRequestBuilder::new().method("GET").build() {
        Ok(_) => println!("不应该发生"),
        Err(err) => println!("建造者返回错误: {err}"),
    }

    println!("\n{}", "=".repeat(50));
    println!("结论: 复杂对象的组装步骤被拆开, 非法组合在 build 时被拦下");
    println!("{}", "=".repeat(50));
    Ok(())
}
