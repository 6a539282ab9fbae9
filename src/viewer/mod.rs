//! Documentation viewer: resolve a pattern, read its documentation artifact
//! and optionally isolate one logical section.

use crate::catalog::types::ArtifactKind;
use crate::catalog::Registry;
use crate::{PatternbookError, Result};
use std::fs;

/// Logical section names mapped to the literal headings that open them.
/// An unknown logical name is used verbatim as its own alias.
const SECTION_ALIASES: &[(&str, &[&str])] = &[
    ("intent", &["意图"]),
    ("use_cases", &["适用场景"]),
    ("pros_cons", &["优点", "缺点"]),
    ("examples", &["示例", "Rust 实现"]),
    ("best_practices", &["最佳实践"]),
];

/// A resolved documentation view.
#[derive(Debug)]
pub struct DocView {
    pub name_localized: String,
    pub name_canonical: String,
    pub body: String,
}

pub struct DocViewer<'a> {
    registry: &'a Registry,
}

impl<'a> DocViewer<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Load a pattern's documentation, restricted to one logical section
    /// when `section` is given.
    pub fn view(&self, name: &str, section: Option<&str>) -> Result<DocView> {
        let record = self
            .registry
            .find_by_name(name)
            .ok_or_else(|| PatternbookError::NotFound(name.to_string()))?;
        let path = self
            .registry
            .resolve_artifact_path(&record.id, ArtifactKind::Doc)
            .ok_or_else(|| PatternbookError::DocMissing {
                id: record.id.clone(),
                path: None,
            })?;
        let content = fs::read_to_string(&path).map_err(|_| PatternbookError::DocMissing {
            id: record.id.clone(),
            path: Some(path.clone()),
        })?;

        let body = match section {
            Some(section_name) => {
                let captured = extract_section(&content, section_name);
                if captured.is_empty() {
                    return Err(PatternbookError::SectionNotFound(section_name.to_string()));
                }
                captured
            }
            None => content,
        };

        Ok(DocView {
            name_localized: record.name_localized.clone(),
            name_canonical: record.name_canonical.clone(),
            body,
        })
    }
}

/// Isolate one logical section with a single linear scan.
///
/// A heading line containing one of the section's aliases opens the capture
/// and fixes the section depth; any following heading of the same or a
/// shallower depth closes it (the closing line is excluded), unless that
/// heading itself matches an alias, which re-opens the capture instead.
/// Consequently a multi-alias section captures its headings only while they
/// are contiguous; a later non-contiguous occurrence is never reached.
pub fn extract_section(content: &str, section_name: &str) -> String {
    let fallback = [section_name];
    let aliases: &[&str] = SECTION_ALIASES
        .iter()
        .find(|(name, _)| *name == section_name)
        .map(|&(_, aliases)| aliases)
        .unwrap_or(&fallback);

    let mut captured: Vec<&str> = Vec::new();
    let mut in_section = false;
    let mut section_depth = 0;

    for line in content.lines() {
        let depth = heading_depth(line);
        if depth > 0 && aliases.iter().any(|alias| line.contains(alias)) {
            in_section = true;
            section_depth = depth;
            captured.push(line);
            continue;
        }
        if in_section {
            if depth > 0 && depth <= section_depth {
                break;
            }
            captured.push(line);
        }
    }
    captured.join("\n")
}

/// Number of leading heading markers; 0 for a non-heading line.
fn heading_depth(line: &str) -> usize {
    line.chars().take_while(|&c| c == '#').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = "\
# 单例模式

## 意图

确保一个类型只有一个实例。

## 适用场景

- 全局配置
- 连接句柄

### 反例

- 到处共享可变状态

## 优点

- 受控的全局访问

## 缺点

- 隐藏依赖

## 最佳实践

优先考虑显式传参。
";

    #[test]
    fn captures_from_heading_to_next_peer_heading() {
        let section = extract_section(DOC, "intent");
        assert_eq!(section, "## 意图\n\n确保一个类型只有一个实例。\n");
    }

    #[test]
    fn deeper_headings_stay_inside_the_section() {
        let section = extract_section(DOC, "use_cases");
        assert!(section.contains("### 反例"));
        assert!(section.contains("到处共享可变状态"));
        assert!(!section.contains("优点"));
    }

    #[test]
    fn contiguous_alias_headings_are_chained() {
        // 优点 and 缺点 are adjacent, so the second alias re-opens the
        // capture instead of closing it.
        let section = extract_section(DOC, "pros_cons");
        assert!(section.contains("## 优点"));
        assert!(section.contains("## 缺点"));
        assert!(section.contains("隐藏依赖"));
        assert!(!section.contains("最佳实践"));
    }

    #[test]
    fn non_contiguous_alias_heading_is_not_reached() {
        let doc = "\
## 优点

- 快

## 实现说明

无关内容。

## 缺点

- 复杂
";
        let section = extract_section(doc, "pros_cons");
        assert!(section.contains("## 优点"));
        assert!(!section.contains("复杂"));
    }

    #[test]
    fn unknown_logical_name_is_used_as_literal_heading_text() {
        let section = extract_section(DOC, "最佳实践");
        assert!(section.contains("优先考虑显式传参。"));
    }

    #[test]
    fn missing_section_yields_empty_capture() {
        assert_eq!(extract_section(DOC, "examples"), "");
    }

    #[test]
    fn extraction_is_idempotent() {
        let first = extract_section(DOC, "intent");
        let second = extract_section(DOC, "intent");
        assert_eq!(first, second);
    }

    #[test]
    fn section_closes_on_shallower_heading_too() {
        let doc = "\
## 意图

内容一

# 顶层标题

其他内容
";
        let section = extract_section(doc, "intent");
        assert_eq!(section, "## 意图\n\n内容一\n");
    }
}
