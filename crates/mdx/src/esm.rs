//! ESM (`import` / `export`) blocks inside an MDX body.
//!
//! An ESM block starts at the beginning of a block (first line, or after a
//! blank line) with a line beginning `import` or `export`, and runs until the
//! next blank line, unless an export value is still open (an unclosed JSON
//! object or array), in which case blank lines are part of the value. Lines
//! inside fenced code are never ESM. Exports are limited to
//! `export const NAME = <JSON value>` (also `let` / `var`): values are data
//! here, not executable code.

use crate::error::{CompileError, Result};

/// A statement found in an ESM block.
#[derive(Debug, Clone, PartialEq)]
pub enum EsmStatement {
    Import { source: String },
    Export { name: String, value: serde_json::Value },
}

/// Removes ESM blocks from `body` and parses their statements.
///
/// Returns the statements in source order together with the remaining
/// markdown.
pub fn extract_esm(body: &str) -> Result<(Vec<EsmStatement>, String)> {
    let mut statements = Vec::new();
    let mut markdown: Vec<&str> = Vec::new();
    let mut block: Vec<&str> = Vec::new();
    let mut fence: Option<(char, usize)> = None;
    let mut prev_blank = true;

    for line in body.lines() {
        if let Some(open) = fence {
            if closes_fence(line, open) {
                fence = None;
            }
            markdown.push(line);
            prev_blank = false;
            continue;
        }

        if !block.is_empty() {
            if line.trim().is_empty() && !awaits_more_input(&block) {
                parse_block(&block, &mut statements)?;
                block.clear();
                markdown.push(line);
                prev_blank = true;
            } else {
                block.push(line);
            }
            continue;
        }

        if prev_blank && is_esm_start(line) {
            block.push(line);
            continue;
        }

        if let Some(open) = fence_marker(line) {
            fence = Some(open);
        }
        prev_blank = line.trim().is_empty();
        markdown.push(line);
    }

    if !block.is_empty() {
        parse_block(&block, &mut statements)?;
    }

    let mut markdown = markdown.join("\n");
    if body.ends_with('\n') {
        markdown.push('\n');
    }
    Ok((statements, markdown))
}

fn is_esm_start(line: &str) -> bool {
    ["import", "export"].iter().any(|keyword| {
        line.strip_prefix(keyword).is_some_and(|rest| {
            rest.starts_with(|c: char| c.is_whitespace() || matches!(c, '{' | '*' | '"' | '\''))
        })
    })
}

fn fence_marker(line: &str) -> Option<(char, usize)> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let trimmed = &line[indent..];
    let marker = trimmed.chars().next().filter(|c| matches!(c, '`' | '~'))?;
    let count = trimmed.chars().take_while(|c| *c == marker).count();
    (count >= 3).then_some((marker, count))
}

fn closes_fence(line: &str, (marker, count): (char, usize)) -> bool {
    let trimmed = line.trim();
    fence_marker(line)
        .is_some_and(|(m, n)| m == marker && n >= count && trimmed.chars().all(|c| c == marker))
}

/// Splits a block into statements (each starting at an `import`/`export`
/// line) and parses them.
fn parse_block(block: &[&str], statements: &mut Vec<EsmStatement>) -> Result<()> {
    let mut current: Vec<&str> = Vec::new();
    for line in block {
        if is_esm_start(line) && !current.is_empty() {
            statements.push(parse_statement(&current.join("\n"))?);
            current.clear();
        }
        current.push(line);
    }
    if !current.is_empty() {
        statements.push(parse_statement(&current.join("\n"))?);
    }
    Ok(())
}

fn parse_statement(statement: &str) -> Result<EsmStatement> {
    let statement = statement.trim().trim_end_matches(';').trim_end();

    if let Some(rest) = statement.strip_prefix("import") {
        return parse_import(rest)
            .map(|source| EsmStatement::Import { source })
            .ok_or_else(|| CompileError::InvalidImport(first_line(statement)));
    }

    let Some((name, value)) = export_declaration(statement) else {
        return Err(CompileError::UnsupportedExport(first_line(statement)));
    };

    let value = serde_json::from_str(value).map_err(|e| CompileError::InvalidExport {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    Ok(EsmStatement::Export {
        name: name.to_string(),
        value,
    })
}

/// `NAME` and the raw value of `export const|let|var NAME = value`.
fn export_declaration(statement: &str) -> Option<(&str, &str)> {
    let rest = statement.strip_prefix("export")?.trim_start();
    let declaration = ["const ", "let ", "var "]
        .iter()
        .find_map(|keyword| rest.strip_prefix(keyword))?;
    let (name, value) = declaration.split_once('=')?;
    let name = name.trim();
    is_identifier(name).then_some((name, value.trim()))
}

/// Whether the last statement of `block` is an export whose JSON value is
/// cut off, so a blank line does not end the block.
fn awaits_more_input(block: &[&str]) -> bool {
    let start = block.iter().rposition(|line| is_esm_start(line)).unwrap_or(0);
    let statement = block[start..].join("\n");
    let statement = statement.trim().trim_end_matches(';').trim_end();

    export_declaration(statement).is_some_and(|(_, value)| {
        serde_json::from_str::<serde_json::Value>(value).is_err_and(|e| e.is_eof())
    })
}

/// Module specifier of an import: the last quoted string.
fn parse_import(rest: &str) -> Option<String> {
    let rest = rest.trim_end();
    let quote = rest.chars().last().filter(|c| matches!(c, '"' | '\''))?;
    let inner = &rest[..rest.len() - 1];
    let start = inner.rfind(quote)?;
    let source = &inner[start + 1..];
    (!source.is_empty()).then(|| source.to_string())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn first_line(statement: &str) -> String {
    statement.lines().next().unwrap_or_default().to_string()
}
