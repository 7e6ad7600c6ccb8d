//! Source to [`CompiledContent`].

use std::collections::BTreeMap;

use folio_core::content::Frontmatter;
use pulldown_cmark::Options;
use serde::Serialize;

use crate::{
    error::{CompileError, Result},
    esm::{extract_esm, EsmStatement},
    frontmatter::parse_frontmatter,
    render::MdxComponent,
};

/// A compiled MDX source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledContent {
    pub frontmatter: Frontmatter,
    /// Markdown body with ESM blocks removed.
    pub code: String,
    /// Module specifiers of `import` statements, in source order.
    pub imports: Vec<String>,
    /// Named exports (`export const NAME = ...`).
    pub exports: BTreeMap<String, serde_json::Value>,
    #[serde(skip)]
    options: Options,
}

impl CompiledContent {
    /// A named export's value.
    pub fn export(&self, name: &str) -> Option<&serde_json::Value> {
        self.exports.get(name)
    }

    /// The body as a renderable component.
    pub fn component(&self) -> MdxComponent<'_> {
        MdxComponent::new(&self.code, self.options)
    }
}

/// Compiles MDX sources.
///
/// Stateless; one compiler can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct MdxCompiler {
    options: Options,
}

impl Default for MdxCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl MdxCompiler {
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_HEADING_ATTRIBUTES,
        }
    }

    /// Parses frontmatter and ESM statements out of `source`.
    pub fn compile(&self, source: &str) -> Result<CompiledContent> {
        let (frontmatter, body) = parse_frontmatter(source)?;
        let (statements, code) = extract_esm(body)?;

        let mut imports = Vec::new();
        let mut exports = BTreeMap::new();
        for statement in statements {
            match statement {
                EsmStatement::Import { source } => imports.push(source),
                EsmStatement::Export { name, value } => {
                    if exports.contains_key(&name) {
                        return Err(CompileError::DuplicateExport(name));
                    }
                    exports.insert(name, value);
                }
            }
        }

        Ok(CompiledContent {
            frontmatter,
            code,
            imports,
            exports,
            options: self.options,
        })
    }

    /// A renderable component for an already compiled body.
    pub fn component<'a>(&self, code: &'a str) -> MdxComponent<'a> {
        MdxComponent::new(code, self.options)
    }
}
