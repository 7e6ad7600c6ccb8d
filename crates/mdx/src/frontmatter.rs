//! YAML frontmatter delimited by `---` lines.

use folio_core::content::Frontmatter;

use crate::error::{CompileError, Result};

const DELIMITER: &str = "---";

/// Splits `source` into its raw frontmatter and body.
///
/// The frontmatter must open on the very first line; a source without an
/// opening delimiter has no frontmatter. An opening delimiter without a
/// closing one is an error.
pub fn split_frontmatter(source: &str) -> Result<(Option<&str>, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let (first, rest) = match source.find('\n') {
        Some(idx) => (&source[..idx], &source[idx + 1..]),
        None => (source, ""),
    };
    if first.trim_end() != DELIMITER {
        return Ok((None, source));
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return Ok((Some(&rest[..offset]), &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(CompileError::UnterminatedFrontmatter)
}

/// Parses the frontmatter of `source` and returns it with the body.
pub fn parse_frontmatter(source: &str) -> Result<(Frontmatter, &str)> {
    let (raw, body) = split_frontmatter(source)?;

    let frontmatter = match raw {
        Some(yaml) if !yaml.trim().is_empty() => serde_yaml::from_str(yaml)
            .map_err(|e| CompileError::Frontmatter(e.to_string()))?,
        _ => Frontmatter::default(),
    };

    Ok((frontmatter, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_frontmatter() {
        let (raw, body) = split_frontmatter("---\ntitle: Hi\n---\n# Body\n").unwrap();
        assert_eq!(raw, Some("title: Hi\n"));
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_split_without_frontmatter() {
        let (raw, body) = split_frontmatter("# Just a body\n").unwrap();
        assert_eq!(raw, None);
        assert_eq!(body, "# Just a body\n");
    }

    #[test]
    fn test_split_ignores_dashes_inside_values() {
        let (raw, _) = split_frontmatter("---\ntitle: a --- b\n---\nbody").unwrap();
        assert_eq!(raw, Some("title: a --- b\n"));
    }

    #[test]
    fn test_split_handles_crlf_and_bom() {
        let (raw, body) = split_frontmatter("\u{feff}---\r\ntitle: Hi\r\n---\r\nbody").unwrap();
        assert_eq!(raw, Some("title: Hi\r\n"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_unterminated_frontmatter() {
        assert_eq!(
            split_frontmatter("---\ntitle: Hi\n# Body"),
            Err(CompileError::UnterminatedFrontmatter)
        );
    }

    #[test]
    fn test_parse_frontmatter_fields() {
        let (fm, body) =
            parse_frontmatter("---\ntitle: Hello\nstatus: published\n---\nbody").unwrap();
        assert_eq!(fm.title.as_deref(), Some("Hello"));
        assert!(fm.status.is_published());
        assert_eq!(body, "body");
    }

    #[test]
    fn test_empty_frontmatter_is_default() {
        let (fm, _) = parse_frontmatter("---\n---\nbody").unwrap();
        assert_eq!(fm, Frontmatter::default());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let result = parse_frontmatter("---\ntitle: [unclosed\n---\nbody");
        assert!(matches!(result, Err(CompileError::Frontmatter(_))));
    }
}
