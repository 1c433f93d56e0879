//! # Dotted Paths
//!
//! Users address a node by a dotted path from the catalog root. Each segment is
//! either a position number (`2`, 1-based, in menu order) or a literal entry name
//! (`Flask – Basic Setup`). Both kinds mix freely: `2.minimal Flask application`.
//!
//! Parsing happens once, up front, when a [`DottedPath`] is built from text. A segment made
//! only of ASCII digits is always a position; anything else is a name. Names that
//! contain a `.` cannot be addressed by name, only by position.
//!
//! [`resolve`] then walks the tree segment by segment. It never mutates the
//! catalog and either returns the node the path points at, category or snippet,
//! or a [`ResolutionError`] saying why the walk stopped.

use crate::catalog::CatalogNode;
use crate::error::ResolutionError;
use std::fmt;
use std::str::FromStr;

pub const SEPARATOR: char = '.';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// 1-based position among siblings.
    Index(usize),
    Name(String),
}

impl From<&str> for PathSegment {
    fn from(s: &str) -> Self {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            // All digits but too large for usize: still a position, just never a valid one.
            let n = s.parse().unwrap_or(usize::MAX);
            return PathSegment::Index(n);
        }
        PathSegment::Name(s.to_string())
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(n) => write!(f, "{}", n),
            PathSegment::Name(name) => write!(f, "{}", name),
        }
    }
}

/// A parsed sequence of segments. Text input always yields at least one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DottedPath {
    segments: Vec<PathSegment>,
}

impl DottedPath {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl From<&str> for DottedPath {
    fn from(s: &str) -> Self {
        Self {
            segments: s.split(SEPARATOR).map(PathSegment::from).collect(),
        }
    }
}

impl FromStr for DottedPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for DottedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// The node a path landed on, plus the name it is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    /// `None` only for an empty path, which stays at the root.
    pub name: Option<&'a str>,
    pub node: &'a CatalogNode,
}

/// Walks `path` from `root` and returns the node it addresses.
pub fn resolve<'a>(
    root: &'a CatalogNode,
    path: &DottedPath,
) -> Result<&'a CatalogNode, ResolutionError> {
    resolve_entry(root, path).map(|resolved| resolved.node)
}

/// Like [`resolve`], but also reports the entry name of the final node.
pub fn resolve_entry<'a>(
    root: &'a CatalogNode,
    path: &DottedPath,
) -> Result<Resolved<'a>, ResolutionError> {
    let mut current = Resolved {
        name: None,
        node: root,
    };

    for (i, segment) in path.segments().iter().enumerate() {
        let CatalogNode::Interior(category) = current.node else {
            return Err(ResolutionError::NotContainer { segment: i + 1 });
        };

        let entry = match segment {
            PathSegment::Index(n) => {
                category
                    .nth(*n)
                    .ok_or(ResolutionError::IndexOutOfRange {
                        index: *n,
                        len: category.len(),
                    })?
            }
            PathSegment::Name(name) => {
                category
                    .get(name)
                    .ok_or_else(|| ResolutionError::NameNotFound { name: name.clone() })?
            }
        };

        current = Resolved {
            name: Some(entry.name()),
            node: entry.node(),
        };
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};

    fn parse(s: &str) -> DottedPath {
        DottedPath::from(s)
    }

    fn sample() -> Catalog {
        Catalog::from_json_str(
            r#"{
                "A": {"x1": "  hello  "},
                "B": {},
                "C": {"inner": {"deep": "bottom"}, "flat": "top"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_segment_parsing() {
        assert_eq!(parse("2").segments(), &[PathSegment::Index(2)]);
        assert_eq!(parse("0").segments(), &[PathSegment::Index(0)]);
        assert_eq!(
            parse("2.1").segments(),
            &[PathSegment::Index(2), PathSegment::Index(1)]
        );
        assert_eq!(
            parse("A.x1").segments(),
            &[
                PathSegment::Name("A".to_string()),
                PathSegment::Name("x1".to_string())
            ]
        );
        assert_eq!(
            parse("3.flat").segments(),
            &[PathSegment::Index(3), PathSegment::Name("flat".to_string())]
        );
    }

    #[test]
    fn test_signed_and_mixed_segments_are_names() {
        assert_eq!(parse("-1").segments(), &[PathSegment::Name("-1".into())]);
        assert_eq!(parse("+1").segments(), &[PathSegment::Name("+1".into())]);
        assert_eq!(parse("1a").segments(), &[PathSegment::Name("1a".into())]);
        assert_eq!(parse(" 1").segments(), &[PathSegment::Name(" 1".into())]);
    }

    #[test]
    fn test_empty_segments_are_empty_names() {
        assert_eq!(
            parse("1..2").segments(),
            &[
                PathSegment::Index(1),
                PathSegment::Name(String::new()),
                PathSegment::Index(2)
            ]
        );
    }

    #[test]
    fn test_huge_index_is_still_an_index() {
        let path = parse("99999999999999999999999999");
        assert_eq!(path.segments(), &[PathSegment::Index(usize::MAX)]);
    }

    #[test]
    fn test_display_round_trips_text() {
        let text = "2.minimal Flask application";
        assert_eq!(parse(text).to_string(), text);
        assert_eq!(text.parse::<DottedPath>().unwrap(), parse(text));
    }

    #[test]
    fn test_resolve_by_position_and_by_name() {
        let catalog = sample();
        let by_index = resolve(catalog.root(), &parse("1.1")).unwrap();
        let by_name = resolve(catalog.root(), &parse("A.x1")).unwrap();
        assert_eq!(by_index, by_name);
        assert_eq!(by_index.as_snippet().unwrap().body(), "  hello  ");
        assert_eq!(by_index.as_snippet().unwrap().display_text(), "hello");
    }

    #[test]
    fn test_resolve_mixed_path() {
        let catalog = sample();
        let node = resolve(catalog.root(), &parse("C.1.deep")).unwrap();
        assert_eq!(node.as_snippet().unwrap().body(), "bottom");
        let node = resolve(catalog.root(), &parse("3.flat")).unwrap();
        assert_eq!(node.as_snippet().unwrap().body(), "top");
    }

    #[test]
    fn test_resolve_category_is_returned_as_is() {
        let catalog = sample();
        let resolved = resolve_entry(catalog.root(), &parse("3.1")).unwrap();
        assert_eq!(resolved.name, Some("inner"));
        assert!(resolved.node.is_category());
    }

    #[test]
    fn test_resolve_entry_reports_name_for_numeric_path() {
        let catalog = sample();
        let resolved = resolve_entry(catalog.root(), &parse("1.1")).unwrap();
        assert_eq!(resolved.name, Some("x1"));
    }

    #[test]
    fn test_zero_and_past_end_are_out_of_range() {
        let catalog = sample();
        let count = catalog.categories().unwrap().len();
        assert_eq!(
            resolve(catalog.root(), &parse("0")),
            Err(ResolutionError::IndexOutOfRange {
                index: 0,
                len: count
            })
        );
        assert_eq!(
            resolve(catalog.root(), &parse(&(count + 1).to_string())),
            Err(ResolutionError::IndexOutOfRange {
                index: count + 1,
                len: count
            })
        );
        assert_eq!(
            resolve(catalog.root(), &parse("1.2")),
            Err(ResolutionError::IndexOutOfRange { index: 2, len: 1 })
        );
    }

    #[test]
    fn test_empty_category_has_no_positions() {
        let catalog = sample();
        assert_eq!(
            resolve(catalog.root(), &parse("2.1")),
            Err(ResolutionError::IndexOutOfRange { index: 1, len: 0 })
        );
    }

    #[test]
    fn test_over_depth_is_not_container() {
        let catalog = sample();
        assert_eq!(
            resolve(catalog.root(), &parse("1.1.1")),
            Err(ResolutionError::NotContainer { segment: 3 })
        );
        assert_eq!(
            resolve(catalog.root(), &parse("A.x1.anything.else")),
            Err(ResolutionError::NotContainer { segment: 3 })
        );
    }

    #[test]
    fn test_unknown_name() {
        let catalog = sample();
        assert_eq!(
            resolve(catalog.root(), &parse("a")),
            Err(ResolutionError::NameNotFound {
                name: "a".to_string()
            })
        );
        assert_eq!(
            resolve(catalog.root(), &parse("1..1")),
            Err(ResolutionError::NameNotFound {
                name: String::new()
            })
        );
    }

    #[test]
    fn test_resolve_from_leaf_root() {
        let leaf = CatalogNode::leaf("text");
        assert_eq!(
            resolve(&leaf, &parse("1")),
            Err(ResolutionError::NotContainer { segment: 1 })
        );
    }

    #[test]
    fn test_empty_path_stays_at_root() {
        let root = CatalogNode::Interior(Category::new());
        let resolved = resolve_entry(&root, &DottedPath::new(vec![])).unwrap();
        assert_eq!(resolved.name, None);
        assert_eq!(resolved.node, &root);
    }

    #[test]
    fn test_every_leaf_round_trips_by_position_and_name() {
        let catalog = Catalog::builtin().unwrap();
        for (i, category) in catalog.categories().unwrap().entries().iter().enumerate() {
            let Some(children) = category.node().as_category() else {
                continue;
            };
            for (j, leaf) in children.entries().iter().enumerate() {
                let numeric = parse(&format!("{}.{}", i + 1, j + 1));
                let named = DottedPath::new(vec![
                    PathSegment::Name(category.name().to_string()),
                    PathSegment::Name(leaf.name().to_string()),
                ]);
                let a = resolve(catalog.root(), &numeric).unwrap();
                let b = resolve(catalog.root(), &named).unwrap();
                assert!(std::ptr::eq(a, b));
                assert!(std::ptr::eq(a, leaf.node()));
            }
        }
    }
}
