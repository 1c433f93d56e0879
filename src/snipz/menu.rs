//! # Menu Rendering
//!
//! Turns a [`Category`] into the numbered, indented listing users pick from:
//!
//! ```text
//! 1) Command Line Arguments/
//!   1.1) basic argparse usage
//!   1.2) argparse with subcommands
//! 2) Flask – Basic Setup/
//!   2.1) minimal Flask application
//! ```
//!
//! Categories end in `/` and are expanded in place; snippets are not. The
//! number printed before `)` is exactly the dotted path that selects the line,
//! so the menu doubles as documentation for [`crate::path::resolve`].
//!
//! Rendering is lazy: [`MenuLines`] walks the tree with an explicit stack and
//! yields one [`MenuLine`] per child. Each call to [`render`] starts a fresh walk.

use crate::catalog::{CatalogNode, Category, Entry};
use std::fmt;
use std::iter::Enumerate;
use std::slice::Iter;

const INDENT: &str = "  ";

/// One row of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLine {
    pub depth: usize,
    /// Dotted position path, e.g. `2.1`.
    pub path: String,
    pub name: String,
    pub is_category: bool,
}

impl MenuLine {
    pub fn indent(&self) -> String {
        INDENT.repeat(self.depth)
    }
}

impl fmt::Display for MenuLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}) {}", self.indent(), self.path, self.name)?;
        if self.is_category {
            write!(f, "/")?;
        }
        Ok(())
    }
}

struct Frame<'a> {
    children: Enumerate<Iter<'a, Entry>>,
    depth: usize,
    prefix: String,
}

/// Lazy depth-first walk over a category, children in insertion order.
pub struct MenuLines<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> Iterator for MenuLines<'a> {
    type Item = MenuLine;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some((i, entry)) = frame.children.next() else {
                self.stack.pop();
                continue;
            };

            let line = MenuLine {
                depth: frame.depth,
                path: format!("{}{}", frame.prefix, i + 1),
                name: entry.name().to_string(),
                is_category: entry.node().is_category(),
            };

            if let CatalogNode::Interior(child) = entry.node() {
                let nested = Frame {
                    children: child.entries().iter().enumerate(),
                    depth: line.depth + 1,
                    prefix: format!("{}.", line.path),
                };
                self.stack.push(nested);
            }

            return Some(line);
        }
    }
}

/// Renders `category` from the top: no indent, no prefix.
pub fn render(category: &Category) -> MenuLines<'_> {
    render_at(category, 0, "")
}

/// Renders `category` as if it sat `depth` levels down under `prefix`
/// (e.g. `"2."`), so the printed numbers stay valid from the catalog root.
pub fn render_at<'a>(category: &'a Category, depth: usize, prefix: &str) -> MenuLines<'a> {
    MenuLines {
        stack: vec![Frame {
            children: category.entries().iter().enumerate(),
            depth,
            prefix: prefix.to_string(),
        }],
    }
}

/// Renders any node. A snippet has no menu, so it yields nothing.
pub fn render_node(node: &CatalogNode) -> MenuLines<'_> {
    match node {
        CatalogNode::Interior(category) => render(category),
        CatalogNode::Leaf(_) => MenuLines { stack: Vec::new() },
    }
}
