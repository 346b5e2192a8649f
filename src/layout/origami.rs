//! Nested split-pane HTML scaffolding.
//!
//! A sequence of item kinds becomes a right-leaning binary tree of two-pane
//! containers: the first item fills pane one, the remaining items fill pane
//! two, recursively. Each leaf holds a placeholder comment that a renderer
//! later replaces with real content.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Kind of content a pane will hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A text block
    Text,
    /// An image
    Image,
    /// Any other named block kind
    Other(String),
}

impl ItemKind {
    /// Name used in the placeholder comment.
    pub fn name(&self) -> &str {
        match self {
            ItemKind::Text => "text",
            ItemKind::Image => "image",
            ItemKind::Other(name) => name,
        }
    }

    /// Placeholder comment substituted by downstream renderers.
    ///
    /// The literal text is a contract with those renderers and must not
    /// change.
    pub fn placeholder(&self) -> String {
        format!("<!-- {}-block goes here !-->", self.name())
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ItemKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" => Err(Error::Other("Item kind cannot be empty".into())),
            "text" => Ok(ItemKind::Text),
            "image" => Ok(ItemKind::Image),
            other => Ok(ItemKind::Other(other.to_string())),
        }
    }
}

/// Page orientation.
///
/// The CSS split class names the divider's axis, so a landscape page is
/// split `vertical` (side by side) and a portrait page `horizontal`
/// (stacked).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Taller than wide
    #[default]
    Portrait,
    /// Wider than tall
    Landscape,
}

impl Orientation {
    fn split_axis(self) -> &'static str {
        match self {
            Orientation::Portrait => "horizontal",
            Orientation::Landscape => "vertical",
        }
    }

    fn pane_positions(self) -> (&'static str, &'static str) {
        match self {
            Orientation::Portrait => ("top", "bottom"),
            Orientation::Landscape => ("left", "right"),
        }
    }
}

/// Indentation stops growing past this nesting level.
const MAX_INDENT_LEVEL: usize = 16;

/// Build split-pane markup for `items` with the given orientation.
///
/// A single item yields a bare leaf; `n` items yield `n - 1` nested split
/// nodes and `n` leaves. Output size is linear in `n`. Fails with
/// [`Error::EmptyInput`] when `items` is empty.
pub fn build_split_pane(items: &[ItemKind], orientation: Orientation) -> Result<String> {
    let Some((last, splits)) = items.split_last() else {
        return Err(Error::EmptyInput);
    };

    let axis = orientation.split_axis();
    let (first_pos, second_pos) = orientation.pane_positions();
    let mut html = String::new();

    // Open one split per item except the last, descending into pane two.
    for (i, item) in splits.iter().enumerate() {
        let level = 2 * i;
        push_line(
            &mut html,
            level,
            &format!("<div class=\"split-pane {axis}-percent\">"),
        );
        push_line(
            &mut html,
            level + 1,
            &format!("<div class=\"split-pane-component position-{first_pos}\">"),
        );
        write_leaf(&mut html, item, level + 2);
        push_line(&mut html, level + 1, "</div>");
        push_line(
            &mut html,
            level + 1,
            &format!("<div class=\"split-pane-divider {axis}-divider\"></div>"),
        );
        push_line(
            &mut html,
            level + 1,
            &format!("<div class=\"split-pane-component position-{second_pos}\">"),
        );
    }

    write_leaf(&mut html, last, 2 * splits.len());

    for i in (0..splits.len()).rev() {
        push_line(&mut html, 2 * i + 1, "</div>");
        push_line(&mut html, 2 * i, "</div>");
    }

    Ok(html)
}

fn write_leaf(out: &mut String, item: &ItemKind, level: usize) {
    push_line(out, level, "<div class=\"split-pane-component-inner\">");
    push_line(out, level + 1, &item.placeholder());
    push_line(out, level, "</div>");
}

fn push_line(out: &mut String, level: usize, line: &str) {
    for _ in 0..level.min(MAX_INDENT_LEVEL) {
        out.push_str("  ");
    }
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            build_split_pane(&[], Orientation::Portrait),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_single_leaf() {
        let html = build_split_pane(&[ItemKind::Text], Orientation::default()).unwrap();
        assert_eq!(
            html,
            "<div class=\"split-pane-component-inner\">\n  <!-- text-block goes here !-->\n</div>\n"
        );
    }

    #[test]
    fn test_node_and_leaf_counts() {
        let items = vec![ItemKind::Text; 5];
        let html = build_split_pane(&items, Orientation::Portrait).unwrap();
        assert_eq!(html.matches("class=\"split-pane horizontal-percent\"").count(), 4);
        assert_eq!(html.matches("split-pane-component-inner").count(), 5);
        assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
    }

    #[test]
    fn test_indentation_is_capped() {
        let items = vec![ItemKind::Image; 40];
        let html = build_split_pane(&items, Orientation::Portrait).unwrap();
        let widest = html
            .lines()
            .map(|line| line.len() - line.trim_start().len())
            .max()
            .unwrap();
        assert_eq!(widest, 2 * MAX_INDENT_LEVEL);
    }

    #[test]
    fn test_item_kind_parsing() {
        assert_eq!("text".parse::<ItemKind>().unwrap(), ItemKind::Text);
        assert_eq!(" image ".parse::<ItemKind>().unwrap(), ItemKind::Image);
        let caption: ItemKind = "caption".parse().unwrap();
        assert_eq!(caption.placeholder(), "<!-- caption-block goes here !-->");
        assert!("".parse::<ItemKind>().is_err());
    }
}
