//! HTML rendering: split-pane scaffolding filled with page content.

use crate::error::{Error, Result};
use crate::layout::{build_split_pane, ItemKind};
use crate::model::{Book, PageContent, PageElement, TextBlock};

use super::RenderOptions;

/// Convert a book to HTML.
///
/// Each page becomes a split-pane scaffold with one pane per element, in
/// source order, and every placeholder replaced by the element's markup.
pub fn to_html(book: &Book, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    if options.standalone {
        let lang = html_escape::encode_double_quoted_attribute(&book.metadata.l1);
        let title = html_escape::encode_text(book.primary_title().unwrap_or_default());
        output.push_str("<!DOCTYPE html>\n");
        output.push_str(&format!("<html lang=\"{}\">\n", lang));
        output.push_str("<head>\n<meta charset=\"utf-8\">\n");
        output.push_str(&format!("<title>{}</title>\n", title));
        output.push_str("</head>\n<body>\n");
    }

    for (index, page) in book.pages.iter().enumerate() {
        output.push_str(&render_page(page, index + 1, options)?);
    }

    if options.standalone {
        output.push_str("</body>\n</html>\n");
    }

    Ok(output)
}

/// Render a single page (1-indexed `number`).
pub fn render_page(page: &PageContent, number: usize, options: &RenderOptions) -> Result<String> {
    let kinds: Vec<ItemKind> = page.elements.iter().map(item_kind).collect();
    let scaffold = build_split_pane(&kinds, options.orientation)?;

    let contents: Vec<(ItemKind, String)> = page
        .elements
        .iter()
        .zip(kinds)
        .map(|(element, kind)| (kind, element_html(element, options)))
        .collect();
    let body = fill_placeholders(&scaffold, &contents)?;

    let class = if options.include_layout_class {
        format!("page {}", page.layout)
    } else {
        "page".to_string()
    };
    Ok(format!(
        "<div class=\"{}\" data-page-number=\"{}\">\n{}</div>\n",
        class, number, body
    ))
}

fn item_kind(element: &PageElement) -> ItemKind {
    match element {
        PageElement::Image { .. } => ItemKind::Image,
        PageElement::Text(_) => ItemKind::Text,
    }
}

fn element_html(element: &PageElement, options: &RenderOptions) -> String {
    match element {
        PageElement::Image { src } => {
            let src = format!("{}{}", options.image_path_prefix, src);
            format!(
                "<img src=\"{}\" alt=\"\">",
                html_escape::encode_double_quoted_attribute(&src)
            )
        }
        PageElement::Text(block) => text_block_html(block),
    }
}

fn text_block_html(block: &TextBlock) -> String {
    let mut html = String::from("<div class=\"text-block\">");
    for (lang, content) in block.content.iter() {
        html.push_str(&format!(
            "<div class=\"lang-content\" lang=\"{}\">{}</div>",
            html_escape::encode_double_quoted_attribute(lang),
            content
        ));
    }
    html.push_str("</div>");
    html
}

/// Replace placeholders left to right, one per item, never rescanning
/// content already inserted.
fn fill_placeholders(scaffold: &str, items: &[(ItemKind, String)]) -> Result<String> {
    let mut output = String::with_capacity(scaffold.len());
    let mut rest = scaffold;

    for (kind, html) in items {
        let placeholder = kind.placeholder();
        let Some(pos) = rest.find(&placeholder) else {
            return Err(Error::Render(format!("No placeholder left for {} block", kind)));
        };
        output.push_str(&rest[..pos]);
        output.push_str(html);
        rest = &rest[pos + placeholder.len()..];
    }

    output.push_str(rest);
    Ok(output)
}
