//! Thin adapter over [`scraper`] that turns raw HTML plus a CSS selector into text and attribute
//! values.
//!
//! [`Document`] is not `Send`, so it must be built and dropped without crossing an `.await`.
use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractorError;

fn selector(css: &str) -> Result<Selector, ExtractorError> {
    Selector::parse(css)
        .map_err(|err| ExtractorError::parse(format!("invalid selector `{}`: {}", css, err)))
}

/// A parsed HTML document.
pub struct Document(Html);

impl Document {
    pub fn parse(html: &str) -> Self {
        Self(Html::parse_document(html))
    }

    /// All elements matching `css`, in document order.
    pub fn select(&self, css: &str) -> Result<Vec<Node<'_>>, ExtractorError> {
        let sel = selector(css)?;
        Ok(self.0.select(&sel).map(Node).collect())
    }

    pub fn select_first(&self, css: &str) -> Result<Option<Node<'_>>, ExtractorError> {
        let sel = selector(css)?;
        Ok(self.0.select(&sel).next().map(Node))
    }
}

/// A single element inside a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    /// Concatenated text of the element and all its descendants.
    pub fn text(&self) -> String {
        self.0.text().collect()
    }

    pub fn select(&self, css: &str) -> Result<Vec<Node<'a>>, ExtractorError> {
        let sel = selector(css)?;
        Ok(self.0.select(&sel).map(Node).collect())
    }

    pub fn select_first(&self, css: &str) -> Result<Option<Node<'a>>, ExtractorError> {
        let sel = selector(css)?;
        Ok(self.0.select(&sel).next().map(Node))
    }
}

/// Value of `attr` on every matching element that carries it.
pub fn select_attr(html: &str, css: &str, attr: &str) -> Result<Vec<String>, ExtractorError> {
    let doc = Document::parse(html);
    let nodes = doc.select(css)?;
    Ok(nodes
        .iter()
        .filter_map(|n| n.attr(attr))
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <ul>
            <li class="a"> first </li>
            <li class="a"><b>sec</b>ond</li>
            <li class="b" data-x="1">third</li>
        </ul>
    "#;

    #[test]
    fn text_includes_descendants() {
        let doc = Document::parse(PAGE);
        let texts: Vec<String> = doc
            .select("li.a")
            .unwrap()
            .iter()
            .map(|n| n.text().trim().to_string())
            .collect();
        assert_eq!(texts, ["first", "second"]);
    }

    #[test]
    fn attributes_are_skipped_when_absent() {
        assert_eq!(select_attr(PAGE, "li", "data-x").unwrap(), ["1"]);
    }

    #[test]
    fn nested_selection() {
        let doc = Document::parse(PAGE);
        let ul = doc.select_first("ul").unwrap().unwrap();
        assert_eq!(ul.select("li").unwrap().len(), 3);
        assert!(ul.select_first("li.c").unwrap().is_none());
    }

    #[test]
    fn broken_selector_is_a_parse_error() {
        assert!(select_attr(PAGE, "li[", "data-x").unwrap_err().is_parse());
    }
}
