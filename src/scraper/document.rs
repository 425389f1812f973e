//! Queryable HTML documents
//!
//! Extractors only talk to [`Document`] and [`Node`], never to the
//! underlying parser, so fixture HTML can be fed straight into them.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page
pub struct Document {
    html: Html,
}

/// An element inside a [`Document`]
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

/// Parses a CSS selector, logging and discarding invalid ones
fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::warn!("Invalid CSS selector '{}': {:?}", css, e);
            None
        }
    }
}

/// Collapses an element's text nodes into one trimmed string
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

impl Document {
    /// Parses a full HTML document
    ///
    /// Parsing never fails; broken markup degrades to whatever tree
    /// html5ever recovers.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// All elements matching `css`, in document order
    pub fn select(&self, css: &str) -> Vec<Node<'_>> {
        let Some(selector) = parse_selector(css) else {
            return Vec::new();
        };
        let nodes = self
            .html
            .select(&selector)
            .map(|element| Node { element })
            .collect::<Vec<_>>();
        nodes
    }

    /// The first element matching `css`
    pub fn first(&self, css: &str) -> Option<Node<'_>> {
        let selector = parse_selector(css)?;
        let node = self
            .html
            .select(&selector)
            .next()
            .map(|element| Node { element });
        node
    }

    /// Whether anything matches `css`
    pub fn exists(&self, css: &str) -> bool {
        self.first(css).is_some()
    }

    /// Trimmed text of the first match, or `""`
    pub fn text_of(&self, css: &str) -> String {
        self.first(css).map(|node| node.text()).unwrap_or_default()
    }

    /// Text of every match concatenated in document order, then trimmed
    pub fn joined_text_of(&self, css: &str) -> String {
        self.select(css)
            .iter()
            .flat_map(|node| node.element.text())
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// First non-empty value among `names` on the first match of `css`
    pub fn first_attr_of(&self, css: &str, names: &[&str]) -> Option<String> {
        self.first(css)
            .and_then(|node| node.first_attr(names))
            .map(str::to_string)
    }
}

impl<'a> Node<'a> {
    /// Descendants matching `css`, in document order
    pub fn select(&self, css: &str) -> Vec<Node<'a>> {
        let Some(selector) = parse_selector(css) else {
            return Vec::new();
        };
        let nodes = self
            .element
            .select(&selector)
            .map(|element| Node { element })
            .collect::<Vec<_>>();
        nodes
    }

    /// The first descendant matching `css`
    pub fn first(&self, css: &str) -> Option<Node<'a>> {
        let selector = parse_selector(css)?;
        let node = self
            .element
            .select(&selector)
            .next()
            .map(|element| Node { element });
        node
    }

    /// Trimmed text content
    pub fn text(&self) -> String {
        element_text(self.element)
    }

    /// Trimmed text of the first descendant matching `css`, or `""`
    pub fn text_of(&self, css: &str) -> String {
        self.first(css).map(|node| node.text()).unwrap_or_default()
    }

    /// A named attribute
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// A named attribute of the first descendant matching `css`
    pub fn attr_of(&self, css: &str, name: &str) -> Option<&'a str> {
        self.first(css).and_then(|node| node.attr(name))
    }

    /// First non-empty value among the named attributes
    ///
    /// Used for lazy-loaded images: `["data-src", "src"]`.
    pub fn first_attr(&self, names: &[&str]) -> Option<&'a str> {
        names
            .iter()
            .filter_map(|name| self.attr(name))
            .find(|value| !value.is_empty())
    }

    /// Whether the element carries `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.element.value().classes().any(|c| c == class)
    }

    /// The parent element, if any
    pub fn parent(&self) -> Option<Node<'a>> {
        self.element
            .parent()
            .and_then(ElementRef::wrap)
            .map(|element| Node { element })
    }
}

/// Image source with the lazy-load fallback: `data-src` wins over `src`
pub fn poster_of(node: &Node<'_>, css: &str) -> Option<String> {
    node.first(css)
        .and_then(|img| img.first_attr(&["data-src", "src"]))
        .map(str::to_string)
}
