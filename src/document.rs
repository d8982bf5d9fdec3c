//! A small query layer over `scraper` so extractors read like
//! "first `div.author-link`" instead of juggling `Selector` results.

use log::warn;
use scraper::{ElementRef, Html, Selector};

/// Parses a CSS selector, logging and returning `None` when it is invalid.
pub fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            warn!("Invalid selector '{}': {:?}", css, e);
            None
        }
    }
}

/// Anything that can be searched for descendant elements.
///
/// Implemented for `&Html` and `ElementRef` by value, so results borrow the parsed
/// document rather than the handle they were found through.
pub trait Query<'a>: Sized {
    fn find_all(self, css: &str) -> Vec<ElementRef<'a>>;

    fn find_first(self, css: &str) -> Option<ElementRef<'a>> {
        self.find_all(css).into_iter().next()
    }
}

impl<'a> Query<'a> for &'a Html {
    fn find_all(self, css: &str) -> Vec<ElementRef<'a>> {
        match selector(css) {
            Some(selector) => self.select(&selector).collect(),
            None => Vec::new(),
        }
    }
}

impl<'a> Query<'a> for ElementRef<'a> {
    fn find_all(self, css: &str) -> Vec<ElementRef<'a>> {
        match selector(css) {
            Some(selector) => self.select(&selector).collect(),
            None => Vec::new(),
        }
    }
}

/// Every text node trimmed, empties dropped, joined without a separator.
pub fn stripped_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Text nodes concatenated as written, with every whitespace run collapsed to a
/// single space. Keeps "the <a>oil</a> in" readable as "the oil in".
pub fn collapsed_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// The element's text exactly as displayed, trimmed at both ends.
pub fn full_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text nodes that are direct children of the element, untrimmed.
pub fn own_text_nodes<'a>(element: &ElementRef<'a>) -> Vec<&'a str> {
    element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
        .collect()
}
