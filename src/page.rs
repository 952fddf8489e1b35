//! Page materialization: full replacement of element content by id.
//!
//! The host page contract is two identifiable elements: a `grid` container
//! receiving card markup and an `updated` status element receiving the
//! timestamp line. Replacement is whole-content, not a diff, so rendering
//! into an already-rendered page yields the same result.

use thiserror::Error;

use crate::cards::escape;

pub const GRID_ID: &str = "grid";
pub const STATUS_ID: &str = "updated";

#[derive(Debug, Error)]
pub enum PageError {
    /// The grid container is a hard precondition of every render path.
    #[error("page has no element with id=\"{0}\"")]
    MissingContainer(&'static str),
    #[error("element with id=\"{0}\" is never closed")]
    UnclosedElement(&'static str),
}

/// An HTML page with the two dashboard slots.
///
/// The container element must be a normal open/close element (not
/// self-closing). Nested elements of the same tag name inside the container
/// are handled, so a grid already holding card `<div>`s replaces cleanly.
#[derive(Debug, Clone)]
pub struct Page {
    html: String,
}

impl Page {
    /// Wraps a page, verifying the grid container exists up front.
    pub fn parse(html: impl Into<String>) -> Result<Self, PageError> {
        let page = Page { html: html.into() };
        page.content_range(GRID_ID)?;
        Ok(page)
    }

    /// Replaces the container's children with the given markup.
    pub fn set_grid(&mut self, markup: &str) -> Result<(), PageError> {
        let (start, end) = self.content_range(GRID_ID)?;
        self.html.replace_range(start..end, markup);
        Ok(())
    }

    /// Replaces the status element's text. Returns false (and changes
    /// nothing) when the page carries no status element.
    pub fn set_status(&mut self, line: &str) -> Result<bool, PageError> {
        match self.content_range(STATUS_ID) {
            Ok((start, end)) => {
                self.html.replace_range(start..end, &escape(line));
                Ok(true)
            }
            Err(PageError::MissingContainer(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Byte range of the element's inner content, matching the closing tag
    /// by depth so same-named children do not truncate the range.
    fn content_range(&self, id: &'static str) -> Result<(usize, usize), PageError> {
        let html = &self.html;
        let marker = format!("id=\"{}\"", id);
        let attr_at = html.find(&marker).ok_or(PageError::MissingContainer(id))?;
        let tag_open = html[..attr_at]
            .rfind('<')
            .ok_or(PageError::MissingContainer(id))?;
        let name: String = html[tag_open + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        let content_start = attr_at
            + html[attr_at..]
                .find('>')
                .ok_or(PageError::UnclosedElement(id))?
            + 1;

        let open = format!("<{}", name);
        let close = format!("</{}", name);
        // An occurrence only counts as a tag when the name ends there
        // ("<div" must not match "<division").
        let find_tag = |rest: &str, tag: &str, enders: &[char]| {
            let mut from = 0;
            while let Some(i) = rest[from..].find(tag) {
                let at = from + i;
                let after = rest[at + tag.len()..].chars().next();
                if after.map_or(false, |c| enders.contains(&c) || c.is_ascii_whitespace()) {
                    return Some(at);
                }
                from = at + tag.len();
            }
            None
        };

        let mut depth = 1usize;
        let mut at = content_start;
        while at < html.len() {
            let rest = &html[at..];
            let next_open = find_tag(rest, &open, &['>', '/']);
            let next_close = find_tag(rest, &close, &['>']);
            match (next_open, next_close) {
                (Some(o), Some(c)) if o < c => {
                    depth += 1;
                    at += o + open.len();
                }
                (_, Some(c)) => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok((content_start, at + c));
                    }
                    at += c + close.len();
                }
                _ => break,
            }
        }
        Err(PageError::UnclosedElement(id))
    }
}
