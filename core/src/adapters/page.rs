//! HTML template render target
//!
//! Holds an HTML document in memory and replaces the inner HTML of elements
//! addressed by their `id` attribute. Used to bake the newsletter page at
//! build time.

use std::io::{Cursor, Write};

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::domain::ports::RenderTarget;
use crate::error::TemplateError;

/// Elements that never have a closing tag in HTML
const VOID_ELEMENTS: &[&[u8]] = &[
    b"area", b"base", b"br", b"col", b"embed", b"hr", b"img", b"input", b"link", b"meta",
    b"source", b"track", b"wbr",
];

/// An HTML document whose containers can be filled by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePage {
    html: String,
}

impl TemplatePage {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn has_container(&self, id: &str) -> bool {
        matches!(replace_inner(&self.html, id, ""), Ok(Some(_)))
    }
}

impl RenderTarget for TemplatePage {
    fn set_content(&mut self, container: &str, html: &str) -> bool {
        match replace_inner(&self.html, container, html) {
            Ok(Some(rewritten)) => {
                self.html = rewritten;
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(container, "Failed to parse page template: {}", e);
                false
            }
        }
    }
}

/// Stream `html` through quick-xml, swapping the children of the first
/// element with `id` for `content`.
///
/// Returns `None` when no element carries that id.
fn replace_inner(html: &str, id: &str, content: &str) -> Result<Option<String>, TemplateError> {
    let mut reader = Reader::from_str(html);
    // HTML void elements (`<br>`, `<img>`) have no end tag
    reader.config_mut().check_end_names = false;
    let mut writer = Writer::new(Cursor::new(Vec::with_capacity(html.len() + content.len())));
    let mut found = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(elem)) if !found && has_id(&elem, id) => {
                found = true;
                writer.write_event(Event::Start(elem))?;
                writer.get_mut().write_all(content.as_bytes())?;
                skip_children(&mut reader, &mut writer)?;
            }
            Ok(Event::Eof) => break,
            Ok(event) => writer.write_event(event)?,
            Err(e) => {
                return Err(TemplateError::Parse(format!(
                    "at position {}: {:?}",
                    reader.error_position(),
                    e
                )))
            }
        }
    }

    if !found {
        return Ok(None);
    }

    let bytes = writer.into_inner().into_inner();
    Ok(Some(String::from_utf8(bytes)?))
}

/// Drop everything up to the end tag matching the element just written,
/// then write that end tag. Comments and text never change the depth.
fn skip_children(
    reader: &mut Reader<&[u8]>,
    writer: &mut Writer<Cursor<Vec<u8>>>,
) -> Result<(), TemplateError> {
    let mut depth = 1usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(elem)) => {
                if !is_void(&elem) {
                    depth += 1;
                }
            }
            Ok(Event::End(elem)) => {
                depth -= 1;
                if depth == 0 {
                    writer.write_event(Event::End(elem))?;
                    return Ok(());
                }
            }
            Ok(Event::Eof) => {
                return Err(TemplateError::Parse(
                    "at end of input: container is never closed".to_string(),
                ))
            }
            Ok(_) => {}
            Err(e) => {
                return Err(TemplateError::Parse(format!(
                    "at position {}: {:?}",
                    reader.error_position(),
                    e
                )))
            }
        }
    }
}

fn has_id(elem: &BytesStart<'_>, id: &str) -> bool {
    elem.html_attributes()
        .flatten()
        .any(|attr| attr.key.as_ref() == b"id" && &*attr.value == id.as_bytes())
}

fn is_void(elem: &BytesStart<'_>) -> bool {
    let name = elem.name();
    VOID_ELEMENTS
        .iter()
        .any(|void| name.as_ref().eq_ignore_ascii_case(void))
}
