//! Streaming XML query engine.
//!
//! For documents that are already shaped like the receiver vocabulary
//! (`<weather><temperature>12°C</temperature><forecast>...`). Every element
//! is replayed as-is; nothing is buffered beyond the text of the element
//! currently being read.

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;

use crate::{EventSink, QueryEngine, QueryError};

/// Query engine that streams every XML element straight to the sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlEngine;

fn xml_error(e: impl std::fmt::Display) -> QueryError {
    QueryError::Xml(e.to_string())
}

/// Sends any buffered text to the sink before the element stack changes.
fn flush_text(text: &mut String, sink: &mut dyn EventSink) {
    if !text.trim().is_empty() {
        sink.text_value(text);
    }
    text.clear();
}

impl QueryEngine for XmlEngine {
    fn evaluate(&self, document: &[u8], sink: &mut dyn EventSink) -> Result<(), QueryError> {
        let mut reader = Reader::from_reader(document);
        let mut buf = Vec::new();
        let mut text = String::new();

        loop {
            match reader.read_event_into(&mut buf).map_err(xml_error)? {
                Event::Start(e) => {
                    flush_text(&mut text, sink);
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    sink.enter_element(&name);
                }
                Event::Empty(e) => {
                    flush_text(&mut text, sink);
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    sink.enter_element(&name);
                    sink.exit_element();
                }
                Event::End(_) => {
                    flush_text(&mut text, sink);
                    sink.exit_element();
                }
                Event::Text(e) => text.push_str(&e.decode().map_err(xml_error)?),
                Event::CData(e) => text.push_str(&e.decode().map_err(xml_error)?),
                Event::GeneralRef(e) => {
                    if let Some(ch) = e.resolve_char_ref().map_err(xml_error)? {
                        text.push(ch);
                    } else {
                        let name = e.decode().map_err(xml_error)?;
                        match resolve_predefined_entity(&name) {
                            Some(value) => text.push_str(value),
                            None => log::debug!("Dropping unknown entity &{name};"),
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        flush_text(&mut text, sink);
        Ok(())
    }
}
