//! Author XML feed reader.
//!
//! Two layouts share the `<Author>` element and differ only in child names:
//!
//! - training-data files: `<Authors><Author><FamilyName/><GivenName/><Initials/></Author></Authors>`
//! - PubMed efetch responses: `...<AuthorList><Author><LastName/><ForeName/><Initials/></Author>`

use crate::RawNamePair;
use crate::error::{FeedError, FeedFormat};
use quick_xml::Reader;
use quick_xml::events::Event;
use quick_xml::name::QName;
use std::io::BufRead;

/// Which name field a child element of `<Author>` fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameField {
    Given,
    Family,
}

impl NameField {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"GivenName" | b"ForeName" => Some(NameField::Given),
            b"FamilyName" | b"LastName" => Some(NameField::Family),
            _ => None,
        }
    }
}

/// Convert buffer position to approximate line number
fn buffer_position_to_line_number(content: &str, pos: usize) -> usize {
    if pos >= content.len() {
        return content.lines().count();
    }
    content[..pos].lines().count().max(1)
}

fn syntax_error(content: &str, pos: usize, message: String) -> FeedError {
    FeedError::at_line(
        buffer_position_to_line_number(content, pos),
        FeedFormat::Xml,
        message,
    )
}

/// Parse author XML into raw name pairs, one per `<Author>` element, in
/// document order.
///
/// Missing, empty or self-closing name children give `None` fields; an
/// author with neither (for example a collective name) gives a blank pair.
///
/// # Errors
///
/// Returns [`FeedError`] if the XML is malformed.
pub fn parse_author_xml(content: &str) -> Result<Vec<RawNamePair>, FeedError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut authors = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name() == QName(b"Author") => {
                authors.push(parse_author(&mut reader, &mut buf, content)?);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                let pos = reader.buffer_position() as usize;
                return Err(syntax_error(content, pos, format!("XML parsing error: {}", e)));
            }
            _ => (),
        }
        buf.clear();
    }

    Ok(authors)
}

/// Parse the children of one `<Author>` element, up to its closing tag.
fn parse_author<B: BufRead>(
    reader: &mut Reader<B>,
    buf: &mut Vec<u8>,
    content: &str,
) -> Result<RawNamePair, FeedError> {
    let mut pair = RawNamePair::default();
    buf.clear();

    loop {
        match reader.read_event_into(buf) {
            Ok(Event::Start(e)) => {
                if let Some(field) = NameField::from_tag(e.name().as_ref()) {
                    let closing_tag = e.name().as_ref().to_vec();
                    let text = extract_text(reader, &closing_tag, content)?;
                    let value = (!text.is_empty()).then_some(text);
                    match field {
                        NameField::Given => pair.given_name_raw = value,
                        NameField::Family => pair.family_name_raw = value,
                    }
                }
            }
            Ok(Event::End(e)) if e.name() == QName(b"Author") => break,
            Ok(Event::Eof) => {
                let pos = reader.buffer_position() as usize;
                return Err(syntax_error(
                    content,
                    pos,
                    "Unexpected EOF while looking for closing tag 'Author'".to_string(),
                ));
            }
            Err(e) => {
                let pos = reader.buffer_position() as usize;
                return Err(syntax_error(content, pos, format!("XML parsing error: {}", e)));
            }
            _ => (),
        }
        buf.clear();
    }

    Ok(pair)
}

/// Collect the text of an element up to `closing_tag`, trimmed.
fn extract_text<B: BufRead>(
    reader: &mut Reader<B>,
    closing_tag: &[u8],
    content: &str,
) -> Result<String, FeedError> {
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        let pos = reader.buffer_position() as usize;
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => {
                let unescaped = e.unescape().map_err(|e| {
                    syntax_error(content, pos, format!("Invalid XML text content: {}", e))
                })?;
                text.push_str(&unescaped);
            }
            Ok(Event::End(e)) if e.name() == QName(closing_tag) => break,
            Ok(Event::Eof) => {
                return Err(syntax_error(
                    content,
                    pos,
                    format!(
                        "Unexpected EOF while looking for closing tag '{}'",
                        String::from_utf8_lossy(closing_tag)
                    ),
                ));
            }
            Err(e) => {
                return Err(syntax_error(content, pos, format!("XML parsing error: {}", e)));
            }
            _ => (),
        }
        buf.clear();
    }

    Ok(text.trim().to_string())
}
