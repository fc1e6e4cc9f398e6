/// Timed-text XML → plain transcript text
use xml::reader::{EventReader, ParserConfig, XmlEvent};

use crate::error::TranscriptError;

const TEXT_ELEMENT: &str = "text";

/// Concatenate the text content of every `<text>` element, in document order.
///
/// Each element contributes its full text content (nested markup included, entities
/// decoded once) followed by a single space; the result is trimmed. A document without
/// `<text>` elements yields an empty string.
pub fn parse_timed_text(xml: &str) -> Result<String, TranscriptError> {
    let config = ParserConfig::new()
        .cdata_to_characters(true)
        .whitespace_to_characters(true);
    let reader = EventReader::new_with_config(xml.as_bytes(), config);

    // One buffer per <text> element, indexed by start-tag order
    let mut fragments: Vec<String> = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    for event in reader {
        let event = event.map_err(|e| TranscriptError::Network(format!("Invalid transcript XML: {}", e)))?;
        match event {
            XmlEvent::StartElement { name, .. } => {
                if name.prefix.is_none() && name.local_name == TEXT_ELEMENT {
                    open.push(fragments.len());
                    fragments.push(String::new());
                }
            }
            XmlEvent::EndElement { name } => {
                if name.prefix.is_none() && name.local_name == TEXT_ELEMENT {
                    open.pop();
                }
            }
            XmlEvent::Characters(text) => {
                for &index in &open {
                    fragments[index].push_str(&text);
                }
            }
            _ => {}
        }
    }

    let mut transcript = String::new();
    for fragment in &fragments {
        transcript.push_str(fragment);
        transcript.push(' ');
    }

    Ok(transcript.trim().to_string())
}
