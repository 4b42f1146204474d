//! DOCX adapter: unzip the archive and pull text events out of
//! `word/document.xml`, one line per paragraph.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::ExtractError;

pub fn extract_docx(data: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(data))
        .map_err(|e| ExtractError::Parse(format!("docx: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Parse(format!("docx: missing word/document.xml: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::TextExtraction(format!("docx: {e}")))?;

    let mut reader = Reader::from_str(&xml);
    let mut out = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractError::Parse(format!("docx: {e}")))?;
                out.push_str(&text);
            }
            // Tabs and line breaks separate runs that would otherwise fuse.
            Ok(Event::Empty(e))
                if matches!(e.name().as_ref(), b"w:tab" | b"w:br") =>
            {
                out.push(' ');
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => out.push('\n'),
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Parse(format!("docx: {e}"))),
            _ => {}
        }
    }
    Ok(out)
}
