//! Header validation: optional byte order mark, `WEBVTT` signature, and the
//! blank line that separates the header from the first cue.

use super::{ast::Header, errors::ParseError, reader::LineReader, scanner::is_blank};
use crate::{source::CharSource, Result};

/// UTF-8 byte order mark
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Literal every WebVTT stream starts with
const SIGNATURE: &[u8; 6] = b"WEBVTT";

/// Consume an optional UTF-8 byte order mark
///
/// A first byte that does not start a BOM is pushed back. Once the first BOM
/// byte has been seen the rest must follow.
pub(crate) fn read_bom<S: CharSource>(reader: &mut LineReader<S>) -> Result<bool> {
    for (index, &expected) in UTF8_BOM.iter().enumerate() {
        match reader.get_char()? {
            None if index == 0 => return Err(ParseError::UnexpectedEnd { line: 1 }.into()),
            Some(byte) if byte == expected => {}
            Some(byte) if index == 0 => {
                reader.unget_char(byte);
                return Ok(false);
            }
            None | Some(_) => return Err(ParseError::IncompleteBom.into()),
        }
    }
    Ok(true)
}

/// Read the header and leave the reader at the first cue
///
/// The signature is compared one byte at a time before any line is
/// buffered, so binary input is rejected early. End of stream after the
/// signature is accepted: the stream simply has no cues.
pub(crate) fn read_header<S: CharSource>(reader: &mut LineReader<S>) -> Result<Header> {
    let has_bom = read_bom(reader)?;

    for &expected in SIGNATURE {
        match reader.get_char()? {
            None => return Err(ParseError::UnexpectedEnd { line: 1 }.into()),
            Some(byte) if byte == expected => {}
            Some(_) => return Err(ParseError::MissingSignature.into()),
        }
    }

    let mut header = Header {
        has_bom,
        description: String::new(),
    };

    let Some(signature_line) = reader.read_line()? else {
        return Ok(header);
    };
    if let Some(&first) = signature_line.as_bytes().first() {
        if !is_blank(first) {
            return Err(ParseError::InvalidSignatureLine {
                line: reader.line(),
            }
            .into());
        }
        header.description = signature_line.trim_start_matches([' ', '\t']).to_owned();
    }

    match reader.read_line()? {
        Some(line) if !line.is_empty() => Err(ParseError::MissingHeaderSeparator {
            line: reader.line(),
        }
        .into()),
        _ => Ok(header),
    }
}
