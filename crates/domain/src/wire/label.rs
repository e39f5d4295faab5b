use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

pub const MAX_SEGMENT_LEN: usize = 63;

const LABEL_TYPE_MASK: u8 = 0xC0;
const POINTER_TAG: u8 = 0xC0;

/// A domain name as an ordered list of raw segments, leftmost first.
///
/// Segments decoded from the wire keep their original bytes and case;
/// text parsing only accepts lowercase `^[a-z][a-z0-9]+$` segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Label {
    segments: Vec<Box<[u8]>>,
}

impl Label {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments<I, S>(segments: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let segments = segments
            .into_iter()
            .map(|segment| {
                let bytes = segment.as_ref();
                if bytes.is_empty() {
                    return Err(DomainError::InvalidDomainName(
                        "empty label segment".to_string(),
                    ));
                }
                if bytes.len() > MAX_SEGMENT_LEN {
                    return Err(DomainError::LabelTooLong(bytes.len()));
                }
                Ok(Box::from(bytes))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }

    /// Parses dotted text. One trailing dot is accepted; the root name is not.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let lowered = text.to_ascii_lowercase();
        let mut parts: Vec<&str> = lowered.split('.').collect();
        if parts.last() == Some(&"") {
            parts.pop();
        }
        if parts.is_empty() {
            return Err(DomainError::InvalidDomainName(text.to_string()));
        }

        let mut segments = Vec::with_capacity(parts.len());
        for part in parts {
            if part.len() > MAX_SEGMENT_LEN {
                return Err(DomainError::LabelTooLong(part.len()));
            }
            if !is_valid_text_segment(part) {
                return Err(DomainError::InvalidDomainName(text.to_string()));
            }
            segments.push(Box::from(part.as_bytes()));
        }
        Ok(Self { segments })
    }

    /// Decodes the name starting at `offset` of a full message.
    ///
    /// Returns the name and the number of bytes it occupies at `offset`:
    /// everything up to and including the terminating zero, or up to and
    /// including the first compression pointer.
    pub fn decode(message: &[u8], offset: usize) -> Result<(Self, usize), DomainError> {
        let len = message.len();
        let mut segments = Vec::new();
        let mut position = offset;
        let mut consumed = None;
        let mut hops_left = len / 2;

        loop {
            let length_byte = *message
                .get(position)
                .ok_or(DomainError::OutOfBounds { offset: position, len })?;

            match length_byte & LABEL_TYPE_MASK {
                0 if length_byte == 0 => {
                    position += 1;
                    break;
                }
                0 => {
                    let start = position + 1;
                    let end = start + length_byte as usize;
                    let segment = message
                        .get(start..end)
                        .ok_or(DomainError::OutOfBounds { offset: end, len })?;
                    segments.push(Box::from(segment));
                    position = end;
                }
                POINTER_TAG => {
                    let low = *message.get(position + 1).ok_or(DomainError::OutOfBounds {
                        offset: position + 1,
                        len,
                    })?;
                    if consumed.is_none() {
                        consumed = Some(position + 2 - offset);
                    }
                    if hops_left == 0 {
                        return Err(DomainError::CompressionLoop(position));
                    }
                    hops_left -= 1;
                    position = (usize::from(length_byte & !LABEL_TYPE_MASK) << 8) | usize::from(low);
                }
                _ => {
                    return Err(DomainError::InvalidLabelLength {
                        byte: length_byte,
                        offset: position,
                    })
                }
            }
        }

        let consumed = consumed.unwrap_or_else(|| position - offset);
        Ok((Self { segments }, consumed))
    }

    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        for segment in &self.segments {
            buf.push(segment.len() as u8);
            buf.extend_from_slice(segment);
        }
        buf.push(0);
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut buf);
        buf
    }

    pub fn encoded_len(&self) -> usize {
        self.segments.iter().map(|s| s.len() + 1).sum::<usize>() + 1
    }

    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &[u8]> + ExactSizeIterator {
        self.segments.iter().map(|s| &s[..])
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn to_lowercase(&self) -> Self {
        Self {
            segments: self
                .segments
                .iter()
                .map(|s| s.to_ascii_lowercase().into_boxed_slice())
                .collect(),
        }
    }

    /// Lowercase dotted text of `segments[range]` without a trailing dot,
    /// the form zone apexes and entry names are keyed by.
    pub fn lookup_key(&self, range: std::ops::Range<usize>) -> String {
        let mut key = String::new();
        for (i, segment) in self.segments[range].iter().enumerate() {
            if i > 0 {
                key.push('.');
            }
            push_escaped(&mut key, segment, true);
        }
        key
    }
}

fn is_valid_text_segment(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() >= 2
        && bytes[0].is_ascii_lowercase()
        && bytes[1..]
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// Appends one segment as presentation text; non-printable bytes and the
/// separator characters become `\DDD` escapes.
pub(crate) fn push_escaped(out: &mut String, segment: &[u8], lowercase: bool) {
    for &byte in segment {
        let byte = if lowercase {
            byte.to_ascii_lowercase()
        } else {
            byte
        };
        match byte {
            b'.' | b'\\' => {
                out.push('\\');
                out.push(byte as char);
            }
            0x21..=0x7E => out.push(byte as char),
            _ => out.push_str(&format!("\\{:03}", byte)),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str(".");
        }
        let mut text = String::new();
        for segment in &self.segments {
            push_escaped(&mut text, segment, false);
            text.push('.');
        }
        f.write_str(&text)
    }
}

impl FromStr for Label {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::parse(s)
    }
}
