use super::header::{Header, HEADER_LEN};
use super::question::Question;
use super::resource::ResourceRecord;
use crate::errors::DomainError;

/// A complete DNS message. Section counts in `header` are recomputed on encode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    pub fn new(header: Header, questions: Vec<Question>, answers: Vec<ResourceRecord>) -> Self {
        let mut message = Self {
            header,
            questions,
            answers,
            ..Self::default()
        };
        message.sync_counts();
        message
    }

    pub fn query(question: Question, recursion_desired: bool) -> Self {
        Self::new(Header::query(recursion_desired), vec![question], Vec::new())
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, DomainError> {
        let header = Header::decode(bytes)?;
        if header.truncated() {
            return Err(DomainError::TruncatedMessage);
        }

        let mut offset = HEADER_LEN;

        let mut questions = Vec::with_capacity(usize::from(header.question_count).min(16));
        for _ in 0..header.question_count {
            let (question, next) = Question::decode(bytes, offset)?;
            questions.push(question);
            offset = next;
        }

        let answers = decode_section(bytes, &mut offset, header.answer_count)?;
        let authorities = decode_section(bytes, &mut offset, header.authority_count)?;
        let additionals = decode_section(bytes, &mut offset, header.additional_count)?;

        Ok(Self {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512);
        self.counted_header().encode_into(&mut buf);
        for question in &self.questions {
            question.encode_into(&mut buf);
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
        {
            record.encode_into(&mut buf);
        }
        buf
    }

    fn sync_counts(&mut self) {
        self.header = self.counted_header();
    }

    fn counted_header(&self) -> Header {
        Header {
            question_count: section_count(self.questions.len()),
            answer_count: section_count(self.answers.len()),
            authority_count: section_count(self.authorities.len()),
            additional_count: section_count(self.additionals.len()),
            ..self.header
        }
    }
}

fn decode_section(
    bytes: &[u8],
    offset: &mut usize,
    count: u16,
) -> Result<Vec<ResourceRecord>, DomainError> {
    let mut records = Vec::with_capacity(usize::from(count).min(32));
    for _ in 0..count {
        let (record, next) = ResourceRecord::decode(bytes, *offset)?;
        records.push(record);
        *offset = next;
    }
    Ok(records)
}

fn section_count(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}
