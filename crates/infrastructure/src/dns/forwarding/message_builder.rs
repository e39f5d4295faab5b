//! Upstream query construction.

use tern_dns_domain::{Message, Question};

pub struct MessageBuilder;

impl MessageBuilder {
    /// Serializes a recursive query for `question` under a fresh random ID.
    ///
    /// Returns the ID alongside the bytes so the reply can be matched.
    pub fn build_query(question: &Question) -> (u16, Vec<u8>) {
        let message = Message::query(question.clone(), true);
        (message.header.id, message.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tern_dns_domain::{Label, QueryType, RecordType};

    #[test]
    fn test_build_query_sets_rd_and_single_question() {
        let question = Question::new(Label::parse("example.com").unwrap(), RecordType::MX);
        let (id, bytes) = MessageBuilder::build_query(&question);

        let decoded = Message::decode(&bytes).unwrap();
        assert_eq!(decoded.header.id, id);
        assert!(decoded.header.recursion_desired());
        assert!(!decoded.header.is_response());
        assert_eq!(decoded.questions, vec![question]);
        assert_eq!(decoded.questions[0].qtype, QueryType::Record(RecordType::MX));
    }
}
