//! Cross-checks the wire codec against hickory-proto's encoder and decoder.

use hickory_proto::op::{Message as HickoryMessage, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{CNAME as HickoryCname, MX as HickoryMx, A as HickoryA};
use hickory_proto::rr::{DNSClass, Name, RData, Record as HickoryRecord, RecordType as HickoryType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::Ipv4Addr;
use std::str::FromStr;
use tern_dns_domain::dns_record::{A, CNAME, MX};
use tern_dns_domain::{
    Header, Label, Message, QueryType, Record, RecordType, ResourceRecord,
};

fn emit(message: &HickoryMessage) -> Vec<u8> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

fn name(text: &str) -> Label {
    Label::parse(text).unwrap()
}

#[test]
fn test_decodes_hickory_query() {
    let mut query = Query::new();
    query.set_name(Name::from_str("www.example.com.").unwrap());
    query.set_query_type(HickoryType::AAAA);
    query.set_query_class(DNSClass::IN);

    let mut message = HickoryMessage::new(0x4242, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    let decoded = Message::decode(&emit(&message)).unwrap();
    assert_eq!(decoded.header.id, 0x4242);
    assert!(decoded.header.recursion_desired());
    assert!(!decoded.header.is_response());
    assert_eq!(decoded.questions[0].name, name("www.example.com"));
    assert_eq!(decoded.questions[0].qtype, QueryType::Record(RecordType::AAAA));
}

#[test]
fn test_decodes_hickory_compressed_answers() {
    let owner = Name::from_str("example.com.").unwrap();
    let mut message = HickoryMessage::new(7, MessageType::Response, OpCode::Query);
    message.add_answer(HickoryRecord::from_rdata(
        owner.clone(),
        300,
        RData::MX(HickoryMx::new(10, Name::from_str("mail.example.com.").unwrap())),
    ));
    message.add_answer(HickoryRecord::from_rdata(
        Name::from_str("www.example.com.").unwrap(),
        300,
        RData::CNAME(HickoryCname(owner)),
    ));

    let decoded = Message::decode(&emit(&message)).unwrap();
    assert_eq!(decoded.answers.len(), 2);
    assert_eq!(
        decoded.answers[0].record,
        Some(Record::MX(MX {
            priority: 10,
            exchange: name("mail.example.com"),
        }))
    );
    assert_eq!(decoded.answers[1].name, name("www.example.com"));
    assert_eq!(
        decoded.answers[1].record,
        Some(Record::CNAME(CNAME(name("example.com"))))
    );
}

#[test]
fn test_hickory_decodes_our_answer() {
    let question = tern_dns_domain::Question::new(name("example.com"), RecordType::A);
    let message = Message::new(
        Header::answer(0x1001, true, true),
        vec![question],
        vec![
            ResourceRecord::new(name("example.com"), 60, Record::A(A(Ipv4Addr::new(93, 184, 216, 34)))),
            ResourceRecord::new(
                name("example.com"),
                60,
                Record::MX(MX {
                    priority: 5,
                    exchange: name("mx.example.com"),
                }),
            ),
        ],
    );

    let parsed = HickoryMessage::from_vec(&message.encode()).unwrap();
    assert_eq!(parsed.answers().len(), 2);
    match parsed.answers()[0].data() {
        RData::A(a) => assert_eq!(*a, HickoryA(Ipv4Addr::new(93, 184, 216, 34))),
        other => panic!("unexpected rdata: {:?}", other),
    }
    match parsed.answers()[1].data() {
        RData::MX(mx) => {
            assert_eq!(mx.preference(), 5);
            assert_eq!(mx.exchange().to_utf8(), "mx.example.com.");
        }
        other => panic!("unexpected rdata: {:?}", other),
    }
    assert_eq!(parsed.answers()[0].ttl(), 60);

    let reencoded = Message::decode(&parsed.to_vec().unwrap()).unwrap();
    let records: Vec<_> = reencoded.answers.iter().map(|rr| rr.record.clone()).collect();
    let expected: Vec<_> = message.answers.iter().map(|rr| rr.record.clone()).collect();
    assert_eq!(records, expected);
}
