use super::{Record, RecordData, RecordType, A, AAAA, CAA, CNAME, MX, NS, PTR, SOA, SRV, TXT};
use crate::errors::DomainError;

pub type ParseFn = fn(&str) -> Result<Record, DomainError>;
pub type DecodeFn = fn(&[u8], usize, usize) -> Result<Record, DomainError>;

/// Text and wire conversions for one record type.
pub struct RecordCodec {
    pub record_type: RecordType,
    pub parse: ParseFn,
    pub decode: DecodeFn,
}

static REGISTRY: [RecordCodec; 10] = [
    codec::<A>(),
    codec::<AAAA>(),
    codec::<CAA>(),
    codec::<CNAME>(),
    codec::<MX>(),
    codec::<NS>(),
    codec::<PTR>(),
    codec::<SOA>(),
    codec::<SRV>(),
    codec::<TXT>(),
];

const fn codec<T: RecordData>() -> RecordCodec {
    RecordCodec {
        record_type: T::TYPE,
        parse: parse_as::<T>,
        decode: decode_as::<T>,
    }
}

fn parse_as<T: RecordData>(text: &str) -> Result<Record, DomainError> {
    T::parse_text(text).map(T::into_record)
}

fn decode_as<T: RecordData>(message: &[u8], start: usize, length: usize) -> Result<Record, DomainError> {
    T::decode_wire(message, start, length).map(T::into_record)
}

pub fn codec_for(record_type: RecordType) -> Option<&'static RecordCodec> {
    REGISTRY.iter().find(|codec| codec.record_type == record_type)
}

pub fn registered_types() -> impl Iterator<Item = RecordType> {
    REGISTRY.iter().map(|codec| codec.record_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_one_codec_per_type() {
        let types: Vec<_> = registered_types().collect();
        assert_eq!(types.len(), 10);
        for record_type in &types {
            assert_eq!(types.iter().filter(|t| *t == record_type).count(), 1);
        }
    }

    #[test]
    fn test_unregistered_type_has_no_codec() {
        assert!(codec_for(RecordType::HINFO).is_none());
        assert!(codec_for(RecordType::Unknown(65000)).is_none());
    }

    #[test]
    fn test_parse_dispatches_by_type() {
        let record = Record::parse(RecordType::A, "10.0.0.1").unwrap();
        assert_eq!(record.record_type(), RecordType::A);
        assert!(matches!(
            Record::parse(RecordType::NAPTR, "x"),
            Err(DomainError::UnsupportedRecordType(_))
        ));
    }
}
