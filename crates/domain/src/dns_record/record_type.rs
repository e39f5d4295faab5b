use std::fmt;
use std::str::FromStr;

macro_rules! record_types {
    ($($variant:ident => ($mnemonic:literal, $code:literal)),+ $(,)?) => {
        /// A resource record TYPE value. Codes without a mnemonic are kept
        /// as `Unknown` so they survive a decode/encode pass untouched.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum RecordType {
            $($variant,)+
            Unknown(u16),
        }

        impl RecordType {
            pub const ALL: &'static [RecordType] = &[$(RecordType::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(RecordType::$variant => $mnemonic,)+
                    RecordType::Unknown(_) => "UNKNOWN",
                }
            }

            pub fn to_u16(&self) -> u16 {
                match self {
                    $(RecordType::$variant => $code,)+
                    RecordType::Unknown(code) => *code,
                }
            }

            pub fn from_u16(code: u16) -> Self {
                match code {
                    $($code => RecordType::$variant,)+
                    other => RecordType::Unknown(other),
                }
            }

            fn from_mnemonic(s: &str) -> Option<Self> {
                match s {
                    $($mnemonic => Some(RecordType::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

record_types! {
    A => ("A", 1),
    NS => ("NS", 2),
    MD => ("MD", 3),
    MF => ("MF", 4),
    CNAME => ("CNAME", 5),
    SOA => ("SOA", 6),
    MB => ("MB", 7),
    MG => ("MG", 8),
    MR => ("MR", 9),
    NULL => ("NULL", 10),
    WKS => ("WKS", 11),
    PTR => ("PTR", 12),
    HINFO => ("HINFO", 13),
    MINFO => ("MINFO", 14),
    MX => ("MX", 15),
    TXT => ("TXT", 16),
    RP => ("RP", 17),
    AFSDB => ("AFSDB", 18),
    X25 => ("X25", 19),
    ISDN => ("ISDN", 20),
    RT => ("RT", 21),
    NSAP => ("NSAP", 22),
    NSAPPTR => ("NSAP-PTR", 23),
    SIG => ("SIG", 24),
    KEY => ("KEY", 25),
    PX => ("PX", 26),
    GPOS => ("GPOS", 27),
    AAAA => ("AAAA", 28),
    LOC => ("LOC", 29),
    NXT => ("NXT", 30),
    EID => ("EID", 31),
    NIMLOC => ("NIMLOC", 32),
    SRV => ("SRV", 33),
    ATMA => ("ATMA", 34),
    NAPTR => ("NAPTR", 35),
    KX => ("KX", 36),
    CERT => ("CERT", 37),
    A6 => ("A6", 38),
    DNAME => ("DNAME", 39),
    SINK => ("SINK", 40),
    OPT => ("OPT", 41),
    APL => ("APL", 42),
    DS => ("DS", 43),
    SSHFP => ("SSHFP", 44),
    IPSECKEY => ("IPSECKEY", 45),
    RRSIG => ("RRSIG", 46),
    NSEC => ("NSEC", 47),
    DNSKEY => ("DNSKEY", 48),
    DHCID => ("DHCID", 49),
    NSEC3 => ("NSEC3", 50),
    NSEC3PARAM => ("NSEC3PARAM", 51),
    TLSA => ("TLSA", 52),
    HIP => ("HIP", 55),
    CDS => ("CDS", 59),
    CDNSKEY => ("CDNSKEY", 60),
    OPENPGPKEY => ("OPENPGPKEY", 61),
    SPF => ("SPF", 99),
    UINFO => ("UINFO", 100),
    UID => ("UID", 101),
    GID => ("GID", 102),
    UNSPEC => ("UNSPEC", 103),
    TKEY => ("TKEY", 249),
    TSIG => ("TSIG", 250),
    URI => ("URI", 256),
    CAA => ("CAA", 257),
    TA => ("TA", 32768),
    DLV => ("DLV", 32769),
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::Unknown(code) => write!(f, "TYPE{}", code),
            known => write!(f, "{}", known.as_str()),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        if let Some(known) = RecordType::from_mnemonic(&upper) {
            return Ok(known);
        }
        upper
            .strip_prefix("TYPE")
            .and_then(|code| code.parse::<u16>().ok())
            .map(RecordType::from_u16)
            .ok_or_else(|| format!("Unknown record type: {}", s))
    }
}

/// QTYPE: every TYPE plus the meta values that only appear in questions.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    Record(RecordType),
    AXFR,
    MAILB,
    MAILA,
    ANY,
}

impl QueryType {
    pub fn to_u16(&self) -> u16 {
        match self {
            QueryType::Record(record_type) => record_type.to_u16(),
            QueryType::AXFR => 252,
            QueryType::MAILB => 253,
            QueryType::MAILA => 254,
            QueryType::ANY => 255,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            252 => QueryType::AXFR,
            253 => QueryType::MAILB,
            254 => QueryType::MAILA,
            255 => QueryType::ANY,
            other => QueryType::Record(RecordType::from_u16(other)),
        }
    }

    /// Record types a stored record set contributes to an answer for this QTYPE.
    pub fn answer_types(&self) -> &'static [RecordType] {
        match self {
            QueryType::ANY | QueryType::AXFR => &[],
            QueryType::MAILB => &[RecordType::MD, RecordType::MF],
            QueryType::MAILA => &[
                RecordType::MB,
                RecordType::MG,
                RecordType::MR,
                RecordType::MINFO,
            ],
            QueryType::Record(record_type) => {
                RecordType::ALL
                    .iter()
                    .position(|t| t == record_type)
                    .map(|i| &RecordType::ALL[i..=i])
                    .unwrap_or(&[])
            }
        }
    }

    pub fn is_meta(&self) -> bool {
        !matches!(self, QueryType::Record(_))
    }
}

impl From<RecordType> for QueryType {
    fn from(record_type: RecordType) -> Self {
        QueryType::Record(record_type)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryType::Record(record_type) => fmt::Display::fmt(record_type, f),
            QueryType::AXFR => f.write_str("AXFR"),
            QueryType::MAILB => f.write_str("MAILB"),
            QueryType::MAILA => f.write_str("MAILA"),
            QueryType::ANY => f.write_str("ANY"),
        }
    }
}

impl FromStr for QueryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AXFR" => Ok(QueryType::AXFR),
            "MAILB" => Ok(QueryType::MAILB),
            "MAILA" => Ok(QueryType::MAILA),
            "ANY" | "*" => Ok(QueryType::ANY),
            _ => s.parse::<RecordType>().map(QueryType::Record),
        }
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DnsClass {
    IN,
    CS,
    CH,
    HS,
    ANY,
    Unknown(u16),
}

impl DnsClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DnsClass::IN => "IN",
            DnsClass::CS => "CS",
            DnsClass::CH => "CH",
            DnsClass::HS => "HS",
            DnsClass::ANY => "ANY",
            DnsClass::Unknown(_) => "UNKNOWN",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            DnsClass::IN => 1,
            DnsClass::CS => 2,
            DnsClass::CH => 3,
            DnsClass::HS => 4,
            DnsClass::ANY => 255,
            DnsClass::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => DnsClass::IN,
            2 => DnsClass::CS,
            3 => DnsClass::CH,
            4 => DnsClass::HS,
            255 => DnsClass::ANY,
            other => DnsClass::Unknown(other),
        }
    }
}

impl fmt::Display for DnsClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsClass::Unknown(code) => write!(f, "CLASS{}", code),
            known => f.write_str(known.as_str()),
        }
    }
}

impl FromStr for DnsClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" => Ok(DnsClass::IN),
            "CS" => Ok(DnsClass::CS),
            "CH" => Ok(DnsClass::CH),
            "HS" => Ok(DnsClass::HS),
            "ANY" => Ok(DnsClass::ANY),
            other => other
                .strip_prefix("CLASS")
                .and_then(|code| code.parse::<u16>().ok())
                .map(DnsClass::from_u16)
                .ok_or_else(|| format!("Unknown DNS class: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_table() {
        for record_type in RecordType::ALL {
            assert_eq!(RecordType::from_u16(record_type.to_u16()), *record_type);
        }
    }

    #[test]
    fn test_unknown_code_is_preserved() {
        let unknown = RecordType::from_u16(65280);
        assert_eq!(unknown, RecordType::Unknown(65280));
        assert_eq!(unknown.to_u16(), 65280);
        assert_eq!(unknown.to_string(), "TYPE65280");
        assert_eq!("type65280".parse::<RecordType>(), Ok(unknown));
    }

    #[test]
    fn test_meta_query_types() {
        assert_eq!(QueryType::from_u16(255), QueryType::ANY);
        assert_eq!(QueryType::from_u16(252), QueryType::AXFR);
        assert_eq!(
            QueryType::from_u16(1),
            QueryType::Record(RecordType::A)
        );
        assert!(QueryType::ANY.answer_types().is_empty());
        assert_eq!(
            QueryType::MAILB.answer_types(),
            &[RecordType::MD, RecordType::MF]
        );
        assert_eq!(
            QueryType::Record(RecordType::MX).answer_types(),
            &[RecordType::MX]
        );
    }

    #[test]
    fn test_mnemonic_parsing_is_case_insensitive() {
        assert_eq!("aaaa".parse::<RecordType>(), Ok(RecordType::AAAA));
        assert_eq!("nsap-ptr".parse::<RecordType>(), Ok(RecordType::NSAPPTR));
        assert_eq!("in".parse::<DnsClass>(), Ok(DnsClass::IN));
        assert!("bogus".parse::<RecordType>().is_err());
    }
}
