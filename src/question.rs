use bytes::BufMut;

use crate::{
    cursor::ByteCursor,
    error::CodecResult,
    name::{decode_name, encode_name},
    wire::encode_u16,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: QueryType,
    pub qclass: QueryClass,
}

impl Question {
    pub fn new(name: impl Into<String>, qtype: QueryType, qclass: QueryClass) -> Self {
        Self {
            name: name.into(),
            qtype,
            qclass,
        }
    }

    pub fn read(cursor: &mut ByteCursor<'_>) -> CodecResult<Self> {
        let name = decode_name(cursor)?;
        let qtype = cursor.read_u16()?.into();
        let qclass = cursor.read_u16()?.into();
        Ok(Self {
            name,
            qtype,
            qclass,
        })
    }

    pub fn write(&self, buf: &mut impl BufMut) -> CodecResult<()> {
        encode_name(&self.name, buf)?;
        encode_u16(buf, self.qtype.into());
        encode_u16(buf, self.qclass.into());
        Ok(())
    }
}

/// TYPE and QTYPE values. Codes without a named variant survive as `UNKNOWN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    A,
    NS,
    MD,
    MF,
    CNAME,
    SOA,
    MB,
    MG,
    MR,
    NULL,
    WKS,
    PTR,
    HINFO,
    MINFO,
    MX,
    TXT,
    AXFR,
    MAILB,
    MAILA,
    UNKNOWN(u16),
}

impl From<u16> for QueryType {
    fn from(value: u16) -> Self {
        match value {
            1 => QueryType::A,
            2 => QueryType::NS,
            3 => QueryType::MD,
            4 => QueryType::MF,
            5 => QueryType::CNAME,
            6 => QueryType::SOA,
            7 => QueryType::MB,
            8 => QueryType::MG,
            9 => QueryType::MR,
            10 => QueryType::NULL,
            11 => QueryType::WKS,
            12 => QueryType::PTR,
            13 => QueryType::HINFO,
            14 => QueryType::MINFO,
            15 => QueryType::MX,
            16 => QueryType::TXT,
            252 => QueryType::AXFR,
            253 => QueryType::MAILB,
            254 => QueryType::MAILA,
            _ => QueryType::UNKNOWN(value),
        }
    }
}

#[rustfmt::skip]
impl From<QueryType> for u16 {
    fn from(value: QueryType) -> Self {
        match value {
            QueryType::A          => 1,
            QueryType::NS         => 2,
            QueryType::MD         => 3,
            QueryType::MF         => 4,
            QueryType::CNAME      => 5,
            QueryType::SOA        => 6,
            QueryType::MB         => 7,
            QueryType::MG         => 8,
            QueryType::MR         => 9,
            QueryType::NULL       => 10,
            QueryType::WKS        => 11,
            QueryType::PTR        => 12,
            QueryType::HINFO      => 13,
            QueryType::MINFO      => 14,
            QueryType::MX         => 15,
            QueryType::TXT        => 16,
            QueryType::AXFR       => 252,
            QueryType::MAILB      => 253,
            QueryType::MAILA      => 254,
            QueryType::UNKNOWN(x) => x,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryClass {
    IN,
    CS,
    CH,
    HS,
    ANY,
    UNKNOWN(u16),
}

impl From<u16> for QueryClass {
    fn from(value: u16) -> Self {
        match value {
            1 => QueryClass::IN,
            2 => QueryClass::CS,
            3 => QueryClass::CH,
            4 => QueryClass::HS,
            255 => QueryClass::ANY,
            _ => QueryClass::UNKNOWN(value),
        }
    }
}

impl From<QueryClass> for u16 {
    fn from(value: QueryClass) -> Self {
        match value {
            QueryClass::IN => 1,
            QueryClass::CS => 2,
            QueryClass::CH => 3,
            QueryClass::HS => 4,
            QueryClass::ANY => 255,
            QueryClass::UNKNOWN(x) => x,
        }
    }
}
