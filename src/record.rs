use std::net::Ipv4Addr;

use bytes::BufMut;

use crate::{
    cursor::ByteCursor,
    error::{CodecError, CodecResult},
    name::{decode_name, encode_name},
    question::{QueryClass, QueryType},
    wire::{encode_u16, encode_u32},
};

/// Interpreted RDATA. Only address records are understood; anything else
/// is kept as raw bytes so decoding never fails on an unfamiliar type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rdata {
    A(Ipv4Addr),
    Unknown(Vec<u8>),
}

impl Rdata {
    fn parse(rtype: QueryType, data: &[u8]) -> Self {
        match (rtype, data) {
            (QueryType::A, &[a, b, c, d]) => Rdata::A(Ipv4Addr::new(a, b, c, d)),
            _ => Rdata::Unknown(data.to_vec()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Rdata::A(_) => 4,
            Rdata::Unknown(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub rtype: QueryType,
    pub class: QueryClass,
    pub ttl: u32,
    pub data: Rdata,
}

impl ResourceRecord {
    pub fn a(name: impl Into<String>, addr: Ipv4Addr, ttl: u32) -> Self {
        Self {
            name: name.into(),
            rtype: QueryType::A,
            class: QueryClass::IN,
            ttl,
            data: Rdata::A(addr),
        }
    }

    /// Decodes one record and leaves the cursor on the first byte after
    /// its RDATA, whatever the record type.
    pub fn read(cursor: &mut ByteCursor<'_>) -> CodecResult<Self> {
        let name = decode_name(cursor)?;
        let rtype: QueryType = cursor.read_u16()?.into();
        let class = cursor.read_u16()?.into();
        let ttl = cursor.read_u32()?;
        let data_len = cursor.read_u16()?;
        let data = Rdata::parse(rtype, cursor.read_bytes(data_len.into())?);

        Ok(Self {
            name,
            rtype,
            class,
            ttl,
            data,
        })
    }

    /// Writes the record with an uncompressed owner name.
    pub fn write(&self, buf: &mut impl BufMut) -> CodecResult<()> {
        encode_name(&self.name, buf)?;
        encode_u16(buf, self.rtype.into());
        encode_u16(buf, self.class.into());
        encode_u32(buf, self.ttl);
        encode_u16(buf, self.data_len()?);
        match &self.data {
            Rdata::A(addr) => buf.put_slice(&addr.octets()),
            Rdata::Unknown(data) => buf.put_slice(data),
        }
        Ok(())
    }

    /// RDLENGTH for this record, or an error when the data cannot be
    /// described by a 16-bit length.
    pub fn data_len(&self) -> CodecResult<u16> {
        let len = self.data.len();
        u16::try_from(len).map_err(|_| CodecError::RdataTooLong { len })
    }

    /// Dotted-quad address of an A record carrying exactly four bytes.
    pub fn address(&self) -> Option<String> {
        match self.data {
            Rdata::A(addr) => Some(addr.to_string()),
            Rdata::Unknown(_) => None,
        }
    }
}
