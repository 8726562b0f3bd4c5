use bytes::BufMut;

use crate::{cursor::ByteCursor, error::CodecResult, wire::encode_u16};

/// Size of the fixed header that starts every message.
pub const HEADER_LEN: usize = 12;

const QR_MASK: u16 = 0x8000;
const OPCODE_MASK: u16 = 0x7800;
const OPCODE_SHIFT: u16 = 11;
const AA_MASK: u16 = 0x0400;
const TC_MASK: u16 = 0x0200;
const RD_MASK: u16 = 0x0100;
const RA_MASK: u16 = 0x0080;
const RCODE_MASK: u16 = 0x000F;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id:      u16,
    pub flags:   Flags,
    pub qdcount: u16,    // questions
    pub ancount: u16,    // answers
    pub nscount: u16,    // authority records
    pub arcount: u16,    // additional records
}

impl Header {
    pub fn read(cursor: &mut ByteCursor<'_>) -> CodecResult<Self> {
        Ok(Self {
            id: cursor.read_u16()?,
            flags: cursor.read_u16()?.into(),
            qdcount: cursor.read_u16()?,
            ancount: cursor.read_u16()?,
            nscount: cursor.read_u16()?,
            arcount: cursor.read_u16()?,
        })
    }

    pub fn write(&self, buf: &mut impl BufMut) {
        encode_u16(buf, self.id);
        encode_u16(buf, self.flags.into());
        encode_u16(buf, self.qdcount);
        encode_u16(buf, self.ancount);
        encode_u16(buf, self.nscount);
        encode_u16(buf, self.arcount);
    }
}

/// The second header word. The three reserved bits between RA and RCODE
/// are not represented: they are dropped on read and written as zero.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    pub response:             bool,          // 1 bit
    pub opcode:               Opcode,        // 4 bits
    pub authoritative_answer: bool,          // 1 bit
    pub truncated:            bool,          // 1 bit
    pub recursion_desired:    bool,          // 1 bit
    pub recursion_available:  bool,          // 1 bit
    pub response_code:        ResponseCode,  // 4 bits
}

impl From<u16> for Flags {
    fn from(value: u16) -> Self {
        Self {
            response: value & QR_MASK != 0,
            opcode: (((value & OPCODE_MASK) >> OPCODE_SHIFT) as u8).into(),
            authoritative_answer: value & AA_MASK != 0,
            truncated: value & TC_MASK != 0,
            recursion_desired: value & RD_MASK != 0,
            recursion_available: value & RA_MASK != 0,
            response_code: ((value & RCODE_MASK) as u8).into(),
        }
    }
}

impl From<Flags> for u16 {
    fn from(flags: Flags) -> u16 {
        let mut value = 0;
        if flags.response {
            value |= QR_MASK;
        }
        value |= (u16::from(u8::from(flags.opcode)) << OPCODE_SHIFT) & OPCODE_MASK;
        if flags.authoritative_answer {
            value |= AA_MASK;
        }
        if flags.truncated {
            value |= TC_MASK;
        }
        if flags.recursion_desired {
            value |= RD_MASK;
        }
        if flags.recursion_available {
            value |= RA_MASK;
        }
        value | (u16::from(u8::from(flags.response_code)) & RCODE_MASK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Opcode {
    #[default]
    StandardQuery,
    InverseQuery,
    StatusQuery,
    Unknown(u8),
}

impl From<u8> for Opcode {
    fn from(opcode: u8) -> Opcode {
        match opcode {
            0 => Opcode::StandardQuery,
            1 => Opcode::InverseQuery,
            2 => Opcode::StatusQuery,
            v => Opcode::Unknown(v),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> u8 {
        match opcode {
            Opcode::StandardQuery => 0,
            Opcode::InverseQuery => 1,
            Opcode::StatusQuery => 2,
            Opcode::Unknown(v) => v,
        }
    }
}

/// RCODE values. 6 through 15 are reserved and kept as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseCode {
    #[default]
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Unknown(u8),
}

impl From<u8> for ResponseCode {
    fn from(code: u8) -> ResponseCode {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormatError,
            2 => ResponseCode::ServerFailure,
            3 => ResponseCode::NameError,
            4 => ResponseCode::NotImplemented,
            5 => ResponseCode::Refused,
            v => ResponseCode::Unknown(v),
        }
    }
}

#[rustfmt::skip]
impl From<ResponseCode> for u8 {
    fn from(code: ResponseCode) -> u8 {
        match code {
            ResponseCode::NoError        => 0,
            ResponseCode::FormatError    => 1,
            ResponseCode::ServerFailure  => 2,
            ResponseCode::NameError      => 3,
            ResponseCode::NotImplemented => 4,
            ResponseCode::Refused        => 5,
            ResponseCode::Unknown(v)     => v,
        }
    }
}
