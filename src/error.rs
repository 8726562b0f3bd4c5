use std::{io, time::Duration};

use thiserror::Error;

/// Failures raised while reading or writing DNS wire data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("requested {requested} bytes but only {remaining} remain")]
    InsufficientData { requested: usize, remaining: usize },
    #[error("offset {offset} is outside of a {len} byte message")]
    InvalidOffset { offset: i64, len: usize },
    #[error("reader has no backing buffer")]
    UninitializedReader,
    #[error("label of {len} bytes exceeds the 63 byte limit")]
    LabelTooLong { len: usize },
    #[error("encoded name exceeds 255 bytes")]
    NameTooLong,
    #[error("name contains an empty label")]
    EmptyLabel,
    #[error("rdata of {len} bytes does not fit RDLENGTH")]
    RdataTooLong { len: usize },
    #[error("{count} entries do not fit a section count")]
    TooManyEntries { count: usize },
    #[error("reserved label type in length byte {0:#04x}")]
    ReservedLabelType(u8),
    #[error("limit of {limit} compression jumps exceeded")]
    CompressionLoop { limit: usize },
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Errors produced while exchanging datagrams with the name server.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to bind local socket: {0}")]
    Bind(#[source] io::Error),
    #[error("failed to connect to name server: {0}")]
    Connect(#[source] io::Error),
    #[error("failed to send query: {0}")]
    Send(#[source] io::Error),
    #[error("failed to receive response: {0}")]
    Receive(#[source] io::Error),
    #[error("no response within {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("malformed message: {0}")]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("response id {received} does not match query id {expected}")]
    IdMismatch { expected: u16, received: u16 },
}
