//! DNS message codec with a small UDP lookup client on top.
//!
//! Queries are built with [`build_query`] and serialized with
//! [`Query::to_bytes`]. Replies are parsed by [`decode_response`], which
//! walks a [`ByteCursor`] through the header, question and record sections
//! and follows compression pointers in names.

pub mod config;
pub mod cursor;
pub mod error;
pub mod header;
pub mod message;
pub mod name;
pub mod question;
pub mod record;
pub mod resolver;
pub mod transport;
pub mod wire;

pub use config::ResolverConfig;
pub use cursor::ByteCursor;
pub use error::{CodecError, LookupError, TransportError};
pub use header::{Flags, Header, Opcode, ResponseCode};
pub use message::{build_query, decode_response, Query, Response};
pub use name::{decode_name, encode_name};
pub use question::{QueryClass, QueryType, Question};
pub use record::{Rdata, ResourceRecord};
pub use resolver::{Lookup, Resolver};
pub use transport::{Transport, UdpTransport};

/// Largest message carried over plain UDP.
pub const MAX_PACKET_SIZE: usize = 512;

pub const DNS_PORT: u16 = 53;
