use bytes::{Bytes, BytesMut};
use tracing::debug;

use crate::{
    cursor::ByteCursor,
    error::{CodecError, CodecResult},
    header::{Flags, Header, Opcode},
    question::{QueryClass, QueryType, Question},
    record::ResourceRecord,
    wire::random_transaction_id,
    MAX_PACKET_SIZE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub header: Header,
    pub questions: Vec<Question>,
}

/// Builds a standard A/IN query for `name` under a fresh random id.
pub fn build_query(name: &str, recursion_desired: bool, rng: &mut fastrand::Rng) -> Query {
    Query {
        header: Header {
            id: random_transaction_id(rng),
            flags: Flags {
                opcode: Opcode::StandardQuery,
                recursion_desired,
                ..Flags::default()
            },
            qdcount: 1,
            ..Header::default()
        },
        questions: vec![Question::new(name, QueryType::A, QueryClass::IN)],
    }
}

impl Query {
    pub fn id(&self) -> u16 {
        self.header.id
    }

    /// Serializes the header and questions. QDCOUNT is taken from the
    /// question list so the two cannot disagree.
    pub fn to_bytes(&self) -> CodecResult<Bytes> {
        let mut buf = BytesMut::with_capacity(MAX_PACKET_SIZE);
        let header = Header {
            qdcount: entry_count(&self.questions)?,
            ..self.header
        };
        header.write(&mut buf);
        for question in &self.questions {
            question.write(&mut buf)?;
        }
        Ok(buf.freeze())
    }

    /// Parses the header and question section of a query message.
    pub fn decode(buf: &[u8]) -> CodecResult<Self> {
        let mut cursor = ByteCursor::new(buf);
        let header = Header::read(&mut cursor)?;
        let questions = read_questions(&mut cursor, header.qdcount)?;
        Ok(Self { header, questions })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

/// Decodes a full response, reading exactly as many entries from every
/// section as the header announces. The first malformed field aborts the
/// whole decode.
pub fn decode_response(buf: &[u8]) -> CodecResult<Response> {
    let mut cursor = ByteCursor::new(buf);
    let header = Header::read(&mut cursor)?;
    let questions = read_questions(&mut cursor, header.qdcount)?;
    let answers = read_records(&mut cursor, header.ancount)?;
    let authorities = read_records(&mut cursor, header.nscount)?;
    let additionals = read_records(&mut cursor, header.arcount)?;

    debug!(
        id = header.id,
        questions = questions.len(),
        answers = answers.len(),
        authorities = authorities.len(),
        additionals = additionals.len(),
        trailing = cursor.remaining(),
        "decoded response"
    );

    Ok(Response {
        header,
        questions,
        answers,
        authorities,
        additionals,
    })
}

impl Response {
    pub fn decode(buf: &[u8]) -> CodecResult<Self> {
        decode_response(buf)
    }

    /// Serializes the response with section counts taken from the lists.
    pub fn to_bytes(&self) -> CodecResult<Bytes> {
        let mut buf = BytesMut::with_capacity(MAX_PACKET_SIZE);
        let header = Header {
            qdcount: entry_count(&self.questions)?,
            ancount: entry_count(&self.answers)?,
            nscount: entry_count(&self.authorities)?,
            arcount: entry_count(&self.additionals)?,
            ..self.header
        };
        header.write(&mut buf);
        for question in &self.questions {
            question.write(&mut buf)?;
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
        {
            record.write(&mut buf)?;
        }
        Ok(buf.freeze())
    }

    /// Addresses carried by the answer section, in order.
    pub fn addresses(&self) -> Vec<String> {
        self.answers
            .iter()
            .filter_map(ResourceRecord::address)
            .collect()
    }
}

fn entry_count<T>(entries: &[T]) -> CodecResult<u16> {
    let count = entries.len();
    u16::try_from(count).map_err(|_| CodecError::TooManyEntries { count })
}

fn read_questions(cursor: &mut ByteCursor<'_>, count: u16) -> CodecResult<Vec<Question>> {
    (0..count).map(|_| Question::read(cursor)).collect()
}

fn read_records(cursor: &mut ByteCursor<'_>, count: u16) -> CodecResult<Vec<ResourceRecord>> {
    (0..count).map(|_| ResourceRecord::read(cursor)).collect()
}
