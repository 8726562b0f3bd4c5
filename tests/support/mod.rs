#![allow(dead_code)]

use std::net::{Ipv4Addr, SocketAddr};

use bytes::{BufMut, BytesMut};
use dns_lookup::{encode_name, Flags, Header, Query, ResponseCode};
use tokio::{net::UdpSocket, task::JoinHandle};

/// Offset of the first question name, right after the fixed header.
pub const QUESTION_NAME_OFFSET: u16 = 12;

/// Builds a reply to `query` whose answers point back at the question name
/// with a compression pointer, the way real servers answer.
pub fn compressed_answer(query: &Query, addrs: &[Ipv4Addr], ttl: u32) -> Vec<u8> {
    let question = query.questions.first().expect("query has a question");
    let mut buf = BytesMut::new();
    Header {
        id: query.header.id,
        flags: Flags {
            response: true,
            recursion_desired: query.header.flags.recursion_desired,
            recursion_available: true,
            response_code: ResponseCode::NoError,
            ..Flags::default()
        },
        qdcount: 1,
        ancount: addrs.len() as u16,
        nscount: 0,
        arcount: 0,
    }
    .write(&mut buf);
    encode_name(&question.name, &mut buf).unwrap();
    buf.put_u16(u16::from(question.qtype));
    buf.put_u16(u16::from(question.qclass));
    for addr in addrs {
        buf.put_u16(0xC000 | QUESTION_NAME_OFFSET);
        buf.put_u16(1);
        buf.put_u16(1);
        buf.put_u32(ttl);
        buf.put_u16(4);
        buf.put_slice(&addr.octets());
    }
    buf.to_vec()
}

/// Serves UDP requests on loopback until `requests` datagrams were handled
/// and returns the decoded queries. The handler decides the reply; `None`
/// leaves the client waiting.
pub async fn spawn_server<F>(requests: usize, handler: F) -> (SocketAddr, JoinHandle<Vec<Query>>)
where
    F: Fn(&Query) -> Option<Vec<u8>> + Send + 'static,
{
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();
    let task = tokio::spawn(async move {
        let mut seen = Vec::new();
        let mut buf = vec![0u8; 2048];
        while seen.len() < requests {
            let (len, peer) = socket.recv_from(&mut buf).await.unwrap();
            let query = Query::decode(&buf[..len]).unwrap();
            if let Some(reply) = handler(&query) {
                socket.send_to(&reply, peer).await.unwrap();
            }
            seen.push(query);
        }
        seen
    });
    (addr, task)
}
