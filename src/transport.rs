use std::{net::SocketAddr, time::Duration};

use async_trait::async_trait;
use tokio::{net::UdpSocket, time::timeout};
use tracing::debug;

use crate::error::TransportError;

/// One request/response exchange with a name server.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn exchange(&self, request: &[u8]) -> Result<Vec<u8>, TransportError>;
}

/// Sends a single datagram to a fixed server and waits for one reply.
///
/// Replies larger than `buffer_size` are cut off by the socket; there are
/// no retries.
#[derive(Clone, Debug)]
pub struct UdpTransport {
    server: SocketAddr,
    timeout: Duration,
    buffer_size: usize,
}

impl UdpTransport {
    pub fn new(server: SocketAddr, timeout: Duration, buffer_size: usize) -> Self {
        Self {
            server,
            timeout,
            buffer_size,
        }
    }

    fn bind_addr(&self) -> &'static str {
        if self.server.is_ipv4() {
            "0.0.0.0:0"
        } else {
            "[::]:0"
        }
    }
}

#[async_trait]
impl Transport for UdpTransport {
    async fn exchange(&self, request: &[u8]) -> Result<Vec<u8>, TransportError> {
        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(TransportError::Bind)?;
        socket
            .connect(self.server)
            .await
            .map_err(TransportError::Connect)?;
        socket.send(request).await.map_err(TransportError::Send)?;

        let mut response = vec![0u8; self.buffer_size];
        let received = timeout(self.timeout, socket.recv(&mut response))
            .await
            .map_err(|_| TransportError::Timeout(self.timeout))?
            .map_err(TransportError::Receive)?;
        response.truncate(received);

        debug!(server = %self.server, sent = request.len(), received, "udp exchange complete");
        Ok(response)
    }
}
