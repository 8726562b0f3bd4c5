use std::time::Instant;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{
    config::ResolverConfig,
    error::LookupError,
    message::{build_query, Query, Response},
    transport::{Transport, UdpTransport},
};

/// A sent query together with the decoded reply.
#[derive(Debug, Clone)]
pub struct Lookup {
    pub query: Query,
    pub response: Response,
}

impl Lookup {
    pub fn addresses(&self) -> Vec<String> {
        self.response.addresses()
    }
}

/// Performs single A lookups against one configured server. Referrals are
/// not followed and nothing is cached.
pub struct Resolver<T = UdpTransport> {
    transport: T,
    recursion_desired: bool,
    rng: Mutex<fastrand::Rng>,
}

impl Resolver<UdpTransport> {
    pub fn from_config(config: &ResolverConfig) -> Self {
        let transport = UdpTransport::new(config.server, config.timeout, config.buffer_size);
        Self::new(transport, config.recursion_desired)
    }
}

impl<T: Transport> Resolver<T> {
    pub fn new(transport: T, recursion_desired: bool) -> Self {
        Self::with_rng(transport, recursion_desired, fastrand::Rng::new())
    }

    /// Uses `rng` for transaction ids, which makes them reproducible.
    pub fn with_rng(transport: T, recursion_desired: bool, rng: fastrand::Rng) -> Self {
        Self {
            transport,
            recursion_desired,
            rng: Mutex::new(rng),
        }
    }

    pub async fn lookup(&self, name: &str) -> Result<Lookup, LookupError> {
        let start = Instant::now();
        metrics::counter!("dns.lookup.queries").increment(1);

        let query = {
            let mut rng = self.rng.lock().await;
            build_query(name, self.recursion_desired, &mut rng)
        };
        let request = query.to_bytes()?;
        debug!(name, id = query.id(), bytes = request.len(), "sending query");

        let raw = self.transport.exchange(&request).await.map_err(|err| {
            metrics::counter!("dns.lookup.failures", "stage" => "transport").increment(1);
            err
        })?;

        let response = Response::decode(&raw).map_err(|err| {
            metrics::counter!("dns.lookup.failures", "stage" => "decode").increment(1);
            err
        })?;

        if response.header.id != query.id() {
            metrics::counter!("dns.lookup.failures", "stage" => "id").increment(1);
            warn!(
                expected = query.id(),
                received = response.header.id,
                "mismatched DNS transaction ID"
            );
            return Err(LookupError::IdMismatch {
                expected: query.id(),
                received: response.header.id,
            });
        }

        metrics::histogram!("dns.lookup.latency_seconds").record(start.elapsed().as_secs_f64());
        debug!(
            name,
            answers = response.answers.len(),
            rcode = ?response.header.flags.response_code,
            "lookup complete"
        );
        Ok(Lookup { query, response })
    }
}
