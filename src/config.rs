use std::{
    env,
    net::{Ipv4Addr, SocketAddr},
    time::Duration,
};

use anyhow::{Context, Result};

use crate::{DNS_PORT, MAX_PACKET_SIZE};

const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    pub server: SocketAddr,
    pub timeout: Duration,
    pub recursion_desired: bool,
    pub buffer_size: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            server: SocketAddr::from((Ipv4Addr::new(8, 8, 8, 8), DNS_PORT)),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            recursion_desired: true,
            buffer_size: MAX_PACKET_SIZE,
        }
    }
}

impl ResolverConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let server = match lookup("DNS_LOOKUP_SERVER") {
            Some(value) => parse_server(&value).context("invalid DNS_LOOKUP_SERVER")?,
            None => defaults.server,
        };

        let timeout = lookup("DNS_LOOKUP_TIMEOUT_MS")
            .and_then(|val| val.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.timeout);

        let recursion_desired = lookup("DNS_LOOKUP_RECURSION")
            .map(|val| !matches!(val.trim(), "0" | "false" | "no" | "off"))
            .unwrap_or(defaults.recursion_desired);

        let buffer_size = lookup("DNS_LOOKUP_BUFFER_SIZE")
            .and_then(|val| val.parse::<usize>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(defaults.buffer_size);

        Ok(Self {
            server,
            timeout,
            recursion_desired,
            buffer_size,
        })
    }
}

/// Accepts either `ip:port` or a bare IP, which gets port 53.
pub fn parse_server(value: &str) -> Result<SocketAddr> {
    let value = value.trim();
    if let Ok(addr) = value.parse::<SocketAddr>() {
        return Ok(addr);
    }
    let ip = value
        .parse::<std::net::IpAddr>()
        .with_context(|| format!("not an address: {value}"))?;
    Ok(SocketAddr::new(ip, DNS_PORT))
}
