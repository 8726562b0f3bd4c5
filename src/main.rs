use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use dns_lookup::{config::parse_server, Rdata, Resolver, ResolverConfig};
use tracing::info;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Domain name to look up
    #[arg(value_name = "DOMAIN")]
    domain: String,

    /// Name server as IP or IP:PORT
    #[arg(long)]
    server: Option<String>,

    /// Receive timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Clear the recursion desired flag
    #[arg(long)]
    no_recursion: bool,
}

impl Cli {
    fn apply(&self, mut config: ResolverConfig) -> Result<ResolverConfig> {
        if let Some(server) = &self.server {
            config.server = parse_server(server).context("invalid --server")?;
        }
        if let Some(ms) = self.timeout_ms {
            config.timeout = Duration::from_millis(ms);
        }
        if self.no_recursion {
            config.recursion_desired = false;
        }
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let config = cli.apply(ResolverConfig::from_env()?)?;
    info!(?config, domain = %cli.domain, "starting lookup");

    let resolver = Resolver::from_config(&config);
    let lookup = resolver
        .lookup(&cli.domain)
        .await
        .with_context(|| format!("lookup of {} via {} failed", cli.domain, config.server))?;

    let header = &lookup.response.header;
    println!("id: {}", header.id);
    println!("response: {}", header.flags.response);
    println!("authoritative: {}", header.flags.authoritative_answer);
    println!("truncated: {}", header.flags.truncated);
    println!("recursion available: {}", header.flags.recursion_available);
    println!("rcode: {:?}", header.flags.response_code);
    println!(
        "questions: {}, answers: {}, authority: {}, additional: {}",
        header.qdcount, header.ancount, header.nscount, header.arcount
    );

    for answer in &lookup.response.answers {
        let data = match &answer.data {
            Rdata::A(addr) => addr.to_string(),
            Rdata::Unknown(raw) => format!("<{} bytes>", raw.len()),
        };
        println!(
            "{}\t{:?}\t{:?}\t{}\t{}",
            answer.name, answer.rtype, answer.class, answer.ttl, data
        );
    }

    Ok(())
}
