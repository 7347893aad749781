use std::io;
use std::net::IpAddr;
use std::time::Duration;

use surge_ping::{Client, Config, ICMP, IcmpPacket, PingIdentifier, PingSequence, SurgeError};

use crate::probe::{ProbeOutcome, ProbeStatus};

/// Echo payload: 32 bytes of a repeated filler byte.
const PROBE_PAYLOAD: [u8; 32] = [b'a'; 32];

/// Sanitize hostname by keeping only valid characters (alphanumeric, dots, hyphens)
/// Returns None if the result is empty
fn sanitize_hostname(hostname: &str) -> Option<String> {
    // Also handle case where user included port like "example.com:8080"
    let hostname = hostname.split(':').next().unwrap_or(hostname);

    let sanitized: String = hostname
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '.' || *c == '-')
        .collect();

    if sanitized.is_empty() {
        None
    } else {
        Some(sanitized)
    }
}

pub struct ProbeExecutor;

impl ProbeExecutor {
    /// Sends one echo request to `address`, waiting at most `timeout` for a
    /// reply, and classifies whatever happens into a `ProbeOutcome`.
    ///
    /// Every path returns an outcome. Callers never see an error from this
    /// function: mechanism faults (resolution, socket setup) come back as
    /// `Exception` outcomes.
    pub async fn probe(address: &str, timeout: Duration) -> ProbeOutcome {
        let target_ip = match Self::resolve_target(address).await {
            Ok(ip) => ip,
            Err(e) => {
                return ProbeOutcome::exception(address, format!("failed to resolve: {e}"));
            }
        };

        let config = match target_ip {
            IpAddr::V4(_) => Config::default(),
            IpAddr::V6(_) => Config::builder().kind(ICMP::V6).build(),
        };
        let client = match Client::new(&config) {
            Ok(client) => client,
            Err(e) => {
                return ProbeOutcome::exception(address, format!("failed to open icmp socket: {e}"));
            }
        };

        let mut pinger = client.pinger(target_ip, PingIdentifier(1)).await;
        pinger.timeout(timeout);

        match pinger.ping(PingSequence(1), &PROBE_PAYLOAD).await {
            Ok((IcmpPacket::V4(_), duration)) | Ok((IcmpPacket::V6(_), duration)) => {
                ProbeOutcome::success(address, duration.as_millis() as u64)
            }
            Err(e) => ProbeOutcome::failure(address, Self::classify_error(&e), None),
        }
    }

    /// Resolve the target to an IP address
    async fn resolve_target(target: &str) -> Result<IpAddr, io::Error> {
        // Try parsing as IP address first
        if let Ok(ip) = target.parse::<IpAddr>() {
            return Ok(ip);
        }

        // Sanitize hostname input
        let sanitized = sanitize_hostname(target).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "hostname has no usable characters")
        })?;

        // Try resolving as hostname
        let host_port = format!("{sanitized}:0");
        let mut addrs = tokio::net::lookup_host(&host_port).await?;
        addrs.next().map(|addr| addr.ip()).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "hostname resolved to no addresses")
        })
    }

    /// Map a terminal non-success reply onto a status tag. Anything this
    /// crate does not name explicitly keeps its description under `Unknown-`.
    fn classify_error(err: &SurgeError) -> ProbeStatus {
        match err {
            SurgeError::Timeout { .. } => ProbeStatus::TimedOut,
            SurgeError::IOError(e) if e.kind() == io::ErrorKind::HostUnreachable => {
                ProbeStatus::DestinationHostUnreachable
            }
            other => ProbeStatus::Unknown(other.to_string()),
        }
    }
}
