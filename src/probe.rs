use std::fmt;

use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

/// Classified result of one probe reply, rendered as a string tag in records.
///
/// `Unknown` carries the underlying reply/error description for terminal
/// codes this crate does not map explicitly (TTL exceeded, network
/// unreachable, ...). `Exception` marks faults of the probe mechanism itself
/// rather than of the network path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    Success,
    TimedOut,
    DestinationHostUnreachable,
    Unknown(String),
    Exception,
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStatus::Success => write!(f, "Success"),
            ProbeStatus::TimedOut => write!(f, "TimedOut"),
            ProbeStatus::DestinationHostUnreachable => write!(f, "DestinationHostUnreachable"),
            ProbeStatus::Unknown(reason) => write!(f, "Unknown-{reason}"),
            ProbeStatus::Exception => write!(f, "Exception"),
        }
    }
}

impl Serialize for ProbeStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of a single probe attempt. Constructed once, logged once,
/// discarded. `success` is true only for a clean echo reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeOutcome {
    pub address: String,
    pub timestamp: DateTime<Local>,
    pub success: bool,
    pub status: ProbeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roundtrip_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl ProbeOutcome {
    pub fn success(address: &str, roundtrip_ms: u64) -> Self {
        Self {
            address: address.to_string(),
            timestamp: Local::now(),
            success: true,
            status: ProbeStatus::Success,
            roundtrip_ms: Some(roundtrip_ms),
            error_detail: None,
        }
    }

    /// A terminal reply that was not a clean echo (timeout, unreachable, ...).
    pub fn failure(address: &str, status: ProbeStatus, roundtrip_ms: Option<u64>) -> Self {
        debug_assert!(status != ProbeStatus::Success);
        Self {
            address: address.to_string(),
            timestamp: Local::now(),
            success: false,
            status,
            roundtrip_ms,
            error_detail: None,
        }
    }

    /// The probe mechanism itself failed before producing a classifiable
    /// reply (resolution failure, missing capability, ...).
    pub fn exception(address: &str, detail: impl Into<String>) -> Self {
        Self {
            address: address.to_string(),
            timestamp: Local::now(),
            success: false,
            status: ProbeStatus::Exception,
            roundtrip_ms: None,
            error_detail: Some(detail.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_iff_status_success() {
        let ok = ProbeOutcome::success("192.168.1.1", 5);
        assert!(ok.success);
        assert_eq!(ok.status, ProbeStatus::Success);

        let timed_out = ProbeOutcome::failure("8.8.8.8", ProbeStatus::TimedOut, None);
        assert!(!timed_out.success);

        let exception = ProbeOutcome::exception("not-a-real-host.invalid", "resolution failed");
        assert!(!exception.success);
        assert_eq!(exception.status, ProbeStatus::Exception);
    }

    #[test]
    fn status_wire_tags() {
        assert_eq!(ProbeStatus::Success.to_string(), "Success");
        assert_eq!(ProbeStatus::TimedOut.to_string(), "TimedOut");
        assert_eq!(
            ProbeStatus::DestinationHostUnreachable.to_string(),
            "DestinationHostUnreachable"
        );
        assert_eq!(
            ProbeStatus::Unknown("TtlExpired".to_string()).to_string(),
            "Unknown-TtlExpired"
        );
        assert_eq!(ProbeStatus::Exception.to_string(), "Exception");
    }

    #[test]
    fn serializes_to_tagged_json() {
        let outcome = ProbeOutcome::success("192.168.1.1", 5);
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&outcome).unwrap()).unwrap();

        assert_eq!(json["address"], "192.168.1.1");
        assert_eq!(json["success"], true);
        assert_eq!(json["status"], "Success");
        assert_eq!(json["roundtrip_ms"], 5);
        assert!(json.get("error_detail").is_none());
    }

    #[test]
    fn exception_detail_is_serialized() {
        let outcome = ProbeOutcome::exception("bad-host", "no such host");
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&outcome).unwrap()).unwrap();

        assert_eq!(json["status"], "Exception");
        assert_eq!(json["error_detail"], "no such host");
        assert!(json.get("roundtrip_ms").is_none());
    }

    #[test]
    fn serialization_is_idempotent() {
        let outcome = ProbeOutcome::failure("8.8.8.8", ProbeStatus::TimedOut, Some(0));
        let first = serde_json::to_string(&outcome).unwrap();
        let second = serde_json::to_string(&outcome).unwrap();
        assert_eq!(first, second);
    }
}
