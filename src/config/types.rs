use std::net::IpAddr;

use serde::Deserialize;

use crate::args::PositiveUsize;
use crate::probe::JitterWindow;

/// Raw probe configuration as written by the deployment tooling.
///
/// Field names follow the measurement platform's schema; lowercase and
/// snake_case spellings are accepted as aliases. A missing, zero or empty value
/// means "use the compiled-in default".
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(rename = "URLs", alias = "urls", alias = "Urls")]
    pub urls: Option<String>,
    #[serde(rename = "WaitFrom", alias = "wait_from", alias = "waitfrom")]
    pub wait_from: Option<u64>,
    #[serde(rename = "WaitTo", alias = "wait_to", alias = "waitto")]
    pub wait_to: Option<u64>,
    #[serde(rename = "Collect", alias = "collect", alias = "batch_size")]
    pub collect: Option<usize>,
    #[serde(
        rename = "IFaceName",
        alias = "ifacename",
        alias = "iface",
        alias = "interface"
    )]
    pub iface_name: Option<String>,
    #[serde(rename = "Runs", alias = "runs")]
    pub runs: Option<usize>,
    #[serde(rename = "NodeId", alias = "nodeid", alias = "node_id", alias = "NodeID")]
    pub node_id: Option<String>,
}

/// Local source selection for outgoing probes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindTarget {
    Address(IpAddr),
    Interface(String),
}

impl BindTarget {
    /// An IP literal binds to that address; anything else names an interface.
    #[must_use]
    pub fn from_hint(hint: &str) -> Self {
        let hint = hint.trim();
        hint.parse::<IpAddr>()
            .map_or_else(|_| BindTarget::Interface(hint.to_owned()), BindTarget::Address)
    }
}

impl std::fmt::Display for BindTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindTarget::Address(addr) => write!(f, "address {}", addr),
            BindTarget::Interface(name) => write!(f, "interface {}", name),
        }
    }
}

/// Validated configuration driving the probe loop.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub urls: Vec<String>,
    pub jitter: JitterWindow,
    pub batch_size: PositiveUsize,
    pub runs: PositiveUsize,
    pub bind: Option<BindTarget>,
    pub node_id: String,
}
