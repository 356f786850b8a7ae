//! Wire contract with the provisioning backend

use serde::{Deserialize, Serialize};

/// Body for `/olt/connect_telnet`.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectRequest {
    pub ip: String,
    pub username: String,
    pub password: String,
}

/// Body for `/olt/display_telnet` and `/olt/disconnect_telnet`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRequest {
    pub ip: String,
}

/// Body for the three `/olt/*_port_setting` endpoints.
///
/// `vlan_id` travels as the raw field text, not an integer; the backend
/// parses it on its side.
#[derive(Debug, Clone, Serialize)]
pub struct PortRequest {
    pub olt_port: String,
    pub vlan_id: String,
    pub upstream_port: String,
    pub ip: String,
}

/// Response body shared by every endpoint.
///
/// Success bodies carry `message` (plus `output` for port status), failure
/// bodies carry `detail`. Fields absent from the body deserialize to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendReply {
    pub message: Option<String>,
    pub detail: Option<String>,
    pub output: Option<String>,
}
