//! Request dispatcher for the OLT backend
//!
//! One method per user action. Each trims its inputs, runs the matching
//! validator, issues a single blocking POST to the backend, and maps the
//! response to the line shown to the user. Session status and disconnect
//! send the ip as-is; only connect and the port actions validate.

use crate::http::HttpClient;
use crate::models::{BackendReply, ConnectRequest, PortRequest, SessionRequest};
use crate::validate::{self, ValidationError};
use reqwest::StatusCode;
use thiserror::Error;

/// Why an action produced no success line.
///
/// The display text of each variant is exactly the line shown to the user.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Rejected locally; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend answered with a non-200 status; `detail` is its own
    /// description of the failure.
    #[error("Error: {detail}")]
    Backend { status: u16, detail: String },

    /// The request never completed: connection refused, timeout, DNS
    /// failure, or an unreadable response body.
    #[error("{prefix} Error: {source}")]
    Transport {
        prefix: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

fn transport(prefix: &'static str) -> impl Fn(reqwest::Error) -> DispatchError {
    move |source| DispatchError::Transport { prefix, source }
}

/// Dispatcher bound to one backend URL.
///
/// Independent of any presentation layer: methods return the rendered
/// success line, and `DispatchError`'s display text is the failure line.
pub struct OltClient {
    base_url: String,
    http: HttpClient,
}

impl OltClient {
    pub fn new(base_url: &str, http: HttpClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/olt/{}", self.base_url, name)
    }

    fn post<T: serde::Serialize + ?Sized>(
        &self,
        name: &str,
        body: &T,
    ) -> reqwest::Result<(StatusCode, BackendReply)> {
        let resp = self.http.post_json(&self.endpoint(name), body)?;
        let status = resp.status();
        let reply: BackendReply = resp.json()?;
        Ok((status, reply))
    }

    /// Open a telnet session to the OLT at `ip`.
    pub fn connect(
        &self,
        ip: &str,
        username: &str,
        password: &str,
    ) -> Result<String, DispatchError> {
        let ip = ip.trim();
        let username = username.trim();
        let password = password.trim();
        validate::validate_credentials(ip, username, password)?;

        let body = ConnectRequest {
            ip: ip.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        };
        tracing::info!("Connecting to OLT {} as {}", ip, username);

        let (status, reply) = self
            .post("connect_telnet", &body)
            .map_err(transport("Connection"))?;
        if status == StatusCode::OK {
            Ok(format!("Success: {}", reply.message.unwrap_or_default()))
        } else {
            Err(backend_error(status, reply))
        }
    }

    /// Check whether a session is active for `ip`.
    pub fn session_status(&self, ip: &str) -> Result<String, DispatchError> {
        let ip = ip.trim();
        let body = SessionRequest { ip: ip.to_string() };
        tracing::info!("Checking session for OLT {}", ip);

        let (status, reply) = self
            .post("display_telnet", &body)
            .map_err(transport("Displaying"))?;
        if status == StatusCode::OK {
            // A 200 only signals that the session exists; the body carries
            // nothing we display.
            Ok(format!("Active session is available for {ip}."))
        } else {
            Err(backend_error(status, reply))
        }
    }

    /// Close the session for `ip`.
    pub fn disconnect(&self, ip: &str) -> Result<String, DispatchError> {
        let ip = ip.trim();
        let body = SessionRequest { ip: ip.to_string() };
        tracing::info!("Disconnecting from OLT {}", ip);

        let (status, reply) = self
            .post("disconnect_telnet", &body)
            .map_err(transport("Disconnection"))?;
        if status == StatusCode::OK {
            Ok("Disconnected successfully.".to_string())
        } else {
            Err(backend_error(status, reply))
        }
    }

    /// Apply a port/VLAN service configuration.
    pub fn configure_port(
        &self,
        olt_port: &str,
        vlan_id: &str,
        upstream_port: &str,
        ip: &str,
    ) -> Result<String, DispatchError> {
        let body = port_request(olt_port, vlan_id, upstream_port, ip)?;
        tracing::info!(
            "Configuring port {} VLAN {} upstream {} on {}",
            body.olt_port,
            body.vlan_id,
            body.upstream_port,
            body.ip
        );

        let (status, reply) = self
            .post("configure_port_setting", &body)
            .map_err(transport("Connection"))?;
        if status == StatusCode::OK {
            Ok(format!("Success: {}", reply.message.unwrap_or_default()))
        } else {
            Err(backend_error(status, reply))
        }
    }

    /// Show the current provisioning of a port. On success the backend
    /// sends both a `message` and the raw device `output`.
    pub fn port_status(
        &self,
        olt_port: &str,
        vlan_id: &str,
        upstream_port: &str,
        ip: &str,
    ) -> Result<String, DispatchError> {
        let body = port_request(olt_port, vlan_id, upstream_port, ip)?;
        tracing::info!(
            "Reading port {} VLAN {} upstream {} on {}",
            body.olt_port,
            body.vlan_id,
            body.upstream_port,
            body.ip
        );

        let (status, reply) = self
            .post("display_port_setting", &body)
            .map_err(transport("Connection"))?;
        if status == StatusCode::OK {
            Ok(format!(
                "Success: {}\n{}",
                reply.message.unwrap_or_default(),
                reply.output.unwrap_or_default()
            ))
        } else {
            Err(backend_error(status, reply))
        }
    }

    /// Remove a port/VLAN service configuration.
    pub fn delete_port(
        &self,
        olt_port: &str,
        vlan_id: &str,
        upstream_port: &str,
        ip: &str,
    ) -> Result<String, DispatchError> {
        let body = port_request(olt_port, vlan_id, upstream_port, ip)?;
        tracing::info!(
            "Removing port {} VLAN {} upstream {} on {}",
            body.olt_port,
            body.vlan_id,
            body.upstream_port,
            body.ip
        );

        let (status, reply) = self
            .post("delete_port_setting", &body)
            .map_err(transport("Connection"))?;
        if status == StatusCode::OK {
            Ok(format!("Success: {}", reply.message.unwrap_or_default()))
        } else {
            Err(backend_error(status, reply))
        }
    }
}

fn backend_error(status: StatusCode, reply: BackendReply) -> DispatchError {
    DispatchError::Backend {
        status: status.as_u16(),
        detail: reply.detail.unwrap_or_default(),
    }
}

fn port_request(
    olt_port: &str,
    vlan_id: &str,
    upstream_port: &str,
    ip: &str,
) -> Result<PortRequest, ValidationError> {
    let olt_port = olt_port.trim();
    let vlan_id = vlan_id.trim();
    let upstream_port = upstream_port.trim();
    validate::validate_port_settings(olt_port, vlan_id, upstream_port)?;

    Ok(PortRequest {
        olt_port: olt_port.to_string(),
        vlan_id: vlan_id.to_string(),
        upstream_port: upstream_port.to_string(),
        ip: ip.trim().to_string(),
    })
}
