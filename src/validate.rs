//! Local input validation
//!
//! Field values are checked against format rules before any request is
//! issued; a failed check means no network call happens for that action.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

// Octets are deliberately not range-checked, so "999.999.999.999" passes.
static IP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$").unwrap());
static PORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{1,2}$").unwrap());
static VLAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,5}$").unwrap());

/// A field value that failed a format rule.
///
/// The display text is exactly what the user sees in the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid IP Address format!")]
    IpFormat,
    #[error("Username cannot be empty!")]
    EmptyUsername,
    #[error("Password must be at least 4 characters long!")]
    PasswordTooShort,
    #[error("Invalid OLT Port format! Use Frame/Slot/Port.")]
    OltPortFormat,
    #[error("Invalid VLAN ID! Range: 1-65535.")]
    VlanId,
    #[error("Invalid Upstream Port format! Use Frame/Slot/Port.")]
    UpstreamPortFormat,
}

/// Check connection credentials: dotted-quad IP, non-empty username,
/// password of at least 4 characters.
pub fn validate_credentials(
    ip: &str,
    username: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if !IP_RE.is_match(ip) {
        return Err(ValidationError::IpFormat);
    }
    if username.is_empty() {
        return Err(ValidationError::EmptyUsername);
    }
    if password.chars().count() < 4 {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Check port-provisioning parameters: both ports as Frame/Slot/Port with
/// 1-2 digit segments, VLAN as an integer in [1, 65535].
pub fn validate_port_settings(
    olt_port: &str,
    vlan_id: &str,
    upstream_port: &str,
) -> Result<(), ValidationError> {
    if !PORT_RE.is_match(olt_port) {
        return Err(ValidationError::OltPortFormat);
    }
    let vlan_in_range = VLAN_RE.is_match(vlan_id)
        && vlan_id
            .parse::<u32>()
            .map(|v| (1..=65535).contains(&v))
            .unwrap_or(false);
    if !vlan_in_range {
        return Err(ValidationError::VlanId);
    }
    if !PORT_RE.is_match(upstream_port) {
        return Err(ValidationError::UpstreamPortFormat);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_credentials() {
        assert_eq!(validate_credentials("192.168.1.10", "admin", "secret"), Ok(()));
    }

    #[test]
    fn ip_octets_are_not_range_checked() {
        // Format-only check: any four 1-3 digit groups pass.
        assert_eq!(validate_credentials("999.999.999.999", "admin", "secret"), Ok(()));
        assert_eq!(validate_credentials("0.0.0.0", "admin", "secret"), Ok(()));
    }

    #[test]
    fn rejects_malformed_ip() {
        assert_eq!(
            validate_credentials("", "u", "pass"),
            Err(ValidationError::IpFormat)
        );
        assert_eq!(
            validate_credentials("1.2.3", "u", "pass"),
            Err(ValidationError::IpFormat)
        );
        assert_eq!(
            validate_credentials("1.2.3.4.5", "u", "pass"),
            Err(ValidationError::IpFormat)
        );
        assert_eq!(
            validate_credentials("1234.1.1.1", "u", "pass"),
            Err(ValidationError::IpFormat)
        );
    }

    #[test]
    fn rejects_empty_username() {
        assert_eq!(
            validate_credentials("1.1.1.1", "", "pass"),
            Err(ValidationError::EmptyUsername)
        );
    }

    #[test]
    fn rejects_short_password() {
        assert_eq!(
            validate_credentials("1.1.1.1", "u", "ab"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(validate_credentials("1.1.1.1", "u", "abcd"), Ok(()));
    }

    #[test]
    fn accepts_valid_port_settings() {
        assert_eq!(validate_port_settings("1/2/3", "100", "4/5/6"), Ok(()));
        assert_eq!(validate_port_settings("0/0/0", "1", "10/11/12"), Ok(()));
    }

    #[test]
    fn rejects_malformed_ports() {
        assert_eq!(
            validate_port_settings("abc", "100", "4/5/6"),
            Err(ValidationError::OltPortFormat)
        );
        // Segments are capped at two digits.
        assert_eq!(
            validate_port_settings("123/1/1", "100", "4/5/6"),
            Err(ValidationError::OltPortFormat)
        );
        assert_eq!(
            validate_port_settings("1/2/3", "100", "4-5-6"),
            Err(ValidationError::UpstreamPortFormat)
        );
    }

    #[test]
    fn rejects_vlan_out_of_range() {
        assert_eq!(
            validate_port_settings("1/2/3", "70000", "4/5/6"),
            Err(ValidationError::VlanId)
        );
        assert_eq!(
            validate_port_settings("1/2/3", "0", "4/5/6"),
            Err(ValidationError::VlanId)
        );
        assert_eq!(
            validate_port_settings("1/2/3", "vlan", "4/5/6"),
            Err(ValidationError::VlanId)
        );
        assert_eq!(validate_port_settings("1/2/3", "65535", "4/5/6"), Ok(()));
    }
}
