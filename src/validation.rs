//! Input validation and sanitization
//!
//! Everything validated here ends up in command argv, so reject anything
//! that is not inert before it gets near a process spawn.

use crate::error::{NetroleError, NetroleResult};
use std::net::IpAddr;

/// Maximum length for interface names (Linux kernel limit is 15)
const MAX_INTERFACE_NAME_LEN: usize = 15;

/// Validate interface name to prevent command injection
///
/// Interface names must be alphanumeric with optional dashes and underscores,
/// and no longer than 15 characters (Linux kernel limit)
pub fn validate_interface_name(name: &str) -> NetroleResult<()> {
    if name.is_empty() {
        return Err(NetroleError::InvalidParameter(
            "Interface name cannot be empty".to_string()
        ));
    }

    if name.len() > MAX_INTERFACE_NAME_LEN {
        return Err(NetroleError::InvalidParameter(
            format!("Interface name too long (max {} characters)", MAX_INTERFACE_NAME_LEN)
        ));
    }

    for c in name.chars() {
        if !c.is_ascii_alphanumeric() && c != '-' && c != '_' {
            return Err(NetroleError::InvalidParameter(
                format!("Invalid interface name '{}': contains invalid character '{}'", name, c)
            ));
        }
    }

    // Don't allow names starting with dash (could be interpreted as option)
    if name.starts_with('-') {
        return Err(NetroleError::InvalidParameter(
            "Interface name cannot start with dash".to_string()
        ));
    }

    Ok(())
}

/// Validate MAC address format
///
/// Accepts standard MAC format: XX:XX:XX:XX:XX:XX (hex digits)
pub fn validate_mac_address(mac: &str) -> NetroleResult<()> {
    if mac.len() != 17 {
        return Err(NetroleError::InvalidParameter(
            "MAC address must be in format XX:XX:XX:XX:XX:XX".to_string()
        ));
    }

    let parts: Vec<&str> = mac.split(':').collect();
    if parts.len() != 6 {
        return Err(NetroleError::InvalidParameter(
            "MAC address must have 6 octets separated by colons".to_string()
        ));
    }

    for part in parts {
        if part.len() != 2 || !part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(NetroleError::InvalidParameter(
                format!("Invalid MAC address octet: {}", part)
            ));
        }
    }

    Ok(())
}

/// Validate IP address
pub fn validate_ip_address(addr: &str) -> NetroleResult<IpAddr> {
    addr.parse::<IpAddr>()
        .map_err(|_| NetroleError::InvalidParameter(
            format!("Invalid IP address: {}", addr)
        ))
}

/// Validate an address with optional /prefix suffix, e.g. "192.168.3.1/24"
pub fn validate_address_with_prefix(addr: &str) -> NetroleResult<()> {
    let (ip_part, prefix_part) = match addr.split_once('/') {
        Some((ip, prefix)) => (ip, Some(prefix)),
        None => (addr, None),
    };

    let ip = validate_ip_address(ip_part)?;

    if let Some(prefix) = prefix_part {
        let max = if ip.is_ipv6() { 128 } else { 32 };
        let len: u8 = prefix.parse()
            .map_err(|_| NetroleError::InvalidParameter(
                format!("Invalid prefix length: {}", prefix)
            ))?;
        if len > max {
            return Err(NetroleError::InvalidParameter(
                format!("Prefix length {} exceeds maximum {}", len, max)
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_interface_names() {
        assert!(validate_interface_name("eth0").is_ok());
        assert!(validate_interface_name("enp3s0").is_ok());
        assert!(validate_interface_name("usb-eth_1").is_ok());
    }

    #[test]
    fn test_invalid_interface_names() {
        assert!(validate_interface_name("").is_err());
        assert!(validate_interface_name("eth0; rm -rf /").is_err());
        assert!(validate_interface_name("-eth0").is_err());
        assert!(validate_interface_name("averyverylongname").is_err());
    }

    #[test]
    fn test_mac_validation() {
        assert!(validate_mac_address("aa:bb:cc:dd:ee:ff").is_ok());
        assert!(validate_mac_address("AA:BB:CC:DD:EE:FF").is_ok());
        assert!(validate_mac_address("aa:bb:cc:dd:ee").is_err());
        assert!(validate_mac_address("aa-bb-cc-dd-ee-ff").is_err());
        assert!(validate_mac_address("zz:bb:cc:dd:ee:ff").is_err());
    }

    #[test]
    fn test_address_with_prefix() {
        assert!(validate_address_with_prefix("192.168.3.1/24").is_ok());
        assert!(validate_address_with_prefix("192.168.3.1").is_ok());
        assert!(validate_address_with_prefix("fd00::1/64").is_ok());
        assert!(validate_address_with_prefix("192.168.3.1/33").is_err());
        assert!(validate_address_with_prefix("not-an-ip/24").is_err());
        assert!(validate_address_with_prefix("10.0.0.1/abc").is_err());
    }
}
