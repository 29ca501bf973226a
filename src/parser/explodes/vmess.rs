use serde_json::Value;

use crate::models::{Outbound, OutboundSettings, VnextServer, VnextSettings, VnextUser};
use crate::utils::base64::{base64_decode, url_safe_base64_decode};

use super::common::{build_stream_settings, non_empty};

/// Parse a VMess link into an `Outbound`.
///
/// The payload after the scheme is Base64-encoded JSON. Ports and alter ids
/// arrive as strings or numbers depending on the client that produced the
/// link, so both are accepted.
pub fn explode_vmess(vmess: &str) -> Option<Outbound> {
    // Extract the base64 part
    let encoded = vmess.strip_prefix("vmess://")?;

    // Decode base64, standard alphabet first, URL-safe as fallback
    let decoded = base64_decode(encoded)
        .or_else(|_| url_safe_base64_decode(encoded))
        .ok()?;

    // Try to parse as JSON
    let json: Value = serde_json::from_str(&decoded).ok()?;

    let address = json["add"].as_str().unwrap_or("").to_string();
    if address.is_empty() {
        return None;
    }
    let port = port_value(&json["port"])?;
    let id = json["id"].as_str().unwrap_or("").to_string();
    let alter_id = alter_id_value(&json["aid"]);

    let network = json["net"].as_str().unwrap_or("tcp").to_string();
    let security = json["tls"].as_str().unwrap_or("").to_string();
    let sni = json["sni"].as_str().unwrap_or("").to_string();
    let alpn = json["alpn"].as_str().unwrap_or("").to_string();
    let host = json["host"].as_str().unwrap_or("").to_string();
    let path = json["path"].as_str().unwrap_or("").to_string();

    let stream = build_stream_settings(
        &network,
        &security,
        non_empty(sni),
        non_empty(alpn),
        non_empty(host),
        non_empty(path.clone()),
        non_empty(path),
    );

    Some(Outbound {
        tag: Some("proxy".to_string()),
        settings: OutboundSettings::Vmess(VnextSettings {
            vnext: vec![VnextServer {
                address,
                port,
                users: vec![VnextUser {
                    id,
                    alter_id: Some(alter_id),
                    ..Default::default()
                }],
            }],
        }),
        stream_settings: Some(stream),
    })
}

/// Port field of a vmess payload, as string or number.
fn port_value(value: &Value) -> Option<u16> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_u64().and_then(|p| u16::try_from(p).ok()),
        _ => None,
    }
}

/// Alter id field, as string or number; anything unusable means 0.
fn alter_id_value(value: &Value) -> u32 {
    match value {
        Value::String(s) => s.parse().unwrap_or(0),
        Value::Number(n) => n.as_u64().map(|a| a as u32).unwrap_or(0),
        _ => 0,
    }
}
