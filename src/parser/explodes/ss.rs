use crate::models::{Outbound, OutboundSettings, ServerEntry, ServerSettings, StreamSettings};
use crate::utils::base64::{base64_decode, url_safe_base64_decode};

use super::common::unbracket_host;

/// Parse a Shadowsocks link into an `Outbound`.
///
/// Accepts the SIP002-style form `ss://BASE64(method:password)@server:port`,
/// with an optional `#remark` fragment. Only reachable when
/// [`ParseOptions::accept_shadowsocks`](crate::parser::ParseOptions) is set.
pub fn explode_ss(ss: &str) -> Option<Outbound> {
    // Extract the content part after ss://
    let mut content = ss.strip_prefix("ss://")?.to_string();

    // Drop the fragment; import keeps no per-node remark
    if let Some(hash_pos) = content.find('#') {
        content.truncate(hash_pos);
    }

    // Split userinfo from the server authority
    let (secret, server_part) = content.split_once('@')?;
    let (server, port_str) = server_part.rsplit_once(':')?;
    let port: u16 = port_str.parse().ok()?;
    if port == 0 {
        return None;
    }

    // Decode the secret part
    let decoded = base64_decode(secret)
        .or_else(|_| url_safe_base64_decode(secret))
        .ok()?;
    // Passwords may contain colons, so only the first one splits
    let (method, password) = decoded.split_once(':')?;
    if method.is_empty() {
        return None;
    }

    let address = unbracket_host(server);
    if address.is_empty() {
        return None;
    }

    Some(Outbound {
        tag: Some("proxy".to_string()),
        settings: OutboundSettings::Shadowsocks(ServerSettings {
            servers: vec![ServerEntry {
                address,
                port,
                password: password.to_string(),
                method: Some(method.to_string()),
            }],
        }),
        stream_settings: Some(StreamSettings {
            network: "tcp".to_string(),
            security: "none".to_string(),
            ..Default::default()
        }),
    })
}
