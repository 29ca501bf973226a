use std::collections::HashMap;
use url::Url;

use crate::models::{Outbound, OutboundSettings, VnextServer, VnextSettings, VnextUser};
use crate::utils::url::url_decode;

use super::common::{build_stream_settings, unbracket_host};

/// Parse a VLESS link into an `Outbound`.
pub fn explode_vless(vless: &str) -> Option<Outbound> {
    // Check if the link starts with vless://
    if !vless.starts_with("vless://") {
        return None;
    }

    // Try to parse as URL
    let url = Url::parse(vless).ok()?;

    // Extract the user id from the authority
    let id = url_decode(url.username());
    if id.is_empty() {
        return None;
    }

    // Extract host and port
    let host = unbracket_host(url.host_str()?);
    let port = url.port().unwrap_or(443);
    if port == 0 {
        return None;
    }

    // Extract parameters from the query string
    let mut params = HashMap::new();
    for (key, value) in url.query_pairs() {
        params.insert(key.to_string(), value.to_string());
    }

    let network = params
        .get("type")
        .cloned()
        .unwrap_or_else(|| "tcp".to_string());
    let security = params
        .get("security")
        .cloned()
        .unwrap_or_else(|| "none".to_string());

    let stream = build_stream_settings(
        &network,
        &security,
        params.get("sni").cloned(),
        params.get("alpn").cloned(),
        params.get("host").cloned(),
        params.get("path").cloned(),
        params
            .get("serviceName")
            .or_else(|| params.get("path"))
            .cloned(),
    );

    Some(Outbound {
        tag: Some("proxy".to_string()),
        settings: OutboundSettings::Vless(VnextSettings {
            vnext: vec![VnextServer {
                address: host,
                port,
                users: vec![VnextUser {
                    id,
                    encryption: Some("none".to_string()),
                    flow: params.get("flow").cloned(),
                    alter_id: None,
                }],
            }],
        }),
        stream_settings: Some(stream),
    })
}
