//! Parsing and flattening of JSON configuration documents
//!
//! The export direction runs through here: raw text is parsed into a
//! sequence of documents, each supported outbound is parsed into the typed
//! model, and every usable outbound is flattened into a [`LinkInfo`] record
//! for the link builders.

use log::debug;
use serde_json::Value;

use crate::models::{ConfigDocument, LinkInfo, Outbound, OutboundSettings};

/// Parse raw text as one configuration document or an array of documents.
///
/// A single top-level object is normalized to a one-element sequence so
/// callers always iterate documents. Array members that are not objects are
/// kept as empty documents; they simply contain no outbounds.
pub fn parse_documents(input: &str) -> Result<Vec<ConfigDocument>, serde_json::Error> {
    let value: Value = serde_json::from_str(input)?;
    let items = match value {
        Value::Array(items) => items,
        other => vec![other],
    };

    let mut documents = Vec::with_capacity(items.len());
    for item in items {
        if item.is_object() {
            documents.push(serde_json::from_value(item)?);
        } else {
            documents.push(ConfigDocument::default());
        }
    }
    Ok(documents)
}

/// Try to parse one raw outbound value into the typed model.
///
/// Unsupported protocols and malformed entries yield `None`; parsing is
/// best-effort per item, never all-or-nothing.
pub fn parse_outbound(value: Value) -> Option<Outbound> {
    match serde_json::from_value(value) {
        Ok(outbound) => Some(outbound),
        Err(e) => {
            debug!("skipping outbound: {}", e);
            None
        }
    }
}

/// Flatten one outbound into the record driving link generation.
///
/// Returns `None` when the outbound carries no server address.
pub fn extract_link_info(document_remarks: Option<&str>, outbound: &Outbound) -> Option<LinkInfo> {
    let mut info = LinkInfo::default();

    // Address, port and credential selection depends on the settings family.
    match &outbound.settings {
        OutboundSettings::Vless(s) | OutboundSettings::Vmess(s) => {
            let server = s.vnext.first()?;
            info.address = server.address.clone();
            info.port = server.port;
            if let Some(user) = server.users.first() {
                info.user_id = user.id.clone();
                info.flow = user.flow.clone().unwrap_or_default();
            }
        }
        OutboundSettings::Trojan(s) | OutboundSettings::Shadowsocks(s) => {
            let server = s.servers.first()?;
            info.address = server.address.clone();
            info.port = server.port;
            info.user_id = server.password.clone();
            info.method = server.method.clone().unwrap_or_default();
        }
    }

    if info.address.is_empty() {
        return None;
    }

    // URIs use ':' as the port separator, so bare IPv6 literals get brackets.
    if info.address.contains(':') && !info.address.contains('[') {
        info.address = format!("[{}]", info.address);
    }

    info.remark = document_remarks
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .or_else(|| outbound.tag.clone().filter(|t| !t.is_empty()))
        .unwrap_or_else(|| String::from("Server"));

    info.network = String::from("tcp");
    if let Some(stream) = &outbound.stream_settings {
        if !stream.network.is_empty() {
            info.network = stream.network.clone();
        }
        info.security = stream.security.clone();

        // tlsSettings wins over realitySettings when both are present
        if let Some(tls) = stream
            .tls_settings
            .as_ref()
            .or(stream.reality_settings.as_ref())
        {
            info.sni = tls.server_name.clone().unwrap_or_default();
            info.alpn = tls.alpn.as_ref().map(|a| a.join(",")).unwrap_or_default();
            info.public_key = tls.public_key.clone().unwrap_or_default();
            info.short_id = tls.short_id.clone().unwrap_or_default();
        }

        if let Some(ws) = &stream.ws_settings {
            info.host = ws
                .headers
                .as_ref()
                .and_then(|h| h.host.clone())
                .unwrap_or_default();
            info.path = ws.path.clone().unwrap_or_default();
        }
        if info.path.is_empty() {
            if let Some(grpc) = &stream.grpc_settings {
                info.path = grpc.service_name.clone().unwrap_or_default();
            }
        }
    }

    Some(info)
}
