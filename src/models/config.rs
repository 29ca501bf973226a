//! Configuration document model
//!
//! Mirrors the V2Ray JSON config shape for the four supported outbound
//! protocols. The `settings` shape depends on the protocol, so the two are
//! modeled together as a tagged enum and validated when an outbound is
//! deserialized.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents the protocol of an outbound.
/// This is the canonical enum used for protocol identification across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Vless,
    Vmess,
    Trojan,
    Shadowsocks,
}

impl Protocol {
    pub fn as_str(self) -> &'static str {
        match self {
            Protocol::Vless => "vless",
            Protocol::Vmess => "vmess",
            Protocol::Trojan => "trojan",
            Protocol::Shadowsocks => "shadowsocks",
        }
    }
}

/// One configuration document: an optional display name plus an ordered list
/// of outbounds.
///
/// Outbound entries stay as raw JSON values at this level so that a single
/// malformed or unsupported entry never fails the whole document; each entry
/// is parsed into [`Outbound`] individually.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigDocument {
    pub remarks: Option<String>,
    #[serde(default)]
    pub outbounds: Vec<Value>,
}

/// The document produced by the link import direction.
#[derive(Debug, Clone, Serialize)]
pub struct ImportedConfig {
    pub remarks: String,
    pub outbounds: Vec<Outbound>,
}

/// A single proxy outbound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outbound {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(flatten)]
    pub settings: OutboundSettings,
    #[serde(rename = "streamSettings", skip_serializing_if = "Option::is_none")]
    pub stream_settings: Option<StreamSettings>,
}

impl Outbound {
    pub fn protocol(&self) -> Protocol {
        match self.settings {
            OutboundSettings::Vless(_) => Protocol::Vless,
            OutboundSettings::Vmess(_) => Protocol::Vmess,
            OutboundSettings::Trojan(_) => Protocol::Trojan,
            OutboundSettings::Shadowsocks(_) => Protocol::Shadowsocks,
        }
    }
}

/// Protocol-dependent `settings` shape, tagged by the `protocol` field.
///
/// vless and vmess use vnext-style user entries, trojan and shadowsocks use
/// servers-style password entries. Deserializing an outbound with any other
/// protocol fails, which callers treat as "unsupported, skip".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "protocol", content = "settings", rename_all = "lowercase")]
pub enum OutboundSettings {
    Vless(VnextSettings),
    Vmess(VnextSettings),
    Trojan(ServerSettings),
    Shadowsocks(ServerSettings),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VnextSettings {
    #[serde(default)]
    pub vnext: Vec<VnextServer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VnextServer {
    pub address: String,
    pub port: u16,
    #[serde(default)]
    pub users: Vec<VnextUser>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VnextUser {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,
    #[serde(rename = "alterId", skip_serializing_if = "Option::is_none")]
    pub alter_id: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default)]
    pub servers: Vec<ServerEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerEntry {
    pub address: String,
    pub port: u16,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Transport-layer settings under an outbound.
///
/// Sub-blocks are optional and serialize to absent keys, never to null or
/// empty objects. Downstream consumers key behavior off presence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamSettings {
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub security: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_settings: Option<TlsSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reality_settings: Option<TlsSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ws_settings: Option<WsSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc_settings: Option<GrpcSettings>,
}

/// TLS parameters, shared by `tlsSettings` and `realitySettings` (the
/// reality block carries the same fields plus the key material).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpn: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WsSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<WsHeaders>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WsHeaders {
    #[serde(rename = "Host", skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrpcSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}
