//! Flattened share-link record

/// The flattened, protocol-agnostic record one share link is rendered from.
///
/// Produced per outbound during extraction and consumed by exactly one link
/// builder, then discarded. `address` is never empty: an outbound without a
/// server address yields no record at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkInfo {
    /// Display name, percent-encoded into the URI fragment.
    pub remark: String,
    /// Server address. IPv6 literals are already bracketed here so the URI
    /// port separator stays unambiguous.
    pub address: String,
    pub port: u16,
    /// User UUID for vless/vmess, password for trojan/shadowsocks.
    pub user_id: String,
    pub network: String,
    /// Security layer: empty, "tls" or "reality".
    pub security: String,
    pub sni: String,
    /// Comma-joined ALPN list; empty when absent.
    pub alpn: String,
    pub host: String,
    /// WebSocket path, or the gRPC service name when no path is set.
    pub path: String,
    /// Shadowsocks cipher.
    pub method: String,
    pub flow: String,
    pub public_key: String,
    pub short_id: String,
}
