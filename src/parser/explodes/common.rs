use crate::models::{GrpcSettings, Outbound, StreamSettings, TlsSettings, WsHeaders, WsSettings};
use crate::parser::ParseOptions;

/// Parse one share link into an `Outbound`.
///
/// This function detects the scheme and calls the appropriate parser.
/// Unknown schemes and malformed links yield `None`.
pub fn explode(link: &str, options: &ParseOptions) -> Option<Outbound> {
    // Trim the link
    let link = link.trim();

    // Check for empty link
    if link.is_empty() {
        return None;
    }

    // Detect link type and call appropriate parser
    if link.starts_with("vmess://") {
        super::vmess::explode_vmess(link)
    } else if link.starts_with("vless://") {
        super::vless::explode_vless(link)
    } else if link.starts_with("trojan://") {
        super::trojan::explode_trojan(link)
    } else if link.starts_with("ss://") {
        // Export emits ss:// links but import does not read them back by
        // default; acceptance sits behind an explicit compatibility flag.
        if options.accept_shadowsocks {
            super::ss::explode_ss(link)
        } else {
            None
        }
    } else {
        None
    }
}

/// Assemble stream settings from link fields.
///
/// Sub-blocks are conditional on the transport: `tlsSettings` only when
/// security is "tls", `wsSettings` only for WebSocket, `grpcSettings` only
/// for gRPC. Everything else stays absent, and empty field values are
/// omitted rather than carried as empty strings.
pub(super) fn build_stream_settings(
    network: &str,
    security: &str,
    sni: Option<String>,
    alpn: Option<String>,
    host: Option<String>,
    path: Option<String>,
    service_name: Option<String>,
) -> StreamSettings {
    let mut stream = StreamSettings {
        network: network.to_string(),
        security: security.to_string(),
        ..Default::default()
    };

    if security == "tls" {
        stream.tls_settings = Some(TlsSettings {
            server_name: sni,
            alpn: alpn.map(|a| a.split(',').map(str::to_string).collect()),
            ..Default::default()
        });
    }

    if network == "ws" {
        stream.ws_settings = Some(WsSettings {
            path,
            headers: host.map(|h| WsHeaders { host: Some(h) }),
        });
    } else if network == "grpc" {
        stream.grpc_settings = Some(GrpcSettings {
            service_name,
        });
    }

    stream
}

/// Maps empty strings to `None` so optional link fields stay omitted.
pub(super) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Strips the brackets off an IPv6 authority host.
///
/// URI authorities carry IPv6 literals bracketed; config documents carry
/// them bare.
pub(super) fn unbracket_host(host: &str) -> String {
    host.strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host)
        .to_string()
}
