//! Share-link generation
//!
//! One builder per protocol, each a pure formatter from a [`LinkInfo`]
//! record to its URI string. Query parameters are emitted only when their
//! value is non-empty, keeping the links minimal.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::json;

use crate::models::{LinkInfo, Protocol};
use crate::utils::url::url_encode;

/// Render one record as the share link for the given protocol.
pub fn link_to_uri(protocol: Protocol, info: &LinkInfo) -> String {
    match protocol {
        Protocol::Vmess => vmess_uri(info),
        Protocol::Vless => vless_uri(info),
        Protocol::Trojan => trojan_uri(info),
        Protocol::Shadowsocks => ss_uri(info),
    }
}

/// Format: vmess://BASE64(JSON)
///
/// Version, alter id, cipher and header type are fixed defaults, not taken
/// from the record.
pub fn vmess_uri(info: &LinkInfo) -> String {
    let payload = json!({
        "v": "2",
        "ps": info.remark,
        "add": info.address,
        "port": info.port,
        "id": info.user_id,
        "aid": "0",
        "scy": "auto",
        "net": info.network,
        "type": "none",
        "host": info.host,
        "path": info.path,
        "tls": info.security,
        "sni": info.sni,
        "alpn": info.alpn,
    });

    format!("vmess://{}", STANDARD.encode(payload.to_string()))
}

/// Format: vless://uuid@server:port?params#remark
///
/// `type` is always present; under gRPC the path travels as `serviceName`.
pub fn vless_uri(info: &LinkInfo) -> String {
    let mut params = Vec::new();

    params.push(format!("type={}", url_encode(&info.network)));
    push_param(&mut params, "security", &info.security);
    push_param(&mut params, "sni", &info.sni);
    push_param(&mut params, "alpn", &info.alpn);
    push_param(&mut params, "pbk", &info.public_key);
    push_param(&mut params, "sid", &info.short_id);
    push_param(&mut params, "flow", &info.flow);
    push_param(&mut params, "host", &info.host);
    if !info.path.is_empty() {
        let key = if info.network == "grpc" {
            "serviceName"
        } else {
            "path"
        };
        params.push(format!("{}={}", key, url_encode(&info.path)));
    }

    format!(
        "vless://{}@{}:{}?{}#{}",
        info.user_id,
        info.address,
        info.port,
        params.join("&"),
        url_encode(&info.remark)
    )
}

/// Format: trojan://password@server:port?params#remark
///
/// Transport parameters appear only for WebSocket and gRPC networks.
pub fn trojan_uri(info: &LinkInfo) -> String {
    let mut params = Vec::new();

    push_param(&mut params, "security", &info.security);
    push_param(&mut params, "sni", &info.sni);
    push_param(&mut params, "alpn", &info.alpn);

    if info.network == "ws" {
        params.push("type=ws".to_string());
        push_param(&mut params, "host", &info.host);
        push_param(&mut params, "path", &info.path);
    } else if info.network == "grpc" {
        params.push("type=grpc".to_string());
        push_param(&mut params, "serviceName", &info.path);
    }

    format!(
        "trojan://{}@{}:{}?{}#{}",
        info.user_id,
        info.address,
        info.port,
        params.join("&"),
        url_encode(&info.remark)
    )
}

/// Format: ss://BASE64(method:password)@server:port#remark
pub fn ss_uri(info: &LinkInfo) -> String {
    let user_info = format!("{}:{}", info.method, info.user_id);
    format!(
        "ss://{}@{}:{}#{}",
        STANDARD.encode(user_info),
        info.address,
        info.port,
        url_encode(&info.remark)
    )
}

fn push_param(params: &mut Vec<String>, key: &str, value: &str) {
    if !value.is_empty() {
        params.push(format!("{}={}", key, url_encode(value)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::base64::base64_decode;
    use serde_json::Value;

    fn minimal_info() -> LinkInfo {
        LinkInfo {
            remark: "Server".to_string(),
            address: "example.com".to_string(),
            port: 443,
            user_id: "uuid-1".to_string(),
            network: "tcp".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_vless_uri_minimal() {
        assert_eq!(
            vless_uri(&minimal_info()),
            "vless://uuid-1@example.com:443?type=tcp#Server"
        );
    }

    #[test]
    fn test_vless_uri_reality_grpc() {
        let info = LinkInfo {
            network: "grpc".to_string(),
            security: "reality".to_string(),
            sni: "example.com".to_string(),
            public_key: "the-key".to_string(),
            short_id: "01ab".to_string(),
            flow: "xtls-rprx-vision".to_string(),
            path: "svc".to_string(),
            ..minimal_info()
        };

        assert_eq!(
            vless_uri(&info),
            "vless://uuid-1@example.com:443?type=grpc&security=reality&sni=example.com&pbk=the-key&sid=01ab&flow=xtls-rprx-vision&serviceName=svc#Server"
        );
    }

    #[test]
    fn test_trojan_uri_ws() {
        let info = LinkInfo {
            remark: "My Server".to_string(),
            user_id: "pw".to_string(),
            network: "ws".to_string(),
            security: "tls".to_string(),
            sni: "host.com".to_string(),
            address: "host.com".to_string(),
            host: "host.com".to_string(),
            path: "/ws".to_string(),
            ..minimal_info()
        };

        assert_eq!(
            trojan_uri(&info),
            "trojan://pw@host.com:443?security=tls&sni=host.com&type=ws&host=host.com&path=%2Fws#My%20Server"
        );
    }

    #[test]
    fn test_trojan_uri_plain_tcp_has_no_type() {
        let info = LinkInfo {
            user_id: "pw".to_string(),
            ..minimal_info()
        };
        assert_eq!(trojan_uri(&info), "trojan://pw@example.com:443?#Server");
    }

    #[test]
    fn test_ss_uri() {
        let info = LinkInfo {
            user_id: "secret".to_string(),
            method: "aes-256-gcm".to_string(),
            address: "example.com".to_string(),
            port: 8388,
            ..minimal_info()
        };
        // BASE64("aes-256-gcm:secret")
        assert_eq!(
            ss_uri(&info),
            "ss://YWVzLTI1Ni1nY206c2VjcmV0@example.com:8388#Server"
        );
    }

    #[test]
    fn test_vmess_uri_payload() {
        let info = LinkInfo {
            network: "ws".to_string(),
            security: "tls".to_string(),
            sni: "example.com".to_string(),
            alpn: "h2,http/1.1".to_string(),
            host: "cdn.example.com".to_string(),
            path: "/ws".to_string(),
            ..minimal_info()
        };

        let uri = vmess_uri(&info);
        let payload = uri.strip_prefix("vmess://").unwrap();
        let json: Value = serde_json::from_str(&base64_decode(payload).unwrap()).unwrap();

        assert_eq!(json["v"], "2");
        assert_eq!(json["ps"], "Server");
        assert_eq!(json["add"], "example.com");
        assert_eq!(json["port"], 443);
        assert_eq!(json["id"], "uuid-1");
        assert_eq!(json["aid"], "0");
        assert_eq!(json["scy"], "auto");
        assert_eq!(json["net"], "ws");
        assert_eq!(json["type"], "none");
        assert_eq!(json["host"], "cdn.example.com");
        assert_eq!(json["path"], "/ws");
        assert_eq!(json["tls"], "tls");
        assert_eq!(json["sni"], "example.com");
        assert_eq!(json["alpn"], "h2,http/1.1");
    }
}
