use serde_json::Value;
use v2share::{config_to_links, convert, links_to_config, ConvertError, Direction, ParseOptions};

#[cfg(test)]
mod convert_tests {
    use super::*;

    #[test]
    fn test_export_minimal_vless() {
        let input = r#"{"outbounds":[{"protocol":"vless","settings":{"vnext":[{"address":"example.com","port":443,"users":[{"id":"uuid-1"}]}]}}]}"#;

        let links = config_to_links(input).unwrap();
        assert_eq!(links, "vless://uuid-1@example.com:443?type=tcp#Server");
    }

    #[test]
    fn test_export_document_array_preserves_order() {
        let input = r#"[
            {
                "remarks": "First",
                "outbounds": [{
                    "protocol": "trojan",
                    "settings": { "servers": [{ "address": "a.com", "port": 443, "password": "p1" }] }
                }]
            },
            {
                "remarks": "Second",
                "outbounds": [{
                    "protocol": "trojan",
                    "settings": { "servers": [{ "address": "b.com", "port": 443, "password": "p2" }] }
                }]
            }
        ]"#;

        let links = config_to_links(input).unwrap();
        let lines: Vec<&str> = links.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "trojan://p1@a.com:443?#First");
        assert_eq!(lines[1], "trojan://p2@b.com:443?#Second");
    }

    #[test]
    fn test_export_skips_outbound_without_address() {
        let input = r#"{
            "outbounds": [
                {
                    "protocol": "vless",
                    "settings": { "vnext": [{ "address": "example.com", "port": 443, "users": [{ "id": "uuid-1" }] }] }
                },
                {
                    "protocol": "vless",
                    "settings": { "vnext": [] }
                }
            ]
        }"#;

        let links = config_to_links(input).unwrap();
        assert_eq!(links, "vless://uuid-1@example.com:443?type=tcp#Server");
    }

    #[test]
    fn test_export_skips_unsupported_protocols() {
        let input = r#"{
            "outbounds": [
                { "protocol": "freedom", "settings": {} },
                {
                    "protocol": "shadowsocks",
                    "settings": { "servers": [{ "address": "example.com", "port": 8388, "method": "aes-256-gcm", "password": "secret" }] }
                }
            ]
        }"#;

        let links = config_to_links(input).unwrap();
        assert_eq!(
            links,
            "ss://YWVzLTI1Ni1nY206c2VjcmV0@example.com:8388#Server"
        );
    }

    #[test]
    fn test_export_no_supported_outbounds() {
        let input = r#"{"outbounds":[{"protocol":"freedom","settings":{}}]}"#;
        let err = config_to_links(input).unwrap_err();
        assert!(matches!(err, ConvertError::NoConfigsFound));
        assert_eq!(err.to_string(), "No configs found");
    }

    #[test]
    fn test_export_invalid_json() {
        let err = config_to_links("{ this is not json").unwrap_err();
        assert!(matches!(err, ConvertError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_import_trojan_ws() {
        let input = "trojan://pw@host.com:443?security=tls&sni=host.com&type=ws&path=%2Fws&host=host.com#MyServer";

        let output = links_to_config(input, &ParseOptions::default()).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["remarks"], "Imported");
        let outbound = &json["outbounds"][0];
        assert_eq!(outbound["protocol"], "trojan");
        let server = &outbound["settings"]["servers"][0];
        assert_eq!(server["address"], "host.com");
        assert_eq!(server["port"], 443);
        assert_eq!(server["password"], "pw");

        let stream = &outbound["streamSettings"];
        assert_eq!(stream["network"], "ws");
        assert_eq!(stream["security"], "tls");
        assert_eq!(stream["tlsSettings"]["serverName"], "host.com");
        assert_eq!(stream["wsSettings"]["path"], "/ws");
        assert_eq!(stream["wsSettings"]["headers"]["Host"], "host.com");

        // Sub-blocks outside their condition stay absent
        let stream_keys = stream.as_object().unwrap();
        assert!(!stream_keys.contains_key("grpcSettings"));
        assert!(!stream_keys.contains_key("realitySettings"));
        assert!(!stream["tlsSettings"].as_object().unwrap().contains_key("alpn"));
    }

    #[test]
    fn test_import_tolerates_noise() {
        let input = "some pasted garbage\nvless://uuid-1@example.com:443?type=tcp#Server\nhttp://ignored.example\n";

        let output = links_to_config(input, &ParseOptions::default()).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["outbounds"].as_array().unwrap().len(), 1);
        assert_eq!(json["outbounds"][0]["protocol"], "vless");
        assert_eq!(
            json["outbounds"][0]["settings"]["vnext"][0]["users"][0]["encryption"],
            "none"
        );
    }

    #[test]
    fn test_import_no_valid_links() {
        let err = links_to_config("nothing here\njust text", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::NoValidLinks));
        assert_eq!(err.to_string(), "No valid links");
    }

    #[test]
    fn test_import_ss_requires_flag() {
        let input = "ss://YWVzLTI1Ni1nY206c2VjcmV0@example.com:8388#SS";

        let err = links_to_config(input, &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, ConvertError::NoValidLinks));

        let output = links_to_config(input, &ParseOptions::with_shadowsocks()).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["outbounds"][0]["protocol"], "shadowsocks");
        assert_eq!(
            json["outbounds"][0]["settings"]["servers"][0]["method"],
            "aes-256-gcm"
        );
    }

    #[test]
    fn test_convert_dispatch() {
        let options = ParseOptions::default();

        let config = r#"{"outbounds":[{"protocol":"vless","settings":{"vnext":[{"address":"example.com","port":443,"users":[{"id":"uuid-1"}]}]}}]}"#;
        let links = convert(config, Direction::ConfigToLinks, &options).unwrap();
        assert!(links.starts_with("vless://"));

        let back = convert(&links, Direction::LinksToConfig, &options).unwrap();
        let json: Value = serde_json::from_str(&back).unwrap();
        assert_eq!(json["remarks"], "Imported");
    }
}
