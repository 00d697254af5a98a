use crate::settings::Settings;
use crate::yaml::YamlValue;

/// Origin certificate path baked into the plugin's rc script.
pub const CREDENTIALS_FILE: &str = "/usr/local/etc/cloudflared/cert.pem";

/// Tunnel name used when the settings leave `tunnel_name` empty.
pub const FALLBACK_TUNNEL_NAME: &str = "opnsense-tunnel";

/// Build the cloudflared daemon config document.
///
/// `None` (not configured) and a disabled configuration both produce the
/// fixed safe document: tunnel `disabled` with a single `http_status:503`
/// catch-all, so a stale config file can never route traffic.
pub fn build_config(settings: Option<&Settings>) -> YamlValue {
    let Some(settings) = settings.filter(|s| s.enabled) else {
        return disabled_config();
    };

    let tunnel = if settings.tunnel_name.is_empty() {
        FALLBACK_TUNNEL_NAME
    } else {
        &settings.tunnel_name
    };

    let mut ingress = Vec::new();
    for route in &settings.tunnels {
        // A rule needs both sides of the mapping to be routable.
        if route.hostname.is_empty() || route.url.is_empty() {
            continue;
        }

        let mut rule = vec![
            entry("hostname", YamlValue::str(&route.hostname)),
            entry("service", YamlValue::str(&route.url)),
        ];
        if matches!(route.service.as_str(), "http" | "https") {
            rule.push(entry(
                "originRequest",
                YamlValue::Mapping(vec![entry(
                    "noTLSVerify",
                    YamlValue::Bool(route.url.starts_with("http://")),
                )]),
            ));
        }
        ingress.push(YamlValue::Mapping(rule));
    }

    // Mandatory catch-all; cloudflared rejects an ingress list without one.
    ingress.push(YamlValue::Mapping(vec![entry(
        "service",
        YamlValue::str("http_status:404"),
    )]));

    YamlValue::Mapping(vec![
        entry("tunnel", YamlValue::str(tunnel)),
        entry("credentials-file", YamlValue::str(CREDENTIALS_FILE)),
        ("ingress".to_string(), YamlValue::Sequence(ingress)),
    ])
}

fn disabled_config() -> YamlValue {
    YamlValue::Mapping(vec![
        entry("tunnel", YamlValue::str("disabled")),
        entry("credentials-file", YamlValue::str(CREDENTIALS_FILE)),
        (
            "ingress".to_string(),
            YamlValue::Sequence(vec![YamlValue::Mapping(vec![entry(
                "service",
                YamlValue::str("http_status:503"),
            )])]),
        ),
    ])
}

fn entry(key: &str, value: YamlValue) -> (String, YamlValue) {
    (key.to_string(), value)
}
