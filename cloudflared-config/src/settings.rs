use std::path::Path;

use opn_xml::{parse_file, XmlNode};
use serde::Serialize;

/// Default location of the OPNsense configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/conf/config.xml";

/// Cloudflared plugin settings as stored under `OPNsense/cloudflared`.
///
/// Field order is the JSON output order consumed by the reconfigure script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub enabled: bool,
    pub mode: String,
    pub token: String,
    pub tunnel_name: String,
    pub post_quantum: bool,
    pub edge_ip_version: String,
    pub protocol: String,
    pub loglevel: String,
    pub tunnels: Vec<TunnelRoute>,
}

/// One ingress route of the tunnel.
///
/// Disabled routes are filtered out at load time and never reach this type,
/// so the per-route enabled flag is not carried here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TunnelRoute {
    pub hostname: String,
    pub service: String,
    pub url: String,
}

impl Default for Settings {
    /// The fixed "not configured" settings object.
    fn default() -> Self {
        Self {
            enabled: false,
            mode: "token".to_string(),
            token: String::new(),
            tunnel_name: String::new(),
            post_quantum: true,
            edge_ip_version: "auto".to_string(),
            protocol: "auto".to_string(),
            loglevel: "info".to_string(),
            tunnels: Vec::new(),
        }
    }
}

/// Read cloudflared settings from an OPNsense config file.
///
/// Returns `None` ("not configured") when the file is unreadable, the XML is
/// malformed, or the `cloudflared` subtree or its `general` section is
/// missing. A present-but-disabled configuration still returns `Some`.
pub fn load(path: &Path) -> Option<Settings> {
    let root = parse_file(path).ok()?;
    from_config(&root)
}

/// Extract settings from a parsed config tree.
pub fn from_config(root: &XmlNode) -> Option<Settings> {
    // Plugin sections live under the <OPNsense> child of the document root,
    // or at the root itself when handed the section directly.
    let opnsense = if root.tag == "OPNsense" {
        root
    } else {
        root.get_child("OPNsense")?
    };
    let cloudflared = opnsense.get_child("cloudflared")?;
    let general = cloudflared.get_child("general")?;

    let tunnels = cloudflared
        .get_child("tunnels")
        .map(collect_routes)
        .unwrap_or_default();

    Some(Settings {
        enabled: flag(general, "enabled", "0"),
        mode: field(general, "mode", "token"),
        token: field(general, "token", ""),
        tunnel_name: field(general, "tunnel_name", ""),
        post_quantum: flag(general, "post_quantum", "1"),
        edge_ip_version: field(general, "edge_ip_version", "auto"),
        protocol: field(general, "protocol", "auto"),
        loglevel: field(general, "loglevel", "info"),
        tunnels,
    })
}

/// Service-gating check: enabled flag of the loaded settings, never failing.
pub fn is_enabled(path: &Path) -> bool {
    load(path).is_some_and(|settings| settings.enabled)
}

/// Collect enabled `<tunnel>` routes in document order.
fn collect_routes(tunnels: &XmlNode) -> Vec<TunnelRoute> {
    tunnels
        .get_children("tunnel")
        .into_iter()
        .filter(|tunnel| tunnel.find_text_or("enabled", "1") == "1")
        .map(|tunnel| TunnelRoute {
            hostname: field(tunnel, "hostname", ""),
            service: field(tunnel, "service", "http"),
            url: field(tunnel, "url", ""),
        })
        .collect()
}

fn field(node: &XmlNode, tag: &str, default: &str) -> String {
    node.find_text_or(tag, default).to_string()
}

/// OPNsense boolean fields hold "1" or "0"; anything but "1" is false.
fn flag(node: &XmlNode, tag: &str, default: &str) -> bool {
    node.find_text_or(tag, default) == "1"
}
