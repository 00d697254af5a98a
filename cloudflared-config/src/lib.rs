//! Cloudflared configuration generation for OPNsense.
//!
//! The OPNsense cloudflared plugin stores its state in the `config.xml`
//! subtree `OPNsense/cloudflared`. This crate reads that subtree and derives
//! the two representations the service scripts need:
//!
//! - [`settings`] — the typed settings record with per-field defaults,
//!   serialized as JSON for the reconfigure script
//! - [`daemon`] — the YAML config file consumed by the cloudflared daemon
//! - [`yaml`] — ordered YAML document model and serialization strategies
//!
//! Every load failure (missing file, malformed XML, absent subtree) collapses
//! into the "not configured" state, which renders as a safe disabled config.

pub mod daemon;
pub mod settings;
pub mod yaml;
