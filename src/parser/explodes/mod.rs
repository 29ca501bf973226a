//! Share-link parsers
//!
//! Each submodule parses one link scheme into an [`Outbound`](crate::models::Outbound)
//! ("explode", after the upstream subconverter naming). The dispatcher in
//! `common` classifies a line by its scheme prefix and calls the matching
//! parser.

mod common;
mod ss;
mod trojan;
mod vless;
mod vmess;

pub use common::explode;
pub use ss::explode_ss;
pub use trojan::explode_trojan;
pub use vless::explode_vless;
pub use vmess::explode_vmess;
