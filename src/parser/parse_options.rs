/// Options controlling link import behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept `ss://` links on import.
    ///
    /// The export direction emits `ss://` links but the import direction
    /// historically does not read them back. That asymmetry is kept as the
    /// default; set this flag to accept them anyway.
    pub accept_shadowsocks: bool,
}

impl ParseOptions {
    pub fn with_shadowsocks() -> Self {
        ParseOptions {
            accept_shadowsocks: true,
        }
    }
}
