//! Template syntax constants

/// Placeholder delimiters
pub mod delimiters {
    /// Opens a placeholder; doubled it is an escaped literal `{`
    pub const OPEN: u8 = b'{';

    /// Closes a placeholder; doubled outside a placeholder it is an escaped literal `}`
    pub const CLOSE: u8 = b'}';
}
