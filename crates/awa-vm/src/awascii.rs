//! The AWASCII character table.

/// Characters printable by `Print`, indexed by bubble value.
pub const AWASCII: &[u8; 64] =
    b"AWawJELYHOSIUMjelyhosiumPCNTpcntBDFGRbdfgr0123456789 .,!'()~_/;\n";

/// Printed for values outside the table.
pub const PLACEHOLDER: char = 'X';

/// Map a bubble value to its AWASCII character.
pub fn awascii(value: i32) -> char {
    usize::try_from(value)
        .ok()
        .and_then(|i| AWASCII.get(i))
        .map_or(PLACEHOLDER, |&b| b as char)
}
