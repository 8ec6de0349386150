/// The set of byte values that may appear unescaped in an unquoted mangled
/// name: ASCII letters, digits, `_`, `$`, and `.`. Everything else,
/// including control bytes and `"`, must be escaped or quoted.
pub struct AcceptableCharset {
    table: [bool; 256],
}

impl AcceptableCharset {
    pub fn new() -> AcceptableCharset {
        let mut table = [false; 256];

        for byte in b'a'..=b'z' {
            table[byte as usize] = true;
        }
        for byte in b'A'..=b'Z' {
            table[byte as usize] = true;
        }
        for byte in b'0'..=b'9' {
            table[byte as usize] = true;
        }
        table[b'_' as usize] = true;
        table[b'$' as usize] = true;
        table[b'.' as usize] = true;

        AcceptableCharset { table }
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.table[byte as usize]
    }
}

const HEX_DIGITS: &[u8] = b"0123456789ABCDEF";

/// Writes the escape for a single byte: the literal four-character
/// sequence `_XY_`, where `X` and `Y` are the uppercase hex digits of the
/// byte's high and low nibble.
pub fn push_escaped_byte(byte: u8, out: &mut String) {
    out.push('_');
    out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
    out.push(HEX_DIGITS[(byte & 0xF) as usize] as char);
    out.push('_');
}
