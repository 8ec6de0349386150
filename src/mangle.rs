use std::collections::hash_map::Entry;
use std::collections::HashMap;

use charset;
use charset::AcceptableCharset;
use symbol::{GlobalSymbol, Linkage, SymbolId};

/// A raw name whose first byte is this marker is emitted without any
/// prefix; the marker byte itself is consumed and never appears in the
/// output.
pub const NO_PREFIX_MARKER: u8 = 0x01;

/// Selects which extra prefix string is applied in front of the default
/// prefix, derived from the symbol's linkage.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PrefixKind {
    Default,
    Private,
    LinkerPrivate,
}

/// Mangles identifiers into assembler-safe symbol names. One instance per
/// compilation unit; the anonymous-ID table makes repeated requests for
/// the same unnamed symbol stable for the lifetime of the instance.
pub struct Mangler {
    prefix: String,
    private_prefix: String,
    linker_private_prefix: String,
    use_quotes: bool,
    acceptable: AcceptableCharset,
    anon_ids: HashMap<SymbolId, u64>,
    next_anon_id: u64,
}

impl Mangler {
    pub fn new(prefix: &str, private_prefix: &str, linker_private_prefix: &str) -> Mangler {
        Mangler {
            prefix: prefix.to_string(),
            private_prefix: private_prefix.to_string(),
            linker_private_prefix: linker_private_prefix.to_string(),
            use_quotes: false,
            acceptable: AcceptableCharset::new(),
            anon_ids: HashMap::new(),
            next_anon_id: 1,
        }
    }

    /// Switches between escaping every unacceptable byte (`false`, the
    /// default) and quoting the whole name when anything in it needs it
    /// (`true`, for assemblers that accept quoted symbol literals).
    pub fn set_use_quotes(&mut self, use_quotes: bool) {
        self.use_quotes = use_quotes;
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn private_prefix(&self) -> &str {
        &self.private_prefix
    }

    pub fn linker_private_prefix(&self) -> &str {
        &self.linker_private_prefix
    }

    /// Turns an arbitrary identifier into a syntactically legal symbol
    /// name, applying the prefixes selected by `kind` unless the name
    /// starts with `NO_PREFIX_MARKER`.
    ///
    /// `raw` must be non-empty; an empty name is a caller contract
    /// violation and panics.
    pub fn mangle_name(&self, raw: &str, kind: PrefixKind) -> String {
        assert!(!raw.is_empty(), "cannot mangle an empty name");

        let (body, apply_prefix) = if raw.as_bytes()[0] == NO_PREFIX_MARKER {
            (&raw[1..], false)
        } else {
            (raw, true)
        };

        if self.use_quotes {
            self.mangle_quoted(body, apply_prefix, kind)
        } else {
            self.mangle_unquoted(body, apply_prefix, kind)
        }
    }

    fn mangle_unquoted(&self, body: &str, apply_prefix: bool, kind: PrefixKind) -> String {
        let mut out = String::with_capacity(body.len());
        let mut rest = body.as_bytes();

        // A symbol may not open with a digit, even though digits are
        // acceptable mid-name.
        if let Some(&first) = rest.first() {
            if first.is_ascii_digit() {
                charset::push_escaped_byte(first, &mut out);
                rest = &rest[1..];
            }
        }

        for &byte in rest {
            if self.acceptable.contains(byte) {
                out.push(byte as char);
            } else {
                charset::push_escaped_byte(byte, &mut out);
            }
        }

        if apply_prefix {
            self.apply_prefixes(&out, kind)
        } else {
            out
        }
    }

    fn mangle_quoted(&self, body: &str, apply_prefix: bool, kind: PrefixKind) -> String {
        let bytes = body.as_bytes();
        let needs_quotes = bytes.first().map_or(false, |b| b.is_ascii_digit())
            || bytes.iter().any(|&b| !self.acceptable.contains(b));

        // Fast path: nothing needs quoting, pass the name through raw.
        if !needs_quotes {
            return if apply_prefix {
                self.apply_prefixes(body, kind)
            } else {
                body.to_string()
            };
        }

        let mut quoted = String::with_capacity(body.len());
        for c in body.chars() {
            match c {
                '"' => quoted.push_str("_QQ_"),
                '\n' => quoted.push_str("_NL_"),
                c => quoted.push(c),
            }
        }

        let quoted = if apply_prefix {
            self.apply_prefixes(&quoted, kind)
        } else {
            quoted
        };

        let mut out = String::with_capacity(quoted.len() + 2);
        out.push('"');
        out.push_str(&quoted);
        out.push('"');
        out
    }

    // The default prefix goes directly in front of the body; the
    // linkage-specific prefix goes in front of that.
    fn apply_prefixes(&self, body: &str, kind: PrefixKind) -> String {
        let extra = match kind {
            PrefixKind::Default => "",
            PrefixKind::Private => &self.private_prefix[..],
            PrefixKind::LinkerPrivate => &self.linker_private_prefix[..],
        };

        let mut out = String::with_capacity(extra.len() + self.prefix.len() + body.len());
        out.push_str(extra);
        out.push_str(&self.prefix);
        out.push_str(body);
        out
    }

    /// Produces the mangled name for a symbol: intrinsics pass through
    /// untouched, named symbols mangle `name + suffix` with the prefix
    /// kind derived from their linkage, and anonymous symbols first get a
    /// stable `__unnamed_<N>` identity assigned from this mangler's side
    /// table.
    pub fn mangle_symbol<S>(&mut self, sym: &S, suffix: &str, force_private: bool) -> String
    where
        S: GlobalSymbol + ?Sized,
    {
        if sym.is_intrinsic() {
            if let Some(name) = sym.name() {
                return name.to_string();
            }
        }

        let kind = if force_private || sym.linkage() == Linkage::Private {
            PrefixKind::Private
        } else if sym.linkage() == Linkage::LinkerPrivate {
            PrefixKind::LinkerPrivate
        } else {
            PrefixKind::Default
        };

        if let Some(name) = sym.name() {
            let mut raw = String::with_capacity(name.len() + suffix.len());
            raw.push_str(name);
            raw.push_str(suffix);
            return self.mangle_name(&raw, kind);
        }

        let id = self.anon_global_id(sym.symbol_id());
        self.mangle_name(&format!("__unnamed_{}{}", id, suffix), kind)
    }

    // Lookup-or-insert as one step; &mut self keeps it exclusive, so an
    // identity can never be assigned two different IDs.
    fn anon_global_id(&mut self, symbol_id: SymbolId) -> u64 {
        match self.anon_ids.entry(symbol_id) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let assigned = self.next_anon_id;
                self.next_anon_id += 1;
                *entry.insert(assigned)
            }
        }
    }
}
