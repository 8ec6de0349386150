/// Stable, pointer-free identity of a global symbol, typically an arena
/// index assigned by the caller. The mangler only uses it as the key of
/// its anonymous-ID side table; it never owns the symbol itself.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct SymbolId(pub u64);

/// Linkage classification, as far as mangling cares about it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Linkage {
    Normal,
    Private,
    LinkerPrivate,
}

/// The mangler's view of a global symbol. Code-generation backends
/// implement this for whatever their symbol representation is.
pub trait GlobalSymbol {
    fn symbol_id(&self) -> SymbolId;

    /// The symbol's assigned name, or `None` for anonymous globals.
    fn name(&self) -> Option<&str>;

    fn linkage(&self) -> Linkage;

    /// Intrinsic functions are resolved by a fixed naming convention
    /// understood by the backend and bypass mangling entirely.
    fn is_intrinsic(&self) -> bool {
        false
    }
}
