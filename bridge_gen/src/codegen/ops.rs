/* Thunk operation set and the presence-driven emission decisions */

use bridge_schema::Presence;

/// One native forwarding operation on a repeated scalar field. Every
/// operation that is emitted gets exactly one thunk symbol and one thunk
/// definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThunkOperation {
    Get,
    Set,
    Len,
    Has,
    Clear,
}

impl ThunkOperation {
    /// Operation tag as embedded in thunk symbols.
    pub fn tag(self) -> &'static str {
        match self {
            ThunkOperation::Get => "get",
            ThunkOperation::Set => "set",
            ThunkOperation::Len => "len",
            ThunkOperation::Has => "has",
            ThunkOperation::Clear => "clear",
        }
    }
}

/// Operations to emit for a field, as a pure function of its presence kind.
///
/// Implicit-presence fields still get a `Set` thunk: the generated mutable
/// view's dispatch table references it, and a referenced-but-undefined
/// symbol would fail at link time. No host-callable setter method exists
/// for that thunk; it is reachable only through the dispatch table.
pub fn operations_for(presence: Presence) -> &'static [ThunkOperation] {
    match presence {
        Presence::Implicit => &[
            ThunkOperation::Get,
            ThunkOperation::Set,
            ThunkOperation::Len,
            ThunkOperation::Clear,
        ],
        Presence::Explicit => &[
            ThunkOperation::Get,
            ThunkOperation::Set,
            ThunkOperation::Len,
            ThunkOperation::Has,
            ThunkOperation::Clear,
        ],
    }
}

/// Explicit-presence fields expose a per-index setter method.
pub fn emits_host_setter(presence: Presence) -> bool {
    presence == Presence::Explicit
}

/// Explicit-presence fields expose a has-query method.
pub fn emits_host_hazzer(presence: Presence) -> bool {
    presence == Presence::Explicit
}

/// The generic mutable view is only generated for implicit presence.
/// Presence-aware mutation needs a dispatch table that also updates the
/// has-bit; until that table exists, explicit-presence fields keep the
/// per-index setter instead.
pub fn emits_mutable_view(presence: Presence) -> bool {
    presence == Presence::Implicit
}
