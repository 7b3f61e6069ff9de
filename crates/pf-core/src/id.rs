use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner for canvas object IDs — fast comparisons, low memory.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// A lightweight, interned identifier for shapes and groups.
/// Internally a `Spur` index — 4 bytes, Copy, Eq, Hash in O(1).
///
/// IDs are opaque strings, assigned once and never reused. Shapes and
/// groups share one namespace; prefixes (`shape_N`, `group_N`) keep the
/// minted values distinct.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(Spur);

impl ShapeId {
    /// Intern a string as a ShapeId, or return existing if already interned.
    pub fn intern(s: &str) -> Self {
        ShapeId(INTERNER.get_or_intern(s))
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    /// Mint a unique ID with a type prefix (e.g. `shape_1`, `group_2`).
    pub fn mint(prefix: &str) -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self::intern(&format!("{prefix}_{n}"))
    }
}

impl fmt::Debug for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ShapeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ShapeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ShapeId::intern(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_roundtrip() {
        let a = ShapeId::intern("hero_banner");
        let b = ShapeId::intern("hero_banner");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "hero_banner");
    }

    #[test]
    fn minted_ids_are_unique() {
        let a = ShapeId::mint("shape");
        let b = ShapeId::mint("shape");
        assert_ne!(a, b);
    }
}
