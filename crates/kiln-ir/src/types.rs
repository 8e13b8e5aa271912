//! Result-type handles
//!
//! The type system itself lives outside the IR. Instructions only carry a
//! [`TypeId`], and each executable keeps a [`TypeTable`] that maps those handles
//! back to display names for the dumper.

use rustc_hash::FxHashMap;
use std::fmt;

/// Handle to a type registered in a [`TypeTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type{}", self.0)
    }
}

/// Interns type names so that equal names share one [`TypeId`].
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    map: FxHashMap<String, TypeId>,
    names: Vec<String>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a type name, returning its handle.
    ///
    /// If the name was already interned, returns the existing handle.
    pub fn intern(&mut self, name: &str) -> TypeId {
        if let Some(&id) = self.map.get(name) {
            return id;
        }

        let id = TypeId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.map.insert(name.to_string(), id);
        id
    }

    /// Look up a handle by name without interning.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.map.get(name).copied()
    }

    /// Resolve a handle back to its name, if it belongs to this table.
    pub fn name(&self, id: TypeId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_deduplicates() {
        let mut table = TypeTable::new();
        let a = table.intern("u32");
        let b = table.intern("bool");
        let c = table.intern("u32");

        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_name_lookup() {
        let mut table = TypeTable::new();
        let id = table.intern("[]const u8");

        assert_eq!(table.name(id), Some("[]const u8"));
        assert_eq!(table.lookup("[]const u8"), Some(id));
        assert_eq!(table.lookup("f64"), None);
        assert_eq!(table.name(TypeId::new(42)), None);
    }
}
