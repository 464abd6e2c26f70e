//! Interned atoms.
//!
//! Atoms are compact 32-bit handles into a process-wide symbol table. Equal
//! names always intern to the same handle, so atom comparison is an integer
//! comparison. Interned names are leaked and never freed; the table only
//! grows.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// Interned symbol.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Atom(u32);

/// Error when interning an atom fails.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AtomError {
    /// The table exceeded `u32::MAX` entries.
    #[error("atom table exceeded capacity: {count} atoms, max is {}", u32::MAX)]
    TableOverflow { count: usize },
}

/// Names interned when the table is created, in handle order.
const PREDEFINED: &[&str] = &["Object", "ok", "error", "nil", "true", "false"];

impl Atom {
    /// Default nominal tag of plain objects.
    pub const OBJECT: Atom = Atom(0);
    pub const OK: Atom = Atom(1);
    pub const ERROR: Atom = Atom(2);
    pub const NIL: Atom = Atom(3);
    pub const TRUE: Atom = Atom(4);
    pub const FALSE: Atom = Atom(5);

    /// Intern `name`.
    ///
    /// # Panics
    /// Panics if the table exceeds capacity. Use `try_new` for fallible
    /// interning.
    pub fn new(name: &str) -> Self {
        Self::try_new(name).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Intern `name`, returning an error on table overflow.
    pub fn try_new(name: &str) -> Result<Self, AtomError> {
        table().intern(name)
    }

    /// The atom's name.
    pub fn as_str(self) -> &'static str {
        table().lookup(self)
    }

    /// Raw handle value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<&str> for Atom {
    fn from(name: &str) -> Self {
        Atom::new(name)
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Atom({})", self.as_str())
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct AtomTable {
    inner: RwLock<TableInner>,
}

struct TableInner {
    map: FxHashMap<&'static str, u32>,
    names: Vec<&'static str>,
}

fn table() -> &'static AtomTable {
    static TABLE: OnceLock<AtomTable> = OnceLock::new();
    TABLE.get_or_init(AtomTable::new)
}

impl AtomTable {
    fn new() -> Self {
        let mut map = FxHashMap::default();
        let mut names = Vec::with_capacity(256);
        for (index, &name) in (0u32..).zip(PREDEFINED) {
            map.insert(name, index);
            names.push(name);
        }
        AtomTable {
            inner: RwLock::new(TableInner { map, names }),
        }
    }

    fn intern(&self, name: &str) -> Result<Atom, AtomError> {
        // Fast path: already interned
        if let Some(&index) = self.inner.read().map.get(name) {
            return Ok(Atom(index));
        }

        let mut guard = self.inner.write();

        // Double-check after acquiring write lock
        if let Some(&index) = guard.map.get(name) {
            return Ok(Atom(index));
        }

        let count = guard.names.len();
        let index = u32::try_from(count).map_err(|_| AtomError::TableOverflow { count })?;
        let leaked: &'static str = Box::leak(name.to_owned().into_boxed_str());
        guard.names.push(leaked);
        guard.map.insert(leaked, index);
        Ok(Atom(index))
    }

    fn lookup(&self, atom: Atom) -> &'static str {
        let guard = self.inner.read();
        // Handles are only minted by `intern`, so the index is always present.
        guard.names.get(atom.0 as usize).copied().unwrap_or("")
    }
}
