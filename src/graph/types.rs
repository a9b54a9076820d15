//! Registry of iterator kinds.

use std::fmt;

use parking_lot::RwLock;

use super::error::{GraphError, GraphResult};

/// Kinds known to the core, in discriminant order.
const BUILTIN: [&str; 3] = ["invalid", "null", "fixed"];

/// Kinds registered at runtime by iterators living outside this crate.
static REGISTERED: RwLock<Vec<String>> = parking_lot::const_rwlock(Vec::new());

/// Discriminant naming a concrete iterator kind.
///
/// Optimizers and debug printers switch on this to special-case known tree
/// shapes without downcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Type(u32);

impl Type {
    /// Placeholder kind; no iterator reports it.
    pub const INVALID: Type = Type(0);
    /// The empty-set leaf.
    pub const NULL: Type = Type(1);
    /// A leaf over an explicit list of values.
    pub const FIXED: Type = Type(2);

    /// Return the kind registered under `name`, registering it if needed.
    ///
    /// Registering the same name twice yields the same kind.
    pub fn register(name: &str) -> Type {
        if let Ok(t) = Self::lookup(name) {
            return t;
        }

        let mut registered = REGISTERED.write();
        // Another thread may have won the race between lookup and write.
        if let Some(pos) = registered.iter().position(|n| n == name) {
            return Type((BUILTIN.len() + pos) as u32);
        }
        registered.push(name.to_string());
        Type((BUILTIN.len() + registered.len() - 1) as u32)
    }

    /// Find a previously registered kind by name.
    pub fn lookup(name: &str) -> GraphResult<Type> {
        if let Some(pos) = BUILTIN.iter().position(|n| *n == name) {
            return Ok(Type(pos as u32));
        }

        REGISTERED
            .read()
            .iter()
            .position(|n| n == name)
            .map(|pos| Type((BUILTIN.len() + pos) as u32))
            .ok_or_else(|| GraphError::UnknownType(name.to_string()))
    }

    /// The registered name of this kind.
    pub fn name(&self) -> String {
        let idx = self.0 as usize;
        if idx < BUILTIN.len() {
            return BUILTIN[idx].to_string();
        }

        REGISTERED
            .read()
            .get(idx - BUILTIN.len())
            .cloned()
            .unwrap_or_else(|| BUILTIN[0].to_string())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
