//! Identity bearing solver variables.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::cell::Cell;
use std::cmp::Ordering as CmpOrdering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_VARIABLE_ID: AtomicU64 = AtomicU64::new(1);

struct VariableData {
    id: u64,
    name: String,
    value: Cell<f64>,
}

/// A named unknown to be resolved by an external solver.
///
/// `Variable` is a cheap shared handle: clones refer to the same underlying
/// unknown, and equality, ordering, and hashing follow that shared identity
/// rather than the name or the current value. Two variables created with the
/// same name are still distinct.
///
/// The value starts at `0.0` and is written by the solver through
/// [`Variable::set_value`]; the algebra itself only reads it.
#[derive(Clone)]
pub struct Variable {
    data: Rc<VariableData>,
}

impl Variable {
    /// Create a new variable with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Variable {
            data: Rc::new(VariableData {
                id: NEXT_VARIABLE_ID.fetch_add(1, Ordering::Relaxed),
                name: name.into(),
                value: Cell::new(0.0),
            }),
        }
    }

    /// The identity of the underlying unknown. Unique per created variable
    /// and never reused within a process; clones share it.
    pub fn id(&self) -> u64 {
        self.data.id
    }

    /// The display name given at construction. May be empty.
    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// The value assigned by the most recent solve, `0.0` before any.
    pub fn value(&self) -> f64 {
        self.data.value.get()
    }

    /// Write a solved value back into the variable. Every handle to this
    /// variable observes the update.
    pub fn set_value(&self, value: f64) {
        self.data.value.set(value);
    }
}

impl Default for Variable {
    /// An anonymous variable with an empty name.
    fn default() -> Self {
        Variable::new("")
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.data.id == other.data.id
    }
}

impl Eq for Variable {}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> CmpOrdering {
        self.data.id.cmp(&other.data.id)
    }
}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.id.hash(state);
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variable")
            .field("id", &self.data.id)
            .field("name", &self.data.name)
            .field("value", &self.data.value.get())
            .finish()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data.name)
    }
}

impl Serialize for Variable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Variable", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("value", &self.value())?;
        state.end()
    }
}
