//! Lexically-chained environments: each scope holds its own name table and
//! an optional link to its enclosing scope.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::thunk::ThunkRef;

pub struct Env {
    table: RefCell<HashMap<String, ThunkRef>>,
    parent: Option<EnvRef>,
}

pub type EnvRef = Rc<Env>;

impl Env {
    pub fn root() -> EnvRef {
        Rc::new(Env {
            table: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    pub fn child(parent: &EnvRef) -> EnvRef {
        Rc::new(Env {
            table: RefCell::new(HashMap::new()),
            parent: Some(parent.clone()),
        })
    }

    /// Inserts/overwrites a binding in this environment's own table only.
    pub fn bind(&self, name: impl Into<String>, thunk: ThunkRef) {
        self.table.borrow_mut().insert(name.into(), thunk);
    }

    /// Walks local table, then parent chain; `None` if unbound anywhere.
    pub fn lookup(&self, name: &str) -> Option<ThunkRef> {
        if let Some(thunk) = self.table.borrow().get(name) {
            return Some(thunk.clone());
        }
        self.parent.as_ref().and_then(|p| p.lookup(name))
    }

    /// This environment's own bindings only (no parent chain), used by the
    /// REPL's `:load` command to merge a loaded file's bindings into the
    /// live environment.
    pub fn local_bindings(&self) -> Vec<(String, ThunkRef)> {
        self.table
            .borrow()
            .iter()
            .map(|(name, thunk)| (name.clone(), thunk.clone()))
            .collect()
    }

    /// Snapshot across the whole chain (local bindings first, then each
    /// ancestor's), for the REPL's `:env` command. Forcing errors are
    /// swallowed per-entry so one bad binding can't abort the whole dump.
    pub fn to_vector(&self, force: bool) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.collect(force, &mut out);
        out
    }

    fn collect(&self, force: bool, out: &mut Vec<(String, String)>) {
        for (name, thunk) in self.table.borrow().iter() {
            let printable = if force {
                thunk.force().map(|v| v.to_string()).unwrap_or_else(|e| format!("<error: {e}>"))
            } else {
                thunk.peek()
            };
            out.push((name.clone(), printable));
        }
        if let Some(parent) = &self.parent {
            parent.collect(force, out);
        }
    }
}
