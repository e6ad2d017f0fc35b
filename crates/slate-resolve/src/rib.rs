// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Rib stacks for name lookup.

use std::collections::HashMap;

use crate::resolution::Res;

/// The kind of rib.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RibKind {
    /// Block or `let` scope.
    Normal,
    /// Function boundary; locals from outside are not visible past it.
    Fn,
}

#[derive(Debug)]
struct Rib {
    kind: RibKind,
    bindings: HashMap<String, Res>,
}

/// One namespace's stack of ribs, innermost last.
#[derive(Debug)]
pub struct RibStack {
    ribs: Vec<Rib>,
}

impl RibStack {
    /// A stack holding the file-level rib.
    pub fn new() -> Self {
        let mut stack = Self { ribs: Vec::new() };
        stack.push(RibKind::Normal);
        stack
    }

    pub fn push(&mut self, kind: RibKind) {
        self.ribs.push(Rib { kind, bindings: HashMap::new() });
    }

    pub fn depth(&self) -> usize {
        self.ribs.len()
    }

    /// Drop every rib pushed since `depth` was taken.
    pub fn truncate(&mut self, depth: usize) {
        self.ribs.truncate(depth.max(1));
    }

    /// Bind `name` in the innermost rib, replacing any binding there.
    pub fn define(&mut self, name: &str, res: Res) {
        if let Some(rib) = self.ribs.last_mut() {
            rib.bindings.insert(name.to_string(), res);
        }
    }

    /// The binding for `name` in the innermost rib only.
    pub fn in_top(&self, name: &str) -> Option<Res> {
        self.ribs.last()?.bindings.get(name).copied()
    }

    /// Look `name` up from the innermost rib outwards.
    ///
    /// The nearest binding wins. If reaching it crossed a function rib and
    /// it is a local, the name is not visible and `None` is returned.
    pub fn lookup(&self, name: &str) -> Option<Res> {
        let mut crossed_fn = false;
        for rib in self.ribs.iter().rev() {
            if let Some(&res) = rib.bindings.get(name) {
                return if crossed_fn && res.is_local() { None } else { Some(res) };
            }
            if rib.kind == RibKind::Fn {
                crossed_fn = true;
            }
        }
        None
    }
}

impl Default for RibStack {
    fn default() -> Self {
        Self::new()
    }
}
