// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Semantic types and their interner.

use std::collections::HashMap;

use slate_ast::{print, AstArena, ExprId};

/// Handle to an interned [`Type`]. Equal types share one handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TyRef(u32);

/// A type in slate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Error placeholder for recovery
    Error,
    Unit,
    Int,
    Bool,
    Str,
    Tuple(Vec<TyRef>),
    /// Slice type (view into an array)
    Slice(TyRef),
    /// Array whose length is an unevaluated expression
    Array { elem: TyRef, len: ExprId },
    /// Named user-defined type
    Named(String),
}

/// Type context: owns every semantic type of one compilation.
#[derive(Debug)]
pub struct TyCx {
    types: Vec<Type>,
    interned: HashMap<Type, TyRef>,
}

impl TyCx {
    pub fn new() -> Self {
        Self {
            types: Vec::new(),
            interned: HashMap::new(),
        }
    }

    /// The handle for `ty`, allocating it on first sight.
    pub fn intern(&mut self, ty: Type) -> TyRef {
        if let Some(&existing) = self.interned.get(&ty) {
            return existing;
        }
        let handle = TyRef(self.types.len() as u32);
        self.types.push(ty.clone());
        self.interned.insert(ty, handle);
        handle
    }

    pub fn get(&self, ty: TyRef) -> &Type {
        &self.types[ty.0 as usize]
    }

    pub fn error(&mut self) -> TyRef {
        self.intern(Type::Error)
    }

    pub fn unit(&mut self) -> TyRef {
        self.intern(Type::Unit)
    }

    /// Number of distinct types interned so far.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Render a type the way it is written in source.
    pub fn display(&self, arena: &AstArena, ty: TyRef) -> String {
        match self.get(ty) {
            Type::Error => "<error>".to_string(),
            Type::Unit => "()".to_string(),
            Type::Int => "int".to_string(),
            Type::Bool => "bool".to_string(),
            Type::Str => "str".to_string(),
            Type::Named(name) => name.clone(),
            Type::Tuple(elems) => {
                let elems: Vec<_> = elems.iter().map(|&e| self.display(arena, e)).collect();
                if elems.len() == 1 {
                    format!("({},)", elems[0])
                } else {
                    format!("({})", elems.join(", "))
                }
            }
            Type::Slice(elem) => format!("[{}]", self.display(arena, *elem)),
            Type::Array { elem, len } => format!(
                "[{}; {}]",
                self.display(arena, *elem),
                print::expr_to_string(arena, *len)
            ),
        }
    }
}

impl Default for TyCx {
    fn default() -> Self {
        Self::new()
    }
}
