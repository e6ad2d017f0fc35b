// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Name resolution for the slate language.
//!
//! This crate binds every identifier in the AST to its declaration,
//! producing side tables from expression and type ids to [`Res`] records.

mod error;
mod resolution;
mod resolver;
mod rib;

pub use error::{ResolveError, ResolveErrorKind};
pub use resolution::{Res, Resolutions};
pub use resolver::Resolver;
pub use rib::{RibKind, RibStack};

use slate_ast::stmt::File;
use slate_ast::AstArena;

/// Resolve all names in a parsed file.
pub fn resolve(arena: &AstArena, file: &File) -> Result<Resolutions, Vec<ResolveError>> {
    Resolver::resolve(arena, file)
}
