// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Type checker interface for the slate language.
//!
//! Lowers syntactic types to interned semantic types and answers signature
//! queries over the resolved tree. Expression typing covers only the forms
//! that need no inference.

mod checker;
mod error;
mod types;

pub use checker::{Checker, FnSig};
pub use error::CheckError;
pub use types::{TyCx, TyRef, Type};
