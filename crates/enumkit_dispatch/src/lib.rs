//! Dispatch over enum values.
//!
//! Maps or visits an enum value (or null/undefined) through a table of
//! per-member entries plus three reserved slots:
//!
//! - [`HANDLE_NULL`]: used for null
//! - [`HANDLE_UNDEFINED`]: used for undefined
//! - [`HANDLE_UNEXPECTED`]: used when nothing else matches
//!
//! Any entry may be set to [`UNHANDLED_ENTRY`] to mark a case that is known
//! but deliberately left unimplemented.
//!
//! # Modules
//!
//! - `table`: the shared [`DispatchTable`] and its resolution rules
//! - `mapper`: tables of plain results ([`map_value`], [`map_nullable`])
//! - `visitor`: tables of handlers ([`visit_value`], [`visit_nullable`])

mod errors;
pub mod mapper;
mod reserved;
pub mod table;
pub mod visitor;

pub use errors::DispatchError;
pub use mapper::{map_nullable, map_value, Mappee, MapperTable};
pub use reserved::{
    ReservedKey, UnhandledEntry, HANDLE_NULL, HANDLE_UNDEFINED, HANDLE_UNEXPECTED, UNHANDLED_ENTRY,
};
pub use table::{DispatchTable, TableEntry, TableKey};
pub use visitor::{visit_nullable, visit_value, Handler, Visitee, VisitorTable};
