//! Decodes a small subset of the WebAssembly binary format and runs an
//! exported function against `i32` arguments.
//!
//! Supported modules carry exactly a type, function, export and code
//! section, in that order, and use only `i32` values. Function bodies may
//! use `local.get`, `i32.const`, `i32.add`, `i32.sub`, `i32.mul`,
//! `i32.div_s`, `nop` and `end`.

#[cfg(feature = "log")]
#[macro_use] extern crate log;

#[cfg(not(feature = "log"))]
#[macro_use] mod no_log;

pub mod error;
pub mod opcode;
pub mod types;
pub mod reader;
pub mod stack;
pub mod section;
pub mod module;
pub mod interp;
pub mod runtime;

pub use crate::error::*;
pub use crate::types::*;
pub use crate::module::*;
pub use crate::interp::Config;
pub use crate::runtime::*;

pub const MAGIC: &[u8] = b"\0asm";
pub const VERSION_LEN: usize = 4;
