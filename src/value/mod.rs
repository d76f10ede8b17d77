//! Value Layer: Tagged Value Types
//!
//! Prinsip desain:
//! - Sum type native Rust, tidak ada manual union activation/destruction
//! - Inline storage: Tidak ada alokasi heap di dalam tipe
//! - Satu policy error: akses arm yang salah = `Err(AccessError)`

mod either;
mod error;
mod maybe;
mod tags;

pub use either::Either;
pub use error::{AccessError, AccessResult};
pub use maybe::Maybe;
pub use tags::{Failure, Success};
