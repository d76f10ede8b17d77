//! Valkit - Zero-Allocation Value Types
//!
//! Arsitektur:
//! - `core`: Fixed-capacity ring buffer, overwrite-on-full
//! - `value`: Tagged unions `Either<T, E>` dan `Maybe<T>`
//!
//! Semua tipe adalah plain value type: tanpa lock, tanpa I/O,
//! storage selalu inline.

pub mod core;
pub mod value;

pub use crate::core::RingBuffer;
pub use crate::value::{AccessError, AccessResult, Either, Failure, Maybe, Success};
