//! Core module: Fixed-Capacity Storage
//!
//! Prinsip desain:
//! - No-Allocation: Semua slot inline, pre-allocated saat init
//! - Overwrite-on-full: Push tidak pernah gagal, newest-wins
//! - Any capacity: N tidak harus power of 2

mod ring_buffer;

pub use ring_buffer::{Iter, RingBuffer};
