//! Construction tags untuk [`Either`](super::Either)
//!
//! Tag hanya carrier satu field untuk memilih arm mana yang diaktifkan.
//! Setelah konversi, tag tidak disimpan.

use std::ops::{Deref, DerefMut};

/// Tag arm sukses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Success<T>(pub T);

/// Tag arm gagal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Failure<E>(pub E);

impl<T> Success<T> {
    /// Reference ke payload
    #[inline(always)]
    pub fn value(&self) -> &T {
        &self.0
    }

    /// Buka tag, ambil payload
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<E> Failure<E> {
    /// Reference ke payload
    #[inline(always)]
    pub fn value(&self) -> &E {
        &self.0
    }

    /// Buka tag, ambil payload
    #[inline(always)]
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<T> Deref for Success<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Success<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<E> Deref for Failure<E> {
    type Target = E;

    fn deref(&self) -> &E {
        &self.0
    }
}

impl<E> DerefMut for Failure<E> {
    fn deref_mut(&mut self) -> &mut E {
        &mut self.0
    }
}
