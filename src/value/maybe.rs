//! Maybe: Nol atau satu nilai dengan tag eksplisit
//!
//! Prinsip desain:
//! - `Nothing` adalah tag kosong, `Something(T)` adalah arm yang hidup
//! - Konstruksi implisit dari `T` lewat `From`/`into()`
//! - Move-out selalu mengosongkan sumber (consume-and-clear)
//! - Deref di-cek: dereference saat kosong adalah panic, bukan UB

use std::mem;
use std::ops::{Deref, DerefMut};

/// Nol atau satu nilai `T`
///
/// ```
/// use valkit::Maybe;
///
/// let mut name: Maybe<String> = "valkit".to_string().into();
/// assert!(name.has_value());
/// assert_eq!(name.len(), 6); // deref ke String
///
/// name.reset();
/// assert!(!name.has_value());
/// ```
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// Tag kosong
    Nothing,
    /// Nilai yang hidup
    Something(T),
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Nothing
    }
}

impl<T> From<T> for Maybe<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Maybe::Something(value)
    }
}

impl<T> Maybe<T> {
    /// Maybe kosong
    #[inline(always)]
    pub const fn nothing() -> Self {
        Maybe::Nothing
    }

    /// Konstruksi payload in-place dari closure
    #[inline(always)]
    pub fn with<F>(make: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Maybe::Something(make())
    }

    /// `true` jika ada payload
    #[inline(always)]
    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(self, Maybe::Something(_))
    }

    /// Reference ke payload tanpa panic
    #[inline(always)]
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        match self {
            Maybe::Something(value) => Some(value),
            Maybe::Nothing => None,
        }
    }

    /// Mutable reference ke payload tanpa panic
    #[inline(always)]
    #[must_use]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Maybe::Something(value) => Some(value),
            Maybe::Nothing => None,
        }
    }

    /// Pinjam payload tanpa memindahkannya
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Something(value) => Maybe::Something(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Pinjam payload secara mutable
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Something(value) => Maybe::Something(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Drop payload jika ada dan tandai kosong. Idempotent.
    #[inline(always)]
    pub fn reset(&mut self) {
        *self = Maybe::Nothing;
    }

    /// Pindahkan isi ke Maybe baru, sumber jadi `Nothing`
    #[inline(always)]
    pub fn take(&mut self) -> Maybe<T> {
        mem::replace(self, Maybe::Nothing)
    }

    /// Pindahkan payload keluar. Setelah ini `has_value()` selalu `false`,
    /// jadi take kedua mengembalikan `None`.
    #[inline(always)]
    pub fn take_value(&mut self) -> Option<T> {
        self.take().into_option()
    }

    /// Isi dengan `value`. Jika sudah ada payload, di-assign in place.
    pub fn insert(&mut self, value: T) -> &mut T {
        match self {
            Maybe::Something(current) => *current = value,
            Maybe::Nothing => *self = Maybe::Something(value),
        }

        match self {
            Maybe::Something(current) => current,
            Maybe::Nothing => unreachable!("maybe was filled just above"),
        }
    }

    /// Ganti isi dengan `value`, kembalikan isi lama
    pub fn replace(&mut self, value: T) -> Maybe<T> {
        mem::replace(self, Maybe::Something(value))
    }

    /// Tukar isi dengan `other`
    ///
    /// Keduanya ada: payload yang ditukar. Hanya satu yang ada: payload
    /// pindah ke sisi lain dan sumbernya jadi `Nothing`. Keduanya kosong: no-op.
    pub fn swap(&mut self, other: &mut Maybe<T>) {
        match (&mut *self, &mut *other) {
            (Maybe::Something(lhs), Maybe::Something(rhs)) => mem::swap(lhs, rhs),
            (Maybe::Nothing, Maybe::Nothing) => {}
            (lhs, rhs) => mem::swap(lhs, rhs),
        }
    }

    /// Transformasi payload jika ada
    pub fn map<U, F>(self, func: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Something(value) => Maybe::Something(func(value)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Chain ke Maybe lain jika ada payload
    pub fn and_then<U, F>(self, func: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Something(value) => func(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Payload, atau `default` jika kosong
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        match self {
            Maybe::Something(value) => value,
            Maybe::Nothing => default,
        }
    }

    /// Payload, atau hasil `make()` jika kosong
    #[must_use]
    pub fn value_or_else<F>(self, make: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Something(value) => value,
            Maybe::Nothing => make(),
        }
    }

    /// Konversi ke `Option`
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Something(value) => Some(value),
            Maybe::Nothing => None,
        }
    }

    /// Konversi dari `Option`
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Something(value),
            None => Maybe::Nothing,
        }
    }
}

impl<T: Clone> Clone for Maybe<T> {
    fn clone(&self) -> Self {
        match self {
            Maybe::Something(value) => Maybe::Something(value.clone()),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    // Keduanya ada: re-use payload tujuan, tanpa destroy+reconstruct
    fn clone_from(&mut self, source: &Self) {
        match (self, source) {
            (Maybe::Something(to), Maybe::Something(from)) => to.clone_from(from),
            (to, from) => *to = from.clone(),
        }
    }
}

impl<T: Copy> Copy for Maybe<T> {}

impl<T> From<&Maybe<T>> for bool {
    #[inline(always)]
    fn from(maybe: &Maybe<T>) -> bool {
        maybe.has_value()
    }
}

impl<T> Deref for Maybe<T> {
    type Target = T;

    /// # Panics
    /// Panic jika Maybe kosong. Cek dengan `has_value()` dulu.
    #[track_caller]
    fn deref(&self) -> &T {
        match self {
            Maybe::Something(value) => value,
            Maybe::Nothing => panic!("dereferenced an empty Maybe"),
        }
    }
}

impl<T> DerefMut for Maybe<T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match self {
            Maybe::Something(value) => value,
            Maybe::Nothing => panic!("dereferenced an empty Maybe"),
        }
    }
}
