//! Fixed-Capacity Ring Buffer dengan overwrite-on-full
//!
//! Semua slot dialokasikan inline (tanpa heap) dan di-default-construct
//! sekali saat buffer dibuat. Kalau buffer penuh, `push` menimpa elemen
//! paling lama (newest-wins), tidak pernah gagal.
//!
//! Cursor di-wrap dengan advance-and-check, jadi N tidak harus power of 2.

use std::fmt;
use std::iter::FusedIterator;

use tracing::trace;

/// Ring buffer dengan kapasitas tetap `N`
///
/// `pop` tidak men-drop nilai di slot, hanya mengeluarkannya dari urutan
/// logis. Nilai lama di-drop saat slot ditimpa atau saat buffer di-drop.
#[derive(Clone)]
pub struct RingBuffer<T, const N: usize> {
    buffer: [T; N],
    // Posisi elemen paling lama
    read: usize,
    // Posisi slot berikutnya untuk ditulis
    write: usize,
    count: usize,
}

impl<T: Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default, const N: usize> RingBuffer<T, N> {
    /// Membuat ring buffer kosong dengan N slot `T::default()`.
    ///
    /// # Panics
    /// Panic jika N == 0
    #[must_use]
    pub fn new() -> Self {
        assert!(N > 0, "N must be non-zero");

        Self {
            buffer: std::array::from_fn(|_| T::default()),
            read: 0,
            write: 0,
            count: 0,
        }
    }
}

impl<T, const N: usize> RingBuffer<T, N> {
    /// Push elemen ke buffer. Kalau penuh, elemen paling lama ditimpa.
    ///
    /// O(1), tidak pernah gagal.
    #[inline(always)]
    pub fn push(&mut self, item: T) {
        self.buffer[self.write] = item;
        Self::advance(&mut self.write);

        if self.count == N {
            trace!(capacity = N, "ring buffer full, oldest element overwritten");
            self.read = self.write;
        } else {
            self.count += 1;
        }
    }

    /// Push salinan dari `item`
    #[inline(always)]
    pub fn push_cloned(&mut self, item: &T)
    where
        T: Clone,
    {
        self.push(item.clone());
    }

    /// Buang elemen paling lama. No-op kalau buffer kosong.
    ///
    /// Nilainya tidak dikembalikan: baca lewat [`RingBuffer::front`] dulu.
    #[inline(always)]
    pub fn pop(&mut self) {
        if self.count != 0 {
            self.count -= 1;
            Self::advance(&mut self.read);
        }
    }

    /// Elemen paling lama, atau `None` kalau kosong
    #[inline(always)]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        Some(&self.buffer[self.read])
    }

    /// Mutable reference ke elemen paling lama
    #[inline(always)]
    #[must_use]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        Some(&mut self.buffer[self.read])
    }

    /// Elemen paling baru, atau `None` kalau kosong
    #[inline(always)]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let newest = if self.write == 0 { N - 1 } else { self.write - 1 };
        Some(&self.buffer[newest])
    }

    /// Cek apakah buffer kosong
    #[inline(always)]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Cek apakah buffer penuh (push berikutnya akan menimpa)
    #[inline(always)]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.count == N
    }

    /// Jumlah elemen logis dalam buffer, selalu di `[0, N]`
    #[inline(always)]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Kapasitas buffer
    #[inline(always)]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Kosongkan buffer. Slot tidak di-drop, hanya cursor yang di-reset.
    pub fn clear(&mut self) {
        self.read = 0;
        self.write = 0;
        self.count = 0;
    }

    /// Iterator dari elemen paling lama ke paling baru
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.buffer,
            pos: self.read,
            remaining: self.count,
        }
    }

    #[inline(always)]
    fn advance(cursor: &mut usize) {
        *cursor += 1;

        if *cursor == N {
            *cursor = 0;
        }
    }
}

impl<T, const N: usize> Extend<T> for RingBuffer<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for RingBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a RingBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator atas elemen logis [`RingBuffer`], urutan FIFO
pub struct Iter<'a, T> {
    slots: &'a [T],
    pos: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = &self.slots[self.pos];
        self.pos += 1;
        if self.pos == self.slots.len() {
            self.pos = 0;
        }
        self.remaining -= 1;

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
