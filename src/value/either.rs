//! Either: Tagged Union sukses-atau-error
//!
//! Prinsip desain:
//! - Tepat satu arm hidup, dijamin oleh enum (tanpa manual union lifetime)
//! - Konstruksi hanya lewat tag [`Success`] / [`Failure`]
//! - Void success = `Either<(), E>`, arm sukses zero-size
//! - Akses arm yang salah mengembalikan [`AccessError`], tidak pernah terminate

use std::fmt;

use tracing::trace;

use super::error::{AccessError, AccessResult};
use super::tags::{Failure, Success};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Arm<T, E> {
    Value(T),
    Error(E),
}

/// Tepat satu dari nilai sukses `T` atau error `E`
///
/// ```
/// use valkit::{Either, Failure, Success};
///
/// let ok: Either<i32, String> = Success(0).into();
/// let next = ok.and_then(|v| Either::from(Success(v + 1)));
/// assert_eq!(next.value(), Ok(&1));
///
/// let bad: Either<i32, String> = Failure("bad".to_string()).into();
/// assert!(bad.value().is_err());
/// ```
#[must_use]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Either<T, E> {
    arm: Arm<T, E>,
}

impl<T, E> From<Success<T>> for Either<T, E> {
    #[inline(always)]
    fn from(tag: Success<T>) -> Self {
        Self {
            arm: Arm::Value(tag.0),
        }
    }
}

impl<T, E> From<Failure<E>> for Either<T, E> {
    #[inline(always)]
    fn from(tag: Failure<E>) -> Self {
        Self {
            arm: Arm::Error(tag.0),
        }
    }
}

/// Void success: `Either<(), E>` default-nya arm sukses
impl<E> Default for Either<(), E> {
    fn default() -> Self {
        Success(()).into()
    }
}

impl<T, E> Either<T, E> {
    /// `true` jika dibuat dari [`Success`]
    #[inline(always)]
    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(self.arm, Arm::Value(_))
    }

    /// `true` jika dibuat dari [`Failure`]
    #[inline(always)]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.has_value()
    }

    /// Nilai sukses
    ///
    /// # Errors
    /// [`AccessError::NoValue`] jika arm gagal yang aktif
    #[inline(always)]
    pub fn value(&self) -> AccessResult<&T> {
        match &self.arm {
            Arm::Value(value) => Ok(value),
            Arm::Error(_) => Err(no_value()),
        }
    }

    /// Mutable reference ke nilai sukses
    ///
    /// # Errors
    /// [`AccessError::NoValue`] jika arm gagal yang aktif
    #[inline(always)]
    pub fn value_mut(&mut self) -> AccessResult<&mut T> {
        match &mut self.arm {
            Arm::Value(value) => Ok(value),
            Arm::Error(_) => Err(no_value()),
        }
    }

    /// Pindahkan nilai sukses keluar
    ///
    /// # Errors
    /// [`AccessError::NoValue`] jika arm gagal yang aktif
    pub fn into_value(self) -> AccessResult<T> {
        match self.arm {
            Arm::Value(value) => Ok(value),
            Arm::Error(_) => Err(no_value()),
        }
    }

    /// Nilai error
    ///
    /// # Errors
    /// [`AccessError::NoError`] jika arm sukses yang aktif
    #[inline(always)]
    pub fn error(&self) -> AccessResult<&E> {
        match &self.arm {
            Arm::Error(error) => Ok(error),
            Arm::Value(_) => Err(no_error()),
        }
    }

    /// Mutable reference ke nilai error
    ///
    /// # Errors
    /// [`AccessError::NoError`] jika arm sukses yang aktif
    #[inline(always)]
    pub fn error_mut(&mut self) -> AccessResult<&mut E> {
        match &mut self.arm {
            Arm::Error(error) => Ok(error),
            Arm::Value(_) => Err(no_error()),
        }
    }

    /// Pindahkan nilai error keluar
    ///
    /// # Errors
    /// [`AccessError::NoError`] jika arm sukses yang aktif
    pub fn into_error(self) -> AccessResult<E> {
        match self.arm {
            Arm::Error(error) => Ok(error),
            Arm::Value(_) => Err(no_error()),
        }
    }

    /// Ambil nilai sukses untuk call site di mana arm gagal adalah bug.
    ///
    /// # Panics
    /// Panic dengan `msg` jika arm gagal yang aktif
    #[track_caller]
    pub fn expect_value(self, msg: &str) -> T {
        match self.into_value() {
            Ok(value) => value,
            Err(err) => panic!("{msg}: {err}"),
        }
    }

    /// Ambil nilai error untuk call site di mana arm sukses adalah bug.
    ///
    /// # Panics
    /// Panic dengan `msg` jika arm sukses yang aktif
    #[track_caller]
    pub fn expect_error(self, msg: &str) -> E {
        match self.into_error() {
            Ok(error) => error,
            Err(err) => panic!("{msg}: {err}"),
        }
    }

    /// Chain ke depan: jika sukses, hasilnya `func(value)`. Jika gagal,
    /// `func` tidak dipanggil dan error diteruskan apa adanya sebagai
    /// [`Failure`] dari tipe target.
    #[inline(always)]
    pub fn and_then<U, F>(self, func: F) -> Either<U, E>
    where
        F: FnOnce(T) -> Either<U, E>,
    {
        match self.arm {
            Arm::Value(value) => func(value),
            Arm::Error(error) => Failure(error).into(),
        }
    }

    /// Kebalikan `and_then`: jika gagal, hasilnya `func(error)`. Jika sukses,
    /// `func` tidak dipanggil dan nilai sukses diteruskan ke tipe target.
    #[inline(always)]
    pub fn or_else<G, F>(self, func: F) -> Either<T, G>
    where
        F: FnOnce(E) -> Either<T, G>,
    {
        match self.arm {
            Arm::Value(value) => Success(value).into(),
            Arm::Error(error) => func(error),
        }
    }

    /// Transformasi nilai sukses, error diteruskan
    pub fn map<U, F>(self, func: F) -> Either<U, E>
    where
        F: FnOnce(T) -> U,
    {
        self.and_then(|value| Success(func(value)).into())
    }

    /// Transformasi nilai error, nilai sukses diteruskan
    pub fn map_error<G, F>(self, func: F) -> Either<T, G>
    where
        F: FnOnce(E) -> G,
    {
        self.or_else(|error| Failure(func(error)).into())
    }

    /// Nilai sukses, atau `default` jika gagal
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        match self.arm {
            Arm::Value(value) => value,
            Arm::Error(_) => default,
        }
    }

    /// Nilai sukses, atau hasil `func(error)` jika gagal
    #[must_use]
    pub fn value_or_else<F>(self, func: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self.arm {
            Arm::Value(value) => value,
            Arm::Error(error) => func(error),
        }
    }

    /// Pinjam kedua arm tanpa memindahkan payload
    pub fn as_ref(&self) -> Either<&T, &E> {
        let arm = match &self.arm {
            Arm::Value(value) => Arm::Value(value),
            Arm::Error(error) => Arm::Error(error),
        };
        Either { arm }
    }

    /// Pinjam mutable kedua arm
    pub fn as_mut(&mut self) -> Either<&mut T, &mut E> {
        let arm = match &mut self.arm {
            Arm::Value(value) => Arm::Value(value),
            Arm::Error(error) => Arm::Error(error),
        };
        Either { arm }
    }

    /// Konversi ke `std::result::Result` untuk dipakai dengan `?`
    pub fn into_result(self) -> Result<T, E> {
        match self.arm {
            Arm::Value(value) => Ok(value),
            Arm::Error(error) => Err(error),
        }
    }

    /// Konversi dari `std::result::Result`
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value).into(),
            Err(error) => Failure(error).into(),
        }
    }
}

impl<T, E> From<&Either<T, E>> for bool {
    #[inline(always)]
    fn from(either: &Either<T, E>) -> bool {
        either.has_value()
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Either<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arm {
            Arm::Value(value) => f.debug_tuple("Success").field(value).finish(),
            Arm::Error(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}

#[cold]
fn no_value() -> AccessError {
    trace!("either accessed for value while failure arm is active");
    AccessError::NoValue
}

#[cold]
fn no_error() -> AccessError {
    trace!("either accessed for error while success arm is active");
    AccessError::NoError
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn good() -> Either<i32, String> {
        Success(0).into()
    }

    fn bad() -> Either<i32, String> {
        Failure("bad".to_string()).into()
    }

    #[test]
    fn test_simple_success() {
        let result = good();

        assert!(result.has_value());
        assert!(bool::from(&result));
        assert_eq!(result.value(), Ok(&0));
    }

    #[test]
    fn test_simple_failure() {
        let result = bad();

        assert!(!result.has_value());
        assert!(result.is_failure());
        assert_eq!(result.error().map(String::as_str), Ok("bad"));
    }

    #[test]
    fn test_bad_value_access() {
        assert_eq!(bad().value(), Err(AccessError::NoValue));
        assert_eq!(bad().into_value(), Err(AccessError::NoValue));
    }

    #[test]
    fn test_bad_error_access() {
        assert_eq!(good().error(), Err(AccessError::NoError));
        assert_eq!(good().into_error(), Err(AccessError::NoError));
    }

    #[test]
    fn test_monadic_and_then() {
        let advance = |value: i32| Either::<i32, String>::from(Success(value + 1));

        let result = good().and_then(advance);

        assert_eq!(result.value(), Ok(&1));
    }

    #[test]
    fn test_monadic_or_else() {
        let encode =
            |error: String| Either::<i32, String>::from(Failure(format!("Error: {error}")));

        let result = bad().or_else(encode);

        assert_eq!(result.error().map(String::as_str), Ok("Error: bad"));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let called = Cell::new(false);

        let result: Either<String, String> = bad().and_then(|v| {
            called.set(true);
            Success(v.to_string()).into()
        });

        assert!(!called.get());
        assert_eq!(result.into_error().as_deref(), Ok("bad"));
    }

    #[test]
    fn test_or_else_short_circuits() {
        let called = Cell::new(false);

        let result: Either<i32, u8> = good().or_else(|_| {
            called.set(true);
            Failure(1).into()
        });

        assert!(!called.get());
        assert_eq!(result.value(), Ok(&0));
    }

    #[test]
    fn test_and_then_changes_value_type() {
        let result =
            good().and_then(|v| Either::<String, String>::from(Success(format!("#{v}"))));
        assert_eq!(result.value().map(String::as_str), Ok("#0"));
    }

    #[test]
    fn test_void_success() {
        let done: Either<(), String> = Either::default();
        assert!(done.has_value());
        assert_eq!(done.value(), Ok(&()));
        assert_eq!(done.error(), Err(AccessError::NoError));
        assert!(
            std::mem::size_of::<Either<(), u64>>() <= std::mem::size_of::<Either<u64, u64>>()
        );

        let chained = done.and_then(|()| Either::<u32, String>::from(Success(7)));
        assert_eq!(chained.value(), Ok(&7));
    }

    #[test]
    fn test_void_failure_or_else() {
        let failed: Either<(), &str> = Failure("disk").into();

        let recovered = failed.or_else(|_| Either::<(), &str>::default());
        assert!(recovered.has_value());
    }

    #[test]
    fn test_mutable_access() {
        let mut result = good();
        *result.value_mut().unwrap() += 10;
        assert_eq!(result.value(), Ok(&10));
        assert!(result.error_mut().is_err());

        let mut failed = bad();
        failed.error_mut().unwrap().push('!');
        assert_eq!(failed.error().map(String::as_str), Ok("bad!"));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = bad();
        let mut copy = original.clone();
        copy.error_mut().unwrap().clear();

        assert_eq!(original.error().map(String::as_str), Ok("bad"));
        assert_eq!(copy.error().map(String::as_str), Ok(""));
    }

    #[test]
    fn test_map_and_map_error() {
        assert_eq!(good().map(|v| v * 2 + 1).value(), Ok(&1));
        assert_eq!(bad().map_error(|e| e.len()).error(), Ok(&3));
        assert_eq!(bad().map(|v| v + 1).error().map(String::as_str), Ok("bad"));
    }

    #[test]
    fn test_value_or() {
        assert_eq!(good().value_or(9), 0);
        assert_eq!(bad().value_or(9), 9);
        assert_eq!(bad().value_or_else(|e| e.len() as i32), 3);
    }

    #[test]
    fn test_result_conversion() {
        assert_eq!(good().into_result(), Ok(0));
        assert_eq!(bad().into_result(), Err("bad".to_string()));

        let back = Either::from_result(Err::<i32, _>("io"));
        assert_eq!(back.error(), Ok(&"io"));
    }

    #[test]
    fn test_as_ref() {
        let result = bad();
        let borrowed = result.as_ref().map_error(|e| e.len());
        assert_eq!(borrowed.error(), Ok(&3));
        assert!(result.is_failure());
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", good()), "Success(0)");
        assert_eq!(format!("{:?}", bad()), "Failure(\"bad\")");
    }

    #[test]
    #[should_panic(expected = "config must parse: either has no value")]
    fn test_expect_value_panics() {
        let _ = bad().expect_value("config must parse");
    }

    #[test]
    fn test_expect_error() {
        assert_eq!(bad().expect_error("must fail"), "bad");
    }
}
