//! Error taxonomy untuk akses arm yang salah

use thiserror::Error;

/// Result alias untuk accessor [`Either`](super::Either)
pub type AccessResult<T> = std::result::Result<T, AccessError>;

/// Akses ke arm yang tidak aktif. Ini bug pemanggil (precondition
/// violation), bukan kondisi runtime yang diharapkan.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessError {
    /// `value()` dipanggil saat arm gagal aktif
    #[error("either has no value: failure arm is active")]
    NoValue,

    /// `error()` dipanggil saat arm sukses aktif
    #[error("either has no error: success arm is active")]
    NoError,
}
