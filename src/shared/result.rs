/// Crate-wide Result with `anyhow::Error` as the error type.
///
/// Typed failures are raised as [`SbomError`](super::error::SbomError) and
/// recovered with `downcast_ref` where a caller needs the kind.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
