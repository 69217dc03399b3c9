/// An error returned when restoring a [`Scanner`](crate::Scanner) from serialized state.
///
/// The host only ever replays bytes previously produced by
/// [`Scanner::serialize`](crate::Scanner::serialize), so any of these means the state buffer was
/// corrupted or produced by something else.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// The buffer has the wrong length.
    #[error("invalid scanner state length: expected 0 or {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// A bit queue length exceeds the queue capacity.
    #[error("bit queue length {len} exceeds capacity")]
    LenOutOfRange { len: usize },
    /// A bit queue read offset is not a valid bit index.
    #[error("bit queue read offset {offset} is out of range")]
    OffsetOutOfRange { offset: usize },
}
