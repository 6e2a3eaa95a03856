use thiserror::Error;

/// Error type for header decoding, encoding and sample buffer failures
#[derive(Debug, PartialEq, Clone, Error)]
pub enum Error {
    /// Fewer bytes were available than a field or block requires
    #[error("truncated input: needed {needed} bytes at offset {offset}, got {available}")]
    TruncatedInput {
        /// Offset of the short read
        offset: u64,
        /// Bytes requested
        needed: usize,
        /// Bytes actually read
        available: usize,
    },
    /// Fewer bytes were written than requested
    #[error("short write: wrote {written} of {requested} bytes at offset {offset}")]
    ShortWrite {
        /// Offset of the short write
        offset: u64,
        /// Bytes requested
        requested: usize,
        /// Bytes actually written
        written: usize,
    },
    /// The `fmt ` block is shorter than the 16 bytes of a PCM format block
    #[error("format block too small: {0} bytes")]
    FmtBlockTooSmall(i32),
    /// Audio format other than PCM
    #[error("unsupported audio format {0}, only PCM (1) is supported")]
    UnsupportedFormat(i16),
    /// Bit depth other than 8, 16 or 32
    #[error("unsupported bit depth {0}, expected 8, 16 or 32")]
    UnsupportedBitDepth(i16),
    /// Channel count below one
    #[error("invalid channel count {0}")]
    InvalidChannelCount(i16),
    /// Negative data size
    #[error("invalid data size {0}")]
    InvalidDataSize(i32),
    /// Sample buffer does not fit the 32-bit size fields
    #[error("sample data too large: {0} bytes")]
    DataTooLarge(usize),
    /// Byte rate or block align do not fit their header fields
    #[error(
        "byte rate or block align overflow for {num_channels} channels at {sample_rate} Hz, {bits_per_sample}-bit"
    )]
    LayoutOverflow {
        /// Requested channel count
        num_channels: i16,
        /// Requested sample rate
        sample_rate: i32,
        /// Requested bit depth
        bits_per_sample: i16,
    },
    /// Frame count times block align does not fit in memory
    #[error("cannot allocate {0} frames")]
    TooManyFrames(usize),
    /// A tone frame would be written past the end of the sample buffer
    #[error("frame at {index} does not fit a buffer of {len} bytes")]
    FrameOutOfBounds {
        /// Requested start index
        index: usize,
        /// Length of the sample buffer
        len: usize,
    },
    /// Tone synthesis only writes 16-bit stereo frames
    #[error("tone synthesis needs 16-bit stereo, got {bits}-bit with {channels} channels")]
    UnsupportedToneLayout {
        /// Channel count of the header
        channels: i16,
        /// Bits per sample of the header
        bits: i16,
    },
}

/// Error type for loading or saving through a storage collaborator
#[derive(Debug, PartialEq, Error)]
pub enum IoError<E> {
    /// The underlying resource could not be opened
    #[error("failed to open storage: {0:?}")]
    Open(E),
    /// Error from the underlying storage
    #[error("storage error: {0:?}")]
    Storage(E),
    /// Error from the codec
    #[error(transparent)]
    Codec(#[from] Error),
}
