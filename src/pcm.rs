use crate::error::{Error, IoError};
use crate::header::Header;
use crate::storage::{Cursor, Storage};
use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "std")]
use crate::storage::{File, FileError, IoStorage};

/// Struct representing a PCM wave file
#[derive(Debug, PartialEq, Clone)]
pub struct Pcm {
    /// Header of the file. `data_size`, `file_size` and `fmt_block_size` are
    /// recomputed from [`Pcm::data`] on every encode.
    pub header: Header,
    /// Raw interleaved sample frames, in the byte order of the header
    pub data: Vec<u8>,
}

impl Pcm {
    /// Pair a header with an empty sample buffer
    pub fn new(header: Header) -> Self {
        Pcm {
            header,
            data: vec![],
        }
    }

    /// Little-endian, stereo, 16-bit PCM at 44.1 kHz with no samples yet.
    ///
    /// ```
    /// use pcmwav::Pcm;
    ///
    /// let pcm = Pcm::cd_quality();
    ///
    /// assert_eq!(pcm.header.num_channels, 2);
    /// assert_eq!(pcm.header.bits_per_sample, 16);
    /// assert_eq!(pcm.header.byte_rate, 176_400);
    /// assert!(pcm.data.is_empty());
    /// ```
    pub fn cd_quality() -> Self {
        Pcm::new(Header::cd_quality())
    }

    /// Resize the sample buffer to `len` bytes, new bytes are silence for
    /// signed depths
    pub fn allocate(&mut self, len: usize) {
        self.data.resize(len, 0);
    }

    /// Resize the sample buffer to hold `frames` frames of `block_align` bytes
    pub fn allocate_frames(&mut self, frames: usize) -> Result<(), Error> {
        let len = frames
            .checked_mul(self.frame_len())
            .ok_or(Error::TooManyFrames(frames))?;
        self.allocate(len);
        Ok(())
    }

    /// Number of complete frames in the sample buffer
    pub fn frame_count(&self) -> usize {
        match self.frame_len() {
            0 => 0,
            len => self.data.len() / len,
        }
    }

    fn frame_len(&self) -> usize {
        usize::try_from(self.header.block_align).unwrap_or(0)
    }

    /// Bring the stored header in line with what would be encoded: the
    /// format block is 16 bytes and the sizes follow the sample buffer.
    pub fn finalize(&mut self) -> Result<(), Error> {
        let bytes = self.header.to_bytes(self.data.len())?;
        let (header, _) = Header::from_bytes(&bytes)?;
        self.header = header;
        Ok(())
    }

    /// Create new [`Pcm`] instance from a slice of bytes
    ///
    /// ```
    /// use pcmwav::Pcm;
    ///
    /// let mut pcm = Pcm::cd_quality();
    /// pcm.data = vec![1, 0, 2, 0];
    ///
    /// let bytes = pcm.to_bytes().unwrap();
    /// let decoded = Pcm::from_bytes(&bytes).unwrap();
    ///
    /// assert_eq!(decoded.header.data_size, 4);
    /// assert_eq!(decoded.data, vec![1, 0, 2, 0]);
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let mut storage = bytes;
        match Pcm::load(&mut storage) {
            Ok(pcm) => Ok(pcm),
            Err(IoError::Codec(e)) => Err(e),
            Err(IoError::Open(e)) | Err(IoError::Storage(e)) => match e {},
        }
    }

    /// Convert a [`Pcm`] instance into bytes: the 44 byte header followed by
    /// the sample data.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut bytes = Vec::with_capacity(crate::HEADER_LEN + self.data.len());
        match self.save(&mut bytes) {
            Ok(()) => Ok(bytes),
            Err(IoError::Codec(e)) => Err(e),
            Err(IoError::Open(e)) | Err(IoError::Storage(e)) => match e {},
        }
    }

    /// Read a header and exactly `data_size` bytes of samples from a storage
    pub fn load<S>(storage: &mut S) -> Result<Self, IoError<S::Error>>
    where
        S: Storage + ?Sized,
    {
        let (header, offset) = Header::read_from(storage)?;

        let data = Cursor::starting_at(storage, offset).read_to_vec(header.data_size as usize)?;

        tracing::debug!(offset, data_size = data.len(), "loaded pcm");

        Ok(Pcm { header, data })
    }

    /// Write the header and the sample data to a storage, starting at
    /// offset 0. A failed save may leave a partially written resource behind.
    pub fn save<S>(&self, storage: &mut S) -> Result<(), IoError<S::Error>>
    where
        S: Storage + ?Sized,
    {
        let header = self.header.to_bytes(self.data.len())?;

        let mut cursor = Cursor::new(storage);
        cursor.write(&header)?;
        cursor.write(&self.data)?;

        tracing::debug!(bytes = cursor.offset(), "saved pcm");

        Ok(())
    }

    /// Read a wave file from disk
    #[cfg(feature = "std")]
    pub fn load_file(path: impl AsRef<std::path::Path>) -> Result<Self, IoError<FileError>> {
        let file = std::fs::File::open(path).map_err(|e| IoError::Open(FileError(e)))?;
        Pcm::load(&mut IoStorage::new(File(file)))
    }

    /// Write a wave file to disk, creating it if missing and replacing any
    /// previous content
    #[cfg(feature = "std")]
    pub fn save_file(&self, path: impl AsRef<std::path::Path>) -> Result<(), IoError<FileError>> {
        let file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| IoError::Open(FileError(e)))?;
        self.save(&mut IoStorage::new(File(file)))
    }

    /// Write one stereo 16-bit frame at byte `index`.
    ///
    /// The sample is `round(volume * sin(note_frequency * 2π / reference_frequency))`,
    /// encoded in the byte order of the header and written to both the left
    /// and the right channel. Call it once per frame to build a tone, e.g.
    /// with the sample rate as reference and `440.0 * frame` as note.
    ///
    /// ```
    /// use pcmwav::Pcm;
    ///
    /// let mut pcm = Pcm::cd_quality();
    /// pcm.allocate_frames(1).unwrap();
    /// pcm.synthesize_tone(32_000, 0, 1.0, 0.25).unwrap();
    ///
    /// assert_eq!(pcm.data, 32_000i16.to_le_bytes().repeat(2));
    /// ```
    pub fn synthesize_tone(
        &mut self,
        volume: i16,
        index: usize,
        reference_frequency: f64,
        note_frequency: f64,
    ) -> Result<(), Error> {
        if self.header.num_channels != 2 || self.header.bits_per_sample != 16 {
            return Err(Error::UnsupportedToneLayout {
                channels: self.header.num_channels,
                bits: self.header.bits_per_sample,
            });
        }

        let phase = note_frequency * 2.0 * core::f64::consts::PI / reference_frequency;
        let value = libm::round(f64::from(volume) * libm::sin(phase)) as i16;
        let sample = self.header.byte_order().i16_bytes(value);

        let len = self.data.len();
        let frame = index
            .checked_add(4)
            .and_then(|end| self.data.get_mut(index..end))
            .ok_or(Error::FrameOutOfBounds { index, len })?;

        frame[..2].copy_from_slice(&sample); // left
        frame[2..].copy_from_slice(&sample); // right

        Ok(())
    }
}
