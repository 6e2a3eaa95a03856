use crate::error::{Error, IoError};
use alloc::vec::Vec;
use core::convert::Infallible;

/// Byte addressable resource the codec reads from and writes to.
///
/// Both calls return the number of bytes actually transferred. Returning
/// fewer than requested is not an error here; the codec turns short reads
/// into [`Error::TruncatedInput`] and short writes into [`Error::ShortWrite`].
pub trait Storage {
    /// Error reported by the resource itself
    type Error;

    /// Read up to `buf.len()` bytes starting at `offset`
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> Result<usize, Self::Error>;

    /// Write up to `buf.len()` bytes starting at `offset`
    fn write_at(&mut self, buf: &[u8], offset: u64) -> Result<usize, Self::Error>;
}

/// Read-only storage, every write reports zero bytes written
impl Storage for &[u8] {
    type Error = Infallible;

    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> Result<usize, Self::Error> {
        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(self.len());
        let available = &self[start..];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        Ok(n)
    }

    fn write_at(&mut self, _buf: &[u8], _offset: u64) -> Result<usize, Self::Error> {
        Ok(0)
    }
}

/// Growable storage, writes past the end extend the vector with zeros
impl Storage for Vec<u8> {
    type Error = Infallible;

    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> Result<usize, Self::Error> {
        self.as_slice().read_at(buf, offset)
    }

    fn write_at(&mut self, buf: &[u8], offset: u64) -> Result<usize, Self::Error> {
        let Ok(start) = usize::try_from(offset) else {
            return Ok(0);
        };
        let Some(end) = start.checked_add(buf.len()) else {
            return Ok(0);
        };
        if self.len() < end {
            self.resize(end, 0);
        }
        self[start..end].copy_from_slice(buf);
        Ok(buf.len())
    }
}

/// Largest step used when reading a payload whose length comes from the file
pub(crate) const READ_CHUNK_LEN: usize = 4096;

/// Linear walk over a storage: every step reads or writes a fixed number of
/// bytes and advances the offset.
pub(crate) struct Cursor<'s, S: ?Sized> {
    storage: &'s mut S,
    offset: u64,
}

impl<'s, S> Cursor<'s, S>
where
    S: Storage + ?Sized,
{
    pub(crate) fn new(storage: &'s mut S) -> Self {
        Self::starting_at(storage, 0)
    }

    pub(crate) fn starting_at(storage: &'s mut S, offset: u64) -> Self {
        Cursor { storage, offset }
    }

    pub(crate) fn offset(&self) -> u64 {
        self.offset
    }

    pub(crate) fn read(&mut self, buf: &mut [u8]) -> Result<(), IoError<S::Error>> {
        tracing::trace!(offset = self.offset, len = buf.len(), "read");
        let n = self
            .storage
            .read_at(buf, self.offset)
            .map_err(IoError::Storage)?;

        if n < buf.len() {
            return Err(Error::TruncatedInput {
                offset: self.offset,
                needed: buf.len(),
                available: n,
            }
            .into());
        }

        self.offset += n as u64;
        Ok(())
    }

    /// Read `len` bytes into a new vector, at most [`READ_CHUNK_LEN`] at a time
    pub(crate) fn read_to_vec(&mut self, len: usize) -> Result<Vec<u8>, IoError<S::Error>> {
        let start = self.offset;
        let mut data = Vec::new();

        while data.len() < len {
            let filled = data.len();
            let n = (len - filled).min(READ_CHUNK_LEN);
            data.resize(filled + n, 0);

            tracing::trace!(offset = self.offset, len = n, "read");
            let read = self
                .storage
                .read_at(&mut data[filled..], self.offset)
                .map_err(IoError::Storage)?;

            if read < n {
                return Err(Error::TruncatedInput {
                    offset: start,
                    needed: len,
                    available: filled + read,
                }
                .into());
            }
            self.offset += read as u64;
        }

        Ok(data)
    }

    /// Consume `len` bytes without keeping them
    pub(crate) fn skip(&mut self, len: usize) -> Result<(), IoError<S::Error>> {
        let mut scratch = [0; 64];
        let mut remaining = len;
        while remaining > 0 {
            let n = remaining.min(scratch.len());
            self.read(&mut scratch[..n])?;
            remaining -= n;
        }
        Ok(())
    }

    pub(crate) fn write(&mut self, buf: &[u8]) -> Result<(), IoError<S::Error>> {
        tracing::trace!(offset = self.offset, len = buf.len(), "write");
        let n = self
            .storage
            .write_at(buf, self.offset)
            .map_err(IoError::Storage)?;

        if n < buf.len() {
            return Err(Error::ShortWrite {
                offset: self.offset,
                requested: buf.len(),
                written: n,
            }
            .into());
        }

        self.offset += n as u64;
        Ok(())
    }
}

//-----------------------------------
// MARK: embedded-io

/// [`Storage`] over any seekable [`embedded_io`] reader/writer
#[cfg(feature = "io")]
pub struct IoStorage<T>(pub T);

#[cfg(feature = "io")]
impl<T> IoStorage<T> {
    /// Wrap an [`embedded_io`] handle
    pub fn new(inner: T) -> Self {
        IoStorage(inner)
    }

    /// Give back the wrapped handle
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(feature = "io")]
impl<T> Storage for IoStorage<T>
where
    T: embedded_io::Read + embedded_io::Write + embedded_io::Seek,
{
    type Error = T::Error;

    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> Result<usize, Self::Error> {
        self.0.seek(embedded_io::SeekFrom::Start(offset))?;

        let mut filled = 0;
        while filled < buf.len() {
            match self.0.read(&mut buf[filled..])? {
                0 => break,
                n => filled += n,
            }
        }
        Ok(filled)
    }

    fn write_at(&mut self, buf: &[u8], offset: u64) -> Result<usize, Self::Error> {
        self.0.seek(embedded_io::SeekFrom::Start(offset))?;

        let mut written = 0;
        while written < buf.len() {
            match self.0.write(&buf[written..])? {
                0 => break,
                n => written += n,
            }
        }
        self.0.flush()?;
        Ok(written)
    }
}

#[cfg(feature = "std")]
mod file_wrapper {
    use std::fs;
    use std::io::{Read, Seek, Write};

    /// Wrapper for std::fs::File, used by [`Pcm::load_file`](crate::Pcm::load_file)
    /// and [`Pcm::save_file`](crate::Pcm::save_file)
    pub struct File(pub fs::File);

    #[doc(hidden)]
    #[derive(Debug)]
    pub struct FileError(pub std::io::Error);

    impl embedded_io::Error for FileError {
        fn kind(&self) -> embedded_io::ErrorKind {
            embedded_io::ErrorKind::Other
        }
    }

    impl embedded_io::ErrorType for File {
        type Error = FileError;
    }

    impl embedded_io::Read for File {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            self.0.read(buf).map_err(FileError)
        }
    }

    impl embedded_io::Write for File {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.0.write(buf).map_err(FileError)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.0.flush().map_err(FileError)
        }
    }

    impl embedded_io::Seek for File {
        fn seek(&mut self, pos: embedded_io::SeekFrom) -> Result<u64, Self::Error> {
            let pos = match pos {
                embedded_io::SeekFrom::Start(offset) => std::io::SeekFrom::Start(offset),
                embedded_io::SeekFrom::End(offset) => std::io::SeekFrom::End(offset),
                embedded_io::SeekFrom::Current(offset) => std::io::SeekFrom::Current(offset),
            };
            self.0.seek(pos).map_err(FileError)
        }
    }
}

#[cfg(feature = "std")]
pub use file_wrapper::{File, FileError};
