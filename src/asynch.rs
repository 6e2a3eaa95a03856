//! Async loading and saving over [`embedded_io_async`] handles.
//!
//! Walks the file exactly like [`Pcm::load`] and [`Pcm::save`], seeking to
//! every offset before reading or writing.

use crate::error::{Error, IoError};
use crate::header::{HEADER_LEN, Header, PCM_FMT_BLOCK_LEN};
use crate::pcm::Pcm;
use crate::storage::READ_CHUNK_LEN;
use alloc::vec::Vec;
use embedded_io_async::{Read, Seek, SeekFrom, Write};

struct AsyncCursor<'s, T> {
    inner: &'s mut T,
    offset: u64,
}

impl<'s, T> AsyncCursor<'s, T>
where
    T: Seek,
{
    fn new(inner: &'s mut T) -> Self {
        AsyncCursor { inner, offset: 0 }
    }

    async fn seek(&mut self) -> Result<(), IoError<T::Error>> {
        self.inner
            .seek(SeekFrom::Start(self.offset))
            .await
            .map_err(IoError::Storage)?;
        Ok(())
    }
}

impl<T> AsyncCursor<'_, T>
where
    T: Read + Seek,
{
    async fn read(&mut self, buf: &mut [u8]) -> Result<(), IoError<T::Error>> {
        tracing::trace!(offset = self.offset, len = buf.len(), "read");
        self.seek().await?;

        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]).await {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) => return Err(IoError::Storage(e)),
            }
        }

        if filled < buf.len() {
            return Err(Error::TruncatedInput {
                offset: self.offset,
                needed: buf.len(),
                available: filled,
            }
            .into());
        }

        self.offset += filled as u64;
        Ok(())
    }

    async fn read_to_vec(&mut self, len: usize) -> Result<Vec<u8>, IoError<T::Error>> {
        let start = self.offset;
        let mut data = Vec::new();

        while data.len() < len {
            let filled = data.len();
            let n = (len - filled).min(READ_CHUNK_LEN);
            data.resize(filled + n, 0);

            match self.read(&mut data[filled..]).await {
                Ok(()) => {}
                Err(IoError::Codec(Error::TruncatedInput { available, .. })) => {
                    return Err(Error::TruncatedInput {
                        offset: start,
                        needed: len,
                        available: filled + available,
                    }
                    .into());
                }
                Err(e) => return Err(e),
            }
        }

        Ok(data)
    }

    async fn skip(&mut self, len: usize) -> Result<(), IoError<T::Error>> {
        let mut scratch = [0; 64];
        let mut remaining = len;
        while remaining > 0 {
            let n = remaining.min(scratch.len());
            self.read(&mut scratch[..n]).await?;
            remaining -= n;
        }
        Ok(())
    }
}

impl<T> AsyncCursor<'_, T>
where
    T: Write + Seek,
{
    async fn write(&mut self, buf: &[u8]) -> Result<(), IoError<T::Error>> {
        tracing::trace!(offset = self.offset, len = buf.len(), "write");
        self.seek().await?;

        let mut written = 0;
        while written < buf.len() {
            match self.inner.write(&buf[written..]).await {
                Ok(0) => break,
                Ok(n) => written += n,
                Err(e) => return Err(IoError::Storage(e)),
            }
        }

        if written < buf.len() {
            return Err(Error::ShortWrite {
                offset: self.offset,
                requested: buf.len(),
                written,
            }
            .into());
        }

        self.offset += written as u64;
        Ok(())
    }
}

/// Read a [`Pcm`] from an async reader
pub async fn load<R>(reader: &mut R) -> Result<Pcm, IoError<R::Error>>
where
    R: Read + Seek,
{
    let mut cursor = AsyncCursor::new(reader);

    let mut preamble = [0; 20];
    cursor.read(&mut preamble[0..4]).await?;
    cursor.read(&mut preamble[4..8]).await?;
    cursor.read(&mut preamble[8..20]).await?;
    let mut header = Header::decode_preamble(&preamble)?;

    let mut block = [0; PCM_FMT_BLOCK_LEN];
    cursor.read(&mut block).await?;
    header.decode_fmt_block(&block);
    cursor
        .skip(header.fmt_block_size as usize - PCM_FMT_BLOCK_LEN)
        .await?;

    let mut data_chunk = [0; 8];
    cursor.read(&mut data_chunk).await?;
    header.decode_data_chunk(&data_chunk)?;

    let offset = cursor.offset;
    let data = cursor.read_to_vec(header.data_size as usize).await?;

    tracing::debug!(offset, data_size = data.len(), "loaded pcm");

    Ok(Pcm { header, data })
}

/// Write a [`Pcm`] to an async writer, starting at offset 0
pub async fn save<W>(pcm: &Pcm, writer: &mut W) -> Result<(), IoError<W::Error>>
where
    W: Write + Seek,
{
    let header: [u8; HEADER_LEN] = pcm.header.to_bytes(pcm.data.len())?;

    let mut cursor = AsyncCursor::new(writer);
    cursor.write(&header).await?;
    cursor.write(&pcm.data).await?;
    cursor.inner.flush().await.map_err(IoError::Storage)?;

    tracing::debug!(bytes = cursor.offset, "saved pcm");

    Ok(())
}
