use crate::error::{Error, IoError};
use crate::storage::{Cursor, Storage};

/// Four byte marker as it appears in the file
pub type Tag = [u8; 4];

/// Container tag of a little-endian file
pub const RIFF: Tag = *b"RIFF";
/// Container tag of a big-endian file
pub const RIFX: Tag = *b"RIFX";
/// Format tag
pub const WAVE: Tag = *b"WAVE";
/// Marker of the format block
pub const FMT_MARKER: Tag = *b"fmt ";
/// Marker of the sample data
pub const DATA_MARKER: Tag = *b"data";

/// Audio format value for PCM
pub const PCM_FORMAT: i16 = 1;
/// Sample rate of a CD
pub const CD_SAMPLE_RATE: i32 = 44_100;
/// Sample rate of DAT
pub const DAT_SAMPLE_RATE: i32 = 48_000;
/// Length of the format block for plain PCM
pub const PCM_FMT_BLOCK_LEN: usize = 16;
/// Length of an encoded header
pub const HEADER_LEN: usize = 44;

// Bytes before the format block: tag, file size, WAVE, "fmt ", block size
const PREAMBLE_LEN: usize = 20;
// Bytes counted by the container tag and the file size field itself
const RIFF_PREAMBLE_LEN: usize = 8;

/// Byte order of every multi-byte integer in the file
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ByteOrder {
    /// `RIFF` files
    LittleEndian,
    /// `RIFX` files
    BigEndian,
}

impl ByteOrder {
    /// Resolve the byte order from a container tag.
    ///
    /// Only the fourth byte matters: `F` is little-endian, anything else is
    /// read as big-endian.
    ///
    /// ```
    /// use pcmwav::{ByteOrder, RIFF, RIFX};
    ///
    /// assert_eq!(ByteOrder::from_container_tag(&RIFF), ByteOrder::LittleEndian);
    /// assert_eq!(ByteOrder::from_container_tag(&RIFX), ByteOrder::BigEndian);
    /// ```
    pub fn from_container_tag(tag: &Tag) -> Self {
        if tag[3] == b'F' {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        }
    }

    /// Container tag that announces this byte order
    pub fn container_tag(self) -> Tag {
        match self {
            ByteOrder::LittleEndian => RIFF,
            ByteOrder::BigEndian => RIFX,
        }
    }

    pub(crate) fn i16_from(self, bytes: [u8; 2]) -> i16 {
        match self {
            ByteOrder::LittleEndian => i16::from_le_bytes(bytes),
            ByteOrder::BigEndian => i16::from_be_bytes(bytes),
        }
    }

    pub(crate) fn i32_from(self, bytes: [u8; 4]) -> i32 {
        match self {
            ByteOrder::LittleEndian => i32::from_le_bytes(bytes),
            ByteOrder::BigEndian => i32::from_be_bytes(bytes),
        }
    }

    pub(crate) fn i16_bytes(self, value: i16) -> [u8; 2] {
        match self {
            ByteOrder::LittleEndian => value.to_le_bytes(),
            ByteOrder::BigEndian => value.to_be_bytes(),
        }
    }

    pub(crate) fn i32_bytes(self, value: i32) -> [u8; 4] {
        match self {
            ByteOrder::LittleEndian => value.to_le_bytes(),
            ByteOrder::BigEndian => value.to_be_bytes(),
        }
    }
}

/// Header of a PCM wave file: the RIFF preamble, the `fmt ` block and the
/// `data` marker with its size.
///
/// for more information see [`here`]
///
/// [`here`]: http://soundfile.sapp.org/doc/WaveFormat/
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Header {
    /// `RIFF` or `RIFX`, selects the byte order
    pub container_tag: Tag,
    /// total file size minus 8
    pub file_size: i32,
    /// `WAVE`
    pub format_tag: Tag,
    /// `fmt `
    pub fmt_marker: Tag,
    /// length of the format block as declared in the file
    pub fmt_block_size: i32,
    /// 1 for PCM
    pub audio_format: i16,
    /// number of interleaved channels
    pub num_channels: i16,
    /// samples per second per channel, typical values are `44_100` or `48_000`
    pub sample_rate: i32,
    /// `sample_rate * bits_per_sample * num_channels / 8`
    pub byte_rate: i32,
    /// bytes per frame, `num_channels * bits_per_sample / 8`
    pub block_align: i16,
    /// `8`, `16` or `32`
    pub bits_per_sample: i16,
    /// `data`
    pub data_marker: Tag,
    /// length of the sample data in bytes
    pub data_size: i32,
}

impl Header {
    /// Create a PCM header with derived byte rate and block align and an
    /// empty payload.
    ///
    /// The derived fields are computed in 64 bits and rejected with
    /// [`Error::LayoutOverflow`] when they do not fit their header fields.
    ///
    /// ```
    /// use pcmwav::{ByteOrder, Header, RIFX};
    ///
    /// let header = Header::new(ByteOrder::BigEndian, 1, 48_000, 8).unwrap();
    ///
    /// assert_eq!(header.container_tag, RIFX);
    /// assert_eq!(header.byte_rate, 48_000);
    /// assert_eq!(header.block_align, 1);
    /// ```
    pub fn new(
        order: ByteOrder,
        num_channels: i16,
        sample_rate: i32,
        bits_per_sample: i16,
    ) -> Result<Self, Error> {
        let frame_bits = i64::from(num_channels) * i64::from(bits_per_sample);
        let byte_rate = i32::try_from(i64::from(sample_rate) * frame_bits / 8);
        let block_align = i16::try_from(frame_bits / 8);

        let (Ok(byte_rate), Ok(block_align)) = (byte_rate, block_align) else {
            return Err(Error::LayoutOverflow {
                num_channels,
                sample_rate,
                bits_per_sample,
            });
        };

        Ok(Header::with_layout(
            order,
            num_channels,
            sample_rate,
            bits_per_sample,
            byte_rate,
            block_align,
        ))
    }

    /// Little-endian, stereo, 16-bit PCM at 44.1 kHz
    pub fn cd_quality() -> Self {
        Header::with_layout(
            ByteOrder::LittleEndian,
            2,
            CD_SAMPLE_RATE,
            16,
            CD_SAMPLE_RATE * 16 * 2 / 8,
            2 * 16 / 8,
        )
    }

    fn with_layout(
        order: ByteOrder,
        num_channels: i16,
        sample_rate: i32,
        bits_per_sample: i16,
        byte_rate: i32,
        block_align: i16,
    ) -> Self {
        Header {
            container_tag: order.container_tag(),
            file_size: header_body_len(),
            format_tag: WAVE,
            fmt_marker: FMT_MARKER,
            fmt_block_size: PCM_FMT_BLOCK_LEN as i32,
            audio_format: PCM_FORMAT,
            num_channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
            data_marker: DATA_MARKER,
            data_size: 0,
        }
    }

    /// Byte order selected by the container tag
    pub fn byte_order(&self) -> ByteOrder {
        ByteOrder::from_container_tag(&self.container_tag)
    }

    /// Width in bytes of a single-channel sample.
    ///
    /// Any depth other than 8 or 16 lands in the 4 byte bucket, including
    /// the unsupported 24-bit depth. [`Header::validate`] rejects those.
    pub fn bytes_per_sample(&self) -> usize {
        match self.bits_per_sample {
            8 => 1,
            16 => 2,
            _ => 4,
        }
    }

    /// Check that the header describes a layout this codec supports:
    /// PCM, at least one channel, 8, 16 or 32 bits per sample.
    pub fn validate(&self) -> Result<(), Error> {
        if self.audio_format != PCM_FORMAT {
            return Err(Error::UnsupportedFormat(self.audio_format));
        }
        if self.num_channels < 1 {
            return Err(Error::InvalidChannelCount(self.num_channels));
        }
        match self.bits_per_sample {
            8 | 16 | 32 => Ok(()),
            bits => Err(Error::UnsupportedBitDepth(bits)),
        }
    }

    /// Decode a header from the start of a slice of bytes.
    ///
    /// Returns the header and the number of bytes consumed, which is where
    /// the sample data starts.
    ///
    /// ```
    /// use pcmwav::{Error, Header};
    ///
    /// let bytes = Header::cd_quality().to_bytes(0).unwrap();
    /// let (header, consumed) = Header::from_bytes(&bytes).unwrap();
    ///
    /// assert_eq!(consumed, 44);
    /// assert_eq!(header, Header::cd_quality());
    ///
    /// assert!(matches!(
    ///     Header::from_bytes(&bytes[..40]),
    ///     Err(Error::TruncatedInput { .. })
    /// ));
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<(Self, usize), Error> {
        let mut storage = bytes;
        match Header::read_from(&mut storage) {
            Ok((header, offset)) => Ok((header, offset as usize)),
            Err(IoError::Codec(e)) => Err(e),
            Err(IoError::Open(e)) | Err(IoError::Storage(e)) => match e {},
        }
    }

    /// Decode a header from a storage collaborator, starting at offset 0.
    ///
    /// Returns the header and the offset of the first sample byte.
    pub fn read_from<S>(storage: &mut S) -> Result<(Self, u64), IoError<S::Error>>
    where
        S: Storage + ?Sized,
    {
        let mut cursor = Cursor::new(storage);

        let mut preamble = [0; PREAMBLE_LEN];
        cursor.read(&mut preamble[0..4])?;
        cursor.read(&mut preamble[4..8])?;
        cursor.read(&mut preamble[8..20])?;
        let mut header = Header::decode_preamble(&preamble)?;

        let mut block = [0; PCM_FMT_BLOCK_LEN];
        cursor.read(&mut block)?;
        header.decode_fmt_block(&block);
        cursor.skip(header.fmt_block_size as usize - PCM_FMT_BLOCK_LEN)?;

        let mut data_chunk = [0; 8];
        cursor.read(&mut data_chunk)?;
        header.decode_data_chunk(&data_chunk)?;

        Ok((header, cursor.offset()))
    }

    /// Encode the header for a payload of `data_len` bytes.
    ///
    /// `fmt_block_size`, `data_size` and `file_size` are recomputed rather
    /// than taken from the struct: the block is always written as 16 bytes
    /// and the sizes follow `data_len`.
    ///
    /// ```
    /// use pcmwav::{ByteOrder, Header};
    ///
    /// let riff = Header::cd_quality().to_bytes(0).unwrap();
    /// assert_eq!(riff[24..28], [0x44, 0xac, 0x00, 0x00]);
    ///
    /// let rifx = Header::new(ByteOrder::BigEndian, 2, 44_100, 16).unwrap();
    /// assert_eq!(rifx.to_bytes(0).unwrap()[24..28], [0x00, 0x00, 0xac, 0x44]);
    /// ```
    pub fn to_bytes(&self, data_len: usize) -> Result<[u8; HEADER_LEN], Error> {
        self.validate()?;

        let data_size = i32::try_from(data_len)
            .ok()
            .filter(|size| size.checked_add(header_body_len()).is_some())
            .ok_or(Error::DataTooLarge(data_len))?;
        let file_size = header_body_len() + data_size;
        let order = self.byte_order();

        let mut bytes = [0; HEADER_LEN];
        let mut at = 0;
        let mut put = |field: &[u8]| {
            bytes[at..at + field.len()].copy_from_slice(field);
            at += field.len();
        };

        put(&self.container_tag);
        put(&order.i32_bytes(file_size));
        put(&self.format_tag);
        put(&self.fmt_marker);
        put(&order.i32_bytes(PCM_FMT_BLOCK_LEN as i32));
        put(&order.i16_bytes(self.audio_format));
        put(&order.i16_bytes(self.num_channels));
        put(&order.i32_bytes(self.sample_rate));
        put(&order.i32_bytes(self.byte_rate));
        put(&order.i16_bytes(self.block_align));
        put(&order.i16_bytes(self.bits_per_sample));
        put(&self.data_marker);
        put(&order.i32_bytes(data_size));

        tracing::debug!(
            ?order,
            sample_rate = self.sample_rate,
            num_channels = self.num_channels,
            bits_per_sample = self.bits_per_sample,
            data_size,
            "encoded header"
        );

        Ok(bytes)
    }

    pub(crate) fn decode_preamble(bytes: &[u8; PREAMBLE_LEN]) -> Result<Self, Error> {
        let container_tag = tag_at(bytes, 0);
        let order = ByteOrder::from_container_tag(&container_tag);
        let fmt_block_size = order.i32_from(tag_at(bytes, 16));

        if fmt_block_size < PCM_FMT_BLOCK_LEN as i32 {
            return Err(Error::FmtBlockTooSmall(fmt_block_size));
        }
        if fmt_block_size > PCM_FMT_BLOCK_LEN as i32 {
            tracing::warn!(
                fmt_block_size,
                "format block extension is ignored and will not be re-encoded"
            );
        }

        Ok(Header {
            container_tag,
            file_size: order.i32_from(tag_at(bytes, 4)),
            format_tag: tag_at(bytes, 8),
            fmt_marker: tag_at(bytes, 12),
            fmt_block_size,
            audio_format: 0,
            num_channels: 0,
            sample_rate: 0,
            byte_rate: 0,
            block_align: 0,
            bits_per_sample: 0,
            data_marker: [0; 4],
            data_size: 0,
        })
    }

    pub(crate) fn decode_fmt_block(&mut self, block: &[u8; PCM_FMT_BLOCK_LEN]) {
        let order = self.byte_order();
        let short = |at: usize| order.i16_from([block[at], block[at + 1]]);
        let long = |at: usize| order.i32_from(tag_at(block, at));

        self.audio_format = short(0);
        self.num_channels = short(2);
        self.sample_rate = long(4);
        self.byte_rate = long(8);
        self.block_align = short(12);
        self.bits_per_sample = short(14);
    }

    pub(crate) fn decode_data_chunk(&mut self, bytes: &[u8; 8]) -> Result<(), Error> {
        self.data_marker = tag_at(bytes, 0);
        self.data_size = self.byte_order().i32_from(tag_at(bytes, 4));

        if self.data_size < 0 {
            return Err(Error::InvalidDataSize(self.data_size));
        }
        self.validate()?;

        tracing::debug!(
            order = ?self.byte_order(),
            sample_rate = self.sample_rate,
            num_channels = self.num_channels,
            bits_per_sample = self.bits_per_sample,
            data_size = self.data_size,
            "decoded header"
        );

        Ok(())
    }
}

// Everything after the RIFF preamble, up to the first sample byte
const fn header_body_len() -> i32 {
    (HEADER_LEN - RIFF_PREAMBLE_LEN) as i32
}

fn tag_at(bytes: &[u8], at: usize) -> Tag {
    [bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIFF_STEREO_16: [u8; 44] = [
        0x52, 0x49, 0x46, 0x46, // RIFF
        0x2c, 0x00, 0x00, 0x00, // file size
        0x57, 0x41, 0x56, 0x45, // WAVE
        0x66, 0x6d, 0x74, 0x20, // fmt_
        0x10, 0x00, 0x00, 0x00, // format block size
        0x01, 0x00, // audio format
        0x02, 0x00, // num channels
        0x44, 0xac, 0x00, 0x00, // sample rate
        0x10, 0xb1, 0x02, 0x00, // byte rate
        0x04, 0x00, // block align
        0x10, 0x00, // bits per sample
        0x64, 0x61, 0x74, 0x61, // data
        0x08, 0x00, 0x00, 0x00, // data size
    ];

    const RIFX_MONO_8: [u8; 44] = [
        0x52, 0x49, 0x46, 0x58, // RIFX
        0x00, 0x00, 0x00, 0x28, // file size
        0x57, 0x41, 0x56, 0x45, // WAVE
        0x66, 0x6d, 0x74, 0x20, // fmt_
        0x00, 0x00, 0x00, 0x10, // format block size
        0x00, 0x01, // audio format
        0x00, 0x01, // num channels
        0x00, 0x00, 0xbb, 0x80, // sample rate
        0x00, 0x00, 0xbb, 0x80, // byte rate
        0x00, 0x01, // block align
        0x00, 0x08, // bits per sample
        0x64, 0x61, 0x74, 0x61, // data
        0x00, 0x00, 0x00, 0x04, // data size
    ];

    #[test]
    fn resolve_byte_order() {
        assert_eq!(ByteOrder::from_container_tag(&RIFF), ByteOrder::LittleEndian);
        assert_eq!(ByteOrder::from_container_tag(&RIFX), ByteOrder::BigEndian);
        assert_eq!(ByteOrder::from_container_tag(b"RIF?"), ByteOrder::BigEndian);
        assert_eq!(ByteOrder::from_container_tag(b"\0\0\0\0"), ByteOrder::BigEndian);
    }

    #[test]
    fn decode_little_endian_header() {
        let (header, consumed) = Header::from_bytes(&RIFF_STEREO_16).unwrap();

        assert_eq!(consumed, 44);
        assert_eq!(header.container_tag, RIFF);
        assert_eq!(header.file_size, 44);
        assert_eq!(header.format_tag, WAVE);
        assert_eq!(header.fmt_marker, FMT_MARKER);
        assert_eq!(header.fmt_block_size, 16);
        assert_eq!(header.audio_format, 1);
        assert_eq!(header.num_channels, 2);
        assert_eq!(header.sample_rate, 44_100);
        assert_eq!(header.byte_rate, 176_400);
        assert_eq!(header.block_align, 4);
        assert_eq!(header.bits_per_sample, 16);
        assert_eq!(header.data_marker, DATA_MARKER);
        assert_eq!(header.data_size, 8);
    }

    #[test]
    fn decode_big_endian_header() {
        let (header, consumed) = Header::from_bytes(&RIFX_MONO_8).unwrap();

        assert_eq!(consumed, 44);
        assert_eq!(header.byte_order(), ByteOrder::BigEndian);
        assert_eq!(header.file_size, 40);
        assert_eq!(header.num_channels, 1);
        assert_eq!(header.sample_rate, 48_000);
        assert_eq!(header.byte_rate, 48_000);
        assert_eq!(header.block_align, 1);
        assert_eq!(header.bits_per_sample, 8);
        assert_eq!(header.data_size, 4);
    }

    #[test]
    fn encode_matches_file_layout() {
        let (header, _) = Header::from_bytes(&RIFF_STEREO_16).unwrap();
        assert_eq!(header.to_bytes(8).unwrap(), RIFF_STEREO_16);

        let (header, _) = Header::from_bytes(&RIFX_MONO_8).unwrap();
        assert_eq!(header.to_bytes(4).unwrap(), RIFX_MONO_8);
    }

    #[test]
    fn encode_recomputes_sizes() {
        let mut header = Header::cd_quality();
        header.data_size = 12345;
        header.file_size = -1;

        let bytes = header.to_bytes(100).unwrap();
        let (decoded, _) = Header::from_bytes(&bytes).unwrap();

        assert_eq!(decoded.data_size, 100);
        assert_eq!(decoded.file_size, 136);
    }

    #[test]
    fn sample_rate_byte_order() {
        let riff = Header::new(ByteOrder::LittleEndian, 2, 44_100, 16).unwrap();
        let rifx = Header::new(ByteOrder::BigEndian, 2, 44_100, 16).unwrap();

        assert_eq!(riff.to_bytes(0).unwrap()[24..28], [0x44, 0xac, 0x00, 0x00]);
        assert_eq!(rifx.to_bytes(0).unwrap()[24..28], [0x00, 0x00, 0xac, 0x44]);
    }

    #[test]
    fn round_trip_supported_layouts() {
        for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
            for bits in [8, 16, 32] {
                for channels in [1, 2, 6] {
                    let header = Header::new(order, channels, 22_050, bits).unwrap();
                    let bytes = header.to_bytes(64).unwrap();
                    let (decoded, consumed) = Header::from_bytes(&bytes).unwrap();

                    assert_eq!(consumed, HEADER_LEN);
                    assert_eq!(
                        decoded,
                        Header {
                            data_size: 64,
                            file_size: 100,
                            ..header
                        }
                    );
                }
            }
        }
    }

    #[test]
    fn padded_format_block_is_consumed_and_dropped() {
        let mut bytes = RIFF_STEREO_16[..36].to_vec();
        bytes[16] = 0x12; // format block size 18
        bytes.extend_from_slice(&[0x00, 0x00]); // cbSize extension
        bytes.extend_from_slice(&RIFF_STEREO_16[36..]);

        let (header, consumed) = Header::from_bytes(&bytes).unwrap();

        assert_eq!(consumed, 46);
        assert_eq!(header.fmt_block_size, 18);
        assert_eq!(header.bits_per_sample, 16);
        assert_eq!(header.data_size, 8);

        let encoded = header.to_bytes(8).unwrap();
        assert_eq!(encoded, RIFF_STEREO_16);
    }

    #[test]
    fn truncated_input() {
        for len in [0, 3, 8, 19, 20, 35, 36, 43] {
            assert!(
                matches!(
                    Header::from_bytes(&RIFF_STEREO_16[..len]),
                    Err(Error::TruncatedInput { .. })
                ),
                "length {len}"
            );
        }

        assert_eq!(
            Header::from_bytes(&RIFF_STEREO_16[..30]),
            Err(Error::TruncatedInput {
                offset: 20,
                needed: 16,
                available: 10,
            })
        );
    }

    #[test]
    fn short_format_block() {
        let mut bytes = RIFF_STEREO_16;
        bytes[16] = 0x0e;

        assert_eq!(Header::from_bytes(&bytes), Err(Error::FmtBlockTooSmall(14)));
    }

    #[test]
    fn unsupported_layouts() {
        let mut bytes = RIFF_STEREO_16;
        bytes[20] = 0x03; // IEEE float
        assert_eq!(Header::from_bytes(&bytes), Err(Error::UnsupportedFormat(3)));

        let mut bytes = RIFF_STEREO_16;
        bytes[34] = 0x18; // 24-bit
        assert_eq!(Header::from_bytes(&bytes), Err(Error::UnsupportedBitDepth(24)));

        let mut bytes = RIFF_STEREO_16;
        bytes[22] = 0x00; // no channels
        assert_eq!(Header::from_bytes(&bytes), Err(Error::InvalidChannelCount(0)));

        let mut bytes = RIFF_STEREO_16;
        bytes[43] = 0x80; // negative data size
        assert_eq!(
            Header::from_bytes(&bytes),
            Err(Error::InvalidDataSize(i32::from_le_bytes([0x08, 0x00, 0x00, 0x80])))
        );

        let header = Header::new(ByteOrder::LittleEndian, 1, 44_100, 24).unwrap();
        assert_eq!(header.to_bytes(0), Err(Error::UnsupportedBitDepth(24)));
    }

    #[test]
    fn oversized_payload() {
        let header = Header::cd_quality();
        let len = i32::MAX as usize;

        assert_eq!(header.to_bytes(len), Err(Error::DataTooLarge(len)));
    }

    #[test]
    fn sample_width() {
        let mut header = Header::cd_quality();
        for (bits, width) in [(8, 1), (16, 2), (32, 4), (24, 4), (12, 4), (0, 4)] {
            header.bits_per_sample = bits;
            assert_eq!(header.bytes_per_sample(), width, "{bits} bits");
        }
    }

    #[test]
    fn cd_quality_template() {
        let header = Header::cd_quality();

        assert_eq!(header.container_tag, RIFF);
        assert_eq!(header.num_channels, 2);
        assert_eq!(header.bits_per_sample, 16);
        assert_eq!(header.sample_rate, 44_100);
        assert_eq!(header.block_align, 4);
        assert_eq!(header.byte_rate, 176_400);
        assert_eq!(header.data_size, 0);
    }

    #[test]
    fn wide_layouts_derive_without_overflow() {
        let header = Header::new(ByteOrder::LittleEndian, 2048, 44_100, 16).unwrap();
        assert_eq!(header.block_align, 4096);
        assert_eq!(header.byte_rate, 180_633_600);

        let header = Header::new(ByteOrder::BigEndian, 8, 10_000_000, 32).unwrap();
        assert_eq!(header.block_align, 32);
        assert_eq!(header.byte_rate, 320_000_000);
    }

    #[test]
    fn derived_fields_that_do_not_fit() {
        assert_eq!(
            Header::new(ByteOrder::LittleEndian, i16::MAX, 44_100, 32),
            Err(Error::LayoutOverflow {
                num_channels: i16::MAX,
                sample_rate: 44_100,
                bits_per_sample: 32,
            })
        );
        assert_eq!(
            Header::new(ByteOrder::LittleEndian, 8, 100_000_000, 32),
            Err(Error::LayoutOverflow {
                num_channels: 8,
                sample_rate: 100_000_000,
                bits_per_sample: 32,
            })
        );
    }

    #[test]
    fn cd_quality_matches_derived_layout() {
        assert_eq!(
            Header::cd_quality(),
            Header::new(ByteOrder::LittleEndian, 2, CD_SAMPLE_RATE, 16).unwrap()
        );
    }
}
