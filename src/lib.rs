//! Basic `no_std` codec for PCM wave files in both byte orders: little-endian
//! `RIFF` and big-endian `RIFX`.
//!
//! Reading a wave file:
//! ```
//! use pcmwav::{ByteOrder, Pcm};
//!
//! let bytes: [u8; 48] = [
//!     0x52, 0x49, 0x46, 0x58, // RIFX
//!     0x00, 0x00, 0x00, 0x28, // file size
//!     0x57, 0x41, 0x56, 0x45, // WAVE
//!     0x66, 0x6d, 0x74, 0x20, // fmt_
//!     0x00, 0x00, 0x00, 0x10, // format block size
//!     0x00, 0x01, // audio format
//!     0x00, 0x02, // num channels
//!     0x00, 0x00, 0xac, 0x44, // sample rate
//!     0x00, 0x02, 0xb1, 0x10, // byte rate
//!     0x00, 0x04, // block align
//!     0x00, 0x10, // bits per sample
//!     0x64, 0x61, 0x74, 0x61, // data
//!     0x00, 0x00, 0x00, 0x04, // data size
//!     0x01, 0x00, 0xff, 0xff, // frame L+R
//! ];
//!
//! let pcm = Pcm::from_bytes(&bytes).unwrap();
//!
//! assert_eq!(pcm.header.byte_order(), ByteOrder::BigEndian);
//! assert_eq!(pcm.header.num_channels, 2);
//! assert_eq!(pcm.header.sample_rate, 44_100);
//! assert_eq!(pcm.data, vec![0x01, 0x00, 0xff, 0xff]);
//! assert_eq!(pcm.to_bytes().unwrap(), bytes);
//! ```
//!
//! Writing one second of an A4 tone to disk (requires the "std" feature):
//! ```
//! # #[cfg(feature = "std")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use pcmwav::Pcm;
//!
//! let mut pcm = Pcm::cd_quality();
//! pcm.allocate_frames(44_100)?;
//!
//! for frame in 0..pcm.frame_count() {
//!     pcm.synthesize_tone(32_000, frame * 4, 44_100.0, 440.0 * frame as f64)?;
//! }
//!
//! let path = std::env::temp_dir().join("pcmwav_a4.wav");
//! pcm.save_file(&path)?;
//!
//! let loaded = Pcm::load_file(&path)?;
//! assert_eq!(loaded.header.data_size, 176_400);
//! # std::fs::remove_file(&path)?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "std"))]
//! # fn main() {}
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod header;
mod pcm;
mod storage;

#[cfg(feature = "io")]
pub mod asynch;

pub use error::{Error, IoError};
pub use header::{
    ByteOrder, CD_SAMPLE_RATE, DAT_SAMPLE_RATE, DATA_MARKER, FMT_MARKER, HEADER_LEN, Header,
    PCM_FMT_BLOCK_LEN, PCM_FORMAT, RIFF, RIFX, Tag, WAVE,
};
pub use pcm::Pcm;
pub use storage::Storage;

#[cfg(feature = "io")]
pub use storage::IoStorage;
#[cfg(feature = "std")]
pub use storage::{File, FileError};
