//! Bencode reader and writer.
//!
//! Bencode is the container format of `.torrent` files: integers (`i42e`),
//! byte strings (`4:spam`), lists (`l...e`) and dictionaries (`d...e`, keys
//! sorted). Only what the metainfo decoder needs is implemented; the encoder
//! exists for building fixtures.

mod decode;
mod encode;
mod error;
mod value;

pub use decode::decode;
pub use encode::encode;
pub use error::BencodeError;
pub use value::Value;

#[cfg(test)]
mod tests;
