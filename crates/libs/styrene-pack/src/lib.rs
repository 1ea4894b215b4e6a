//! # styrene-pack
//!
//! Fixed-capacity binary pack/unpack buffers for IPC and embedded payloads.
//!
//! Values are encoded into a byte region whose capacity is fixed up front
//! and decoded back in the same order. The codec for each value is picked by
//! the compiler from its static type ([`Pack`] / [`Unpack`]); nothing about
//! the type is written to the wire.
//!
//! ## Wire format
//!
//! ```text
//! scalar      [native bytes]                      u8..u128, i8..i128, f32, f64, bool, char
//! text        [bytes][0x00]                       str, String, CStr, CString
//! collection  [count: usize][elem]...             slices, Vec, VecDeque, LinkedList, sets, arrays
//! map         [count: usize][key][value]...       BTreeMap, HashMap
//! tuple       [first][second]...                  (A, B) up to six elements
//! ```
//!
//! Byte order and word width are native: both ends must share them. With a
//! non-default [`Alignment`], every step is padded to the alignment unit.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use styrene_pack::{StackPackBuffer, Unpacker};
//!
//! let mut buffer = StackPackBuffer::<64>::stack();
//! buffer.put(&42u32).unwrap();
//! buffer.put("hello").unwrap();
//! buffer.put(&BTreeMap::from([(1u8, 'a')])).unwrap();
//!
//! let mut unpacker = Unpacker::new(buffer.data());
//! assert_eq!(unpacker.get::<u32>().unwrap(), 42);
//! assert_eq!(unpacker.get_str().unwrap(), "hello");
//! assert_eq!(unpacker.get::<BTreeMap<u8, char>>().unwrap()[&1], 'a');
//! ```
//!
//! ## Failure semantics
//!
//! A failed [`Packer::put`] or [`Unpacker::get`] rewinds to where the call
//! started: the data size and read position never include half of a value.
//! Callers that run out of room can [`Packer::reset`] and re-encode into a
//! larger buffer; there is no partial resume.

pub mod align;
pub mod codec;
pub mod config;
pub mod context;
pub mod cursor;
pub mod error;
mod macros;
pub mod packer;
pub mod unpacker;

pub use align::Alignment;
pub use codec::{Pack, Unpack};
pub use config::{ConfigError, PackConfig};
pub use context::{PackContext, UnpackContext, COUNT_SIZE, TEXT_TERMINATOR};
pub use cursor::Cursor;
pub use error::PackError;
pub use packer::{packed_len, HeapPackBuffer, Packer, StackPackBuffer};
pub use unpacker::Unpacker;
