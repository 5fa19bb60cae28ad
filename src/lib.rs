//! Typed error handles for a media/codec pipeline.
//!
//! The underlying media stack reports failures as raw negative `i32`
//! codes. This crate turns those into owned, self-describing handles:
//!
//! ```
//! use codec_error::{factory, ErrorKind};
//!
//! let err = factory::from_code(codec_error::codes::INVALID_DATA);
//! assert_eq!(err.kind(), ErrorKind::InvalidData);
//! assert_eq!(err.description(), "Invalid data found when processing input");
//!
//! let err = factory::from_kind(ErrorKind::DecoderNotFound);
//! assert_eq!(err.code(), ErrorKind::DecoderNotFound.code());
//! ```
//!
//! Handles are plain values; construction is stateless and safe to call
//! from any thread.

pub mod codes;
mod error;
pub mod factory;
mod kind;

pub use error::CodecError;
pub use kind::{ErrorKind, ParseKindError};
