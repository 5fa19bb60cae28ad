//! Closed enumeration of codec error categories.

use crate::codes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category of a codec error condition.
///
/// Every category has a canonical numeric code; codes that map to no
/// category classify as [`ErrorKind::Unknown`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    Unknown,
    Io,
    NumberExpected,
    InvalidData,
    OutOfMemory,
    UnknownFormat,
    Unsupported,
    NotFound,
    EndOfFile,
    OutOfRange,
    Interrupted,
    TryAgain,
    BitstreamFilterNotFound,
    BufferTooSmall,
    DecoderNotFound,
    DemuxerNotFound,
    EncoderNotFound,
    ExitRequested,
    FilterNotFound,
    MuxerNotFound,
    OptionNotFound,
    PatchWelcome,
    ProtocolNotFound,
    StreamNotFound,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognized error kind: '{0}'")]
pub struct ParseKindError(pub String);

impl ErrorKind {
    /// Every category, for exhaustive iteration.
    pub const ALL: [ErrorKind; 24] = [
        ErrorKind::Unknown,
        ErrorKind::Io,
        ErrorKind::NumberExpected,
        ErrorKind::InvalidData,
        ErrorKind::OutOfMemory,
        ErrorKind::UnknownFormat,
        ErrorKind::Unsupported,
        ErrorKind::NotFound,
        ErrorKind::EndOfFile,
        ErrorKind::OutOfRange,
        ErrorKind::Interrupted,
        ErrorKind::TryAgain,
        ErrorKind::BitstreamFilterNotFound,
        ErrorKind::BufferTooSmall,
        ErrorKind::DecoderNotFound,
        ErrorKind::DemuxerNotFound,
        ErrorKind::EncoderNotFound,
        ErrorKind::ExitRequested,
        ErrorKind::FilterNotFound,
        ErrorKind::MuxerNotFound,
        ErrorKind::OptionNotFound,
        ErrorKind::PatchWelcome,
        ErrorKind::ProtocolNotFound,
        ErrorKind::StreamNotFound,
    ];

    /// The canonical numeric code for this category.
    pub const fn code(self) -> i32 {
        match self {
            ErrorKind::Unknown => codes::UNKNOWN,
            ErrorKind::Io => codes::IO,
            ErrorKind::NumberExpected => codes::NUMBER_EXPECTED,
            ErrorKind::InvalidData => codes::INVALID_DATA,
            ErrorKind::OutOfMemory => codes::OUT_OF_MEMORY,
            ErrorKind::UnknownFormat => codes::UNKNOWN_FORMAT,
            ErrorKind::Unsupported => codes::UNSUPPORTED,
            ErrorKind::NotFound => codes::NOT_FOUND,
            ErrorKind::EndOfFile => codes::END_OF_FILE,
            ErrorKind::OutOfRange => codes::OUT_OF_RANGE,
            ErrorKind::Interrupted => codes::INTERRUPTED,
            ErrorKind::TryAgain => codes::TRY_AGAIN,
            ErrorKind::BitstreamFilterNotFound => codes::BITSTREAM_FILTER_NOT_FOUND,
            ErrorKind::BufferTooSmall => codes::BUFFER_TOO_SMALL,
            ErrorKind::DecoderNotFound => codes::DECODER_NOT_FOUND,
            ErrorKind::DemuxerNotFound => codes::DEMUXER_NOT_FOUND,
            ErrorKind::EncoderNotFound => codes::ENCODER_NOT_FOUND,
            ErrorKind::ExitRequested => codes::EXIT_REQUESTED,
            ErrorKind::FilterNotFound => codes::FILTER_NOT_FOUND,
            ErrorKind::MuxerNotFound => codes::MUXER_NOT_FOUND,
            ErrorKind::OptionNotFound => codes::OPTION_NOT_FOUND,
            ErrorKind::PatchWelcome => codes::PATCH_WELCOME,
            ErrorKind::ProtocolNotFound => codes::PROTOCOL_NOT_FOUND,
            ErrorKind::StreamNotFound => codes::STREAM_NOT_FOUND,
        }
    }

    /// Classify a numeric code; unmapped codes resolve to `Unknown`.
    pub const fn from_code(code: i32) -> ErrorKind {
        match code {
            codes::IO => ErrorKind::Io,
            codes::NUMBER_EXPECTED => ErrorKind::NumberExpected,
            codes::INVALID_DATA => ErrorKind::InvalidData,
            codes::OUT_OF_MEMORY => ErrorKind::OutOfMemory,
            codes::UNKNOWN_FORMAT => ErrorKind::UnknownFormat,
            codes::UNSUPPORTED => ErrorKind::Unsupported,
            codes::NOT_FOUND => ErrorKind::NotFound,
            codes::END_OF_FILE => ErrorKind::EndOfFile,
            codes::OUT_OF_RANGE => ErrorKind::OutOfRange,
            codes::INTERRUPTED => ErrorKind::Interrupted,
            codes::TRY_AGAIN => ErrorKind::TryAgain,
            codes::BITSTREAM_FILTER_NOT_FOUND => ErrorKind::BitstreamFilterNotFound,
            codes::BUFFER_TOO_SMALL => ErrorKind::BufferTooSmall,
            codes::DECODER_NOT_FOUND => ErrorKind::DecoderNotFound,
            codes::DEMUXER_NOT_FOUND => ErrorKind::DemuxerNotFound,
            codes::ENCODER_NOT_FOUND => ErrorKind::EncoderNotFound,
            codes::EXIT_REQUESTED => ErrorKind::ExitRequested,
            codes::FILTER_NOT_FOUND => ErrorKind::FilterNotFound,
            codes::MUXER_NOT_FOUND => ErrorKind::MuxerNotFound,
            codes::OPTION_NOT_FOUND => ErrorKind::OptionNotFound,
            codes::PATCH_WELCOME => ErrorKind::PatchWelcome,
            codes::PROTOCOL_NOT_FOUND => ErrorKind::ProtocolNotFound,
            codes::STREAM_NOT_FOUND => ErrorKind::StreamNotFound,
            _ => ErrorKind::Unknown,
        }
    }

    /// Human-readable description of this category.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorKind::Unknown => "Unknown error occurred",
            ErrorKind::Io => "Input/output error",
            ErrorKind::NumberExpected => "Number syntax expected in filename",
            ErrorKind::InvalidData => "Invalid data found when processing input",
            ErrorKind::OutOfMemory => "Cannot allocate memory",
            ErrorKind::UnknownFormat => "Unknown format",
            ErrorKind::Unsupported => "Function not implemented",
            ErrorKind::NotFound => "No such file or directory",
            ErrorKind::EndOfFile => "End of file",
            ErrorKind::OutOfRange => "Numerical result out of range",
            ErrorKind::Interrupted => "Interrupted system call",
            ErrorKind::TryAgain => "Resource temporarily unavailable",
            ErrorKind::BitstreamFilterNotFound => "Bitstream filter not found",
            ErrorKind::BufferTooSmall => "Buffer too small",
            ErrorKind::DecoderNotFound => "Decoder not found",
            ErrorKind::DemuxerNotFound => "Demuxer not found",
            ErrorKind::EncoderNotFound => "Encoder not found",
            ErrorKind::ExitRequested => "Immediate exit requested",
            ErrorKind::FilterNotFound => "Filter not found",
            ErrorKind::MuxerNotFound => "Muxer not found",
            ErrorKind::OptionNotFound => "Option not found",
            ErrorKind::PatchWelcome => "Not yet implemented, patches welcome",
            ErrorKind::ProtocolNotFound => "Protocol not found",
            ErrorKind::StreamNotFound => "Stream not found",
        }
    }

    /// Stable textual name, the inverse of [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::Unknown => "unknown",
            ErrorKind::Io => "io",
            ErrorKind::NumberExpected => "number-expected",
            ErrorKind::InvalidData => "invalid-data",
            ErrorKind::OutOfMemory => "out-of-memory",
            ErrorKind::UnknownFormat => "unknown-format",
            ErrorKind::Unsupported => "unsupported",
            ErrorKind::NotFound => "not-found",
            ErrorKind::EndOfFile => "end-of-file",
            ErrorKind::OutOfRange => "out-of-range",
            ErrorKind::Interrupted => "interrupted",
            ErrorKind::TryAgain => "try-again",
            ErrorKind::BitstreamFilterNotFound => "bitstream-filter-not-found",
            ErrorKind::BufferTooSmall => "buffer-too-small",
            ErrorKind::DecoderNotFound => "decoder-not-found",
            ErrorKind::DemuxerNotFound => "demuxer-not-found",
            ErrorKind::EncoderNotFound => "encoder-not-found",
            ErrorKind::ExitRequested => "exit-requested",
            ErrorKind::FilterNotFound => "filter-not-found",
            ErrorKind::MuxerNotFound => "muxer-not-found",
            ErrorKind::OptionNotFound => "option-not-found",
            ErrorKind::PatchWelcome => "patch-welcome",
            ErrorKind::ProtocolNotFound => "protocol-not-found",
            ErrorKind::StreamNotFound => "stream-not-found",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ErrorKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}
