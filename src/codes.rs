//! Canonical numeric codes for codec error conditions.
//!
//! Every error condition is identified by a negative `i32`, following the
//! convention of the underlying media stack: conditions backed by a POSIX
//! errno use the negated errno value, and conditions with no errno
//! equivalent use a negated four-byte tag built by [`error_tag`]. The
//! errno-backed values are fixed here rather than taken from the host
//! libc, so a given condition carries the same code on every platform.

/// Build a negated four-byte tag code from its byte components.
pub const fn error_tag(a: u8, b: u8, c: u8, d: u8) -> i32 {
    -((a as u32 | (b as u32) << 8 | (c as u32) << 16 | (d as u32) << 24) as i32)
}

// Errno-backed conditions.
pub const IO: i32 = -5;
pub const NUMBER_EXPECTED: i32 = -33;
pub const OUT_OF_MEMORY: i32 = -12;
pub const UNKNOWN_FORMAT: i32 = -84;
pub const UNSUPPORTED: i32 = -38;
pub const NOT_FOUND: i32 = -2;
pub const OUT_OF_RANGE: i32 = -34;
pub const INTERRUPTED: i32 = -4;
pub const TRY_AGAIN: i32 = -11;

// Tag-backed conditions.
pub const INVALID_DATA: i32 = error_tag(b'I', b'N', b'D', b'A');
pub const END_OF_FILE: i32 = error_tag(b'E', b'O', b'F', b' ');
pub const BITSTREAM_FILTER_NOT_FOUND: i32 = error_tag(0xF8, b'B', b'S', b'F');
pub const BUFFER_TOO_SMALL: i32 = error_tag(b'B', b'U', b'F', b'S');
pub const DECODER_NOT_FOUND: i32 = error_tag(0xF8, b'D', b'E', b'C');
pub const DEMUXER_NOT_FOUND: i32 = error_tag(0xF8, b'D', b'E', b'M');
pub const ENCODER_NOT_FOUND: i32 = error_tag(0xF8, b'E', b'N', b'C');
pub const EXIT_REQUESTED: i32 = error_tag(b'E', b'X', b'I', b'T');
pub const FILTER_NOT_FOUND: i32 = error_tag(0xF8, b'F', b'I', b'L');
pub const MUXER_NOT_FOUND: i32 = error_tag(0xF8, b'M', b'U', b'X');
pub const OPTION_NOT_FOUND: i32 = error_tag(0xF8, b'O', b'P', b'T');
pub const PATCH_WELCOME: i32 = error_tag(b'P', b'A', b'W', b'E');
pub const PROTOCOL_NOT_FOUND: i32 = error_tag(0xF8, b'P', b'R', b'O');
pub const STREAM_NOT_FOUND: i32 = error_tag(0xF8, b'S', b'T', b'R');
pub const UNKNOWN: i32 = error_tag(b'U', b'N', b'K', b'N');

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_codes_are_negated_little_endian_tags() {
        assert_eq!(END_OF_FILE, -0x20464F45);
        assert_eq!(INVALID_DATA, -0x41444E49);
    }

    #[test]
    fn all_codes_are_negative() {
        let codes = [
            IO,
            NUMBER_EXPECTED,
            OUT_OF_MEMORY,
            UNKNOWN_FORMAT,
            UNSUPPORTED,
            NOT_FOUND,
            OUT_OF_RANGE,
            INTERRUPTED,
            TRY_AGAIN,
            INVALID_DATA,
            END_OF_FILE,
            BITSTREAM_FILTER_NOT_FOUND,
            BUFFER_TOO_SMALL,
            DECODER_NOT_FOUND,
            DEMUXER_NOT_FOUND,
            ENCODER_NOT_FOUND,
            EXIT_REQUESTED,
            FILTER_NOT_FOUND,
            MUXER_NOT_FOUND,
            OPTION_NOT_FOUND,
            PATCH_WELCOME,
            PROTOCOL_NOT_FOUND,
            STREAM_NOT_FOUND,
            UNKNOWN,
        ];
        for code in codes {
            assert!(code < 0, "code {} should be negative", code);
        }
    }
}
