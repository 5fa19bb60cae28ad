//! Creation entry points for codec error handles.
//!
//! A thin forwarding layer over [`CodecError`]'s constructors, kept as
//! the crate's public construction surface so call sites stay decoupled
//! from the handle type's inherent methods. No validation, branching, or
//! caching happens here.

use crate::error::CodecError;
use crate::kind::ErrorKind;

/// Build an error handle from a raw numeric code.
pub fn from_code(code: i32) -> CodecError {
    CodecError::from_code(code)
}

/// Build an error handle from an error category.
pub fn from_kind(kind: ErrorKind) -> CodecError {
    CodecError::from_kind(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    #[test]
    fn forwards_codes_unchanged() {
        for code in [-1, 0, codes::INVALID_DATA, codes::IO, i32::MIN] {
            assert_eq!(from_code(code), CodecError::from_code(code));
        }
    }

    #[test]
    fn forwards_every_kind_unchanged() {
        for kind in ErrorKind::ALL {
            assert_eq!(from_kind(kind), CodecError::from_kind(kind));
        }
    }

    #[test]
    fn negative_one_reports_code_negative_one() {
        assert_eq!(from_code(-1).code(), -1);
    }

    #[test]
    fn invalid_data_reports_its_category() {
        assert_eq!(
            from_kind(ErrorKind::InvalidData).kind(),
            ErrorKind::InvalidData
        );
    }
}
