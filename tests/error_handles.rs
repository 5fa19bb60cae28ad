//! Integration tests exercising the public error-handle API.

use codec_error::{codes, factory, CodecError, ErrorKind};

#[test]
fn raw_codes_pass_through_the_factory() {
    for code in [-1, codes::IO, codes::END_OF_FILE, i32::MIN, 0] {
        let err = factory::from_code(code);
        assert_eq!(err.code(), code);
    }
}

#[test]
fn every_category_round_trips_through_its_code() {
    for kind in ErrorKind::ALL {
        let err = factory::from_code(kind.code());
        assert_eq!(err.kind(), kind);
        assert_eq!(err.description(), kind.description());
    }
}

#[test]
fn handles_work_as_boxed_standard_errors() {
    fn decode() -> Result<(), Box<dyn std::error::Error>> {
        Err(Box::new(factory::from_kind(ErrorKind::DecoderNotFound)))
    }

    let err = decode().unwrap_err();
    assert!(err.to_string().starts_with("Decoder not found"));
}

#[test]
fn handles_serialize_for_structured_reporting() {
    let err = factory::from_code(codes::BUFFER_TOO_SMALL);
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["kind"], serde_json::json!("buffer-too-small"));
    assert_eq!(json["code"], serde_json::json!(codes::BUFFER_TOO_SMALL));
}

#[test]
fn kinds_parse_from_their_stable_names() {
    let kind: ErrorKind = "demuxer-not-found".parse().unwrap();
    assert_eq!(kind, ErrorKind::DemuxerNotFound);
    assert_eq!(
        factory::from_kind(kind),
        CodecError::from_code(codes::DEMUXER_NOT_FOUND)
    );
}
