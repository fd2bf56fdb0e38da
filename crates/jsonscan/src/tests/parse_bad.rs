//! Invalid documents: every one must be rejected, and the error category
//! must say whether more input could have helped.

use rstest::rstest;

use crate::{ScanOptions, Utf8Validation, scan, scan_with_options};

#[rstest]
#[case("[1,2,]")]
#[case(r#"{"a":1,,"b":2}"#)]
#[case("{,}")]
#[case("[,1]")]
#[case("[01]")]
#[case("[-01]")]
#[case("[1.e5]")]
#[case("[1e+]")]
#[case("[+1]")]
#[case("[0x10]")]
#[case("[Infinity]")]
#[case("[NaN]")]
#[case("[True]")]
#[case("[nul]")]
#[case("['single']")]
#[case(r#"{"a" "b"}"#)]
#[case(r#"{"a":1 "b":2}"#)]
#[case(r#"{"a"::1}"#)]
#[case("{a:1}")]
#[case(r#"["\u00G0"]"#)]
#[case(r#"["\x41"]"#)]
#[case("[\"tab\there\"]")]
#[case("[\"new\nline\"]")]
#[case("[1 2]")]
#[case("[}")]
#[case(r#"{"a":]"#)]
#[case("null")]
#[case("42")]
#[case(r#""text""#)]
fn malformed_documents(#[case] src: &str) {
    let err = scan(src, &mut ()).expect_err(src);
    assert!(!err.is_end_of_input(), "{src:?}: {err}");
}

#[rstest]
#[case("")]
#[case(" \n ")]
#[case("[")]
#[case("[1")]
#[case("[1,")]
#[case("[-")]
#[case("[1.")]
#[case("[1e")]
#[case("[1e-")]
#[case("[tr")]
#[case("[fals")]
#[case(r#"{"a""#)]
#[case(r#"{"a":"#)]
#[case(r#"{"a":1"#)]
#[case(r#"{"a":1,"#)]
#[case(r#"["abc"#)]
#[case(r#"["\"#)]
#[case(r#"["\u"#)]
#[case(r#"["\u12"#)]
#[case("[[[{\"deep\":[")]
fn truncated_documents(#[case] src: &str) {
    let err = scan(src, &mut ()).expect_err(src);
    assert!(err.is_end_of_input(), "{src:?}: {err}");
}

#[rstest]
#[case(b"[\"\x80\"]")]
#[case(b"[\"\xFF\"]")]
#[case(b"[\"\xC3(\"]")]
#[case(b"[\"\xE2\x82\"]")]
fn malformed_utf8_is_rejected_in_every_mode(#[case] src: &[u8]) {
    for utf8 in [Utf8Validation::Structural, Utf8Validation::Strict] {
        let options = ScanOptions {
            utf8,
            ..Default::default()
        };
        let err = scan_with_options(src, &mut (), options).expect_err("malformed UTF-8");
        assert!(!err.is_end_of_input(), "{src:?} {utf8:?}: {err}");
    }
}

#[test]
fn truncated_utf8_is_end_of_input() {
    let err = scan(&b"[\"\xF0\x9F"[..], &mut ()).unwrap_err();
    assert!(err.is_end_of_input(), "{err}");
}

/// Inputs `serde_json` refuses but a structural scan accepts, because the
/// scanner never decodes escapes and does not require the root to be the
/// whole input unless asked to.
#[rstest]
#[case(r#"["\uD800"]"#)]
#[case(r#"["\uDC00\uD800"]"#)]
#[case("[1] trailing")]
#[case("{}{}")]
fn accepted_where_a_decoder_would_fail(#[case] src: &str) {
    assert!(serde_json::from_str::<serde_json::Value>(src).is_err());
    assert!(scan(src, &mut ()).is_ok(), "{src:?}");
}

#[test]
fn rejecting_trailing_content() {
    let options = ScanOptions {
        allow_trailing_content: false,
        ..Default::default()
    };
    for src in ["[1] trailing", "{}{}", "[] ]"] {
        let err = scan_with_options(src, &mut (), options).expect_err(src);
        assert!(!err.is_end_of_input(), "{src:?}: {err}");
    }
}
