//! Pins the exact event sequence, offsets included, for a small document
//! that touches every token kind.

use insta::assert_yaml_snapshot;

use crate::{ErrorKind, EventRecorder, scan};

#[test]
fn snapshot_every_token_kind() {
    let json = r#"{"id": 7, "tags": ["a", "b"], "ok": true, "pi": -3.1e2, "none": null}"#;

    let mut recorder = EventRecorder::new();
    scan(json, &mut recorder).expect("scanner should not error on valid input");

    assert_yaml_snapshot!(recorder.events(), @r#"
    - kind: StartJson
      offset: 0
    - kind: StartObject
      offset: 0
    - kind: String
      start: 2
      end: 4
    - kind: Number
      start: 7
      end: 8
    - kind: String
      start: 11
      end: 15
    - kind: StartArray
      offset: 18
    - kind: String
      start: 20
      end: 21
    - kind: String
      start: 25
      end: 26
    - kind: EndArray
      start: 18
      end: 27
      element_count: 2
    - kind: String
      start: 31
      end: 33
    - kind: Boolean
      value: true
      start: 36
      end: 40
    - kind: String
      start: 43
      end: 45
    - kind: Number
      start: 48
      end: 54
      dot_index: 50
      exp_index: 52
    - kind: String
      start: 57
      end: 61
    - kind: "Null"
      start: 64
      end: 68
    - kind: EndObject
      start: 0
      end: 68
      element_count: 5
    - kind: EndJson
      offset: 69
    "#);
}

#[test]
fn snapshot_failure_prefix() {
    let json = "[1, [2, {\"k\": tru";

    let mut recorder = EventRecorder::new();
    let err = scan(json, &mut recorder).unwrap_err();

    assert_eq!(
        err.kind(),
        ErrorKind::EndOfInput {
            required: 4,
            available: 3
        }
    );
    assert_eq!(err.offset(), 14);
    assert_yaml_snapshot!(recorder.events(), @r"
    - kind: StartJson
      offset: 0
    - kind: StartArray
      offset: 0
    - kind: Number
      start: 1
      end: 2
    - kind: StartArray
      offset: 4
    - kind: Number
      start: 5
      end: 6
    - kind: StartObject
      offset: 8
    - kind: String
      start: 10
      end: 11
    ");
}
