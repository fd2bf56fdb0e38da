#![allow(missing_docs)]
//! End-to-end scans through the public API only.

use bstr::ByteSlice;
use jsonscan::{
    ErrorKind, EventRecorder, ScanEvent, ScanOptions, Scanner, Sink, Source, Utf8Validation, scan,
};
use serde_json::Value;

const DOCUMENT: &str = r#"
{
    "moderation": {
        "decision": "allow",
        "reason": null
    },
    "request": {
        "filename": "example.rs",
        "language": "rust",
        "options": {
            "opt_level": "2",
            "features": [
                "serde",
                "tokio"
            ]
        }
    },
    "snippets": [
        "fn main() {}",
        "println!(\"hi\")"
    ],
    "entities": [
        {
            "type": "function",
            "name": "main",
            "line": 1
        },
        {
            "type": "macro",
            "name": "println",
            "line": 2
        }
    ],
    "matrix": [
        [
            "a"
        ]
    ],
    "scores": [0.5, -1e3, 2.5E-2, 0, 12],
    "flags": [true, false, null],
    "unicode": "grüße, 🙂, 漢字"
}
"#;

/// Counts scalars by kind without keeping any events.
#[derive(Default, Debug, PartialEq, Eq)]
struct Tally {
    strings: usize,
    integers: usize,
    floats: usize,
    literals: usize,
    collections: usize,
}

impl<S: Source + ?Sized> Sink<S> for Tally {
    fn end_object(&mut self, _: &S, _: usize, _: usize, _: usize) {
        self.collections += 1;
    }

    fn end_array(&mut self, _: &S, _: usize, _: usize, _: usize) {
        self.collections += 1;
    }

    fn string_value(&mut self, _: &S, _: usize, _: usize) {
        self.strings += 1;
    }

    fn number_value(
        &mut self,
        _: &S,
        _: usize,
        _: usize,
        dot_index: Option<usize>,
        exp_index: Option<usize>,
    ) {
        if dot_index.is_none() && exp_index.is_none() {
            self.integers += 1;
        } else {
            self.floats += 1;
        }
    }

    fn boolean_value(&mut self, _: &S, _: bool, _: usize, _: usize) {
        self.literals += 1;
    }

    fn null_value(&mut self, _: &S, _: usize, _: usize) {
        self.literals += 1;
    }
}

fn count_serde(value: &Value, tally: &mut Tally) {
    match value {
        Value::Null | Value::Bool(_) => tally.literals += 1,
        Value::Number(n) if n.is_f64() => tally.floats += 1,
        Value::Number(_) => tally.integers += 1,
        Value::String(_) => tally.strings += 1,
        Value::Array(items) => {
            tally.collections += 1;
            items.iter().for_each(|item| count_serde(item, tally));
        }
        Value::Object(members) => {
            tally.collections += 1;
            for (_, value) in members {
                tally.strings += 1;
                count_serde(value, tally);
            }
        }
    }
}

#[test]
fn tally_matches_serde_json() {
    let mut scanned = Tally::default();
    scan(DOCUMENT, &mut scanned).expect("document scans");

    let mut parsed = Tally::default();
    count_serde(&serde_json::from_str(DOCUMENT).unwrap(), &mut parsed);
    assert_eq!(scanned, parsed);
}

#[test]
fn spans_decode_to_the_same_scalars() {
    let mut recorder = EventRecorder::new();
    scan(DOCUMENT, &mut recorder).unwrap();

    let scores: Vec<f64> = recorder
        .events()
        .iter()
        .filter(|event| event.is_integer().is_some())
        .filter_map(ScanEvent::span)
        .map(|span| DOCUMENT[span].parse().unwrap())
        .collect();
    assert_eq!(scores, [1.0, 2.0, 0.5, -1e3, 2.5e-2, 0.0, 12.0]);

    let last_string = recorder
        .events()
        .iter()
        .rev()
        .find(|event| matches!(event, ScanEvent::String { .. }))
        .and_then(ScanEvent::span)
        .unwrap();
    let raw = &DOCUMENT[last_string.start - 1..=last_string.end];
    let decoded: String = serde_json::from_str(raw).unwrap();
    assert_eq!(decoded, "grüße, 🙂, 漢字");
}

#[test]
fn sources_are_interchangeable() {
    let scanner = Scanner::default();
    let mut from_str = EventRecorder::new();
    let mut from_bstr = EventRecorder::new();
    let mut from_string = EventRecorder::new();
    scanner.scan(DOCUMENT, &mut from_str).unwrap();
    scanner
        .scan(DOCUMENT.as_bytes().as_bstr(), &mut from_bstr)
        .unwrap();
    scanner
        .scan(&String::from(DOCUMENT), &mut from_string)
        .unwrap();
    assert_eq!(from_str, from_bstr);
    assert_eq!(from_str, from_string);
}

#[test]
fn strict_scanner_rejects_what_it_must() {
    let scanner = Scanner::new(ScanOptions {
        utf8: Utf8Validation::Strict,
        allow_trailing_content: false,
        ..Default::default()
    });
    assert!(scanner.scan(DOCUMENT, &mut ()).is_ok());

    let err = scanner.scan("[1]\n[2]", &mut ()).unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::MalformedToken {
            expected: "end of input"
        }
    );
    assert_eq!((err.line(), err.column(), err.offset()), (1, 0, 4));
}

#[test]
fn error_messages_are_positioned() {
    let err = scan("{\n  \"a\": ,\n}", &mut ()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed token: expected json value at line 1, column 7 (offset 9)"
    );

    let err = scan("[\"abc", &mut ()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected end of input: 1 more byte(s) required, 0 available at line 0, column 5 (offset 5)"
    );
}

#[test]
fn every_truncation_is_end_of_input() {
    let trimmed = DOCUMENT.trim_end();
    for cut in 0..trimmed.len() - 1 {
        if !trimmed.is_char_boundary(cut) {
            continue;
        }
        let err = scan(&trimmed[..cut], &mut ()).expect_err("truncated document");
        assert!(err.is_end_of_input(), "cut at {cut}: {err}");
    }
}
