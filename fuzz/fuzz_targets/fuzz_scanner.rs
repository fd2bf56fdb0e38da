#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsonscan::{EventRecorder, ScanEvent, ScanOptions, Utf8Validation, scan_with_options};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 1; // option flags

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[b" ", b"\t", b"\n", b"\r", b"\r\n"];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// One time in ten, replaces the input with freshly serialized documents so
/// the corpus keeps a supply of deep, valid structure for the byte-level
/// mutator to damage.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0b11);

        let mut prefix = HEADER;
        while prefix < size {
            let limit = max_size - prefix;

            prefix += append_whitespace(&mut data[prefix..], limit);
            let limit = max_size - prefix;
            prefix += append_value(&mut data[prefix..], size, limit);
            let limit = max_size - prefix;
            prefix += append_whitespace(&mut data[prefix..], limit);
        }

        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Appends up to eight JSON whitespace runs without exceeding `limit`.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }

        let runs = rng.random_range(1..=limit.min(8));
        let mut written = 0;
        for _ in 0..runs {
            let w = WS_TABLE[rng.random_range(0..WS_TABLE.len())];
            if written + w.len() > limit {
                break;
            }
            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..=size * 2).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryRoot::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("values always serialize");

    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(21)? {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3 => Value::Number(u.arbitrary::<i64>()?.into()),
            4..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

/// A value whose root is an object or an array.
#[derive(Debug)]
struct ArbitraryRoot(Value);

impl<'a> Arbitrary<'a> for ArbitraryRoot {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        match ArbitraryValue::arbitrary(u)?.0 {
            root @ (Value::Array(_) | Value::Object(_)) => Ok(ArbitraryRoot(root)),
            scalar => Ok(ArbitraryRoot(Value::Array(vec![scalar]))),
        }
    }
}

fn scan_recorded(data: &[u8], options: ScanOptions) -> (bool, Vec<ScanEvent>) {
    let mut recorder = EventRecorder::new();
    let result = scan_with_options(data, &mut recorder, options);
    if let Err(err) = &result {
        assert!(err.offset() <= data.len(), "{err} past the end of {} bytes", data.len());
    }
    (result.is_ok(), recorder.into_events())
}

fn check_balanced(events: &[ScanEvent], len: usize) {
    let mut depth = 0usize;
    for event in events {
        match event {
            ScanEvent::StartObject { .. } | ScanEvent::StartArray { .. } => depth += 1,
            ScanEvent::EndObject { .. } | ScanEvent::EndArray { .. } => {
                depth = depth.checked_sub(1).expect("close without open");
            }
            _ => {}
        }
        if let Some(span) = event.span() {
            assert!(span.start <= span.end && span.end <= len, "{event:?}");
        }
    }
    assert_eq!(depth, 0, "unbalanced events");
    assert!(matches!(events.last(), Some(ScanEvent::EndJson { .. })));
}

fn scanner(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let flags = data[0];
    let data = &data[HEADER..];

    let options = ScanOptions {
        utf8: if flags & 1 != 0 {
            Utf8Validation::Strict
        } else {
            Utf8Validation::Structural
        },
        allow_trailing_content: flags & 2 != 0,
        panic_on_error: false,
    };

    let (accepted, events) = scan_recorded(data, options);
    if accepted {
        check_balanced(&events, data.len());
    }

    // On well-formed UTF-8 the two validation modes cannot disagree.
    if std::str::from_utf8(data).is_ok() {
        let other = ScanOptions {
            utf8: match options.utf8 {
                Utf8Validation::Strict => Utf8Validation::Structural,
                Utf8Validation::Structural => Utf8Validation::Strict,
            },
            ..options
        };
        assert_eq!(scan_recorded(data, other), (accepted, events));
    }

    // Anything serde_json accepts with a collection root must scan.
    if let Ok(Value::Array(_) | Value::Object(_)) = serde_json::from_slice::<Value>(data) {
        let strict = ScanOptions {
            utf8: Utf8Validation::Strict,
            allow_trailing_content: false,
            panic_on_error: false,
        };
        let (strict_accepted, _) = scan_recorded(data, strict);
        assert!(strict_accepted, "serde_json accepted input the scanner rejected");
    }
}

fuzz_target!(|data: &[u8]| scanner(data));
