use super::*;
use crate::tables::GeneratorConfig;
use std::string::{String, ToString};
use std::vec::Vec;

fn generate(n: usize, kinds: &[TableKind]) -> TableSet {
    TableSet::generate(&GeneratorConfig::new(n).with_kinds(kinds)).unwrap()
}

/// Sink that accepts `budget` bytes, then fails.
struct LimitedSink {
    budget: usize,
}

impl Write for LimitedSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if s.len() > self.budget {
            return Err(fmt::Error);
        }
        self.budget -= s.len();
        Ok(())
    }
}

#[test]
fn test_render_sine_and_bitrev_4() {
    let set = generate(4, &[TableKind::Sine, TableKind::BitReversal]);
    let text = render(&set, &BitrevGate::Always).unwrap();

    let expected = "\
// Generated by fft-tables for N = 4. Do not edit.

#[allow(clippy::approx_constant)]
#[allow(clippy::excessive_precision)]
#[allow(clippy::unreadable_literal)]
pub(crate) const SINE: &[&[f32]] = &[
    &[],
];

pub(crate) const BITREV: &[&[u16]] = &[
    &[
        0,
    ],
    &[
        0,
        1,
    ],
    &[
        0,
        2,
        2,
        3,
    ],
];

";
    assert_eq!(text, expected);
}

#[test]
fn test_render_twiddle_2() {
    let set = generate(2, &[TableKind::Twiddle]);
    let text = render(&set, &BitrevGate::Always).unwrap();

    let expected = "\
// Generated by fft-tables for N = 2. Do not edit.

use num_complex::Complex32;

#[allow(clippy::approx_constant)]
#[allow(clippy::excessive_precision)]
#[allow(clippy::unreadable_literal)]
pub(crate) const TWIDDLE: &[&[Complex32]] = &[
    &[
        Complex32::new(1.0, -0.0),
    ],
    &[
        Complex32::new(1.0, -0.0),
    ],
];

";
    assert_eq!(text, expected);
}

#[test]
fn test_use_line_only_with_twiddles() {
    let set = generate(8, &[TableKind::Sine, TableKind::BitReversal]);
    let text = render(&set, &BitrevGate::Always).unwrap();
    assert!(!text.contains("use num_complex"));
    assert!(!text.contains("TWIDDLE"));
}

#[test]
fn test_family_order() {
    let set = generate(16, &TableKind::ALL);
    let text = render(&set, &BitrevGate::Always).unwrap();

    let twiddle = text.find("const TWIDDLE").unwrap();
    let sine = text.find("const SINE").unwrap();
    let bitrev = text.find("const BITREV").unwrap();
    assert!(twiddle < sine && sine < bitrev);
}

#[test]
fn test_bitrev_feature_gate() {
    let set = generate(8, &TableKind::ALL);
    let gate = BitrevGate::Feature("bitrev-tables".to_string());
    let text = render(&set, &gate).unwrap();

    assert!(text.contains(
        "#[cfg(feature = \"bitrev-tables\")]\npub(crate) const BITREV: &[&[u16]] = &["
    ));
    // only the bit-reversal family is gated
    assert_eq!(text.matches("#[cfg(").count(), 1);
}

#[test]
fn test_bitrev_omitted() {
    let set = generate(8, &[TableKind::Twiddle, TableKind::Sine]);
    let text = render(&set, &BitrevGate::Feature("unused".to_string())).unwrap();
    assert!(!text.contains("BITREV"));
    assert!(!text.contains("unused"));
}

#[test]
fn test_float_literals_round_trip() {
    let set = generate(1024, &[TableKind::Sine]);
    let text = render(&set, &BitrevGate::Always).unwrap();

    let parsed: Vec<f32> = text
        .lines()
        .filter_map(|line| line.trim().strip_suffix(','))
        .filter_map(|literal| literal.parse::<f32>().ok())
        .collect();
    let expected: Vec<f32> = set
        .sine
        .as_ref()
        .unwrap()
        .iter()
        .flat_map(|(_, table)| table.iter().copied())
        .collect();

    assert_eq!(parsed.len(), expected.len());
    for (a, b) in parsed.iter().zip(&expected) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_complex_literals_round_trip() {
    let set = generate(64, &[TableKind::Twiddle]);
    let text = render(&set, &BitrevGate::Always).unwrap();

    let parsed: Vec<Complex32> = text
        .lines()
        .filter_map(|line| line.trim().strip_prefix("Complex32::new("))
        .filter_map(|rest| rest.strip_suffix("),"))
        .map(|args| {
            let (re, im) = args.split_once(", ").unwrap();
            Complex32::new(re.parse().unwrap(), im.parse().unwrap())
        })
        .collect();
    let expected: Vec<Complex32> = set
        .twiddle
        .as_ref()
        .unwrap()
        .iter()
        .flat_map(|(_, table)| table.iter().copied())
        .collect();

    assert_eq!(parsed, expected);
}

#[test]
fn test_every_float_literal_is_a_float() {
    let set = generate(512, &[TableKind::Twiddle, TableKind::Sine]);
    let text = render(&set, &BitrevGate::Always).unwrap();
    for line in text.lines().filter(|l| l.starts_with("        ")) {
        let literal = line.trim().trim_end_matches(',');
        let literal = literal
            .strip_prefix("Complex32::new(")
            .and_then(|l| l.strip_suffix(')'))
            .unwrap_or(literal);
        for part in literal.split(", ") {
            assert!(part.contains('.') || part.contains('e'), "not a float literal: {}", part);
        }
    }
}

#[test]
fn test_render_is_deterministic() {
    let a = render(&generate(256, &TableKind::ALL), &BitrevGate::Always).unwrap();
    let b = render(&generate(256, &TableKind::ALL), &BitrevGate::Always).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_sink_failure() {
    let set = generate(64, &TableKind::ALL);
    let mut emitter = TableEmitter::new(LimitedSink { budget: 200 });
    assert_eq!(emitter.emit(&set), Err(TableError::WriteFailed));
}

#[test]
fn test_emitter_into_inner() {
    let set = generate(1, &[TableKind::BitReversal]);
    let mut emitter = TableEmitter::new(String::new());
    emitter.emit(&set).unwrap();
    let text = emitter.into_inner();
    assert!(text.ends_with("pub(crate) const BITREV: &[&[u16]] = &[\n    &[\n        0,\n    ],\n];\n\n"));
}
