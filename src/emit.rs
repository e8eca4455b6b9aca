// src/emit.rs

use crate::common::{TableError, TableKind};
use crate::tables::{TableFamily, TableSet};
use alloc::string::String;
use core::fmt::{self, Write};
use num_complex::Complex32;

/// How the bit-reversal declaration is guarded in the output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BitrevGate {
    /// Emitted unconditionally.
    #[default]
    Always,
    /// Emitted behind `#[cfg(feature = "...")]` so the consuming crate can
    /// compute the indices at runtime instead.
    Feature(String),
}

/// A table entry that can be written as a Rust literal.
trait Literal {
    /// Element type in the emitted declaration.
    const TYPE: &'static str;
    /// Whether the declaration needs the clippy allowances for float literals.
    const FLOAT: bool;

    fn write_literal<W: Write>(&self, out: &mut W) -> fmt::Result;
}

// `{:?}` prints the shortest representation that parses back to the same
// f32, and always includes a `.` or an exponent.
impl Literal for f32 {
    const TYPE: &'static str = "f32";
    const FLOAT: bool = true;

    fn write_literal<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{:?}", self)
    }
}

impl Literal for Complex32 {
    const TYPE: &'static str = "Complex32";
    const FLOAT: bool = true;

    fn write_literal<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "Complex32::new({:?}, {:?})", self.re, self.im)
    }
}

impl Literal for u16 {
    const TYPE: &'static str = "u16";
    const FLOAT: bool = false;

    fn write_literal<W: Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{}", self)
    }
}

/// Writes a [`TableSet`] as Rust source to any [`fmt::Write`] sink.
///
/// Families come out in a fixed order (twiddle, sine, bit-reversal), each
/// as `pub(crate) const NAME: &[&[T]]` with one inner slice per size.
pub struct TableEmitter<W> {
    out: W,
    bitrev_gate: BitrevGate,
}

impl<W: Write> TableEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out, bitrev_gate: BitrevGate::Always }
    }

    pub fn with_bitrev_gate(mut self, gate: BitrevGate) -> Self {
        self.bitrev_gate = gate;
        self
    }

    pub fn emit(&mut self, set: &TableSet) -> Result<(), TableError> {
        writeln!(
            self.out,
            "// Generated by fft-tables for N = {}. Do not edit.",
            set.max_size()
        )?;
        writeln!(self.out)?;

        if set.twiddle.is_some() {
            writeln!(self.out, "use num_complex::Complex32;")?;
            writeln!(self.out)?;
        }

        if let Some(family) = &set.twiddle {
            self.emit_family(family, None)?;
        }
        if let Some(family) = &set.sine {
            self.emit_family(family, None)?;
        }
        if let Some(family) = &set.bitrev {
            let feature = match &self.bitrev_gate {
                BitrevGate::Always => None,
                BitrevGate::Feature(name) => Some(name.clone()),
            };
            self.emit_family(family, feature.as_deref())?;
        }

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit_family<T: Literal>(
        &mut self,
        family: &TableFamily<T>,
        feature: Option<&str>,
    ) -> Result<(), TableError> {
        let kind: TableKind = family.kind();
        log::debug!("emitting {} ({} tables)", kind.const_name(), family.len());

        if let Some(name) = feature {
            writeln!(self.out, "#[cfg(feature = \"{}\")]", name)?;
        }
        if T::FLOAT {
            writeln!(self.out, "#[allow(clippy::approx_constant)]")?;
            writeln!(self.out, "#[allow(clippy::excessive_precision)]")?;
            writeln!(self.out, "#[allow(clippy::unreadable_literal)]")?;
        }
        writeln!(self.out, "pub(crate) const {}: &[&[{}]] = &[", kind.const_name(), T::TYPE)?;

        for (_, table) in family.iter() {
            // keep empty tables so the outer index still maps to the size
            if table.is_empty() {
                writeln!(self.out, "    &[],")?;
                continue;
            }
            writeln!(self.out, "    &[")?;
            for entry in table {
                write!(self.out, "        ")?;
                entry.write_literal(&mut self.out)?;
                writeln!(self.out, ",")?;
            }
            writeln!(self.out, "    ],")?;
        }

        writeln!(self.out, "];")?;
        writeln!(self.out)?;
        Ok(())
    }
}

/// Renders `set` into a fresh string.
pub fn render(set: &TableSet, gate: &BitrevGate) -> Result<String, TableError> {
    let mut emitter = TableEmitter::new(String::new()).with_bitrev_gate(gate.clone());
    emitter.emit(set)?;
    Ok(emitter.into_inner())
}

#[cfg(test)]
#[path = "emit_tests.rs"]
mod tests;
