//! Source Map Revision 3 document assembly.
//!
//! A small emitter object tracks current generated line/column, a
//! per-line segment list, a `names` table with dedup, and a `source`
//! index, kept local to one `print` call. [`Emitter`] is that object;
//! [`SourceMap`] is the document it produces.

use boa_interner::{Interner, Sym};
use indexmap::IndexMap;
use redast_ast::SourceLocation;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One mapping segment: a generated column on the emitter's current line,
/// mapped to a source position (always source index 0 — this core emits
/// at most one source per `print` call) and optionally an original name.
#[derive(Clone, Copy, Debug)]
struct Segment {
    generated_column: u32,
    source_line: u32,
    source_column: u32,
    name_index: Option<u32>,
}

/// Tracks generated-output position and accumulates mapping segments
/// while [`crate::Printer`] writes code.
pub(crate) struct Emitter {
    has_source: bool,
    line: u32,
    column: u32,
    lines: Vec<Vec<Segment>>,
    names: IndexMap<Sym, u32>,
}

impl Emitter {
    pub(crate) fn new(has_source: bool) -> Self {
        Self {
            has_source,
            line: 0,
            column: 0,
            lines: vec![Vec::new()],
            names: IndexMap::new(),
        }
    }

    /// Advances the emitter's generated-position cursor past `text`, which
    /// was just appended to the output buffer.
    pub(crate) fn advance(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
                self.lines.push(Vec::new());
            } else {
                self.column += 1;
            }
        }
    }

    /// Pushes a mapping for a node entering at the emitter's current
    /// generated position, for any node whose `loc.start` is defined.
    /// `name` is the original (unmangled) identifier, supplied only when
    /// `getName` changed what gets emitted.
    pub(crate) fn push(&mut self, loc: SourceLocation, name: Option<Sym>) {
        if !self.has_source {
            return;
        }
        let source_line = loc.start.line.saturating_sub(1);
        let source_column = loc.start.column;

        if let Some(last) = self.lines[self.line as usize].last() {
            if last.source_line == source_line
                && last.source_column == source_column
                && last.name_index.is_none()
                && name.is_none()
            {
                log::trace!("source map: skipping duplicate mapping at {source_line}:{source_column}");
                return;
            }
        }

        let name_index = name.map(|sym| self.intern_name(sym));
        self.lines[self.line as usize].push(Segment {
            generated_column: self.column,
            source_line,
            source_column,
            name_index,
        });
        log::trace!(
            "source map: mapping generated {}:{} -> source {source_line}:{source_column}",
            self.line,
            self.column
        );
    }

    fn intern_name(&mut self, sym: Sym) -> u32 {
        if let Some(&index) = self.names.get(&sym) {
            return index;
        }
        let index = u32::try_from(self.names.len()).unwrap_or(u32::MAX);
        self.names.insert(sym, index);
        index
    }

    pub(crate) fn into_source_map(
        self,
        source: Option<String>,
        content: Option<String>,
        encode: bool,
        interner: &Interner,
    ) -> SourceMap {
        let names = self
            .names
            .keys()
            .map(|sym| interner.resolve_expect(*sym).to_string())
            .collect();

        let mappings = if encode {
            Mappings::Encoded(encode_mappings(&self.lines))
        } else {
            Mappings::Decoded(decode_mappings(&self.lines))
        };

        SourceMap {
            version: 3,
            sources: source.into_iter().collect(),
            sources_content: content.map_or_else(Vec::new, |c| vec![Some(c)]),
            names,
            mappings,
        }
    }
}

fn encode_mappings(lines: &[Vec<Segment>]) -> String {
    let mut out = String::new();
    let mut prev_source_line: i64 = 0;
    let mut prev_source_column: i64 = 0;
    let mut prev_name: i64 = 0;

    for (line_index, segments) in lines.iter().enumerate() {
        if line_index > 0 {
            out.push(';');
        }
        let mut prev_generated_column: i64 = 0;
        for (segment_index, segment) in segments.iter().enumerate() {
            if segment_index > 0 {
                out.push(',');
            }
            let mut buf = Vec::new();
            let generated_column = i64::from(segment.generated_column);
            vlq_push(&mut buf, generated_column - prev_generated_column);
            prev_generated_column = generated_column;

            vlq_push(&mut buf, 0); // single source, index delta always 0

            let source_line = i64::from(segment.source_line);
            vlq_push(&mut buf, source_line - prev_source_line);
            prev_source_line = source_line;

            let source_column = i64::from(segment.source_column);
            vlq_push(&mut buf, source_column - prev_source_column);
            prev_source_column = source_column;

            if let Some(name_index) = segment.name_index {
                let name_index = i64::from(name_index);
                vlq_push(&mut buf, name_index - prev_name);
                prev_name = name_index;
            }

            out.push_str(std::str::from_utf8(&buf).expect("vlq output is ASCII"));
        }
    }

    out
}

fn vlq_push(buf: &mut Vec<u8>, value: i64) {
    vlq::encode(value, buf).expect("writing to a Vec<u8> never fails");
}

fn decode_mappings(lines: &[Vec<Segment>]) -> Vec<Vec<Vec<i64>>> {
    lines
        .iter()
        .map(|segments| {
            segments
                .iter()
                .map(|segment| {
                    let mut fields = vec![
                        i64::from(segment.generated_column),
                        0,
                        i64::from(segment.source_line),
                        i64::from(segment.source_column),
                    ];
                    if let Some(name_index) = segment.name_index {
                        fields.push(i64::from(name_index));
                    }
                    fields
                })
                .collect()
        })
        .collect()
}

/// The `mappings` field's two possible shapes, selected by
/// `PrinterOptions::with_source_map_encode_mappings`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Mappings {
    /// The VLQ-encoded `mappings` string (the default).
    Encoded(String),
    /// A decoded 2-D array, one inner list per generated line, each
    /// segment having 1, 4, or 5 integer fields.
    Decoded(Vec<Vec<Vec<i64>>>),
}

/// A Source Map Revision 3 document.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SourceMap {
    /// Always `3`.
    pub version: u8,
    /// The recorded source file name, present iff `sourceMapSource` was
    /// set.
    pub sources: Vec<String>,
    /// The recorded original source text, present iff `sourceMapContent`
    /// was set.
    #[cfg_attr(feature = "serde", serde(rename = "sourcesContent"))]
    pub sources_content: Vec<Option<String>>,
    /// Original names referenced by renamed-identifier mappings, in
    /// first-use order.
    pub names: Vec<String>,
    /// The mapping data, VLQ-encoded or decoded per
    /// `sourceMapEncodeMappings`.
    pub mappings: Mappings,
}
