//! Rendering decoded registers as text, key/value lines or JSON.
//!
//! Renderers only see [`RegisterView`], so every register kind shares the
//! same output shapes.

use serde::Serialize;

use crate::{Decoded, RegisterView, Result, TableId};

/// Column alignment.
#[derive(Clone, Copy, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// A builder for plain-text tables.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    alignments: Vec<Alignment>,
}

impl Table {
    /// Create a new table with headers.
    #[must_use]
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
            alignments: vec![Alignment::Left; headers.len()],
        }
    }

    /// Set column alignments.
    #[must_use]
    pub fn with_alignments(mut self, alignments: Vec<Alignment>) -> Self {
        self.alignments = alignments;
        self
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render as a markdown-style table.
    #[must_use]
    pub fn render(&self) -> String {
        if self.headers.is_empty() {
            return String::new();
        }

        let mut widths: Vec<usize> = self.headers.iter().map(String::len).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.len());
                }
            }
        }

        let mut output = String::new();

        output.push('|');
        for (header, &w) in self.headers.iter().zip(&widths) {
            output.push_str(&format!(" {header:<w$} |"));
        }
        output.push('\n');

        output.push('|');
        for (i, &w) in widths.iter().enumerate() {
            let sep = match self.alignments.get(i).copied().unwrap_or_default() {
                Alignment::Left => format!(":{:-<w$}|", "", w = w + 1),
                Alignment::Right => format!("{:-<w$}:|", "", w = w + 1),
            };
            output.push_str(&sep);
        }
        output.push('\n');

        for row in &self.rows {
            output.push('|');
            for (i, cell) in row.iter().enumerate() {
                let w = widths.get(i).copied().unwrap_or(0);
                let formatted = match self.alignments.get(i).copied().unwrap_or_default() {
                    Alignment::Left => format!(" {cell:<w$} |"),
                    Alignment::Right => format!(" {cell:>w$} |"),
                };
                output.push_str(&formatted);
            }
            output.push('\n');
        }

        output
    }
}

/// Options for [`render_text`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TextOptions {
    /// Include the per-bit grid.
    pub bit_grid: bool,
}

/// Header line, `"ESR: 0x96000045"`.
#[must_use]
pub fn header(view: &dyn RegisterView) -> String {
    format!("{}: 0x{:08X}", view.kind().name(), view.raw())
}

/// Bit positions over bit values, most significant first.
///
/// Covers 32 bits unless the value needs more.
#[must_use]
pub fn bit_grid(value: u64) -> String {
    let top = if value >> 32 == 0 {
        31
    } else {
        63 - value.leading_zeros()
    };
    let mut positions = String::new();
    let mut bits = String::new();
    for bit in (0..=top).rev() {
        positions.push_str(&format!("{bit:>3}"));
        bits.push_str(&format!("{:>3}", (value >> bit) & 1));
    }
    format!("{positions}\n{bits}\n")
}

/// Human-readable report: header, summary, warnings and a field table.
#[must_use]
pub fn render_text(view: &dyn RegisterView, options: TextOptions) -> String {
    let mut output = header(view);
    output.push('\n');
    for line in view.summary() {
        output.push_str(&format!("  {line}\n"));
    }
    for warning in view.warnings() {
        output.push_str(&format!("  Warning: {warning}\n"));
    }
    output.push('\n');

    if options.bit_grid {
        output.push_str(&bit_grid(view.raw()));
        output.push('\n');
    }

    let mut table = Table::new(&["Field", "Bits", "Value", "Binary", "Description"])
        .with_alignments(vec![
            Alignment::Left,
            Alignment::Right,
            Alignment::Right,
            Alignment::Right,
            Alignment::Left,
        ]);
    for field in view.fields() {
        table.add_row(vec![
            field.name().to_string(),
            field.spec.range(),
            field.hex(),
            field.binary(),
            field.description.clone(),
        ]);
    }
    output.push_str(&table.render());
    output
}

fn raw_key(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Key/value lines for scripting: the value and its canonical form, then
/// one line per field.
#[must_use]
pub fn render_raw(view: &dyn RegisterView) -> String {
    let mut output = format!("value=0x{:X}\ncanonical={}\n", view.raw(), view.canonical_hex());
    for field in view.fields() {
        output.push_str(&format!("{}={}\n", raw_key(field.name()), field.hex()));
    }
    for warning in view.warnings() {
        output.push_str(&format!("warning={warning}\n"));
    }
    output
}

#[derive(Serialize)]
struct FieldReport {
    name: &'static str,
    bits: String,
    value: u64,
    hex: String,
    binary: String,
    description: String,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Report<'a> {
    Decoded {
        input: &'a str,
        kind: &'static str,
        value: String,
        canonical: String,
        summary: Vec<String>,
        warnings: Vec<String>,
        fields: Vec<FieldReport>,
    },
    Rejected {
        input: &'a str,
        error: String,
    },
}

impl<'a> Report<'a> {
    fn new(input: &'a str, decoded: &Decoded) -> Self {
        match decoded {
            Ok(view) => Self::Decoded {
                input,
                kind: view.kind().name(),
                value: format!("0x{:X}", view.raw()),
                canonical: view.canonical_hex(),
                summary: view.summary(),
                warnings: view.warnings(),
                fields: view
                    .fields()
                    .into_iter()
                    .map(|field| FieldReport {
                        name: field.name(),
                        bits: field.spec.range(),
                        value: field.value,
                        hex: field.hex(),
                        binary: field.binary(),
                        description: field.description,
                    })
                    .collect(),
            },
            Err(err) => Self::Rejected {
                input,
                error: err.to_string(),
            },
        }
    }
}

/// JSON array with one object per input, decoded or rejected.
///
/// # Errors
///
/// Fails only if serialization fails.
pub fn render_json(results: &[(String, Decoded)]) -> Result<String> {
    let reports: Vec<Report<'_>> = results
        .iter()
        .map(|(input, decoded)| Report::new(input, decoded))
        .collect();
    Ok(serde_json::to_string_pretty(&reports)?)
}

/// Listing of one lookup table.
#[must_use]
pub fn render_table(table: TableId) -> String {
    let digits = table.code_digits();
    let mut listing = Table::new(&["Code", "Description"])
        .with_alignments(vec![Alignment::Right, Alignment::Left]);
    for (code, label) in table.entries() {
        listing.add_row(vec![format!("0x{code:0digits$X}"), label.to_string()]);
    }
    format!("{table}\n\n{}", listing.render())
}
