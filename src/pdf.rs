//! Minimal single-page PDF 1.4 writer.
//!
//! Only what the figures need: filled rectangles, stroked lines, filled
//! circles and text set in the base-14 Helvetica font (no embedding). All
//! coordinates are PDF user space: points, origin bottom-left.

use crate::theme::Color;
use std::fmt::Write as _;

/// Bezier control distance for a quarter circle of radius 1.
const KAPPA: f32 = 0.552_284_8;

/// Helvetica advance widths for `' '..='~'`, in 1/1000 em (Adobe AFM).
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

#[derive(Debug, Default, Clone)]
pub struct PageContent {
    ops: String,
}

impl PageContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.set_fill(color);
        let _ = writeln!(self.ops, "{} {} {} {} re f", num(x), num(y), num(width), num(height));
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color) {
        let (r, g, b) = color.unit();
        let _ = writeln!(
            self.ops,
            "{} {} {} RG {} w 1 J {} {} m {} {} l S",
            num(r),
            num(g),
            num(b),
            num(width),
            num(from.0),
            num(from.1),
            num(to.0),
            num(to.1)
        );
    }

    pub fn circle(&mut self, center: (f32, f32), radius: f32, color: Color) {
        self.set_fill(color);
        let (cx, cy) = center;
        let k = radius * KAPPA;
        let _ = writeln!(self.ops, "{} {} m", num(cx + radius), num(cy));
        let quarters = [
            (cx + radius, cy + k, cx + k, cy + radius, cx, cy + radius),
            (cx - k, cy + radius, cx - radius, cy + k, cx - radius, cy),
            (cx - radius, cy - k, cx - k, cy - radius, cx, cy - radius),
            (cx + k, cy - radius, cx + radius, cy - k, cx + radius, cy),
        ];
        for (x1, y1, x2, y2, x3, y3) in quarters {
            let _ = writeln!(
                self.ops,
                "{} {} {} {} {} {} c",
                num(x1),
                num(y1),
                num(x2),
                num(y2),
                num(x3),
                num(y3)
            );
        }
        self.ops.push_str("f\n");
    }

    /// Text with its baseline starting at `(x, y)`.
    pub fn text(&mut self, x: f32, y: f32, size: f32, color: Color, content: &str) {
        self.set_fill(color);
        let _ = writeln!(
            self.ops,
            "BT /F1 {} Tf {} {} Td ({}) Tj ET",
            num(size),
            num(x),
            num(y),
            escape_text(content)
        );
    }

    pub fn as_str(&self) -> &str {
        &self.ops
    }

    fn set_fill(&mut self, color: Color) {
        let (r, g, b) = color.unit();
        let _ = writeln!(self.ops, "{} {} {} rg", num(r), num(g), num(b));
    }
}

/// Serializes a complete document with one page of `width` x `height` points.
pub fn write_document(width: f32, height: f32, content: &PageContent, title: &str) -> Vec<u8> {
    let stream = content.as_str();
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>",
            num(width),
            num(height)
        ),
        format!("<< /Length {} >>\nstream\n{}endstream", stream.len(), stream),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
        format!(
            "<< /Title ({}) /Producer (netplots {}) >>",
            escape_text(title),
            env!("CARGO_PKG_VERSION")
        ),
    ];

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (idx, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        let _ = write!(out, "{} 0 obj\n{}\nendobj\n", idx + 1, body);
    }

    let xref_offset = out.len();
    let _ = write!(out, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        let _ = write!(out, "{offset:010} 00000 n \n");
    }
    let _ = write!(
        out,
        "trailer\n<< /Size {} /Root 1 0 R /Info 6 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    );
    out.into_bytes()
}

/// Width of `text` set in Helvetica at `size` points, as a viewer draws it.
/// Characters the page cannot encode are measured as the `?` they become.
pub fn helvetica_width(text: &str, size: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|ch| match ch {
            ' '..='~' => u32::from(HELVETICA_WIDTHS[ch as usize - 0x20]),
            _ => u32::from(HELVETICA_WIDTHS[usize::from(b'?' - 0x20)]),
        })
        .sum();
    units as f32 * size / 1000.0
}

/// Formats a coordinate with at most three decimals and no trailing zeros.
fn num(value: f32) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let mut text = format!("{value:.3}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Escapes a literal string; characters outside printable ASCII become `?`
/// since the font uses a single-byte encoding.
fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' | '(' | ')' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            _ => out.push('?'),
        }
    }
    out
}
