use crate::figure::{EdgeShade, FigureSpec, PanelSpec};
use crate::ir::Graph;
use crate::layout::Layout;
use crate::pdf::{PageContent, helvetica_width, write_document};
use crate::text_metrics::text_width;
use crate::theme::{Color, Theme};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Space kept free around each panel.
const PANEL_PADDING: f32 = 6.0;
/// Title band height relative to the title font size.
const TITLE_BAND: f32 = 1.8;
/// Pixels per point when rasterising.
#[cfg(feature = "png")]
const PNG_SCALE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Pdf,
    Svg,
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Color,
    },
    Circle {
        center: (f32, f32),
        radius: f32,
        fill: Color,
    },
    /// Text horizontally centered on `x` with its baseline at `y`.
    Text {
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        content: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A panel cell as drawn on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelFrame {
    pub row: usize,
    pub col: usize,
    pub title: Option<String>,
    pub plot_area: Rect,
}

/// Drawing surface for exactly one figure, in points with the origin at the
/// top-left corner. A canvas is consumed by [`Canvas::save`].
#[derive(Debug)]
pub struct Canvas {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub background: Color,
    rows: usize,
    cols: usize,
    primitives: Vec<Primitive>,
    panels: Vec<PanelFrame>,
}

impl Canvas {
    pub fn for_figure(spec: &FigureSpec, theme: &Theme) -> Self {
        Self {
            title: spec.name.to_string(),
            width: spec.width_pt(),
            height: spec.height_pt(),
            background: theme.background,
            rows: spec.rows.max(1),
            cols: spec.cols.max(1),
            primitives: Vec::new(),
            panels: Vec::new(),
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn panels(&self) -> &[PanelFrame] {
        &self.panels
    }

    /// Draws `graph` at `layout` into grid cell `index` (row-major).
    pub fn draw_panel(
        &mut self,
        index: usize,
        panel: &PanelSpec,
        graph: &Graph,
        layout: &Layout,
        theme: &Theme,
    ) {
        let row = index / self.cols;
        let col = index % self.cols;
        let cell_w = self.width / self.cols as f32;
        let cell_h = self.height / self.rows as f32;
        let mut area = Rect {
            x: col as f32 * cell_w + PANEL_PADDING,
            y: row as f32 * cell_h + PANEL_PADDING,
            width: (cell_w - 2.0 * PANEL_PADDING).max(1.0),
            height: (cell_h - 2.0 * PANEL_PADDING).max(1.0),
        };

        if let Some(title) = panel.title {
            let band = theme.title_font_size * TITLE_BAND;
            self.primitives.push(Primitive::Text {
                x: area.x + area.width / 2.0,
                y: area.y + theme.title_font_size,
                size: fit_font_size(title, theme.title_font_size, area.width, &theme.font_family),
                color: theme.text_color,
                content: title.to_string(),
            });
            area.y += band;
            area.height = (area.height - band).max(1.0);
        }

        let radius = theme.node_radius();
        let points = project(layout, area, radius + 2.0);
        let edge_color = match panel.edges {
            EdgeShade::Regular => theme.edge_color,
            EdgeShade::Light => theme.light_edge_color,
        };
        for (a, b) in graph.edges() {
            self.primitives.push(Primitive::Line {
                from: points[a],
                to: points[b],
                width: theme.edge_width,
                color: edge_color,
            });
        }
        for point in &points {
            self.primitives.push(Primitive::Circle {
                center: *point,
                radius,
                fill: theme.node_color,
            });
        }
        if theme.with_labels {
            for (idx, (x, y)) in points.iter().enumerate() {
                let content = idx.to_string();
                self.primitives.push(Primitive::Text {
                    x: *x,
                    y: y + theme.label_font_size * 0.35,
                    size: theme.label_font_size,
                    color: theme.text_color,
                    content,
                });
            }
        }

        self.panels.push(PanelFrame {
            row,
            col,
            title: panel.title.map(str::to_string),
            plot_area: area,
        });
    }

    /// Serializes the canvas and writes it to `path`, consuming the canvas.
    pub fn save(self, path: &Path, format: OutputFormat, theme: &Theme) -> Result<()> {
        let bytes = match format {
            OutputFormat::Pdf => render_pdf(&self),
            OutputFormat::Svg => render_svg(&self, theme).into_bytes(),
            OutputFormat::Png => render_png(&render_svg(&self, theme))?,
        };
        write_atomic(path, &bytes)
    }
}

/// Shrinks `size` until `text` fits in `max_width`, measured in the theme font.
fn fit_font_size(text: &str, size: f32, max_width: f32, font_family: &str) -> f32 {
    let width = text_width(text, size, font_family);
    if width > max_width && width > 0.0 {
        size * max_width / width
    } else {
        size
    }
}

/// Maps layout coordinates (y up) into `area` (y down), stretching each axis
/// independently and keeping `margin` points clear on every side.
fn project(layout: &Layout, area: Rect, margin: f32) -> Vec<(f32, f32)> {
    let bounds = layout.bounds();
    let inner_w = (area.width - 2.0 * margin).max(0.0);
    let inner_h = (area.height - 2.0 * margin).max(0.0);
    let center_x = area.x + area.width / 2.0;
    let center_y = area.y + area.height / 2.0;
    let mid_x = (bounds.min_x + bounds.max_x) / 2.0;
    let mid_y = (bounds.min_y + bounds.max_y) / 2.0;
    let scale_x = if bounds.width() > 0.0 {
        inner_w / bounds.width()
    } else {
        0.0
    };
    let scale_y = if bounds.height() > 0.0 {
        inner_h / bounds.height()
    } else {
        0.0
    };
    layout
        .positions
        .iter()
        .map(|(x, y)| {
            (
                center_x + (x - mid_x) * scale_x,
                center_y - (y - mid_y) * scale_y,
            )
        })
        .collect()
}

pub fn render_svg(canvas: &Canvas, theme: &Theme) -> String {
    let mut svg = String::new();
    let width = canvas.width;
    let height = canvas.height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}pt\" height=\"{height}pt\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!("<title>{}</title>", escape_xml(&canvas.title)));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        canvas.background.to_hex()
    ));

    for primitive in &canvas.primitives {
        match primitive {
            Primitive::Line {
                from,
                to,
                width,
                color,
            } => svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\"/>",
                from.0,
                from.1,
                to.0,
                to.1,
                color.to_hex(),
                width
            )),
            Primitive::Circle {
                center,
                radius,
                fill,
            } => svg.push_str(&format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"/>",
                center.0,
                center.1,
                radius,
                fill.to_hex()
            )),
            Primitive::Text {
                x,
                y,
                size,
                color,
                content,
            } => svg.push_str(&format!(
                "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
                escape_xml(&theme.font_family),
                size,
                color.to_hex(),
                escape_xml(content)
            )),
        }
    }

    svg.push_str("</svg>");
    svg
}

pub fn render_pdf(canvas: &Canvas) -> Vec<u8> {
    let height = canvas.height;
    let flip = |(x, y): (f32, f32)| (x, height - y);
    let mut page = PageContent::new();
    page.fill_rect(0.0, 0.0, canvas.width, canvas.height, canvas.background);

    for primitive in &canvas.primitives {
        match primitive {
            Primitive::Line {
                from,
                to,
                width,
                color,
            } => page.line(flip(*from), flip(*to), *width, *color),
            Primitive::Circle {
                center,
                radius,
                fill,
            } => page.circle(flip(*center), *radius, *fill),
            Primitive::Text {
                x,
                y,
                size,
                color,
                content,
            } => {
                let (left, baseline) = flip((x - helvetica_width(content, *size) / 2.0, *y));
                page.text(left, baseline, *size, *color, content);
            }
        }
    }

    write_document(canvas.width, canvas.height, &page, &canvas.title)
}

#[cfg(feature = "png")]
fn render_png(svg: &str) -> Result<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let width = (size.width() as f32 * PNG_SCALE).ceil() as u32;
    let height = (size.height() as f32 * PNG_SCALE).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate {width}x{height} pixmap"))?;

    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(PNG_SCALE, PNG_SCALE),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap.encode_png()?)
}

#[cfg(not(feature = "png"))]
fn render_png(_svg: &str) -> Result<Vec<u8>> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

/// Writes `bytes` to a temporary file next to `path` and renames it into
/// place once complete, so `path` never holds a partial figure.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".netplots-")
        .tempfile_in(dir)
        .with_context(|| format!("cannot create temporary file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .with_context(|| format!("cannot write {}", path.display()))?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("cannot move figure into {}", path.display()))?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
