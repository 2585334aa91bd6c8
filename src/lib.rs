#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod figure;
pub mod generator;
pub mod generators;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod logging;
pub mod pdf;
pub mod render;
pub mod text_metrics;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, OutputConfig, load_config};
pub use figure::{FigureSpec, PanelSpec, catalog};
pub use generator::{RenderedFigure, run_all, run_with_dump};
pub use generators::{Archetype, GenerateError};
pub use ir::Graph;
pub use layout::{Layout, LayoutKind, compute_layout};
pub use render::{Canvas, OutputFormat, render_pdf, render_svg};
pub use theme::{Color, Theme};
