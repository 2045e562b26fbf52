#![forbid(unsafe_code)]

//! Headless layout + SVG renderer for CoNLL-U dependency trees.
//!
//! The pipeline is `Stanza` → [`layout::layout_stanza`] → geometry model →
//! [`svg::render_stanza_svg`] → one `<svg>` per sentence, assembled into an
//! HTML page by [`html::document_to_html`]. All stages are pure; a stanza
//! that cannot be laid out (no unique root) fails on its own without
//! affecting siblings.

pub mod html;
pub mod layout;
pub mod metrics;
pub mod model;
pub mod svg;

pub use arbor_core::{Field, FieldSelection};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Stanza(#[from] arbor_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Display options consumed by layout and rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Token/relation attributes to draw.
    pub fields: FieldSelection,
    /// Metadata keys surfaced as headings above each diagram, in request
    /// order.
    pub metadata_keys: Vec<String>,
    /// Stroke/fill/text color applied to every element.
    pub color: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fields: FieldSelection::default(),
            metadata_keys: Vec::new(),
            color: "black".to_string(),
        }
    }
}
