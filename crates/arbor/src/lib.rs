#![forbid(unsafe_code)]

//! `arbor` is a headless CoNLL-U dependency-tree visualizer in Rust.
//!
//! The core crate parses CoNLL-U text into stanza models and dependency
//! trees; with the `render` feature enabled, `arbor::render` lays every
//! sentence out as nested labeled arcs and renders SVG diagrams embedded in
//! an HTML page.
//!
//! # Features
//!
//! - `render`: enable arc layout + SVG/HTML rendering (`arbor::render`)

pub use arbor_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use arbor_render::html::{INVALID_TREE_NOTICE, document_to_html};
    pub use arbor_render::layout::{ArcStack, Spacing, layout_stanza, token_width};
    pub use arbor_render::metrics::Metrics;
    pub use arbor_render::model::StanzaLayout;
    pub use arbor_render::svg::render_stanza_svg;
    pub use arbor_render::{Error as RenderError, RenderOptions, Result};

    /// Converts a whole CoNLL-U document into one HTML page of dependency
    /// diagrams using the default measures.
    ///
    /// Invalid stanzas are replaced by a textual notice in place; this
    /// function itself never fails.
    pub fn conllu_to_html(input: &str, options: &RenderOptions) -> String {
        document_to_html(input, options, &Metrics::default())
    }

    /// Lays out and renders one stanza block as a standalone `<svg>`.
    pub fn stanza_to_svg(
        block: &str,
        options: &RenderOptions,
        metrics: &Metrics,
    ) -> Result<String> {
        let stanza = arbor_core::Stanza::parse(block);
        let layout = layout_stanza(&stanza, &options.fields, metrics)?;
        Ok(render_stanza_svg(&layout, options, metrics))
    }

    /// Parses and lays out every stanza of a document, in input order.
    ///
    /// Each entry is the stanza's geometry or the per-stanza error that made
    /// it unvisualizable; one bad stanza never affects its siblings.
    pub fn layout_document(
        input: &str,
        options: &RenderOptions,
        metrics: &Metrics,
    ) -> Vec<Result<StanzaLayout>> {
        arbor_core::split_stanzas(input)
            .into_iter()
            .map(|block| {
                let stanza = arbor_core::Stanza::parse(block);
                layout_stanza(&stanza, &options.fields, metrics)
            })
            .collect()
    }
}
