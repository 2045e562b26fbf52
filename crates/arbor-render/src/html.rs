use crate::RenderOptions;
use crate::layout::layout_stanza;
use crate::metrics::Metrics;
use crate::svg::{escape_xml, render_stanza_svg};
use arbor_core::{Stanza, split_stanzas};
use std::fmt::Write as _;

/// Shown in place of the diagram for a stanza without a valid single-root
/// tree.
pub const INVALID_TREE_NOTICE: &str = "This tree cannot be visualized; check the format!";

fn render_timing_enabled() -> bool {
    static ENABLED: std::sync::OnceLock<bool> = std::sync::OnceLock::new();
    *ENABLED.get_or_init(|| {
        matches!(
            std::env::var("ARBOR_RENDER_TIMING").as_deref(),
            Ok("1") | Ok("true")
        )
    })
}

/// Converts a whole CoNLL-U document into one HTML page of dependency
/// diagrams.
///
/// Stanzas are processed independently and emitted in input order. Each
/// diagram is preceded by headings for the requested metadata keys present
/// in that stanza; a stanza that cannot be laid out contributes the
/// [`INVALID_TREE_NOTICE`] instead of an `<svg>`, without affecting
/// siblings.
pub fn document_to_html(input: &str, options: &RenderOptions, metrics: &Metrics) -> String {
    let timing_enabled = render_timing_enabled();
    let total_start = timing_enabled.then(std::time::Instant::now);

    let blocks = split_stanzas(input);
    let mut failed = 0usize;

    let mut out = String::new();
    out.push_str("<html>\n<body>\n");
    for block in &blocks {
        let stanza = Stanza::parse(block);
        for key in &options.metadata_keys {
            if let Some(val) = stanza.meta(key) {
                let _ = writeln!(
                    &mut out,
                    "<h4><b>{}</b>: {}</h4>",
                    escape_xml(key),
                    escape_xml(val)
                );
            }
        }
        out.push_str("<div>\n");
        match layout_stanza(&stanza, &options.fields, metrics) {
            Ok(layout) => {
                out.push_str(&render_stanza_svg(&layout, options, metrics));
                out.push('\n');
            }
            Err(_) => {
                failed += 1;
                out.push_str(INVALID_TREE_NOTICE);
                out.push('\n');
            }
        }
        out.push_str("</div>\n");
    }
    out.push_str("</body>\n</html>\n");

    if let Some(start) = total_start {
        eprintln!(
            "[render-timing] stanzas={} failed={} total={:?} input_bytes={} output_bytes={}",
            blocks.len(),
            failed,
            start.elapsed(),
            input.len(),
            out.len(),
        );
    }

    out
}
