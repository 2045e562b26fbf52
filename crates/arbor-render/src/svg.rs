use crate::RenderOptions;
use crate::metrics::Metrics;
use crate::model::{Point, StanzaLayout};
use arbor_core::Field;
use std::fmt::Write as _;

/// Renders one stanza's geometry as a standalone `<svg>` element.
///
/// Field selection decides which elements are emitted: token attribute
/// lines individually, arcs and the root marker with HEAD, relation labels
/// (and the "root" label) with DEPREL. Every stroke, fill, and text uses
/// the single configured color.
pub fn render_stanza_svg(
    layout: &StanzaLayout,
    options: &RenderOptions,
    metrics: &Metrics,
) -> String {
    let fields = &options.fields;
    let color = escape_xml(&options.color);
    let tiny = fmt(metrics.tiny_text_size);
    let small = fmt(metrics.small_text_size);
    let normal = fmt(metrics.normal_text_size);
    let total_h = layout.height;

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt(layout.width),
        h = fmt(total_h)
    );
    out.push('\n');

    for token in &layout.tokens {
        let x = fmt(token.x);
        if fields.contains(Field::Upos) || fields.contains(Field::Xpos) {
            let _ = writeln!(
                &mut out,
                r#"<text x="{x}" y="{y}" font-size="{tiny}" fill="{color}">{text}</text>"#,
                y = fmt(total_h - 40.0),
                text = escape_xml(&token.pos)
            );
        }
        if fields.contains(Field::Form) {
            let _ = writeln!(
                &mut out,
                r#"<text x="{x}" y="{y}" font-size="{normal}" fill="{color}">{text}</text>"#,
                y = fmt(total_h - 25.0),
                text = escape_xml(&token.form)
            );
        }
        if fields.contains(Field::Lemma) {
            let _ = writeln!(
                &mut out,
                r#"<text x="{x}" y="{y}" font-size="{small}" font-style="italic" fill="{color}">{text}</text>"#,
                y = fmt(total_h - 13.0),
                text = escape_xml(&token.lemma)
            );
        }
        if fields.contains(Field::Id) {
            let _ = writeln!(
                &mut out,
                r#"<text x="{x}" y="{y}" font-size="{small}" font-weight="bold" fill="{color}">{text}</text>"#,
                y = fmt(total_h),
                text = escape_xml(&token.id)
            );
        }
    }

    for arc in &layout.arcs {
        if fields.contains(Field::Head) {
            let _ = writeln!(
                &mut out,
                r#"<path d="M{x1},{y1}Q{x1},{y2},{x2},{y2}L{x3},{y2}Q{x4},{y2},{x4},{y1}" stroke="{color}" fill="none"/>"#,
                x1 = fmt_path(arc.start.x),
                y1 = fmt_path(arc.start.y),
                x2 = fmt_path(arc.corner_start.x),
                y2 = fmt_path(arc.corner_start.y),
                x3 = fmt_path(arc.corner_end.x),
                x4 = fmt_path(arc.end.x)
            );
            let _ = writeln!(
                &mut out,
                r#"<polygon points="{points}" stroke="{color}" fill="{color}"/>"#,
                points = fmt_points(&arc.arrow)
            );
        }
        if fields.contains(Field::Deprel) {
            let _ = writeln!(
                &mut out,
                r#"<text x="{x}" y="{y}" font-size="{tiny}" fill="{color}">{text}</text>"#,
                x = fmt(arc.label_x),
                y = fmt(arc.label_y),
                text = escape_xml(&arc.label)
            );
        }
    }

    let root = &layout.root;
    if fields.contains(Field::Head) {
        let _ = writeln!(
            &mut out,
            r#"<line x1="{x}" y1="{y1}" x2="{x}" y2="{y2}" stroke="{color}"/>"#,
            x = fmt(root.x),
            y1 = fmt(root.y_top),
            y2 = fmt(root.y_bottom)
        );
        let _ = writeln!(
            &mut out,
            r#"<polygon points="{points}" stroke="{color}" fill="{color}"/>"#,
            points = fmt_points(&root.arrow)
        );
    }
    if fields.contains(Field::Deprel) {
        let _ = writeln!(
            &mut out,
            r#"<text x="{x}" y="{y}" font-size="{tiny}" fill="{color}">root</text>"#,
            x = fmt(root.label_x),
            y = fmt(root.label_y)
        );
    }

    out.push_str("</svg>");
    out
}

fn fmt_points(points: &[Point; 3]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(&mut out, "{},{}", fmt_path(p.x), fmt_path(p.y));
    }
    out
}

/// Stringifies a coordinate for SVG attributes: round-trippable decimal
/// form, avoiding `-0` and tiny float noise from our own calculations.
pub(crate) fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

/// Stringifies a path coordinate with at most 3 fractional digits,
/// trimming trailing zeros.
pub(crate) fn fmt_path(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    if v.abs() < 0.0005 {
        return "0".to_string();
    }

    let mut r = (v * 1000.0).round() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }

    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
