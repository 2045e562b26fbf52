use serde::{Deserialize, Serialize};

/// Fixed measures driving the layout, as one immutable bundle passed
/// explicitly to the layout engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    /// Trailing gap included in every token width.
    pub space_len: f64,
    /// Reference word length the character width is normalized against.
    pub default_word_len: f64,
    /// Width contribution of one character column.
    pub char_len: f64,
    /// Pixel width of a token of reference length.
    pub base_token_width: f64,
    /// Font size of the surface form.
    pub normal_text_size: f64,
    /// Font size of lemma and ID.
    pub small_text_size: f64,
    /// Font size of POS tags and relation labels.
    pub tiny_text_size: f64,
    /// Baseline the arcs rise from.
    pub arc_base_y: f64,
    /// Canvas height reserved for the token text block.
    pub base_height: f64,
    /// Extra canvas height per unit of arc nesting depth.
    pub depth_step: f64,
    /// Horizontal pull-in of the arc chord, divided by the span.
    pub arc_chord_inset: f64,
    /// Vertical rise per unit of arc height.
    pub arc_depth_rise: f64,
    /// Approximate label character width used to center relation labels.
    pub label_char_width: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            space_len: 15.0,
            default_word_len: 20.0,
            char_len: 1.8,
            base_token_width: 100.0,
            normal_text_size: 16.0,
            small_text_size: 12.0,
            tiny_text_size: 10.0,
            arc_base_y: 50.0,
            base_height: 55.0,
            depth_step: 40.0,
            arc_chord_inset: 300.0,
            arc_depth_rise: 50.0,
            label_char_width: 4.5,
        }
    }
}
