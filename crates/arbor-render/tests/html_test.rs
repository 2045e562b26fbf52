use arbor_render::html::{INVALID_TREE_NOTICE, document_to_html};
use arbor_render::metrics::Metrics;
use arbor_render::RenderOptions;
use std::path::PathBuf;

const DOGS_BARK: &str = "1\tDogs\tdog\tNOUN\t_\t_\t2\tnsubj\t_\t_\n2\tbark\tbark\tVERB\t_\t_\t0\troot\t_\t_";

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn to_html(input: &str, options: &RenderOptions) -> String {
    document_to_html(input, options, &Metrics::default())
}

#[test]
fn single_stanza_renders_one_diagram() {
    let html = to_html(DOGS_BARK, &RenderOptions::default());
    assert!(html.starts_with("<html>\n<body>\n"));
    assert!(html.trim_end().ends_with("</body>\n</html>"));
    assert_eq!(html.matches("<svg").count(), 1);
    assert_eq!(html.matches("<div>").count(), 1);
    assert!(!html.contains(INVALID_TREE_NOTICE));
}

#[test]
fn invalid_stanza_gets_notice_without_affecting_siblings() {
    let double_root = "1\tFoo\tfoo\tNOUN\t_\t_\t0\troot\t_\t_\n\
                       2\tbar\tbar\tVERB\t_\t_\t0\troot\t_\t_";
    let input = format!("{double_root}\n\n{DOGS_BARK}");
    let html = to_html(&input, &RenderOptions::default());

    assert_eq!(html.matches(INVALID_TREE_NOTICE).count(), 1);
    assert_eq!(html.matches("<svg").count(), 1);
    // The notice comes first, the healthy diagram second.
    let notice_at = html.find(INVALID_TREE_NOTICE).unwrap();
    let svg_at = html.find("<svg").unwrap();
    assert!(notice_at < svg_at);
}

#[test]
fn requested_metadata_keys_surface_as_headings() {
    let input = format!("# text = Dogs bark.\n# sent_id = s1\n{DOGS_BARK}");
    let options = RenderOptions {
        metadata_keys: vec!["text".to_string()],
        ..RenderOptions::default()
    };
    let html = to_html(&input, &options);
    assert!(html.contains("<h4><b>text</b>: Dogs bark.</h4>"));
    // sent_id was not requested.
    assert!(!html.contains("sent_id"));
}

#[test]
fn unrequested_metadata_is_omitted_by_default() {
    let input = format!("# text = Dogs bark.\n{DOGS_BARK}");
    let html = to_html(&input, &RenderOptions::default());
    assert!(!html.contains("<h4>"));
}

#[test]
fn missing_metadata_key_yields_no_heading() {
    let options = RenderOptions {
        metadata_keys: vec!["text".to_string()],
        ..RenderOptions::default()
    };
    let html = to_html(DOGS_BARK, &options);
    assert!(!html.contains("<h4>"));
}

#[test]
fn metadata_headings_precede_their_diagram() {
    let input = format!("# text = Dogs bark.\n{DOGS_BARK}");
    let options = RenderOptions {
        metadata_keys: vec!["text".to_string()],
        ..RenderOptions::default()
    };
    let html = to_html(&input, &options);
    let heading_at = html.find("<h4>").unwrap();
    let div_at = html.find("<div>").unwrap();
    assert!(heading_at < div_at);
}

#[test]
fn stanzas_render_in_input_order() {
    let second = "1\tBirds\tbird\tNOUN\t_\t_\t2\tnsubj\t_\t_\n2\tsing\tsing\tVERB\t_\t_\t0\troot\t_\t_";
    let input = format!("{DOGS_BARK}\n\n{second}");
    let html = to_html(&input, &RenderOptions::default());
    assert_eq!(html.matches("<svg").count(), 2);
    assert!(html.find(">Dogs</text>").unwrap() < html.find(">Birds</text>").unwrap());
}

#[test]
fn fixture_document_renders_every_sentence() {
    let path = workspace_root().join("fixtures").join("basic.conllu");
    let text = std::fs::read_to_string(&path).expect("fixture");
    let options = RenderOptions {
        metadata_keys: vec!["sent_id".to_string()],
        ..RenderOptions::default()
    };
    let html = to_html(&text, &options);
    assert_eq!(html.matches("<svg").count(), 2);
    assert!(html.contains("<h4><b>sent_id</b>: en-ud-1</h4>"));
    assert!(html.contains("<h4><b>sent_id</b>: en-ud-2</h4>"));
    assert!(!html.contains(INVALID_TREE_NOTICE));
}

#[test]
fn metadata_values_are_html_escaped() {
    let input = format!("# text = a < b & c\n{DOGS_BARK}");
    let options = RenderOptions {
        metadata_keys: vec!["text".to_string()],
        ..RenderOptions::default()
    };
    let html = to_html(&input, &options);
    assert!(html.contains("<h4><b>text</b>: a &lt; b &amp; c</h4>"));
}
