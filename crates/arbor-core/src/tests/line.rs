use crate::*;

const DOGS: &str = "1\tDogs\tdog\tNOUN\t_\t_\t2\tnsubj\t_\t_";

#[test]
fn parse_wordline_with_ten_fields() {
    let word = WordLine::parse(DOGS).unwrap();
    assert_eq!(word.id, "1");
    assert_eq!(word.form, "Dogs");
    assert_eq!(word.lemma, "dog");
    assert_eq!(word.upos, "NOUN");
    assert_eq!(word.xpos, "_");
    assert_eq!(word.head, "2");
    assert_eq!(word.deprel, "nsubj");
}

#[test]
fn parse_wordline_trims_surrounding_whitespace() {
    let word = WordLine::parse("  1\tDogs\tdog\tNOUN\t_\t_\t2\tnsubj\t_\t_\n").unwrap();
    assert_eq!(word.id, "1");
    assert_eq!(word.misc, "_");
}

#[test]
fn parse_wordline_rejects_wrong_field_count() {
    assert_eq!(WordLine::parse("1\tDogs\tdog"), None);
    assert_eq!(WordLine::parse(&format!("{DOGS}\textra")), None);
}

#[test]
fn parse_wordline_rejects_non_digit_id() {
    assert_eq!(
        WordLine::parse("x\tDogs\tdog\tNOUN\t_\t_\t2\tnsubj\t_\t_"),
        None
    );
}

#[test]
fn parse_wordline_rejects_blank_and_comment_lines() {
    assert_eq!(WordLine::parse(""), None);
    assert_eq!(WordLine::parse("# text = Dogs bark."), None);
}

#[test]
fn wordline_roundtrips_to_tsv() {
    let word = WordLine::parse(DOGS).unwrap();
    assert_eq!(word.to_tsv(), DOGS);
}

#[test]
fn plain_id_detection() {
    let mut word = WordLine::parse(DOGS).unwrap();
    assert!(word.has_plain_id());
    word.id = "7.1".to_string();
    assert!(!word.has_plain_id());
    word.id = "3-4".to_string();
    assert!(!word.has_plain_id());
}

#[test]
fn feats_parse_in_order() {
    let mut word = WordLine::parse(DOGS).unwrap();
    word.feats = "Number=Plur|Case=Nom".to_string();
    let feats = word.feats();
    let pairs: Vec<(&str, &str)> = feats
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(pairs, vec![("Number", "Plur"), ("Case", "Nom")]);
}

#[test]
fn feats_placeholder_yields_empty_map() {
    let word = WordLine::parse(DOGS).unwrap();
    assert!(word.feats().is_empty());
}

#[test]
fn parse_metaline_splits_at_first_equals() {
    let meta = MetaLine::parse("# text = Dogs bark. x = y").unwrap();
    assert_eq!(meta.key, "text");
    assert_eq!(meta.val, "Dogs bark. x = y");
}

#[test]
fn parse_metaline_requires_hash_and_equals() {
    assert_eq!(MetaLine::parse("text = Dogs bark."), None);
    assert_eq!(MetaLine::parse("# newpar"), None);
}

#[test]
fn classify_prefers_word_over_meta() {
    assert!(matches!(classify_line(DOGS), Some(Line::Word(_))));
    assert!(matches!(
        classify_line("# sent_id = 1"),
        Some(Line::Meta(_))
    ));
    assert_eq!(classify_line("garbage line"), None);
}
