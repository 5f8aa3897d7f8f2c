//! End-to-end emission tests: trees built the way a round-trip parser (or
//! a mutating caller) would build them, checked against exact output text.

use pretty_assertions::assert_eq;
use yamlkeep_engine::{
    Alias, CollectionStyle, Document, EmitError, Mapping, Node, Scalar, ScalarStyle, Sequence,
    Stream, emit_yaml,
};

fn block_seq(children: Vec<Node>) -> Sequence {
    Sequence::new(CollectionStyle::Block, children)
}

fn block_map(entries: Vec<(Node, Node)>) -> Mapping {
    Mapping::new(CollectionStyle::Block, entries)
}

fn flow_map(entries: Vec<(Node, Node)>) -> Mapping {
    Mapping::new(CollectionStyle::Flow, entries)
}

#[test]
fn mapping_value_inline_comment() {
    let mut value = Scalar::plain("baz");
    value.comments.inline = Some("# foo".to_string());
    let tree = Node::from(block_map(vec![(
        Scalar::plain("bar").into(),
        value.into(),
    )]));

    assert_eq!(emit_yaml(&tree).unwrap(), "bar: baz # foo\n");
}

#[test]
fn single_element_block_sequence() {
    let tree = Node::from(block_seq(vec![Scalar::plain("1").into()]));
    assert_eq!(emit_yaml(&tree).unwrap(), "- 1\n");
}

#[test]
fn flow_mapping_with_container_inline_comment() {
    let mut map = flow_map(vec![(
        Scalar::plain("foo").into(),
        Scalar::plain("bar").into(),
    )]);
    map.comments.inline = Some("# map with one key-value pair".to_string());

    assert_eq!(
        emit_yaml(&map.into()).unwrap(),
        "{ foo: bar } # map with one key-value pair"
    );
}

#[test]
fn tag_directive_compacts_tag_to_shorthand() {
    let mut root = Scalar::plain("foo");
    root.tag = Some("tag:yaml.org,2002:str".to_string());
    let mut doc = Document::new(root.into());
    doc.tag_directives = vec![("!!".to_string(), "tag:yaml.org,2002:".to_string())];
    doc.implicit = false;

    assert_eq!(
        emit_yaml(&doc.into()).unwrap(),
        "%TAG !! tag:yaml.org,2002:\n--- !!str foo\n"
    );
}

#[test]
fn double_quoted_scalar_folds_embedded_newline() {
    let scalar = Scalar::new("line one\nline two", ScalarStyle::DoubleQuoted);
    assert_eq!(emit_yaml(&scalar.into()).unwrap(), "\"line one line two\"");
}

#[test]
fn single_quoted_scalar_folds_embedded_newline() {
    let scalar = Scalar::new("a\nb", ScalarStyle::SingleQuoted);
    assert_eq!(emit_yaml(&scalar.into()).unwrap(), "'a b'");
}

#[test]
fn serialization_is_idempotent() {
    let mut key = Scalar::plain("key");
    key.comments.inline = Some("# key comment".to_string());
    let mut item = Scalar::plain("item");
    item.comments.leading.push("# leading".to_string());
    let value = block_seq(vec![item.into()]);
    let tree = Node::from(block_map(vec![(key.into(), value.into())]));

    let first = emit_yaml(&tree).unwrap();
    let second = emit_yaml(&tree).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_collections_collapse_regardless_of_declared_style() {
    assert_eq!(emit_yaml(&block_seq(vec![]).into()).unwrap(), "[]");
    assert_eq!(emit_yaml(&block_map(vec![]).into()).unwrap(), "{}");
}

#[test]
fn sequence_child_leading_comments_print_once_before_the_bullet() {
    let mut child = Scalar::plain("1");
    child.comments.leading.push("# first".to_string());
    child.comments.leading.push("# second".to_string());
    let tree = Node::from(block_seq(vec![child.into(), Scalar::plain("2").into()]));

    let out = emit_yaml(&tree).unwrap();
    assert_eq!(out, "# first\n# second\n- 1\n- 2\n");
    assert_eq!(out.matches("# first").count(), 1);
}

#[test]
fn key_inline_comment_sits_after_the_colon() {
    let mut key = Scalar::plain("foo");
    key.comments.inline = Some("# note".to_string());
    let tree = Node::from(block_map(vec![(key.into(), Scalar::plain("value").into())]));

    assert_eq!(emit_yaml(&tree).unwrap(), "foo: # note\n  value\n");
}

#[test]
fn key_inline_comment_with_sequence_value_keeps_bullets_at_key_depth() {
    let mut key = Scalar::plain("bar");
    key.comments.inline = Some("# bar".to_string());
    let value = block_seq(vec![Scalar::plain("bar").into()]);
    let tree = Node::from(block_map(vec![(key.into(), value.into())]));

    assert_eq!(emit_yaml(&tree).unwrap(), "bar: # bar\n- bar\n");
}

#[test]
fn nested_block_mappings_round_trip_with_increasing_indent() {
    let innermost = block_map(vec![(
        Scalar::plain("c").into(),
        Scalar::plain("3").into(),
    )]);
    let middle = block_map(vec![(Scalar::plain("b").into(), innermost.into())]);
    let tree = Node::from(block_map(vec![(Scalar::plain("a").into(), middle.into())]));

    assert_eq!(emit_yaml(&tree).unwrap(), "a:\n  b:\n    c: 3\n");
}

#[test]
fn value_leading_comments_move_below_the_key() {
    let mut value = Scalar::plain("v");
    value.comments.leading.push("# about v".to_string());
    let tree = Node::from(block_map(vec![(Scalar::plain("k").into(), value.into())]));

    assert_eq!(emit_yaml(&tree).unwrap(), "k:\n  # about v\n  v\n");
}

#[test]
fn flow_container_with_buried_inline_comment_is_not_collapsed() {
    let mut leaf = Scalar::plain("x");
    leaf.comments.inline = Some("# buried".to_string());
    let inner = Sequence::new(CollectionStyle::Flow, vec![leaf.into()]);
    let tree = Node::from(block_seq(vec![inner.into()]));

    // The comment forces a break inside the flow sequence, so the closing
    // delimiter lands on its own (indented) line instead of being
    // swallowed by the comment.
    assert_eq!(emit_yaml(&tree).unwrap(), "- [x # buried\n  ]\n");
}

#[test]
fn inline_leading_comment_follows_the_opening_delimiter() {
    let mut seq = Sequence::new(
        CollectionStyle::Flow,
        vec![Scalar::plain("1").into(), Scalar::plain("2").into()],
    );
    seq.inline_leading_comment = Some("# opener".to_string());

    assert_eq!(emit_yaml(&seq.into()).unwrap(), "[ # opener\n1, 2]");
}

#[test]
fn flow_mapping_opener_comment_keeps_entry_indentation() {
    let mut flow = flow_map(vec![(
        Scalar::plain("foo").into(),
        Scalar::plain("bar").into(),
    )]);
    flow.inline_leading_comment = Some("# o".to_string());
    let inner = block_map(vec![(Scalar::plain("b").into(), flow.into())]);
    let tree = Node::from(block_map(vec![(Scalar::plain("a").into(), inner.into())]));

    // The opener comment ends the brace's line, so the first entry must
    // open a fresh line indented past its parent keys, not at column 1.
    assert_eq!(
        emit_yaml(&tree).unwrap(),
        "a:\n  b:\n    { # o\n    foo: bar }\n"
    );
}

#[test]
fn trailing_comments_precede_the_closing_bracket() {
    let mut last = Scalar::plain("2");
    last.comments.trailing.push("# end of list".to_string());
    let seq = Sequence::new(
        CollectionStyle::Flow,
        vec![Scalar::plain("1").into(), last.into()],
    );

    assert_eq!(emit_yaml(&seq.into()).unwrap(), "[1, 2\n# end of list\n]");
}

#[test]
fn trailing_comments_precede_the_closing_brace() {
    let mut value = Scalar::plain("bar");
    value.comments.trailing.push("# end of map".to_string());
    let map = flow_map(vec![(Scalar::plain("foo").into(), value.into())]);

    assert_eq!(
        emit_yaml(&map.into()).unwrap(),
        "{ foo: bar\n# end of map\n}"
    );
}

#[test]
fn anchored_scalar_and_alias() {
    let mut anchored = Scalar::plain("shared");
    anchored.anchor = Some("base".to_string());
    let tree = Node::from(block_seq(vec![
        anchored.into(),
        Alias::new("base").into(),
    ]));

    assert_eq!(emit_yaml(&tree).unwrap(), "- &base shared\n- *base\n");
}

#[test]
fn literal_scalar_under_nested_keys() {
    let scalar = Scalar::new("first\nsecond\n", ScalarStyle::Literal);
    let inner = block_map(vec![(Scalar::plain("text").into(), scalar.into())]);
    let tree = Node::from(block_map(vec![(Scalar::plain("outer").into(), inner.into())]));

    assert_eq!(
        emit_yaml(&tree).unwrap(),
        "outer:\n  text: |\n    first\n    second\n"
    );
}

#[test]
fn stream_emits_documents_in_order() {
    let doc_a = Document::new(Scalar::plain("a").into());
    let mut doc_b = Document::new(Scalar::plain("b").into());
    doc_b.implicit = false;
    let tree = Node::from(Stream::new(vec![doc_a.into(), doc_b.into()]));

    assert_eq!(emit_yaml(&tree).unwrap(), "a\n--- b\n");
}

#[test]
fn explicit_end_marker() {
    let mut doc = Document::new(Scalar::plain("v").into());
    doc.implicit_end = false;

    assert_eq!(emit_yaml(&doc.into()).unwrap(), "v\n...\n");
}

#[test]
fn document_leading_comment_precedes_the_start_marker() {
    let mut doc = Document::new(Scalar::plain("v").into());
    doc.implicit = false;
    doc.comments.leading.push("# intro".to_string());

    assert_eq!(emit_yaml(&doc.into()).unwrap(), "# intro\n--- v\n");
}

#[test]
fn stream_trailing_comment_follows_the_last_document() {
    let doc = Document::new(Scalar::plain("v").into());
    let mut stream = Stream::new(vec![doc.into()]);
    stream.comments.trailing.push("# end of stream".to_string());

    assert_eq!(emit_yaml(&stream.into()).unwrap(), "v\n# end of stream\n");
}

#[test]
fn tag_directives_scope_to_their_document() {
    let mut root_a = Scalar::plain("v");
    root_a.tag = Some("tag:example.com,2024:kind".to_string());
    let mut doc_a = Document::new(root_a.into());
    doc_a.tag_directives = vec![("!e!".to_string(), "tag:example.com,2024:".to_string())];
    doc_a.implicit = false;

    let mut root_b = Scalar::plain("w");
    root_b.tag = Some("tag:example.com,2024:kind".to_string());
    let mut doc_b = Document::new(root_b.into());
    doc_b.implicit = false;

    let tree = Node::from(Stream::new(vec![doc_a.into(), doc_b.into()]));

    // The first document compacts through its directive; the second falls
    // back to the verbatim form because the directive's scope has ended.
    assert_eq!(
        emit_yaml(&tree).unwrap(),
        "%TAG !e! tag:example.com,2024:\n--- !e!kind v\n--- !<tag:example.com,2024:kind> w\n"
    );
}

#[test]
fn empty_stream_produces_no_output() {
    assert_eq!(emit_yaml(&Stream::new(vec![]).into()).unwrap(), "");
}

#[test]
fn malformed_trailing_comment_aborts_emission() {
    let mut scalar = Scalar::plain("x");
    scalar.comments.trailing.push("missing hash".to_string());

    assert_eq!(
        emit_yaml(&scalar.into()),
        Err(EmitError::MalformedComment("missing hash".to_string()))
    );
}

#[test]
fn scalar_trailing_comment_lands_on_its_own_line() {
    let mut scalar = Scalar::plain("x");
    scalar.comments.trailing.push("# after".to_string());

    assert_eq!(emit_yaml(&scalar.into()).unwrap(), "x\n# after\n");
}
