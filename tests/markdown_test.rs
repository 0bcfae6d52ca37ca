//! Integration tests for Markdown rendering.

use undelta::{to_markdown, AttributeOptions, Error, Format, Undelta};

const ORDERED: &str = r#"{"ops":[{"insert":"Item 1"},{"attributes":{"list":"ordered"},"insert":"\n"},{"insert":"Item 2"},{"attributes":{"list":"ordered"},"insert":"\n"},{"insert":"Item 3"},{"attributes":{"list":"ordered"},"insert":"\n"}]}"#;

const BULLET: &str = r#"{"ops":[{"insert":"Item 1"},{"attributes":{"list":"bullet"},"insert":"\n"},{"insert":"Item 2"},{"attributes":{"list":"bullet"},"insert":"\n"},{"insert":"Item 3"},{"attributes":{"list":"bullet"},"insert":"\n"}]}"#;

fn header(level: i64) -> String {
    format!(
        r#"{{"ops":[{{"insert":"Heading"}},{{"attributes":{{"header":{}}},"insert":"\n"}}]}}"#,
        level
    )
}

#[test]
fn test_list_ordered() {
    assert_eq!(to_markdown(ORDERED).unwrap(), "1. Item 1\n2. Item 2\n3. Item 3\n");
}

#[test]
fn test_list_bullet() {
    assert_eq!(to_markdown(BULLET).unwrap(), "* Item 1\n* Item 2\n* Item 3\n");
}

#[test]
fn test_list_bullet_custom_marker() {
    let md = Undelta::markdown().with_list_marker('-').render(BULLET).unwrap();
    assert_eq!(md, "- Item 1\n- Item 2\n- Item 3\n");
}

#[test]
fn test_ordered_numbering_restarts_after_paragraph() {
    let delta = r#"{"ops":[{"insert":"A"},{"attributes":{"list":"ordered"},"insert":"\n"},{"insert":"B"},{"attributes":{"list":"ordered"},"insert":"\n"},{"insert":"Break\n"},{"insert":"C"},{"attributes":{"list":"ordered"},"insert":"\n"}]}"#;
    assert_eq!(to_markdown(delta).unwrap(), "1. A\n2. B\nBreak\n1. C\n");
}

#[test]
fn test_headers() {
    for level in 1..=6 {
        let expected = format!("{} Heading\n", "#".repeat(level as usize));
        assert_eq!(to_markdown(&header(level)).unwrap(), expected);
    }
}

#[test]
fn test_header_out_of_range_is_paragraph() {
    assert_eq!(to_markdown(&header(0)).unwrap(), "Heading\n");
    assert_eq!(to_markdown(&header(8)).unwrap(), "Heading\n");
}

#[test]
fn test_header_level_seven_clamped() {
    assert_eq!(to_markdown(&header(7)).unwrap(), "###### Heading\n");
}

#[test]
fn test_inline_formatting() {
    let delta = r#"{"ops":[{"insert":"Lorem "},{"attributes":{"bold":true},"insert":"ipsum"},{"insert":" dolor "},{"attributes":{"italic":true},"insert":"sit"},{"insert":" "},{"attributes":{"strike":true},"insert":"amet"},{"insert":"\n"}]}"#;
    assert_eq!(
        to_markdown(delta).unwrap(),
        "Lorem **ipsum** dolor *sit* ~~amet~~\n"
    );
}

#[test]
fn test_link() {
    let delta = r#"{"ops":[{"insert":"Visit "},{"attributes":{"link":"https://quilljs.com"},"insert":"Quill"},{"insert":"\n"}]}"#;
    assert_eq!(
        to_markdown(delta).unwrap(),
        "Visit [Quill](https://quilljs.com)\n"
    );
}

#[test]
fn test_underline_and_script_render_plain() {
    let delta = r#"{"ops":[{"attributes":{"underline":true},"insert":"under"},{"insert":" x"},{"attributes":{"script":"super"},"insert":"2"},{"insert":"\n"}]}"#;
    assert_eq!(to_markdown(delta).unwrap(), "under x2\n");
}

#[test]
fn test_partial_attribute_options_keep_markdown_defaults() {
    let attributes =
        AttributeOptions::from_json_for(Format::Markdown, r#"{"bold": false}"#).unwrap();
    let delta = r#"{"ops":[{"attributes":{"underline":true},"insert":"u"},{"attributes":{"script":"super"},"insert":"2"},{"insert":"\n"}]}"#;
    let md = Undelta::markdown().with_attributes(attributes).render(delta).unwrap();
    assert_eq!(md, "u2\n");
}

#[test]
fn test_header_with_inline_formatting() {
    let delta = r#"{"ops":[{"insert":"Big "},{"attributes":{"bold":true},"insert":"news"},{"attributes":{"header":2},"insert":"\n"}]}"#;
    assert_eq!(to_markdown(delta).unwrap(), "## Big **news**\n");
}

#[test]
fn test_special_characters_escaped() {
    let delta = r#"{"ops":[{"insert":"a_b *c*\n"}]}"#;
    assert_eq!(to_markdown(delta).unwrap(), "a\\_b \\*c\\*\n");

    let raw = Undelta::markdown().with_escaping(false).render(delta).unwrap();
    assert_eq!(raw, "a_b *c*\n");
}

#[test]
fn test_line_start_syntax_escaped_in_paragraphs() {
    let delta = r##"{"ops":[{"insert":"# not a header\n1. not a list\n- nor this\n"}]}"##;
    assert_eq!(
        to_markdown(delta).unwrap(),
        "\\# not a header\n1\\. not a list\n\\- nor this\n"
    );
}

#[test]
fn test_style_whitespace_outside_markers() {
    let delta = r#"{"ops":[{"insert":"x "},{"attributes":{"bold":true},"insert":"bold "},{"insert":"y\n"}]}"#;
    assert_eq!(to_markdown(delta).unwrap(), "x **bold** y\n");
}

#[test]
fn test_idempotent() {
    let renderer = Undelta::new(Format::Markdown).build();
    let first = renderer.render(ORDERED).unwrap();
    let second = renderer.render(ORDERED).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_textless_ops_render_blank_line() {
    assert_eq!(to_markdown(r#"{"ops":[{"insert":""}]}"#).unwrap(), "\n");
    assert_eq!(
        to_markdown(r#"{"ops":[{"insert":{"image":"a.png"}}]}"#).unwrap(),
        "\n"
    );
}

#[test]
fn test_empty_document() {
    assert!(matches!(to_markdown(r#"{"ops":[]}"#), Err(Error::EmptyDocument)));
    assert!(matches!(to_markdown("{"), Err(Error::InvalidJson(_))));
}
