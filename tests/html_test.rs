//! Integration tests for HTML rendering.

use std::sync::Arc;
use std::thread;

use undelta::{to_html, AttributeOptions, DeltaRenderer, Format, ListOptions, Undelta};

#[test]
fn test_paragraphs() {
    let delta = r#"{"ops":[{"insert":"Lorem ipsum dolor sit amet.\nSecond line.\n"}]}"#;
    assert_eq!(
        to_html(delta).unwrap(),
        "<p>Lorem ipsum dolor sit amet.</p>\n<p>Second line.</p>\n"
    );
}

#[test]
fn test_empty_line() {
    let delta = r#"{"ops":[{"insert":"a\n\nb\n"}]}"#;
    assert_eq!(to_html(delta).unwrap(), "<p>a</p>\n<p><br></p>\n<p>b</p>\n");
}

#[test]
fn test_custom_block_element() {
    let delta = r#"{"ops":[{"insert":"Text\n"}]}"#;
    let html = Undelta::html().with_block_element("div").render(delta).unwrap();
    assert_eq!(html, "<div>Text</div>\n");
}

#[test]
fn test_block_element_must_be_tag_name() {
    let delta = r#"{"ops":[{"insert":"Text\n"}]}"#;
    let html = Undelta::html()
        .with_block_element("div class=x")
        .render(delta)
        .unwrap();
    assert_eq!(html, "<p>Text</p>\n");
}

#[test]
fn test_inline_attributes() {
    let delta = r#"{"ops":[{"insert":"A "},{"attributes":{"bold":true},"insert":"bold"},{"insert":", "},{"attributes":{"italic":true},"insert":"italic"},{"insert":", "},{"attributes":{"underline":true},"insert":"under"},{"insert":", "},{"attributes":{"strike":true},"insert":"struck"},{"insert":" and H"},{"attributes":{"script":"sub"},"insert":"2"},{"insert":"O\n"}]}"#;
    assert_eq!(
        to_html(delta).unwrap(),
        "<p>A <strong>bold</strong>, <em>italic</em>, <u>under</u>, <s>struck</s> and H<sub>2</sub>O</p>\n"
    );
}

#[test]
fn test_header() {
    let delta = r#"{"ops":[{"insert":"Heading 1"},{"attributes":{"header":1},"insert":"\n"},{"insert":"Body\n"}]}"#;
    assert_eq!(to_html(delta).unwrap(), "<h1>Heading 1</h1>\n<p>Body</p>\n");
}

#[test]
fn test_invalid_header_renders_paragraph() {
    for level in ["0", "8", "\"3\"", "true"] {
        let delta = format!(
            r#"{{"ops":[{{"insert":"Heading"}},{{"attributes":{{"header":{}}},"insert":"\n"}}]}}"#,
            level
        );
        assert_eq!(to_html(&delta).unwrap(), "<p>Heading</p>\n", "level {}", level);
    }
}

#[test]
fn test_ordered_list() {
    let delta = r#"{"ops":[{"insert":"Item 1"},{"attributes":{"list":"ordered"},"insert":"\n"},{"insert":"Item 2"},{"attributes":{"list":"ordered"},"insert":"\n"}]}"#;
    assert_eq!(
        to_html(delta).unwrap(),
        "<ol>\n<li>Item 1</li>\n<li>Item 2</li>\n</ol>\n"
    );
}

#[test]
fn test_mixed_list_styles_use_separate_wrappers() {
    let delta = r#"{"ops":[{"insert":"One"},{"attributes":{"list":"ordered"},"insert":"\n"},{"insert":"Two"},{"attributes":{"list":"ordered"},"insert":"\n"},{"insert":"Dot"},{"attributes":{"list":"bullet"},"insert":"\n"}]}"#;
    let html = to_html(delta).unwrap();
    assert_eq!(
        html,
        "<ol>\n<li>One</li>\n<li>Two</li>\n</ol>\n<ul>\n<li>Dot</li>\n</ul>\n"
    );
}

#[test]
fn test_list_between_paragraphs() {
    let delta = r#"{"ops":[{"insert":"Intro\nA"},{"attributes":{"list":"bullet"},"insert":"\n"},{"insert":"Outro\n"}]}"#;
    assert_eq!(
        to_html(delta).unwrap(),
        "<p>Intro</p>\n<ul>\n<li>A</li>\n</ul>\n<p>Outro</p>\n"
    );
}

#[test]
fn test_disabled_list_value_renders_paragraph() {
    let attributes = AttributeOptions::all().with_list(ListOptions {
        ordered: true,
        bullet: false,
    });
    let delta = r#"{"ops":[{"insert":"A"},{"attributes":{"list":"bullet"},"insert":"\n"}]}"#;
    let html = Undelta::html().with_attributes(attributes).render(delta).unwrap();
    assert_eq!(html, "<p>A</p>\n");
}

#[test]
fn test_link_escaped() {
    let delta = r#"{"ops":[{"attributes":{"link":"https://example.com/?q=\"x\""},"insert":"<link>"},{"insert":"\n"}]}"#;
    assert_eq!(
        to_html(delta).unwrap(),
        "<p><a href=\"https://example.com/?q=&quot;x&quot;\">&lt;link&gt;</a></p>\n"
    );
}

#[test]
fn test_unknown_attributes_ignored() {
    let delta = r##"{"ops":[{"attributes":{"color":"#f00","font":"serif","bold":"yes"},"insert":"Text"},{"insert":"\n"}]}"##;
    assert_eq!(to_html(delta).unwrap(), "<p>Text</p>\n");
}

#[test]
fn test_embeds_skipped() {
    let delta = r#"{"ops":[{"insert":"Before "},{"insert":{"image":"https://example.com/a.png"}},{"insert":"after\n"}]}"#;
    assert_eq!(to_html(delta).unwrap(), "<p>Before after</p>\n");
}

#[test]
fn test_concurrent_renders_share_renderer() {
    let renderer = Arc::new(DeltaRenderer::new(Format::Html));
    let delta = r#"{"ops":[{"insert":"X"},{"attributes":{"list":"bullet"},"insert":"\n"}]}"#;

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let renderer = Arc::clone(&renderer);
            thread::spawn(move || renderer.render(delta).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "<ul>\n<li>X</li>\n</ul>\n");
    }
}

#[test]
fn test_textless_ops_render_blank_line() {
    assert_eq!(to_html(r#"{"ops":[{"insert":""}]}"#).unwrap(), "<p><br></p>\n");
    assert_eq!(
        to_html(r#"{"ops":[{"insert":{"image":"a.png"}}]}"#).unwrap(),
        "<p><br></p>\n"
    );
}
