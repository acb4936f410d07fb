use crate::{
    compile_block, copy_block, escape_html, export_document, render_canvas, snippet_for,
    write_export, CompileError, ExportOptions, EMPTY_CANVAS_HINT,
};
use serde_json::{json, Value};
use zenith_evaluator::{evaluate_block, RenderOptions, Viewport};
use zenith_schema::{Align, Block, BlockType, ContentPatch, ExtraElement, FieldPath, StylePatch};

fn page() -> Vec<Block> {
    vec![
        Block::new("b1", BlockType::Header),
        Block::new("b2", BlockType::Hero),
        Block::new("b3", BlockType::Pricing),
        Block::new("b4", BlockType::Footer),
    ]
}

fn string_leaves(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(text) => out.push(text.clone()),
        Value::Array(items) => items.iter().for_each(|item| string_leaves(item, out)),
        Value::Object(fields) => fields.values().for_each(|field| string_leaves(field, out)),
        _ => {}
    }
}

#[test]
fn test_every_default_literal_appears_in_static_markup() {
    for block_type in BlockType::ALL {
        let block = Block::new("b1", block_type);
        let html = compile_block(&block);

        let mut literals = Vec::new();
        string_leaves(&Value::Object(block.content_map().unwrap()), &mut literals);
        assert!(!literals.is_empty(), "{} has no default text", block_type);

        for literal in literals {
            assert!(
                html.contains(&escape_html(&literal)),
                "{} markup is missing {:?}",
                block_type,
                literal
            );
        }
    }
}

#[test]
fn test_every_bound_field_appears_in_static_markup() {
    for block_type in BlockType::ALL {
        let block = Block::new("b1", block_type);
        let html = compile_block(&block);
        let vdom = evaluate_block(&block, &RenderOptions::static_markup()).unwrap();

        for (path, text) in vdom.bindings() {
            assert!(
                html.contains(&escape_html(&text)),
                "{} markup is missing {} ({:?})",
                block_type,
                path,
                text
            );
        }
    }
}

#[test]
fn test_plan_features_and_placeholders_are_exported() {
    let pricing = compile_block(&Block::new("b1", BlockType::Pricing));
    let contact = compile_block(&Block::new("b2", BlockType::Contact));
    let newsletter = compile_block(&Block::new("b3", BlockType::Newsletter));
    let video = compile_block(&Block::new("b4", BlockType::Video));

    assert!(contact.contains(r#"placeholder="you@example.com""#));
    assert!(newsletter.contains(r#"placeholder="Enter your email""#));
    assert!(video.contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ""#));
    for feature in ["1 Project", "Basic Analytics", "Community Support"] {
        assert!(pricing.contains(feature), "missing plan feature {}", feature);
    }
}

#[test]
fn test_known_literals() {
    assert!(compile_block(&Block::new("b", BlockType::Hero)).contains("Create with confidence."));
    assert!(compile_block(&Block::new("b", BlockType::Pricing)).contains(">Simple Pricing</h2>"));
    assert!(compile_block(&Block::new("b", BlockType::Features)).contains("Secure &amp; Reliable"));
    assert!(compile_block(&Block::new("b", BlockType::Footer)).contains("\u{a9} 2024 Zenith Builder."));
}

#[test]
fn test_pricing_edit_lands_in_second_card() {
    let mut block = Block::new("b1", BlockType::Pricing);
    let patch = FieldPath::item("plans", 1, "price")
        .to_patch(&block, "$49")
        .unwrap();
    block.apply_content_patch(&patch).unwrap();

    let html = compile_block(&block);
    let first = html.find(">$0</div>").expect("first price");
    let second = html.find(">$49</div>").expect("second price");
    let third = html.find(">$99</div>").expect("third price");

    assert!(first < second && second < third);
    assert!(!html.contains(">$29</div>"));
}

#[test]
fn test_extra_elements_follow_template_markup() {
    let mut block = Block::new("b1", BlockType::Hero);
    block.elements.push(ExtraElement::Text {
        content: "Left note".to_string(),
        align: Align::Left,
    });
    block.elements.push(ExtraElement::Button {
        text: "Buy now".to_string(),
        url: "https://example.com/buy".to_string(),
        align: Align::Right,
    });

    let html = compile_block(&block);
    let subheading = html.find("A powerful builder").unwrap();
    let note = html.find("Left note").unwrap();
    let button = html.find("Buy now").unwrap();

    assert!(subheading < note && note < button);
    assert!(html.contains("<div class=\"w-full mt-4 text-left\">"));
    assert!(html.contains("<div class=\"w-full mt-4 text-right\">"));
    assert!(html.contains("href=\"https://example.com/buy\""));
}

#[test]
fn test_text_is_escaped() {
    let mut block = Block::new("b1", BlockType::Cta);
    block
        .apply_content_patch(&ContentPatch::new().set("heading", "<script>alert('x')</script>"))
        .unwrap();

    let html = compile_block(&block);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
}

#[test]
fn test_static_markup_has_no_editing_attributes() {
    let html = export_document(&page(), &ExportOptions::default());
    assert!(!html.contains("contenteditable"));
    assert!(!html.contains("data-field"));
    assert!(!html.contains("data-placeholder"));
    assert!(!html.contains("data-chrome"));
}

#[test]
fn test_export_boilerplate_and_sections() {
    let html = export_document(&page(), &ExportOptions::default());

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(html.contains("<meta charset=\"UTF-8\">"));
    assert!(html.contains("<title>Exported Page</title>"));
    assert!(html.contains("<script src=\"https://cdn.tailwindcss.com\"></script>"));
    assert!(html.contains("scroll-behavior: smooth;"));
    assert!(html.contains(
        "<section id=\"b2\" data-block-type=\"hero\" style=\"padding-top: 0rem; padding-bottom: 0rem; \
         margin-top: 0rem; margin-bottom: 0rem; background-color: rgba(255,255,255,1); color: #1a202c; \
         background-size: cover; background-repeat: no-repeat; background-position: center\">"
    ));

    let order: Vec<usize> = ["header", "hero", "pricing", "footer"]
        .iter()
        .map(|t| html.find(&format!("<!-- Block: {} -->", t)).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_export_uses_resolved_styles() {
    let mut block = Block::new("b1", BlockType::Cta);
    block
        .apply_style_patch(
            &StylePatch::new()
                .background_color("#3366ff")
                .background_opacity(0.5)
                .padding_top("4rem"),
        )
        .unwrap();

    let html = export_document(&[block], &ExportOptions::default());
    assert!(html.contains("background-color: rgba(51,102,255,0.5)"));
    assert!(html.contains("padding-top: 4rem"));
}

#[test]
fn test_export_is_deterministic() {
    let options = ExportOptions::default();
    assert_eq!(export_document(&page(), &options), export_document(&page(), &options));
}

#[test]
fn test_unknown_block_exports_empty_section() {
    let block: Block = serde_json::from_value(json!({
        "id": "x1",
        "type": "carousel",
        "content": {}
    }))
    .unwrap();

    assert_eq!(compile_block(&block), "");
    let html = export_document(&[block], &ExportOptions::default());
    assert!(html.contains("<!-- Block: carousel -->"));
    assert!(html.contains("data-block-type=\"carousel\""));
    assert!(!html.contains("Unknown Block"));
}

#[test]
fn test_copy_block_snippet() {
    let block = Block::new("b1", BlockType::Newsletter);
    let snippet = copy_block(&block);

    assert!(snippet.starts_with("<section style=\"padding-top: 0rem;"));
    assert!(snippet.contains("Stay Updated"));
    assert!(snippet.trim_end().ends_with("</section>"));
    assert!(!snippet.contains("<!DOCTYPE"));
}

#[test]
fn test_snippet_for_unknown_id() {
    let blocks = page();
    assert!(snippet_for(&blocks, "b3").unwrap().contains("Simple Pricing"));
    match snippet_for(&blocks, "missing") {
        Err(CompileError::BlockNotFound(id)) => assert_eq!(id, "missing"),
        other => panic!("Expected BlockNotFound, got {:?}", other),
    }
}

#[test]
fn test_write_export_to_disk() {
    let path = std::env::temp_dir().join(format!("zenith-export-{}.html", std::process::id()));
    write_export(&page(), &ExportOptions::default(), &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, export_document(&page(), &ExportOptions::default()));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_canvas_marks_editable_fields_and_chrome() {
    let blocks = page();
    let html = render_canvas(&blocks, Some("b3"), &RenderOptions::interactive());

    assert!(html.contains("contenteditable=\"true\" data-field=\"plans.1.price\""));
    assert!(html.contains("data-chrome=\"true\""));
    assert!(html.contains("data-block-id=\"b3\""));
    assert!(html.contains("border-blue-500"));
    assert!(html.contains("title=\"Remove Block\""));
    assert!(html.contains("data-placeholder=\"Enter Heading\""));
}

#[test]
fn test_canvas_mobile_viewport() {
    let blocks = vec![Block::new("b1", BlockType::Features)];
    let desktop = render_canvas(&blocks, None, &RenderOptions::interactive());
    let mobile = render_canvas(
        &blocks,
        None,
        &RenderOptions::interactive().with_viewport(Viewport::Mobile),
    );

    assert!(desktop.contains("md:grid-cols-3"));
    assert!(!mobile.contains("md:grid-cols-3"));
    assert!(mobile.contains("w-[375px]"));
    assert!(!desktop.contains("border-blue-500 "));
}

#[test]
fn test_empty_canvas_hint() {
    let html = render_canvas(&[], None, &RenderOptions::interactive());
    assert!(html.contains(EMPTY_CANVAS_HINT));
}

#[test]
fn test_canvas_unknown_block_fallback() {
    let block: Block = serde_json::from_value(json!({ "id": "x1", "type": "carousel" })).unwrap();
    let html = render_canvas(&[block], None, &RenderOptions::interactive());
    assert!(html.contains("Unknown Block Type"));
}
