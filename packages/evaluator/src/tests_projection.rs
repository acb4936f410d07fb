use crate::evaluator::{evaluate_block, UNKNOWN_BLOCK_LABEL};
use crate::options::{RenderOptions, Viewport};
use crate::vdom::VNode;
use serde_json::json;
use zenith_schema::{Align, Block, BlockType, ElementKind, ExtraElement, FieldPath};

fn without_chrome(node: &VNode) -> VNode {
    node.without_chrome().expect("container is never chrome")
}

#[test]
fn test_static_equals_interactive_minus_chrome() {
    for block_type in BlockType::ALL {
        let block = Block::new("b1", block_type);
        let canvas = evaluate_block(&block, &RenderOptions::interactive()).unwrap();
        let exported = evaluate_block(&block, &RenderOptions::static_markup()).unwrap();

        assert_eq!(
            canvas.text_content(false),
            exported.text_content(true),
            "{} text differs between projections",
            block_type
        );
        assert_eq!(
            canvas.bindings(),
            exported.bindings(),
            "{} bindings differ between projections",
            block_type
        );
    }
}

#[test]
fn test_static_projection_has_no_chrome() {
    let block = Block::new("b1", BlockType::Testimonials);
    let canvas = evaluate_block(&block, &RenderOptions::interactive()).unwrap();
    let exported = evaluate_block(&block, &RenderOptions::static_markup()).unwrap();

    assert!(canvas.text_content(true).contains('★'));
    assert!(!exported.text_content(true).contains('★'));
    assert_eq!(exported, without_chrome(&canvas));
}

#[test]
fn test_static_ignores_mobile_viewport() {
    let options = RenderOptions::static_markup().with_viewport(Viewport::Mobile);
    assert_eq!(options.viewport, Viewport::Desktop);
}

#[test]
fn test_extra_elements_append_in_order_with_alignment() {
    let mut block = Block::new("b1", BlockType::Cta);
    block.elements.push(ExtraElement::Text {
        content: "First".to_string(),
        align: Align::Left,
    });
    block.elements.push(ExtraElement::new(ElementKind::Button));
    block.elements.push(ExtraElement::Text {
        content: "Last".to_string(),
        align: Align::Right,
    });

    for options in [RenderOptions::interactive(), RenderOptions::static_markup()] {
        let vdom = evaluate_block(&block, &options).unwrap();
        let tail: Vec<&VNode> = vdom.children().iter().rev().take(3).rev().collect();

        assert_eq!(tail[0].attr("class"), Some("w-full mt-4 text-left"));
        assert_eq!(tail[1].attr("class"), Some("w-full mt-4 text-center"));
        assert_eq!(tail[2].attr("class"), Some("w-full mt-4 text-right"));

        assert_eq!(tail[0].text_content(false), "First");
        assert_eq!(tail[1].text_content(false), "New Button");
        assert_eq!(tail[2].text_content(false), "Last");

        let button = &tail[1].children()[0];
        assert_eq!(button.tag(), Some("a"));
        assert_eq!(button.attr("href"), Some("#"));
        assert_eq!(button.binding(), Some(&FieldPath::element(1, "text")));
    }
}

#[test]
fn test_unknown_type_degrades_per_projection() {
    let block: Block = serde_json::from_value(json!({
        "id": "b1",
        "type": "carousel",
        "content": {}
    }))
    .unwrap();

    let canvas = evaluate_block(&block, &RenderOptions::interactive()).unwrap();
    assert_eq!(canvas.text_content(true), UNKNOWN_BLOCK_LABEL);
    assert!(evaluate_block(&block, &RenderOptions::static_markup()).is_none());
}

#[test]
fn test_edit_shows_up_in_both_projections() {
    let mut block = Block::new("b1", BlockType::Pricing);
    let path = FieldPath::item("plans", 1, "price");
    let patch = path.to_patch(&block, "$49").unwrap();
    block.apply_content_patch(&patch).unwrap();

    for options in [RenderOptions::interactive(), RenderOptions::static_markup()] {
        let vdom = evaluate_block(&block, &options).unwrap();
        let price = vdom.find_binding(&path).expect("price is bound");
        assert_eq!(price.text_content(false), "$49");
        assert_eq!(
            vdom.find_binding(&FieldPath::item("plans", 0, "price"))
                .map(|n| n.text_content(false)),
            Some("$0".to_string())
        );
    }
}
