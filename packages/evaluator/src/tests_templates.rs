use crate::evaluator::evaluate_block;
use crate::options::{RenderOptions, Viewport};
use crate::vdom::VNode;
use zenith_schema::{Align, Block, BlockContent, BlockType, ContentPatch, FieldPath, ImagePosition};

fn interactive(block: &Block) -> VNode {
    evaluate_block(block, &RenderOptions::interactive()).expect("known block renders")
}

fn mobile(block: &Block) -> VNode {
    evaluate_block(block, &RenderOptions::interactive().with_viewport(Viewport::Mobile))
        .expect("known block renders")
}

fn find_class<'a>(node: &'a VNode, needle: &str) -> Option<&'a VNode> {
    if node
        .attr("class")
        .map(|class| class.split(' ').any(|c| c == needle))
        .unwrap_or(false)
    {
        return Some(node);
    }
    node.children().iter().find_map(|child| find_class(child, needle))
}

fn count_tag(node: &VNode, tag: &str) -> usize {
    let own = usize::from(node.tag() == Some(tag));
    own + node.children().iter().map(|c| count_tag(c, tag)).sum::<usize>()
}

#[test]
fn test_every_variant_binds_its_text_fields() {
    for block_type in BlockType::ALL {
        let block = Block::new("b1", block_type);
        let vdom = interactive(&block);
        let bindings = vdom.bindings();

        assert!(!bindings.is_empty(), "{} has no editable fields", block_type);
        for (path, text) in bindings {
            assert_eq!(
                path.read(&block).as_deref(),
                Some(text.as_str()),
                "{} binding {} shows stale text",
                block_type,
                path
            );
        }
    }
}

#[test]
fn test_hero_alignment_classes() {
    let mut block = Block::new("b1", BlockType::Hero);
    let class = |block: &Block| interactive(block).attr("class").unwrap_or_default().to_string();

    assert!(class(&block).contains("text-center items-center"));

    block
        .apply_content_patch(&ContentPatch::new().set("alignment", "right"))
        .unwrap();
    assert!(class(&block).contains("text-right items-end"));

    if let BlockContent::Hero(hero) = &mut block.content {
        hero.alignment = Align::Left;
    }
    assert!(class(&block).contains("text-left items-start"));
}

#[test]
fn test_hero_hides_button_when_disabled() {
    let mut block = Block::new("b1", BlockType::Hero);
    assert!(interactive(&block).find_binding(&FieldPath::field("buttonText")).is_some());

    block
        .apply_content_patch(&ContentPatch::new().set("showButton", false))
        .unwrap();
    assert!(interactive(&block).find_binding(&FieldPath::field("buttonText")).is_none());
}

#[test]
fn test_header_theme_toggle_is_conditional() {
    let mut block = Block::new("b1", BlockType::Header);
    let has_toggle = |block: &Block| find_class(&interactive(block), "bg-gray-100").is_some();

    assert!(has_toggle(&block));
    block
        .apply_content_patch(&ContentPatch::new().set("showThemeToggle", false))
        .unwrap();
    assert!(!has_toggle(&block));
}

#[test]
fn test_image_text_position_sets_flex_order() {
    let mut block = Block::new("b1", BlockType::ImageText);
    assert!(find_class(&interactive(&block), "md:flex-row").is_some());

    if let BlockContent::ImageText(content) = &mut block.content {
        content.image_position = ImagePosition::Left;
    }
    assert!(find_class(&interactive(&block), "md:flex-row-reverse").is_some());
    assert!(find_class(&interactive(&block), "md:flex-row").is_none());
}

#[test]
fn test_mobile_viewport_collapses_grids() {
    let block = Block::new("b1", BlockType::Features);
    assert!(find_class(&interactive(&block), "md:grid-cols-3").is_some());
    assert!(find_class(&mobile(&block), "md:grid-cols-3").is_none());
    assert!(find_class(&mobile(&block), "grid-cols-1").is_some());

    let gallery = Block::new("b2", BlockType::Gallery);
    assert!(find_class(&mobile(&gallery), "grid-cols-2").is_some());
    assert!(find_class(&mobile(&gallery), "md:grid-cols-4").is_none());
}

#[test]
fn test_collections_render_one_card_per_item() {
    let pricing = interactive(&Block::new("b1", BlockType::Pricing));
    assert_eq!(count_tag(&pricing, "button"), 3);
    assert!(pricing.text_content(false).contains("Choose Enterprise"));

    let gallery = interactive(&Block::new("b2", BlockType::Gallery));
    assert_eq!(count_tag(&gallery, "img"), 4);

    let blog = interactive(&Block::new("b3", BlockType::Blog));
    assert_eq!(count_tag(&blog, "article"), 3);
}

#[test]
fn test_unknown_feature_icon_falls_back_to_layout() {
    let mut block = Block::new("b1", BlockType::Features);
    if let BlockContent::Features(features) = &mut block.content {
        features.items[0].icon = "rocket".to_string();
    }
    let vdom = interactive(&block);
    let icon = find_class(&vdom, "w-14").expect("icon box");
    assert_eq!(icon.attr("data-icon"), Some("layout"));
}

#[test]
fn test_hero_placeholders_only_on_canvas() {
    let block = Block::new("b1", BlockType::Hero);
    let heading = FieldPath::field("heading");

    let canvas = interactive(&block);
    assert_eq!(
        canvas.find_binding(&heading).and_then(|n| n.attr("data-placeholder")),
        Some("Enter Heading")
    );

    let exported = evaluate_block(&block, &RenderOptions::static_markup()).unwrap();
    assert_eq!(
        exported.find_binding(&heading).and_then(|n| n.attr("data-placeholder")),
        None
    );
}
