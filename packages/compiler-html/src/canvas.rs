//! Editor canvas markup.
//!
//! Each block is wrapped in the editor section: selection border, a type
//! label, the drag handle and the delete control, all tagged as chrome. Bound
//! text nodes are written `contenteditable` with a `data-field` path so the
//! host can route a committed edit back to the block.

use crate::compiler::{write_node, CompileOptions, Context, Markup};
use zenith_compiler_css::resolve;
use zenith_evaluator::{Evaluator, RenderOptions, VNode, Viewport};
use zenith_schema::Block;

const SECTION_BASE: &str =
    "builder-block relative group transition-all duration-300 border-2 ease-in-out";
const SECTION_SELECTED: &str = "border-blue-500 z-10 shadow-xl";
const SECTION_IDLE: &str = "border-transparent hover:border-blue-300";

pub const EMPTY_CANVAS_HINT: &str = "Drag components here";

/// Interactive canvas for the whole page
pub fn render_canvas(blocks: &[Block], selected_id: Option<&str>, options: &RenderOptions) -> String {
    let evaluator = Evaluator::new(RenderOptions::interactive().with_viewport(options.viewport));
    let frame_width = match options.viewport {
        Viewport::Desktop => "w-full max-w-[1200px]",
        Viewport::Mobile => "w-[375px]",
    };

    let mut frame = VNode::element("div")
        .with_class(format!("bg-white shadow-2xl relative {}", frame_width))
        .with_attr("data-role", "canvas");

    if blocks.is_empty() {
        frame = frame.with_child(
            VNode::element("div")
                .with_class("flex flex-col items-center justify-center text-gray-300 border-2 border-dashed border-gray-300 m-4 rounded-xl")
                .with_attr("data-drop-target", "end")
                .with_child(
                    VNode::element("p")
                        .with_class("text-xl font-medium")
                        .with_child(VNode::text(EMPTY_CANVAS_HINT)),
                )
                .as_chrome(),
        );
    }

    for (index, block) in blocks.iter().enumerate() {
        let selected = selected_id == Some(block.id.as_str());
        frame = frame.with_child(block_section(&evaluator, block, index, selected));
    }

    let mut ctx = Context::new(CompileOptions::default());
    write_node(&frame, &mut ctx, Markup::Canvas);
    ctx.get_output()
}

fn block_section(evaluator: &Evaluator, block: &Block, index: usize, selected: bool) -> VNode {
    let state = if selected { SECTION_SELECTED } else { SECTION_IDLE };

    let label = VNode::element("div")
        .with_class("absolute -top-3 -left-[2px] bg-blue-500 text-white text-xs px-2 py-0.5 rounded-t-md")
        .with_child(
            VNode::element("span")
                .with_class("font-mono uppercase text-[10px] tracking-wider")
                .with_child(VNode::text(block.type_name())),
        )
        .as_chrome();

    let controls = VNode::element("div")
        .with_class("absolute top-2 right-2 flex gap-2 bg-white/90 rounded shadow-sm border border-gray-200 p-1")
        .with_child(
            VNode::element("div")
                .with_class("cursor-move text-gray-500 hover:text-blue-600 p-1")
                .with_attr("data-action", "drag")
                .with_child(VNode::text("⠿")),
        )
        .with_child(
            VNode::element("button")
                .with_class("text-red-400 hover:text-red-600 p-1")
                .with_attr("data-action", "delete")
                .with_attr("title", "Remove Block")
                .with_child(VNode::text("✕")),
        )
        .as_chrome();

    let section = VNode::element("section")
        .with_class(format!("{} {}", SECTION_BASE, state))
        .with_attr("data-block-id", block.id.as_str())
        .with_attr("data-index", index.to_string())
        .with_attr("draggable", "true")
        .with_attr("style", resolve(&block.styles).to_inline())
        .with_child(label)
        .with_child(controls);

    match evaluator.evaluate(block) {
        Some(content) => section.with_child(content),
        None => section,
    }
}
