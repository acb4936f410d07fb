//! Per-variant layouts.
//!
//! Each template returns the variant's outer container. Extra elements are
//! appended to that container by the evaluator, not by the template.

mod collections;
mod sections;

use crate::options::{RenderMode, RenderOptions};
use crate::vdom::VNode;
use zenith_schema::{BlockContent, FieldPath};

pub(crate) use collections::{blog, faq, features, gallery, pricing, team, testimonials};
pub(crate) use sections::{contact, cta, footer, header, hero, image_text, newsletter, video};

/// Build the container for a known variant, `None` for an unknown one
pub(crate) fn render(content: &BlockContent, options: &RenderOptions) -> Option<VNode> {
    let t = Template::new(options);
    let node = match content {
        BlockContent::Header(c) => header(&t, c),
        BlockContent::Hero(c) => hero(&t, c),
        BlockContent::Features(c) => features(&t, c),
        BlockContent::Testimonials(c) => testimonials(&t, c),
        BlockContent::Video(c) => video(&t, c),
        BlockContent::Cta(c) => cta(&t, c),
        BlockContent::Contact(c) => contact(&t, c),
        BlockContent::Pricing(c) => pricing(&t, c),
        BlockContent::Faq(c) => faq(&t, c),
        BlockContent::Footer(c) => footer(&t, c),
        BlockContent::Gallery(c) => gallery(&t, c),
        BlockContent::Team(c) => team(&t, c),
        BlockContent::Blog(c) => blog(&t, c),
        BlockContent::Newsletter(c) => newsletter(&t, c),
        BlockContent::ImageText(c) => image_text(&t, c),
        BlockContent::Unknown { .. } => return None,
    };
    Some(node)
}

/// Shared builders for the templates
pub(crate) struct Template<'a> {
    options: &'a RenderOptions,
}

impl<'a> Template<'a> {
    pub(crate) fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    pub(crate) fn is_mobile(&self) -> bool {
        self.options.is_mobile()
    }

    /// Element whose only child is the bound field's text
    pub(crate) fn editable(&self, tag: &str, class: &str, path: FieldPath, text: &str) -> VNode {
        VNode::element(tag)
            .with_class(class)
            .with_binding(path)
            .with_child(VNode::text(text))
    }

    /// Editable top-level field
    pub(crate) fn field(&self, tag: &str, class: &str, name: &str, text: &str) -> VNode {
        self.editable(tag, class, FieldPath::field(name), text)
    }

    /// Editable field of one list item
    pub(crate) fn item(
        &self,
        tag: &str,
        class: &str,
        array: &str,
        index: usize,
        field: &str,
        text: &str,
    ) -> VNode {
        self.editable(tag, class, FieldPath::item(array, index, field), text)
    }

    /// Hint shown in an empty editable; canvas only
    pub(crate) fn placeholder(&self, node: VNode, hint: &str) -> VNode {
        match self.options.mode {
            RenderMode::Interactive => node.with_attr("data-placeholder", hint),
            RenderMode::Static => node,
        }
    }

    pub(crate) fn grid_3(&self) -> &'static str {
        if self.is_mobile() {
            "grid-cols-1"
        } else {
            "grid-cols-1 md:grid-cols-3"
        }
    }

    pub(crate) fn grid_4(&self) -> &'static str {
        if self.is_mobile() {
            "grid-cols-2"
        } else {
            "grid-cols-2 md:grid-cols-4"
        }
    }

    pub(crate) fn flex_row(&self) -> &'static str {
        if self.is_mobile() {
            "flex-col"
        } else {
            "flex-col md:flex-row"
        }
    }

    /// Section heading wrapped in the usual centered title row
    pub(crate) fn title_row(&self, row_class: &str, heading_class: &str, heading: &str) -> VNode {
        VNode::element("div")
            .with_class(row_class)
            .with_child(self.field("h2", heading_class, "heading", heading))
    }
}

/// Join class fragments, skipping empty ones
pub(crate) fn classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
