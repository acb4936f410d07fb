use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use zenith_schema::FieldPath;

fn is_false(value: &bool) -> bool {
    !*value
}

/// Virtual DOM node shared by the interactive and static projections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        /// Ordered so serialization is deterministic
        attributes: BTreeMap<String, String>,
        children: Vec<VNode>,
        /// Content field this element's text is bound to (editable on the canvas)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        binding: Option<FieldPath>,
        /// Presentational sugar with no static counterpart
        #[serde(default, skip_serializing_if = "is_false")]
        chrome: bool,
    },

    /// Text node
    Text { content: String },

    /// Comment node
    Comment { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            binding: None,
            chrome: false,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        VNode::Comment {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        let class = class.into();
        if class.is_empty() {
            return self;
        }
        self.with_attr("class", class)
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: impl IntoIterator<Item = VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    /// Append a child only when `condition` holds
    pub fn with_child_if(self, condition: bool, child: impl FnOnce() -> VNode) -> Self {
        if condition {
            self.with_child(child())
        } else {
            self
        }
    }

    pub fn with_binding(mut self, path: FieldPath) -> Self {
        if let VNode::Element {
            ref mut binding, ..
        } = self
        {
            *binding = Some(path);
        }
        self
    }

    pub fn as_chrome(mut self) -> Self {
        if let VNode::Element { ref mut chrome, .. } = self {
            *chrome = true;
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn binding(&self) -> Option<&FieldPath> {
        match self {
            VNode::Element { binding, .. } => binding.as_ref(),
            _ => None,
        }
    }

    pub fn is_chrome(&self) -> bool {
        matches!(self, VNode::Element { chrome: true, .. })
    }

    /// Concatenated text of this subtree, optionally skipping chrome
    pub fn text_content(&self, include_chrome: bool) -> String {
        let mut out = String::new();
        self.collect_text(include_chrome, &mut out);
        out
    }

    fn collect_text(&self, include_chrome: bool, out: &mut String) {
        match self {
            VNode::Text { content } => out.push_str(content),
            VNode::Comment { .. } => {}
            VNode::Element {
                children, chrome, ..
            } => {
                if *chrome && !include_chrome {
                    return;
                }
                for child in children {
                    child.collect_text(include_chrome, out);
                }
            }
        }
    }

    /// Every bound element in document order with its current text
    pub fn bindings(&self) -> Vec<(FieldPath, String)> {
        let mut out = Vec::new();
        self.collect_bindings(&mut out);
        out
    }

    fn collect_bindings(&self, out: &mut Vec<(FieldPath, String)>) {
        if let VNode::Element {
            binding, children, ..
        } = self
        {
            if let Some(path) = binding {
                out.push((path.clone(), self.text_content(false)));
            }
            for child in children {
                child.collect_bindings(out);
            }
        }
    }

    /// Find the element bound to `path`
    pub fn find_binding(&self, path: &FieldPath) -> Option<&VNode> {
        if self.binding() == Some(path) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find_binding(path))
    }

    /// Copy of this subtree with chrome removed. A chrome root yields `None`.
    pub fn without_chrome(&self) -> Option<VNode> {
        match self {
            VNode::Element { chrome: true, .. } => None,
            VNode::Element {
                tag,
                attributes,
                children,
                binding,
                ..
            } => Some(VNode::Element {
                tag: tag.clone(),
                attributes: attributes.clone(),
                children: children.iter().filter_map(VNode::without_chrome).collect(),
                binding: binding.clone(),
                chrome: false,
            }),
            other => Some(other.clone()),
        }
    }
}
