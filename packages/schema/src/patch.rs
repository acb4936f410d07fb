//! Partial updates and edit addressing.
//!
//! Patches are one-level JSON objects: each key replaces the corresponding
//! field wholesale. [`FieldPath`] addresses a single editable text node and
//! turns a committed edit into the patch that rewrites it.

use crate::block::Block;
use crate::content::Align;
use crate::error::{SchemaError, SchemaResult};
use crate::styles::{BackgroundPosition, BackgroundRepeat, BackgroundSize, BlockStyles};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Partial content update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentPatch(Map<String, Value>);

impl ContentPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set a field from any serializable value (lists of items, nested objects)
    pub fn set_serialized<T: Serialize>(mut self, key: impl Into<String>, value: &T) -> SchemaResult<Self> {
        let key = key.into();
        let value = serde_json::to_value(value).map_err(|e| SchemaError::content(&key, e))?;
        self.0.insert(key, value);
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ContentPatch {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Partial style update. `null` clears an optional property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StylePatch(Map<String, Value>);

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn padding_top(self, value: &str) -> Self {
        self.set("paddingTop", value)
    }

    pub fn padding_bottom(self, value: &str) -> Self {
        self.set("paddingBottom", value)
    }

    pub fn margin_top(self, value: &str) -> Self {
        self.set("marginTop", value)
    }

    pub fn margin_bottom(self, value: &str) -> Self {
        self.set("marginBottom", value)
    }

    pub fn background_color(self, value: &str) -> Self {
        self.set("backgroundColor", value)
    }

    pub fn background_opacity(self, value: f64) -> Self {
        self.set("backgroundOpacity", value)
    }

    pub fn text_color(self, value: &str) -> Self {
        self.set("textColor", value)
    }

    pub fn background_image(self, value: Option<&str>) -> Self {
        self.set("backgroundImage", value)
    }

    pub fn gradient(self, value: Option<&str>) -> Self {
        self.set("gradient", value)
    }

    pub fn background_size(self, value: Option<BackgroundSize>) -> Self {
        self.set("backgroundSize", value.map(|v| v.as_css()))
    }

    pub fn background_repeat(self, value: Option<BackgroundRepeat>) -> Self {
        self.set("backgroundRepeat", value.map(|v| v.as_css()))
    }

    pub fn background_position(self, value: Option<BackgroundPosition>) -> Self {
        self.set("backgroundPosition", value.map(|v| v.as_css()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge onto `styles`, producing the updated payload
    pub fn apply_to(&self, styles: &BlockStyles) -> SchemaResult<BlockStyles> {
        let mut map = match serde_json::to_value(styles) {
            Ok(Value::Object(map)) => map,
            Ok(other) => return Err(SchemaError::InvalidStyles(other.to_string())),
            Err(e) => return Err(SchemaError::InvalidStyles(e.to_string())),
        };
        for (key, value) in &self.0 {
            map.insert(key.clone(), value.clone());
        }
        serde_json::from_value(Value::Object(map)).map_err(|e| SchemaError::InvalidStyles(e.to_string()))
    }
}

impl From<Map<String, Value>> for StylePatch {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Address of one editable text node inside a block's content.
///
/// The display form (`heading`, `plans.1.price`, `elements.0.content`) is the
/// value of the `data-field` attribute on interactive markup and parses back
/// with [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldPath {
    /// A top-level content field
    Field { name: String },
    /// A field of one item in a list-valued content field
    Item {
        array: String,
        index: usize,
        field: String,
    },
    /// A field of one extra element
    Element { index: usize, field: String },
}

impl FieldPath {
    pub fn field(name: impl Into<String>) -> Self {
        FieldPath::Field { name: name.into() }
    }

    pub fn item(array: impl Into<String>, index: usize, field: impl Into<String>) -> Self {
        FieldPath::Item {
            array: array.into(),
            index,
            field: field.into(),
        }
    }

    pub fn element(index: usize, field: impl Into<String>) -> Self {
        FieldPath::Element {
            index,
            field: field.into(),
        }
    }

    /// Current text at this path, if the path resolves to a string
    pub fn read(&self, block: &Block) -> Option<String> {
        let map = block.content_map().ok()?;
        let value = match self {
            FieldPath::Field { name } => map.get(name)?,
            FieldPath::Item {
                array,
                index,
                field,
            } => map.get(array)?.get(*index)?.get(field)?,
            FieldPath::Element { index, field } => map.get("elements")?.get(*index)?.get(field)?,
        };
        value.as_str().map(str::to_string)
    }

    /// Build the partial content update that writes `text` at this path.
    ///
    /// List-valued fields are copied, the addressed item rewritten, and the
    /// whole list returned under its key.
    pub fn to_patch(&self, block: &Block, text: &str) -> SchemaResult<ContentPatch> {
        match self {
            FieldPath::Field { name } => Ok(ContentPatch::new().set(name.clone(), text)),
            FieldPath::Item {
                array,
                index,
                field,
            } => {
                let map = block.content_map()?;
                let list = rewrite_item(map.get(array), *index, field, text, self)?;
                Ok(ContentPatch::new().set(array.clone(), list))
            }
            FieldPath::Element { index, field } => {
                let map = block.content_map()?;
                let list = rewrite_item(map.get("elements"), *index, field, text, self)?;
                Ok(ContentPatch::new().set("elements", list))
            }
        }
    }
}

fn rewrite_item(
    list: Option<&Value>,
    index: usize,
    field: &str,
    text: &str,
    path: &FieldPath,
) -> SchemaResult<Value> {
    let mut items = match list {
        Some(Value::Array(items)) => items.clone(),
        _ => return Err(SchemaError::FieldNotFound(path.to_string())),
    };
    match items.get_mut(index) {
        Some(Value::Object(item)) => {
            item.insert(field.to_string(), Value::String(text.to_string()));
        }
        _ => return Err(SchemaError::FieldNotFound(path.to_string())),
    }
    Ok(Value::Array(items))
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Field { name } => write!(f, "{}", name),
            FieldPath::Item {
                array,
                index,
                field,
            } => write!(f, "{}.{}.{}", array, index, field),
            FieldPath::Element { index, field } => write!(f, "elements.{}.{}", index, field),
        }
    }
}

impl FromStr for FieldPath {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        let invalid = || SchemaError::InvalidFieldPath(s.to_string());

        match parts.as_slice() {
            [name] if !name.is_empty() => Ok(FieldPath::field(*name)),
            [array, index, field] if !array.is_empty() && !field.is_empty() => {
                let index = index.parse::<usize>().map_err(|_| invalid())?;
                if *array == "elements" {
                    Ok(FieldPath::element(index, *field))
                } else {
                    Ok(FieldPath::item(*array, index, *field))
                }
            }
            _ => Err(invalid()),
        }
    }
}

/// Content patch that re-aligns one extra element by replacing the element list
pub fn element_align_patch(block: &Block, index: usize, align: Align) -> SchemaResult<ContentPatch> {
    let mut elements = block.elements.clone();
    let element = elements
        .get_mut(index)
        .ok_or_else(|| SchemaError::FieldNotFound(format!("elements.{}", index)))?;
    element.set_align(align);
    ContentPatch::new().set_serialized("elements", &elements)
}
