//! # Domain Model: Products
//!
//! The reference entity the filter engine works over. A [`Product`] has a name
//! and two closed, enumerated attributes: [`Color`] and [`Size`].
//!
//! Products are plain values owned by the caller. Nothing in this crate mutates
//! one after construction; specifications and the filter engine only borrow them.
//!
//! ## Attribute Access
//!
//! Besides the typed fields, products expose their attributes by name through
//! [`Attributes`], which is what [`AttrFilter`](crate::attributes::AttrFilter)
//! evaluates against:
//!
//! | Attribute | Kind | Value |
//! |-----------|------|-------|
//! | `name` | `Text` | the product name |
//! | `color` | `Enum` | `Red`, `Green`, `Blue` |
//! | `size` | `Enum` | `Small`, `Medium`, `Large`, `XLarge` |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attributes::{AttrValue, AttributeSpec, Attributes, PRODUCT_ATTRIBUTES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
    XLarge,
}

impl Size {
    pub const ALL: [Size; 4] = [Size::Small, Size::Medium, Size::Large, Size::XLarge];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
            Size::XLarge => "XLarge",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

impl Attributes for Product {
    fn schema() -> &'static [AttributeSpec] {
        PRODUCT_ATTRIBUTES
    }

    fn get_attr(&self, name: &str) -> Option<AttrValue> {
        match name {
            "name" => Some(AttrValue::Text(self.name.clone())),
            "color" => Some(self.color.into()),
            "size" => Some(self.size.into()),
            _ => None,
        }
    }
}
