//! Mapped property values

use std::collections::HashMap;

use chrono::NaiveDateTime;

use super::types::{Link, RichText, Tag};
use super::{downcast, short_type_name, ViewModel};
use crate::error::{DxaError, Result};

/// A value mapped from content, ready to be assigned to a model property
///
/// List properties receive a [`PropertyValue::List`]; scalar properties
/// receive the element itself.
#[derive(Debug)]
pub enum PropertyValue {
    Text(String),
    RichText(RichText),
    Number(f64),
    Integer(i64),
    Boolean(bool),
    Date(NaiveDateTime),
    Tag(Tag),
    Link(Link),
    Dictionary(HashMap<String, String>),
    TagDictionary(HashMap<String, Tag>),
    Entity(Box<dyn ViewModel>),
    List(Vec<PropertyValue>),
}

impl PropertyValue {
    /// Name of the value kind, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            PropertyValue::Text(_) => "Text",
            PropertyValue::RichText(_) => "RichText",
            PropertyValue::Number(_) => "Number",
            PropertyValue::Integer(_) => "Integer",
            PropertyValue::Boolean(_) => "Boolean",
            PropertyValue::Date(_) => "Date",
            PropertyValue::Tag(_) => "Tag",
            PropertyValue::Link(_) => "Link",
            PropertyValue::Dictionary(_) => "Dictionary",
            PropertyValue::TagDictionary(_) => "TagDictionary",
            PropertyValue::Entity(_) => "Entity",
            PropertyValue::List(_) => "List",
        }
    }

    /// Convert into a property type
    pub fn extract<T: FromPropertyValue>(self) -> Result<T> {
        T::from_property_value(self)
    }

    /// Convert an entity value into its concrete model type
    pub fn into_model<T: ViewModel>(self) -> Result<T> {
        match self {
            PropertyValue::Entity(model) => downcast(model),
            other => Err(DxaError::PropertyType {
                expected: short_type_name(std::any::type_name::<T>()),
                found: other.kind_name(),
            }),
        }
    }

    /// Convert a list of entity values (or a single one) into concrete models
    pub fn into_models<T: ViewModel>(self) -> Result<Vec<T>> {
        match self {
            PropertyValue::List(items) => items.into_iter().map(Self::into_model).collect(),
            single => Ok(vec![single.into_model()?]),
        }
    }
}

/// Conversion from a mapped value into a property type
pub trait FromPropertyValue: Sized {
    /// Name of the expected value kind, for error reporting
    const EXPECTED: &'static str;

    fn from_property_value(value: PropertyValue) -> Result<Self>;
}

fn mismatch<T: FromPropertyValue>(value: &PropertyValue) -> DxaError {
    DxaError::PropertyType {
        expected: T::EXPECTED,
        found: value.kind_name(),
    }
}

macro_rules! impl_from_variant {
    ($ty:ty, $variant:ident, $expected:literal) => {
        impl FromPropertyValue for $ty {
            const EXPECTED: &'static str = $expected;

            fn from_property_value(value: PropertyValue) -> Result<Self> {
                match value {
                    PropertyValue::$variant(v) => Ok(v),
                    other => Err(mismatch::<Self>(&other)),
                }
            }
        }
    };
}

impl_from_variant!(bool, Boolean, "Boolean");
impl_from_variant!(NaiveDateTime, Date, "Date");
impl_from_variant!(Tag, Tag, "Tag");
impl_from_variant!(Link, Link, "Link");
impl_from_variant!(HashMap<String, String>, Dictionary, "Dictionary");
impl_from_variant!(HashMap<String, Tag>, TagDictionary, "TagDictionary");
impl_from_variant!(Box<dyn ViewModel>, Entity, "Entity");
impl_from_variant!(i64, Integer, "Integer");

impl FromPropertyValue for String {
    const EXPECTED: &'static str = "Text";

    fn from_property_value(value: PropertyValue) -> Result<Self> {
        match value {
            PropertyValue::Text(s) => Ok(s),
            PropertyValue::RichText(rt) => Ok(rt.to_string()),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromPropertyValue for RichText {
    const EXPECTED: &'static str = "RichText";

    fn from_property_value(value: PropertyValue) -> Result<Self> {
        match value {
            PropertyValue::RichText(rt) => Ok(rt),
            PropertyValue::Text(s) => Ok(RichText::from(s)),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromPropertyValue for f64 {
    const EXPECTED: &'static str = "Number";

    fn from_property_value(value: PropertyValue) -> Result<Self> {
        match value {
            PropertyValue::Number(n) => Ok(n),
            PropertyValue::Integer(n) => Ok(n as f64),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl FromPropertyValue for i32 {
    const EXPECTED: &'static str = "Integer";

    fn from_property_value(value: PropertyValue) -> Result<Self> {
        match value {
            PropertyValue::Integer(n) => i32::try_from(n).map_err(|_| DxaError::PropertyType {
                expected: "32-bit Integer",
                found: "out-of-range Integer",
            }),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl<T: FromPropertyValue> FromPropertyValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_property_value(value: PropertyValue) -> Result<Self> {
        T::from_property_value(value).map(Some)
    }
}

impl<T: FromPropertyValue> FromPropertyValue for Vec<T> {
    const EXPECTED: &'static str = "List";

    fn from_property_value(value: PropertyValue) -> Result<Self> {
        match value {
            PropertyValue::List(items) => items.into_iter().map(T::from_property_value).collect(),
            single => Ok(vec![T::from_property_value(single)?]),
        }
    }
}
