//! Field value mapping
//!
//! Converts the values of one field to the shape of the model property it
//! maps onto. All values are converted; scalar properties keep the first.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use dxa_content::{
    Component, EntityNames, Field, FieldSet, FieldValues, Keyword, SemanticSchema,
    SemanticSchemaField,
};
use dxa_vocab::core;
use tracing::debug_span;

use super::context::MappingContext;
use crate::builder::ModelBuilder;
use crate::error::{DxaError, Result};
use crate::model::{Link, PropertyValue, Tag};
use crate::semantics::{PropertyMapping, PropertyTarget};

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

impl ModelBuilder {
    /// Map the values of a field onto a property
    ///
    /// Returns `None` for a scalar property when no value survives
    /// conversion (e.g. links to unpublished items).
    pub(crate) fn map_field_values(
        &self,
        field: &Field,
        schema_field: &SemanticSchemaField,
        property: &PropertyMapping,
        ctx: &MappingContext<'_>,
    ) -> Result<Option<PropertyValue>> {
        let target = property.target;
        let mut values = Vec::with_capacity(field.values.len());

        match &field.values {
            FieldValues::Date(dates) => {
                for date in dates {
                    values.push(convert_date(*date, field, target, ctx)?);
                }
            }
            FieldValues::Number(numbers) => {
                for number in numbers {
                    values.push(convert_number(*number, field, target, ctx)?);
                }
            }
            FieldValues::Text(texts) | FieldValues::ExternalLink(texts) => {
                for text in texts {
                    values.push(convert_text(text, field, target, ctx)?);
                }
            }
            FieldValues::RichText(markup) => {
                for m in markup {
                    let rich_text = self.rich_text.process_rich_text(m, ctx.localization)?;
                    values.push(match target {
                        PropertyTarget::RichText => PropertyValue::RichText(rich_text),
                        PropertyTarget::Text => PropertyValue::Text(rich_text.to_string()),
                        _ => return Err(unsupported(field, target, ctx)),
                    });
                }
            }
            FieldValues::Keyword(keywords) => {
                for keyword in keywords {
                    values.push(convert_keyword(keyword, field, target, ctx)?);
                }
            }
            FieldValues::Embedded(sets) => {
                values = self.map_embedded(field, schema_field, sets, target, ctx)?;
            }
            FieldValues::ComponentLink(components) | FieldValues::MultimediaLink(components) => {
                // A single-valued property maps the first link or nothing
                let linked = if property.is_list {
                    components.as_slice()
                } else {
                    &components[..components.len().min(1)]
                };
                for component in linked {
                    if let Some(value) = self.map_linked_component(component, field, target, ctx)? {
                        values.push(value);
                    }
                }
            }
        }

        Ok(if property.is_list {
            Some(PropertyValue::List(values))
        } else {
            values.into_iter().next()
        })
    }

    fn map_embedded(
        &self,
        field: &Field,
        schema_field: &SemanticSchemaField,
        sets: &[FieldSet],
        target: PropertyTarget,
        ctx: &MappingContext<'_>,
    ) -> Result<Vec<PropertyValue>> {
        let Some(model_type) = target.model_type() else {
            return Err(unsupported(field, target, ctx));
        };
        let info = self.registry.semantic_info(model_type)?;

        // Entity names of the embedded values: those of the embedded schema
        // when published, else its root element, else the parent's.
        let embedded_schema: Option<Arc<SemanticSchema>> = match &field.embedded_schema_id {
            Some(schema_id) => Some(self.schemas.semantic_schema(schema_id, ctx.localization)?),
            None => None,
        };
        let root_names = schema_field.embedded_root_element.as_deref().map(|root| {
            let mut names = EntityNames::new();
            names.add(core::VOCABULARY, root);
            names
        });
        let entity_names = embedded_schema
            .as_deref()
            .map(SemanticSchema::entity_names)
            .or(root_names.as_ref())
            .unwrap_or(ctx.entity_names);

        let mut values = Vec::with_capacity(sets.len());
        for set in sets {
            let span = debug_span!(
                "map_embedded",
                field = %field.name,
                model_type = model_type.name(),
                embed_level = ctx.embed_level + 1
            );
            let _guard = span.enter();

            let nested = ctx.embedded(info, set, entity_names);
            values.push(PropertyValue::Entity(self.create_view_model(&nested)?));
        }
        Ok(values)
    }

    fn map_linked_component(
        &self,
        component: &Component,
        field: &Field,
        target: PropertyTarget,
        ctx: &MappingContext<'_>,
    ) -> Result<Option<PropertyValue>> {
        match target {
            PropertyTarget::Text => Ok(self
                .link_resolver
                .resolve_link(&component.id, ctx.localization)
                .map(PropertyValue::Text)),
            PropertyTarget::Link => Ok(Some(PropertyValue::Link(Link {
                id: Some(component.id.clone()),
                url: self.link_resolver.resolve_link(&component.id, ctx.localization),
                link_text: None,
            }))),
            PropertyTarget::Entity(model_type) => {
                let span = debug_span!(
                    "map_linked_component",
                    field = %field.name,
                    component_id = %component.id
                );
                let _guard = span.enter();

                let model = self.create_entity_model(component, model_type, ctx.localization)?;
                Ok(Some(PropertyValue::Entity(model)))
            }
            _ => Err(unsupported(field, target, ctx)),
        }
    }
}

fn unsupported(field: &Field, target: PropertyTarget, ctx: &MappingContext<'_>) -> DxaError {
    DxaError::UnsupportedMapping {
        field: field.name.clone(),
        field_type: field.field_type(),
        target: target.to_string(),
        model_type: ctx.model_type.name().to_string(),
    }
}

fn conversion_error(field: &Field, target: PropertyTarget, value: &str, message: &str) -> DxaError {
    DxaError::Conversion {
        field: field.name.clone(),
        target: target.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}

fn convert_date(
    date: NaiveDateTime,
    field: &Field,
    target: PropertyTarget,
    ctx: &MappingContext<'_>,
) -> Result<PropertyValue> {
    match target {
        PropertyTarget::Date => Ok(PropertyValue::Date(date)),
        _ => Err(unsupported(field, target, ctx)),
    }
}

fn convert_number(
    number: f64,
    field: &Field,
    target: PropertyTarget,
    ctx: &MappingContext<'_>,
) -> Result<PropertyValue> {
    match target {
        PropertyTarget::Number => Ok(PropertyValue::Number(number)),
        PropertyTarget::Integer => {
            let rounded = number.round_ties_even();
            if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
                return Err(conversion_error(
                    field,
                    target,
                    &number.to_string(),
                    "out of integer range",
                ));
            }
            Ok(PropertyValue::Integer(rounded as i64))
        }
        PropertyTarget::Boolean => Ok(PropertyValue::Boolean(number != 0.0)),
        PropertyTarget::Text => Ok(PropertyValue::Text(number.to_string())),
        _ => Err(unsupported(field, target, ctx)),
    }
}

fn convert_text(
    text: &str,
    field: &Field,
    target: PropertyTarget,
    ctx: &MappingContext<'_>,
) -> Result<PropertyValue> {
    match target {
        PropertyTarget::Text => Ok(PropertyValue::Text(text.to_string())),
        PropertyTarget::RichText => Ok(PropertyValue::RichText(text.to_string().into())),
        PropertyTarget::Link => Ok(PropertyValue::Link(Link::external(text))),
        PropertyTarget::Number => text
            .trim()
            .parse::<f64>()
            .map(PropertyValue::Number)
            .map_err(|e| conversion_error(field, target, text, &e.to_string())),
        PropertyTarget::Integer => text
            .trim()
            .parse::<i64>()
            .map(PropertyValue::Integer)
            .map_err(|e| conversion_error(field, target, text, &e.to_string())),
        PropertyTarget::Boolean => parse_bool(text)
            .map(PropertyValue::Boolean)
            .ok_or_else(|| conversion_error(field, target, text, "expected 'true' or 'false'")),
        PropertyTarget::Date => parse_date(text)
            .map(PropertyValue::Date)
            .ok_or_else(|| conversion_error(field, target, text, "unrecognized date format")),
        _ => Err(unsupported(field, target, ctx)),
    }
}

fn convert_keyword(
    keyword: &Keyword,
    field: &Field,
    target: PropertyTarget,
    ctx: &MappingContext<'_>,
) -> Result<PropertyValue> {
    match target {
        PropertyTarget::Tag => Ok(PropertyValue::Tag(keyword_tag(keyword))),
        PropertyTarget::Boolean => {
            let text = keyword.key_or_title();
            parse_bool(text)
                .map(PropertyValue::Boolean)
                .ok_or_else(|| conversion_error(field, target, text, "expected 'true' or 'false'"))
        }
        PropertyTarget::Text => Ok(PropertyValue::Text(keyword.display_text().to_string())),
        _ => Err(unsupported(field, target, ctx)),
    }
}

pub(crate) fn keyword_tag(keyword: &Keyword) -> Tag {
    Tag {
        display_text: keyword.display_text().to_string(),
        key: keyword.key_or_id().to_string(),
        tag_category: (!keyword.taxonomy_id.is_empty()).then(|| keyword.taxonomy_id.clone()),
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.naive_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
