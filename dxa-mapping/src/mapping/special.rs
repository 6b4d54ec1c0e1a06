//! Reserved-name properties: `_self` and `_all`

use std::collections::HashMap;

use dxa_content::{Field, FieldValues};
use dxa_vocab::reserved;
use tracing::debug;

use super::context::{MappingContext, SourceEntity};
use super::fields::keyword_tag;
use crate::builder::ModelBuilder;
use crate::error::Result;
use crate::model::{Link, PropertyValue};
use crate::semantics::{MappingStrategy, PropertyMapping, PropertyTarget};

impl ModelBuilder {
    /// Map a property no field resolved through its reserved-name strategy
    pub(crate) fn map_special_property(
        &self,
        property: &PropertyMapping,
        ctx: &MappingContext<'_>,
    ) -> Result<Option<PropertyValue>> {
        let Some(source) = ctx.source else {
            return Ok(None);
        };
        let value = match property.special_strategy() {
            Some(MappingStrategy::SelfEntity) => self.map_self(property, source, ctx)?,
            Some(MappingStrategy::AllFields) => Some(map_all_fields(property.target, source)),
            _ => None,
        };
        Ok(match value {
            Some(value) if property.is_list => Some(PropertyValue::List(vec![value])),
            other => other,
        })
    }

    fn map_self(
        &self,
        property: &PropertyMapping,
        source: SourceEntity<'_>,
        ctx: &MappingContext<'_>,
    ) -> Result<Option<PropertyValue>> {
        match property.target {
            PropertyTarget::Text => Ok(self
                .link_resolver
                .resolve_link(source.id(), ctx.localization)
                .map(PropertyValue::Text)),
            PropertyTarget::Link => Ok(Some(PropertyValue::Link(Link {
                id: Some(source.id().to_string()),
                url: self.link_resolver.resolve_link(source.id(), ctx.localization),
                link_text: None,
            }))),
            PropertyTarget::Entity(model_type) => {
                let eligible = match source {
                    SourceEntity::Component(_) => {
                        !model_type.is_media() || source.multimedia().is_some()
                    }
                    SourceEntity::Page(_) => false,
                };
                if !eligible {
                    debug!(
                        property = %property.name,
                        model_type = model_type.name(),
                        item_id = source.id(),
                        "item does not fit the model type of a _self property"
                    );
                    return Ok(None);
                }
                let info = self.registry.semantic_info(model_type)?;
                let model = self.create_view_model(&ctx.retarget(info))?;
                Ok(Some(PropertyValue::Entity(model)))
            }
            _ => Ok(None),
        }
    }
}

/// Collect the content and metadata fields of an item into a dictionary
///
/// The first field of a name wins. A `settings` field of embedded
/// name/value pairs contributes one entry per distinct name.
fn map_all_fields(target: PropertyTarget, source: SourceEntity<'_>) -> PropertyValue {
    let fields = source
        .content()
        .into_iter()
        .flat_map(|content| content.iter())
        .chain(source.metadata().iter());

    if target == PropertyTarget::TagDictionary {
        let mut tags = HashMap::new();
        for field in fields {
            if let FieldValues::Keyword(keywords) = &field.values {
                if let Some(keyword) = keywords.first() {
                    tags.entry(field.name.clone())
                        .or_insert_with(|| keyword_tag(keyword));
                }
            }
        }
        return PropertyValue::TagDictionary(tags);
    }

    let mut entries = HashMap::new();
    for field in fields {
        if field.name == reserved::SETTINGS_FIELD {
            if let FieldValues::Embedded(settings) = &field.values {
                for setting in settings {
                    let Some(name) = setting.get(reserved::SETTINGS_NAME).and_then(Field::first_string) else {
                        continue;
                    };
                    let value = setting
                        .get(reserved::SETTINGS_VALUE)
                        .and_then(Field::first_string)
                        .unwrap_or_default();
                    entries.entry(name).or_insert(value);
                }
                continue;
            }
        }
        if let Some(value) = field.first_string() {
            entries.entry(field.name.clone()).or_insert(value);
        }
    }
    PropertyValue::Dictionary(entries)
}
