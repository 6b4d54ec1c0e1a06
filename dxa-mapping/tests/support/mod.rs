//! Shared fixtures for the mapping integration tests
#![allow(dead_code)]

pub mod models;
pub mod spans;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use dxa_content::{
    FieldSemantics, Localization, Multimedia, SchemaDefinition, SchemaFieldDefinition,
    SchemaSemantics,
};
use dxa_mapping::{LinkResolver, MappingConfig, ModelBuilder, ModelTypeRegistry};
use dxa_vocab::{schema_org, topic};

pub const ARTICLE_SCHEMA: &str = "100";
pub const IMAGE_SCHEMA: &str = "102";
pub const RECIPE_SCHEMA: &str = "110";
pub const STEP_SCHEMA: &str = "111";
pub const SUPPLY_SCHEMA: &str = "112";
pub const HEADLINES_SCHEMA: &str = "120";
pub const CLASSIFIED_SCHEMA: &str = "130";
pub const PAGE_METADATA_SCHEMA: &str = "140";
pub const EVENT_SCHEMA: &str = "150";
pub const DOCUMENT_SCHEMA: &str = "160";
pub const RELATED_SCHEMA: &str = "170";
pub const PERSON_SCHEMA: &str = "180";
pub const CONTACT_SCHEMA: &str = "181";

/// Resolves the item ids it knows about
#[derive(Debug, Default)]
pub struct MapLinkResolver {
    urls: HashMap<String, String>,
}

impl MapLinkResolver {
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            urls: entries
                .into_iter()
                .map(|(id, url)| (id.to_string(), url.to_string()))
                .collect(),
        }
    }
}

impl LinkResolver for MapLinkResolver {
    fn resolve_link(&self, item_id: &str, _localization: &Localization) -> Option<String> {
        self.urls.get(item_id).cloned()
    }
}

fn s(entity: &str, property: &str) -> FieldSemantics {
    FieldSemantics::new(schema_org::PREFIX, entity, property)
}

fn article_schema() -> SchemaDefinition {
    SchemaDefinition::new(ARTICLE_SCHEMA, "Article")
        .with_semantics(SchemaSemantics::new(schema_org::PREFIX, "Article"))
        .with_field(
            SchemaFieldDefinition::new("headline", "/Article/headline")
                .with_semantics(s("Article", "headline")),
        )
        .with_field(
            SchemaFieldDefinition::new("image", "/Article/image").with_semantics(s("Article", "image")),
        )
        .with_field(
            SchemaFieldDefinition::new("alternativeHeadline", "/Article/alternativeHeadline")
                .with_semantics(s("Article", "alternativeHeadline")),
        )
        .with_field(SchemaFieldDefinition::new("title", "/Article/title"))
        .with_field(
            SchemaFieldDefinition::new("articleBody", "/Article/articleBody")
                .multi_value()
                .embedding("Paragraph")
                .with_semantics(s("Article", "articleBody"))
                .with_field(SchemaFieldDefinition::new(
                    "subheading",
                    "/Article/articleBody/subheading",
                ))
                .with_field(SchemaFieldDefinition::new("content", "/Article/articleBody/content"))
                .with_field(SchemaFieldDefinition::new("media", "/Article/articleBody/media"))
                .with_field(SchemaFieldDefinition::new("caption", "/Article/articleBody/caption")),
        )
        .with_field(
            SchemaFieldDefinition::new("dateCreated", "/Metadata/dateCreated")
                .with_semantics(s("Article", "dateCreated")),
        )
        .with_field(SchemaFieldDefinition::new("tag", "/Metadata/tag").multi_value())
}

fn image_schema() -> SchemaDefinition {
    SchemaDefinition::new(IMAGE_SCHEMA, "Image")
        .with_semantics(SchemaSemantics::new(schema_org::PREFIX, "ImageObject"))
        .with_field(SchemaFieldDefinition::new("altText", "/Metadata/altText"))
}

fn recipe_schemas() -> [SchemaDefinition; 3] {
    let recipe = SchemaDefinition::new(RECIPE_SCHEMA, "Recipe")
        .with_semantics(SchemaSemantics::new(schema_org::PREFIX, "Recipe"))
        .with_field(
            SchemaFieldDefinition::new("step", "/Recipe/step")
                .multi_value()
                .with_field(
                    SchemaFieldDefinition::new("name", "/Recipe/step/name")
                        .with_semantics(s("HowToStep", "name")),
                ),
        )
        .with_field(
            SchemaFieldDefinition::new("supply", "/Recipe/supply")
                .multi_value()
                .with_semantics(s("Recipe", "supply"))
                .with_field(
                    SchemaFieldDefinition::new("label", "/Recipe/supply/label")
                        .with_semantics(s("HowToSupply", "name")),
                ),
        );
    let step = SchemaDefinition::new(STEP_SCHEMA, "HowToStep")
        .with_semantics(SchemaSemantics::new(schema_org::PREFIX, "HowToStep"))
        .with_field(SchemaFieldDefinition::new("name", "/HowToStep/name"));
    let supply = SchemaDefinition::new(SUPPLY_SCHEMA, "HowToSupply")
        .with_semantics(SchemaSemantics::new(schema_org::PREFIX, "HowToSupply"))
        .with_field(SchemaFieldDefinition::new("label", "/HowToSupply/label"));
    [recipe, step, supply]
}

fn headlines_schema() -> SchemaDefinition {
    SchemaDefinition::new(HEADLINES_SCHEMA, "Headlines").with_field(
        SchemaFieldDefinition::new("articleHeadline", "/Headlines/articleHeadline").multi_value(),
    )
}

fn classified_schema() -> SchemaDefinition {
    ["category", "featured", "label", "rating", "price", "published"]
        .into_iter()
        .fold(SchemaDefinition::new(CLASSIFIED_SCHEMA, "Classified"), |schema, name| {
            schema.with_field(SchemaFieldDefinition::new(name, format!("/Classified/{name}")))
        })
}

fn page_metadata_schema() -> SchemaDefinition {
    SchemaDefinition::new(PAGE_METADATA_SCHEMA, "PageMetadata")
        .with_field(SchemaFieldDefinition::new("description", "/Metadata/description"))
}

/// Declares `s:Event` only, with a field claiming Article semantics
fn event_schema() -> SchemaDefinition {
    SchemaDefinition::new(EVENT_SCHEMA, "Event")
        .with_semantics(SchemaSemantics::new(schema_org::PREFIX, "Event"))
        .with_field(
            SchemaFieldDefinition::new("title", "/Event/title").with_semantics(s("Article", "headline")),
        )
        .with_field(SchemaFieldDefinition::new("headline", "/Event/headline"))
}

/// Embedded field published without an embedded schema
fn document_schema() -> SchemaDefinition {
    SchemaDefinition::new(DOCUMENT_SCHEMA, "Doc")
        .with_field(SchemaFieldDefinition::new("title", "/Doc/title"))
        .with_field(
            SchemaFieldDefinition::new("body", "/Doc/body")
                .multi_value()
                .with_field(SchemaFieldDefinition::new("title", "/Doc/body/title")),
        )
}

fn related_schema() -> SchemaDefinition {
    SchemaDefinition::new(RELATED_SCHEMA, "Related")
        .with_field(SchemaFieldDefinition::new("link", "/Related/link").multi_value())
}

fn person_schemas() -> [SchemaDefinition; 2] {
    let person = SchemaDefinition::new(PERSON_SCHEMA, "Person")
        .with_semantics(SchemaSemantics::new(schema_org::PREFIX, "Person"))
        .with_field(SchemaFieldDefinition::new("mail", "/Person/mail").with_semantics(s("Person", "mail")))
        .with_field(
            SchemaFieldDefinition::new("email", "/Person/email").with_semantics(s("Person", "email")),
        );
    let contact = SchemaDefinition::new(CONTACT_SCHEMA, "Contact")
        .with_semantics(SchemaSemantics::new(schema_org::PREFIX, "Contact"))
        .with_field(
            SchemaFieldDefinition::new("mail", "/Contact/mail").with_semantics(s("Contact", "mail")),
        )
        .with_field(
            SchemaFieldDefinition::new("email", "/Contact/email").with_semantics(s("Contact", "email")),
        );
    [person, contact]
}

/// Localization publishing every fixture schema
pub fn localization() -> Localization {
    let [recipe, step, supply] = recipe_schemas();
    let [person, contact] = person_schemas();
    Localization::new("1")
        .with_vocabulary(schema_org::PREFIX, schema_org::VOCABULARY)
        .with_vocabulary(topic::PREFIX, topic::VOCABULARY)
        .with_schema(article_schema())
        .with_schema(image_schema())
        .with_schema(recipe)
        .with_schema(step)
        .with_schema(supply)
        .with_schema(headlines_schema())
        .with_schema(classified_schema())
        .with_schema(page_metadata_schema())
        .with_schema(event_schema())
        .with_schema(document_schema())
        .with_schema(related_schema())
        .with_schema(person)
        .with_schema(contact)
}

/// Registry of the model types most tests map onto
pub fn registry() -> ModelTypeRegistry {
    let mut builder = ModelTypeRegistry::builder(MappingConfig::default());
    builder.register::<models::Article>().unwrap();
    builder.register::<models::Teaser>().unwrap();
    builder.register::<models::Headlines>().unwrap();
    builder.register::<models::Classified>().unwrap();
    builder.register::<models::Misdated>().unwrap();
    builder.register::<models::Recipe>().unwrap();
    builder.register::<models::PageMeta>().unwrap();
    builder.register::<models::Figure>().unwrap();
    builder.build()
}

pub fn model_builder(resolver: MapLinkResolver) -> ModelBuilder {
    ModelBuilder::new(Arc::new(registry()), Arc::new(resolver))
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap()
}

pub fn multimedia(url: &str, file_name: &str, size: u64, mime_type: &str) -> Multimedia {
    Multimedia {
        url: url.to_string(),
        file_name: file_name.to_string(),
        size,
        mime_type: mime_type.to_string(),
    }
}
