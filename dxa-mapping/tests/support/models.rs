//! View models used across the integration tests

use std::collections::HashMap;

use chrono::NaiveDateTime;
use dxa_mapping::semantics::{
    PropertyDeclaration, PropertyTarget, SemanticDefaults, SemanticEntity, TypeSemantics,
};
use dxa_mapping::{
    DxaError, Link, MediaItem, ModelKind, PropertyMetadata, PropertyValue, Result, RichText,
    SemanticModel, Tag, ViewModel,
};
use dxa_vocab::{schema_org, topic};

fn schema_org_entity(name: &str) -> SemanticEntity {
    SemanticEntity::new(schema_org::VOCABULARY, name)
        .prefix(schema_org::PREFIX)
        .public()
}

// =============================================================================
// Article, Paragraph, Image
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    pub media: MediaItem,
    pub alt_text: Option<String>,
}

impl ViewModel for Image {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "alt_text" => self.alt_text = value.extract()?,
            _ => return Err(DxaError::unknown_property("Image", property)),
        }
        Ok(())
    }

    fn set_id(&mut self, id: &str) {
        self.media.id = Some(id.to_string());
    }

    fn set_property_metadata(&mut self, metadata: PropertyMetadata) {
        self.media.property_metadata = metadata;
    }

    fn media_item_mut(&mut self) -> Option<&mut MediaItem> {
        Some(&mut self.media)
    }
}

impl SemanticModel for Image {
    const KIND: ModelKind = ModelKind::Media;

    fn semantics() -> TypeSemantics {
        TypeSemantics::new()
            .entity(schema_org_entity("ImageObject"))
            .property(PropertyDeclaration::new("alt_text", PropertyTarget::Text))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub subheading: Option<String>,
    pub content: Option<RichText>,
    pub media: Option<Image>,
    pub caption: Option<String>,
}

impl ViewModel for Paragraph {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "subheading" => self.subheading = value.extract()?,
            "content" => self.content = value.extract()?,
            "media" => self.media = Some(value.into_model()?),
            "caption" => self.caption = value.extract()?,
            _ => return Err(DxaError::unknown_property("Paragraph", property)),
        }
        Ok(())
    }
}

impl SemanticModel for Paragraph {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new()
            .property(PropertyDeclaration::new("subheading", PropertyTarget::Text))
            .property(PropertyDeclaration::new("content", PropertyTarget::RichText))
            .property(PropertyDeclaration::new("media", PropertyTarget::entity::<Image>()))
            .property(PropertyDeclaration::new("caption", PropertyTarget::Text))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Article {
    pub id: Option<String>,
    pub headline: Option<String>,
    pub image: Option<Image>,
    pub date_created: Option<NaiveDateTime>,
    pub body: Vec<Paragraph>,
    pub tags: Vec<Tag>,
    pub self_link: Option<Link>,
    pub settings: HashMap<String, String>,
    pub metadata: PropertyMetadata,
}

impl ViewModel for Article {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "headline" => self.headline = value.extract()?,
            "image" => self.image = Some(value.into_model()?),
            "date_created" => self.date_created = value.extract()?,
            "body" => self.body = value.into_models()?,
            "tags" => self.tags = value.extract()?,
            "self_link" => self.self_link = value.extract()?,
            "settings" => self.settings = value.extract()?,
            _ => return Err(DxaError::unknown_property("Article", property)),
        }
        Ok(())
    }

    fn set_id(&mut self, id: &str) {
        self.id = Some(id.to_string());
    }

    fn set_property_metadata(&mut self, metadata: PropertyMetadata) {
        self.metadata = metadata;
    }
}

impl SemanticModel for Article {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new()
            .entity(schema_org_entity("Article"))
            .property(PropertyDeclaration::new("headline", PropertyTarget::Text).semantic("s:headline"))
            .property(
                PropertyDeclaration::new("image", PropertyTarget::entity::<Image>())
                    .semantic("s:image"),
            )
            .property(
                PropertyDeclaration::new("date_created", PropertyTarget::Date)
                    .semantic("s:dateCreated"),
            )
            .property(
                PropertyDeclaration::new("body", PropertyTarget::entity::<Paragraph>())
                    .list()
                    .semantic("s:articleBody"),
            )
            .property(PropertyDeclaration::new("tags", PropertyTarget::Tag).list())
            .property(PropertyDeclaration::new("self_link", PropertyTarget::Link).self_entity())
            .property(PropertyDeclaration::new("settings", PropertyTarget::Dictionary).all_fields())
    }
}

// =============================================================================
// Teaser: same semantic entity as Article, fewer properties
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Teaser {
    pub headline: Option<String>,
    pub url: Option<String>,
}

impl ViewModel for Teaser {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "headline" => self.headline = value.extract()?,
            "url" => self.url = value.extract()?,
            _ => return Err(DxaError::unknown_property("Teaser", property)),
        }
        Ok(())
    }
}

impl SemanticModel for Teaser {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new()
            .entity(schema_org_entity("Article"))
            .property(PropertyDeclaration::new("headline", PropertyTarget::Text).semantic("s:headline"))
            .property(PropertyDeclaration::new("url", PropertyTarget::Text).self_entity())
    }
}

/// Several explicit candidates for one property
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Byline {
    pub title: Option<String>,
}

impl ViewModel for Byline {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "title" => self.title = value.extract()?,
            _ => return Err(DxaError::unknown_property("Byline", property)),
        }
        Ok(())
    }
}

impl SemanticModel for Byline {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new().entity(schema_org_entity("Article")).property(
            PropertyDeclaration::new("title", PropertyTarget::Text)
                .semantic("s:alternativeHeadline")
                .semantic("s:headline"),
        )
    }
}

/// Maps a multimedia item itself onto a media property
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    pub image: Option<Image>,
    pub caption: Option<String>,
}

impl ViewModel for Figure {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "image" => self.image = Some(value.into_model()?),
            "caption" => self.caption = value.extract()?,
            _ => return Err(DxaError::unknown_property("Figure", property)),
        }
        Ok(())
    }
}

impl SemanticModel for Figure {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new()
            .property(PropertyDeclaration::new("image", PropertyTarget::entity::<Image>()).self_entity())
            .property(PropertyDeclaration::new("caption", PropertyTarget::Text))
    }
}

// =============================================================================
// Headlines: implicit property naming of list properties
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Headlines {
    pub article_headlines: Vec<String>,
}

impl ViewModel for Headlines {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "ArticleHeadlines" => self.article_headlines = value.extract()?,
            _ => return Err(DxaError::unknown_property("Headlines", property)),
        }
        Ok(())
    }
}

impl SemanticModel for Headlines {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new().property(PropertyDeclaration::new("ArticleHeadlines", PropertyTarget::Text).list())
    }
}

// =============================================================================
// Classified: keyword, number and text conversions
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classified {
    pub category: Option<Tag>,
    pub featured: Option<bool>,
    pub label: Option<String>,
    pub rating: Option<i64>,
    pub price: Option<f64>,
    pub published: Option<NaiveDateTime>,
    pub all_tags: HashMap<String, Tag>,
}

impl ViewModel for Classified {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "category" => self.category = value.extract()?,
            "featured" => self.featured = value.extract()?,
            "label" => self.label = value.extract()?,
            "rating" => self.rating = value.extract()?,
            "price" => self.price = value.extract()?,
            "published" => self.published = value.extract()?,
            "all_tags" => self.all_tags = value.extract()?,
            _ => return Err(DxaError::unknown_property("Classified", property)),
        }
        Ok(())
    }
}

impl SemanticModel for Classified {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new()
            .property(PropertyDeclaration::new("category", PropertyTarget::Tag))
            .property(PropertyDeclaration::new("featured", PropertyTarget::Boolean))
            .property(PropertyDeclaration::new("label", PropertyTarget::Text))
            .property(PropertyDeclaration::new("rating", PropertyTarget::Integer))
            .property(PropertyDeclaration::new("price", PropertyTarget::Number))
            .property(PropertyDeclaration::new("published", PropertyTarget::Date))
            .property(PropertyDeclaration::new("all_tags", PropertyTarget::TagDictionary).all_fields())
    }
}

/// Maps a keyword field onto a date property
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Misdated {
    pub category: Option<NaiveDateTime>,
}

impl ViewModel for Misdated {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "category" => self.category = value.extract()?,
            _ => return Err(DxaError::unknown_property("Misdated", property)),
        }
        Ok(())
    }
}

impl SemanticModel for Misdated {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new().property(PropertyDeclaration::new("category", PropertyTarget::Date))
    }
}

// =============================================================================
// Recipe: sibling embedded types sharing a property name
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Step {
    pub name: Option<String>,
}

impl ViewModel for Step {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "name" => self.name = value.extract()?,
            _ => return Err(DxaError::unknown_property("Step", property)),
        }
        Ok(())
    }
}

impl SemanticModel for Step {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new()
            .entity(schema_org_entity("HowToStep"))
            .defaults(SemanticDefaults::default().explicit_only())
            .property(PropertyDeclaration::new("name", PropertyTarget::Text).semantic("s:name"))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Supply {
    pub name: Option<String>,
}

impl ViewModel for Supply {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "name" => self.name = value.extract()?,
            _ => return Err(DxaError::unknown_property("Supply", property)),
        }
        Ok(())
    }
}

impl SemanticModel for Supply {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new()
            .entity(schema_org_entity("HowToSupply"))
            .defaults(SemanticDefaults::default().explicit_only())
            .property(PropertyDeclaration::new("name", PropertyTarget::Text).semantic("s:name"))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recipe {
    pub steps: Vec<Step>,
    pub supplies: Vec<Supply>,
}

impl ViewModel for Recipe {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "steps" => self.steps = value.into_models()?,
            "supplies" => self.supplies = value.into_models()?,
            _ => return Err(DxaError::unknown_property("Recipe", property)),
        }
        Ok(())
    }
}

impl SemanticModel for Recipe {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new()
            .entity(schema_org_entity("Recipe"))
            .property(PropertyDeclaration::new("steps", PropertyTarget::entity::<Step>()).list())
            .property(
                PropertyDeclaration::new("supplies", PropertyTarget::entity::<Supply>())
                    .list()
                    .semantic("s:supply"),
            )
    }
}

// =============================================================================
// Page metadata
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    pub id: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub meta: HashMap<String, String>,
}

impl ViewModel for PageMeta {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "description" => self.description = value.extract()?,
            "url" => self.url = value.extract()?,
            "meta" => self.meta = value.extract()?,
            _ => return Err(DxaError::unknown_property("PageMeta", property)),
        }
        Ok(())
    }

    fn set_id(&mut self, id: &str) {
        self.id = Some(id.to_string());
    }
}

impl SemanticModel for PageMeta {
    const KIND: ModelKind = ModelKind::Page;

    fn semantics() -> TypeSemantics {
        TypeSemantics::new()
            .property(PropertyDeclaration::new("description", PropertyTarget::Text))
            .property(PropertyDeclaration::new("url", PropertyTarget::Text).self_entity())
            .property(PropertyDeclaration::new("meta", PropertyTarget::Dictionary).all_fields())
    }
}

// =============================================================================
// Topics
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicBody {
    pub body: Option<String>,
}

impl ViewModel for TopicBody {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "body" => self.body = value.extract()?,
            _ => return Err(DxaError::unknown_property("TopicBody", property)),
        }
        Ok(())
    }
}

impl SemanticModel for TopicBody {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new()
            .entity(SemanticEntity::new(topic::VOCABULARY, "Body").prefix(topic::PREFIX).public())
            .property(PropertyDeclaration::new("body", PropertyTarget::Text).semantic("dita:body"))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OtherTopicBody;

impl ViewModel for OtherTopicBody {
    fn set_property(&mut self, property: &str, _value: PropertyValue) -> Result<()> {
        Err(DxaError::unknown_property("OtherTopicBody", property))
    }
}

impl SemanticModel for OtherTopicBody {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new()
            .entity(SemanticEntity::new(topic::VOCABULARY, "Body").prefix(topic::PREFIX).public())
    }
}

// =============================================================================
// Invalid declarations
// =============================================================================

/// Binds one prefix to two vocabularies
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrefixClash;

impl ViewModel for PrefixClash {
    fn set_property(&mut self, property: &str, _value: PropertyValue) -> Result<()> {
        Err(DxaError::unknown_property("PrefixClash", property))
    }
}

impl SemanticModel for PrefixClash {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new()
            .entity(schema_org_entity("Thing"))
            .entity(SemanticEntity::new("http://example.com/vocab/", "Thing").prefix("s").public())
    }
}

/// Embeds a type whose declarations are invalid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClashContainer {
    pub clash: Option<String>,
}

impl ViewModel for ClashContainer {
    fn set_property(&mut self, property: &str, _value: PropertyValue) -> Result<()> {
        Err(DxaError::unknown_property("ClashContainer", property))
    }
}

impl SemanticModel for ClashContainer {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new().property(PropertyDeclaration::new(
            "clash",
            PropertyTarget::entity::<PrefixClash>(),
        ))
    }
}

// =============================================================================
// Default prefix, plain embedded fields, links
// =============================================================================

/// Unprefixed declaration listed before a prefixed one
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub email: Option<String>,
}

impl ViewModel for Person {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "email" => self.email = value.extract()?,
            _ => return Err(DxaError::unknown_property("Person", property)),
        }
        Ok(())
    }
}

impl SemanticModel for Person {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new()
            .entity(schema_org_entity("Person"))
            .defaults(SemanticDefaults::new(schema_org::PREFIX))
            .property(
                PropertyDeclaration::new("email", PropertyTarget::Text)
                    .semantic("mail")
                    .semantic("s:email"),
            )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub title: Option<String>,
}

impl ViewModel for Section {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "title" => self.title = value.extract()?,
            _ => return Err(DxaError::unknown_property("Section", property)),
        }
        Ok(())
    }
}

impl SemanticModel for Section {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new().property(PropertyDeclaration::new("title", PropertyTarget::Text))
    }
}

/// Embeds sections through a field without embedded schema
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub title: Option<String>,
    pub body: Vec<Section>,
}

impl ViewModel for Document {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "title" => self.title = value.extract()?,
            "body" => self.body = value.into_models()?,
            _ => return Err(DxaError::unknown_property("Document", property)),
        }
        Ok(())
    }
}

impl SemanticModel for Document {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new()
            .property(PropertyDeclaration::new("title", PropertyTarget::Text))
            .property(PropertyDeclaration::new("body", PropertyTarget::entity::<Section>()).list())
    }
}

/// One link field mapped as a single URL and as a list of URLs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Related {
    pub link: Option<String>,
    pub links: Vec<String>,
}

impl ViewModel for Related {
    fn set_property(&mut self, property: &str, value: PropertyValue) -> Result<()> {
        match property {
            "link" => self.link = value.extract()?,
            "links" => self.links = value.extract()?,
            _ => return Err(DxaError::unknown_property("Related", property)),
        }
        Ok(())
    }
}

impl SemanticModel for Related {
    fn semantics() -> TypeSemantics {
        TypeSemantics::new()
            .property(PropertyDeclaration::new("link", PropertyTarget::Text))
            .property(PropertyDeclaration::new("links", PropertyTarget::Text).list())
    }
}
