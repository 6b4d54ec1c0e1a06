//! View identities

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::config::MappingConfig;

/// Identity of a view: area, controller and view name plus rendering hints
///
/// Equality and hashing consider area, controller and view name only;
/// action, region and route values do not distinguish views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MvcData {
    pub area_name: String,
    pub controller_name: String,
    pub view_name: String,
    #[serde(default)]
    pub action_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub route_values: BTreeMap<String, String>,
}

impl MvcData {
    pub fn new(
        area_name: impl Into<String>,
        controller_name: impl Into<String>,
        view_name: impl Into<String>,
    ) -> Self {
        Self {
            area_name: area_name.into(),
            controller_name: controller_name.into(),
            view_name: view_name.into(),
            ..Default::default()
        }
    }

    /// Parse a qualified view name
    ///
    /// Accepts `Area:Controller:View`, `Area:View` and `View`; missing parts
    /// and the action come from the configuration defaults.
    pub fn parse(qualified_name: &str, config: &MappingConfig) -> Self {
        let parts: Vec<&str> = qualified_name.split(':').map(str::trim).collect();
        let (area, controller, view) = match parts.as_slice() {
            [area, controller, view] => (*area, *controller, *view),
            [area, view] => (*area, config.default_controller.as_str(), *view),
            _ => (
                config.default_area.as_str(),
                config.default_controller.as_str(),
                qualified_name.trim(),
            ),
        };
        Self::new(area, controller, view).with_action(config.default_action.as_str())
    }

    pub fn with_action(mut self, action_name: impl Into<String>) -> Self {
        self.action_name = action_name.into();
        self
    }

    pub fn with_region(mut self, region_name: impl Into<String>) -> Self {
        self.region_name = Some(region_name.into());
        self
    }

    pub fn with_route_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.route_values.insert(key.into(), value.into());
        self
    }
}

impl PartialEq for MvcData {
    fn eq(&self, other: &Self) -> bool {
        self.area_name == other.area_name
            && self.controller_name == other.controller_name
            && self.view_name == other.view_name
    }
}

impl Eq for MvcData {}

impl Hash for MvcData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.area_name.hash(state);
        self.controller_name.hash(state);
        self.view_name.hash(state);
    }
}

impl fmt::Display for MvcData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.area_name, self.controller_name, self.view_name)
    }
}
