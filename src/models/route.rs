//! Navigation targets handed to the navigation layer.

use serde::Serialize;
use serde_json::{Map, Value};

/// Screen names agreed with the navigation layer.
///
/// Opaque contract strings: this core produces them but does not
/// enumerate or validate the navigator's full set.
pub mod screens {
    /// Full onboarding restart (initial profile creation)
    pub const CREATE_PROFILE: &str = "CreateProfileScreen";
    /// Pick "find" vs "manage"
    pub const CATEGORY_SELECTION: &str = "CategorySelectionScreen";
    /// Pick interest events; expects a `selectedCategory` param
    pub const SELECT_EVENT: &str = "SelectEventScreen";
    /// Main application shell
    pub const BOTTOM_TABS: &str = "BottomTabBar";
}

/// A screen plus optional parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteTarget {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
}

impl RouteTarget {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            params: None,
        }
    }

    /// Target with a single parameter.
    pub fn with_param(name: &str, key: &str, value: impl Into<Value>) -> Self {
        let mut params = Map::new();
        params.insert(key.to_string(), value.into());
        Self {
            name: name.to_string(),
            params: Some(params),
        }
    }

    /// Look up a parameter by key.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.as_ref().and_then(|p| p.get(key))
    }
}
