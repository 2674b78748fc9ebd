use bevy_ecs::prelude::Component;

/// Human readable entity name, shown by debug views.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct EntityName(pub String);

impl EntityName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
