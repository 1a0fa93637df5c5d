use serde::{Deserialize, Serialize};

/// Layer decoded by a frame source that has no dedicated field group type.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Generic {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<(String, String)>,
}

impl Generic {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}
