use serde::{
    Serialize,
    Deserialize
};

/// The `name` key every managed JSON entry carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedJsonObject {
    name: String
}


impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
