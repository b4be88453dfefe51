use serde::Deserialize;

/// Request body for create and update. An `id` field, if sent, is ignored.
/// Missing or null `name`/`email` read as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserBody {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserBody {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}
