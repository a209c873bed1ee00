use crate::error::RowError;
use crate::types::TagName;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: TagName,
    images: String,
    aliases: Vec<String>,
}

impl Tag {
    pub fn new(name: TagName, images: impl Into<String>, aliases: Vec<String>) -> Self {
        Self {
            name,
            images: images.into(),
            aliases,
        }
    }

    /// Builds a tag from one table row.
    ///
    /// - Field 0 is the name, field 1 the images payload (kept verbatim).
    /// - Fields from index 2 on are aliases, up to the first empty field.
    ///   Anything after that empty field is ignored for this row.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, RowError> {
        let [name, images, rest @ ..] = fields else {
            return Err(RowError::TooFewFields {
                found: fields.len(),
            });
        };

        let name = TagName::try_new(name.as_ref().to_string()).map_err(|_| RowError::EmptyName)?;
        let aliases = rest
            .iter()
            .map(AsRef::as_ref)
            .take_while(|field| !field.is_empty())
            .map(normalize_alias)
            .collect();

        Ok(Self::new(name, images.as_ref(), aliases))
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Opaque display payload, passed through unmodified.
    pub fn images(&self) -> &str {
        &self.images
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

/// Lowercases (ASCII) and strips every `"` from an alias field.
pub fn normalize_alias(field: &str) -> String {
    field
        .chars()
        .filter(|&c| c != '"')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
