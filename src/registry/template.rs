//! The resolved template record.

use serde::Serialize;

/// One named unit of template content.
///
/// A template's name is its wire-visible identity: the hosting layer
/// exposes one callable tool per template, keyed by this name.
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    /// Stable identifier, derived from the originating file name without
    /// its extension (or the last URL path segment).
    pub name: String,

    /// The full text body as retrieved. Never partial.
    pub content: String,

    /// The raw source descriptor this template came from, for diagnostics.
    pub origin: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_json() {
        let template = Template {
            name: "bug_report".to_string(),
            content: "# Bug report\n".to_string(),
            origin: "/tmp/templates".to_string(),
        };

        let json = serde_json::to_string(&template).unwrap();
        assert!(json.contains("\"name\":\"bug_report\""));
        assert!(json.contains("\"origin\":\"/tmp/templates\""));
    }
}
