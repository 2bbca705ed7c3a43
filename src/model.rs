use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

/// One detected software component, as listed in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: Option<String>,
    pub version: Option<String>,
    pub kind: Option<String>,
}

impl Component {
    pub fn new(name: &str, version: &str, kind: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            version: Some(version.to_string()),
            kind: Some(kind.to_string()),
        }
    }

    /// Cell values in column order: name, version, type.
    pub fn fields(&self) -> [Option<&str>; 3] {
        [self.name.as_deref(), self.version.as_deref(), self.kind.as_deref()]
    }
}

#[derive(Debug, Deserialize)]
struct ScanDocument {
    #[serde(default)]
    artifacts: Vec<Artifact>,
}

#[derive(Debug, Deserialize)]
struct Artifact {
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    version: Option<Value>,
    #[serde(default, rename = "type")]
    kind: Option<Value>,
}

impl From<Artifact> for Component {
    fn from(artifact: Artifact) -> Self {
        Component {
            name: field_text(artifact.name),
            version: field_text(artifact.version),
            kind: field_text(artifact.kind),
        }
    }
}

fn field_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

/// Components decoded from a scanner's JSON output, in scanner order.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub components: Vec<Component>,
}

impl Inventory {
    pub fn from_json(text: &str) -> Result<Self, AppError> {
        let document: ScanDocument = serde_json::from_str(text)?;
        let components = document.artifacts.into_iter().map(Component::from).collect();
        Ok(Self { components })
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_name_version_and_type() {
        let inventory = Inventory::from_json(
            r#"{"artifacts":[{"id":"abc","name":"curl","version":"7.85","type":"deb","licenses":[]}]}"#,
        )
        .unwrap();

        assert_eq!(inventory.components, vec![Component::new("curl", "7.85", "deb")]);
    }

    #[test]
    fn missing_and_null_fields_become_none() {
        let inventory = Inventory::from_json(
            r#"{"artifacts":[{"name":"busybox"},{"name":"zlib","version":null,"type":"apk"}]}"#,
        )
        .unwrap();

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.components[0].fields(), [Some("busybox"), None, None]);
        assert_eq!(inventory.components[1].fields(), [Some("zlib"), None, Some("apk")]);
    }

    #[test]
    fn duplicates_keep_their_order() {
        let inventory = Inventory::from_json(
            r#"{"artifacts":[
                {"name":"openssl","version":"3.0","type":"deb"},
                {"name":"bash","version":"5.2","type":"deb"},
                {"name":"openssl","version":"3.0","type":"deb"}
            ]}"#,
        )
        .unwrap();

        let names: Vec<_> = inventory.components.iter().map(|c| c.name.as_deref()).collect();
        assert_eq!(names, vec![Some("openssl"), Some("bash"), Some("openssl")]);
    }

    #[test]
    fn non_string_scalars_keep_their_json_text() {
        let inventory =
            Inventory::from_json(r#"{"artifacts":[{"name":"legacy","version":2,"type":true}]}"#)
                .unwrap();

        assert_eq!(inventory.components[0].fields(), [Some("legacy"), Some("2"), Some("true")]);
    }

    #[test]
    fn missing_artifacts_key_is_empty() {
        let inventory = Inventory::from_json(r#"{"source":{"type":"image"}}"#).unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn malformed_output_is_a_parse_error() {
        for text in ["not json at all", "[1, 2, 3]", r#"{"artifacts": "nope"}"#, ""] {
            let err = Inventory::from_json(text).unwrap_err();
            assert!(matches!(err, AppError::Parse(_)), "expected parse error for {text:?}");
        }
    }
}
