use serde::Serialize;
use uuid::Uuid;

/// Input widget class for a user-defined field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Dropdown,
    Checkbox,
    Textarea,
}

impl FieldType {
    pub fn label(self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Number => "Number",
            FieldType::Dropdown => "Dropdown",
            FieldType::Checkbox => "Checkbox",
            FieldType::Textarea => "Text Area",
        }
    }
}

/// A user-defined form field as committed by the add-field dialog.
/// Immutable once created; removal from the owning list is the only
/// lifecycle event after that.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Dropdown choices; always empty for other field types.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl CustomField {
    /// Builds a field the way the dialog commits one: fresh id, options
    /// kept only for dropdowns, trimmed with empty entries discarded.
    pub fn new(
        label: impl Into<String>,
        field_type: FieldType,
        required: bool,
        default_value: Option<String>,
        options: Vec<String>,
    ) -> Self {
        let options = if field_type == FieldType::Dropdown {
            options
                .into_iter()
                .map(|option| option.trim().to_string())
                .filter(|option| !option.is_empty())
                .collect()
        } else {
            Vec::new()
        };
        Self {
            id: Uuid::new_v4().to_string(),
            label: label.into(),
            field_type,
            required,
            default_value: default_value.filter(|value| !value.is_empty()),
            options,
        }
    }

    /// The value a record's field map is seeded with when this field is applied.
    pub fn default_value_or_empty(&self) -> String {
        self.default_value.clone().unwrap_or_default()
    }
}
