// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumString};

/// The kind of a Data Form (XEP-0004).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DataFormType {
    Cancel,
    Form,
    Result,
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum FieldType {
    Boolean,
    Fixed,
    Hidden,
    JidMulti,
    JidSingle,
    ListMulti,
    ListSingle,
    TextMulti,
    TextPrivate,
    #[default]
    TextSingle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldOption {
    pub label: Option<String>,
    pub value: String,
}

impl FormFieldOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: value.into(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormField {
    pub var: Option<String>,
    pub r#type: FieldType,
    pub label: Option<String>,
    pub description: Option<String>,
    pub required: bool,
    pub options: Vec<FormFieldOption>,
    pub values: Vec<String>,
}

impl FormField {
    pub fn new(var: impl Into<String>, r#type: FieldType) -> Self {
        Self {
            var: Some(var.into()),
            r#type,
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = FormFieldOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The first value of the field or an empty string.
    pub fn first_value(&self) -> &str {
        self.values.first().map(String::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataForm {
    pub r#type: DataFormType,
    pub form_type: Option<String>,
    pub title: Option<String>,
    pub instructions: Option<String>,
    pub fields: Vec<FormField>,
}

impl DataForm {
    pub fn new(r#type: DataFormType) -> Self {
        Self {
            r#type,
            form_type: None,
            title: None,
            instructions: None,
            fields: vec![],
        }
    }

    pub fn with_form_type(mut self, form_type: impl Into<String>) -> Self {
        self.form_type = Some(form_type.into());
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FormField>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn field(&self, var: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.var.as_deref() == Some(var))
    }
}
