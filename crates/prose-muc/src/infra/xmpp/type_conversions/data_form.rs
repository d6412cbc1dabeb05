// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use minidom::Element;
use tracing::debug;
use xmpp_parsers::data_forms;

use crate::domain::shared::models::{DataForm, DataFormType, FieldType, FormField, FormFieldOption};
use crate::infra::xmpp::{ns, ElementExt, ParseError};

impl TryFrom<&Element> for DataForm {
    type Error = ParseError;

    fn try_from(root: &Element) -> Result<Self, Self::Error> {
        root.expect_is("x", ns::DATA_FORMS)?;

        // xmpp_parsers neither knows about <desc/> nor about fields without a var, so these are
        // handled here before the form is handed over.
        let mut descriptions = HashMap::new();
        let mut form = Element::builder("x", ns::DATA_FORMS)
            .attr("type", root.attr("type"))
            .build();

        for child in root.children() {
            if !child.is("field", ns::DATA_FORMS) {
                form.append_child(child.clone());
                continue;
            }

            let Some(var) = child.attr("var") else {
                debug!("Ignoring data form field without var: {}", child.text().trim());
                continue;
            };

            let mut field = Element::builder("field", ns::DATA_FORMS)
                .attr("var", var)
                .attr("type", child.attr("type"))
                .attr("label", child.attr("label"))
                .build();

            for node in child.children() {
                if node.is("desc", ns::DATA_FORMS) {
                    if let Some(desc) = node.non_empty_text() {
                        descriptions.insert(var.to_string(), desc);
                    }
                    continue;
                }
                field.append_child(node.clone());
            }

            form.append_child(field);
        }

        let mut form = DataForm::from(data_forms::DataForm::try_from(form)?);

        for field in form.fields.iter_mut() {
            if let Some(var) = &field.var {
                field.description = descriptions.remove(var);
            }
        }

        Ok(form)
    }
}

impl From<&DataForm> for Element {
    fn from(form: &DataForm) -> Self {
        Element::from(data_forms::DataForm::from(form))
    }
}

impl From<DataForm> for Element {
    fn from(form: DataForm) -> Self {
        Element::from(&form)
    }
}

impl From<data_forms::DataForm> for DataForm {
    fn from(value: data_forms::DataForm) -> Self {
        DataForm {
            r#type: value.type_.into(),
            form_type: value.form_type,
            title: value.title.filter(|title| !title.is_empty()),
            instructions: value.instructions.filter(|text| !text.is_empty()),
            fields: value.fields.into_iter().map(FormField::from).collect(),
        }
    }
}

impl From<&DataForm> for data_forms::DataForm {
    fn from(value: &DataForm) -> Self {
        data_forms::DataForm {
            type_: value.r#type.into(),
            form_type: value.form_type.clone(),
            title: value.title.clone(),
            instructions: value.instructions.clone(),
            // Fields without a var can't be addressed by the receiver.
            fields: value
                .fields
                .iter()
                .filter_map(|field| {
                    let var = field.var.as_deref()?;
                    Some(data_forms::Field {
                        var: var.to_string(),
                        type_: field.r#type.into(),
                        label: field.label.clone(),
                        required: field.required,
                        options: field
                            .options
                            .iter()
                            .map(|option| data_forms::Option_ {
                                label: option.label.clone(),
                                value: option.value.clone(),
                            })
                            .collect(),
                        values: field.values.clone(),
                        media: vec![],
                    })
                })
                .collect(),
        }
    }
}

impl From<data_forms::Field> for FormField {
    fn from(value: data_forms::Field) -> Self {
        FormField {
            var: Some(value.var),
            r#type: value.type_.into(),
            label: value.label,
            description: None,
            required: value.required,
            options: value
                .options
                .into_iter()
                .map(|option| FormFieldOption {
                    label: option.label,
                    value: option.value,
                })
                .collect(),
            values: value.values,
        }
    }
}

impl From<data_forms::DataFormType> for DataFormType {
    fn from(value: data_forms::DataFormType) -> Self {
        match value {
            data_forms::DataFormType::Cancel => DataFormType::Cancel,
            data_forms::DataFormType::Form => DataFormType::Form,
            data_forms::DataFormType::Result_ => DataFormType::Result,
            data_forms::DataFormType::Submit => DataFormType::Submit,
        }
    }
}

impl From<DataFormType> for data_forms::DataFormType {
    fn from(value: DataFormType) -> Self {
        match value {
            DataFormType::Cancel => data_forms::DataFormType::Cancel,
            DataFormType::Form => data_forms::DataFormType::Form,
            DataFormType::Result => data_forms::DataFormType::Result_,
            DataFormType::Submit => data_forms::DataFormType::Submit,
        }
    }
}

impl From<data_forms::FieldType> for FieldType {
    fn from(value: data_forms::FieldType) -> Self {
        match value {
            data_forms::FieldType::Boolean => FieldType::Boolean,
            data_forms::FieldType::Fixed => FieldType::Fixed,
            data_forms::FieldType::Hidden => FieldType::Hidden,
            data_forms::FieldType::JidMulti => FieldType::JidMulti,
            data_forms::FieldType::JidSingle => FieldType::JidSingle,
            data_forms::FieldType::ListMulti => FieldType::ListMulti,
            data_forms::FieldType::ListSingle => FieldType::ListSingle,
            data_forms::FieldType::TextMulti => FieldType::TextMulti,
            data_forms::FieldType::TextPrivate => FieldType::TextPrivate,
            data_forms::FieldType::TextSingle => FieldType::TextSingle,
        }
    }
}

impl From<FieldType> for data_forms::FieldType {
    fn from(value: FieldType) -> Self {
        match value {
            FieldType::Boolean => data_forms::FieldType::Boolean,
            FieldType::Fixed => data_forms::FieldType::Fixed,
            FieldType::Hidden => data_forms::FieldType::Hidden,
            FieldType::JidMulti => data_forms::FieldType::JidMulti,
            FieldType::JidSingle => data_forms::FieldType::JidSingle,
            FieldType::ListMulti => data_forms::FieldType::ListMulti,
            FieldType::ListSingle => data_forms::FieldType::ListSingle,
            FieldType::TextMulti => data_forms::FieldType::TextMulti,
            FieldType::TextPrivate => data_forms::FieldType::TextPrivate,
            FieldType::TextSingle => data_forms::FieldType::TextSingle,
        }
    }
}
