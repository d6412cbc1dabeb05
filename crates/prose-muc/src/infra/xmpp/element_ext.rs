// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::{Element, NSChoice};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParseError {
    #[error("Parse error: {msg}")]
    Generic { msg: String },
    #[error(transparent)]
    ParseIntError(#[from] std::num::ParseIntError),
    #[error(transparent)]
    JidError(#[from] jid::Error),
}

impl From<xmpp_parsers::Error> for ParseError {
    fn from(value: xmpp_parsers::Error) -> Self {
        Self::Generic {
            msg: value.to_string(),
        }
    }
}

pub trait ElementExt {
    fn expect_is<'a>(
        &self,
        name: impl AsRef<str>,
        ns: impl Into<NSChoice<'a>>,
    ) -> Result<(), ParseError>;

    fn attr_req(&self, name: impl AsRef<str>) -> Result<&str, ParseError>;

    fn non_empty_text(&self) -> Option<String>;
}

impl ElementExt for Element {
    fn expect_is<'a>(
        &self,
        name: impl AsRef<str>,
        ns: impl Into<NSChoice<'a>>,
    ) -> Result<(), ParseError> {
        let ns = ns.into();
        if !self.is(&name, ns) {
            return Err(ParseError::Generic {
                msg: format!(
                    "Expected element with name {} and namespace {}. Got {} and {} instead.",
                    name.as_ref(),
                    ns_choice_to_string(ns),
                    self.name(),
                    self.ns()
                ),
            });
        }
        Ok(())
    }

    fn attr_req(&self, name: impl AsRef<str>) -> Result<&str, ParseError> {
        self.attr(name.as_ref()).ok_or(ParseError::Generic {
            msg: format!(
                "Missing required attribute {} in element {}.",
                name.as_ref(),
                self.name()
            ),
        })
    }

    fn non_empty_text(&self) -> Option<String> {
        let text = self.text();
        (!text.is_empty()).then_some(text)
    }
}

/// Data Form booleans. Anything but `true` or `1` is false.
pub fn parse_form_bool(value: impl AsRef<str>) -> bool {
    let value = value.as_ref();
    value.eq_ignore_ascii_case("true") || value == "1"
}

fn ns_choice_to_string<'a>(ns: impl Into<NSChoice<'a>>) -> String {
    match ns.into() {
        NSChoice::None => "<none>".to_string(),
        NSChoice::OneOf(ns) => ns.to_string(),
        NSChoice::AnyOf(ns_list) => ns_list.join(" or "),
        NSChoice::Any => "<any>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_bool() {
        assert!(parse_form_bool("true"));
        assert!(parse_form_bool("TRUE"));
        assert!(parse_form_bool("1"));
        assert!(!parse_form_bool("0"));
        assert!(!parse_form_bool("yes"));
        assert!(!parse_form_bool(""));
    }

    #[test]
    fn test_attr_req() {
        let elem = Element::builder("item", "ns").attr("nick", "alice").build();
        assert_eq!(elem.attr_req("nick"), Ok("alice"));
        assert!(elem.attr_req("jid").is_err());
        assert!(elem.expect_is("item", "other").is_err());
    }
}
