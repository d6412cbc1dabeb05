// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use element_ext::{parse_form_bool, ElementExt, ParseError};

mod element_ext;
pub mod ns;
pub mod type_conversions;
