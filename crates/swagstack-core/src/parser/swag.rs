//! swag ノードのパース

use super::first_string;
use crate::error::{FlowError, Result};
use crate::model::{ShirtSize, SwagOrder};
use kdl::KdlNode;

/// swag ノードをパース
///
/// ```kdl
/// swag "my-shirt" {
///     name "Jane Doe"
///     email "jane@example.com"
///     address "1 Main St"
///     size "M"
/// }
/// ```
pub fn parse_swag(node: &KdlNode) -> Result<(String, SwagOrder)> {
    let name = first_string(node)
        .ok_or_else(|| FlowError::InvalidConfig("swag requires a name".to_string()))?;

    let mut person = None;
    let mut email = None;
    let mut address = None;
    let mut size = None;

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "name" => person = first_string(child),
                "email" => email = first_string(child),
                "address" => address = first_string(child),
                "size" => {
                    size = first_string(child)
                        .map(|s| s.parse::<ShirtSize>())
                        .transpose()?;
                }
                other => {
                    return Err(FlowError::InvalidConfig(format!(
                        "swag '{}' に未知のフィールドがあります: {}",
                        name, other
                    )));
                }
            }
        }
    }

    let missing = |field: &'static str| FlowError::MissingSwagField {
        name: name.clone(),
        field,
    };

    let order = SwagOrder {
        name: person.ok_or_else(|| missing("name"))?,
        email: email.ok_or_else(|| missing("email"))?,
        address: address.ok_or_else(|| missing("address"))?,
        size: size.ok_or_else(|| missing("size"))?,
    };

    Ok((name, order))
}
