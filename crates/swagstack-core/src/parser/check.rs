//! check ノードのパース

use super::{all_strings, first_bool, first_string, first_u32};
use crate::error::{FlowError, Result};
use crate::model::BrowserCheck;
use kdl::KdlNode;

/// check ノードをパース
pub fn parse_check(node: &KdlNode) -> Result<(String, BrowserCheck)> {
    let name = first_string(node)
        .ok_or_else(|| FlowError::InvalidConfig("check requires a name".to_string()))?;

    let script = node
        .children()
        .and_then(|children| children.get("script"))
        .and_then(first_string)
        .ok_or_else(|| FlowError::InvalidConfig(format!("check '{}' requires a script", name)))?;

    let mut check = BrowserCheck::new(name.clone(), script);

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "script" => {}
                "frequency" => {
                    check.frequency_minutes =
                        first_u32(child).filter(|&f| f > 0).ok_or_else(|| {
                            FlowError::InvalidConfig(format!(
                                "check '{}': frequency は正の整数で指定してください",
                                name
                            ))
                        })?;
                }
                "locations" => check.locations = all_strings(child),
                "activated" => check.activated = first_bool(child).unwrap_or(true),
                other => {
                    tracing::warn!(check = %name, field = %other, "Unknown check field ignored");
                }
            }
        }
    }

    Ok((name, check))
}
