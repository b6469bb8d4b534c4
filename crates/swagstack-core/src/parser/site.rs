//! site ノードのパース

use super::{first_string, first_u32};
use crate::error::{FlowError, Result};
use crate::model::{Bucket, BucketAcl, StaticSite, ViewerProtocolPolicy};
use kdl::KdlNode;

/// site ノードをパース
pub fn parse_site(node: &KdlNode) -> Result<StaticSite> {
    let name = first_string(node).unwrap_or_else(|| "website".to_string());

    let children = node
        .children()
        .ok_or_else(|| FlowError::InvalidConfig(format!("site '{}' に bucket がありません", name)))?;

    let bucket_node = children
        .get("bucket")
        .ok_or_else(|| FlowError::InvalidConfig(format!("site '{}' に bucket がありません", name)))?;
    let mut site = StaticSite::new(name.clone(), parse_bucket(bucket_node)?);

    for child in children.nodes() {
        match child.name().value() {
            "bucket" => {}
            "region" => {
                if let Some(region) = first_string(child) {
                    site.region = region;
                }
            }
            "acl" => {
                let value = first_string(child).unwrap_or_default();
                site.acl = BucketAcl::parse(&value).ok_or_else(|| {
                    FlowError::InvalidConfig(format!("未対応のACL: {}", value))
                })?;
            }
            "cdn" => parse_cdn(child, &mut site)?,
            other => {
                tracing::warn!(site = %name, field = %other, "Unknown site field ignored");
            }
        }
    }

    Ok(site)
}

fn parse_bucket(node: &KdlNode) -> Result<Bucket> {
    let name = first_string(node)
        .ok_or_else(|| FlowError::InvalidConfig("bucket requires a name".to_string()))?;
    let mut bucket = Bucket::new(name);

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "index_document" | "index-document" => {
                    if let Some(doc) = first_string(child) {
                        bucket.index_document = doc;
                    }
                }
                "error_document" | "error-document" => bucket.error_document = first_string(child),
                "content_dir" | "content-dir" => bucket.content_dir = first_string(child),
                _ => {}
            }
        }
    }

    Ok(bucket)
}

fn parse_cdn(node: &KdlNode, site: &mut StaticSite) -> Result<()> {
    let Some(children) = node.children() else {
        return Ok(());
    };

    for child in children.nodes() {
        match child.name().value() {
            "viewer_protocol" | "viewer-protocol" => {
                let value = first_string(child).unwrap_or_default();
                site.cdn.viewer_protocol_policy =
                    ViewerProtocolPolicy::parse(&value).ok_or_else(|| {
                        FlowError::InvalidConfig(format!("未対応の viewer-protocol: {}", value))
                    })?;
            }
            "price_class" | "price-class" => {
                if let Some(class) = first_string(child) {
                    site.cdn.price_class = class;
                }
            }
            "default_ttl" | "default-ttl" => {
                if let Some(ttl) = first_u32(child) {
                    site.cdn.default_ttl = ttl;
                }
            }
            "max_ttl" | "max-ttl" => {
                if let Some(ttl) = first_u32(child) {
                    site.cdn.max_ttl = ttl;
                }
            }
            "alias" => site.cdn.alias = first_string(child),
            _ => {}
        }
    }

    Ok(())
}
