//! Short layout codes: single-letter type codes, base64 text, and the LZ-compressed
//! form used in share links.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::{Layout, LayoutItem};
use crate::errors::PlannerError;
use crate::types::ItemKind;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompactDocument {
    grid_width: Option<u32>,
    grid_height: Option<u32>,
    items: Vec<CompactItem>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CompactItem {
    t: String,
    x: i32,
    y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    n: Option<u32>,
}

pub fn to_json(layout: &Layout) -> Result<String, PlannerError> {
    let (width, height) = layout.dimensions.unzip();
    let document = CompactDocument {
        grid_width: width,
        grid_height: height,
        items: layout
            .items
            .iter()
            .map(|item| CompactItem {
                t: item.kind.code().to_string(),
                x: item.x,
                y: item.y,
                n: item.number,
            })
            .collect(),
    };
    Ok(serde_json::to_string(&document)?)
}

pub fn parse(json: &str) -> Result<Layout, PlannerError> {
    let document: CompactDocument = serde_json::from_str(json)?;
    let dimensions = document.grid_width.zip(document.grid_height);
    let items = document
        .items
        .into_iter()
        .map(|item| {
            let kind =
                ItemKind::from_code(&item.t).ok_or(PlannerError::UnknownTypeCode(item.t))?;
            Ok(LayoutItem {
                kind,
                x: item.x,
                y: item.y,
                number: item.n,
            })
        })
        .collect::<Result<Vec<_>, PlannerError>>()?;
    Ok(Layout { dimensions, items })
}

/// Base64 of the compact JSON, the plain-text layout code
pub fn encode_text(layout: &Layout) -> Result<String, PlannerError> {
    Ok(STANDARD.encode(to_json(layout)?))
}

/// LZ-compressed, URI-safe layout code for share links
pub fn encode_share(layout: &Layout) -> Result<String, PlannerError> {
    Ok(lz_str::compress_to_encoded_uri_component(
        encode_text(layout)?.as_str(),
    ))
}

/// Base64 text decoded to UTF-8, if it is both
pub fn from_base64(text: &str) -> Option<String> {
    let bytes = STANDARD.decode(text).ok()?;
    String::from_utf8(bytes).ok()
}

/// Reverse of the share-link compression
pub fn decompress(code: &str) -> Option<String> {
    let wide = lz_str::decompress_from_encoded_uri_component(code)?;
    let text = String::from_utf16(&wide).ok()?;
    (!text.is_empty()).then_some(text)
}
