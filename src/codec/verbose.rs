//! Human-readable layout file: pretty JSON with a version tag and creation time.

use serde::{Deserialize, Serialize};

use super::{Layout, LayoutItem};
use crate::constants::LAYOUT_FORMAT_VERSION;
use crate::errors::PlannerError;
use crate::types::{ItemKind, TownCenterTag};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerboseDocument {
    version: Option<String>,
    grid_width: Option<u32>,
    grid_height: Option<u32>,
    created_at: Option<String>,
    items: Vec<VerboseItem>,
}

#[derive(Debug, Serialize, Deserialize)]
struct VerboseItem {
    #[serde(rename = "type")]
    kind: ItemKind,
    x: i32,
    y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

pub fn encode(layout: &Layout, created_at: &str) -> Result<String, PlannerError> {
    let (width, height) = layout.dimensions.unzip();
    let document = VerboseDocument {
        version: Some(LAYOUT_FORMAT_VERSION.to_string()),
        grid_width: width,
        grid_height: height,
        created_at: Some(created_at.to_string()),
        items: layout
            .items
            .iter()
            .map(|item| VerboseItem {
                kind: item.kind,
                x: item.x,
                y: item.y,
                number: item.number,
                color: item
                    .number
                    .map(|n| TownCenterTag::for_number(n).color.to_string()),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parse a verbose document. Colours are ignored; they follow from the numbers.
pub fn parse(json: &str) -> Result<Layout, PlannerError> {
    let document: VerboseDocument = serde_json::from_str(json)?;
    let dimensions = document.grid_width.zip(document.grid_height);
    let items = document
        .items
        .into_iter()
        .map(|item| LayoutItem {
            kind: item.kind,
            x: item.x,
            y: item.y,
            number: item.number,
        })
        .collect();
    Ok(Layout { dimensions, items })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Layout {
        Layout {
            dimensions: Some((40, 30)),
            items: vec![
                LayoutItem::new(ItemKind::AllianceHq, 10, 10, None),
                LayoutItem::new(ItemKind::TownCenter, 2, 3, Some(1)),
                LayoutItem::new(ItemKind::TownCenter, 20, 3, Some(2)),
            ],
        }
    }

    #[test]
    fn encode_writes_pretty_versioned_document() {
        let text = encode(&sample(), "2026-10-16T12:00:00.000Z").unwrap();
        assert!(text.contains("\n  \"version\": \"1.0\""));
        assert!(text.contains("\"gridWidth\": 40"));
        assert!(text.contains("\"createdAt\": \"2026-10-16T12:00:00.000Z\""));
        assert!(text.contains("\"type\": \"allianceHQ\""));
        assert!(text.contains("\"color\": \"#4ecdc4\""));
        assert!(!text.contains("\"t\""));
    }

    #[test]
    fn parse_reads_what_encode_writes() {
        let text = encode(&sample(), "2026-10-16T12:00:00.000Z").unwrap();
        assert_eq!(parse(&text).unwrap(), sample());
    }

    #[test]
    fn parse_rejects_compact_items() {
        let compact = r#"{"gridWidth":40,"gridHeight":30,"items":[{"t":"B","x":1,"y":1}]}"#;
        assert!(parse(compact).is_err());
    }

    #[test]
    fn parse_tolerates_missing_header_fields() {
        let layout = parse(r#"{"items":[{"type":"banner","x":4,"y":5}]}"#).unwrap();
        assert_eq!(layout.dimensions, None);
        assert_eq!(layout.items, vec![LayoutItem::new(ItemKind::Banner, 4, 5, None)]);
    }
}
