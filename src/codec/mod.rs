//! Layout serialization.
//!
//! Both wire formats share [`Layout`] as their in-memory form. Decoding accepts
//! anything either format has ever produced: raw JSON, base64 JSON, or the
//! LZ-compressed share code wrapping either.

pub mod compact;
pub mod verbose;

use crate::constants::{EXPORT_FILE_PREFIX, SHARE_QUERY_KEY};
use crate::dependency::file_stamp;
use crate::errors::PlannerError;
use crate::types::{GridSpace, ItemKind, PlacedItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutItem {
    pub kind: ItemKind,
    pub x: i32,
    pub y: i32,
    /// Town center sequence number, as written by the exporter
    pub number: Option<u32>,
}

impl LayoutItem {
    pub fn new(kind: ItemKind, x: i32, y: i32, number: Option<u32>) -> Self {
        Self { kind, x, y, number }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Grid width and height; absent in hand-written files
    pub dimensions: Option<(u32, u32)>,
    pub items: Vec<LayoutItem>,
}

impl Layout {
    pub fn from_items(grid: GridSpace, items: &[PlacedItem]) -> Self {
        Self {
            dimensions: Some((grid.width as u32, grid.height as u32)),
            items: items
                .iter()
                .map(|item| LayoutItem::new(item.kind, item.x, item.y, item.number()))
                .collect(),
        }
    }
}

/// Decode a pasted layout code, file contents or share-link value.
///
/// Tries JSON, then base64 JSON, then LZ decompression followed by both again.
/// Query-string decoding turns `+` into a space, so spaces are mapped back first.
pub fn decode(text: &str) -> Result<Layout, PlannerError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(PlannerError::MalformedLayout);
    }

    let mut failure = None;
    if let Some(layout) = attempt(text, &mut failure) {
        return Ok(layout);
    }
    if let Some(expanded) = compact::decompress(&text.replace(' ', "+")) {
        if let Some(layout) = attempt(expanded.trim(), &mut failure) {
            return Ok(layout);
        }
    }
    Err(failure.unwrap_or(PlannerError::MalformedLayout))
}

fn attempt(text: &str, failure: &mut Option<PlannerError>) -> Option<Layout> {
    match parse_json(text) {
        Ok(layout) => return Some(layout),
        Err(err) => remember(failure, err),
    }
    let json = compact::from_base64(text)?;
    match parse_json(&json) {
        Ok(layout) => Some(layout),
        Err(err) => {
            remember(failure, err);
            None
        }
    }
}

/// Verbose first, then compact
fn parse_json(json: &str) -> Result<Layout, PlannerError> {
    verbose::parse(json).or_else(|_| compact::parse(json))
}

// Only a bad type code says more than "malformed".
fn remember(failure: &mut Option<PlannerError>, err: PlannerError) {
    if matches!(err, PlannerError::UnknownTypeCode(_)) {
        *failure = Some(err);
    }
}

/// `kingshot-territory-YYYY-MM-DDTHH-MM-SS.json`
pub fn export_file_name(iso_timestamp: &str) -> String {
    format!("{}-{}.json", EXPORT_FILE_PREFIX, file_stamp(iso_timestamp))
}

/// Page URL carrying a share code; any existing query string on `base` is replaced
pub fn share_link(base: &str, code: &str) -> String {
    let base = base.split(['?', '#']).next().unwrap_or(base);
    format!("{}?{}={}", base, SHARE_QUERY_KEY, code)
}

/// Value of the share parameter in a `location.search` style query string
pub fn share_code_from_query(query: &str) -> Option<&str> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == SHARE_QUERY_KEY)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemId;

    fn sample() -> Layout {
        Layout {
            dimensions: Some((60, 45)),
            items: vec![
                LayoutItem::new(ItemKind::AllianceHq, 20, 20, None),
                LayoutItem::new(ItemKind::Banner, 30, 22, None),
                LayoutItem::new(ItemKind::TownCenter, 24, 18, Some(1)),
                LayoutItem::new(ItemKind::Pitfall, 14, 14, None),
                LayoutItem::new(ItemKind::Mill, 26, 26, None),
                LayoutItem::new(ItemKind::BlockedPath1, 0, 0, None),
                LayoutItem::new(ItemKind::BlockedPath2, 58, 43, None),
            ],
        }
    }

    #[test]
    fn decodes_every_export_form() {
        let layout = sample();
        let verbose = verbose::encode(&layout, "2026-10-16T08:00:00Z").unwrap();
        let compact_json = compact::to_json(&layout).unwrap();
        let text = compact::encode_text(&layout).unwrap();
        let share = compact::encode_share(&layout).unwrap();

        for code in [&verbose, &compact_json, &text, &share] {
            assert_eq!(decode(code).unwrap(), layout);
        }
    }

    #[test]
    fn base64_of_verbose_is_accepted() {
        use base64::Engine as _;
        let verbose = verbose::encode(&sample(), "2026-10-16T08:00:00Z").unwrap();
        let wrapped = base64::engine::general_purpose::STANDARD.encode(verbose);
        assert_eq!(decode(&wrapped).unwrap(), sample());
    }

    #[test]
    fn share_code_survives_query_string_spaces() {
        let share = compact::encode_share(&sample()).unwrap();
        let mangled = format!("  {}\n", share.replace('+', " "));
        assert_eq!(decode(&mangled).unwrap(), sample());
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(decode(""), Err(PlannerError::MalformedLayout)));
        assert!(matches!(
            decode("definitely not a layout"),
            Err(PlannerError::MalformedLayout)
        ));
        assert!(matches!(
            decode(r#"{"gridWidth": 10}"#),
            Err(PlannerError::MalformedLayout)
        ));
    }

    #[test]
    fn bad_type_code_is_reported_over_malformed() {
        let json = r#"{"gridWidth":20,"gridHeight":20,"items":[{"t":"Z","x":1,"y":1}]}"#;
        assert!(matches!(
            decode(json),
            Err(PlannerError::UnknownTypeCode(code)) if code == "Z"
        ));
    }

    #[test]
    fn layout_from_items_keeps_numbers() {
        let mut town_center = PlacedItem::new(ItemId(4), ItemKind::TownCenter, 3, 3);
        town_center.town_center = Some(crate::types::TownCenterTag::for_number(2));
        let layout = Layout::from_items(GridSpace::new(30, 20), &[town_center]);
        assert_eq!(layout.dimensions, Some((30, 20)));
        assert_eq!(
            layout.items,
            vec![LayoutItem::new(ItemKind::TownCenter, 3, 3, Some(2))]
        );
    }

    #[test]
    fn file_name_and_link() {
        assert_eq!(
            export_file_name("2026-10-16T09:15:42.120Z"),
            "kingshot-territory-2026-10-16T09-15-42.json"
        );
        assert_eq!(
            share_link("https://example.org/planner.html?layout=old#top", "abc$"),
            "https://example.org/planner.html?layout=abc$"
        );
    }

    #[test]
    fn query_lookup_finds_share_parameter() {
        assert_eq!(share_code_from_query("?tab=tp&layout=N4Ig$x"), Some("N4Ig$x"));
        assert_eq!(share_code_from_query("layout="), None);
        assert_eq!(share_code_from_query("?tab=tp"), None);
    }
}
