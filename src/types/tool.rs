use super::item_kind::ItemKind;

/// Active editor tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Select,
    Delete,
    Pan,
    Place(ItemKind),
}

impl Tool {
    pub fn from_name(name: &str) -> Option<Tool> {
        match name {
            "select" => Some(Tool::Select),
            "delete" => Some(Tool::Delete),
            "pan" => Some(Tool::Pan),
            other => ItemKind::from_name(other).map(Tool::Place),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Delete => "delete",
            Tool::Pan => "pan",
            Tool::Place(kind) => kind.name(),
        }
    }
}
