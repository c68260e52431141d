use super::placement::DropOutcome;
use super::planner_logic::PlannerLogic;
use super::viewport;
use crate::data::{PanState, PinchState, PlannerData};
use crate::types::{ScreenPoint, Tool};

/// A key press as reported by the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Undo,
    Redo,
    DeleteSelection,
    ClearSelection,
}

/// Ctrl/Cmd+Z undoes; Ctrl/Cmd+Y and Ctrl/Cmd+Shift+Z redo
pub fn key_action(input: &KeyInput) -> Option<KeyAction> {
    let command = input.ctrl || input.meta;
    let key = input.key.to_ascii_lowercase();
    match key.as_str() {
        "z" if command && !input.shift => Some(KeyAction::Undo),
        "z" | "y" if command => Some(KeyAction::Redo),
        "delete" => Some(KeyAction::DeleteSelection),
        "escape" => Some(KeyAction::ClearSelection),
        _ => None,
    }
}

impl PlannerLogic {
    /// Switch tools. A drag in progress is dropped where it is first.
    pub fn set_tool(&mut self, data: &mut PlannerData, tool: Tool) {
        self.end_drag(data);
        data.tool = tool;
        data.selected = None;
        data.pan = None;
    }

    /// Press with the active tool. Ignored while a pinch is in progress.
    pub fn pointer_down(&mut self, data: &mut PlannerData, point: ScreenPoint) {
        if data.pinch.is_some() {
            return;
        }
        let cell = data.view.screen_to_grid(point);
        match data.tool {
            Tool::Pan => {
                data.pan = Some(PanState {
                    start: point,
                    origin_x: data.view.origin_x,
                    origin_y: data.view.origin_y,
                });
            }
            Tool::Select => {
                self.begin_drag(data, cell);
            }
            Tool::Delete => {
                self.delete_at(data, cell);
            }
            Tool::Place(kind) => {
                self.place(data, kind, cell.x, cell.y);
            }
        }
    }

    pub fn pointer_move(&mut self, data: &mut PlannerData, point: ScreenPoint) {
        if let Some(pan) = data.pan {
            data.view.origin_x = pan.origin_x + (point.x - pan.start.x);
            data.view.origin_y = pan.origin_y + (point.y - pan.start.y);
            return;
        }
        if data.drag.is_some() {
            let cell = data.view.screen_to_grid(point);
            self.drag_to(data, cell);
        }
    }

    /// Release ends a pan and settles any drag
    pub fn pointer_up(&mut self, data: &mut PlannerData) -> Option<DropOutcome> {
        data.pan = None;
        self.end_drag(data)
    }

    pub fn pinch_start(&mut self, data: &mut PlannerData, distance: f64) {
        data.pinch = Some(PinchState {
            last_distance: distance,
        });
    }

    pub fn pinch_move(&mut self, data: &mut PlannerData, distance: f64) {
        let Some(pinch) = data.pinch.as_mut() else {
            return;
        };
        let config = &data.config;
        viewport::apply_pinch(
            &mut data.view,
            pinch.last_distance,
            distance,
            config.pinch_sensitivity,
            config.min_scale,
            config.max_scale,
        );
        pinch.last_distance = distance;
    }

    /// Lifting the fingers also ends whatever single-touch gesture was running
    pub fn pinch_end(&mut self, data: &mut PlannerData) -> Option<DropOutcome> {
        data.pinch = None;
        self.pointer_up(data)
    }

    /// Apply a keyboard shortcut; `true` when the key was handled
    pub fn handle_key(&mut self, data: &mut PlannerData, input: &KeyInput) -> bool {
        match key_action(input) {
            Some(KeyAction::Undo) => {
                self.undo(data);
                true
            }
            Some(KeyAction::Redo) => {
                self.redo(data);
                true
            }
            Some(KeyAction::DeleteSelection) => match data.selected {
                Some(id) => self.delete(data, id),
                None => false,
            },
            Some(KeyAction::ClearSelection) => {
                data.selected = None;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GridCell, ItemKind, PlannerConfig};

    fn session() -> (PlannerData, PlannerLogic) {
        let mut data = PlannerData::new(PlannerConfig::default());
        let mut logic = PlannerLogic::default();
        logic.start_session(&mut data);
        (data, logic)
    }

    fn key(name: &str, ctrl: bool, shift: bool) -> KeyInput {
        KeyInput {
            key: name.to_string(),
            ctrl,
            meta: false,
            shift,
        }
    }

    #[test]
    fn shortcuts_map_to_actions() {
        assert_eq!(key_action(&key("z", true, false)), Some(KeyAction::Undo));
        assert_eq!(key_action(&key("Z", true, true)), Some(KeyAction::Redo));
        assert_eq!(key_action(&key("y", true, false)), Some(KeyAction::Redo));
        let cmd_z = KeyInput {
            key: "z".to_string(),
            meta: true,
            ..KeyInput::default()
        };
        assert_eq!(key_action(&cmd_z), Some(KeyAction::Undo));
        assert_eq!(key_action(&key("z", false, false)), None);
        assert_eq!(
            key_action(&key("Delete", false, false)),
            Some(KeyAction::DeleteSelection)
        );
        assert_eq!(
            key_action(&key("Escape", false, false)),
            Some(KeyAction::ClearSelection)
        );
    }

    #[test]
    fn place_tool_places_at_pointer_cell() {
        let (mut data, mut logic) = session();
        logic.set_tool(&mut data, Tool::Place(ItemKind::Mill));
        logic.pointer_down(&mut data, ScreenPoint::new(105.0, 61.0));
        logic.pointer_up(&mut data);
        assert_eq!(data.items().len(), 1);
        assert_eq!((data.items()[0].x, data.items()[0].y), (5, 3));
    }

    #[test]
    fn select_drag_and_release() {
        let (mut data, mut logic) = session();
        let id = logic.place(&mut data, ItemKind::Banner, 2, 2).unwrap();
        logic.pointer_down(&mut data, ScreenPoint::new(45.0, 45.0));
        assert_eq!(data.selected(), Some(id));
        logic.pointer_move(&mut data, ScreenPoint::new(205.0, 105.0));
        assert_eq!(logic.pointer_up(&mut data), Some(DropOutcome::InPlace));
        assert_eq!(data.item(id).map(|i| (i.x, i.y)), Some((10, 5)));
        assert_eq!(data.selected(), Some(id));
    }

    #[test]
    fn switching_tool_mid_drag_settles_the_item() {
        let (mut data, mut logic) = session();
        logic.place(&mut data, ItemKind::Pitfall, 10, 10);
        let mill = logic.place(&mut data, ItemKind::Mill, 20, 20).unwrap();
        logic.begin_drag(&mut data, GridCell::new(20, 20));
        logic.drag_to(&mut data, GridCell::new(11, 11));

        logic.set_tool(&mut data, Tool::Pan);
        assert!(!data.is_dragging());
        assert_eq!(logic.pointer_up(&mut data), None);

        let moved = data.item(mill).map(|item| item.rect()).unwrap();
        let pitfall = data.items()[0].rect();
        assert!(!moved.intersects(&pitfall));
        assert_eq!(data.history().len(), 4);

        assert!(logic.undo(&mut data));
        assert_eq!(data.item(mill).map(|item| (item.x, item.y)), Some((20, 20)));
    }

    #[test]
    fn clicking_empty_cell_clears_selection() {
        let (mut data, mut logic) = session();
        logic.place(&mut data, ItemKind::Banner, 2, 2);
        logic.pointer_down(&mut data, ScreenPoint::new(45.0, 45.0));
        logic.pointer_up(&mut data);
        logic.pointer_down(&mut data, ScreenPoint::new(400.0, 400.0));
        assert_eq!(data.selected(), None);
    }

    #[test]
    fn delete_tool_removes_topmost() {
        let (mut data, mut logic) = session();
        logic.place(&mut data, ItemKind::Pitfall, 0, 0);
        logic.set_tool(&mut data, Tool::Delete);
        logic.pointer_down(&mut data, ScreenPoint::new(30.0, 30.0));
        assert!(data.items().is_empty());
    }

    #[test]
    fn pan_tool_moves_origin() {
        let (mut data, mut logic) = session();
        logic.set_tool(&mut data, Tool::Pan);
        logic.pointer_down(&mut data, ScreenPoint::new(100.0, 100.0));
        logic.pointer_move(&mut data, ScreenPoint::new(60.0, 140.0));
        logic.pointer_up(&mut data);
        assert!(!data.is_panning());
        assert_eq!((data.view().origin_x, data.view().origin_y), (-40.0, 40.0));
        assert_eq!(
            data.view().screen_to_grid(ScreenPoint::new(0.0, 40.0)),
            GridCell::new(2, 0)
        );
    }

    #[test]
    fn pinch_scales_and_blocks_pointer() {
        let (mut data, mut logic) = session();
        logic.set_tool(&mut data, Tool::Place(ItemKind::Banner));
        logic.pinch_start(&mut data, 100.0);
        logic.pointer_down(&mut data, ScreenPoint::new(10.0, 10.0));
        logic.pinch_move(&mut data, 140.0);
        logic.pinch_move(&mut data, 160.0);
        logic.pinch_end(&mut data);
        assert!(data.items().is_empty());
        assert!((data.view().scale - 1.6).abs() < 1e-9);
        assert!(!data.is_pinching());
    }

    #[test]
    fn keyboard_undo_redo_delete() {
        let (mut data, mut logic) = session();
        let id = logic.place(&mut data, ItemKind::Banner, 2, 2).unwrap();
        assert!(logic.handle_key(&mut data, &key("z", true, false)));
        assert!(data.items().is_empty());
        assert!(logic.handle_key(&mut data, &key("y", true, false)));
        assert_eq!(data.items().len(), 1);

        assert!(!logic.handle_key(&mut data, &key("Delete", false, false)));
        logic.begin_drag(&mut data, GridCell::new(2, 2));
        logic.end_drag(&mut data);
        assert!(logic.handle_key(&mut data, &key("Delete", false, false)));
        assert!(data.item(id).is_none());
    }

    #[test]
    fn escape_clears_selection() {
        let (mut data, mut logic) = session();
        logic.place(&mut data, ItemKind::Banner, 2, 2);
        logic.begin_drag(&mut data, GridCell::new(2, 2));
        logic.end_drag(&mut data);
        assert!(logic.handle_key(&mut data, &key("Escape", false, false)));
        assert_eq!(data.selected(), None);
    }
}
