pub mod interaction;
pub mod placement;
pub mod planner_logic;
pub mod territory;
pub mod validation;
pub mod viewport;

pub use interaction::{key_action, KeyAction, KeyInput};
pub use placement::{can_place, find_valid_position, DropOutcome};
pub use planner_logic::{ImportReport, PlannerLogic};
pub use territory::compute_coverage;
pub use validation::{is_fully_controlled, legality};
