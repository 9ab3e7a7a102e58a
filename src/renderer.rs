pub mod compose;
pub mod conditions;
pub mod state_desc;

pub use compose::{compose_item, compose_room};
pub use conditions::{Condition, ConditionCtx, ConditionRegistry, ConditionSpec};
