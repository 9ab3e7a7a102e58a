use crate::models::item::Item;
use crate::models::room::Room;
use crate::models::types::ItemId;
use crate::renderer::conditions::{ConditionCtx, ConditionRegistry};
use crate::renderer::state_desc;

/// Base description followed by every conditional description that currently holds.
pub fn compose_room(room: &Room, registry: &ConditionRegistry, items_in_room: &[ItemId]) -> String {
    let ctx = ConditionCtx { room, items_in_room };

    let mut out = room.base_description.clone();
    for m in &room.modifiers {
        if registry.evaluate(&m.condition, &ctx) {
            out.push(' ');
            out.push_str(&m.modifier);
        }
    }
    out
}

/// Base description followed by the state text of each described property.
pub fn compose_item(item: &Item) -> String {
    let fragments: Vec<&str> = item
        .properties
        .iter()
        .filter_map(|(name, value)| {
            let table = item.property_constraints.get(name)?.state_descriptions.as_ref()?;
            state_desc::resolve(value, table)
        })
        .collect();

    if fragments.is_empty() {
        return item.base_description.clone();
    }
    format!("{} {}", item.base_description, fragments.join("\n"))
}
