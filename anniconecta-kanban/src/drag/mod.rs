//! Drag commands: the pointer layer's start / over / end notifications

mod end;
mod over;
mod start;

pub use end::DragEnd;
pub use over::DragOver;
pub use start::DragStart;

use crate::context::BoardContext;
use crate::reconcile::MoveKind;
use crate::types::DragItem;
use serde_json::Value;

/// Response body shared by drag-over and drag-end
fn move_response(ctx: &BoardContext, active: &DragItem, moved: Option<&MoveKind>) -> Value {
    serde_json::json!({
        "active": active,
        "moved": moved,
        "revision": ctx.revision(),
        "dragging": ctx.session().is_dragging(),
    })
}
