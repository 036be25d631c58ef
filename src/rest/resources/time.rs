//! Time entries and the daily summary.

use crate::rest::kind::{Coercion, ResourceKind};
use crate::rest::registry::Registry;
use crate::rest::resources::PROJECT;

/// A single time entry. Only fetchable by id: `GET /daily/show/{id}`.
pub static ENTRY: ResourceKind = ResourceKind::new("Entry")
    .with_item_name("day_entry")
    .with_get_path("/daily/show/")
    .with_coercions(&[
        ("created_at", Coercion::DateTime),
        ("updated_at", Coercion::DateTime),
        ("started_at", Coercion::Time),
        ("ended_at", Coercion::Time),
    ]);

/// The summary of one day: its entries and the projects they can go to.
///
/// Has no item paths; see [`BoundDay`](crate::rest::BoundDay).
pub static DAY: ResourceKind = ResourceKind::new("Day")
    .with_item_name("daily")
    .with_coercions(&[
        ("day_entries", Coercion::Nested(&ENTRY)),
        ("projects", Coercion::Nested(&PROJECT)),
        ("for_day", Coercion::Date),
    ]);

pub(super) fn register(registry: &mut Registry) {
    registry.register(&ENTRY).register(&DAY);
}
