//! People.

use crate::rest::kind::ResourceKind;
use crate::rest::registry::Registry;

/// A person on the account. `GET /people/{id}`, `GET /people/`.
pub static USER: ResourceKind = ResourceKind::new("User")
    .with_get_path("/people/")
    .with_list_path("/people/");

pub(super) fn register(registry: &mut Registry) {
    registry.register(&USER);
}
