//! Clients and their contacts.

use crate::rest::kind::ResourceKind;
use crate::rest::registry::{Accessor, Registry};
use crate::rest::resources::PROJECT;

/// A client of the account. `GET /clients/{id}`, `GET /clients/`.
pub static CLIENT: ResourceKind = ResourceKind::new("Client")
    .with_get_path("/clients/")
    .with_list_path("/clients/");

/// A contact person at a client. `GET /contacts/{id}`, `GET /contacts/`.
pub static CLIENT_CONTACT: ResourceKind = ResourceKind::new("ClientContact")
    .with_item_name("contact")
    .with_get_path("/contacts/")
    .with_list_path("/contacts/");

pub(super) fn register(registry: &mut Registry) {
    registry.register(&CLIENT).register(&CLIENT_CONTACT);
    registry.add_accessor(
        &CLIENT,
        "get_contacts",
        Accessor::Scoped {
            kind: &CLIENT_CONTACT,
            path: "/clients/{id}/contacts",
        },
    );
    registry.add_accessor(
        &CLIENT,
        "get_projects",
        Accessor::Filtered {
            kind: &PROJECT,
            param: "client",
        },
    );
}
