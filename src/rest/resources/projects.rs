//! Projects, tasks and the assignments that connect them to people.

use crate::rest::kind::{Coercion, ResourceKind};
use crate::rest::registry::{Accessor, Registry};
use crate::rest::resources::USER;

/// A project. `GET /projects/{id}`, `GET /projects/`.
pub static PROJECT: ResourceKind = ResourceKind::new("Project")
    .with_get_path("/projects/")
    .with_list_path("/projects/")
    .with_coercions(&[
        ("created_at", Coercion::DateTime),
        ("updated_at", Coercion::DateTime),
        ("earliest_record_at", Coercion::Date),
        ("latest_record_at", Coercion::Date),
    ]);

/// A task that time can be tracked against. `GET /tasks/{id}`, `GET /tasks/`.
pub static TASK: ResourceKind = ResourceKind::new("Task")
    .with_get_path("/tasks/")
    .with_list_path("/tasks/");

/// A person assigned to a project.
pub static USER_ASSIGNMENT: ResourceKind = ResourceKind::new("UserAssignment")
    .with_item_name("user_assignment")
    .with_child_path("/projects/{parent_id}/user_assignments/{id}");

/// A task assigned to a project.
pub static TASK_ASSIGNMENT: ResourceKind = ResourceKind::new("TaskAssignment")
    .with_item_name("task_assignment")
    .with_child_path("/projects/{parent_id}/task_assignments/{id}");

pub(super) fn register(registry: &mut Registry) {
    registry
        .register(&PROJECT)
        .register(&TASK)
        .register_children(&PROJECT, &USER_ASSIGNMENT)
        .register_children(&PROJECT, &TASK_ASSIGNMENT);

    reference(registry, &USER_ASSIGNMENT, "get_project", &PROJECT, "project_id");
    reference(registry, &USER_ASSIGNMENT, "get_user", &USER, "user_id");
    reference(registry, &TASK_ASSIGNMENT, "get_project", &PROJECT, "project_id");
    reference(registry, &TASK_ASSIGNMENT, "get_task", &TASK, "task_id");
}

fn reference(
    registry: &mut Registry,
    parent: &'static ResourceKind,
    name: &str,
    kind: &'static ResourceKind,
    id_field: &'static str,
) {
    registry.add_accessor(parent, name, Accessor::Reference { kind, id_field });
}
