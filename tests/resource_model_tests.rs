//! Integration tests for the resource model.
//!
//! A `MockTransport` replays canned JSON by path and records every request,
//! so these tests cover path building, envelope unwrapping, lazy coercion and
//! relationship traversal for the built-in kinds without any network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{Datelike, Days, Local, NaiveDate, Timelike};
use harvest_api::clients::{AuthError, HttpRequest, Transport};
use harvest_api::rest::{
    resources, Accessor, DayArg, Params, Registry, ResourceError, ResourceKind,
};
use harvest_api::{HttpError, Session};
use serde_json::{json, Map, Value};

#[derive(Default)]
struct MockTransport {
    responses: Mutex<HashMap<String, Value>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn respond(&self, path: &str, value: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), value);
    }

    fn paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.path.clone())
            .collect()
    }

    fn last_query(&self) -> HashMap<String, String> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .and_then(|r| r.query.clone())
            .unwrap_or_default()
    }
}

impl Transport for MockTransport {
    fn request(&self, request: &HttpRequest) -> Result<Value, HttpError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .get(&request.path)
            .cloned()
            .ok_or_else(|| {
                AuthError {
                    body: format!("no canned response for {}", request.path),
                }
                .into()
            })
    }
}

fn standard_session(transport: &Arc<MockTransport>) -> Session {
    Session::new(Arc::clone(transport))
}

// ============================================================================
// Fetch orchestration
// ============================================================================

#[test]
fn test_list_kinds_wrap_every_element() {
    let transport = MockTransport::new();
    let session = standard_session(&transport);

    let listable = [
        &resources::CLIENT,
        &resources::CLIENT_CONTACT,
        &resources::PROJECT,
        &resources::TASK,
        &resources::USER,
        &resources::EXPENSE_CATEGORY,
        &resources::EXPENSE,
        &resources::INVOICE,
        &resources::INVOICE_CATEGORY,
    ];

    for kind in listable {
        let items: Vec<Value> = (1..=3)
            .map(|id| {
                let mut envelope = Map::new();
                envelope.insert(
                    kind.envelope_key(),
                    json!({"id": id, "name": format!("{} {id}", kind.name)}),
                );
                Value::Object(envelope)
            })
            .collect();
        transport.respond(kind.list_path.unwrap(), Value::Array(items));

        let fetched = kind.bind(&session).all(&Params::new()).unwrap();
        assert_eq!(fetched.len(), 3, "{}", kind.name);
        for (i, item) in fetched.iter().enumerate() {
            assert_eq!(item.kind(), kind);
            assert_eq!(item.id().unwrap(), (i + 1).to_string());
            assert_eq!(
                item.field::<String>("name").unwrap(),
                format!("{} {}", kind.name, i + 1)
            );
        }
    }
}

#[test]
fn test_get_concatenates_id_onto_prefix() {
    let transport = MockTransport::new();
    transport.respond("/clients/42", json!({"client": {"id": 42, "name": "Acme"}}));
    transport.respond("/people/7", json!({"user": {"id": 7, "email": "a@b.c"}}));
    transport.respond("/daily/show/99", json!({"day_entry": {"id": 99, "hours": 1.5}}));
    let session = standard_session(&transport);

    let client = session.clients().get(42).unwrap();
    assert_eq!(client.field::<String>("name").unwrap(), "Acme");
    assert_eq!(
        session.users().get("7").unwrap().field::<String>("email").unwrap(),
        "a@b.c"
    );
    assert_eq!(
        session.entries().get(99).unwrap().field::<f64>("hours").unwrap(),
        1.5
    );

    assert_eq!(
        transport.paths(),
        vec!["/clients/42", "/people/7", "/daily/show/99"]
    );
}

#[test]
fn test_get_substitutes_positional_placeholder() {
    static CONTACT_BY_TEMPLATE: ResourceKind = ResourceKind::new("TemplatedContact")
        .with_item_name("contact")
        .with_get_path("/contacts/%s");

    let transport = MockTransport::new();
    transport.respond("/contacts/8", json!({"contact": {"id": 8}}));
    let session = Session::with_registry(Arc::clone(&transport), Registry::new());

    let contact = CONTACT_BY_TEMPLATE.bind(&session).get(8).unwrap();
    assert_eq!(contact.id().unwrap(), "8");
    assert_eq!(transport.paths(), vec!["/contacts/8"]);
}

#[test]
fn test_list_params_are_forwarded() {
    let transport = MockTransport::new();
    transport.respond("/expenses/", json!([]));
    let session = standard_session(&transport);

    let mut params = Params::new();
    params.insert("from".to_string(), "20110301".to_string());
    params.insert("to".to_string(), "20110331".to_string());
    assert!(session.expenses().all(&params).unwrap().is_empty());

    assert_eq!(transport.last_query(), params);
}

#[test]
fn test_missing_paths_are_not_supported_and_send_nothing() {
    let transport = MockTransport::new();
    let session = standard_session(&transport);

    assert!(matches!(
        session.entries().all(&Params::new()),
        Err(ResourceError::NotSupported { kind: "Entry", .. })
    ));
    assert!(matches!(
        session.invoice_categories().get(1),
        Err(ResourceError::NotSupported {
            kind: "InvoiceCategory",
            ..
        })
    ));
    assert!(matches!(
        harvest_api::rest::get_child(&session, &resources::CLIENT, 1, 2),
        Err(ResourceError::NotSupported { kind: "Client", .. })
    ));
    assert!(transport.paths().is_empty());
}

#[test]
fn test_wrong_shape_is_api_error() {
    let transport = MockTransport::new();
    transport.respond("/tasks/1", json!([{"task": {"id": 1}}]));
    transport.respond("/tasks/", json!({"task": {"id": 1}}));
    let session = standard_session(&transport);

    assert!(matches!(
        session.tasks().get(1),
        Err(ResourceError::Http(HttpError::Api(_)))
    ));
    assert!(matches!(
        session.tasks().all(&Params::new()),
        Err(ResourceError::Http(HttpError::Api(_)))
    ));
}

#[test]
fn test_transport_errors_propagate_unchanged() {
    let transport = MockTransport::new();
    let session = standard_session(&transport);

    assert!(matches!(
        session.projects().get(404),
        Err(ResourceError::Http(HttpError::Auth(_)))
    ));
}

// ============================================================================
// Lazy coercion
// ============================================================================

#[test]
fn test_datetime_coercion_is_stable() {
    let transport = MockTransport::new();
    transport.respond(
        "/clients/1",
        json!({"client": {"id": 1, "created_at": "2011-03-14T09:30:00Z", "details": null}}),
    );
    let session = standard_session(&transport);
    let client = session.clients().get(1).unwrap();

    let created = client.datetime("created_at").unwrap().unwrap();
    assert_eq!(
        (created.year(), created.month(), created.day()),
        (2011, 3, 14)
    );
    assert_eq!(
        (created.hour(), created.minute(), created.second()),
        (9, 30, 0)
    );
    assert_eq!(client.datetime("created_at").unwrap().unwrap(), created);

    // Present but null is fine; absent is an error.
    assert!(client.get("details").unwrap().is_null());
    assert!(matches!(
        client.get("address"),
        Err(ResourceError::FieldNotFound { kind: "Client", .. })
    ));
}

#[test]
fn test_per_kind_coercions() {
    let transport = MockTransport::new();
    transport.respond(
        "/expenses/3",
        json!({"expense": {"id": 3, "spent_at": "2011-02-28"}}),
    );
    transport.respond(
        "/invoices/4",
        json!({"doc": {"id": 4, "due_at": "2011-04-01", "issued_at": "2011-03-01"}}),
    );
    transport.respond(
        "/daily/show/5",
        json!({"day_entry": {"id": 5, "started_at": "08:00", "ended_at": null}}),
    );
    let session = standard_session(&transport);

    let expense = session.expenses().get(3).unwrap();
    assert_eq!(
        expense.date("spent_at").unwrap(),
        NaiveDate::from_ymd_opt(2011, 2, 28)
    );

    let invoice = session.invoices().get(4).unwrap();
    assert_eq!(
        invoice.date("due_at").unwrap(),
        NaiveDate::from_ymd_opt(2011, 4, 1)
    );
    assert_eq!(
        invoice.date("issued_at").unwrap(),
        NaiveDate::from_ymd_opt(2011, 3, 1)
    );

    let entry = session.entries().get(5).unwrap();
    let started = entry.time("started_at").unwrap().unwrap();
    assert_eq!((started.hour(), started.minute()), (8, 0));
    assert_eq!(entry.time("ended_at").unwrap(), None);
}

// ============================================================================
// Daily summary
// ============================================================================

fn day_payload() -> Value {
    json!({
        "daily": {
            "for_day": "2011-03-14",
            "day_entries": [
                {"id": 1, "hours": 2.0, "started_at": "09:00", "project_id": 10},
                {"id": 2, "hours": 1.5, "started_at": "13:30", "project_id": 11}
            ],
            "projects": [
                {"id": 10, "name": "Website"},
                {"id": 11, "name": "Mobile"}
            ]
        }
    })
}

#[test]
fn test_daily_without_arguments_requests_today() {
    let transport = MockTransport::new();
    transport.respond("/daily", day_payload());
    let session = standard_session(&transport);

    let day = session.day().today().unwrap();
    assert_eq!(
        day.date("for_day").unwrap(),
        NaiveDate::from_ymd_opt(2011, 3, 14)
    );
    assert_eq!(transport.paths(), vec!["/daily"]);
}

#[test]
fn test_daily_nested_entries_resolve_their_own_fields() {
    let transport = MockTransport::new();
    transport.respond("/daily/73/2011", day_payload());
    let session = standard_session(&transport);

    let day = session
        .day()
        .for_date(Some(DayArg::Number(73)), Some(2011))
        .unwrap();

    let entries = day.nested_list("day_entries").unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].kind(), &resources::ENTRY);
    assert_eq!(entries[1].field::<f64>("hours").unwrap(), 1.5);
    let started = entries[1].time("started_at").unwrap().unwrap();
    assert_eq!((started.hour(), started.minute()), (13, 30));

    let projects = day.nested_list("projects").unwrap();
    assert_eq!(projects[0].kind(), &resources::PROJECT);
    assert_eq!(projects[1].field::<String>("name").unwrap(), "Mobile");
}

#[test]
fn test_daily_negative_offset_counts_back_from_today() {
    let transport = MockTransport::new();
    let session = standard_session(&transport);

    // The clock may cross midnight during the call, so either day is accepted.
    let start = Local::now().date_naive() - Days::new(3);
    let candidates: Vec<String> = [start, start + Days::new(1)]
        .iter()
        .map(|d| format!("/daily/{}/{}", d.ordinal(), d.year()))
        .collect();
    for path in &candidates {
        transport.respond(path, day_payload());
    }

    session
        .day()
        .for_date(Some(DayArg::Number(-3)), None)
        .unwrap();

    let paths = transport.paths();
    assert_eq!(paths.len(), 1);
    assert!(candidates.contains(&paths[0]), "unexpected path {}", paths[0]);
}

#[test]
fn test_daily_date_argument() {
    let transport = MockTransport::new();
    transport.respond("/daily/73/2011", day_payload());
    let session = standard_session(&transport);

    let date = NaiveDate::from_ymd_opt(2011, 3, 14).unwrap();
    session.day().for_date(Some(date.into()), None).unwrap();
    assert_eq!(transport.paths(), vec!["/daily/73/2011"]);
}

#[test]
fn test_daily_positive_day_without_year_is_invalid() {
    let transport = MockTransport::new();
    let session = standard_session(&transport);

    assert!(matches!(
        session.day().for_date(Some(DayArg::Number(5)), None),
        Err(ResourceError::InvalidArgument(_))
    ));
    assert!(transport.paths().is_empty());
}

// ============================================================================
// Relationship accessors
// ============================================================================

static PARENT_KIND: ResourceKind = ResourceKind::new("ParentKind")
    .with_get_path("/parents/")
    .with_list_path("/parents/");
static CHILD_KIND: ResourceKind =
    ResourceKind::new("ChildKind").with_child_path("/parents/{parent_id}/children/{id}");

#[test]
fn test_default_accessors_fetch_through_parent_id() {
    let mut registry = Registry::new();
    registry.register_children(&PARENT_KIND, &CHILD_KIND);

    let transport = MockTransport::new();
    transport.respond("/parents/6", json!({"parentkind": {"id": 6}}));
    transport.respond(
        "/parents/6/children/",
        json!([{"childkind": {"id": 1}}, {"childkind": {"id": 2}}]),
    );
    transport.respond("/parents/6/children/2", json!({"childkind": {"id": 2}}));
    let session = Session::with_registry(Arc::clone(&transport), registry);

    let parent = PARENT_KIND.bind(&session).get(6).unwrap();
    assert_eq!(parent.accessors(), vec!["get_childkind", "get_childkinds"]);

    let children = parent
        .fetch_children("get_childkinds", &Params::new())
        .unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].kind(), &CHILD_KIND);

    let child = parent.fetch_child("get_childkind", 2).unwrap();
    assert_eq!(child.id().unwrap(), "2");

    assert_eq!(
        transport.paths(),
        vec!["/parents/6", "/parents/6/children/", "/parents/6/children/2"]
    );
}

#[test]
fn test_project_assignments_and_references() {
    let transport = MockTransport::new();
    transport.respond("/projects/5", json!({"project": {"id": 5}}));
    transport.respond(
        "/projects/5/task_assignments/",
        json!([{"task_assignment": {"id": 31, "task_id": 4, "project_id": 5}}]),
    );
    transport.respond("/tasks/4", json!({"task": {"id": 4, "name": "Design"}}));
    transport.respond(
        "/projects/5/user_assignments/12",
        json!({"user_assignment": {"id": 12, "user_id": 8, "project_id": 5}}),
    );
    transport.respond("/people/8", json!({"user": {"id": 8, "email": "dev@acme.test"}}));
    let session = standard_session(&transport);

    let project = session.projects().get(5).unwrap();
    assert!(project.has_accessor("get_task_assignments"));

    let assignments = project
        .fetch_children("get_task_assignments", &Params::new())
        .unwrap();
    let task = assignments[0].fetch_linked("get_task").unwrap();
    assert_eq!(task.field::<String>("name").unwrap(), "Design");

    let user_assignment = project.fetch_child("get_user_assignment", 12).unwrap();
    let user = user_assignment.fetch_linked("get_user").unwrap();
    assert_eq!(user.field::<String>("email").unwrap(), "dev@acme.test");

    let back = user_assignment.fetch_linked("get_project").unwrap();
    assert_eq!(back.id().unwrap(), "5");
}

#[test]
fn test_client_scoped_and_filtered_accessors() {
    let transport = MockTransport::new();
    transport.respond("/clients/1", json!({"client": {"id": 1}}));
    transport.respond(
        "/clients/1/contacts",
        json!([{"contact": {"id": 20, "email": "a@acme.test"}}]),
    );
    transport.respond("/projects/", json!([{"project": {"id": 5, "client_id": 1}}]));
    let session = standard_session(&transport);

    let client = session.clients().get(1).unwrap();

    let contacts = client.fetch_children("get_contacts", &Params::new()).unwrap();
    assert_eq!(contacts[0].kind(), &resources::CLIENT_CONTACT);
    assert_eq!(contacts[0].field::<String>("email").unwrap(), "a@acme.test");

    let projects = client.fetch_children("get_projects", &Params::new()).unwrap();
    assert_eq!(projects[0].id().unwrap(), "5");
    assert_eq!(
        transport.last_query().get("client").map(String::as_str),
        Some("1")
    );
}

#[test]
fn test_invoice_payments() {
    let transport = MockTransport::new();
    transport.respond("/invoices/3", json!({"doc": {"id": 3}}));
    transport.respond(
        "/invoices/3/payments/",
        json!([{"payment": {"id": 4, "paid_at": "2011-03-20T12:00:00Z", "amount": 100.0}}]),
    );
    let session = standard_session(&transport);

    let invoice = session.invoices().get(3).unwrap();
    let payments = invoice.fetch_children("get_payments", &Params::new()).unwrap();
    let paid = payments[0].datetime("paid_at").unwrap().unwrap();
    assert_eq!((paid.month(), paid.day(), paid.hour()), (3, 20, 12));
}

#[test]
fn test_wrong_arity_and_unknown_accessors_are_not_supported() {
    let transport = MockTransport::new();
    transport.respond("/invoices/3", json!({"doc": {"id": 3}}));
    let session = standard_session(&transport);
    let invoice = session.invoices().get(3).unwrap();

    assert!(matches!(
        invoice.fetch_child("get_payments", 1),
        Err(ResourceError::NotSupported { kind: "Invoice", .. })
    ));
    assert!(matches!(
        invoice.fetch_children("get_payment", &Params::new()),
        Err(ResourceError::NotSupported { .. })
    ));
    assert!(matches!(
        invoice.fetch_linked("get_client"),
        Err(ResourceError::NotSupported { .. })
    ));
    assert_eq!(transport.paths(), vec!["/invoices/3"]);
}

#[test]
fn test_standard_registry_accessor_table() {
    let registry = Registry::standard();
    assert_eq!(
        registry.accessor(&resources::CLIENT, "get_contacts"),
        Some(Accessor::Scoped {
            kind: &resources::CLIENT_CONTACT,
            path: "/clients/{id}/contacts",
        })
    );
    assert_eq!(
        registry.accessor(&resources::CLIENT, "get_projects"),
        Some(Accessor::Filtered {
            kind: &resources::PROJECT,
            param: "client",
        })
    );
}
