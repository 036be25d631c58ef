//! The built-in Harvest resource kinds.
//!
//! # Available Kinds
//!
//! | Kind | Envelope | Operations |
//! |------|----------|------------|
//! | [`CLIENT`] | `client` | get, all, `get_contacts`, `get_projects` |
//! | [`CLIENT_CONTACT`] | `contact` | get, all |
//! | [`PROJECT`] | `project` | get, all, `get_user_assignment(s)`, `get_task_assignment(s)` |
//! | [`TASK`] | `task` | get, all |
//! | [`USER`] | `user` | get, all |
//! | [`ENTRY`] | `day_entry` | get |
//! | [`DAY`] | `daily` | `for_date` only |
//! | [`EXPENSE_CATEGORY`] | `expense_category` | get, all |
//! | [`EXPENSE`] | `expense` | get, all |
//! | [`INVOICE`] | `doc` | get, all, `get_message(s)`, `get_payment(s)` |
//! | [`INVOICE_CATEGORY`] | `category` | all |
//! | [`USER_ASSIGNMENT`] | `user_assignment` | under a project; `get_project`, `get_user` |
//! | [`TASK_ASSIGNMENT`] | `task_assignment` | under a project; `get_project`, `get_task` |
//! | [`INVOICE_MESSAGE`] | `message` | under an invoice |
//! | [`INVOICE_PAYMENT`] | `payment` | under an invoice |

mod clients;
mod expenses;
mod invoices;
mod people;
mod projects;
mod time;

pub use clients::{CLIENT, CLIENT_CONTACT};
pub use expenses::{EXPENSE, EXPENSE_CATEGORY};
pub use invoices::{INVOICE, INVOICE_CATEGORY, INVOICE_MESSAGE, INVOICE_PAYMENT};
pub use people::USER;
pub use projects::{PROJECT, TASK, TASK_ASSIGNMENT, USER_ASSIGNMENT};
pub use time::{DAY, ENTRY};

use crate::rest::registry::Registry;

/// Registers every built-in kind and wires its relationships.
///
/// Calling this twice on the same registry leaves it unchanged.
pub fn register(registry: &mut Registry) {
    clients::register(registry);
    projects::register(registry);
    time::register(registry);
    people::register(registry);
    expenses::register(registry);
    invoices::register(registry);
}
