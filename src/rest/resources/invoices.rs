//! Invoices, their messages and payments, and invoice item categories.

use crate::rest::kind::{Coercion, ResourceKind};
use crate::rest::registry::Registry;

/// An invoice. The API nests invoice data under `doc`.
pub static INVOICE: ResourceKind = ResourceKind::new("Invoice")
    .with_item_name("doc")
    .with_get_path("/invoices/")
    .with_list_path("/invoices/")
    .with_coercions(&[
        ("created_at", Coercion::DateTime),
        ("updated_at", Coercion::DateTime),
        ("due_at", Coercion::Date),
        ("issued_at", Coercion::Date),
    ]);

/// A message sent about an invoice.
pub static INVOICE_MESSAGE: ResourceKind = ResourceKind::new("InvoiceMessage")
    .with_item_name("message")
    .with_child_path("/invoices/{parent_id}/messages/{id}");

/// A payment recorded against an invoice.
pub static INVOICE_PAYMENT: ResourceKind = ResourceKind::new("InvoicePayment")
    .with_item_name("payment")
    .with_child_path("/invoices/{parent_id}/payments/{id}")
    .with_coercions(&[
        ("created_at", Coercion::DateTime),
        ("updated_at", Coercion::DateTime),
        ("paid_at", Coercion::DateTime),
    ]);

/// An invoice line item category. List only: `GET /invoice_item_categories`.
pub static INVOICE_CATEGORY: ResourceKind = ResourceKind::new("InvoiceCategory")
    .with_item_name("category")
    .with_list_path("/invoice_item_categories");

pub(super) fn register(registry: &mut Registry) {
    registry
        .register(&INVOICE)
        .register(&INVOICE_CATEGORY)
        .register_children(&INVOICE, &INVOICE_MESSAGE)
        .register_children(&INVOICE, &INVOICE_PAYMENT);
}
