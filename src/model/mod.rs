mod activity;
mod customer;
mod invoice;
mod kpi;
mod revenue;

pub use activity::{ActivityEvent, ActivityKind};
pub use customer::{Customer, Health};
pub use invoice::{Invoice, InvoiceStatus, Plan};
pub use kpi::Kpi;
pub use revenue::RevenuePoint;
