mod generator;
mod rng;

pub use generator::{gen_activity, gen_customers, gen_invoices, gen_revenue, ROSTER};
pub use rng::SeededRng;
