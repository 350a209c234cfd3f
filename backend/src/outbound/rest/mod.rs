//! PostgREST-style outbound adapter.
//!
//! Implements the energy store ports over the REST interface of a hosted
//! Postgres (`/rest/v1/<table>?column=eq.value`).

mod http_store;

pub use http_store::RestEnergyStore;
