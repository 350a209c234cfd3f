//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod energy_dashboard_query;
mod energy_store;
mod energy_store_writer;

#[cfg(test)]
pub use energy_dashboard_query::MockEnergyDashboardQuery;
pub use energy_dashboard_query::EnergyDashboardQuery;
#[cfg(test)]
pub use energy_store::MockEnergyStore;
pub use energy_store::{EnergyStore, EnergyStoreError, FixtureEnergyStore};
#[cfg(test)]
pub use energy_store_writer::MockEnergyStoreWriter;
pub use energy_store_writer::EnergyStoreWriter;
