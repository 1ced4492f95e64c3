// Adapters layer: concrete implementations of the domain ports (stores, clocks, importers).

pub mod clock;
pub mod csv_import;
pub mod file_store;
pub mod memory;

pub use clock::{FixedClock, SystemClock};
pub use file_store::FileStore;
pub use memory::InMemoryStore;
