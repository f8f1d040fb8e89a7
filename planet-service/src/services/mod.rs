pub mod database;
pub mod lookup;
pub mod memory;
pub mod store;

pub use database::MongoDb;
pub use lookup::{LookupError, PlanetLookup};
pub use memory::InMemoryPlanetStore;
pub use store::PlanetStore;
