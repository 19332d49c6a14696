//! Storage layer - entities, the SeaORM store, migrations and the registry

pub mod entity;
pub mod migrations;
pub mod registry;
pub mod store;

pub use registry::{KycRepository, RelationResolver, Repositories};
pub use store::SeaOrmStore;
