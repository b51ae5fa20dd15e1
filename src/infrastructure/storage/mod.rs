mod local_store;
mod memory_store;
mod store_factory;

pub use local_store::LocalEphemeralStore;
pub use memory_store::InMemoryEphemeralStore;
pub use store_factory::EphemeralStoreFactory;
