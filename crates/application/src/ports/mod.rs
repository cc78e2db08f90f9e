mod backing_store;
mod subnet_lookup;

pub use backing_store::{
    create_object, ensure_connected, fetch, update_object, BackingStore,
};
pub use subnet_lookup::SubnetLookup;
