// Service exports
pub mod firestore;
pub mod store;

pub use firestore::FirestoreClient;
pub use store::{CandidateStore, StoreError};
