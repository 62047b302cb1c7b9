// Adapters layer: concrete implementations of the domain ports.

pub mod storage;
pub mod twitter;

pub use storage::LocalStorage;
pub use twitter::TwitterClient;
