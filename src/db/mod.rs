pub mod connection;
pub mod documents;
pub mod leads;

pub use connection::Database;
pub use documents::SqliteContentStore;
