//! Infrastructure - the document database connection.

mod mongo;

pub use mongo::{ConnectionError, MongoConnection};
