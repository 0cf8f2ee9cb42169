use std::sync::Arc;

use tripcompare::core::Backend;
use tripcompare::servers::apis::server;

pub mod connection_info;
pub mod v1;

pub type Started = environment::Environment<server::Running>;

/// It forces a database error by dropping all tables.
/// That makes any query fail.
pub fn force_database_error(backend: &Arc<Backend>) {
    backend.database.drop_database_tables().unwrap();
}
