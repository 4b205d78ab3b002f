#[macro_use]
extern crate diesel;
#[macro_use]
extern crate log;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use r2d2::Error;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;
pub type Connection = PooledConnection<ConnectionManager<PgConnection>>;
pub mod models;
pub mod repository;
pub mod schema;
mod validate;

pub use repository::{MemoryRepository, PgRepository, QuestionRepository};

pub fn get_conn(pool: &PgPool) -> Result<Connection, Error> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err
    })
}

pub fn new_pool(database_url: &str) -> Result<PgPool, errors::Error> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);

    Pool::builder().build(manager).map_err(|err| {
        error!("Failed to create db pool - {}", err.to_string());
        err.into()
    })
}
