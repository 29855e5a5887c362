//! PostgreSQL access through diesel_async with a bb8 pool.

mod pool;

pub use pool::{AsyncDbPool, MIGRATIONS, establish_async_connection_pool, lazy_pool};
