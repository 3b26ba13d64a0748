pub mod connection;
pub mod entities;
pub mod lookup;
pub mod migrate;

#[cfg(test)]
pub(crate) mod test_support;

pub use connection::{close, connect};
pub use migrate::{
    MigrationState, fresh_migrations, migration_status, reset_migrations, rollback_migrations,
    run_migrations,
};
