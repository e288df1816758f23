//! Domain model (task record, ids, errors).

pub mod errors;
pub mod ids;
pub mod task;

pub use self::errors::RepositoryError;
pub use self::ids::{DEFAULT_KEY_PREFIX, StorageKey, TaskId};
pub use self::task::TodoTask;
