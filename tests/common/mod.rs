mod pool;
mod spawner;

pub use pool::MockPool;
pub use spawner::{run_spawner, run_spawner_with_timeout};
