pub use std::result::Result as StdResult;
pub use std::time::Instant;

pub use anyhow::{anyhow, bail, Context};
pub use tracing::{debug, error, info, instrument};

pub type Result<T = (), E = anyhow::Error> = StdResult<T, E>;
