pub mod blanks;
pub mod errors;
pub mod filters;
pub mod models;
pub mod ranges;
pub mod repo;
pub mod scheduler;
pub mod selection;
pub mod skip;
pub mod stats;
pub mod tags;
pub mod validate;

pub use blanks::*;
pub use errors::*;
pub use filters::*;
pub use models::*;
pub use ranges::*;
pub use repo::memory::MemoryStore;
pub use repo::*;
pub use scheduler::*;
pub use selection::*;
pub use skip::*;
pub use stats::*;
pub use tags::*;
pub use validate::*;
