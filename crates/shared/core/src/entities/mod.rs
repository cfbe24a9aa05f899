mod actor;
mod record;
mod severity;

pub use actor::{Actor, ActorPool, DEFAULT_ACTORS};
pub use record::{DEFAULT_JOB, EventRecord, Labels};
pub use severity::Severity;
