pub mod collection;
pub mod error;
pub mod event;
pub mod queue;

pub use collection::{Collection, SyncRoot};
pub use error::{QueueError, Result};
pub use event::{QueueArgs, QueueEvent, Subscription};
pub use queue::Queue;
