mod address;
mod id;
mod payload;
mod record;

pub use address::Address;
pub use id::{WillId, WillIdError};
pub use payload::Payload;
pub use record::{WillRecord, WillStatus};
