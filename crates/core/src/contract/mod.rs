//! Contract types shared by every layer
//!
//! - `record`: the searchable unit supplied by the record source
//! - `timestamp`: microsecond timestamps used for staleness checks
//!
//! ```
//! use sift_core::contract::{Record, Timestamp};
//! ```

pub mod record;
pub mod timestamp;

pub use record::Record;
pub use timestamp::Timestamp;
