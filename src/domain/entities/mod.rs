pub mod click;
pub mod link;

pub use click::{ClickEvent, DIRECT_SOURCE, UNKNOWN_LOCATION};
pub use link::LinkRecord;
