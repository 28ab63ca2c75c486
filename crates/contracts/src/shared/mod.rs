pub mod dates;
pub mod number;
pub mod serde_ids;
