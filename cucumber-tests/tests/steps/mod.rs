pub mod collection_steps;
pub mod permission_steps;
pub mod visibility_steps;
