pub mod contact;
pub mod search;

pub use contact::{Contact, ContactPatch};
