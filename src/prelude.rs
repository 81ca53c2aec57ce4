pub use crate::cli::{command, run_app};
pub use crate::contacts::ContactBook;
pub use crate::domain::{
    contact::{self, Contact, ContactPatch},
    search,
};
pub use crate::errors::AppError;
pub use crate::network::FakeNetwork;
pub use crate::store::{self, ContactStore, json::JsonStore, memory::MemStore, parse_store};
pub use uuid::Uuid;
