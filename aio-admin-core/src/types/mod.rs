//! Type definition module

mod account;
mod debug;
mod model;

pub use account::{Account, AccountPage, AccountPayload, AccountPageResponse};
pub use debug::{DebugModel, DebugModelsResponse};
pub use model::{Model, ModelPayload, ModelProvider};
