extern crate alloc;

mod common;
mod conditions;
mod datastore;
mod items;
mod mons;
mod moves;

pub use common::*;
pub use conditions::*;
pub use datastore::*;
pub use items::*;
pub use mons::*;
pub use moves::*;
