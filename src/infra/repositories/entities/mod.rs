//! SeaORM entity definitions
//!
//! Table shapes live here, separate from the domain model.

pub mod user;

pub use user::Entity as UserEntity;
