//! Shared request/response types.

mod pagination;
mod response;

pub use pagination::ListParams;
pub use response::NoContent;
