//! Small helpers shared across layers: parsing, pagination, password hashing, slug
//! derivation and request validation.

pub mod pagination;
pub mod parse;
pub mod password;
pub mod slug;
pub mod validation;
