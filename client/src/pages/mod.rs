//! Route-level page components.

pub mod landing;
pub mod not_found;
