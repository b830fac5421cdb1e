//! Outbound adapters implementing domain ports.
//!
//! - **recipe_source**: JSON recipe data, bundled or read from disk.
//! - **memory**: mutex-guarded in-memory list repository.
//!
//! Adapters translate between storage representations and domain types and
//! contain no business rules of their own.

pub mod memory;
pub mod recipe_source;

pub use memory::InMemoryRecipeListRepository;
pub use recipe_source::JsonRecipeSource;
