//! # States
//! Any struct that can be serialized and deserialized while implementing
//! [`Entity`] is a valid keyed state. Entities are loaded and saved through
//! the repo carried by a handler context.
//!
//! ## Example
//!
//! ```rust,no_run
//! use brett_mappings::states::Entity;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! pub struct Nft {
//!     pub token_id: u32,
//!     pub owner_address: String,
//! }
//!
//! impl Entity for Nft {
//!     fn entity_type() -> &'static str {
//!         "Nft"
//!     }
//!
//!     fn id(&self) -> String {
//!         self.token_id.to_string()
//!     }
//! }
//! ```
pub mod big_ints;
mod entity;

pub use entity::Entity;
