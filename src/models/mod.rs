//! PokeAPI response models
//!
//! Deserialization targets for the endpoints the explorer calls. Unknown
//! fields in the payloads are ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationAreaDetails, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
