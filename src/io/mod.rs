//! Reading rock-mass input decks and writing decomposition results.

pub use self::input::{parse_rock_mass, parse_rock_mass_str, InputError, RockMassInput};
pub use self::json::{blocks_to_json_string, write_blocks, JsonError};

mod input;
mod json;
