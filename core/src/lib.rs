//! Engine for Memory Shuffle: a round shows numbered, colored tiles in a row,
//! scrambles them around an arena with their numbers hidden, then asks the
//! player to pick them again in the original order.

pub use config::*;
pub use error::*;
pub use palette::*;
pub use phases::*;
pub use scoreboard::*;
pub use session::*;
pub use status::*;
pub use stopwatch::*;
pub use tile::*;
pub use types::*;

mod config;
mod error;
mod palette;
mod phases;
mod scoreboard;
mod session;
mod status;
mod stopwatch;
mod tile;
mod types;
