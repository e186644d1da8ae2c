pub mod cable_id;
pub mod enums;
pub mod metadata;
pub mod reference;
pub mod tag;

pub use cable_id::*;
pub use enums::*;
pub use metadata::*;
pub use reference::*;
pub use tag::*;
