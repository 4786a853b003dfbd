//! Command implementations

mod blueprint;
mod impacts;
mod list;
mod overview;
mod search;
mod solutions;

pub use blueprint::blueprint;
pub use impacts::impacts;
pub use list::list;
pub use overview::overview;
pub use search::search;
pub use solutions::solutions;
