/*!
Data structures for summarized BGP neighbor sessions.
*/
mod neighbor;
mod table;

pub use neighbor::*;
pub use table::*;
