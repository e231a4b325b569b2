pub mod comet;
pub mod galaxy;
pub mod star;

pub use comet::{Comet, CometEdge};
pub use galaxy::Galaxy;
pub use star::Star;
