pub mod coverage;
pub mod gaps;
pub mod timeline;

pub use gaps::{find_gaps, get_gaps};
pub use timeline::calculate_timeline;
