pub mod error;
pub mod model;
pub mod parser;

pub use error::TrackListError;
pub use model::TrackEntry;
pub use parser::parse_track_list;
