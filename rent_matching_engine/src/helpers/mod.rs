mod normalize;
mod reference_hints;
mod similarity;

pub use normalize::{normalize, sorted_tokens};
pub use reference_hints::lease_id_fragments;
pub use similarity::{edit_distance, similarity};
