pub mod groups;

mod engine;
mod error;
mod euler;
mod index;
mod input;
mod lca;
mod path_weight;
mod segment_tree;
mod tree;

pub use engine::QueryEngine;
pub use error::{Error, Result};
pub use euler::EulerTour;
pub use index::{EdgePositions, FirstOccurrence};
pub use input::{Batch, Operation};
pub use lca::LcaTree;
pub use path_weight::PathWeightTree;
pub use segment_tree::SegmentTree;
pub use tree::{Tree, ROOT};
