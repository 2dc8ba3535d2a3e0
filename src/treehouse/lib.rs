pub mod error;
pub mod forest;
pub mod grid;
pub mod point;
pub mod scan;

pub use error::{ForestError, MalformedInput};
pub use forest::{Forest, Ray, Tree, TreeHeight};
pub use grid::DenseGrid;
pub use point::{Direction, Point};
pub use scan::{
    compute_scenic_scores, compute_scenic_scores_parallel, compute_visibility,
    is_visible_from_outside, scenic_score_of, viewing_distance, Survey,
};
