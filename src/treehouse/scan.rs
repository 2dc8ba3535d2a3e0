use itertools::Itertools;
use rayon::prelude::*;

use super::forest::{Forest, Tree, TreeHeight};

/// Both answers for one forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Survey {
    pub visible: usize,
    pub best_scenic_score: usize,
}

impl Survey {
    pub fn of(forest: &mut Forest, parallel: bool) -> Self {
        let visible = compute_visibility(forest);
        let best_scenic_score = if parallel {
            compute_scenic_scores_parallel(forest)
        } else {
            compute_scenic_scores(forest)
        };
        Self {
            visible,
            best_scenic_score,
        }
    }
}

/// True if every tree along at least one of the four rays out of `tree` is
/// strictly shorter than it.
pub fn is_visible_from_outside(forest: &Forest, tree: &Tree) -> bool {
    forest.rays_from(tree).any(|(direction, mut ray)| {
        let clear = ray.all(|other| other.height < tree.height);
        if clear {
            log::trace!("{} is visible looking {}", tree.position, direction);
        }
        clear
    })
}

/// Mark every visible tree and return how many there are.
pub fn compute_visibility(forest: &mut Forest) -> usize {
    let edges = forest.edge_cells().map(|t| t.position).collect::<Vec<_>>();
    let edge_count = edges.len();
    for position in edges {
        if let Ok(tree) = forest.cell_at_mut(position.x, position.y) {
            tree.visible = true;
        }
    }

    let verdicts = forest
        .all_cells()
        .map(|tree| tree.visible || is_visible_from_outside(forest, tree))
        .collect::<Vec<_>>();
    for (tree, visible) in forest.trees_mut().iter_mut().zip(verdicts) {
        tree.visible = visible;
    }

    let count = forest.all_cells().filter(|tree| tree.visible).count();
    log::debug!(
        "{} trees visible ({} on the edge, {} interior)",
        count,
        edge_count,
        count - edge_count
    );
    count
}

/// Count the trees seen along `ray` from a tree of the given height, stopping
/// at (and including) the first one at least as tall.
pub fn viewing_distance<'a, I>(ray: I, height: TreeHeight) -> usize
where
    I: IntoIterator<Item = &'a Tree>,
{
    let mut distance = 0;
    for tree in ray {
        distance += 1;
        if tree.height >= height {
            break;
        }
    }
    distance
}

pub fn scenic_score_of(forest: &Forest, tree: &Tree) -> usize {
    forest
        .rays_from(tree)
        .map(|(direction, ray)| {
            let distance = viewing_distance(ray, tree.height);
            log::trace!("{} sees {} looking {}", tree.position, distance, direction);
            distance
        })
        .product()
}

/// Score every tree and return the best score.
pub fn compute_scenic_scores(forest: &mut Forest) -> usize {
    let scores = forest
        .all_cells()
        .map(|tree| scenic_score_of(forest, tree))
        .collect::<Vec<_>>();
    apply_scores(forest, scores)
}

/// Same as [`compute_scenic_scores`], with trees scored across the rayon pool.
pub fn compute_scenic_scores_parallel(forest: &mut Forest) -> usize {
    let view: &Forest = forest;
    let scores = view
        .trees()
        .par_iter()
        .map(|tree| scenic_score_of(view, tree))
        .collect::<Vec<_>>();
    apply_scores(forest, scores)
}

fn apply_scores(forest: &mut Forest, scores: Vec<usize>) -> usize {
    let best = scores.iter().position_max();
    for (tree, score) in forest.trees_mut().iter_mut().zip(scores) {
        tree.scenic_score = score;
    }
    match best.and_then(|index| forest.trees().get(index)) {
        Some(tree) => {
            log::debug!(
                "best scenic score {} at {} (height {})",
                tree.scenic_score,
                tree.position,
                tree.height
            );
            tree.scenic_score
        }
        None => 0,
    }
}
