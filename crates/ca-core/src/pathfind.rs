//! Single-step routing around obstacles.
//!
//! Enemies plan one tile at a time: each call returns the next tile on a
//! shortest path, recomputed every round so routes adapt as the board
//! changes.

use std::collections::{HashMap, VecDeque};

use crate::grid::Position;

/// One breadth-first step from `src` toward `dest`.
///
/// Every tile in `obstacles` is impassable except `dest` itself, so a unit
/// can path to a tile something currently stands on. Expansion follows
/// `Direction::ALL` order; among equal-length paths the same one always
/// wins. If `dest` cannot be reached, falls back to [`greedy_step`].
///
/// Never returns an out-of-bounds tile or an obstacle tile other than
/// `dest`; when no progress is possible at all it returns `src`.
pub fn next_step(src: Position, dest: Position, obstacles: &[Position]) -> Position {
    if src == dest {
        return src;
    }
    let blocked = |p: Position| p != dest && obstacles.contains(&p);

    // parent map doubles as the visited set; src is its own parent
    let mut parents: HashMap<Position, Position> = HashMap::new();
    parents.insert(src, src);
    let mut queue = VecDeque::new();
    queue.push_back(src);
    let mut reached = false;
    while let Some(cur) = queue.pop_front() {
        if cur == dest {
            reached = true;
            break;
        }
        for next in cur.neighbors() {
            if !parents.contains_key(&next) && !blocked(next) {
                parents.insert(next, cur);
                queue.push_back(next);
            }
        }
    }
    if !reached {
        return greedy_step(src, dest, obstacles);
    }

    // walk back from dest to the first hop out of src
    let mut cur = dest;
    loop {
        match parents.get(&cur) {
            Some(&p) if p == src => return cur,
            Some(&p) => cur = p,
            None => return greedy_step(src, dest, obstacles),
        }
    }
}

/// Greedy fallback for unreachable destinations: close the row gap first,
/// then the column gap, refusing obstacle tiles. Returns `src` when both
/// options are blocked.
fn greedy_step(src: Position, dest: Position, obstacles: &[Position]) -> Position {
    let blocked = |p: Position| p != dest && obstacles.contains(&p);
    let dr = (dest.row - src.row).signum();
    let dc = (dest.col - src.col).signum();
    for cand in [
        Position::new(src.row + dr, src.col),
        Position::new(src.row, src.col + dc),
    ] {
        let cand = cand.clamped();
        if cand != src && !blocked(cand) {
            return cand;
        }
    }
    src
}
