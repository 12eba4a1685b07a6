//! Random placement of food and buggybugs
//!
//! Candidates are drawn uniformly from a search rectangle that depends on the
//! level and on whether the wall ring has been breached. Rejected cells are
//! retried a bounded number of times before falling back to a full scan, so a
//! crowded board yields [`GameError::NoFreeCell`] instead of spinning forever.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::board::{BuggyBug, Cell};
use super::error::{GameError, GameResult};
use super::state::{GameState, Position};

/// Random draws before switching to an exhaustive scan
const MAX_RANDOM_ATTEMPTS: usize = 1000;

/// Seconds-ish granularity the buggybug countdown is rounded up to
const BUG_TIMEOUT_STEP: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdibleKind {
    Food,
    BuggyBug,
}

impl EdibleKind {
    fn name(&self) -> &'static str {
        match self {
            EdibleKind::Food => "food",
            EdibleKind::BuggyBug => "buggybug",
        }
    }
}

/// Inclusive rectangle edibles are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl SearchBounds {
    fn is_corner(&self, pos: Position) -> bool {
        (pos.x == self.min_x || pos.x == self.max_x) && (pos.y == self.min_y || pos.y == self.max_y)
    }

    fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (self.min_x..=self.max_x)
            .flat_map(move |x| (self.min_y..=self.max_y).map(move |y| Position::new(x, y)))
    }
}

/// Compute where an edible of `kind` may appear
pub fn search_bounds(state: &GameState, kind: EdibleKind) -> SearchBounds {
    let board = &state.board;
    let mut bounds = if board.hole_in_the_wall {
        SearchBounds {
            min_x: 0,
            max_x: board.width() as i32 - 1,
            min_y: 0,
            max_y: board.height() as i32 - 1,
        }
    } else {
        // First level keeps food strictly inside the ring
        let offset = i32::from(state.level == 1);
        SearchBounds {
            min_x: board.left_wall_x() as i32 + offset,
            max_x: board.right_wall_x() as i32 - offset,
            min_y: board.top_wall_y() as i32 + offset,
            max_y: board.bottom_wall_y() as i32 - offset,
        }
    };

    // The right half of a bug has to fit too
    if kind == EdibleKind::BuggyBug {
        bounds.max_x -= 1;
    }

    bounds
}

/// Check every exclusion rule for a candidate cell
pub fn is_valid_position(
    state: &GameState,
    bounds: &SearchBounds,
    kind: EdibleKind,
    pos: Position,
) -> bool {
    let board = &state.board;

    if board.is_edible(pos) || state.snake.collides_with(pos) {
        return false;
    }
    if kind == EdibleKind::BuggyBug {
        let right = pos.moved_by(1, 0);
        if board.is_edible(right) || state.snake.collides_with(right) {
            return false;
        }
    }

    !bounds.is_corner(pos) && !board.is_ring_corner(pos)
}

fn choose_position<R: Rng>(
    state: &GameState,
    kind: EdibleKind,
    rng: &mut R,
) -> GameResult<Position> {
    let bounds = search_bounds(state, kind);
    if bounds.min_x > bounds.max_x || bounds.min_y > bounds.max_y {
        return Err(GameError::NoFreeCell(kind.name()));
    }

    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let pos = Position::new(
            rng.gen_range(bounds.min_x..=bounds.max_x),
            rng.gen_range(bounds.min_y..=bounds.max_y),
        );
        if is_valid_position(state, &bounds, kind, pos) {
            return Ok(pos);
        }
    }

    let candidates: Vec<Position> = bounds
        .positions()
        .filter(|pos| is_valid_position(state, &bounds, kind, *pos))
        .collect();

    candidates
        .choose(rng)
        .copied()
        .ok_or(GameError::NoFreeCell(kind.name()))
}

/// Buggybug lifetime: distance from the head plus 10, rounded up to the next ten
pub fn buggy_bug_timeout(head: Position, bug: Position) -> i32 {
    let timeout = head.manhattan_distance(bug) + BUG_TIMEOUT_STEP;
    (timeout - timeout % BUG_TIMEOUT_STEP + BUG_TIMEOUT_STEP) as i32
}

/// Write an edible at an already validated position
///
/// An edible landing on the ring replaces that wall cell and opens the
/// opposite wall, so the snake can leave through the gap and come back in.
pub fn put_edible(state: &mut GameState, kind: EdibleKind, pos: Position, variant: u8) {
    let board = &mut state.board;
    let top = board.top_wall_y() as i32;
    let bottom = board.bottom_wall_y() as i32;

    if board.is_wall(pos) {
        board.glitch_opposite_wall(pos);
        board.hole_in_the_wall = true;

        if kind == EdibleKind::BuggyBug && (pos.y == top || pos.y == bottom) {
            board.glitch_opposite_wall(pos.moved_by(1, 0));
        }
    }

    match kind {
        EdibleKind::Food => board.set_cell(pos, Cell::Food),
        EdibleKind::BuggyBug => {
            let bug = BuggyBug::new(pos, variant);
            if board.is_wall(bug.right()) {
                board.glitch_opposite_wall(bug.right());
                board.hole_in_the_wall = true;
            }
            board.place_bug(bug);

            let head = state.snake.head().unwrap_or(pos);
            state.buggy_bug_time_left = buggy_bug_timeout(head, pos);
        }
    }
}

/// Place one edible of `kind` at a random legal position
pub fn place_edible<R: Rng>(
    state: &mut GameState,
    kind: EdibleKind,
    rng: &mut R,
) -> GameResult<Position> {
    let pos = choose_position(state, kind, rng)?;
    let variant = rng.gen_range(1..=5);
    put_edible(state, kind, pos, variant);

    debug!(
        kind = kind.name(),
        x = pos.x,
        y = pos.y,
        hole_in_the_wall = state.board.hole_in_the_wall,
        "placed edible"
    );

    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Tile;
    use crate::game::config::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn state() -> GameState {
        GameState::new(&GameConfig::default(), 0)
    }

    #[test]
    fn test_first_level_bounds_stay_inside_ring() {
        let state = state();
        let bounds = search_bounds(&state, EdibleKind::Food);
        assert_eq!(
            bounds,
            SearchBounds {
                min_x: 3,
                max_x: 26,
                min_y: 5,
                max_y: 26
            }
        );
    }

    #[test]
    fn test_bounds_include_ring_after_first_level() {
        let mut state = state();
        state.level = 2;
        let bounds = search_bounds(&state, EdibleKind::BuggyBug);
        assert_eq!(
            bounds,
            SearchBounds {
                min_x: 2,
                max_x: 26,
                min_y: 4,
                max_y: 27
            }
        );
    }

    #[test]
    fn test_bounds_cover_board_once_wall_has_hole() {
        let mut state = state();
        state.level = 3;
        state.board.hole_in_the_wall = true;
        let bounds = search_bounds(&state, EdibleKind::Food);
        assert_eq!(
            bounds,
            SearchBounds {
                min_x: 0,
                max_x: 29,
                min_y: 0,
                max_y: 29
            }
        );
    }

    #[test]
    fn test_exclusion_rules() {
        let mut state = state();
        state.level = 2;
        let bounds = search_bounds(&state, EdibleKind::Food);

        // snake body
        assert!(!is_valid_position(&state, &bounds, EdibleKind::Food, Position::new(12, 15)));
        // search rectangle corner
        assert!(!is_valid_position(&state, &bounds, EdibleKind::Food, Position::new(2, 27)));
        // ring corner
        assert!(!is_valid_position(&state, &bounds, EdibleKind::Food, Position::new(27, 4)));
        // ring, away from corners
        assert!(is_valid_position(&state, &bounds, EdibleKind::Food, Position::new(10, 4)));

        state.board.set_cell(Position::new(8, 8), Cell::Food);
        assert!(!is_valid_position(&state, &bounds, EdibleKind::Food, Position::new(8, 8)));

        // glitched segments are ignored
        state.snake.segments[1].glitch = Some(0.3);
        assert!(is_valid_position(&state, &bounds, EdibleKind::Food, Position::new(11, 15)));
    }

    #[test]
    fn test_bug_right_half_must_be_free() {
        let mut state = state();
        state.level = 3;
        let bounds = search_bounds(&state, EdibleKind::BuggyBug);

        // right half would sit on the snake's tail
        assert!(!is_valid_position(
            &state,
            &bounds,
            EdibleKind::BuggyBug,
            Position::new(9, 15)
        ));
        assert!(is_valid_position(
            &state,
            &bounds,
            EdibleKind::BuggyBug,
            Position::new(9, 16)
        ));
    }

    #[test]
    fn test_random_food_respects_constraints() {
        for seed in 0..200 {
            let mut state = state();
            let mut rng = StdRng::seed_from_u64(seed);
            let pos = place_edible(&mut state, EdibleKind::Food, &mut rng).unwrap();

            assert!((3..=26).contains(&pos.x));
            assert!((5..=26).contains(&pos.y));
            assert!(!state.snake.collides_with(pos));
            assert_eq!(state.board.tile(pos), Tile::Food);
            assert!(!state.board.hole_in_the_wall);
        }
    }

    #[test]
    fn test_food_on_wall_glitches_opposite_wall() {
        let mut state = state();
        state.level = 2;

        put_edible(&mut state, EdibleKind::Food, Position::new(2, 10), 1);

        assert_eq!(state.board.tile(Position::new(2, 10)), Tile::Food);
        assert_eq!(
            state.board.tile(Position::new(27, 10)),
            Tile::Wall { glitched: true }
        );
        assert!(state.board.hole_in_the_wall);
    }

    #[test]
    fn test_bug_on_top_wall_glitches_both_opposites() {
        let mut state = state();
        state.level = 3;

        put_edible(&mut state, EdibleKind::BuggyBug, Position::new(10, 4), 2);

        assert!(state.board.bug().is_some());
        assert_eq!(
            state.board.tile(Position::new(10, 27)),
            Tile::Wall { glitched: true }
        );
        assert_eq!(
            state.board.tile(Position::new(11, 27)),
            Tile::Wall { glitched: true }
        );
        assert!(state.board.hole_in_the_wall);
    }

    #[test]
    fn test_bug_right_half_on_wall_glitches_opposite() {
        let mut state = state();
        state.level = 3;

        put_edible(&mut state, EdibleKind::BuggyBug, Position::new(26, 12), 4);

        assert_eq!(
            state.board.tile(Position::new(2, 12)),
            Tile::Wall { glitched: true }
        );
        assert!(state.board.hole_in_the_wall);
    }

    #[test]
    fn test_bug_timeout() {
        // distance 6 -> 16 -> 20
        assert_eq!(
            buggy_bug_timeout(Position::new(14, 15), Position::new(20, 15)),
            20
        );
        // distance 10 -> 20 -> 30
        assert_eq!(
            buggy_bug_timeout(Position::new(0, 0), Position::new(5, 5)),
            30
        );
        // distance 0 -> 10 -> 20
        assert_eq!(
            buggy_bug_timeout(Position::new(3, 3), Position::new(3, 3)),
            20
        );
    }

    #[test]
    fn test_bug_sets_countdown() {
        let mut state = state();
        put_edible(&mut state, EdibleKind::BuggyBug, Position::new(20, 15), 1);
        assert_eq!(state.buggy_bug_time_left, 20);
    }

    #[test]
    fn test_full_board_reports_no_free_cell() {
        let mut state = state();
        let mut rng = StdRng::seed_from_u64(7);
        for x in 0..30 {
            for y in 0..30 {
                state.board.set_cell(Position::new(x, y), Cell::Food);
            }
        }

        assert_eq!(
            place_edible(&mut state, EdibleKind::Food, &mut rng),
            Err(GameError::NoFreeCell("food"))
        );
    }
}
