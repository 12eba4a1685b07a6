use super::config::GameConfig;
use super::state::Position;

/// Contents of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// A glitched wall can be passed through once
    Wall { glitched: bool },
    Food,
}

/// Which half of a buggybug a cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BugPart {
    Left,
    Right,
}

/// Two-celled bonus item, stored as a single entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuggyBug {
    /// Position of the left half; the right half is one cell to the right
    pub left: Position,
    /// Visual variant in 1..=5
    pub variant: u8,
}

impl BuggyBug {
    pub fn new(left: Position, variant: u8) -> Self {
        Self { left, variant }
    }

    pub fn right(&self) -> Position {
        self.left.moved_by(1, 0)
    }

    pub fn positions(&self) -> [Position; 2] {
        [self.left, self.right()]
    }

    /// Which half of the bug sits at `pos`, if any
    pub fn part_at(&self, pos: Position) -> Option<BugPart> {
        if pos == self.left {
            Some(BugPart::Left)
        } else if pos == self.right() {
            Some(BugPart::Right)
        } else {
            None
        }
    }
}

/// What a position looks like to the engine and the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall { glitched: bool },
    Food,
    BuggyBug { part: BugPart, variant: u8 },
}

/// The playing field: a grid of cells with a rectangular wall ring
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    left_wall_x: usize,
    right_wall_x: usize,
    top_wall_y: usize,
    bottom_wall_y: usize,
    cells: Vec<Cell>,
    bug: Option<BuggyBug>,
    /// Set once any wall has been glitched; edibles may then appear outside the ring
    pub hole_in_the_wall: bool,
}

impl Board {
    pub fn new(config: &GameConfig) -> Self {
        let mut board = Self {
            width: config.board_width,
            height: config.board_height,
            left_wall_x: config.left_wall_x(),
            right_wall_x: config.right_wall_x(),
            top_wall_y: config.top_wall_y(),
            bottom_wall_y: config.bottom_wall_y(),
            cells: Vec::new(),
            bug: None,
            hole_in_the_wall: false,
        };
        board.init();
        board
    }

    /// Clear the grid and rebuild the wall ring
    pub fn init(&mut self) {
        self.cells = vec![Cell::Empty; self.width * self.height];
        self.bug = None;
        self.hole_in_the_wall = false;

        for x in self.left_wall_x..=self.right_wall_x {
            for y in [self.top_wall_y, self.bottom_wall_y] {
                self.cells[y * self.width + x] = Cell::Wall { glitched: false };
            }
        }
        for y in self.top_wall_y..=self.bottom_wall_y {
            for x in [self.left_wall_x, self.right_wall_x] {
                self.cells[y * self.width + x] = Cell::Wall { glitched: false };
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn left_wall_x(&self) -> usize {
        self.left_wall_x
    }

    pub fn right_wall_x(&self) -> usize {
        self.right_wall_x
    }

    pub fn top_wall_y(&self) -> usize {
        self.top_wall_y
    }

    pub fn bottom_wall_y(&self) -> usize {
        self.bottom_wall_y
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.is_in_bounds(pos)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    /// Raw grid cell, ignoring any buggybug on top of it
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    pub fn set_cell(&mut self, pos: Position, cell: Cell) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = cell;
        }
    }

    /// Resolved view of a position, with the buggybug drawn over the grid
    pub fn tile(&self, pos: Position) -> Tile {
        if let Some(bug) = self.bug {
            if let Some(part) = bug.part_at(pos) {
                return Tile::BuggyBug {
                    part,
                    variant: bug.variant,
                };
            }
        }

        match self.cell(pos) {
            Some(Cell::Wall { glitched }) => Tile::Wall { glitched },
            Some(Cell::Food) => Tile::Food,
            Some(Cell::Empty) | None => Tile::Empty,
        }
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        matches!(self.tile(pos), Tile::Wall { .. })
    }

    /// Food or either half of a buggybug
    pub fn is_edible(&self, pos: Position) -> bool {
        matches!(self.tile(pos), Tile::Food | Tile::BuggyBug { .. })
    }

    /// One of the four corners of the wall ring
    pub fn is_ring_corner(&self, pos: Position) -> bool {
        let xs = [self.left_wall_x as i32, self.right_wall_x as i32];
        let ys = [self.top_wall_y as i32, self.bottom_wall_y as i32];
        xs.contains(&pos.x) && ys.contains(&pos.y)
    }

    /// The ring cell mirrored across the board from a cell on the ring
    pub fn opposite_wall(&self, pos: Position) -> Option<Position> {
        let (left, right) = (self.left_wall_x as i32, self.right_wall_x as i32);
        let (top, bottom) = (self.top_wall_y as i32, self.bottom_wall_y as i32);
        let on_row = (left..=right).contains(&pos.x);
        let on_column = (top..=bottom).contains(&pos.y);

        if on_row && pos.y == top {
            Some(Position::new(pos.x, bottom))
        } else if on_row && pos.y == bottom {
            Some(Position::new(pos.x, top))
        } else if on_column && pos.x == left {
            Some(Position::new(right, pos.y))
        } else if on_column && pos.x == right {
            Some(Position::new(left, pos.y))
        } else {
            None
        }
    }

    /// Open a one-time passage in the wall opposite `pos`
    ///
    /// Nothing happens when `pos` is not on the ring or the opposite cell
    /// is no longer a wall.
    pub fn glitch_opposite_wall(&mut self, pos: Position) {
        let Some(opposite) = self.opposite_wall(pos) else {
            return;
        };
        if let Some(Cell::Wall { .. }) = self.cell(opposite) {
            self.set_cell(opposite, Cell::Wall { glitched: true });
        }
    }

    /// Close a glitched wall after the snake passes it; true if it was glitched
    pub fn consume_glitch(&mut self, pos: Position) -> bool {
        match self.cell(pos) {
            Some(Cell::Wall { glitched: true }) => {
                self.set_cell(pos, Cell::Wall { glitched: false });
                true
            }
            _ => false,
        }
    }

    pub fn bug(&self) -> Option<BuggyBug> {
        self.bug
    }

    /// Put a buggybug on the board, replacing whatever both cells held
    pub fn place_bug(&mut self, bug: BuggyBug) {
        for pos in bug.positions() {
            self.set_cell(pos, Cell::Empty);
        }
        self.bug = Some(bug);
    }

    pub fn remove_bug(&mut self) -> Option<BuggyBug> {
        self.bug.take()
    }

    pub fn food_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Food)
            .map(|(i, _)| Position::new((i % self.width) as i32, (i / self.width) as i32))
            .collect()
    }
}
