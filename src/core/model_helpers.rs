use crate::core::{Cell, Direction, GameState, Vec2};

impl GameState {
    /// True when no storage location is left without a crate.
    pub fn is_won(&self) -> bool {
        !self
            .grid
            .iter()
            .any(|(_, &c)| c == Cell::Storage || c == Cell::PlayerOnStorage)
    }

    pub fn height(&self) -> i32 {
        self.grid.rows() as i32
    }

    pub fn width(&self) -> i32 {
        self.grid.cols() as i32
    }

    pub fn cell(&self, pos: &Vec2) -> Option<Cell> {
        self.grid.get(pos).copied()
    }

    /// Storage locations that still lack a crate.
    pub fn unfilled_storage_locations(&self) -> Vec<Vec2> {
        self.locations_where(|c| c == Cell::Storage || c == Cell::PlayerOnStorage)
    }

    /// Crates that are not resting on a storage location.
    pub fn loose_crate_locations(&self) -> Vec<Vec2> {
        self.locations_where(|c| c == Cell::Crate)
    }

    pub fn count_crates(&self) -> usize {
        self.count_where(Cell::has_crate)
    }

    pub fn count_storage(&self) -> usize {
        self.count_where(Cell::is_storage)
    }

    pub fn count_players(&self) -> usize {
        self.count_where(Cell::has_player)
    }

    pub fn count_crates_on_storage(&self) -> usize {
        self.count_where(|c| c == Cell::CrateOnStorage)
    }

    fn locations_where(&self, predicate: impl Fn(Cell) -> bool) -> Vec<Vec2> {
        self.grid
            .iter()
            .filter(|(_, c)| predicate(**c))
            .map(|(pos, _)| pos)
            .collect()
    }

    fn count_where(&self, predicate: impl Fn(Cell) -> bool) -> usize {
        self.grid.iter().filter(|(_, c)| predicate(**c)).count()
    }
}

impl Direction {
    /// Fixed enumeration order used wherever moves are generated, so searches are reproducible.
    pub const SEARCH_ORDER: [Direction; 4] =
        [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }

    /// Lowercase lurd letter; pushes are conventionally written uppercase.
    pub fn to_char(self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }
}
