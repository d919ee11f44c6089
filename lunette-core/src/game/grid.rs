//! Grid geometry: directions, cell positions, and bounds

/// Heading of the snake on the grid
///
/// The variants are cyclically ordered so that one encoder detent
/// clockwise turns the snake right and one detent counter-clockwise
/// turns it left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Rotate one step clockwise (Up -> Right -> Down -> Left -> Up)
    pub fn turned_right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Rotate one step counter-clockwise
    pub fn turned_left(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// The exact opposite heading (a forbidden 180° reversal)
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit displacement for one step along this heading
    ///
    /// Y grows downward, matching display coordinates.
    pub fn offset(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// A cell position on the game grid
///
/// Signed so that a head moved past the top or left edge is still
/// representable for the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridPosition {
    pub x: i16,
    pub y: i16,
}

impl GridPosition {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step along `direction`
    pub fn moved(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Game grid dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether a position lies inside `[0, width) x [0, height)`
    pub fn contains(&self, pos: GridPosition) -> bool {
        pos.x >= 0 && (pos.x as u16) < self.width && pos.y >= 0 && (pos.y as u16) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_cycle() {
        // Right + one CW detent = Down, Right + one CCW detent = Up
        assert_eq!(Direction::Right.turned_right(), Direction::Down);
        assert_eq!(Direction::Right.turned_left(), Direction::Up);

        // Four turns in either direction come back around
        let mut d = Direction::Up;
        for _ in 0..4 {
            d = d.turned_right();
        }
        assert_eq!(d, Direction::Up);
        for _ in 0..4 {
            d = d.turned_left();
        }
        assert_eq!(d, Direction::Up);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        for d in [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ] {
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn test_bounds() {
        let grid = GridSize::new(18, 18);
        assert!(grid.contains(GridPosition::new(0, 0)));
        assert!(grid.contains(GridPosition::new(17, 17)));
        assert!(!grid.contains(GridPosition::new(-1, 5)));
        assert!(!grid.contains(GridPosition::new(5, -1)));
        assert!(!grid.contains(GridPosition::new(18, 5)));
        assert!(!grid.contains(GridPosition::new(5, 18)));
    }

    #[test]
    fn test_moved() {
        let p = GridPosition::new(3, 3);
        assert_eq!(p.moved(Direction::Up), GridPosition::new(3, 2));
        assert_eq!(p.moved(Direction::Down), GridPosition::new(3, 4));
        assert_eq!(p.moved(Direction::Left), GridPosition::new(2, 3));
        assert_eq!(p.moved(Direction::Right), GridPosition::new(4, 3));
    }
}
