//! Snake body - a head-first run of directed segments
//!
//! Every segment carries the heading the head had on that cell. A forward step
//! inserts a copy of the head behind it, moves the head one cell and drops the tail unless
//! the head just reached food, so the segments in between never move. Those directions are
//! what the renderer uses to pick straight, turn, head and tail glyphs.

use brick_game_core::types::{glyph, UserAction, BOARD_COLS, BOARD_ROWS, SNAKE_MIN_LEN};

/// Where the snake starts: row 10, head at column 4, heading right
pub const START_ROW: i8 = 10;
pub const START_HEAD_COL: i8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (row, col) change of one step
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn from_action(action: UserAction) -> Option<Self> {
        match action {
            UserAction::Up => Some(Direction::Up),
            UserAction::Down => Some(Direction::Down),
            UserAction::Left => Some(Direction::Left),
            UserAction::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub row: i8,
    pub col: i8,
    pub dir: Direction,
    pub is_head: bool,
}

impl Segment {
    pub fn pos(&self) -> (i8, i8) {
        (self.row, self.col)
    }
}

/// Outcome of [`Body::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved,
    Ate,
    /// The head would hit a wall or the body; nothing moved
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    segments: Vec<Segment>,
}

impl Body {
    /// The starting pose: four segments on row 10, columns 4 to 1, heading right
    pub fn new() -> Self {
        let segments = (0..SNAKE_MIN_LEN as i8)
            .map(|i| Segment {
                row: START_ROW,
                col: START_HEAD_COL - i,
                dir: Direction::Right,
                is_head: i == 0,
            })
            .collect();
        Self { segments }
    }

    /// Build a body from head-first segments. The first one becomes the head.
    pub fn from_segments(mut segments: Vec<Segment>) -> Self {
        for (i, segment) in segments.iter_mut().enumerate() {
            segment.is_head = i == 0;
        }
        Self { segments }
    }

    pub fn head(&self) -> Segment {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn contains(&self, pos: (i8, i8)) -> bool {
        self.segments.iter().any(|s| s.pos() == pos)
    }

    /// Point the head somewhere else. The move happens on the next step.
    pub fn turn(&mut self, dir: Direction) {
        self.segments[0].dir = dir;
    }

    /// Whether the head is off the board or shares a cell with another segment
    pub fn head_collides(&self) -> bool {
        let head = self.head();
        if head.row < 0
            || head.row >= BOARD_ROWS as i8
            || head.col < 0
            || head.col >= BOARD_COLS as i8
        {
            return true;
        }
        self.segments[1..].iter().any(|s| s.pos() == head.pos())
    }

    /// One step forward. `food` is the cell that makes the snake grow.
    pub fn advance(&mut self, food: (i8, i8)) -> Step {
        let old_head = self.segments[0];
        self.segments.insert(
            1,
            Segment {
                is_head: false,
                ..old_head
            },
        );

        let (drow, dcol) = old_head.dir.delta();
        self.segments[0].row += drow;
        self.segments[0].col += dcol;

        if self.head_collides() {
            self.segments.remove(1);
            self.segments[0] = old_head;
            return Step::Blocked;
        }
        if self.head().pos() == food {
            return Step::Ate;
        }
        self.segments.pop();
        Step::Moved
    }

    /// Render code for segment `index`
    pub fn glyph(&self, index: usize) -> u8 {
        let cur = self.segments[index];
        let is_head = index == 0;
        let is_tail = index + 1 == self.segments.len();

        if let Some(prev) = self.segments.get(index + 1).filter(|p| p.dir != cur.dir) {
            if let Some(code) = turn_glyph(cur.dir, prev.dir, is_head) {
                return code;
            }
        }

        match (is_head, is_tail, cur.dir) {
            (true, _, Direction::Up) => glyph::HEAD_UP,
            (true, _, Direction::Down) => glyph::HEAD_DOWN,
            (true, _, Direction::Left) => glyph::HEAD_LEFT,
            (true, _, Direction::Right) => glyph::HEAD_RIGHT,
            (false, true, Direction::Up) => glyph::TAIL_UP,
            (false, true, Direction::Down) => glyph::TAIL_DOWN,
            (false, true, Direction::Left) => glyph::TAIL_LEFT,
            (false, true, Direction::Right) => glyph::TAIL_RIGHT,
            (false, false, Direction::Up) => glyph::BODY_UP,
            (false, false, Direction::Down) => glyph::BODY_DOWN,
            (false, false, Direction::Left) => glyph::BODY_LEFT,
            (false, false, Direction::Right) => glyph::BODY_RIGHT,
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new()
    }
}

/// Glyph for a segment heading `cur` whose tail-side neighbour heads `prev`. A head that
/// has just been turned keeps facing the way it came.
fn turn_glyph(cur: Direction, prev: Direction, is_head: bool) -> Option<u8> {
    use Direction::*;

    let code = match (cur, prev, is_head) {
        (Up | Down, Right, true) => glyph::HEAD_RIGHT,
        (Up | Down, Left, true) => glyph::HEAD_LEFT,
        (Left | Right, Up, true) => glyph::HEAD_UP,
        (Left | Right, Down, true) => glyph::HEAD_DOWN,

        (Up, Right, false) => glyph::TURN_RIGHT_UP,
        (Up, Left, false) => glyph::TURN_LEFT_UP,
        (Down, Right, false) => glyph::TURN_RIGHT_DOWN,
        (Down, Left, false) => glyph::TURN_LEFT_DOWN,
        (Right, Up, false) => glyph::TURN_LEFT_DOWN,
        (Right, Down, false) => glyph::TURN_LEFT_UP,
        (Left, Up, false) => glyph::TURN_RIGHT_DOWN,
        (Left, Down, false) => glyph::TURN_RIGHT_UP,
        _ => return None,
    };
    Some(code)
}
