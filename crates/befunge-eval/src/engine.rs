//! The execution loop: advance, fetch, dispatch, repeat until `@`.

use crate::cursor::Cursor;
use crate::error::{EvalError, EvalResult};
use crate::opcode::Opcode;
use crate::random::{DirectionSource, RandomDirections};
use crate::stack::Stack;
use befunge_types::{Direction, Grid, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of steps `run()` takes before giving up.
    /// `None` runs until `@`, forever if it is never reached.
    #[serde(default)]
    pub step_limit: Option<u64>,
}

/// What a single call to [`Engine::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The cursor is outside the grid; nothing was fetched.
    Drifted,
    /// The fetched cell was discarded by a preceding `#`.
    Skipped,
    /// String mode pushed this code point.
    Literal(i64),
    /// The closing `"` of a string literal.
    StringToggled,
    /// An opcode was dispatched.
    Executed(Opcode),
    /// The fetched character is not an instruction.
    Ignored(char),
    /// The engine had already halted; nothing moved.
    Halted,
}

/// One program run: the grid, the cursor, the stack and the output.
///
/// All state is owned by the engine and dropped with it. Nothing is
/// shared between runs, including the random source.
pub struct Engine<R = RandomDirections> {
    grid: Grid,
    cursor: Cursor,
    stack: Stack,
    /// Output produced and not yet taken by the host.
    output: String,
    steps: u64,
    halted: bool,
    directions: R,
    config: EngineConfig,
}

impl Engine<RandomDirections> {
    /// Create an engine whose `?` draws from OS entropy.
    pub fn new(source: &str) -> Self {
        Self::with_directions(source, RandomDirections::from_entropy())
    }
}

impl<R: DirectionSource> Engine<R> {
    /// Create an engine with an injected source for `?`.
    pub fn with_directions(source: &str, directions: R) -> Self {
        Self::from_grid(Grid::from_source(source), directions)
    }

    /// Create an engine over an already built grid.
    pub fn from_grid(grid: Grid, directions: R) -> Self {
        Self {
            grid,
            cursor: Cursor::new(),
            stack: Stack::new(),
            output: String::new(),
            steps: 0,
            halted: false,
            directions,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    // ══════════════════════════════════════════════════════════════════════
    // Inspection
    // ══════════════════════════════════════════════════════════════════════

    /// The grid as it currently stands, including any `p` writes.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Loop iterations taken so far, drift steps included.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Drain the output produced so far.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Execution
    // ══════════════════════════════════════════════════════════════════════

    /// Step until `@` and return the output not yet taken.
    ///
    /// Without a step limit this never returns for a program that does
    /// not reach `@`.
    pub fn run(&mut self) -> EvalResult<String> {
        debug!(
            rows = self.grid.row_count(),
            step_limit = ?self.config.step_limit,
            "run started"
        );
        if self.grid.is_empty() {
            warn!("program has no cells and cannot reach `@`");
        }
        while !self.halted {
            if let Some(limit) = self.config.step_limit {
                if self.steps >= limit {
                    warn!(limit, position = %self.cursor.position, "step limit exceeded");
                    return Err(EvalError::StepLimitExceeded {
                        limit,
                        position: self.cursor.position,
                    });
                }
            }
            self.step();
        }
        debug!(steps = self.steps, output_len = self.output.len(), "run halted");
        Ok(self.output.clone())
    }

    /// Perform one iteration of the loop.
    pub fn step(&mut self) -> StepOutcome {
        if self.halted {
            return StepOutcome::Halted;
        }
        self.steps += 1;
        self.cursor.advance();

        let Some(ch) = self.grid.get(self.cursor.position) else {
            return StepOutcome::Drifted;
        };

        if self.cursor.skip_next {
            self.cursor.skip_next = false;
            return StepOutcome::Skipped;
        }

        if self.cursor.string_mode {
            if ch == '"' {
                self.cursor.string_mode = false;
                return StepOutcome::StringToggled;
            }
            let code = code_point(ch);
            self.stack.push(code);
            return StepOutcome::Literal(code);
        }

        match Opcode::decode(ch) {
            Some(op) => {
                trace!(position = %self.cursor.position, op = op.mnemonic(), "dispatch");
                self.execute(op);
                StepOutcome::Executed(op)
            }
            None => StepOutcome::Ignored(ch),
        }
    }

    fn execute(&mut self, op: Opcode) {
        match op {
            Opcode::Digit(d) => self.stack.push(i64::from(d)),

            Opcode::Add => {
                let (a, b) = self.pop_operands();
                self.stack.push(b.wrapping_add(a));
            }
            Opcode::Subtract => {
                let (a, b) = self.pop_operands();
                self.stack.push(b.wrapping_sub(a));
            }
            Opcode::Multiply => {
                let (a, b) = self.pop_operands();
                self.stack.push(b.wrapping_mul(a));
            }
            Opcode::Divide => {
                let (a, b) = self.pop_operands();
                self.stack.push(floor_div(b, a));
            }
            Opcode::Modulo => {
                let (a, b) = self.pop_operands();
                self.stack.push(floor_mod(b, a));
            }
            Opcode::Not => {
                let v = self.stack.pop_or_zero();
                self.stack.push(i64::from(v == 0));
            }
            Opcode::GreaterThan => {
                let (a, b) = self.pop_operands();
                self.stack.push(i64::from(b > a));
            }

            Opcode::Go(direction) => self.cursor.direction = direction,
            Opcode::Random => self.cursor.direction = self.directions.next_direction(),
            // An empty stack takes the nonzero branch.
            Opcode::HorizontalIf => {
                self.cursor.direction = match self.stack.pop() {
                    Some(0) => Direction::Right,
                    _ => Direction::Left,
                };
            }
            Opcode::VerticalIf => {
                self.cursor.direction = match self.stack.pop() {
                    Some(0) => Direction::Down,
                    _ => Direction::Up,
                };
            }
            Opcode::Trampoline => self.cursor.skip_next = true,
            Opcode::End => self.halted = true,

            Opcode::StringMode => self.cursor.string_mode = true,
            Opcode::Duplicate => {
                let top = self.stack.peek().unwrap_or(0);
                self.stack.push(top);
            }
            Opcode::Swap => {
                let (a, b) = self.pop_operands();
                self.stack.push(a);
                self.stack.push(b);
            }
            Opcode::Discard => {
                self.stack.pop();
            }

            Opcode::OutputInteger => {
                if let Some(v) = self.stack.pop() {
                    self.output.push_str(&v.to_string());
                }
            }
            Opcode::OutputChar => {
                if let Some(v) = self.stack.pop() {
                    self.output
                        .push(to_char(v).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
            }

            Opcode::Put => self.put(),
            Opcode::Get => self.get(),
        }
    }

    /// Pop `a`, then `b`, each reading as zero when missing.
    fn pop_operands(&mut self) -> (i64, i64) {
        let a = self.stack.pop_or_zero();
        let b = self.stack.pop_or_zero();
        (a, b)
    }

    // ── Self-modification ────────────────────────────────────────────────

    /// `p`: pop y, x, v and write `v` as a character at row y, column x.
    ///
    /// Underflow, a value that is not a character, or a target outside
    /// the grid leave the grid untouched. Operands already popped stay
    /// consumed.
    fn put(&mut self) {
        let Some(y) = self.stack.pop() else { return };
        let Some(x) = self.stack.pop() else { return };
        let Some(v) = self.stack.pop() else { return };
        let position = Position::new(y, x);
        let Some(ch) = to_char(v) else {
            trace!(%position, value = v, "put ignored: not a character");
            return;
        };
        match self.grid.put(position, ch) {
            Ok(()) => trace!(%position, ?ch, "put"),
            Err(err) => trace!(%err, "put ignored"),
        }
    }

    /// `g`: pop y, x and push the code point at row y, column x, or 0.
    fn get(&mut self) {
        let cell = match (self.stack.pop(), self.stack.pop()) {
            (Some(y), Some(x)) => self.grid.get(Position::new(y, x)),
            _ => None,
        };
        self.stack.push(cell.map_or(0, code_point));
    }
}

fn code_point(ch: char) -> i64 {
    i64::from(u32::from(ch))
}

fn to_char(value: i64) -> Option<char> {
    u32::try_from(value).ok().and_then(char::from_u32)
}

/// `b / a` rounded toward negative infinity; 0 when `a` is 0.
fn floor_div(b: i64, a: i64) -> i64 {
    if a == 0 {
        return 0;
    }
    let q = b.wrapping_div(a);
    if b.wrapping_rem(a) != 0 && ((b < 0) != (a < 0)) {
        q.wrapping_sub(1)
    } else {
        q
    }
}

/// `b mod a` with the sign of `a`; 0 when `a` is 0.
fn floor_mod(b: i64, a: i64) -> i64 {
    if a == 0 {
        return 0;
    }
    let r = b.wrapping_rem(a);
    if r != 0 && ((r < 0) != (a < 0)) {
        r + a
    } else {
        r
    }
}
