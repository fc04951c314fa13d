//! The instruction set: one variant per character the engine dispatches.
//!
//! Any character without a variant (space, letters, punctuation the
//! language does not assign) is a no-op when fetched.

use befunge_types::Direction;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // ── Literals ──
    /// `0`–`9`: push the digit's value.
    Digit(u8),

    // ── Arithmetic & comparison (pop a, pop b, push b OP a) ──
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    /// `!`
    Not,
    /// `` ` ``
    GreaterThan,

    // ── Control flow ──
    /// `>` `<` `^` `v`
    Go(Direction),
    /// `?`
    Random,
    /// `_`: right on zero, left otherwise.
    HorizontalIf,
    /// `|`: down on zero, up otherwise.
    VerticalIf,
    /// `#`
    Trampoline,
    /// `@`
    End,

    // ── Stack manipulation ──
    /// `"`
    StringMode,
    /// `:`
    Duplicate,
    /// `\`
    Swap,
    /// `$`
    Discard,

    // ── Output ──
    /// `.`
    OutputInteger,
    /// `,`
    OutputChar,

    // ── Self-modification ──
    /// `p`
    Put,
    /// `g`
    Get,
}

impl Opcode {
    /// Map a fetched character to its opcode.
    pub fn decode(ch: char) -> Option<Opcode> {
        if let Some(direction) = Direction::from_glyph(ch) {
            return Some(Opcode::Go(direction));
        }
        let op = match ch {
            '0'..='9' => Opcode::Digit(ch as u8 - b'0'),
            '+' => Opcode::Add,
            '-' => Opcode::Subtract,
            '*' => Opcode::Multiply,
            '/' => Opcode::Divide,
            '%' => Opcode::Modulo,
            '!' => Opcode::Not,
            '`' => Opcode::GreaterThan,
            '?' => Opcode::Random,
            '_' => Opcode::HorizontalIf,
            '|' => Opcode::VerticalIf,
            '#' => Opcode::Trampoline,
            '@' => Opcode::End,
            '"' => Opcode::StringMode,
            ':' => Opcode::Duplicate,
            '\\' => Opcode::Swap,
            '$' => Opcode::Discard,
            '.' => Opcode::OutputInteger,
            ',' => Opcode::OutputChar,
            'p' => Opcode::Put,
            'g' => Opcode::Get,
            _ => return None,
        };
        Some(op)
    }

    /// The source character for this opcode.
    pub fn glyph(self) -> char {
        match self {
            Opcode::Digit(d) => char::from(b'0' + d),
            Opcode::Add => '+',
            Opcode::Subtract => '-',
            Opcode::Multiply => '*',
            Opcode::Divide => '/',
            Opcode::Modulo => '%',
            Opcode::Not => '!',
            Opcode::GreaterThan => '`',
            Opcode::Go(direction) => direction.glyph(),
            Opcode::Random => '?',
            Opcode::HorizontalIf => '_',
            Opcode::VerticalIf => '|',
            Opcode::Trampoline => '#',
            Opcode::End => '@',
            Opcode::StringMode => '"',
            Opcode::Duplicate => ':',
            Opcode::Swap => '\\',
            Opcode::Discard => '$',
            Opcode::OutputInteger => '.',
            Opcode::OutputChar => ',',
            Opcode::Put => 'p',
            Opcode::Get => 'g',
        }
    }

    /// Stable lowercase name, used in trace output.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Digit(_) => "push_digit",
            Opcode::Add => "add",
            Opcode::Subtract => "sub",
            Opcode::Multiply => "mul",
            Opcode::Divide => "div",
            Opcode::Modulo => "mod",
            Opcode::Not => "not",
            Opcode::GreaterThan => "gt",
            Opcode::Go(Direction::Right) => "go_right",
            Opcode::Go(Direction::Left) => "go_left",
            Opcode::Go(Direction::Up) => "go_up",
            Opcode::Go(Direction::Down) => "go_down",
            Opcode::Random => "go_random",
            Opcode::HorizontalIf => "if_horizontal",
            Opcode::VerticalIf => "if_vertical",
            Opcode::Trampoline => "trampoline",
            Opcode::End => "end",
            Opcode::StringMode => "string_mode",
            Opcode::Duplicate => "dup",
            Opcode::Swap => "swap",
            Opcode::Discard => "discard",
            Opcode::OutputInteger => "out_int",
            Opcode::OutputChar => "out_char",
            Opcode::Put => "put",
            Opcode::Get => "get",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.mnemonic(), self.glyph())
    }
}
