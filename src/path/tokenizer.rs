//! Streaming tokenizer for the SVG path mini-language.
//!
//! The tokenizer yields one [`PathCommand`] per drawn primitive, expanding implicit command
//! repetition (`L 1 2 3 4` yields two `LineTo`s, extra pairs after a move become line-tos).
//! Coordinates are reported as written; `abs == false` means they are offsets from the
//! current point and the consumer resolves them.

use crate::{
    foundation::core::{Point, Vec2},
    foundation::error::{MorphError, MorphResult},
};

/// One path primitive, as written in the source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// `M` / `m`.
    MoveTo { abs: bool, to: Point },
    /// `L` / `l`.
    LineTo { abs: bool, to: Point },
    /// `H` / `h`.
    HorizontalTo { abs: bool, x: f64 },
    /// `V` / `v`.
    VerticalTo { abs: bool, y: f64 },
    /// `C` / `c`.
    CubicTo {
        abs: bool,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    /// `S` / `s`.
    SmoothCubicTo { abs: bool, ctrl2: Point, to: Point },
    /// `Q` / `q`.
    QuadTo { abs: bool, ctrl: Point, to: Point },
    /// `T` / `t`.
    SmoothQuadTo { abs: bool, to: Point },
    /// `A` / `a`.
    ArcTo {
        abs: bool,
        radii: Vec2,
        x_rotation_deg: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    /// `Z` / `z`.
    Close,
}

/// Iterator over the commands of a path-data string.
///
/// After the first error the iterator is fused and yields `None`.
pub struct PathTokenizer<'a> {
    src: &'a [u8],
    pos: usize,
    current: Option<u8>,
    failed: bool,
}

impl<'a> PathTokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src: src.as_bytes(),
            pos: 0,
            current: None,
            failed: false,
        }
    }

    fn skip_separators(&mut self) {
        while let Some(&c) = self.src.get(self.pos) {
            if is_wsp(c) || c == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn skip_wsp(&mut self) {
        while self.src.get(self.pos).is_some_and(|&c| is_wsp(c)) {
            self.pos += 1;
        }
    }

    fn number(&mut self) -> MorphResult<f64> {
        self.skip_separators();
        let start = self.pos;
        let mut i = self.pos;

        if matches!(self.src.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let int_start = i;
        while self.src.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        let mut digits = i - int_start;
        if self.src.get(i) == Some(&b'.') {
            i += 1;
            let frac_start = i;
            while self.src.get(i).is_some_and(u8::is_ascii_digit) {
                i += 1;
            }
            digits += i - frac_start;
        }
        if digits == 0 {
            return Err(MorphError::parse(start, "expected number"));
        }
        if matches!(self.src.get(i), Some(b'e' | b'E')) {
            let mut j = i + 1;
            if matches!(self.src.get(j), Some(b'+' | b'-')) {
                j += 1;
            }
            let exp_start = j;
            while self.src.get(j).is_some_and(u8::is_ascii_digit) {
                j += 1;
            }
            if j == exp_start {
                return Err(MorphError::parse(i, "malformed exponent"));
            }
            i = j;
        }

        // The scanned range is ASCII by construction.
        let text = std::str::from_utf8(&self.src[start..i])
            .map_err(|e| MorphError::parse(start, e.to_string()))?;
        let value: f64 = text
            .parse()
            .map_err(|_| MorphError::parse(start, format!("invalid number '{text}'")))?;
        if !value.is_finite() {
            return Err(MorphError::parse(start, format!("non-finite number '{text}'")));
        }
        self.pos = i;
        Ok(value)
    }

    fn flag(&mut self) -> MorphResult<bool> {
        self.skip_separators();
        match self.src.get(self.pos) {
            Some(b'0') => {
                self.pos += 1;
                Ok(false)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(true)
            }
            _ => Err(MorphError::parse(self.pos, "expected arc flag '0' or '1'")),
        }
    }

    fn point(&mut self) -> MorphResult<Point> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(Point::new(x, y))
    }

    fn arguments(&mut self, cmd: u8) -> MorphResult<PathCommand> {
        let abs = cmd.is_ascii_uppercase();
        let out = match cmd.to_ascii_uppercase() {
            b'M' => PathCommand::MoveTo {
                abs,
                to: self.point()?,
            },
            b'L' => PathCommand::LineTo {
                abs,
                to: self.point()?,
            },
            b'H' => PathCommand::HorizontalTo {
                abs,
                x: self.number()?,
            },
            b'V' => PathCommand::VerticalTo {
                abs,
                y: self.number()?,
            },
            b'C' => PathCommand::CubicTo {
                abs,
                ctrl1: self.point()?,
                ctrl2: self.point()?,
                to: self.point()?,
            },
            b'S' => PathCommand::SmoothCubicTo {
                abs,
                ctrl2: self.point()?,
                to: self.point()?,
            },
            b'Q' => PathCommand::QuadTo {
                abs,
                ctrl: self.point()?,
                to: self.point()?,
            },
            b'T' => PathCommand::SmoothQuadTo {
                abs,
                to: self.point()?,
            },
            b'A' => {
                let rx = self.number()?;
                let ry = self.number()?;
                let x_rotation_deg = self.number()?;
                let large_arc = self.flag()?;
                let sweep = self.flag()?;
                PathCommand::ArcTo {
                    abs,
                    radii: Vec2::new(rx, ry),
                    x_rotation_deg,
                    large_arc,
                    sweep,
                    to: self.point()?,
                }
            }
            _ => {
                return Err(MorphError::parse(
                    self.pos,
                    format!("unknown command '{}'", cmd as char),
                ));
            }
        };
        Ok(out)
    }

    fn next_command(&mut self) -> Option<MorphResult<PathCommand>> {
        self.skip_wsp();
        let &c = self.src.get(self.pos)?;

        if c.is_ascii_alphabetic() {
            if !is_command(c) {
                return Some(Err(MorphError::parse(
                    self.pos,
                    format!("unknown command '{}'", c as char),
                )));
            }
            self.pos += 1;
            self.current = Some(c);
            if c == b'Z' || c == b'z' {
                return Some(Ok(PathCommand::Close));
            }
            return Some(self.arguments(c));
        }

        // Implicit repetition of the previous command.
        self.skip_separators();
        if self.pos >= self.src.len() {
            return None;
        }
        let cmd = match self.current {
            None => {
                return Some(Err(MorphError::parse(
                    self.pos,
                    "path data must start with a command",
                )));
            }
            Some(b'Z' | b'z') => {
                return Some(Err(MorphError::parse(
                    self.pos,
                    "unexpected arguments after close-path",
                )));
            }
            Some(b'M') => b'L',
            Some(b'm') => b'l',
            Some(other) => other,
        };
        self.current = Some(cmd);
        Some(self.arguments(cmd))
    }
}

impl Iterator for PathTokenizer<'_> {
    type Item = MorphResult<PathCommand>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.next_command();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

fn is_wsp(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | b'\x0C')
}

fn is_command(c: u8) -> bool {
    matches!(
        c.to_ascii_uppercase(),
        b'M' | b'L' | b'H' | b'V' | b'C' | b'S' | b'Q' | b'T' | b'A' | b'Z'
    )
}

#[cfg(test)]
#[path = "../../tests/unit/path/tokenizer.rs"]
mod tests;
