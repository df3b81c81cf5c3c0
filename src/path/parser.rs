use crate::{
    foundation::core::{CubicBez, Point},
    foundation::error::MorphResult,
    path::arc::arc_to_cubics,
    path::model::{PathDocument, Subpath, line_cubic, quad_cubic},
    path::tokenizer::{PathCommand, PathTokenizer},
};

/// Parse SVG path data into cubic subpaths.
///
/// Every primitive is converted exactly (lines, quadratics) or by the standard quarter-turn
/// approximation (arcs). Errors carry the byte offset of the offending token; nothing that
/// was parsed before the error is returned.
pub fn parse(path_data: &str) -> MorphResult<PathDocument> {
    let mut builder = CubicBuilder::default();
    for cmd in PathTokenizer::new(path_data) {
        builder.push(cmd?);
    }
    Ok(builder.finish())
}

/// Accumulates commands into subpaths, tracking the state needed by relative and smooth
/// commands.
#[derive(Default)]
struct CubicBuilder {
    done: Vec<Subpath>,
    segments: Vec<CubicBez>,
    current: Point,
    start: Point,
    // Second control point of the previous command, when it was a cubic.
    last_cubic_ctrl: Option<Point>,
    // Control point of the previous command, when it was a quadratic.
    last_quad_ctrl: Option<Point>,
}

impl CubicBuilder {
    fn resolve(&self, abs: bool, p: Point) -> Point {
        if abs { p } else { self.current + p.to_vec2() }
    }

    fn reflect(&self, ctrl: Option<Point>) -> Point {
        match ctrl {
            Some(c) => self.current + (self.current - c),
            None => self.current,
        }
    }

    fn flush(&mut self) {
        if !self.segments.is_empty() {
            self.done
                .push(Subpath::new(std::mem::take(&mut self.segments)));
        }
    }

    fn segment(&mut self, seg: CubicBez) {
        self.current = seg.p3;
        self.segments.push(seg);
    }

    fn push(&mut self, cmd: PathCommand) {
        let mut cubic_ctrl = None;
        let mut quad_ctrl = None;

        match cmd {
            PathCommand::MoveTo { abs, to } => {
                self.flush();
                self.current = self.resolve(abs, to);
                self.start = self.current;
            }
            PathCommand::LineTo { abs, to } => {
                let to = self.resolve(abs, to);
                self.segment(line_cubic(self.current, to));
            }
            PathCommand::HorizontalTo { abs, x } => {
                let x = if abs { x } else { self.current.x + x };
                self.segment(line_cubic(self.current, Point::new(x, self.current.y)));
            }
            PathCommand::VerticalTo { abs, y } => {
                let y = if abs { y } else { self.current.y + y };
                self.segment(line_cubic(self.current, Point::new(self.current.x, y)));
            }
            PathCommand::CubicTo {
                abs,
                ctrl1,
                ctrl2,
                to,
            } => {
                let c1 = self.resolve(abs, ctrl1);
                let c2 = self.resolve(abs, ctrl2);
                let to = self.resolve(abs, to);
                self.segment(CubicBez::new(self.current, c1, c2, to));
                cubic_ctrl = Some(c2);
            }
            PathCommand::SmoothCubicTo { abs, ctrl2, to } => {
                let c1 = self.reflect(self.last_cubic_ctrl);
                let c2 = self.resolve(abs, ctrl2);
                let to = self.resolve(abs, to);
                self.segment(CubicBez::new(self.current, c1, c2, to));
                cubic_ctrl = Some(c2);
            }
            PathCommand::QuadTo { abs, ctrl, to } => {
                let c = self.resolve(abs, ctrl);
                let to = self.resolve(abs, to);
                self.segment(quad_cubic(self.current, c, to));
                quad_ctrl = Some(c);
            }
            PathCommand::SmoothQuadTo { abs, to } => {
                let c = self.reflect(self.last_quad_ctrl);
                let to = self.resolve(abs, to);
                self.segment(quad_cubic(self.current, c, to));
                quad_ctrl = Some(c);
            }
            PathCommand::ArcTo {
                abs,
                radii,
                x_rotation_deg,
                large_arc,
                sweep,
                to,
            } => {
                let to = self.resolve(abs, to);
                for seg in arc_to_cubics(self.current, radii, x_rotation_deg, large_arc, sweep, to)
                {
                    self.segment(seg);
                }
                // Arcs end exactly on the requested point even if the chain rounds.
                self.current = to;
            }
            PathCommand::Close => {
                if self.current != self.start {
                    self.segment(line_cubic(self.current, self.start));
                }
                self.flush();
                self.current = self.start;
            }
        }

        self.last_cubic_ctrl = cubic_ctrl;
        self.last_quad_ctrl = quad_ctrl;
    }

    fn finish(mut self) -> PathDocument {
        self.flush();
        PathDocument::new(self.done)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/parser.rs"]
mod tests;
