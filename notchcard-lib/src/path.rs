//! A small model of SVG path data.
//!
//! We only ever write absolute commands, and only the handful that the card
//! outline is made of; this lets us write the outline once and then either
//! format it for a surface that wants a `d` attribute, or turn it into a
//! [`BezPath`] for a surface that draws natively. Reading goes through the
//! `svg` crate, so relative and compact forms are accepted too.

use std::fmt::{self, Write};
use std::str::FromStr;

use piet::kurbo::{BezPath, Point};
use svg::node::element::path::{Command, Data, Parameters, Position};

/// A single absolute path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Horizontal line to the given x, keeping the current y.
    HorizontalTo(f64),
    /// Vertical line to the given y, keeping the current x.
    VerticalTo(f64),
    CurveTo(Point, Point, Point),
    Close,
}

/// An ordered list of path commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

/// Errors that occur when reading path data from a string.
#[derive(Debug, Clone, PartialEq)]
pub enum PathParseError {
    /// The text is not SVG path data at all.
    Syntax(String),
    /// A command we do not draw: quadratic curves, smooth curves and arcs.
    Unsupported(char),
    /// A command was missing one or more of its arguments.
    MissingNumber(char),
    /// Path data has to start with a move.
    MissingMove,
}

impl PathData {
    pub fn new() -> PathData {
        PathData::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.commands.push(PathCommand::MoveTo(p.into()));
    }

    pub fn line_to(&mut self, p: impl Into<Point>) {
        self.commands.push(PathCommand::LineTo(p.into()));
    }

    pub fn horizontal_to(&mut self, x: f64) {
        self.commands.push(PathCommand::HorizontalTo(x));
    }

    pub fn vertical_to(&mut self, y: f64) {
        self.commands.push(PathCommand::VerticalTo(y));
    }

    pub fn curve_to(&mut self, p1: impl Into<Point>, p2: impl Into<Point>, p3: impl Into<Point>) {
        self.commands
            .push(PathCommand::CurveTo(p1.into(), p2.into(), p3.into()));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// The x coordinate of the first horizontal line after the initial move.
    ///
    /// For the card outline this is where the top edge stops and the curve
    /// into the notch begins.
    pub fn first_horizontal(&self) -> Option<f64> {
        self.commands
            .iter()
            .skip_while(|cmd| !matches!(cmd, PathCommand::MoveTo(_)))
            .find_map(|cmd| match cmd {
                PathCommand::HorizontalTo(x) => Some(*x),
                _ => None,
            })
    }

    /// Convert to a kurbo path, resolving horizontal and vertical lines
    /// against the current point.
    pub fn to_bezpath(&self) -> BezPath {
        let mut bez = BezPath::new();
        let mut current = Point::ORIGIN;
        let mut start = Point::ORIGIN;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    bez.move_to(p);
                    current = p;
                    start = p;
                }
                PathCommand::LineTo(p) => {
                    bez.line_to(p);
                    current = p;
                }
                PathCommand::HorizontalTo(x) => {
                    current = Point::new(x, current.y);
                    bez.line_to(current);
                }
                PathCommand::VerticalTo(y) => {
                    current = Point::new(current.x, y);
                    bez.line_to(current);
                }
                PathCommand::CurveTo(p1, p2, p3) => {
                    bez.curve_to(p1, p2, p3);
                    current = p3;
                }
                PathCommand::Close => {
                    bez.close_path();
                    current = start;
                }
            }
        }
        bez
    }
}

/// Formats a coordinate the way it should appear in path data: `188`, not
/// `188.0`, and never `-0`.
pub(crate) struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_char('0')
        } else {
            fmt::Display::fmt(&self.0, f)
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PathCommand::MoveTo(p) => write!(f, "M{} {}", Num(p.x), Num(p.y)),
            PathCommand::LineTo(p) => write!(f, "L{} {}", Num(p.x), Num(p.y)),
            PathCommand::HorizontalTo(x) => write!(f, "H{}", Num(x)),
            PathCommand::VerticalTo(y) => write!(f, "V{}", Num(y)),
            PathCommand::CurveTo(p1, p2, p3) => write!(
                f,
                "C{} {} {} {} {} {}",
                Num(p1.x),
                Num(p1.y),
                Num(p2.x),
                Num(p2.y),
                Num(p3.x),
                Num(p3.y)
            ),
            PathCommand::Close => f.write_char('Z'),
        }
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            fmt::Display::fmt(cmd, f)?;
        }
        Ok(())
    }
}

/// Tracks where the pen is, so relative commands can be made absolute.
#[derive(Debug, Default)]
struct Pen {
    current: Point,
    start: Point,
}

impl Pen {
    fn resolve(&self, pos: &Position, x: f64, y: f64) -> Point {
        match pos {
            Position::Absolute => Point::new(x, y),
            Position::Relative => Point::new(self.current.x + x, self.current.y + y),
        }
    }
}

fn letter(pos: &Position, absolute: char) -> char {
    match pos {
        Position::Absolute => absolute,
        Position::Relative => absolute.to_ascii_lowercase(),
    }
}

/// The command's arguments, which must come in whole groups of `arity`.
fn arguments(params: &Parameters, arity: usize, letter: char) -> Result<Vec<f64>, PathParseError> {
    if params.is_empty() || params.len() % arity != 0 {
        return Err(PathParseError::MissingNumber(letter));
    }
    Ok(params.iter().map(|n| f64::from(*n)).collect())
}

impl FromStr for PathData {
    type Err = PathParseError;

    /// Read SVG path data, in any of the forms a browser accepts, as long as
    /// it only uses lines, cubic curves and closes.
    fn from_str(s: &str) -> Result<PathData, PathParseError> {
        let parsed = Data::parse(s).map_err(|e| PathParseError::Syntax(e.to_string()))?;
        let mut data = PathData::new();
        let mut pen = Pen::default();

        for command in parsed.iter() {
            if data.is_empty() && !matches!(command, Command::Move(..)) {
                return Err(PathParseError::MissingMove);
            }
            match command {
                Command::Move(pos, params) => {
                    let args = arguments(params, 2, letter(pos, 'M'))?;
                    // extra pairs after a move are implicit lines
                    for (i, xy) in args.chunks(2).enumerate() {
                        let p = pen.resolve(pos, xy[0], xy[1]);
                        if i == 0 {
                            data.move_to(p);
                            pen.start = p;
                        } else {
                            data.line_to(p);
                        }
                        pen.current = p;
                    }
                }
                Command::Line(pos, params) => {
                    for xy in arguments(params, 2, letter(pos, 'L'))?.chunks(2) {
                        let p = pen.resolve(pos, xy[0], xy[1]);
                        data.line_to(p);
                        pen.current = p;
                    }
                }
                Command::HorizontalLine(pos, params) => {
                    for x in arguments(params, 1, letter(pos, 'H'))? {
                        let x = match pos {
                            Position::Absolute => x,
                            Position::Relative => pen.current.x + x,
                        };
                        data.horizontal_to(x);
                        pen.current.x = x;
                    }
                }
                Command::VerticalLine(pos, params) => {
                    for y in arguments(params, 1, letter(pos, 'V'))? {
                        let y = match pos {
                            Position::Absolute => y,
                            Position::Relative => pen.current.y + y,
                        };
                        data.vertical_to(y);
                        pen.current.y = y;
                    }
                }
                Command::CubicCurve(pos, params) => {
                    for c in arguments(params, 6, letter(pos, 'C'))?.chunks(6) {
                        let p1 = pen.resolve(pos, c[0], c[1]);
                        let p2 = pen.resolve(pos, c[2], c[3]);
                        let p3 = pen.resolve(pos, c[4], c[5]);
                        data.curve_to(p1, p2, p3);
                        pen.current = p3;
                    }
                }
                Command::Close => {
                    data.close();
                    pen.current = pen.start;
                }
                Command::QuadraticCurve(pos, _) => {
                    return Err(PathParseError::Unsupported(letter(pos, 'Q')))
                }
                Command::SmoothQuadraticCurve(pos, _) => {
                    return Err(PathParseError::Unsupported(letter(pos, 'T')))
                }
                Command::SmoothCubicCurve(pos, _) => {
                    return Err(PathParseError::Unsupported(letter(pos, 'S')))
                }
                Command::EllipticalArc(pos, _) => {
                    return Err(PathParseError::Unsupported(letter(pos, 'A')))
                }
            }
        }

        if data.is_empty() {
            return Err(PathParseError::MissingMove);
        }
        Ok(data)
    }
}

impl fmt::Display for PathParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "malformed path data: '{}'", e),
            Self::Unsupported(c) => write!(f, "unsupported path command '{}'", c),
            Self::MissingNumber(c) => write!(f, "path command '{}' is missing arguments", c),
            Self::MissingMove => write!(f, "path data must begin with a move"),
        }
    }
}

impl std::error::Error for PathParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use piet::kurbo::PathEl;

    #[test]
    fn display_trims_integral_floats() {
        let mut data = PathData::new();
        data.move_to((16.0, 0.0));
        data.horizontal_to(188.0);
        data.horizontal_to(200.5);
        data.vertical_to(-0.0);
        data.close();
        assert_eq!(data.to_string(), "M16 0 H188 H200.5 V0 Z");
    }

    #[test]
    fn parse_outline_commands() {
        let data: PathData = "M16 0 H188 C196 0 200 8 200 12 V48 Z".parse().unwrap();
        assert_eq!(data.commands().len(), 5);
        assert_eq!(data.commands()[0], PathCommand::MoveTo(Point::new(16.0, 0.0)));
        assert_eq!(
            data.commands()[2],
            PathCommand::CurveTo(
                Point::new(196.0, 0.0),
                Point::new(200.0, 8.0),
                Point::new(200.0, 12.0)
            )
        );
        assert_eq!(data.first_horizontal(), Some(188.0));
    }

    #[test]
    fn parse_commas_signs_and_exponents() {
        let data: PathData = "M0,0 L-1.5,2e1 1,1 z".parse().unwrap();
        assert_eq!(
            data.commands(),
            &[
                PathCommand::MoveTo(Point::ORIGIN),
                PathCommand::LineTo(Point::new(-1.5, 20.0)),
                PathCommand::LineTo(Point::new(1.0, 1.0)),
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn parse_compact_and_relative() {
        let data: PathData = "M.5.5 H10 Z".parse().unwrap();
        assert_eq!(
            data.commands(),
            &[
                PathCommand::MoveTo(Point::new(0.5, 0.5)),
                PathCommand::HorizontalTo(10.0),
                PathCommand::Close,
            ]
        );

        let data: PathData = "M0 0 h10 v10 z".parse().unwrap();
        assert_eq!(data.commands().len(), 4);
        assert_eq!(data.commands()[1], PathCommand::HorizontalTo(10.0));
        assert_eq!(data.commands()[2], PathCommand::VerticalTo(10.0));

        let data: PathData = "m10,10 5-5 l5 5 c0,4 -4,4 -4,4 z m1 1".parse().unwrap();
        assert_eq!(
            data.commands(),
            &[
                PathCommand::MoveTo(Point::new(10.0, 10.0)),
                PathCommand::LineTo(Point::new(15.0, 5.0)),
                PathCommand::LineTo(Point::new(20.0, 10.0)),
                PathCommand::CurveTo(
                    Point::new(20.0, 14.0),
                    Point::new(16.0, 14.0),
                    Point::new(16.0, 14.0)
                ),
                PathCommand::Close,
                // after a close, relative moves start from the subpath start
                PathCommand::MoveTo(Point::new(11.0, 11.0)),
            ]
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!("H10".parse::<PathData>(), Err(PathParseError::MissingMove));
        assert_eq!("".parse::<PathData>(), Err(PathParseError::MissingMove));
        assert_eq!(
            "M0 0 C1 2 3".parse::<PathData>(),
            Err(PathParseError::MissingNumber('C'))
        );
        assert_eq!(
            "M0 0 A1 1 0 0 1 5 5".parse::<PathData>(),
            Err(PathParseError::Unsupported('A'))
        );
        assert_eq!(
            "M0 0 q1 1 2 2".parse::<PathData>(),
            Err(PathParseError::Unsupported('q'))
        );
        assert!(matches!(
            "M0 0 X1".parse::<PathData>(),
            Err(PathParseError::Syntax(_))
        ));
    }

    #[test]
    fn first_horizontal_needs_a_horizontal() {
        let data: PathData = "M0 0 L10 0 V10 Z".parse().unwrap();
        assert_eq!(data.first_horizontal(), None);
    }

    #[test]
    fn bezpath_resolves_axis_lines() {
        let data: PathData = "M16 0 H100 V48 H0 Z".parse().unwrap();
        let bez = data.to_bezpath();
        let els = bez.elements();
        assert_eq!(els[0], PathEl::MoveTo(Point::new(16.0, 0.0)));
        assert_eq!(els[1], PathEl::LineTo(Point::new(100.0, 0.0)));
        assert_eq!(els[2], PathEl::LineTo(Point::new(100.0, 48.0)));
        assert_eq!(els[3], PathEl::LineTo(Point::new(0.0, 48.0)));
        assert_eq!(els[4], PathEl::ClosePath);
    }
}
