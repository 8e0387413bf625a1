//! Path data syntax (`M 0,0 L 10,0 ... Z`)
//!
//! Supports the full command set in absolute and relative form, implicit
//! repeated arguments, exponent notation and compact sign separators.

use super::{Path, Point, Segment};
use crate::error::GeometryError;
use std::fmt::Write;

impl Path {
    /// Parses path data into a path. Empty input yields an empty path.
    pub fn parse(data: &str) -> Result<Path, GeometryError> {
        PathDataParser::new(data).parse()
    }

    /// Writes the path as path data. Each sub-path starts with `M`; a
    /// closed sub-path ends with `Z`.
    pub fn to_data(&self) -> String {
        let mut out = String::new();
        for sub in self.subpaths() {
            let Some(start) = sub.start_point() else {
                continue;
            };
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "M {}", fmt_point(&start));

            let closed = sub.is_closed();
            let count = sub.len();
            for (index, segment) in sub.segments().iter().enumerate() {
                let closing = closed && index + 1 == count;
                match *segment {
                    Segment::Line { .. } if closing => {}
                    Segment::Line { end, .. } => {
                        let _ = write!(out, " L {}", fmt_point(&end));
                    }
                    Segment::QuadraticBezier { control, end, .. } => {
                        let _ = write!(out, " Q {} {}", fmt_point(&control), fmt_point(&end));
                    }
                    Segment::CubicBezier {
                        control1,
                        control2,
                        end,
                        ..
                    } => {
                        let _ = write!(
                            out,
                            " C {} {} {}",
                            fmt_point(&control1),
                            fmt_point(&control2),
                            fmt_point(&end)
                        );
                    }
                    Segment::Arc {
                        radius_x,
                        radius_y,
                        rotation,
                        large_arc,
                        sweep,
                        end,
                        ..
                    } => {
                        let _ = write!(
                            out,
                            " A {},{} {} {},{} {}",
                            fmt_num(radius_x),
                            fmt_num(radius_y),
                            fmt_num(rotation),
                            u8::from(large_arc),
                            u8::from(sweep),
                            fmt_point(&end)
                        );
                    }
                }
                if closing {
                    out.push_str(" Z");
                }
            }
        }
        out
    }
}

fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

fn fmt_point(point: &Point) -> String {
    format!("{},{}", fmt_num(point.x), fmt_num(point.y))
}

fn is_command_token(token: &str) -> bool {
    token.len() == 1 && token.chars().all(|c| c.is_ascii_alphabetic())
}

fn tokenize(path_data: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current_token = String::new();

    for ch in path_data.chars() {
        match ch {
            'M' | 'm' | 'L' | 'l' | 'H' | 'h' | 'V' | 'v' | 'C' | 'c' | 'S' | 's' | 'Q' | 'q'
            | 'T' | 't' | 'A' | 'a' | 'Z' | 'z' => {
                if !current_token.is_empty() {
                    tokens.push(std::mem::take(&mut current_token));
                }
                tokens.push(ch.to_string());
            }
            ' ' | ',' | '\n' | '\r' | '\t' => {
                if !current_token.is_empty() {
                    tokens.push(std::mem::take(&mut current_token));
                }
            }
            '-' | '+' => {
                if current_token.is_empty() {
                    current_token.push(ch);
                    continue;
                }

                // A sign right after an exponent belongs to the number.
                if matches!(current_token.chars().last(), Some('e' | 'E')) {
                    current_token.push(ch);
                } else {
                    tokens.push(std::mem::take(&mut current_token));
                    current_token.push(ch);
                }
            }
            '.' => {
                // A second decimal point starts the next number: "0.5.5".
                if current_token.contains(['.', 'e', 'E']) {
                    tokens.push(std::mem::take(&mut current_token));
                }
                current_token.push(ch);
            }
            _ => current_token.push(ch),
        }
    }

    if !current_token.is_empty() {
        tokens.push(current_token);
    }

    tokens
}

struct PathDataParser {
    tokens: Vec<String>,
    index: usize,
    path: Path,
    /// The next segment opens a new sub-path.
    new_subpath: bool,
    current: Point,
    subpath_start: Point,
    prev_cubic_ctrl: Option<Point>,
    prev_quad_ctrl: Option<Point>,
}

impl PathDataParser {
    fn new(data: &str) -> Self {
        Self {
            tokens: tokenize(data),
            index: 0,
            path: Path::new(),
            new_subpath: false,
            current: Point::default(),
            subpath_start: Point::default(),
            prev_cubic_ctrl: None,
            prev_quad_ctrl: None,
        }
    }

    fn parse(mut self) -> Result<Path, GeometryError> {
        let Some(first) = self.tokens.first() else {
            return Ok(Path::new());
        };
        if first != "M" && first != "m" {
            return Err(GeometryError::MissingMoveTo {
                found: first.clone(),
            });
        }

        let mut command = 'M';
        while self.index < self.tokens.len() {
            let token = &self.tokens[self.index];
            if is_command_token(token) {
                command = token.chars().next().unwrap_or('M');
                self.index += 1;
                if !"MmLlHhVvCcSsQqTtAaZz".contains(command) {
                    return Err(GeometryError::UnknownCommand {
                        command: command.to_string(),
                    });
                }
            } else if matches!(command, 'Z' | 'z') {
                return Err(GeometryError::UnknownCommand {
                    command: token.clone(),
                });
            }

            command = self.apply(command)?;
        }

        Ok(self.path)
    }

    /// Runs one command and returns the command implied for repeated
    /// arguments that follow it.
    fn apply(&mut self, command: char) -> Result<char, GeometryError> {
        let relative = command.is_ascii_lowercase();
        let origin = if relative { self.current } else { Point::default() };
        let mut cubic_ctrl = None;
        let mut quad_ctrl = None;
        let mut next = command;

        match command.to_ascii_uppercase() {
            'M' => {
                let p = self.point(command, &origin)?;
                self.current = p;
                self.subpath_start = p;
                self.new_subpath = true;
                next = if relative { 'l' } else { 'L' };
            }
            'L' => {
                let p = self.point(command, &origin)?;
                self.line_to(p);
            }
            'H' => {
                let x = self.number(command)? + origin.x;
                self.line_to(Point::new(x, self.current.y));
            }
            'V' => {
                let y = self.number(command)? + origin.y;
                self.line_to(Point::new(self.current.x, y));
            }
            'C' => {
                let control1 = self.point(command, &origin)?;
                let control2 = self.point(command, &origin)?;
                let end = self.point(command, &origin)?;
                self.curve_to(control1, control2, end);
                cubic_ctrl = Some(control2);
            }
            'S' => {
                let control1 = reflect(self.prev_cubic_ctrl, &self.current);
                let control2 = self.point(command, &origin)?;
                let end = self.point(command, &origin)?;
                self.curve_to(control1, control2, end);
                cubic_ctrl = Some(control2);
            }
            'Q' => {
                let control = self.point(command, &origin)?;
                let end = self.point(command, &origin)?;
                self.quad_to(control, end);
                quad_ctrl = Some(control);
            }
            'T' => {
                let control = reflect(self.prev_quad_ctrl, &self.current);
                let end = self.point(command, &origin)?;
                self.quad_to(control, end);
                quad_ctrl = Some(control);
            }
            'A' => {
                let radius_x = self.number(command)?.abs();
                let radius_y = self.number(command)?.abs();
                let rotation = self.number(command)?;
                let large_arc = self.flag()?;
                let sweep = self.flag()?;
                let end = self.point(command, &origin)?;
                let segment = Segment::Arc {
                    start: self.current,
                    radius_x,
                    radius_y,
                    rotation,
                    large_arc,
                    sweep,
                    end,
                };
                self.emit(segment);
                self.current = end;
            }
            _ => {
                // Z / z
                if self.current != self.subpath_start {
                    self.emit(Segment::line(self.current, self.subpath_start));
                }
                self.current = self.subpath_start;
                self.new_subpath = true;
            }
        }

        self.prev_cubic_ctrl = cubic_ctrl;
        self.prev_quad_ctrl = quad_ctrl;
        Ok(next)
    }

    fn emit(&mut self, segment: Segment) {
        if std::mem::take(&mut self.new_subpath) {
            self.path.move_to();
        }
        self.path.push(segment);
    }

    fn line_to(&mut self, end: Point) {
        self.emit(Segment::line(self.current, end));
        self.current = end;
    }

    fn curve_to(&mut self, control1: Point, control2: Point, end: Point) {
        self.emit(Segment::CubicBezier {
            start: self.current,
            control1,
            control2,
            end,
        });
        self.current = end;
    }

    fn quad_to(&mut self, control: Point, end: Point) {
        self.emit(Segment::QuadraticBezier {
            start: self.current,
            control,
            end,
        });
        self.current = end;
    }

    fn number(&mut self, command: char) -> Result<f64, GeometryError> {
        let token = self.tokens.get(self.index).cloned().unwrap_or_default();
        if is_command_token(&token) {
            return Err(GeometryError::ExpectedNumber {
                command,
                found: token,
            });
        }
        let value = token
            .parse::<f64>()
            .map_err(|_| GeometryError::ExpectedNumber {
                command,
                found: token.clone(),
            })?;
        self.index += 1;
        Ok(value)
    }

    fn point(&mut self, command: char, origin: &Point) -> Result<Point, GeometryError> {
        let x = self.number(command)?;
        let y = self.number(command)?;
        Ok(Point::new(origin.x + x, origin.y + y))
    }

    fn flag(&mut self) -> Result<bool, GeometryError> {
        let token = self.tokens.get(self.index).cloned().unwrap_or_default();
        let value = match token.as_str() {
            "0" => false,
            "1" => true,
            _ => return Err(GeometryError::InvalidArcFlag { found: token }),
        };
        self.index += 1;
        Ok(value)
    }
}

fn reflect(control: Option<Point>, around: &Point) -> Point {
    match control {
        Some(c) => Point::new(2.0 * around.x - c.x, 2.0 * around.y - c.y),
        None => *around,
    }
}
