// SPDX: CC0-1.0

use crate::{color::Color, ScreenPoint};
use core::convert::Infallible;

/// A pen on a fixed-size canvas.
///
/// Points are in pixels with `(0, 0)` at the bottom-left corner and y growing
/// upwards. Each call completes before the next one is issued; callers rely
/// on nothing else.
pub trait Renderer {
    type Err;

    fn set_color(&mut self, color: Color) -> Result<(), Self::Err>;

    /// Lift the pen and put it down at `p`.
    fn move_to(&mut self, p: ScreenPoint) -> Result<(), Self::Err>;

    /// Draw a straight line from the pen's position to `p`.
    fn line_to(&mut self, p: ScreenPoint) -> Result<(), Self::Err>;

    fn write_text(&mut self, p: ScreenPoint, text: &str) -> Result<(), Self::Err>;

    /// Convenience for a single disconnected line.
    fn line(&mut self, from: ScreenPoint, to: ScreenPoint) -> Result<(), Self::Err> {
        self.move_to(from)?;
        self.line_to(to)
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Err = R::Err;

    fn set_color(&mut self, color: Color) -> Result<(), Self::Err> {
        (**self).set_color(color)
    }

    fn move_to(&mut self, p: ScreenPoint) -> Result<(), Self::Err> {
        (**self).move_to(p)
    }

    fn line_to(&mut self, p: ScreenPoint) -> Result<(), Self::Err> {
        (**self).line_to(p)
    }

    fn write_text(&mut self, p: ScreenPoint, text: &str) -> Result<(), Self::Err> {
        (**self).write_text(p, text)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    SetColor(Color),
    MoveTo(ScreenPoint),
    LineTo(ScreenPoint),
    Text(ScreenPoint, String),
}

/// Renderer that only remembers what it was asked to draw.
#[derive(Clone, Debug, Default)]
pub struct Recording {
    pub cmds: Vec<DrawCmd>,
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every drawn line as `(from, to)`, in the order drawn.
    pub fn lines(&self) -> Vec<(ScreenPoint, ScreenPoint)> {
        let mut pen = None;
        let mut out = Vec::new();
        for cmd in &self.cmds {
            match cmd {
                DrawCmd::MoveTo(p) => pen = Some(*p),
                DrawCmd::LineTo(p) => {
                    if let Some(from) = pen {
                        out.push((from, *p));
                    }
                    pen = Some(*p);
                }
                DrawCmd::SetColor(_) | DrawCmd::Text(..) => {}
            }
        }
        out
    }

    pub fn texts(&self) -> impl Iterator<Item = (ScreenPoint, &str)> + '_ {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text(p, s) => Some((*p, s.as_str())),
            _ => None,
        })
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::SetColor(c) => Some(*c),
            _ => None,
        })
    }
}

impl Renderer for Recording {
    type Err = Infallible;

    fn set_color(&mut self, color: Color) -> Result<(), Self::Err> {
        self.cmds.push(DrawCmd::SetColor(color));
        Ok(())
    }

    fn move_to(&mut self, p: ScreenPoint) -> Result<(), Self::Err> {
        self.cmds.push(DrawCmd::MoveTo(p));
        Ok(())
    }

    fn line_to(&mut self, p: ScreenPoint) -> Result<(), Self::Err> {
        self.cmds.push(DrawCmd::LineTo(p));
        Ok(())
    }

    fn write_text(&mut self, p: ScreenPoint, text: &str) -> Result<(), Self::Err> {
        self.cmds.push(DrawCmd::Text(p, text.to_owned()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[test]
    fn lines_follow_the_pen() {
        let mut rec = Recording::new();
        let [a, b, c, d] = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(5.0, 5.0),
        ];
        rec.move_to(a).unwrap();
        rec.line_to(b).unwrap();
        rec.line_to(c).unwrap();
        rec.move_to(d).unwrap();
        rec.write_text(d, "hi").unwrap();
        assert_eq!(rec.lines(), [(a, b), (b, c)]);
        assert_eq!(rec.texts().collect::<Vec<_>>(), [(d, "hi")]);
    }

    #[test]
    fn line_to_without_pen_is_not_a_line() {
        let mut rec = Recording::new();
        rec.line_to(Point::new(1.0, 1.0)).unwrap();
        assert!(rec.lines().is_empty());
    }
}
