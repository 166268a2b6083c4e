// SPDX: CC0-1.0

use crate::{color::Color, render::Renderer, settings::Settings, Number, Point, ScreenPoint};
use std::io::{self, Write};

const BACKGROUND: &str = "white";
const FONT_SIZE: u32 = 10;

/// Streams an SVG document to `out`, one element per line drawn.
///
/// SVG's y axis points down, so every point is flipped against the canvas
/// height on the way out.
#[derive(Debug)]
pub struct SvgRenderer<W: Write> {
    out: W,
    height: Number,
    color: Color,
    pen: Option<ScreenPoint>,
}

impl<W: Write> SvgRenderer<W> {
    pub fn new(mut out: W, settings: &Settings) -> io::Result<Self> {
        let (width, height) = (settings.width().get(), settings.height().get());
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(
            out,
            r#"<rect width="100%" height="100%" fill="{BACKGROUND}"/>"#
        )?;
        Ok(Self {
            out,
            height: Number::from(height),
            color: Color::Black,
            pen: None,
        })
    }

    /// Close the document and hand back the writer.
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.out, "</svg>")?;
        self.out.flush()?;
        Ok(self.out)
    }

    #[inline]
    fn flip(&self, p: ScreenPoint) -> Point<Number> {
        Point::new(p.x, self.height - p.y)
    }
}

impl<W: Write> Renderer for SvgRenderer<W> {
    type Err = io::Error;

    fn set_color(&mut self, color: Color) -> io::Result<()> {
        self.color = color;
        Ok(())
    }

    fn move_to(&mut self, p: ScreenPoint) -> io::Result<()> {
        self.pen = Some(p);
        Ok(())
    }

    fn line_to(&mut self, p: ScreenPoint) -> io::Result<()> {
        if let Some(from) = self.pen.replace(p) {
            let (a, b) = (self.flip(from), self.flip(p));
            writeln!(
                self.out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
                a.x, a.y, b.x, b.y, self.color
            )?;
        }
        Ok(())
    }

    fn write_text(&mut self, p: ScreenPoint, text: &str) -> io::Result<()> {
        let at = self.flip(p);
        writeln!(
            self.out,
            r#"<text x="{}" y="{}" fill="{}" font-size="{FONT_SIZE}">{}</text>"#,
            at.x,
            at.y,
            self.color,
            escape(text)
        )
    }
}

fn escape(text: &str) -> String {
    let mut s = String::with_capacity(text.len());
    for chr in text.chars() {
        match chr {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            _ => s.push(chr),
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut SvgRenderer<Vec<u8>>) -> io::Result<()>,
    {
        let mut svg = SvgRenderer::new(Vec::new(), &Settings::default()).unwrap();
        f(&mut svg).unwrap();
        String::from_utf8(svg.finish().unwrap()).unwrap()
    }

    #[test]
    fn document_is_closed() {
        let doc = render(|_| Ok(()));
        assert!(doc.starts_with("<svg "));
        assert!(doc.contains(r#"width="800" height="600""#));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn lines_are_flipped_vertically() {
        let doc = render(|svg| {
            svg.set_color(Color::Red)?;
            svg.line(Point::new(0.0, 0.0), Point::new(10.0, 600.0))
        });
        assert!(doc.contains(r#"<line x1="0" y1="600" x2="10" y2="0" stroke="red"/>"#));
    }

    #[test]
    fn move_alone_draws_nothing() {
        let doc = render(|svg| svg.move_to(Point::new(1.0, 1.0)));
        assert!(!doc.contains("<line"));
    }

    #[test]
    fn text_is_escaped() {
        let doc = render(|svg| svg.write_text(Point::new(5.0, 100.0), "a<b"));
        assert!(doc.contains(r#"<text x="5" y="500" fill="black" font-size="10">a&lt;b</text>"#));
    }
}
