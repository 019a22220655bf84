use std::fmt::{self, Display, Write};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A paint value: a named color, `[r, g, b]` or `[r, g, b, opacity]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl Default for Color {
    fn default() -> Self {
        Self::Named("none".into())
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::Named(value.into())
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{a})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineJoin::Arcs => "arcs",
            LineJoin::Bevel => "bevel",
            LineJoin::Miter => "miter",
            LineJoin::MiterClip => "miter-clip",
            LineJoin::Round => "round",
        })
    }
}

/// Presentation attributes shared by every shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paint {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    pub line_cap: Option<LineCap>,
    pub line_join: Option<LineJoin>,
}

impl Paint {
    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = Some(width);
        self
    }

    pub fn rounded(mut self) -> Self {
        self.line_cap = Some(LineCap::Round);
        self.line_join = Some(LineJoin::Round);
        self
    }

    fn write_attributes(&self, out: &mut impl Write) -> fmt::Result {
        if let Some(fill) = &self.fill {
            write!(out, " fill=\"{fill}\"")?;
        }
        if let Some(stroke) = &self.stroke {
            write!(out, " stroke=\"{stroke}\"")?;
        }
        if let Some(width) = self.stroke_width {
            write!(out, " stroke-width=\"{width}\"")?;
        }
        if let Some(cap) = self.line_cap {
            write!(out, " stroke-linecap=\"{cap}\"")?;
        }
        if let Some(join) = self.line_join {
            write!(out, " stroke-linejoin=\"{join}\"")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub position: Point,
    pub offset: Point,
    pub font_size: u32,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Circle {
        center: Point,
        radius: f64,
        paint: Paint,
    },
    Polyline {
        points: Vec<Point>,
        paint: Paint,
    },
    Text {
        text: Text,
        paint: Paint,
    },
}

impl Element {
    fn write(&self, out: &mut impl Write) -> fmt::Result {
        match self {
            Element::Circle {
                center,
                radius,
                paint,
            } => {
                write!(
                    out,
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{radius}\"",
                    center.x, center.y
                )?;
                paint.write_attributes(out)?;
                out.write_str("/>")
            }
            Element::Polyline { points, paint } => {
                out.write_str("<polyline points=\"")?;
                for (i, point) in points.iter().enumerate() {
                    if i > 0 {
                        out.write_char(' ')?;
                    }
                    write!(out, "{},{}", point.x, point.y)?;
                }
                out.write_char('"')?;
                paint.write_attributes(out)?;
                out.write_str("/>")
            }
            Element::Text { text, paint } => {
                out.write_str("<text")?;
                paint.write_attributes(out)?;
                write!(
                    out,
                    " x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
                    text.position.x, text.position.y, text.offset.x, text.offset.y, text.font_size
                )?;
                if let Some(family) = &text.font_family {
                    write!(out, " font-family=\"{family}\"")?;
                }
                if let Some(weight) = &text.font_weight {
                    write!(out, " font-weight=\"{weight}\"")?;
                }
                out.write_char('>')?;
                write_escaped(out, &text.data)?;
                out.write_str("</text>")
            }
        }
    }
}

fn write_escaped(out: &mut impl Write, data: &str) -> fmt::Result {
    for c in data.chars() {
        match c {
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&apos;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '&' => out.write_str("&amp;")?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}

/// An SVG document; elements are drawn in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>")?;
        writeln!(f, "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">")?;
        for element in self.elements.iter() {
            f.write_str("  ")?;
            element.write(f)?;
            f.write_char('\n')?;
        }
        f.write_str("</svg>")
    }
}

#[test]
fn escapes_text() {
    let mut document = Document::new();
    document.add(Element::Text {
        text: Text {
            position: Point::default(),
            offset: Point::default(),
            font_size: 12,
            font_family: None,
            font_weight: None,
            data: "Tom & \"Jerry\" <3".into(),
        },
        paint: Paint::default(),
    });
    let svg = document.to_string();
    assert!(svg.contains(">Tom &amp; &quot;Jerry&quot; &lt;3</text>"));
}

#[test]
fn color_display() {
    assert_eq!(Color::from("red").to_string(), "red");
    assert_eq!(Color::Rgb(255, 16, 12).to_string(), "rgb(255,16,12)");
    assert_eq!(Color::Rgba(255, 200, 23, 0.85).to_string(), "rgba(255,200,23,0.85)");
}
