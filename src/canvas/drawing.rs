use super::{Align, Canvas, CellFormat, FontSpec, FooterFn, ShapeStyle, Weight};
use crate::colour::Colour;
use crate::layout::{split_lines, PageGeometry};
use crate::metrics::GlyphMetrics;
use crate::units::Mm;
use crate::Result;

/// Vertical position of a text baseline inside a cell, as a fraction of the font size below
/// the cell's middle
const BASELINE_DROP: f32 = 0.3;
/// Underline position and thickness as fractions of the font size
const UNDERLINE_OFFSET: f32 = 0.1;
const UNDERLINE_THICKNESS: f32 = 0.05;
/// Stroke width for outlines and rules
pub const LINE_WIDTH: Mm = Mm(0.2);

/// A primitive shape in page space, top-left origin, millimetres
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { x: Mm, y: Mm, w: Mm, h: Mm },
    RoundedRect { x: Mm, y: Mm, w: Mm, h: Mm, radius: Mm },
    Circle { cx: Mm, cy: Mm, radius: Mm },
    Line { x1: Mm, y1: Mm, x2: Mm, y2: Mm },
}

/// How a shape gets painted
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Paint {
    pub fill: Option<Colour>,
    pub stroke: Option<Colour>,
    pub line_width: Mm,
}

/// The backend a [Drawing] paints onto
pub trait Surface {
    fn begin_page(&mut self, width: Mm, height: Mm);
    /// Show `text` with its left end at `x` and its baseline at `baseline`
    fn text(&mut self, x: Mm, baseline: Mm, text: &str, font: FontSpec, colour: Colour);
    fn shape(&mut self, shape: Shape, paint: Paint);
    fn bookmark(&mut self, title: &str);
    fn metrics(&self, weight: Weight) -> &dyn GlyphMetrics;
    fn finish(&mut self) -> Result<Vec<u8>>;
}

/// Graphics state tracked between drawing calls
#[derive(Debug, Copy, Clone, PartialEq)]
struct State {
    font: FontSpec,
    fill: Colour,
    text: Colour,
    draw: Colour,
}

/// A [Canvas] over any [Surface]: keeps the cursor, current font and colours, lays cells
/// out and runs the footer at the end of every page.
pub struct Drawing<S: Surface> {
    surface: S,
    geometry: PageGeometry,
    state: State,
    x: Mm,
    y: Mm,
    pages: usize,
    footer: Option<FooterFn>,
    finished: bool,
}

impl<S: Surface> Drawing<S> {
    pub fn new(surface: S, geometry: PageGeometry) -> Drawing<S> {
        Drawing {
            surface,
            geometry,
            state: State {
                font: FontSpec::default(),
                fill: Colour::new_grey(1.0),
                text: Colour::new_grey(0.0),
                draw: Colour::new_grey(0.0),
            },
            x: geometry.margins.left,
            y: geometry.margins.top,
            pages: 0,
            footer: None,
            finished: false,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn metrics(&self) -> &dyn GlyphMetrics {
        self.surface.metrics(self.state.font.weight)
    }

    fn run_footer(&mut self) {
        if let Some(footer) = self.footer.take() {
            let saved = self.state;
            let (x, y) = (self.x, self.y);
            footer(self);
            self.state = saved;
            self.x = x;
            self.y = y;
            self.footer = Some(footer);
        }
    }

    fn paint(&self, style: ShapeStyle) -> Paint {
        Paint {
            fill: style.fills().then_some(self.state.fill),
            stroke: style.strokes().then_some(self.state.draw),
            line_width: LINE_WIDTH,
        }
    }
}

impl<S: Surface> Canvas for Drawing<S> {
    fn set_fill_colour(&mut self, colour: Colour) {
        self.state.fill = colour;
    }

    fn set_text_colour(&mut self, colour: Colour) {
        self.state.text = colour;
    }

    fn set_draw_colour(&mut self, colour: Colour) {
        self.state.draw = colour;
    }

    fn set_font(&mut self, font: FontSpec) {
        self.state.font = font;
    }

    fn font(&self) -> FontSpec {
        self.state.font
    }

    fn x(&self) -> Mm {
        self.x
    }

    fn y(&self) -> Mm {
        self.y
    }

    fn set_x(&mut self, x: Mm) {
        self.x = x;
    }

    fn set_y(&mut self, y: Mm) {
        self.x = self.geometry.margins.left;
        self.y = y;
    }

    fn set_xy(&mut self, x: Mm, y: Mm) {
        self.y = y;
        self.x = x;
    }

    fn ln(&mut self, h: Mm) {
        self.x = self.geometry.margins.left;
        self.y += h;
    }

    fn cell(&mut self, w: Mm, h: Mm, text: &str, format: CellFormat) {
        let w = if w.0 == 0.0 {
            self.geometry.right_edge() - self.x
        } else {
            w
        };

        if format.fill || format.border {
            let style = match (format.fill, format.border) {
                (true, true) => ShapeStyle::FillStroke,
                (true, false) => ShapeStyle::Fill,
                _ => ShapeStyle::Stroke,
            };
            let paint = self.paint(style);
            self.surface.shape(
                Shape::Rect {
                    x: self.x,
                    y: self.y,
                    w,
                    h,
                },
                paint,
            );
        }

        if !text.is_empty() {
            let font = self.state.font;
            let size = font.size_mm();
            let text_width = self.text_width(text);
            let margin = self.geometry.cell_margin;
            let dx = match format.align {
                Align::Left => margin,
                Align::Center => (w - text_width) / 2.0,
                Align::Right => w - margin - text_width,
            };
            let baseline = self.y + h * 0.5 + size * BASELINE_DROP;
            self.surface
                .text(self.x + dx, baseline, text, font, self.state.text);

            if font.underline {
                self.surface.shape(
                    Shape::Rect {
                        x: self.x + dx,
                        y: baseline + size * UNDERLINE_OFFSET,
                        w: text_width,
                        h: size * UNDERLINE_THICKNESS,
                    },
                    Paint {
                        fill: Some(self.state.text),
                        stroke: None,
                        line_width: LINE_WIDTH,
                    },
                );
            }
        }

        if format.ln {
            self.x = self.geometry.margins.left;
            self.y += h;
        } else {
            self.x += w;
        }
    }

    fn multi_cell(&mut self, w: Mm, line_height: Mm, text: &str, align: Align) {
        let w = if w.0 == 0.0 {
            self.geometry.right_edge() - self.x
        } else {
            w
        };
        let x = self.x;
        for line in self.split_lines(text, w) {
            self.x = x;
            self.cell(w, line_height, &line, CellFormat::aligned(align).with_ln());
        }
        self.x = self.geometry.margins.left;
    }

    fn rect(&mut self, x: Mm, y: Mm, w: Mm, h: Mm, style: ShapeStyle) {
        let paint = self.paint(style);
        self.surface.shape(Shape::Rect { x, y, w, h }, paint);
    }

    fn rounded_rect(&mut self, x: Mm, y: Mm, w: Mm, h: Mm, radius: Mm, style: ShapeStyle) {
        let paint = self.paint(style);
        self.surface
            .shape(Shape::RoundedRect { x, y, w, h, radius }, paint);
    }

    fn circle(&mut self, cx: Mm, cy: Mm, radius: Mm, style: ShapeStyle) {
        let paint = self.paint(style);
        self.surface.shape(Shape::Circle { cx, cy, radius }, paint);
    }

    fn line(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm) {
        let paint = self.paint(ShapeStyle::Stroke);
        self.surface.shape(Shape::Line { x1, y1, x2, y2 }, paint);
    }

    fn add_page(&mut self) {
        if self.pages > 0 {
            self.run_footer();
        }
        self.surface
            .begin_page(self.geometry.width, self.geometry.height);
        self.pages += 1;
        self.x = self.geometry.margins.left;
        self.y = self.geometry.margins.top;
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn set_footer(&mut self, footer: FooterFn) {
        self.footer = Some(footer);
    }

    fn split_lines(&self, text: &str, w: Mm) -> Vec<String> {
        split_lines(
            text,
            w,
            self.state.font.size_mm(),
            self.metrics(),
            self.geometry.cell_margin,
        )
    }

    fn text_width(&self, text: &str) -> Mm {
        self.state.font.size_mm() * (self.metrics().advance_of(text) as f32 / 1000.0)
    }

    fn bookmark(&mut self, title: &str) {
        self.surface.bookmark(title);
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        if !self.finished && self.pages > 0 {
            self.run_footer();
        }
        self.finished = true;
        self.surface.finish()
    }
}
