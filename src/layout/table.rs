use super::{CellBox, Paginator};
use crate::canvas::{Align, Canvas, CellFormat, FontSpec, ShapeStyle};
use crate::colour::{palette, Colour};
use crate::units::Mm;

/// One table column
#[derive(Debug, Clone, PartialEq)]
pub struct Column<'a> {
    pub header: &'a str,
    pub width: Mm,
    /// Draw the text as a padded, top-aligned paragraph instead of vertically centred lines
    pub wrap: bool,
    pub align: Align,
}

impl<'a> Column<'a> {
    /// A column of short values, centred both ways
    pub fn centred(header: &'a str, width: Mm) -> Column<'a> {
        Column {
            header,
            width,
            wrap: false,
            align: Align::Center,
        }
    }

    /// A column of free text, wrapped into a paragraph
    pub fn wrapped(header: &'a str, width: Mm, align: Align) -> Column<'a> {
        Column {
            header,
            width,
            wrap: true,
            align,
        }
    }
}

/// Sizes, fonts and colours of a table
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub header_height: Mm,
    pub header_font: FontSpec,
    pub header_fill: Colour,
    pub header_text: Colour,
    pub body_font: FontSpec,
    pub body_text: Colour,
    /// Vertical recipe for body rows
    pub rows: CellBox,
    /// Total horizontal padding of a body cell, split evenly between its sides
    pub horizontal_padding: Mm,
    /// Fill for every other row, starting with the first row under each header
    pub shade: Colour,
    /// Outline every body cell
    pub cell_borders: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            header_height: Mm(10.0),
            header_font: FontSpec::bold(10.0),
            header_fill: palette::BRAND_DARK,
            header_text: palette::WHITE,
            body_font: FontSpec::regular(9.0),
            body_text: palette::INK,
            rows: CellBox {
                line_height: Mm(6.0),
                padding_top: Mm(3.0),
                padding_bottom: Mm(3.0),
                min_height: Mm(12.0),
            },
            horizontal_padding: Mm(4.0),
            shade: palette::MIST,
            cell_borders: false,
        }
    }
}

/// What a table ended up drawing
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TableReport {
    pub rows_rendered: usize,
    /// 0-based page of every header row drawn, in order
    pub header_pages: Vec<usize>,
}

/// Renders rows of text under a header row, each row as tall as its tallest wrapped cell.
///
/// The header row is only placed once it and the first row fit on the page. When a later row
/// doesn't fit, the page breaks and the header row is drawn again before the row. Rows
/// alternate between the shade colour and white, restarting with a shaded row under every
/// header row.
pub struct Table<'t> {
    pub left: Mm,
    pub columns: &'t [Column<'t>],
    pub style: &'t TableStyle,
}

impl<'t> Table<'t> {
    pub fn new(left: Mm, columns: &'t [Column<'t>], style: &'t TableStyle) -> Table<'t> {
        Table {
            left,
            columns,
            style,
        }
    }

    pub fn width(&self) -> Mm {
        self.columns.iter().map(|c| c.width).sum()
    }

    /// Height of a body row: the tallest of its cells' wrapped boxes, never less than the
    /// minimum row height
    pub fn row_height(&self, canvas: &mut dyn Canvas, row: &[String]) -> Mm {
        canvas.set_font(self.style.body_font);
        self.columns
            .iter()
            .zip(row.iter())
            .map(|(column, text)| {
                let lines = canvas.line_count(text, column.width - self.style.horizontal_padding);
                self.style.rows.height_for(lines)
            })
            .fold(self.style.rows.min_height, Mm::max)
    }

    /// Height of the header together with the first body row, the least that may start a page
    pub fn lead_height(&self, canvas: &mut dyn Canvas, rows: &[Vec<String>]) -> Mm {
        let first = rows
            .first()
            .map(|row| self.row_height(canvas, row))
            .unwrap_or(Mm::ZERO);
        self.style.header_height + first
    }

    pub fn render(&self, pager: &mut Paginator, rows: &[Vec<String>]) -> TableReport {
        let mut report = TableReport::default();

        let lead = self.lead_height(pager.canvas(), rows);
        pager.keep_together(lead);
        self.header(pager, &mut report);

        let mut pass_rows = 0;
        for row in rows {
            let height = self.row_height(pager.canvas(), row);
            if !pager.will_fit(height) && pass_rows > 0 {
                log::debug!(
                    "table continues on a new page after {} rows",
                    report.rows_rendered
                );
                pager.start_new_page();
                self.header(pager, &mut report);
                pass_rows = 0;
            }

            let y = pager.place(height);
            let fill = if pass_rows % 2 == 0 {
                self.style.shade
            } else {
                palette::WHITE
            };
            self.row(pager.canvas(), y, height, row, fill);

            pass_rows += 1;
            report.rows_rendered += 1;
        }

        report
    }

    fn header(&self, pager: &mut Paginator, report: &mut TableReport) {
        let y = pager.reserve(self.style.header_height);
        report.header_pages.push(pager.cursor().page_index);

        let canvas = pager.canvas();
        canvas.set_fill_colour(self.style.header_fill);
        canvas.set_text_colour(self.style.header_text);
        canvas.set_font(self.style.header_font);
        canvas.set_xy(self.left, y);
        for column in self.columns {
            canvas.cell(
                column.width,
                self.style.header_height,
                column.header,
                CellFormat::aligned(Align::Center).boxed(),
            );
        }
    }

    fn row(&self, canvas: &mut dyn Canvas, y: Mm, height: Mm, row: &[String], fill: Colour) {
        let style = self.style;
        let padding = style.horizontal_padding;
        let line_height = style.rows.line_height;

        canvas.set_fill_colour(fill);
        canvas.rect(self.left, y, self.width(), height, ShapeStyle::Fill);
        canvas.set_text_colour(style.body_text);
        canvas.set_font(style.body_font);

        let mut x = self.left;
        for (column, text) in self.columns.iter().zip(row.iter()) {
            if style.cell_borders {
                canvas.rect(x, y, column.width, height, ShapeStyle::Stroke);
            }

            if column.wrap {
                canvas.set_xy(x + padding / 2.0, y + style.rows.padding_top);
                canvas.multi_cell(column.width - padding, line_height, text, column.align);
            } else {
                let lines = canvas.split_lines(text, column.width - padding);
                let mut line_y = y + (height - line_height * lines.len() as f32) / 2.0;
                for line in lines {
                    canvas.set_xy(x, line_y);
                    canvas.cell(
                        column.width,
                        line_height,
                        &line,
                        CellFormat::aligned(column.align),
                    );
                    line_y += line_height;
                }
            }
            x += column.width;
        }
        canvas.set_y(y + height);
    }
}
