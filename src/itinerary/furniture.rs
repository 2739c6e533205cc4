use crate::canvas::{Align, Canvas, CellFormat, FontSpec, FooterFn};
use crate::colour::palette;
use crate::config::Branding;
use crate::layout::{PageGeometry, PageHeader};
use crate::units::Mm;

/// Brand name on the left, tagline on the right, a rule underneath
pub struct BrandHeader<'b> {
    pub branding: &'b Branding,
}

impl PageHeader for BrandHeader<'_> {
    fn draw(&self, canvas: &mut dyn Canvas, geometry: &PageGeometry) {
        canvas.set_text_colour(palette::BRAND);
        canvas.set_font(FontSpec::bold(14.0));
        canvas.set_y(geometry.margins.top);
        canvas.cell(
            Mm(0.0),
            Mm(8.0),
            &self.branding.brand_name,
            CellFormat::aligned(Align::Left),
        );

        canvas.set_text_colour(palette::MUTED);
        canvas.set_font(FontSpec::regular(8.0));
        canvas.set_x(geometry.margins.left);
        canvas.cell(
            Mm(0.0),
            Mm(8.0),
            &self.branding.tagline,
            CellFormat::aligned(Align::Right).with_ln(),
        );

        canvas.set_draw_colour(palette::RULE);
        canvas.line(
            geometry.margins.left,
            geometry.header_rule,
            geometry.right_edge(),
            geometry.header_rule,
        );
    }
}

/// Company address on the left, contact details in the middle and a small brand mark on the
/// right, along the bottom of every page
pub fn footer(branding: &Branding, geometry: PageGeometry) -> FooterFn {
    let branding = branding.clone();
    Box::new(move |canvas: &mut dyn Canvas| {
        let top = geometry.footer_top();
        let left = geometry.margins.left;

        canvas.set_font(FontSpec::regular(8.0));
        canvas.set_text_colour(palette::MUTED);
        let lines = std::iter::once(&branding.company_name).chain(branding.address.iter());
        for (i, line) in lines.enumerate() {
            canvas.set_xy(left, top + Mm(4.0) * i as f32);
            canvas.cell(Mm(60.0), Mm(5.0), line, CellFormat::default());
        }

        canvas.set_xy(Mm(120.0), top);
        canvas.cell(
            Mm(0.0),
            Mm(5.0),
            &format!("Phone: {}", branding.phone),
            CellFormat::default(),
        );
        canvas.set_xy(Mm(120.0), top + Mm(4.0));
        canvas.cell(
            Mm(0.0),
            Mm(5.0),
            &format!("Email ID: {}", branding.email),
            CellFormat::default(),
        );

        canvas.set_xy(Mm(170.0), top + Mm(2.0));
        canvas.set_text_colour(palette::BRAND);
        canvas.set_font(FontSpec::bold(10.0));
        canvas.cell(Mm(0.0), Mm(5.0), &branding.brand_name, CellFormat::default());
        canvas.set_xy(Mm(170.0), top + Mm(6.0));
        canvas.set_text_colour(palette::MUTED);
        canvas.set_font(FontSpec::regular(6.0));
        canvas.cell(Mm(0.0), Mm(5.0), &branding.tagline, CellFormat::default());
    })
}
