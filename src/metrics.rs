//! Glyph advance widths used for measuring and wrapping text.
//!
//! The two standard PDF fonts the itinerary uses by default (Helvetica and Helvetica-Bold)
//! are never embedded, so their advance widths are carried here, taken from the Adobe font
//! metrics for the printable ASCII range. Embedded TrueType fonts answer the same question
//! from their `hmtx` table, see [Font](crate::Font).

/// Anything that can report how wide a character is, in thousandths of an em
pub trait GlyphMetrics {
    fn advance(&self, ch: char) -> u16;

    /// Width of a whole string, in thousandths of an em
    fn advance_of(&self, text: &str) -> u32 {
        text.chars().map(|ch| self.advance(ch) as u32).sum()
    }
}

/// The standard (non-embedded) PDF fonts this crate knows metrics for
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    /// The PostScript name written into the font dictionary
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    fn widths(&self) -> &'static [u16; 95] {
        match self {
            StandardFont::Helvetica => &HELVETICA_WIDTHS,
            StandardFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }
}

impl GlyphMetrics for StandardFont {
    fn advance(&self, ch: char) -> u16 {
        let code = ch as u32;
        match code {
            32..=126 => self.widths()[(code - 32) as usize],
            // tabs are laid out as a single space
            9 => self.widths()[0],
            // outside of ASCII fall back to the width of a digit, which is what most
            // Latin-1 letters come close to
            _ => 556,
        }
    }
}

/// Map a character onto its WinAnsiEncoding byte, which is how text is shown with the
/// standard fonts. Characters the encoding can't represent become `?`.
pub fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        ' '..='~' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        '\t' => b' ',
        _ => b'?',
    }
}

#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( )
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333,
    // * + , - . / 0 1 2 3
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556,
    // 4 5 6 7 8 9 : ; < =
    556, 556, 556, 556, 556, 556, 278, 278, 584, 584,
    // > ? @ A B C D E F G
    584, 556, 1015, 667, 667, 722, 722, 667, 611, 778,
    // H I J K L M N O P Q
    722, 278, 500, 667, 556, 833, 722, 778, 667, 778,
    // R S T U V W X Y Z [
    722, 667, 611, 722, 667, 944, 667, 667, 611, 278,
    // \ ] ^ _ ` a b c d e
    278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    // f g h i j k l m n o
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    // p q r s t u v w x y
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500,
    // z { | } ~
    500, 334, 260, 334, 584,
];

#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( )
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333,
    // * + , - . / 0 1 2 3
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556,
    // 4 5 6 7 8 9 : ; < =
    556, 556, 556, 556, 556, 556, 333, 333, 584, 584,
    // > ? @ A B C D E F G
    584, 611, 975, 722, 722, 722, 722, 667, 611, 778,
    // H I J K L M N O P Q
    722, 278, 556, 722, 611, 833, 722, 778, 667, 778,
    // R S T U V W X Y Z [
    722, 667, 611, 722, 667, 944, 667, 667, 611, 333,
    // \ ] ^ _ ` a b c d e
    278, 333, 584, 556, 333, 556, 611, 556, 611, 556,
    // f g h i j k l m n o
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    // p q r s t u v w x y
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556,
    // z { | } ~
    500, 389, 280, 389, 584,
];
