//! Page model and PDF serialization.
//!
//! Pages are drawn in millimetres with the origin at the top-left corner and
//! text positioned by baseline. Only the two built-in Helvetica faces are
//! used, so nothing is embedded; text is encoded as WinAnsi.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::error::{ResumeError, ResumeResult};
use crate::raster::Color;

pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;

const PT_PER_MM: f64 = 72.0 / 25.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    fn resource(self) -> Name<'static> {
        match self {
            Font::Helvetica => Name(b"F1"),
            Font::HelveticaBold => Name(b"F2"),
        }
    }

    fn base_font(self) -> Name<'static> {
        match self {
            Font::Helvetica => Name(b"Helvetica"),
            Font::HelveticaBold => Name(b"Helvetica-Bold"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    /// Points.
    pub size: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    FillRect { x: f64, y: f64, w: f64, h: f64, color: Color },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color },
    Text { x: f64, y: f64, style: TextStyle, text: String },
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    ops: Vec<Op>,
}

impl Page {
    #[cfg(test)]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.ops.push(Op::FillRect { x, y, w, h, color });
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color) {
        self.ops.push(Op::Line { x1, y1, x2, y2, width, color });
    }

    /// Text anchored at `x` according to `align`.
    pub fn text(&mut self, x: f64, y: f64, style: TextStyle, align: Align, text: &str) {
        let width = text_width(text, style.font, style.size);
        let x = match align {
            Align::Left => x,
            Align::Center => x - width / 2.0,
            Align::Right => x - width,
        };
        self.ops.push(Op::Text { x, y, style, text: text.to_string() });
    }

    /// All text on the page in drawing order.
    #[cfg(test)]
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            Op::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

pub struct Document {
    title: String,
    width: f64,
    height: f64,
    pages: Vec<Page>,
}

impl Document {
    /// A4 portrait document with one empty page.
    pub fn a4(title: &str) -> Self {
        Document {
            title: title.to_string(),
            width: A4_WIDTH_MM,
            height: A4_HEIGHT_MM,
            pages: vec![Page::default()],
        }
    }

    pub fn add_page(&mut self) -> usize {
        self.pages.push(Page::default());
        self.pages.len() - 1
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[cfg(test)]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index)
    }

    pub fn last_page(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            self.pages.push(Page::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    pub fn to_bytes(&self) -> ResumeResult<Vec<u8>> {
        if self.pages.is_empty() {
            return Err(ResumeError::Encode("document has no pages".into()));
        }
        let catalog_id = Ref::new(1);
        let tree_id = Ref::new(2);
        let fonts = [(Font::Helvetica, Ref::new(3)), (Font::HelveticaBold, Ref::new(4))];
        let info_id = Ref::new(5);
        // (page, content) pairs follow the fixed objects.
        let page_ids: Vec<(Ref, Ref)> = (0..self.pages.len() as i32)
            .map(|i| (Ref::new(6 + i * 2), Ref::new(7 + i * 2)))
            .collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(tree_id);
        pdf.pages(tree_id)
            .kids(page_ids.iter().map(|(page, _)| *page))
            .count(page_ids.len() as i32);
        for (font, id) in fonts {
            pdf.type1_font(id)
                .base_font(font.base_font())
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }
        pdf.document_info(info_id)
            .title(TextStr(&self.title))
            .producer(TextStr("orbit-folio"));

        let media = Rect::new(0.0, 0.0, pt(self.width), pt(self.height));
        for (page, &(page_id, content_id)) in self.pages.iter().zip(&page_ids) {
            let mut out = pdf.page(page_id);
            out.media_box(media).parent(tree_id).contents(content_id);
            {
                let mut resources = out.resources();
                let mut dict = resources.fonts();
                for (font, id) in fonts {
                    dict.pair(font.resource(), id);
                }
            }
            out.finish();
            pdf.stream(content_id, &self.content_stream(page));
        }

        Ok(pdf.finish())
    }

    fn content_stream(&self, page: &Page) -> Vec<u8> {
        let mut content = Content::new();
        let y = |mm: f64| pt(self.height - mm);
        for op in &page.ops {
            match op {
                Op::FillRect { x, y: top, w, h, color } => {
                    let (r, g, b) = rgb(*color);
                    content.set_fill_rgb(r, g, b);
                    content.rect(pt(*x), y(top + h), pt(*w), pt(*h));
                    content.fill_nonzero();
                }
                Op::Line { x1, y1, x2, y2, width, color } => {
                    let (r, g, b) = rgb(*color);
                    content.set_stroke_rgb(r, g, b);
                    content.set_line_width(pt(*width));
                    content.move_to(pt(*x1), y(*y1));
                    content.line_to(pt(*x2), y(*y2));
                    content.stroke();
                }
                Op::Text { x, y: baseline, style, text } => {
                    let (r, g, b) = rgb(style.color);
                    content.begin_text();
                    content.set_font(style.font.resource(), style.size as f32);
                    content.set_fill_rgb(r, g, b);
                    content.next_line(pt(*x), y(*baseline));
                    content.show(Str(&encode(text)));
                    content.end_text();
                }
            }
        }
        content.finish()
    }
}

fn pt(mm: f64) -> f32 {
    (mm * PT_PER_MM) as f32
}

fn rgb(c: Color) -> (f32, f32, f32) {
    (c.r as f32 / 255.0, c.g as f32 / 255.0, c.b as f32 / 255.0)
}

/// WinAnsi byte for a character. Unmappable characters become `?`.
fn win_ansi(c: char) -> u8 {
    match c {
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '€' => 0x80,
        c if (c as u32) < 0x80 => c as u8,
        c if (0xA0..=0xFF).contains(&(c as u32)) => c as u32 as u8,
        _ => b'?',
    }
}

/// WinAnsi bytes for a text run. Line breaks become spaces.
fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\n' | '\r' => b' ',
            c => win_ansi(c),
        })
        .collect()
}

// Glyph advance widths for WinAnsi 32..=126, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn glyph_width(font: Font, byte: u8) -> u16 {
    let table = match font {
        Font::Helvetica => &HELVETICA_WIDTHS,
        Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
    };
    match byte {
        32..=126 => table[(byte - 32) as usize],
        0x95 => 350,
        0x96 => 556,
        0x97 => 1000,
        _ => 556,
    }
}

/// Rendered width in millimetres.
pub fn text_width(text: &str, font: Font, size: f64) -> f64 {
    let units: u32 = text.chars().map(|c| glyph_width(font, win_ansi(c)) as u32).sum();
    units as f64 / 1000.0 * size / PT_PER_MM
}

/// Greedy word wrap to `max_width` millimetres. Words longer than a line are
/// kept whole on their own line.
pub fn wrap(text: &str, font: Font, size: f64, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if text_width(&candidate, font, size) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> TextStyle {
        TextStyle { font: Font::Helvetica, size: 10.0, color: Color::BLACK }
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    #[test]
    fn header_and_trailer() {
        let doc = Document::a4("CV");
        let bytes = doc.to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF-1."));
        assert!(find(&bytes[bytes.len() - 8..], b"%%EOF").is_some());
        assert!(find(&bytes, b"/Count 1").is_some());
    }

    #[test]
    fn xref_offsets_point_at_objects() {
        let mut doc = Document::a4("CV");
        doc.last_page().text(20.0, 20.0, style(), Align::Left, "Hello (world)");
        doc.add_page();
        let bytes = doc.to_bytes().unwrap();

        // The header carries a binary marker, so offsets are taken on bytes.
        let marker = b"startxref\n";
        let at = bytes.windows(marker.len()).rposition(|w| w == marker).unwrap() + marker.len();
        let tail = std::str::from_utf8(&bytes[at..]).unwrap();
        let xref_at: usize = tail.lines().next().unwrap().trim().parse().unwrap();

        let table = std::str::from_utf8(&bytes[xref_at..]).unwrap();
        let mut lines = table.lines();
        assert_eq!(lines.next(), Some("xref"));
        let size: usize = lines.next().unwrap().split(' ').nth(1).unwrap().parse().unwrap();
        assert_eq!(size, 10);

        for (i, line) in lines.skip(1).take(size - 1).enumerate() {
            let offset: usize = line[..10].parse().unwrap();
            let expected = format!("{} 0 obj", i + 1);
            assert!(bytes[offset..].starts_with(expected.as_bytes()), "object {}", i + 1);
        }
    }

    #[test]
    fn text_is_win_ansi_encoded() {
        assert_eq!(encode("a(b)"), b"a(b)".to_vec());
        assert_eq!(encode("• x"), vec![0x95, b' ', b'x']);
        assert_eq!(encode("é\n日"), vec![0xE9, b' ', b'?']);
    }

    #[test]
    fn empty_document_is_rejected() {
        let mut doc = Document::a4("CV");
        doc.pages.clear();
        assert!(matches!(doc.to_bytes(), Err(ResumeError::Encode(_))));
    }

    #[test]
    fn alignment_shifts_by_width() {
        let mut page = Page::default();
        page.text(100.0, 10.0, style(), Align::Right, "abc");
        page.text(100.0, 10.0, style(), Align::Center, "abc");
        let w = text_width("abc", Font::Helvetica, 10.0);
        match (&page.ops()[0], &page.ops()[1]) {
            (Op::Text { x: right, .. }, Op::Text { x: center, .. }) => {
                assert!((right - (100.0 - w)).abs() < 1e-9);
                assert!((center - (100.0 - w / 2.0)).abs() < 1e-9);
            }
            _ => panic!("expected text ops"),
        }
    }

    #[test]
    fn bold_is_wider() {
        let regular = text_width("Portfolio", Font::Helvetica, 12.0);
        let bold = text_width("Portfolio", Font::HelveticaBold, 12.0);
        assert!(bold > regular);
        // 'W' is 944 units: at 10pt that is 9.44pt.
        assert!((text_width("W", Font::Helvetica, 10.0) - 9.44 / PT_PER_MM).abs() < 1e-9);
    }

    #[test]
    fn wrap_respects_width() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(6);
        let lines = wrap(&text, Font::Helvetica, 10.0, 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, Font::Helvetica, 10.0) <= 60.0);
        }
        assert_eq!(lines.join(" "), text.trim_end());
    }

    #[test]
    fn long_word_gets_own_line() {
        let lines = wrap("a supercalifragilistic b", Font::Helvetica, 10.0, 10.0);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }
}
