//! Résumé document: layout on top of the PDF writer, and the browser download.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::config::{SiteProfile, PROFILE};
use crate::constants::CV_PROCESSING_DELAY_MS;
use crate::content::{
    CERTIFICATIONS, EXPERIENCES, RESUME_PROJECTS, RESUME_SUMMARY, SKILL_CATEGORIES,
};
use crate::error::{ResumeError, ResumeResult};
use crate::pdf::{Align, Document, Font, TextStyle, A4_HEIGHT_MM, A4_WIDTH_MM};
use crate::raster::Color;

const MARGIN: f64 = 20.0;
const CONTENT_WIDTH: f64 = A4_WIDTH_MM - MARGIN * 2.0;
const LINE_ADVANCE: f64 = 5.0;
const HEADER_HEIGHT: f64 = 40.0;

const PRIMARY: Color = Color::rgb(16, 185, 129);
const MUTED: Color = Color::rgb(100, 100, 100);
const FOOTER_GRAY: Color = Color::rgb(150, 150, 150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn today() -> Self {
        let now = js_sys::Date::new_0();
        CalendarDate {
            year: now.get_full_year(),
            month: now.get_month() + 1,
            day: now.get_date(),
        }
    }

    /// `YYYY-MM-DD`
    pub fn iso(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// `M/D/YYYY`
    pub fn short(&self) -> String {
        format!("{}/{}/{}", self.month, self.day, self.year)
    }
}

pub fn file_name(profile: &SiteProfile, date: CalendarDate) -> String {
    format!("{}_CV_{}.pdf", profile.name.replace(' ', "_"), date.iso())
}

fn style(font: Font, size: f64, color: Color) -> TextStyle {
    TextStyle { font, size, color }
}

/// Cursor over the document. Positions are millimetres from the top of the
/// current page.
struct Layout {
    doc: Document,
    y: f64,
}

impl Layout {
    fn text(&mut self, x: f64, y: f64, style: TextStyle, align: Align, text: &str) {
        self.doc.last_page().text(x, y, style, align, text);
    }

    fn new_page(&mut self) {
        self.doc.add_page();
        self.y = MARGIN;
    }

    fn ensure_space(&mut self, needed: f64) {
        if self.y + needed > A4_HEIGHT_MM - MARGIN {
            self.new_page();
        }
    }

    /// Wrapped paragraph starting at `y`. Returns the y after the last line.
    fn paragraph(&mut self, x: f64, y: f64, style: TextStyle, text: &str) -> f64 {
        let lines = crate::pdf::wrap(text, style.font, style.size, CONTENT_WIDTH - (x - MARGIN));
        for (i, line) in lines.iter().enumerate() {
            self.text(x, y + i as f64 * LINE_ADVANCE, style, Align::Left, line);
        }
        y + lines.len() as f64 * LINE_ADVANCE
    }

    fn section(&mut self, title: &str) {
        let y = self.y;
        self.text(MARGIN, y, style(Font::HelveticaBold, 14.0, PRIMARY), Align::Left, title);
        self.doc
            .last_page()
            .line(MARGIN, y + 2.0, A4_WIDTH_MM - MARGIN, y + 2.0, 0.5, PRIMARY);
        self.y += 8.0;
    }
}

pub fn build_resume(profile: &SiteProfile, date: CalendarDate) -> Document {
    let mut l = Layout {
        doc: Document::a4(&format!("{} - CV", profile.name)),
        y: 0.0,
    };
    let center = A4_WIDTH_MM / 2.0;
    let right = A4_WIDTH_MM - MARGIN;
    let body = style(Font::Helvetica, 10.0, Color::BLACK);

    // Header band
    l.doc.last_page().fill_rect(0.0, 0.0, A4_WIDTH_MM, HEADER_HEIGHT, PRIMARY);
    l.text(center, 18.0, style(Font::HelveticaBold, 24.0, Color::WHITE), Align::Center, &profile.name.to_uppercase());
    l.text(center, 26.0, style(Font::Helvetica, 12.0, Color::WHITE), Align::Center, profile.title);
    l.text(
        center,
        34.0,
        style(Font::Helvetica, 9.0, Color::WHITE),
        Align::Center,
        &format!("Email: {} | Location: {}", profile.email, profile.location),
    );
    l.y = 50.0;

    l.section("PROFESSIONAL SUMMARY");
    l.y = l.paragraph(MARGIN, l.y, body, RESUME_SUMMARY) + 5.0;

    l.ensure_space(30.0);
    l.section("TECHNICAL EXPERTISE");
    for cat in SKILL_CATEGORIES {
        let y = l.y;
        l.text(
            MARGIN,
            y,
            style(Font::HelveticaBold, 10.0, PRIMARY),
            Align::Left,
            &format!("{} ({}):", cat.title, cat.level),
        );
        l.text(MARGIN + 5.0, y + 4.0, body, Align::Left, &cat.skills.join(" • "));
        l.y += 8.0;
    }

    l.ensure_space(40.0);
    l.section("PROFESSIONAL EXPERIENCE");
    for exp in EXPERIENCES {
        l.ensure_space(25.0);
        let y = l.y;
        l.text(MARGIN, y, style(Font::HelveticaBold, 12.0, Color::BLACK), Align::Left, exp.role);
        let accent = style(Font::HelveticaBold, 10.0, PRIMARY);
        l.text(MARGIN, y + 4.0, accent, Align::Left, exp.company);
        l.text(right, y + 4.0, accent, Align::Right, exp.period);
        l.y = l.paragraph(MARGIN, y + 8.0, body, exp.desc) + 2.0;

        let muted = style(Font::Helvetica, 9.0, MUTED);
        let y = l.y;
        l.text(MARGIN, y, muted, Align::Left, "Key Achievements:");
        for achievement in exp.achievements {
            let y = l.y;
            l.text(MARGIN + 5.0, y + 4.0, muted, Align::Left, &format!("• {}", achievement));
            l.y += 4.0;
        }
        l.y += 5.0;
    }

    // Projects always start a fresh page.
    l.new_page();
    l.section("KEY PROJECTS");
    for project in RESUME_PROJECTS {
        l.ensure_space(20.0);
        let y = l.y;
        l.text(MARGIN, y, style(Font::HelveticaBold, 11.0, Color::BLACK), Align::Left, project.title);
        l.text(
            right,
            y,
            style(Font::HelveticaBold, 9.0, PRIMARY),
            Align::Right,
            &format!("Impact: {}", project.impact),
        );
        l.y = l.paragraph(MARGIN, y + 4.0, style(Font::Helvetica, 9.0, Color::BLACK), project.desc) + 2.0;
        let y = l.y;
        l.text(
            MARGIN,
            y,
            style(Font::Helvetica, 8.0, MUTED),
            Align::Left,
            &format!("Technologies: {}", project.tech),
        );
        l.y += 8.0;
    }

    l.ensure_space(20.0);
    l.section("EDUCATION & CERTIFICATIONS");
    for item in CERTIFICATIONS {
        let y = l.y;
        l.text(MARGIN, y, body, Align::Left, &format!("• {}", item));
        l.y += LINE_ADVANCE;
    }

    let mut doc = l.doc;
    add_footers(&mut doc, profile, date);
    doc
}

fn add_footers(doc: &mut Document, profile: &SiteProfile, date: CalendarDate) {
    let total = doc.page_count();
    let footer = style(Font::Helvetica, 7.0, FOOTER_GRAY);
    let owner = format!("{} - {}", profile.name, profile.title);
    let generated = format!("Generated on {}", date.short());
    for i in 0..total {
        let Some(page) = doc.page_mut(i) else { continue };
        let rule = A4_HEIGHT_MM - 15.0;
        let baseline = A4_HEIGHT_MM - 10.0;
        page.line(MARGIN, rule, A4_WIDTH_MM - MARGIN, rule, 0.3, PRIMARY);
        page.text(MARGIN, baseline, footer, Align::Left, &owner);
        page.text(A4_WIDTH_MM - MARGIN, baseline, footer, Align::Right, &format!("Page {} of {}", i + 1, total));
        page.text(A4_WIDTH_MM / 2.0, baseline, footer, Align::Center, &generated);
    }
}

/// Hand the bytes to the browser as a file download.
fn save(bytes: &[u8], name: &str) -> ResumeResult<()> {
    let window = web_sys::window().ok_or_else(|| ResumeError::Dom("no window".into()))?;
    let document = window.document().ok_or_else(|| ResumeError::Dom("no document".into()))?;
    let body = document.body().ok_or_else(|| ResumeError::Dom("no body".into()))?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| ResumeError::dom("blob", e))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| ResumeError::dom("object url", e))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| ResumeError::dom("anchor", e))?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(name);
    body.append_child(&anchor).map_err(|e| ResumeError::dom("append", e))?;
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&url).map_err(|e| ResumeError::dom("revoke", e))?;
    Ok(())
}

/// Build today's résumé and start the download.
pub async fn download_resume() -> ResumeResult<String> {
    gloo_timers::future::TimeoutFuture::new(CV_PROCESSING_DELAY_MS).await;

    let date = CalendarDate::today();
    let doc = build_resume(&PROFILE, date);
    let bytes = doc.to_bytes()?;
    let name = file_name(&PROFILE, date);
    save(&bytes, &name)?;
    log::info!("résumé saved as {} ({} pages, {} bytes)", name, doc.page_count(), bytes.len());
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATE: CalendarDate = CalendarDate { year: 2026, month: 3, day: 7 };

    #[test]
    fn file_name_uses_iso_date() {
        assert_eq!(file_name(&PROFILE, DATE), "Ramesh_Maharjan_CV_2026-03-07.pdf");
    }

    #[test]
    fn projects_start_on_a_new_page() {
        let doc = build_resume(&PROFILE, DATE);
        assert!(doc.page_count() >= 2);
        let first_with_projects = doc
            .pages()
            .iter()
            .position(|p| p.texts().any(|t| t == "KEY PROJECTS"))
            .unwrap();
        assert!(first_with_projects >= 1);
        assert!(!doc.pages()[0].texts().any(|t| t == "KEY PROJECTS"));
    }

    #[test]
    fn every_page_has_a_numbered_footer() {
        let doc = build_resume(&PROFILE, DATE);
        let n = doc.page_count();
        for (i, page) in doc.pages().iter().enumerate() {
            let label = format!("Page {} of {}", i + 1, n);
            assert!(page.texts().any(|t| t == label), "missing {}", label);
            assert!(page.texts().any(|t| t == "Generated on 3/7/2026"));
            assert!(page.texts().any(|t| t == "Ramesh Maharjan - Full-Stack Developer"));
        }
    }

    #[test]
    fn first_page_carries_header_and_sections() {
        let doc = build_resume(&PROFILE, DATE);
        let first: Vec<&str> = doc.pages()[0].texts().collect();
        assert_eq!(first[0], "RAMESH MAHARJAN");
        for heading in ["PROFESSIONAL SUMMARY", "TECHNICAL EXPERTISE", "PROFESSIONAL EXPERIENCE"] {
            assert!(first.contains(&heading), "missing {}", heading);
        }
        assert!(first.iter().any(|t| t.starts_with("• Delivered 6+ major projects")));
    }

    #[test]
    fn education_follows_projects() {
        let doc = build_resume(&PROFILE, DATE);
        let all: Vec<&str> = doc.pages().iter().flat_map(|p| p.texts()).collect();
        let projects = all.iter().position(|t| *t == "KEY PROJECTS").unwrap();
        let education = all.iter().position(|t| *t == "EDUCATION & CERTIFICATIONS").unwrap();
        assert!(education > projects);
        assert!(all.contains(&"• Agile Project Management Certification"));
    }

    #[test]
    fn serializes() {
        let bytes = build_resume(&PROFILE, DATE).to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
    }
}
