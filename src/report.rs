// src/report.rs
use crate::types::{PhantomEyeError, ReportData};
use crate::utils::pdf_safe;
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Rect, Rgb,
};

pub const SUBDOMAIN_STATUS: &str = "Active (Verified)";
pub const EMAIL_STATUS: &str = "HIGH RISK - Verify Breach";
pub const AUTHOR: &str = "Theodor/Chino";
pub const FOOTER: &str = "(c) 2025 PhantomEye - OSINT Framework | All Rights Reserved";
pub const RECOMMENDATIONS: [&str; 4] = [
    "Implement strict subdomain enumeration controls (e.g., DNSSEC).",
    "Scan for email exposures using tools like HaveIBeenPwned.",
    "Conduct full OSINT audit quarterly.",
    "Use PhantomEye for ongoing monitoring.",
];

// US Letter, all lengths in millimetres
const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN: f32 = 25.4;
const INCH: f32 = 25.4;
const PT: f32 = 0.352_778;

const BODY_SIZE: f32 = 10.0;
const HEADING_SIZE: f32 = 14.0;

/// One element of the report, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Target(String),
    Generated(String),
    Spacer(f32),
    Heading(String),
    Table {
        kind: TableKind,
        header: [String; 2],
        rows: Vec<[String; 2]>,
    },
    Bullet(String),
    Paragraph(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Subdomains,
    Emails,
}

/// Lays out the report content without touching the PDF backend.
pub fn build_story(data: &ReportData) -> Vec<Block> {
    let mut story = vec![
        Block::Title("PhantomEye OSINT Report".to_string()),
        Block::Target(data.domain.clone()),
        Block::Generated(data.generated_at.format("%d/%m/%Y %H:%M").to_string()),
        Block::Spacer(0.5 * INCH),
        Block::Heading(format!("Subdomains Found ({} total)", data.subdomains.len())),
        Block::Table {
            kind: TableKind::Subdomains,
            header: ["Subdomain".to_string(), "Status".to_string()],
            rows: data
                .subdomains
                .iter()
                .map(|sub| [sub.clone(), SUBDOMAIN_STATUS.to_string()])
                .collect(),
        },
        Block::Spacer(0.3 * INCH),
        Block::Heading("Exposed Emails (Potential Leaks)".to_string()),
        Block::Table {
            kind: TableKind::Emails,
            header: ["Email".to_string(), "Status".to_string()],
            rows: data
                .emails
                .iter()
                .map(|email| [email.clone(), EMAIL_STATUS.to_string()])
                .collect(),
        },
        Block::Spacer(0.3 * INCH),
        Block::Heading("Recommendations".to_string()),
    ];

    story.extend(RECOMMENDATIONS.iter().map(|rec| Block::Bullet(rec.to_string())));
    story.push(Block::Spacer(INCH));
    story.push(Block::Paragraph(FOOTER.to_string()));

    story
}

/// Renders the whole report into an in-memory PDF.
pub fn render_pdf(data: &ReportData) -> Result<Vec<u8>, PhantomEyeError> {
    let title = format!("PhantomEye OSINT Report - {}", pdf_safe(&data.domain));
    let mut canvas = Canvas::new(&title)?;

    for block in build_story(data) {
        canvas.draw(&block);
    }

    canvas.finish()
}

fn pdf_err<E: std::fmt::Display>(e: E) -> PhantomEyeError {
    PhantomEyeError::PdfError(e.to_string())
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

struct TableStyle {
    header_size: f32,
    header_fill: Color,
    header_text: Color,
    body_fill: Color,
    grid: Color,
}

impl TableStyle {
    fn for_kind(kind: TableKind) -> Self {
        match kind {
            TableKind::Subdomains => Self {
                header_size: 14.0,
                header_fill: rgb(128, 128, 128),
                header_text: rgb(245, 245, 245),
                body_fill: rgb(245, 245, 220),
                grid: rgb(0, 0, 0),
            },
            TableKind::Emails => Self {
                header_size: 12.0,
                header_fill: rgb(255, 0, 0),
                header_text: rgb(245, 245, 245),
                body_fill: rgb(255, 192, 203),
                grid: rgb(255, 0, 0),
            },
        }
    }
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
}

struct Row<'a> {
    cells: &'a [String; 2],
    size: f32,
    bold: bool,
    fill: &'a Color,
    text: &'a Color,
    grid: &'a Color,
    bottom_padding: f32,
}

/// Flowing layout over a printpdf document: a top-down cursor that starts
/// a new page whenever the next element does not fit above the bottom margin.
struct Canvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
    pages: usize,
}

impl Canvas {
    fn new(title: &str) -> Result<Self, PhantomEyeError> {
        let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_err)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT - MARGIN,
            pages: 1,
        })
    }

    fn finish(self) -> Result<Vec<u8>, PhantomEyeError> {
        self.doc.save_to_bytes().map_err(pdf_err)
    }

    fn new_page(&mut self) {
        self.pages += 1;
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            format!("Layer {}", self.pages),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn ensure_space(&mut self, height: f32) {
        if self.y - height < MARGIN {
            self.new_page();
        }
    }

    fn draw(&mut self, block: &Block) {
        let black = rgb(0, 0, 0);
        match block {
            Block::Title(text) => {
                self.line(&[(text.as_str(), true)], 24.0, &rgb(139, 0, 0), Align::Center, 30.0 * PT);
            }
            Block::Target(domain) => {
                self.line(
                    &[("Target: ", false), (domain.as_str(), true)],
                    HEADING_SIZE,
                    &rgb(0, 0, 139),
                    Align::Center,
                    20.0 * PT,
                );
            }
            Block::Generated(when) => {
                let by = format!(" | By: {}", AUTHOR);
                self.line(
                    &[("Generated: ", false), (when.as_str(), true), (by.as_str(), false)],
                    BODY_SIZE,
                    &black,
                    Align::Left,
                    0.0,
                );
            }
            Block::Spacer(height) => {
                self.y -= height;
                if self.y < MARGIN {
                    self.new_page();
                }
            }
            Block::Heading(text) => {
                self.y -= 12.0 * PT;
                // keep a heading together with at least one following line
                self.ensure_space(HEADING_SIZE * 1.2 * PT + BODY_SIZE * 2.4 * PT);
                self.line(&[(text.as_str(), true)], HEADING_SIZE, &black, Align::Left, 6.0 * PT);
            }
            Block::Table { kind, header, rows } => {
                self.table(header, rows, &TableStyle::for_kind(*kind));
            }
            Block::Bullet(text) => self.bullet(text),
            Block::Paragraph(text) => {
                self.line(&[(text.as_str(), false)], BODY_SIZE, &black, Align::Left, 0.0);
            }
        }
    }

    fn font(&self, bold: bool) -> &IndirectFontRef {
        if bold {
            &self.bold
        } else {
            &self.regular
        }
    }

    fn line(&mut self, runs: &[(&str, bool)], size: f32, color: &Color, align: Align, space_after: f32) {
        let leading = size * 1.2 * PT;
        self.ensure_space(leading);

        let runs = fit_runs(runs, size, PAGE_WIDTH - 2.0 * MARGIN);
        let width: f32 = runs.iter().map(|(text, bold)| text_width(text, size, *bold)).sum();
        let mut x = match align {
            Align::Left => MARGIN,
            Align::Center => ((PAGE_WIDTH - width) / 2.0).max(MARGIN),
        };
        let baseline = self.y - size * PT;

        self.layer.set_fill_color(color.clone());
        for (text, bold) in &runs {
            self.layer.use_text(text.as_str(), size, Mm(x), Mm(baseline), self.font(*bold));
            x += text_width(text, size, *bold);
        }

        self.y -= leading + space_after;
    }

    fn bullet(&mut self, text: &str) {
        let leading = BODY_SIZE * 1.2 * PT;
        self.ensure_space(leading);

        let dot = 1.2;
        let baseline = self.y - BODY_SIZE * PT;
        let dot_bottom = baseline + BODY_SIZE * PT * 0.25;
        self.layer.set_fill_color(rgb(0, 0, 0));
        self.layer.add_rect(
            Rect::new(Mm(MARGIN), Mm(dot_bottom), Mm(MARGIN + dot), Mm(dot_bottom + dot))
                .with_mode(PaintMode::Fill),
        );
        self.layer.use_text(
            pdf_safe(text),
            BODY_SIZE,
            Mm(MARGIN + dot + 2.0),
            Mm(baseline),
            &self.regular,
        );

        self.y -= leading;
    }

    fn table(&mut self, header: &[String; 2], rows: &[[String; 2]], style: &TableStyle) {
        let pad_x = 6.0 * PT;
        let available = PAGE_WIDTH - 2.0 * MARGIN;

        let mut widths = [0.0f32; 2];
        for (col, width) in widths.iter_mut().enumerate() {
            let header_width = text_width(&pdf_safe(&header[col]), style.header_size, true);
            let body_width = rows
                .iter()
                .map(|row| text_width(&pdf_safe(&row[col]), BODY_SIZE, false))
                .fold(0.0f32, f32::max);
            *width = header_width.max(body_width) + 2.0 * pad_x;
        }

        let total: f32 = widths.iter().sum();
        if total > available {
            let scale = available / total;
            widths.iter_mut().for_each(|w| *w *= scale);
        }
        let x0 = (PAGE_WIDTH - widths.iter().sum::<f32>()) / 2.0;

        self.row(
            x0,
            &widths,
            &Row {
                cells: header,
                size: style.header_size,
                bold: true,
                fill: &style.header_fill,
                text: &style.header_text,
                grid: &style.grid,
                bottom_padding: 12.0 * PT,
            },
        );

        let black = rgb(0, 0, 0);
        for cells in rows {
            self.row(
                x0,
                &widths,
                &Row {
                    cells,
                    size: BODY_SIZE,
                    bold: false,
                    fill: &style.body_fill,
                    text: &black,
                    grid: &style.grid,
                    bottom_padding: 3.0 * PT,
                },
            );
        }
    }

    fn row(&mut self, x0: f32, widths: &[f32; 2], row: &Row<'_>) {
        let pad_x = 6.0 * PT;
        let top_padding = 3.0 * PT;
        let height = top_padding + row.size * 1.2 * PT + row.bottom_padding;
        self.ensure_space(height);

        let top = self.y;
        let bottom = top - height;
        let baseline = bottom + row.bottom_padding + row.size * 0.2 * PT;
        let mut x = x0;

        for (cell, width) in row.cells.iter().zip(widths.iter()) {
            self.layer.set_fill_color(row.fill.clone());
            self.layer.set_outline_color(row.grid.clone());
            self.layer.set_outline_thickness(1.0);
            self.layer.add_rect(
                Rect::new(Mm(x), Mm(bottom), Mm(x + width), Mm(top)).with_mode(PaintMode::FillStroke),
            );

            let text = fit_text(&pdf_safe(cell), row.size, row.bold, width - 2.0 * pad_x);
            let text_x = x + (width - text_width(&text, row.size, row.bold)) / 2.0;
            self.layer.set_fill_color(row.text.clone());
            self.layer.use_text(text.as_str(), row.size, Mm(text_x), Mm(baseline), self.font(row.bold));

            x += width;
        }

        self.y = bottom;
    }
}

// Helvetica advance widths for ' '..='~', in 1/1000 em
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, //
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, //
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, //
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Approximate rendered width in millimetres. Bold is treated as slightly wider.
fn text_width(text: &str, size: f32, bold: bool) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| {
            let idx = (c as u32).wrapping_sub(32) as usize;
            u32::from(HELVETICA_WIDTHS.get(idx).copied().unwrap_or(556))
        })
        .sum();
    let factor = if bold { 1.06 } else { 1.0 };
    units as f32 / 1000.0 * size * PT * factor
}

/// Truncates `text` with an ellipsis until it fits in `max_width` millimetres.
fn fit_text(text: &str, size: f32, bold: bool, max_width: f32) -> String {
    if text_width(text, size, bold) <= max_width {
        return text.to_string();
    }

    let mut chars: Vec<char> = text.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let candidate: String = chars.iter().collect::<String>() + "...";
        if text_width(&candidate, size, bold) <= max_width {
            return candidate;
        }
    }
    "...".to_string()
}

/// Sanitises the runs of one line and truncates them to `max_width` millimetres.
/// Runs after the one that had to be cut are dropped.
fn fit_runs(runs: &[(&str, bool)], size: f32, max_width: f32) -> Vec<(String, bool)> {
    let mut fitted = Vec::new();
    let mut used = 0.0f32;

    for (text, bold) in runs {
        let text = pdf_safe(text);
        let width = text_width(&text, size, *bold);
        if used + width <= max_width {
            used += width;
            fitted.push((text, *bold));
        } else {
            fitted.push((fit_text(&text, size, *bold, max_width - used), *bold));
            break;
        }
    }

    fitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emails::guess_emails;
    use chrono::{Local, TimeZone};

    fn sample(subdomains: usize) -> ReportData {
        ReportData {
            domain: "example.com".to_string(),
            generated_at: Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 0).unwrap(),
            subdomains: (0..subdomains).map(|i| format!("host{}.example.com", i)).collect(),
            emails: guess_emails("example.com"),
        }
    }

    #[test]
    fn test_story_section_order() {
        let story = build_story(&sample(3));

        assert_eq!(story[0], Block::Title("PhantomEye OSINT Report".to_string()));
        assert_eq!(story[1], Block::Target("example.com".to_string()));
        assert_eq!(story[2], Block::Generated("14/03/2025 09:26".to_string()));
        assert!(matches!(story[3], Block::Spacer(_)));
        assert_eq!(story[4], Block::Heading("Subdomains Found (3 total)".to_string()));
        assert!(matches!(story[5], Block::Table { kind: TableKind::Subdomains, .. }));
        assert!(matches!(story[6], Block::Spacer(_)));
        assert_eq!(story[7], Block::Heading("Exposed Emails (Potential Leaks)".to_string()));
        assert!(matches!(story[8], Block::Table { kind: TableKind::Emails, .. }));
        assert_eq!(story[10], Block::Heading("Recommendations".to_string()));

        let bullets = story.iter().filter(|b| matches!(b, Block::Bullet(_))).count();
        assert_eq!(bullets, 4);
        assert_eq!(story.last(), Some(&Block::Paragraph(FOOTER.to_string())));
    }

    #[test]
    fn test_story_table_rows() {
        let story = build_story(&sample(2));

        match &story[5] {
            Block::Table { rows, .. } => {
                assert_eq!(rows.len(), 2);
                assert!(rows.iter().all(|row| row[1] == SUBDOMAIN_STATUS));
                assert_eq!(rows[0][0], "host0.example.com");
            }
            other => panic!("unexpected block: {:?}", other),
        }

        match &story[8] {
            Block::Table { rows, .. } => {
                assert_eq!(rows.len(), 5);
                assert!(rows.iter().all(|row| row[1] == EMAIL_STATUS));
            }
            other => panic!("unexpected block: {:?}", other),
        }
    }

    #[test]
    fn test_story_is_stable_for_same_data() {
        let data = sample(4);
        assert_eq!(build_story(&data), build_story(&data));
    }

    #[test]
    fn test_render_pdf_signature() {
        let bytes = render_pdf(&sample(6)).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_render_pdf_overflows_to_new_pages() {
        let bytes = render_pdf(&sample(120)).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_render_pdf_with_empty_subdomains() {
        let bytes = render_pdf(&sample(0)).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_fit_text_truncates() {
        let long = "a".repeat(400);
        let fitted = fit_text(&long, BODY_SIZE, false, 50.0);
        assert!(fitted.ends_with("..."));
        assert!(text_width(&fitted, BODY_SIZE, false) <= 50.0);

        assert_eq!(fit_text("www.example.com", BODY_SIZE, false, 100.0), "www.example.com");
    }

    #[test]
    fn test_fit_runs_keeps_long_target_on_page() {
        let domain = format!("{}.example.com", "sub".repeat(80));
        let max = PAGE_WIDTH - 2.0 * MARGIN;
        let runs = fit_runs(&[("Target: ", false), (domain.as_str(), true)], HEADING_SIZE, max);

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].0, "Target: ");
        assert!(runs[1].0.ends_with("..."));
        let width: f32 = runs.iter().map(|(t, b)| text_width(t, HEADING_SIZE, *b)).sum();
        assert!(width <= max);
    }

    #[test]
    fn test_fit_runs_leaves_short_lines_alone() {
        let runs = fit_runs(&[("Target: ", false), ("example.com", true)], HEADING_SIZE, 100.0);
        assert_eq!(
            runs,
            vec![("Target: ".to_string(), false), ("example.com".to_string(), true)]
        );
    }

    #[test]
    fn test_render_pdf_with_long_domain() {
        let mut data = sample(1);
        data.domain = format!("{}.example.com", "a".repeat(300));
        let bytes = render_pdf(&data).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let small = text_width("example", 10.0, false);
        let large = text_width("example", 20.0, false);
        assert!((large - 2.0 * small).abs() < 1e-4);
        assert!(text_width("example", 10.0, true) > small);
    }
}
