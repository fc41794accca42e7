use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

type Rgb = (f32, f32, f32);

const FONT: Name<'static> = Name(b"F1");

const HEADER_FILL: Rgb = (0.85, 0.87, 0.90);
const STRIPE_FILL: Rgb = (0.96, 0.96, 0.96);
const BORDER: Rgb = (0.65, 0.65, 0.65);

/// A4 portrait, in points.
struct Layout {
    width: f32,
    height: f32,
    margin: f32,
    row_h: f32,
    line_h: f32,
    body_size: f32,
    label_size: f32,
    title_size: f32,
}

const A4: Layout = Layout {
    width: 595.0,
    height: 842.0,
    margin: 50.0,
    row_h: 20.0,
    line_h: 18.0,
    body_size: 10.0,
    label_size: 11.0,
    title_size: 16.0,
};

impl Layout {
    /// Baseline of the first line under the page title.
    fn top(&self) -> f32 {
        self.height - self.margin - 30.0
    }

    fn usable_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }
}

/// Helvetica (WinAnsi) document builder: paged tables and colored line lists.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    tree_id: Ref,
    font_id: Ref,
    last_id: i32,
    page_refs: Vec<Ref>,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let catalog_id = Ref::new(1);
        let tree_id = Ref::new(2);
        let font_id = Ref::new(3);

        let mut pdf = Pdf::new();
        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            tree_id,
            font_id,
            last_id: 3,
            page_refs: Vec::new(),
        }
    }

    fn alloc(&mut self) -> Ref {
        self.last_id += 1;
        Ref::new(self.last_id)
    }

    /// Emit `items` over as many pages as needed.
    ///
    /// `head` draws the fixed part of a page (it receives the page number
    /// and the current baseline and returns the baseline below it); `item`
    /// draws one entry at a baseline. Every call produces at least one page.
    fn paged<T>(
        &mut self,
        title: &str,
        items: &[T],
        step: f32,
        mut head: impl FnMut(&mut Content, usize, f32) -> f32,
        mut item: impl FnMut(&mut Content, usize, f32, &T),
    ) {
        let mut next = 0;
        let mut page_no = 1;

        loop {
            let mut content = Content::new();
            text(&mut content, A4.margin, A4.height - A4.margin + 15.0, A4.title_size, title);
            text(
                &mut content,
                A4.width - A4.margin - 60.0,
                A4.margin - 35.0,
                A4.body_size,
                &format!("Page {page_no}"),
            );

            let mut y = head(&mut content, page_no, A4.top());
            let first_on_page = next;
            while next < items.len() && y - step >= A4.margin {
                item(&mut content, next - first_on_page, y, &items[next]);
                y -= step;
                next += 1;
            }

            self.push_page(content);
            page_no += 1;

            if next >= items.len() {
                break;
            }
        }
    }

    fn push_page(&mut self, content: Content) {
        let page_id = self.alloc();
        let content_id = self.alloc();

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.tree_id)
                .media_box(Rect::new(0.0, 0.0, A4.width, A4.height))
                .contents(content_id);
            page.resources().fonts().pair(FONT, self.font_id);
        }

        self.pdf.stream(content_id, &content.finish());
        self.page_refs.push(page_id);
    }

    /// Table with repeated header row; `summary` lines sit above the table
    /// on the first page only.
    pub fn write_table(
        &mut self,
        title: &str,
        summary: &[String],
        headers: &[&str],
        rows: &[Vec<String>],
    ) {
        let widths = column_widths(headers, rows);
        let table_w: f32 = widths.iter().sum();

        self.paged(
            title,
            rows,
            A4.row_h,
            |content, page_no, mut y| {
                if page_no == 1 && !summary.is_empty() {
                    for line in summary {
                        text(content, A4.margin, y, A4.label_size, line);
                        y -= 16.0;
                    }
                    y -= A4.row_h;
                }
                band(content, y, table_w, HEADER_FILL);
                row_cells(content, y, &widths, headers.iter().copied(), A4.label_size);
                y - A4.row_h
            },
            |content, index, y, row| {
                if index % 2 == 0 {
                    band(content, y, table_w, STRIPE_FILL);
                }
                row_cells(content, y, &widths, row.iter().map(String::as_str), A4.body_size);
            },
        );
    }

    /// One line per entry, each filled with its own color.
    pub fn write_colored_lines(&mut self, title: &str, lines: &[(String, Rgb)]) {
        self.paged(
            title,
            lines,
            A4.line_h,
            |_, _, y| y,
            |content, _, y, (line, rgb)| {
                content.save_state();
                content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
                text(content, A4.margin, y, A4.label_size, line);
                content.restore_state();
            },
        );
    }

    /// Assemble the document and return the raw bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.tree_id);
        let mut tree = self.pdf.pages(self.tree_id);
        tree.count(self.page_refs.len() as i32);
        tree.kids(self.page_refs.iter().copied());
        drop(tree);
        self.pdf.finish()
    }
}

fn text(content: &mut Content, x: f32, y: f32, size: f32, s: &str) {
    let encoded = encode_winansi(s);
    content.begin_text();
    content.set_font(FONT, size);
    content.next_line(x, y);
    content.show(Str(&encoded));
    content.end_text();
}

fn band(content: &mut Content, y: f32, width: f32, fill: Rgb) {
    content.save_state();
    content.set_fill_rgb(fill.0, fill.1, fill.2);
    content.rect(A4.margin, y, width, A4.row_h);
    content.fill_nonzero();
    content.restore_state();
}

fn row_cells<'a>(
    content: &mut Content,
    y: f32,
    widths: &[f32],
    cells: impl Iterator<Item = &'a str>,
    size: f32,
) {
    let mut x = A4.margin;
    for (cell, w) in cells.zip(widths) {
        text(content, x + 4.0, y + 5.0, size, cell);

        content.save_state();
        content.set_stroke_rgb(BORDER.0, BORDER.1, BORDER.2);
        content.rect(x, y, *w, A4.row_h);
        content.stroke();
        content.restore_state();

        x += w;
    }
}

/// Rough Helvetica widths from character counts, shrunk to the page if needed.
fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
    let mut widths: Vec<f32> = headers
        .iter()
        .map(|h| h.chars().count() as f32 * 6.5)
        .collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = w.max(cell.chars().count() as f32 * 6.2);
        }
    }

    let total: f32 = widths.iter().sum();
    let room = A4.usable_width();
    if total > room {
        widths.iter_mut().for_each(|w| *w *= room / total);
    }
    widths
}

/// Map text to single-byte WinAnsi; characters outside Latin-1 become '?'.
fn encode_winansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '—' | '–' => b'-',
            c if (c as u32) < 0x100 => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_table_spans_pages() {
        let mut pdf = PdfManager::new();
        let rows: Vec<Vec<String>> = (0..80)
            .map(|i| vec![format!("row {i}"), "x".to_string()])
            .collect();
        pdf.write_table("Title", &["Total: 80".into()], &["A", "B"], &rows);
        assert!(pdf.page_refs.len() > 1);
        let bytes = pdf.finish();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn empty_lines_still_give_one_page() {
        let mut pdf = PdfManager::new();
        pdf.write_colored_lines("Nobody", &[]);
        assert_eq!(pdf.page_refs.len(), 1);
    }

    #[test]
    fn wide_tables_are_scaled_to_the_page() {
        let rows = vec![vec!["x".repeat(200), "y".repeat(200)]];
        let widths = column_widths(&["A", "B"], &rows);
        let total: f32 = widths.iter().sum();
        assert!(total <= A4.usable_width() + 0.01);
    }

    #[test]
    fn winansi_replaces_unmappable_chars() {
        assert_eq!(encode_winansi("Zoë — ✔"), b"Zo\xeb - ?".to_vec());
    }
}
