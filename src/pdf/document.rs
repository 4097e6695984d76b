// src/pdf/document.rs
// =============================================================================
// Builds the combined HTML document the PDF is printed from.
//
// Layout: one fixed style block, then for each captured page (in crawl
// order) a section with the page title as a heading, the source URL as a
// caption under a rule, the page's captured HTML, and a page-break marker
// so each crawled page starts on a fresh PDF page.
//
// Titles and URLs are escaped before interpolation (`html-escape` crate).
// The captured HTML itself is inserted verbatim: it is already a rendered
// document and the browser tolerates nested <html>/<body> tags when it
// re-parses the combined document.
// =============================================================================

use crate::crawl::PageRecord;

// Fixed styling: page margins, the header rule, and the page-break class
// the assembler relies on. printToPDF honors `page-break-after`.
const STYLE_BLOCK: &str = "\
<style>
  body { margin: 0; padding: 0; }
  .sitebook-header { border-bottom: 1px solid #999; margin-bottom: 12px; padding-bottom: 6px; }
  .sitebook-header h1 { font-size: 20px; margin: 0 0 4px 0; }
  .sitebook-url { font-size: 11px; color: #666; }
  .sitebook-break { page-break-after: always; }
</style>
";

// Concatenates captured pages into one printable HTML document
//
// Input order is preserved: the PDF reads in crawl order.
pub fn combine_pages(pages: &[PageRecord]) -> String {
    let mut doc = String::new();
    doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    doc.push_str(STYLE_BLOCK);
    doc.push_str("</head>\n<body>\n");

    for page in pages {
        doc.push_str("<div class=\"sitebook-page\">\n");
        doc.push_str("<div class=\"sitebook-header\">\n");

        doc.push_str("<h1>");
        doc.push_str(&html_escape::encode_text(page_title(page)));
        doc.push_str("</h1>\n");

        doc.push_str("<div class=\"sitebook-url\">");
        doc.push_str(&html_escape::encode_text(&page.url));
        doc.push_str("</div>\n");

        doc.push_str("</div>\n");

        // The captured page body, verbatim
        doc.push_str(&page.html);
        doc.push('\n');

        doc.push_str("</div>\n<div class=\"sitebook-break\"></div>\n");
    }

    doc.push_str("</body>\n</html>\n");
    doc
}

// Pages without a <title> still get a readable heading
fn page_title(page: &PageRecord) -> &str {
    if page.title.trim().is_empty() {
        &page.url
    } else {
        &page.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, title: &str, html: &str) -> PageRecord {
        PageRecord {
            url: url.to_string(),
            title: title.to_string(),
            html: html.to_string(),
        }
    }

    #[test]
    fn test_one_page_break_per_page() {
        let pages = vec![
            record("http://a.test/", "A", "<p>x</p>"),
            record("http://a.test/b", "B", "<p>y</p>"),
        ];
        let doc = combine_pages(&pages);
        // The class name also appears once in the style block, so count
        // the marker divs themselves
        assert_eq!(doc.matches("<div class=\"sitebook-break\">").count(), 2);
    }

    #[test]
    fn test_titles_appear_in_input_order() {
        let pages = vec![
            record("u1", "T1", "<p>x</p>"),
            record("u2", "T2", "<p>y</p>"),
        ];
        let doc = combine_pages(&pages);
        let first = doc.find("<h1>T1</h1>").expect("T1 heading missing");
        let second = doc.find("<h1>T2</h1>").expect("T2 heading missing");
        assert!(first < second);
    }

    #[test]
    fn test_page_html_and_url_caption_present() {
        let pages = vec![record("http://a.test/page", "Page", "<p>body text</p>")];
        let doc = combine_pages(&pages);
        assert!(doc.contains("<p>body text</p>"));
        assert!(doc.contains("class=\"sitebook-url\">http://a.test/page</div>"));
    }

    #[test]
    fn test_title_is_escaped() {
        let pages = vec![record("u1", "Tom & <Jerry>", "<p>x</p>")];
        let doc = combine_pages(&pages);
        assert!(doc.contains("Tom &amp; &lt;Jerry&gt;"));
        assert!(!doc.contains("<h1>Tom & <Jerry></h1>"));
    }

    #[test]
    fn test_untitled_page_falls_back_to_url() {
        let pages = vec![record("http://a.test/x", "  ", "<p>x</p>")];
        let doc = combine_pages(&pages);
        assert!(doc.contains("<h1>http://a.test/x</h1>"));
    }

    #[test]
    fn test_empty_input_still_yields_a_document() {
        let doc = combine_pages(&[]);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert_eq!(doc.matches("<div class=\"sitebook-break\">").count(), 0);
    }
}
