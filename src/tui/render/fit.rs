//! Laying styled rows out in a fixed number of terminal cells

use ratatui::text::Span;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const TAB_CELLS: usize = 4;

fn cells(grapheme: &str) -> usize {
    if grapheme == "\t" {
        TAB_CELLS
    } else {
        grapheme.width()
    }
}

/// Terminal cells `text` occupies; tabs take four
pub fn text_cells(text: &str) -> usize {
    text.graphemes(true).map(cells).sum()
}

/// Lay `spans` out in exactly `width` cells.
///
/// A short row is padded with spaces. An overflowing row keeps whole
/// graphemes up to `width - 1` cells and ends in `…` styled like the span
/// it cut; a wide grapheme that no longer fits leaves a blank cell before
/// the `…`.
pub fn fit_spans<'a>(spans: Vec<Span<'a>>, width: usize) -> Vec<Span<'a>> {
    let total: usize = spans.iter().map(|s| text_cells(&s.content)).sum();
    if total <= width {
        let mut fitted = spans;
        if total < width {
            fitted.push(Span::raw(" ".repeat(width - total)));
        }
        return fitted;
    }
    if width == 0 {
        return Vec::new();
    }

    let mut budget = width - 1;
    let mut fitted = Vec::with_capacity(spans.len());
    for span in spans {
        if text_cells(&span.content) <= budget {
            budget -= text_cells(&span.content);
            fitted.push(span);
            continue;
        }
        let mut kept = String::new();
        for grapheme in span.content.graphemes(true) {
            let w = cells(grapheme);
            if w > budget {
                break;
            }
            budget -= w;
            kept.push_str(grapheme);
        }
        kept.push_str(&" ".repeat(budget));
        kept.push('\u{2026}');
        fitted.push(Span::styled(kept, span.style));
        break;
    }
    fitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn counts_cells() {
        assert_eq!(text_cells("abc"), 3);
        assert_eq!(text_cells("日本"), 4);
        assert_eq!(text_cells("a\tb"), 6);
        assert_eq!(text_cells("e\u{301}"), 1);
    }

    #[test]
    fn pads_short_rows() {
        let fitted = fit_spans(vec![Span::raw("ab")], 5);
        assert_eq!(text(&fitted), "ab   ");
        assert_eq!(fit_spans(vec![Span::raw("abc")], 3).len(), 1);
    }

    #[test]
    fn cut_keeps_style_of_cut_span() {
        let red = Style::default().fg(Color::Red);
        let fitted = fit_spans(
            vec![Span::raw("  "), Span::styled("Write the quarterly report", red)],
            12,
        );
        assert_eq!(text(&fitted), "  Write the\u{2026}");
        assert_eq!(fitted.len(), 2);
        assert_eq!(fitted[1].style, red);
    }

    #[test]
    fn cut_between_spans() {
        let fitted = fit_spans(vec![Span::raw("abcd"), Span::raw("efgh")], 5);
        assert_eq!(text(&fitted), "abcd\u{2026}");
    }

    #[test]
    fn wide_grapheme_leaves_a_blank() {
        let fitted = fit_spans(vec![Span::raw("日本語")], 5);
        assert_eq!(text(&fitted), "日本\u{2026}");
        let fitted = fit_spans(vec![Span::raw("日本語")], 4);
        assert_eq!(text(&fitted), "日 \u{2026}");
        assert_eq!(text_cells(&text(&fitted)), 4);
    }

    #[test]
    fn tiny_widths() {
        assert_eq!(text(&fit_spans(vec![Span::raw("hello")], 1)), "\u{2026}");
        assert!(fit_spans(vec![Span::raw("hello")], 0).is_empty());
        assert!(fit_spans(vec![], 0).is_empty());
    }
}
