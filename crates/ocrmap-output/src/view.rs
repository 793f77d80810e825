//! Plain-text rendering of one aligned document for review.

use ocrmap_model::{AlignedRecord, SpanMatch};

/// Opening marker around a mapped span.
pub const OPEN: &str = "[[";
/// Closing marker around a mapped span.
pub const CLOSE: &str = "]]";

/// Marks every mapped span in `text` as `[[mapped text]]{LABEL,...}`.
///
/// `text` must be the normalized OCR text the span offsets refer to. Spans
/// are drawn in start order; a span overlapping one already drawn, or whose
/// range falls outside the text, is left out.
pub fn highlight_spans(text: &str, spans: &[SpanMatch]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut ordered: Vec<&SpanMatch> = spans
        .iter()
        .filter(|span| span.range().is_some_and(|r| r.start < r.end && r.end <= chars.len()))
        .collect();
    ordered.sort_by_key(|span| (span.mapped_start, span.mapped_end));

    let mut out = String::with_capacity(text.len() + spans.len() * 16);
    let mut cursor = 0;
    for span in ordered {
        let Some(range) = span.range() else {
            continue;
        };
        if range.start < cursor {
            continue;
        }
        out.extend(&chars[cursor..range.start]);
        out.push_str(OPEN);
        out.extend(&chars[range.clone()]);
        out.push_str(CLOSE);
        let labels: Vec<&str> = span.labels.iter().map(String::as_str).collect();
        out.push('{');
        out.push_str(&labels.join(","));
        out.push('}');
        cursor = range.end;
    }
    out.extend(&chars[cursor..]);
    out
}

/// Chars of the preview shown by [`preview_line`].
pub const PREVIEW_LINE_CHARS: usize = 60;

/// One-line summary of a record's preview, cut at [`PREVIEW_LINE_CHARS`].
pub fn preview_line(record: &AlignedRecord) -> String {
    let mut chars = record.preview.chars();
    let mut line: String = chars.by_ref().take(PREVIEW_LINE_CHARS).collect();
    if chars.next().is_some() {
        line.push_str("...");
    }
    line
}

/// Header lines for the document view: id, matched file, score, span counts.
pub fn document_header(id: usize, record: &AlignedRecord) -> String {
    let file = record.matched_file.as_deref().unwrap_or("(no OCR file)");
    let mut header = format!(
        "Document {id}\nMatched file: {file}\nMatch score: {:.3}\nSpans mapped: {}/{}",
        record.match_score,
        record.mapped_span_count(),
        record.spans.len(),
    );
    if record.weak_match {
        header.push_str("\nWARNING: weak document match, span results are less trustworthy");
    }
    header
}
