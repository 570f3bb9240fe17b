//! Markdown side of the normalizer: dialect pre-pass and HTML rendering.
//!
//! The pre-pass rewrites the two constructs CommonMark does not read the way
//! the template dialect writes them:
//!
//! - wiki tables (`|| a || b ||`) become raw HTML tables,
//! - list items nested with two spaces under an ordered item are re-indented
//!   to the parent's content column.
//!
//! Everything else is handed to comrak untouched.

use comrak::{markdown_to_html, ComrakOptions};

/// Render markup to HTML, applying the dialect pre-pass first.
pub(crate) fn render_html(source: &str) -> String {
    let prepared = preprocess(source);
    markdown_to_html(&prepared, &default_comrak_options())
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    // Wiki tables reach comrak as raw HTML blocks.
    options.render.unsafe_ = true;
    options
}

/// An item that is still open while scanning list lines.
struct OpenItem {
    source_indent: usize,
    /// Column where the item's content starts in the source.
    source_content: usize,
    output_indent: usize,
}

impl OpenItem {
    fn shift(&self) -> usize {
        self.output_indent - self.source_indent
    }

    fn output_content(&self) -> usize {
        self.output_indent + (self.source_content - self.source_indent)
    }

    /// Output column for a line indented by `indent` that belongs to this item.
    fn place(&self, indent: usize) -> usize {
        (indent + self.shift()).max(self.output_content())
    }
}

pub(crate) fn preprocess(source: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let mut output: Vec<String> = Vec::with_capacity(lines.len());
    let mut open: Vec<OpenItem> = Vec::new();
    let mut fence: Option<char> = None;
    let mut previous_blank = true;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if line.trim().is_empty() {
            output.push(String::new());
            previous_blank = true;
            i += 1;
            continue;
        }

        let indent = leading_spaces(line);

        if fence.is_none() && is_wiki_row(line) {
            let start = i;
            while i < lines.len() && is_wiki_row(lines[i]) {
                i += 1;
            }
            open.clear();
            output.push(String::new());
            output.push(render_wiki_table(&lines[start..i]));
            output.push(String::new());
            previous_blank = true;
            continue;
        }

        if let Some(marker) = fence_marker(line) {
            match fence {
                None => fence = Some(marker),
                Some(open_marker) if open_marker == marker => fence = None,
                Some(_) => {}
            }
        } else if fence.is_none() {
            if let Some(width) = list_marker_width(&line[indent..]) {
                while open.last().is_some_and(|item| item.source_indent >= indent) {
                    open.pop();
                }
                let output_indent = open.last().map_or(indent, |parent| parent.place(indent));
                open.push(OpenItem {
                    source_indent: indent,
                    source_content: indent + width,
                    output_indent,
                });
                output.push(reindent(line, indent, output_indent));
                previous_blank = false;
                i += 1;
                continue;
            }
            if indent == 0 && previous_blank {
                open.clear();
            }
        }

        let target = open
            .iter()
            .rev()
            .find(|item| item.source_indent < indent)
            .map_or(indent, |item| item.place(indent));
        output.push(reindent(line, indent, target));
        previous_blank = false;
        i += 1;
    }

    let mut prepared = output.join("\n");
    prepared.push('\n');
    prepared
}

fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

fn reindent(line: &str, indent: usize, target: usize) -> String {
    if indent == target {
        line.to_string()
    } else {
        format!("{}{}", " ".repeat(target), &line[indent..])
    }
}

fn fence_marker(line: &str) -> Option<char> {
    let trimmed = line.trim_start();
    if trimmed.starts_with("```") {
        Some('`')
    } else if trimmed.starts_with("~~~") {
        Some('~')
    } else {
        None
    }
}

/// Width of a list marker plus the spaces after it, if `rest` starts with one.
fn list_marker_width(rest: &str) -> Option<usize> {
    let marker_len = if rest.starts_with(['-', '*', '+']) {
        1
    } else {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || digits > 9 {
            return None;
        }
        match rest.as_bytes().get(digits) {
            Some(b'.') | Some(b')') => digits + 1,
            _ => return None,
        }
    };

    let after = &rest[marker_len..];
    if after.is_empty() {
        return Some(marker_len + 1);
    }
    let spaces = leading_spaces(after);
    match spaces {
        0 => None,
        // Five or more spaces start an indented code block inside the item.
        1..=4 => Some(marker_len + spaces),
        _ => Some(marker_len + 1),
    }
}

fn is_wiki_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 4 && trimmed.starts_with("||") && trimmed.ends_with("||")
}

fn render_wiki_table(rows: &[&str]) -> String {
    let mut html = String::from("<table>\n");
    for row in rows {
        let trimmed = row.trim();
        let inner = &trimmed[2..trimmed.len() - 2];
        html.push_str("<tr>");
        for cell in inner.split("||") {
            let cell = cell.trim();
            let header = cell
                .strip_prefix('=')
                .and_then(|rest| rest.strip_suffix('='))
                .map(str::trim);
            match header {
                Some(text) => {
                    html.push_str("<th>");
                    html.push_str(&html_escape::encode_text(text));
                    html.push_str("</th>");
                }
                None => {
                    html.push_str("<td>");
                    html.push_str(&html_escape::encode_text(cell));
                    html.push_str("</td>");
                }
            }
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>");
    html
}
