//! HTML ranking-table extraction
//!
//! The ranking pages render plain `<table>` markup, so extraction scans
//! for tag blocks directly instead of pulling in a DOM parser. Tag
//! detection is case-insensitive and tolerant of attributes; cell text is
//! stripped of nested tags and normalized.

/// One row extracted from a ranking table
///
/// All fields are kept as page text. The label column holds a city name on
/// the cities page and a country name on the world report page.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedRow {
    pub rank: String,
    pub label: String,
    pub aqi: String,
}

/// Extract ranked rows from every table in the page
///
/// Returns `None` when the page contains no tables at all, which callers
/// treat as a scrape failure. The first row of each table is assumed to be
/// a header and skipped; rows with fewer than three cells are ignored.
pub fn scrape_ranked_rows(html: &str) -> Option<Vec<ScrapedRow>> {
    let tables = tag_blocks(html, "table");
    if tables.is_empty() {
        return None;
    }

    let mut rows = Vec::new();
    for table in tables {
        for row in tag_blocks(table, "tr").into_iter().skip(1) {
            let cells = tag_blocks(row, "td");
            if cells.len() < 3 {
                continue;
            }
            rows.push(ScrapedRow {
                rank: cell_text(cells[0]),
                label: cell_text(cells[1]),
                aqi: cell_text(cells[2]),
            });
        }
    }

    Some(rows)
}

/// Find the inner content of every `<tag>...</tag>` block
///
/// Matching is ASCII case-insensitive and allows attributes on the opening
/// tag. Scanning is byte-aligned with the original input, so the returned
/// slices borrow from `html` directly.
fn tag_blocks<'h>(html: &'h str, tag: &str) -> Vec<&'h str> {
    let lower = html.to_ascii_lowercase();
    let open = format!("<{}", tag);
    let close = format!("</{}", tag);

    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(found) = lower[cursor..].find(&open) {
        let open_at = cursor + found;
        let after_name = open_at + open.len();

        // Reject longer tag names sharing the prefix, e.g. <track> for <tr>
        match lower.as_bytes().get(after_name) {
            Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') => {}
            _ => {
                cursor = after_name;
                continue;
            }
        }

        let Some(gt) = lower[after_name..].find('>') else {
            break;
        };
        let content_start = after_name + gt + 1;

        let Some(end) = lower[content_start..].find(&close) else {
            cursor = content_start;
            continue;
        };
        let content_end = content_start + end;

        blocks.push(&html[content_start..content_end]);
        cursor = content_end + close.len();
    }

    blocks
}

/// Strip nested tags, decode common entities, and collapse whitespace
fn cell_text(cell: &str) -> String {
    let mut text = String::with_capacity(cell.len());
    let mut in_tag = false;

    for ch in cell.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    // &amp; goes last so an escaped entity like &amp;lt; decodes once, to &lt;
    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <h1>World's most polluted cities</h1>
        <TABLE class="ranking">
          <tr><th>Rank</th><th>City</th><th>2024 Avg</th></tr>
          <tr><td>1</td><td><a href="/delhi">Delhi</a></td><td>169</td></tr>
          <tr><td>2</td><td>N'Djamena</td><td>91.8</td></tr>
          <tr><td colspan="3">advertisement</td></tr>
        </TABLE>
        <table>
          <tr><td>Rank</td><td>Country</td><td>Avg</td></tr>
          <tr><td> 1 </td><td>Bangladesh &amp; region</td><td>79.9</td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_extracts_rows_from_all_tables() {
        let rows = scrape_ranked_rows(PAGE).unwrap();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].rank, "1");
        assert_eq!(rows[0].label, "Delhi");
        assert_eq!(rows[0].aqi, "169");

        assert_eq!(rows[1].label, "N'Djamena");
        assert_eq!(rows[2].label, "Bangladesh & region");
    }

    #[test]
    fn test_header_row_skipped_per_table() {
        let rows = scrape_ranked_rows(PAGE).unwrap();
        assert!(rows.iter().all(|row| row.rank != "Rank"));
    }

    #[test]
    fn test_short_rows_ignored() {
        let html = "<table><tr><th>h</th></tr><tr><td>1</td><td>Delhi</td></tr></table>";
        let rows = scrape_ranked_rows(html).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_page_without_tables_is_none() {
        assert_eq!(scrape_ranked_rows("<html><body><p>nothing</p></body></html>"), None);
    }

    #[test]
    fn test_tag_blocks_rejects_prefix_collisions() {
        let html = "<track>ignored</track><tr><td>a</td><td>b</td><td>c</td></tr>";
        assert_eq!(tag_blocks(html, "tr").len(), 1);
    }

    #[test]
    fn test_cell_text_normalizes() {
        assert_eq!(cell_text("  <b>New\n  Delhi</b>&nbsp;IN "), "New Delhi IN");
    }

    #[test]
    fn test_cell_text_decodes_entities_once() {
        assert_eq!(cell_text("PM2.5 &lt; 10 &amp; rising"), "PM2.5 < 10 & rising");
        assert_eq!(cell_text("&amp;lt;"), "&lt;");
    }
}
