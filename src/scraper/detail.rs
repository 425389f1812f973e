//! Detail page extraction
//!
//! Detail pages come in two templates: series pages list episodes in a
//! download table, movie pages list resolutions in flex blocks. Both are
//! read on every page and their entries concatenated, table rows first.

use crate::scraper::document::{Document, Node};
use crate::scraper::types::{DetailMeta, DetailRecord, DownloadEntry, GenreRef, HostLink};

/// Extracts the full detail record from a detail page
///
/// Every field degrades to `""`, `None` or `[]` when its element is absent.
pub fn extract_detail(document: &Document) -> DetailRecord {
    DetailRecord {
        title: document.text_of(".postdetail h1"),
        tagline: document.text_of(".postdetail .tagline"),
        meta: extract_meta(document),
        director: labelled_value(document, "Director"),
        rating: labelled_value(document, "Rating"),
        genres: extract_genre_links(document),
        sinopsis: document.joined_text_of("#tab-1 p"),
        poster: document.first_attr_of("div.poster img", &["data-src", "src"]),
        downloads: extract_downloads(document),
    }
}

/// Assigns the `.mr-4` elements positionally: year, country, duration
fn extract_meta(document: &Document) -> DetailMeta {
    let mut meta = DetailMeta::default();

    for (index, node) in document.select(".mr-4").iter().enumerate() {
        let value = node.text();
        match index {
            0 => meta.year = Some(value),
            1 => meta.country = Some(value),
            2 => meta.duration = Some(value),
            _ => tracing::warn!("Unexpected meta element at index {}: '{}'", index, value),
        }
    }

    meta
}

/// Text of the paragraph whose `<strong>` label contains `label`, minus the `"<label>:"` prefix
fn labelled_value(document: &Document, label: &str) -> String {
    let prefix = format!("{}:", label);

    document
        .select("p strong")
        .into_iter()
        .find(|strong| strong.text().contains(label))
        .and_then(|strong| strong.parent())
        .map(|paragraph| paragraph.text().replacen(&prefix, "", 1).trim().to_string())
        .unwrap_or_default()
}

/// Genre anchors next to the synopsis, hrefs kept verbatim
fn extract_genre_links(document: &Document) -> Vec<GenreRef> {
    document
        .select("p.mt-3 a")
        .iter()
        .map(|anchor| GenreRef {
            name: anchor.text(),
            url: anchor.attr("href").unwrap_or_default().to_string(),
        })
        .collect()
}

fn host_links(anchors: &[Node<'_>]) -> Vec<HostLink> {
    anchors
        .iter()
        .map(|anchor| HostLink {
            host: anchor.text(),
            url: anchor.attr("href").map(str::to_string),
        })
        .collect()
}

/// Probes both download templates and concatenates what is present
fn extract_downloads(document: &Document) -> Vec<DownloadEntry> {
    let mut downloads = extract_table_downloads(document);
    downloads.extend(extract_flex_downloads(document));
    downloads
}

/// Series template: one entry per table row
///
/// Rows flagged `ini` are header rows; rows with an empty first cell are
/// spacers. Links are gathered from every cell after the first.
fn extract_table_downloads(document: &Document) -> Vec<DownloadEntry> {
    let mut entries = Vec::new();

    for body in document.select("table.download tbody") {
        for row in body.select("tr") {
            if row.has_class("ini") {
                continue;
            }

            let cells = row.select("td");
            let name = cells.first().map(|cell| cell.text()).unwrap_or_default();
            if name.is_empty() {
                continue;
            }

            let links = cells
                .iter()
                .skip(1)
                .flat_map(|cell| host_links(&cell.select("a")))
                .collect();

            entries.push(DownloadEntry::Series { name, links });
        }
    }

    entries
}

/// Movie template: one entry per `#dl_tab .flex` block
fn extract_flex_downloads(document: &Document) -> Vec<DownloadEntry> {
    document
        .select("#dl_tab .flex")
        .iter()
        .map(|block| {
            let size = block
                .select(".dl_links b")
                .iter()
                .map(|b| b.text())
                .collect::<String>();

            DownloadEntry::Movie {
                resolution: block.text_of(".resol"),
                size: Some(size.trim().to_string()).filter(|s| !s.is_empty()),
                links: host_links(&block.select(".dl_links a")),
            }
        })
        .collect()
}
