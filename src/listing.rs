//! Extraction of published map names from a download server index page.
//!
//! The page is an auto-generated directory index, so a pattern match over
//! `href` attributes is enough. The extraction contract is:
//!
//! 1. every `href=` followed by an optionally quoted token, ending at a
//!    quote, space, or `>`;
//! 2. keep tokens that contain `bz2` anywhere;
//! 3. the map name is the token up to its first `.`.
//!
//! Rule 3 truncates names that contain dots (`de.dust2.bsp.bz2` yields
//! `de`), and a token carrying a path (`/maps/de_dust2.bsp.bz2`) keeps
//! that path in its name. Both follow from the contract as stated.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Matches `href` attribute values, quoted or bare.
static HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href=['"]?([^'" >]+)"#).expect("href regex must compile"));

/// Marker for compressed map archives.
pub const ARCHIVE_MARKER: &str = "bz2";

/// Build the listing URL for a download server base URL.
///
/// Trailing slashes on the base are dropped so `http://dl/` and `http://dl`
/// both produce `http://dl/maps/`.
#[must_use]
pub fn listing_url(base_url: &str) -> String {
    format!("{}/maps/", base_url.trim_end_matches('/'))
}

/// All `href` values in document order.
#[must_use]
pub fn extract_hrefs(body: &str) -> Vec<&str> {
    HREF_RE
        .captures_iter(body)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Map name for an href, or `None` if it is not a map archive.
#[must_use]
pub fn map_basename(href: &str) -> Option<&str> {
    if !href.contains(ARCHIVE_MARKER) {
        return None;
    }
    Some(href.split_once('.').map_or(href, |(base, _)| base))
}

/// Set of map names published by a download server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteMapSet {
    names: BTreeSet<String>,
}

impl RemoteMapSet {
    /// Parse a listing body.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let names = extract_hrefs(body)
            .into_iter()
            .filter_map(map_basename)
            .map(str::to_string)
            .collect();
        Self { names }
    }

    /// Returns `true` if `name` is published.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of distinct published names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the listing published no map archives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Published names, sorted.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = r#"<a href="de_dust2.bz2">de_dust2.bz2</a><a href="cs_office.bz2">cs_office.bz2</a>"#;

    #[test]
    fn listing_url_appends_maps_dir() {
        assert_eq!(listing_url("http://dl.example"), "http://dl.example/maps/");
        assert_eq!(listing_url("http://dl.example/"), "http://dl.example/maps/");
        assert_eq!(listing_url("http://dl.example/csgo//"), "http://dl.example/csgo/maps/");
    }

    #[test]
    fn extracts_quoted_and_bare_hrefs() {
        let body = r#"<a href="a.bz2">a</a> <a href='b.bz2'>b</a> <a href=c.bz2>c</a>"#;
        assert_eq!(extract_hrefs(body), vec!["a.bz2", "b.bz2", "c.bz2"]);
    }

    #[test]
    fn href_stops_at_space_and_angle() {
        let body = "<a href=de_nuke.bsp.bz2 title=x><a href=\"../\">";
        assert_eq!(extract_hrefs(body), vec!["de_nuke.bsp.bz2", "../"]);
    }

    #[test]
    fn parses_simple_index() {
        let set = RemoteMapSet::parse(INDEX);
        assert_eq!(set.len(), 2);
        assert!(set.contains("de_dust2"));
        assert!(set.contains("cs_office"));
        assert!(!set.contains("de_aztec"));
    }

    #[test]
    fn typical_bsp_archive_names() {
        let body = r#"<a href="../">../</a>
<a href="de_inferno.bsp.bz2">de_inferno.bsp.bz2</a>    18-Jan-2016 12:00   4M
<a href="de_inferno.nav">de_inferno.nav</a>"#;
        let set = RemoteMapSet::parse(body);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["de_inferno"]);
    }

    #[test]
    fn duplicates_collapse() {
        let body = r#"<a href="de_dust2.bsp.bz2"></a><a href="de_dust2.nav.bz2"></a>"#;
        assert_eq!(RemoteMapSet::parse(body).len(), 1);
    }

    #[test]
    fn marker_matches_anywhere_in_href() {
        assert_eq!(map_basename("bz2maps/de_train.bsp"), Some("bz2maps/de_train"));
        assert_eq!(map_basename("de_train.bsp"), None);
    }

    #[test]
    fn href_without_dot_is_its_own_name() {
        assert_eq!(map_basename("archive_bz2"), Some("archive_bz2"));
    }

    #[test]
    fn dotted_names_truncate_at_first_dot() {
        assert_eq!(map_basename("de.dust2.bsp.bz2"), Some("de"));
    }

    #[test]
    fn path_prefix_is_kept() {
        let set = RemoteMapSet::parse(r#"<a href="/maps/de_dust2.bsp.bz2">"#);
        assert!(set.contains("/maps/de_dust2"));
        assert!(!set.contains("de_dust2"));
    }

    #[test]
    fn no_archives_gives_empty_set() {
        let set = RemoteMapSet::parse(r#"<a href="readme.txt">readme</a><p>nothing</p>"#);
        assert!(set.is_empty());
    }

    #[test]
    fn garbage_body_gives_empty_set() {
        assert!(RemoteMapSet::parse("").is_empty());
        assert!(RemoteMapSet::parse("href=").is_empty());
        assert!(RemoteMapSet::parse("<<<>>> href=\"\" bz2").is_empty());
    }
}
