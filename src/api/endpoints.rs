//! API Endpoints
//!
//! URL construction for the product API. Pure string work so it can be
//! tested off the browser.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{FilterState, SortKey};

/// Characters left unescaped in query values and path segments
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, UNRESERVED).to_string()
}

fn trimmed(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// Which collection endpoint a list refresh goes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListQuery {
    /// `GET {base}?sort={key}`
    All { sort: SortKey },
    /// `GET {base}/search`, empty terms left out of the query string
    Search {
        name: Option<String>,
        category: Option<String>,
    },
}

impl ListQuery {
    /// Query for a submitted search. Terms are sent exactly as typed; with
    /// both empty this is the plain listing under the current sort key.
    pub fn search(filter: &FilterState) -> Self {
        let name = non_empty(&filter.name);
        let category = non_empty(&filter.category);
        if name.is_none() && category.is_none() {
            ListQuery::All { sort: filter.sort }
        } else {
            ListQuery::Search { name, category }
        }
    }

    pub fn url(&self, base: &str) -> String {
        let base = trimmed(base);
        match self {
            ListQuery::All { sort } => format!("{}?sort={}", base, encode(sort.as_param())),
            ListQuery::Search { name, category } => {
                let mut params = Vec::with_capacity(2);
                if let Some(name) = name {
                    params.push(format!("name={}", encode(name)));
                }
                if let Some(category) = category {
                    params.push(format!("category={}", encode(category)));
                }
                format!("{}/search?{}", base, params.join("&"))
            }
        }
    }
}

fn non_empty(term: &str) -> Option<String> {
    (!term.is_empty()).then(|| term.to_string())
}

/// `POST` target for a new product
pub fn create_url(base: &str, multipart: bool) -> String {
    if multipart {
        format!("{}/multipart/create", trimmed(base))
    } else {
        trimmed(base).to_string()
    }
}

/// `PUT` target for an existing product
pub fn update_url(base: &str, id: &str, multipart: bool) -> String {
    if multipart {
        format!("{}/multipart", product_url(base, id))
    } else {
        product_url(base, id)
    }
}

/// `{base}/{id}`, used for update and delete
pub fn product_url(base: &str, id: &str) -> String {
    format!("{}/{}", trimmed(base), encode(id))
}

/// Image source for a product card. A non-zero revision is appended so the
/// browser refetches after a new upload.
pub fn image_url(base: &str, id: &str, revision: u32) -> String {
    let url = format!("{}/image", product_url(base, id));
    if revision == 0 {
        url
    } else {
        format!("{}?v={}", url, revision)
    }
}
