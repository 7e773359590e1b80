use url::Url;

/// One entry of an RFC 8288 `Link` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub rels: Vec<String>,
}

/// Parse a `Link` header value
/// Accepts the format GitHub returns:
/// - <https://api.github.com/users?since=46>; rel="next"
/// - <https://api.github.com/users{?since}>; rel="first", <...>; rel="next"
///
/// Entries that are not wrapped in angle brackets are skipped.
pub fn parse_link_header(value: &str) -> Vec<Link> {
    let mut links = Vec::new();
    let mut rest = value;

    loop {
        rest = rest.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
        if rest.is_empty() {
            break;
        }

        let Some(target) = rest.strip_prefix('<') else {
            // Skip to the next entry
            match rest.find(',') {
                Some(idx) => {
                    rest = &rest[idx + 1..];
                    continue;
                }
                None => break,
            }
        };

        let Some(end) = target.find('>') else {
            break;
        };
        let url = target[..end].trim();
        let params = &target[end + 1..];
        let params_end = params.find(',').unwrap_or(params.len());

        let rels = params[..params_end]
            .split(';')
            .filter_map(|param| {
                let (name, value) = param.split_once('=')?;
                name.trim()
                    .eq_ignore_ascii_case("rel")
                    .then(|| value.trim().trim_matches('"').to_string())
            })
            .flat_map(|value| {
                value
                    .split_whitespace()
                    .map(|rel| rel.to_ascii_lowercase())
                    .collect::<Vec<_>>()
            })
            .collect();

        links.push(Link {
            url: url.to_string(),
            rels,
        });

        rest = &params[params_end..];
    }

    links
}

/// Return the URL carrying the given relation, if present
pub fn find_rel(value: &str, rel: &str) -> Option<String> {
    parse_link_header(value)
        .into_iter()
        .find(|link| link.rels.iter().any(|r| r.eq_ignore_ascii_case(rel)))
        .map(|link| link.url)
}

/// Extract the `since` cursor from a pagination URL
/// Returns `None` when the URL cannot be parsed or carries no numeric cursor.
pub fn since_cursor(link: &str) -> Option<u64> {
    let url = Url::parse(link).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "since")
        .and_then(|(_, value)| value.parse().ok())
}
