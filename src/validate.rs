use url::Url;

use crate::error::UrlError;

/// Parses `raw` into a fetch target.
///
/// The scheme check is a plain prefix match on `"http"`, so `http`, `https`
/// and any other scheme starting with those four letters are accepted.
pub fn parse_target(raw: &str) -> Result<Url, UrlError> {
    if raw.is_empty() {
        return Err(UrlError::Empty);
    }

    let url = Url::parse(raw)?;
    if !url.scheme().starts_with("http") {
        return Err(UrlError::Scheme {
            scheme: url.scheme().to_owned(),
        });
    }

    Ok(url)
}
