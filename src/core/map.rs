use crate::utils::endpoint::portal_base;
use crate::utils::error::{FestError, Result};

/// Initial view of the embedded map: zoom 2 centred over Europe.
const EMBED_LOCATION: &str = "2,17.99267,51.6211";

/// Embeddable explore map for a dataset on an Opendatasoft portal.
pub fn embed_map_url(portal: &str, dataset: &str) -> Result<String> {
    let mut url = portal_base(portal)?
        .join(&format!("explore/embed/dataset/{}/map/", dataset))
        .map_err(|e| FestError::ConfigError {
            message: format!("Cannot build map URL for dataset {}: {}", dataset, e),
        })?;

    // Commas stay literal, as in the portal's own embed snippets.
    url.set_query(Some(&format!(
        "location={}&static=false&datasetcard=false&scrollWheelZoom=false",
        EMBED_LOCATION
    )));
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_portal_embed_url() {
        let url = embed_map_url("https://data.culture.gouv.fr/", "festivals-global-festivals-_-pl").unwrap();
        assert_eq!(
            url,
            "https://data.culture.gouv.fr/explore/embed/dataset/festivals-global-festivals-_-pl/map/?location=2,17.99267,51.6211&static=false&datasetcard=false&scrollWheelZoom=false"
        );
    }

    #[test]
    fn portal_path_is_kept_without_trailing_slash() {
        let url = embed_map_url("http://localhost:8080/portal", "fests").unwrap();
        assert!(url.starts_with("http://localhost:8080/portal/explore/embed/dataset/fests/map/?"));
    }

    #[test]
    fn rejects_invalid_portal() {
        assert!(embed_map_url("not a url", "dataset").is_err());
    }
}
