use anyhow::Result;
use gofest::app::commands::{self, ListRequest, PageSpan};
use gofest::{FestError, FilterKind, HttpFestivalSource, OutputFormat, RefineFilter, Settings};
use httpmock::prelude::*;
use serde_json::json;

const RECORDS_PATH: &str = "/api/explore/v2.1/catalog/datasets/festivals-global-festivals-_-pl/records";

fn source_for(server: &MockServer, page_size: usize) -> Result<HttpFestivalSource> {
    let settings = Settings {
        base_url: server.base_url(),
        page_size,
        ..Settings::default()
    };
    Ok(HttpFestivalSource::new(&settings)?)
}

fn festival(i: usize, city: &str) -> serde_json::Value {
    json!({
        "identifiant": format!("FEST_{}", i),
        "nom_du_festival": format!("Festival {}", i),
        "commune_principale_de_deroulement": city,
        "departement_principal_de_deroulement": "Loire-Atlantique",
        "discipline_dominante": "Musique",
        "periode_principale_de_deroulement_du_festival": "Avant-saison (1er janvier - 20 juin)"
    })
}

#[tokio::test]
async fn test_list_all_pages_until_short_page() -> Result<()> {
    let server = MockServer::start();
    let pages = [
        vec![festival(0, "Nantes"), festival(1, "Nantes")],
        vec![festival(2, "Clisson"), festival(3, "Nantes")],
        vec![festival(4, "Saint-Nazaire")],
    ];
    let mocks: Vec<_> = pages
        .iter()
        .enumerate()
        .map(|(i, page)| {
            server.mock(|when, then| {
                when.method(GET)
                    .path(RECORDS_PATH)
                    .query_param("limit", "2")
                    .query_param("offset", (i * 2).to_string().as_str())
                    .query_param("refine", "commune_principale_de_deroulement:\"Nantes\"");
                then.status(200).json_body(json!({ "results": page }));
            })
        })
        .collect();

    let request = ListRequest {
        filter: RefineFilter::new(None, Some("Nantes".to_string()), None),
        span: PageSpan::All,
    };
    let mut out = Vec::new();
    let total = commands::list(
        source_for(&server, 2)?,
        2,
        request,
        OutputFormat::Text,
        &mut out,
    )
    .await?;

    for mock in &mocks {
        mock.assert();
    }
    assert_eq!(total, 5);
    let text = String::from_utf8(out)?;
    assert!(text.contains("Festival 4\n  Musique\n  Avant-saison (1er janvier - 20 juin)\n  Saint-Nazaire"));
    assert!(text.trim_end().ends_with("Total: 5"));
    Ok(())
}

#[tokio::test]
async fn test_list_stops_after_requested_pages() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(RECORDS_PATH);
        then.status(200)
            .json_body(json!({ "results": [festival(0, "Nantes"), festival(1, "Rezé")] }));
    });

    let request = ListRequest {
        filter: RefineFilter::default(),
        span: PageSpan::Pages(3),
    };
    let mut out = Vec::new();
    let total = commands::list(source_for(&server, 2)?, 2, request, OutputFormat::Json, &mut out).await?;

    api_mock.assert_hits(3);
    assert_eq!(total, 6);
    let value: serde_json::Value = serde_json::from_slice(&out)?;
    assert_eq!(value.as_array().map(Vec::len), Some(6));
    Ok(())
}

#[tokio::test]
async fn test_list_failure_is_reported() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(RECORDS_PATH);
        then.status(500);
    });

    let request = ListRequest {
        filter: RefineFilter::default(),
        span: PageSpan::Pages(1),
    };
    let mut out = Vec::new();
    let result = commands::list(source_for(&server, 20)?, 20, request, OutputFormat::Text, &mut out).await;

    assert!(result.is_err());
    assert!(out.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_list_prints_loaded_pages_when_a_later_page_fails() -> Result<()> {
    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET).path(RECORDS_PATH).query_param("offset", "0");
        then.status(200)
            .json_body(json!({ "results": [festival(0, "Nantes"), festival(1, "Rezé")] }));
    });
    let second = server.mock(|when, then| {
        when.method(GET).path(RECORDS_PATH).query_param("offset", "2");
        then.status(500);
    });

    let request = ListRequest {
        filter: RefineFilter::default(),
        span: PageSpan::Pages(3),
    };
    let mut out = Vec::new();
    let result = commands::list(source_for(&server, 2)?, 2, request, OutputFormat::Text, &mut out).await;

    first.assert();
    second.assert();
    assert!(matches!(result, Err(FestError::HttpStatus { status: 500, .. })));
    let text = String::from_utf8(out)?;
    assert!(text.contains("Festival 0"));
    assert!(text.contains("Festival 1"));
    assert!(text.trim_end().ends_with("Total: 2"));
    Ok(())
}

#[tokio::test]
async fn test_filters_sample_several_pages() -> Result<()> {
    let server = MockServer::start();
    let first = server.mock(|when, then| {
        when.method(GET).path(RECORDS_PATH).query_param("offset", "0");
        then.status(200)
            .json_body(json!({ "results": [festival(0, "Nantes"), festival(1, "Nantes")] }));
    });
    let second = server.mock(|when, then| {
        when.method(GET).path(RECORDS_PATH).query_param("offset", "2");
        then.status(200)
            .json_body(json!({ "results": [festival(2, "Clisson"), festival(3, "Nantes")] }));
    });

    let mut out = Vec::new();
    commands::filters(
        source_for(&server, 2)?,
        2,
        Some(FilterKind::City),
        2,
        OutputFormat::Json,
        &mut out,
    )
    .await?;

    first.assert();
    second.assert();
    let cities: Vec<String> = serde_json::from_slice(&out)?;
    assert_eq!(cities, vec!["Nantes", "Clisson"]);
    Ok(())
}

#[tokio::test]
async fn test_show_prints_detail_card() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path(RECORDS_PATH)
            .query_param("where", "identifiant like \"%FEST_7%\"");
        then.status(200).json_body(json!({
            "results": [{
                "identifiant": "FEST_7",
                "nom_du_festival": "Les Nuits de Fourvière",
                "site_internet_du_festival": "https://www.nuitsdefourviere.com",
                "geocodage_xy": {"lon": 4.82, "lat": 45.76}
            }]
        }));
    });

    let source = source_for(&server, 20)?;
    let mut out = Vec::new();
    commands::show(&source, "FEST_7", OutputFormat::Text, &mut out).await?;
    let text = String::from_utf8(out)?;

    assert!(text.contains("Name:        Les Nuits de Fourvière"));
    assert!(text.contains("Website:     https://www.nuitsdefourviere.com"));
    assert!(text.contains("Region:      Festival region not provided"));
    assert!(text.contains("Geo URI:     geo:45.76,4.82?q=45.76,4.82"));
    Ok(())
}

#[test]
fn test_map_prints_embed_url() -> Result<()> {
    let mut out = Vec::new();
    commands::map(
        "https://data.culture.gouv.fr",
        "festivals-global-festivals-_-pl",
        &mut out,
    )?;

    assert_eq!(
        String::from_utf8(out)?.trim_end(),
        "https://data.culture.gouv.fr/explore/embed/dataset/festivals-global-festivals-_-pl/map/?location=2,17.99267,51.6211&static=false&datasetcard=false&scrollWheelZoom=false"
    );
    Ok(())
}
