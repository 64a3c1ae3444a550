use crate::config::OutputFormat;
use crate::core::details::{DetailView, MapMarker};
use crate::core::options::FilterOptions;
use crate::domain::model::Festival;
use crate::domain::query::FilterKind;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

const CSV_HEADER: [&str; 8] = [
    "identifiant",
    "nom_du_festival",
    "discipline_dominante",
    "periode_principale_de_deroulement_du_festival",
    "commune_principale_de_deroulement",
    "departement_principal_de_deroulement",
    "region_principale_de_deroulement",
    "site_internet_du_festival",
];

/// Card layout of the list: name, discipline, period, commune, department.
pub fn festival_card(festival: &Festival) -> String {
    let mut lines = vec![festival
        .nom_du_festival
        .clone()
        .unwrap_or_else(|| crate::core::details::NAME_PLACEHOLDER.to_string())];

    for value in [
        &festival.discipline_dominante,
        &festival.periode_principale_de_deroulement_du_festival,
        &festival.commune_principale_de_deroulement,
        &festival.departement_principal_de_deroulement,
    ] {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            lines.push(format!("  {}", value));
        }
    }

    if let Some(id) = &festival.identifiant {
        lines.push(format!("  Details: gofest show {}", id));
    }
    lines.join("\n")
}

pub fn write_list<W: Write>(out: &mut W, festivals: &[Festival], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for festival in festivals {
                writeln!(out, "{}\n", festival_card(festival))?;
            }
            writeln!(out, "Total: {}", festivals.len())?;
        }
        OutputFormat::Json => write_json(out, festivals)?,
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(CSV_HEADER)?;
            for festival in festivals {
                writer.write_record([
                    festival.identifiant.as_deref().unwrap_or_default(),
                    festival.nom_du_festival.as_deref().unwrap_or_default(),
                    festival.discipline_dominante.as_deref().unwrap_or_default(),
                    festival
                        .periode_principale_de_deroulement_du_festival
                        .as_deref()
                        .unwrap_or_default(),
                    festival
                        .commune_principale_de_deroulement
                        .as_deref()
                        .unwrap_or_default(),
                    festival
                        .departement_principal_de_deroulement
                        .as_deref()
                        .unwrap_or_default(),
                    festival
                        .region_principale_de_deroulement
                        .as_deref()
                        .unwrap_or_default(),
                    festival
                        .site_internet_du_festival
                        .as_deref()
                        .unwrap_or_default(),
                ])?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct DetailOutput<'a> {
    #[serde(flatten)]
    view: &'a DetailView,
    marker: &'a MapMarker,
    geo_uri: String,
    browser_url: String,
}

pub fn write_details<W: Write>(
    out: &mut W,
    view: &DetailView,
    marker: &MapMarker,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(
            out,
            &DetailOutput {
                view,
                marker,
                geo_uri: marker.geo_uri(),
                browser_url: marker.browser_url(),
            },
        )?,
        OutputFormat::Text | OutputFormat::Csv => {
            let rows = [
                ("Identifier", &view.identifier),
                ("Name", &view.name),
                ("Discipline", &view.discipline),
                ("Address", &view.address),
                ("Postal code", &view.postal_code),
                ("Commune", &view.commune),
                ("Department", &view.department),
                ("Region", &view.region),
                ("Website", &view.website),
                ("E-mail", &view.email),
                ("Period", &view.period),
            ];
            for (label, value) in rows {
                writeln!(out, "{:<12} {}", format!("{}:", label), value)?;
            }
            writeln!(
                out,
                "{:<12} {}, {} (zoom {})",
                "Location:", marker.latitude, marker.longitude, marker.zoom
            )?;
            writeln!(out, "{:<12} {}", "Geo URI:", marker.geo_uri())?;
            writeln!(out, "{:<12} {}", "Map:", marker.browser_url())?;
        }
    }
    Ok(())
}

pub fn write_options<W: Write>(
    out: &mut W,
    options: &FilterOptions,
    kind: Option<FilterKind>,
    format: OutputFormat,
) -> Result<()> {
    let kinds: Vec<FilterKind> = match kind {
        Some(kind) => vec![kind],
        None => FilterKind::ALL.to_vec(),
    };

    match format {
        OutputFormat::Json => match kind {
            Some(kind) => write_json(out, &options.get(kind))?,
            None => write_json(out, options)?,
        },
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["kind", "value"])?;
            for kind in kinds {
                for value in options.get(kind) {
                    writer.write_record([kind.label(), value.as_str()])?;
                }
            }
            writer.flush()?;
        }
        OutputFormat::Text => {
            for kind in kinds {
                writeln!(out, "{} ({}):", kind, options.get(kind).len())?;
                for value in options.get(kind) {
                    writeln!(out, "  {}", value)?;
                }
            }
        }
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::GeoPoint;

    fn sample() -> Festival {
        Festival {
            identifiant: Some("FEST_44109_3".to_string()),
            nom_du_festival: Some("Les Rendez-vous de l'Erdre".to_string()),
            discipline_dominante: Some("Musique".to_string()),
            periode_principale_de_deroulement_du_festival: Some(
                "Saison (21 juin - 5 septembre)".to_string(),
            ),
            commune_principale_de_deroulement: Some("Nantes".to_string()),
            departement_principal_de_deroulement: Some("Loire-Atlantique".to_string()),
            geocodage_xy: Some(GeoPoint {
                lon: -1.55,
                lat: 47.22,
            }),
            ..Festival::default()
        }
    }

    #[test]
    fn text_list_ends_with_total() {
        let mut out = Vec::new();
        write_list(&mut out, &[sample(), Festival::default()], OutputFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Les Rendez-vous de l'Erdre\n  Musique\n"));
        assert!(text.contains("gofest show FEST_44109_3"));
        assert!(text.trim_end().ends_with("Total: 2"));
    }

    #[test]
    fn csv_list_has_header_and_rows() {
        let mut out = Vec::new();
        write_list(&mut out, &[sample()], OutputFormat::Csv).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("identifiant,nom_du_festival"));
        assert!(lines[1].starts_with("FEST_44109_3,Les Rendez-vous de l'Erdre,Musique"));
    }

    #[test]
    fn json_details_include_marker_links() {
        let festival = sample();
        let mut out = Vec::new();
        write_details(
            &mut out,
            &DetailView::from(&festival),
            &MapMarker::from(&festival),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["name"], "Les Rendez-vous de l'Erdre");
        assert_eq!(value["marker"]["zoom"], 15.0);
        assert_eq!(value["geo_uri"], "geo:47.22,-1.55?q=47.22,-1.55");
    }

    #[test]
    fn text_options_for_one_kind() {
        let options = FilterOptions::from_festivals(&[sample()]);
        let mut out = Vec::new();
        write_options(&mut out, &options, Some(FilterKind::City), OutputFormat::Text).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "city (1):\n  Nantes\n");
    }
}
