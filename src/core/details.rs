use crate::domain::model::Festival;
use crate::domain::ports::FestivalSource;
use crate::domain::query::where_identifier;
use crate::utils::error::{FestError, Result};
use serde::Serialize;

const LOOKUP_LIMIT: usize = 20;
pub const MARKER_ZOOM: f64 = 15.0;
pub const NAME_PLACEHOLDER: &str = "Festival name not provided";

/// Looks a festival up by identifier. The `like` clause can match several
/// records, so only an exact identifier match counts.
pub async fn fetch_festival<S: FestivalSource + ?Sized>(source: &S, id: &str) -> Result<Festival> {
    let clause = where_identifier(id);
    tracing::debug!("Looking up festival with where clause: {}", clause);

    let response = source.find_where(&clause, LOOKUP_LIMIT).await.map_err(|e| {
        tracing::error!("Failed to fetch details for festival {}: {}", id, e);
        e
    })?;

    response
        .results
        .into_iter()
        .find(|festival| festival.identifiant.as_deref() == Some(id))
        .ok_or_else(|| {
            tracing::error!("No festival found for identifier {}", id);
            FestError::NotFound { id: id.to_string() }
        })
}

fn or_placeholder(value: &Option<String>, placeholder: &str) -> String {
    value.clone().unwrap_or_else(|| placeholder.to_string())
}

/// Display strings for the detail card, with a placeholder per missing field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub identifier: String,
    pub name: String,
    pub discipline: String,
    pub address: String,
    pub postal_code: String,
    pub commune: String,
    pub department: String,
    pub region: String,
    pub website: String,
    pub email: String,
    pub period: String,
}

impl From<&Festival> for DetailView {
    fn from(festival: &Festival) -> Self {
        let website = match festival.site_internet_du_festival.as_deref() {
            Some(site) if !site.trim().is_empty() => site.to_string(),
            _ => "Festival website not provided".to_string(),
        };

        Self {
            identifier: or_placeholder(&festival.identifiant, "Festival identifier not provided"),
            name: or_placeholder(&festival.nom_du_festival, NAME_PLACEHOLDER),
            discipline: or_placeholder(
                &festival.discipline_dominante,
                "Festival discipline not provided",
            ),
            address: or_placeholder(&festival.adresse_postale, "Festival address not provided"),
            postal_code: or_placeholder(
                &festival.code_postal_de_la_commune_principale_de_deroulement,
                "Festival postal code not provided",
            ),
            commune: or_placeholder(
                &festival.commune_principale_de_deroulement,
                "Festival commune not provided",
            ),
            department: or_placeholder(
                &festival.departement_principal_de_deroulement,
                "Festival department not provided",
            ),
            region: or_placeholder(
                &festival.region_principale_de_deroulement,
                "Festival region not provided",
            ),
            website,
            email: or_placeholder(&festival.adresse_e_mail, "Festival contact not provided"),
            period: or_placeholder(
                &festival.periode_principale_de_deroulement_du_festival,
                "Festival period not provided",
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub title: String,
}

impl From<&Festival> for MapMarker {
    fn from(festival: &Festival) -> Self {
        // Records without coordinates land on (0, 0).
        let (latitude, longitude) = festival
            .geocodage_xy
            .map(|point| (point.lat, point.lon))
            .unwrap_or((0.0, 0.0));

        Self {
            latitude,
            longitude,
            zoom: MARKER_ZOOM,
            title: or_placeholder(&festival.nom_du_festival, NAME_PLACEHOLDER),
        }
    }
}

// Coordinates use `{:?}` so whole degrees keep their decimal point (`0.0`, not `0`).
impl MapMarker {
    pub fn geo_uri(&self) -> String {
        format!(
            "geo:{lat:?},{lon:?}?q={lat:?},{lon:?}",
            lat = self.latitude,
            lon = self.longitude
        )
    }

    /// Web fallback for clients without a `geo:` handler.
    pub fn browser_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={lat:?}&mlon={lon:?}#map={zoom}/{lat:?}/{lon:?}",
            lat = self.latitude,
            lon = self.longitude,
            zoom = self.zoom as u32
        )
    }
}
