use serde::{Deserialize, Deserializer, Serialize};

/// Dataset coordinates, published as `geocodage_xy`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

/// One row of the festivals dataset. Field names follow the dataset columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Festival {
    #[serde(deserialize_with = "lenient_string")]
    pub nom_du_festival: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub envergure_territoriale: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub region_principale_de_deroulement: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub departement_principal_de_deroulement: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub commune_principale_de_deroulement: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub code_postal_de_la_commune_principale_de_deroulement: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub code_insee_commune: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub code_insee_epci_collage_en_valeur: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub libelle_epci_collage_en_valeur: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub numero_de_voie: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub type_de_voie_rue_avenue_boulevard_etc: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub nom_de_la_voie: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub adresse_postale: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub complement_d_adresse_facultatif: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub site_internet_du_festival: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub adresse_e_mail: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub decennie_de_creation_du_festival: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub annee_de_creation_du_festival: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub discipline_dominante: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub sous_categorie_spectacle_vivant: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub sous_categorie_musique: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub sous_categorie_musique_cnm: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub sous_categorie_cinema_et_audiovisuel: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub sous_categorie_arts_visuels_et_arts_numeriques: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub sous_categorie_livre_et_litterature: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub periode_principale_de_deroulement_du_festival: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub identifiant_agence_a: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub identifiant: Option<String>,
    pub geocodage_xy: Option<GeoPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FestivalResponse {
    pub total_count: Option<u64>,
    pub results: Vec<Festival>,
}

// Years, postal codes and street numbers are sometimes published as numbers.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}
