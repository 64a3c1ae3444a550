use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields the dataset can be refined on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Departement,
    City,
    Discipline,
}

impl FilterKind {
    pub const ALL: [FilterKind; 3] = [
        FilterKind::Departement,
        FilterKind::City,
        FilterKind::Discipline,
    ];

    pub fn field_name(self) -> &'static str {
        match self {
            FilterKind::Departement => "departement_principal_de_deroulement",
            FilterKind::City => "commune_principale_de_deroulement",
            FilterKind::Discipline => "discipline_dominante",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterKind::Departement => "departement",
            FilterKind::City => "city",
            FilterKind::Discipline => "discipline",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefineFilter {
    pub departement: Option<String>,
    pub city: Option<String>,
    pub discipline: Option<String>,
}

impl RefineFilter {
    pub fn new(
        departement: Option<String>,
        city: Option<String>,
        discipline: Option<String>,
    ) -> Self {
        Self {
            departement,
            city,
            discipline,
        }
    }

    pub fn get(&self, kind: FilterKind) -> Option<&str> {
        match kind {
            FilterKind::Departement => self.departement.as_deref(),
            FilterKind::City => self.city.as_deref(),
            FilterKind::Discipline => self.discipline.as_deref(),
        }
    }

    fn slot(&mut self, kind: FilterKind) -> &mut Option<String> {
        match kind {
            FilterKind::Departement => &mut self.departement,
            FilterKind::City => &mut self.city,
            FilterKind::Discipline => &mut self.discipline,
        }
    }

    /// Replaces the whole filter with a single field selection.
    pub fn select(&mut self, kind: FilterKind, value: impl Into<String>) {
        self.clear();
        *self.slot(kind) = Some(value.into());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.refine_expression().is_none()
    }

    /// `field:"value"` terms joined with ` AND `, always in departement,
    /// city, discipline order. Empty values are skipped.
    pub fn refine_expression(&self) -> Option<String> {
        let terms: Vec<String> = FilterKind::ALL
            .iter()
            .filter_map(|&kind| {
                self.get(kind)
                    .filter(|value| !value.is_empty())
                    .map(|value| format!("{}:\"{}\"", kind.field_name(), value))
            })
            .collect();

        if terms.is_empty() {
            None
        } else {
            Some(terms.join(" AND "))
        }
    }
}

/// One window of the records endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub limit: usize,
    pub offset: usize,
    pub refine: Option<String>,
}

impl PageQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some(refine) = &self.refine {
            pairs.push(("refine", refine.clone()));
        }
        pairs
    }
}

pub fn where_identifier(id: &str) -> String {
    format!("identifiant like \"%{}%\"", id)
}
