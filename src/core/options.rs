use crate::domain::model::Festival;
use crate::domain::query::FilterKind;
use serde::Serialize;
use std::collections::HashSet;

/// First occurrence of each non-empty value, in encounter order.
pub fn distinct_values<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        let value = value.as_ref();
        if !value.is_empty() && seen.insert(value.to_string()) {
            out.push(value.to_string());
        }
    }
    out
}

fn field(festival: &Festival, kind: FilterKind) -> Option<&str> {
    match kind {
        FilterKind::Departement => festival.departement_principal_de_deroulement.as_deref(),
        FilterKind::City => festival.commune_principale_de_deroulement.as_deref(),
        FilterKind::Discipline => festival.discipline_dominante.as_deref(),
    }
}

/// Values offered for each refine field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub departements: Vec<String>,
    pub cities: Vec<String>,
    pub disciplines: Vec<String>,
}

impl FilterOptions {
    pub fn from_festivals(festivals: &[Festival]) -> Self {
        let mut options = Self::default();
        options.merge(festivals);
        options
    }

    pub fn merge(&mut self, festivals: &[Festival]) {
        for kind in FilterKind::ALL {
            let list = self.list_mut(kind);
            let merged = distinct_values(
                list.iter()
                    .map(String::as_str)
                    .chain(festivals.iter().filter_map(|f| field(f, kind))),
            );
            *list = merged;
        }
    }

    pub fn get(&self, kind: FilterKind) -> &[String] {
        match kind {
            FilterKind::Departement => &self.departements,
            FilterKind::City => &self.cities,
            FilterKind::Discipline => &self.disciplines,
        }
    }

    fn list_mut(&mut self, kind: FilterKind) -> &mut Vec<String> {
        match kind {
            FilterKind::Departement => &mut self.departements,
            FilterKind::City => &mut self.cities,
            FilterKind::Discipline => &mut self.disciplines,
        }
    }
}
