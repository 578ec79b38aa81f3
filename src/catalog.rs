use crate::track::TabularRecord;

// ---------------------------------------------------------------------------
// Study – one row of an `entity_type=study` export
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Study {
    pub id: String,
    pub name: String,
    pub principal_investigator_name: String,
    pub license_type: String,
}

impl Study {
    pub fn from_record(record: &TabularRecord) -> Self {
        Self {
            id: record.get_or_empty("id").to_string(),
            name: record.get_or_empty("name").to_string(),
            principal_investigator_name: record
                .get_or_empty("principal_investigator_name")
                .to_string(),
            license_type: record.get_or_empty("license_type").to_string(),
        }
    }

    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("Study {}", self.id)
        } else {
            self.name.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// Individual – one tracked animal of a study
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    pub id: String,
    /// `local_identifier`, or `individual_local_identifier` when the former is empty.
    pub local_identifier: String,
    pub taxon_canonical_name: String,
    pub animal_sex: String,
}

impl Individual {
    pub fn from_record(record: &TabularRecord) -> Self {
        let local_identifier = [
            record.get("local_identifier"),
            record.get("individual_local_identifier"),
        ]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or("")
        .to_string();

        Self {
            id: record.get_or_empty("id").to_string(),
            local_identifier,
            taxon_canonical_name: record.get_or_empty("taxon_canonical_name").to_string(),
            animal_sex: record.get_or_empty("animal_sex").to_string(),
        }
    }

    pub fn display_name(&self) -> String {
        if self.local_identifier.is_empty() {
            format!("Animal {}", self.id)
        } else {
            self.local_identifier.clone()
        }
    }

    pub fn species(&self) -> &str {
        if self.taxon_canonical_name.is_empty() {
            "Unknown species"
        } else {
            &self.taxon_canonical_name
        }
    }
}

pub fn studies_from_records(records: &[TabularRecord]) -> Vec<Study> {
    records.iter().map(Study::from_record).collect()
}

pub fn individuals_from_records(records: &[TabularRecord]) -> Vec<Individual> {
    records.iter().map(Individual::from_record).collect()
}

/// Return indices of studies whose name or principal investigator contains
/// `query`, ignoring case. An empty query matches everything.
pub fn filter_studies(studies: &[Study], query: &str) -> Vec<usize> {
    let query = query.trim().to_lowercase();
    studies
        .iter()
        .enumerate()
        .filter(|(_, s)| {
            query.is_empty()
                || s.name.to_lowercase().contains(&query)
                || s.principal_investigator_name.to_lowercase().contains(&query)
        })
        .map(|(i, _)| i)
        .collect()
}
