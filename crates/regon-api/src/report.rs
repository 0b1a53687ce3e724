//! Records returned by registry searches.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of a full report: field name to value.
pub type ReportRow = HashMap<String, String>;

/// All rows of a full report.
pub type FullReport = Vec<ReportRow>;

/// Names of the full reports the registry publishes.
///
/// The remote validates report names itself; these are the common ones.
pub mod report_names {
    /// Legal person, general data
    pub const LEGAL_PERSON: &str = "BIR11OsPrawna";
    /// Legal person, activity codes
    pub const LEGAL_PERSON_PKD: &str = "BIR11OsPrawnaPkd";
    /// Legal person, local units
    pub const LEGAL_PERSON_LOCAL_UNITS: &str = "BIR11OsPrawnaListaJednLokalnych";
    /// Natural person, general data
    pub const NATURAL_PERSON: &str = "BIR11OsFizycznaDaneOgolne";
    /// Natural person, CEIDG-registered activity
    pub const NATURAL_PERSON_CEIDG: &str = "BIR11OsFizycznaDzialalnoscCeidg";
    /// Natural person, activity codes
    pub const NATURAL_PERSON_PKD: &str = "BIR11OsFizycznaPkd";
    /// Local unit of a legal person
    pub const LOCAL_UNIT_LEGAL: &str = "BIR11JednLokalnaOsPrawnej";
    /// Local unit of a natural person
    pub const LOCAL_UNIT_NATURAL: &str = "BIR11JednLokalnaOsFizycznej";
}

/// Kind of entity a search report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    /// Legal person (company, foundation, association)
    #[serde(rename = "P")]
    LegalPerson,
    /// Natural person running a business
    #[serde(rename = "F")]
    NaturalPerson,
    /// Local unit of a legal person
    #[serde(rename = "LP")]
    LegalPersonLocalUnit,
    /// Local unit of a natural person
    #[serde(rename = "LF")]
    NaturalPersonLocalUnit,
}

impl EntityType {
    /// The general-data full report for this entity type.
    #[must_use]
    pub fn default_report_name(self) -> &'static str {
        match self {
            Self::LegalPerson => report_names::LEGAL_PERSON,
            Self::NaturalPerson => report_names::NATURAL_PERSON,
            Self::LegalPersonLocalUnit => report_names::LOCAL_UNIT_LEGAL,
            Self::NaturalPersonLocalUnit => report_names::LOCAL_UNIT_NATURAL,
        }
    }
}

/// One entity record returned by a registry search.
///
/// All fields are optional; [`SearchReport::empty`] is the placeholder
/// used when a single-result lookup finds nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchReport {
    /// REGON (9 digits for entities, 14 for local units)
    pub regon: Option<String>,
    /// NIP
    pub nip: Option<String>,
    /// NIP status as reported by the registry
    pub nip_status: Option<String>,
    /// Registered name
    pub name: Option<String>,
    /// Province (voivodeship)
    pub province: Option<String>,
    /// District (powiat)
    pub district: Option<String>,
    /// Community (gmina)
    pub community: Option<String>,
    /// City
    pub city: Option<String>,
    /// Postal code
    pub zip_code: Option<String>,
    /// Street
    pub street: Option<String>,
    /// Building number
    pub property_number: Option<String>,
    /// Apartment number
    pub apartment_number: Option<String>,
    /// Entity type
    #[serde(rename = "type")]
    pub entity_type: Option<EntityType>,
    /// Registry silo the record comes from
    pub silo_id: Option<String>,
    /// End date of activity, if the entity ceased operating
    pub activity_end_date: Option<String>,
    /// Post office city
    pub post_city: Option<String>,
}

impl SearchReport {
    /// The "not found" placeholder: a report with every field unset.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this is a placeholder with no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the registry reports an end of activity.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.activity_end_date
            .as_deref()
            .is_some_and(|date| !date.trim().is_empty())
    }

    /// The general-data full report name for this record, if its type is known.
    #[must_use]
    pub fn default_report_name(&self) -> Option<&'static str> {
        self.entity_type.map(EntityType::default_report_name)
    }
}
