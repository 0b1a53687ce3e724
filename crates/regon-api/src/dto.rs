//! Presentation DTOs for registry results.
//!
//! Plain data containers for callers that want a flatter, serializable view
//! of a business than the raw [`SearchReport`].

use crate::report::SearchReport;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street name
    pub street: Option<String>,
    /// Building number
    pub building_number: Option<String>,
    /// Apartment number
    pub apartment_number: Option<String>,
    /// City
    pub city: Option<String>,
    /// Postal code
    pub postal_code: Option<String>,
    /// Province (voivodeship)
    pub province: Option<String>,
    /// County (powiat)
    pub county: Option<String>,
    /// Municipality (gmina)
    pub municipality: Option<String>,
    /// ISO country code
    pub country: Option<String>,
}

impl Default for Address {
    fn default() -> Self {
        Self {
            street: None,
            building_number: None,
            apartment_number: None,
            city: None,
            postal_code: None,
            province: None,
            county: None,
            municipality: None,
            country: Some("PL".to_string()),
        }
    }
}

impl Address {
    /// Single-line address, e.g. `Marszałkowska 142, /5, 00-950 Warszawa`.
    ///
    /// Missing parts are skipped.
    #[must_use]
    pub fn full_address(&self) -> String {
        let street = non_empty(self.street.as_deref());
        let number = non_empty(self.building_number.as_deref());
        let street_line = match (street, number) {
            (Some(street), Some(number)) => Some(format!("{street} {number}")),
            (Some(street), None) => Some(street.to_string()),
            (None, number) => number.map(str::to_string),
        };

        let apartment = non_empty(self.apartment_number.as_deref()).map(|apt| format!("/{apt}"));

        let postal_code = non_empty(self.postal_code.as_deref());
        let city = non_empty(self.city.as_deref());
        let city_line = match (postal_code, city) {
            (Some(code), Some(city)) => Some(format!("{code} {city}")),
            (_, city) => city.map(str::to_string),
        };

        [street_line, apartment, city_line]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A PKD (Polish classification of activities) code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PkdCode {
    /// Code, e.g. `62.01.Z`
    pub code: String,
    /// Human-readable name
    pub name: String,
    /// Whether this is the entity's primary activity
    pub is_primary: bool,
}

impl PkdCode {
    /// Create a PKD code.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>, is_primary: bool) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            is_primary,
        }
    }
}

/// Business data assembled from registry results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessData {
    /// REGON
    pub regon: String,
    /// NIP
    pub nip: Option<String>,
    /// Registered name
    pub name: Option<String>,
    /// Short name
    pub short_name: Option<String>,
    /// Legal form
    pub legal_form: Option<String>,
    /// Activity status
    pub status: Option<String>,
    /// Registered office address
    pub registered_address: Option<Address>,
    /// Place of business, if different
    pub business_address: Option<Address>,
    /// PKD codes
    pub pkd_codes: Vec<PkdCode>,
    /// Size class
    pub company_size: Option<String>,
    /// Number of employees
    pub employee_count: Option<u32>,
    /// Registration date
    pub registration_date: Option<NaiveDate>,
    /// Start of activity
    pub start_date: Option<NaiveDate>,
    /// Last update in the registry
    pub last_update_date: Option<NaiveDate>,
    /// Contact e-mail
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Website
    pub website: Option<String>,
    /// Unprocessed full-report fields
    #[serde(skip)]
    pub raw_data: Option<HashMap<String, String>>,
}

impl BusinessData {
    /// Create business data with only a REGON set.
    #[must_use]
    pub fn new(regon: impl Into<String>) -> Self {
        Self {
            regon: regon.into(),
            ..Self::default()
        }
    }

    /// Build from a search report. Returns `None` for records without a REGON,
    /// which includes the empty placeholder.
    #[must_use]
    pub fn from_search_report(report: &SearchReport) -> Option<Self> {
        let regon = report.regon.clone().filter(|r| !r.is_empty())?;

        let address = Address {
            street: report.street.clone(),
            building_number: report.property_number.clone(),
            apartment_number: report.apartment_number.clone(),
            city: report.city.clone(),
            postal_code: report.zip_code.clone(),
            province: report.province.clone(),
            county: report.district.clone(),
            municipality: report.community.clone(),
            ..Address::default()
        };

        Some(Self {
            regon,
            nip: report.nip.clone(),
            name: report.name.clone(),
            registered_address: Some(address),
            ..Self::default()
        })
    }

    /// The primary PKD code, or the first one when none is marked primary.
    #[must_use]
    pub fn primary_pkd_code(&self) -> Option<&PkdCode> {
        self.pkd_codes
            .iter()
            .find(|pkd| pkd.is_primary)
            .or_else(|| self.pkd_codes.first())
    }

    /// Whether the registry status says the business is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.status.as_deref(), Some("active" | "Aktywny"))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marszalkowska() -> Address {
        Address {
            street: Some("Marszałkowska".to_string()),
            building_number: Some("142".to_string()),
            city: Some("Warszawa".to_string()),
            postal_code: Some("00-950".to_string()),
            ..Address::default()
        }
    }

    #[test]
    fn test_address_defaults_to_poland() {
        assert_eq!(Address::default().country.as_deref(), Some("PL"));
    }

    #[test]
    fn test_full_address() {
        let mut address = marszalkowska();
        address.apartment_number = Some("5".to_string());
        assert_eq!(
            address.full_address(),
            "Marszałkowska 142, /5, 00-950 Warszawa"
        );
    }

    #[test]
    fn test_full_address_without_apartment() {
        assert_eq!(
            marszalkowska().full_address(),
            "Marszałkowska 142, 00-950 Warszawa"
        );
    }

    #[test]
    fn test_full_address_partial() {
        let address = Address {
            building_number: Some("7".to_string()),
            city: Some("Kraków".to_string()),
            ..Address::default()
        };
        assert_eq!(address.full_address(), "7, Kraków");
        assert_eq!(Address::default().full_address(), "");
    }

    #[test]
    fn test_address_serialization() {
        let json = serde_json::to_value(marszalkowska()).expect("serialize address");
        assert_eq!(json["street"], "Marszałkowska");
        assert_eq!(json["buildingNumber"], "142");
        assert_eq!(json["postalCode"], "00-950");
        assert_eq!(json["country"], "PL");
    }

    #[test]
    fn test_business_data_minimal() {
        let business = BusinessData::new("123456785");
        assert_eq!(business.regon, "123456785");
        assert!(business.nip.is_none());
        assert!(business.name.is_none());
        assert!(business.primary_pkd_code().is_none());
    }

    #[test]
    fn test_primary_pkd_code() {
        let primary = PkdCode::new("62.01.Z", "Primary activity", true);
        let secondary = PkdCode::new("62.02.Z", "Secondary activity", false);
        let business = BusinessData {
            pkd_codes: vec![secondary, primary.clone()],
            ..BusinessData::new("123456785")
        };
        assert_eq!(business.primary_pkd_code(), Some(&primary));
    }

    #[test]
    fn test_primary_pkd_code_falls_back_to_first() {
        let first = PkdCode::new("62.01.Z", "Activity 1", false);
        let business = BusinessData {
            pkd_codes: vec![first.clone(), PkdCode::new("62.02.Z", "Activity 2", false)],
            ..BusinessData::new("123456785")
        };
        assert_eq!(business.primary_pkd_code(), Some(&first));
    }

    #[test]
    fn test_is_active() {
        let mut business = BusinessData::new("123456785");
        assert!(!business.is_active());

        business.status = Some("active".to_string());
        assert!(business.is_active());

        business.status = Some("Aktywny".to_string());
        assert!(business.is_active());

        business.status = Some("inactive".to_string());
        assert!(!business.is_active());
    }

    #[test]
    fn test_business_data_serialization() {
        let business = BusinessData {
            nip: Some("5260250274".to_string()),
            name: Some("Example Company".to_string()),
            registration_date: NaiveDate::from_ymd_opt(2001, 5, 17),
            raw_data: Some(HashMap::from([("k".to_string(), "v".to_string())])),
            ..BusinessData::new("123456785")
        };

        let json = serde_json::to_value(&business).expect("serialize business data");
        assert_eq!(json["regon"], "123456785");
        assert_eq!(json["nip"], "5260250274");
        assert_eq!(json["registrationDate"], "2001-05-17");
        assert!(json.get("rawData").is_none());
    }

    #[test]
    fn test_from_search_report() {
        let report = SearchReport {
            regon: Some("000331501".to_string()),
            nip: Some("5261040828".to_string()),
            name: Some("GUS".to_string()),
            street: Some("al. Niepodległości".to_string()),
            property_number: Some("208".to_string()),
            zip_code: Some("00-925".to_string()),
            city: Some("Warszawa".to_string()),
            ..SearchReport::default()
        };

        let business = BusinessData::from_search_report(&report).expect("has REGON");
        assert_eq!(business.regon, "000331501");
        assert_eq!(business.name.as_deref(), Some("GUS"));
        let address = business.registered_address.expect("address");
        assert_eq!(
            address.full_address(),
            "al. Niepodległości 208, 00-925 Warszawa"
        );

        assert!(BusinessData::from_search_report(&SearchReport::empty()).is_none());
    }
}
