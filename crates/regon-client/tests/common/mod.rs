//! Shared fakes for the client integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use regon_api::{ApiFault, FullReport, RegistryApi, ReportRow, SearchReport};
use std::collections::HashMap;
use std::sync::Mutex;

/// Remote client with scripted responses that records every call.
#[derive(Default)]
pub struct ScriptedApi {
    calls: Mutex<Vec<String>>,
    token: Mutex<Option<String>>,
    login_fault: Mutex<Option<ApiFault>>,
    searches: Mutex<HashMap<String, regon_api::Result<Vec<SearchReport>>>>,
    full_report: Mutex<Option<regon_api::Result<FullReport>>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the result of `search_by_<kind>` (`"regon"`, `"nip"`, `"krs"`).
    pub fn with_search(self, kind: &str, result: regon_api::Result<Vec<SearchReport>>) -> Self {
        self.searches
            .lock()
            .expect("searches lock")
            .insert(kind.to_string(), result);
        self
    }

    pub fn with_login_fault(self, fault: ApiFault) -> Self {
        *self.login_fault.lock().expect("login lock") = Some(fault);
        self
    }

    pub fn with_full_report(self, result: regon_api::Result<FullReport>) -> Self {
        *self.full_report.lock().expect("report lock") = Some(result);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }

    fn search(&self, kind: &str, value: &str) -> regon_api::Result<Vec<SearchReport>> {
        self.record(format!("search_by_{kind}:{value}"));
        self.searches
            .lock()
            .expect("searches lock")
            .get(kind)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[async_trait]
impl RegistryApi for ScriptedApi {
    async fn login(&self) -> regon_api::Result<()> {
        self.record("login".to_string());
        if let Some(fault) = self.login_fault.lock().expect("login lock").clone() {
            return Err(fault);
        }
        *self.token.lock().expect("token lock") = Some("sid-0001".to_string());
        Ok(())
    }

    async fn logout(&self) -> regon_api::Result<()> {
        self.record("logout".to_string());
        *self.token.lock().expect("token lock") = None;
        Ok(())
    }

    fn set_session_token(&self, token: &str) {
        self.record("set_session_token".to_string());
        *self.token.lock().expect("token lock") = Some(token.to_string());
    }

    fn session_token(&self) -> Option<String> {
        self.token.lock().expect("token lock").clone()
    }

    async fn search_by_regon(&self, regon: &str) -> regon_api::Result<Vec<SearchReport>> {
        self.search("regon", regon)
    }

    async fn search_by_nip(&self, nip: &str) -> regon_api::Result<Vec<SearchReport>> {
        self.search("nip", nip)
    }

    async fn search_by_krs(&self, krs: &str) -> regon_api::Result<Vec<SearchReport>> {
        self.search("krs", krs)
    }

    async fn full_report(
        &self,
        report: &SearchReport,
        report_name: &str,
    ) -> regon_api::Result<FullReport> {
        self.record(format!(
            "full_report:{}:{report_name}",
            report.regon.as_deref().unwrap_or_default()
        ));
        self.full_report
            .lock()
            .expect("report lock")
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// A minimal legal-person record.
pub fn company(regon: &str, nip: &str, name: &str) -> SearchReport {
    SearchReport {
        regon: Some(regon.to_string()),
        nip: Some(nip.to_string()),
        name: Some(name.to_string()),
        city: Some("Warszawa".to_string()),
        ..SearchReport::default()
    }
}

/// One full-report row.
pub fn row(pairs: &[(&str, &str)]) -> ReportRow {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}
