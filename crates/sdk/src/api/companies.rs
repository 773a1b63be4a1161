//! Company endpoints.

use super::Envelope;
use crate::client::TuesdayClient;
use crate::error::TuesdayResult;
use serde_json::Value;
use tuesday_core::schema::args::{
    CompanyProfileLookup, CompanySearch, EmployeeCountLookup, EmployeeSearch,
};
use tuesday_core::JsonObject;

/// Companies API for searching organizations and their staff.
pub struct CompaniesApi<'a> {
    client: &'a TuesdayClient,
}

impl<'a> CompaniesApi<'a> {
    pub(crate) fn new(client: &'a TuesdayClient) -> Self {
        Self { client }
    }

    /// Search companies by organization filters.
    pub async fn search(&self, search: &CompanySearch) -> TuesdayResult<Envelope<Vec<Value>>> {
        self.client.http.post("/company/search", search).await
    }

    /// Get a company profile by LinkedIn URL or domain.
    pub async fn profile(
        &self,
        lookup: &CompanyProfileLookup,
    ) -> TuesdayResult<Envelope<JsonObject>> {
        self.client.http.get_with_query("/company/profile", lookup).await
    }

    /// Get the employee count of a company.
    pub async fn employee_count(
        &self,
        lookup: &EmployeeCountLookup,
    ) -> TuesdayResult<Envelope<JsonObject>> {
        self.client
            .http
            .get_with_query("/company/employees/count", lookup)
            .await
    }

    /// Search the employees of one company.
    pub async fn search_employees(
        &self,
        search: &EmployeeSearch,
    ) -> TuesdayResult<Envelope<Vec<Value>>> {
        self.client
            .http
            .post("/company/employees/search", search)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TuesdayError;
    use serde_json::json;
    use tuesday_core::schema::validate;
    use tuesday_core::{ToolArgs, ToolName};
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TuesdayClient {
        TuesdayClient::builder()
            .base_url(server.uri().parse().unwrap())
            .api_key("tk_test")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_profile_by_domain() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/company/profile"))
            .and(query_param("domain", "acme.com"))
            .and(query_param("include_funding", "include"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"name": "Acme"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let args = json!({"domain": "acme.com", "include_funding": "include"});
        let Ok(ToolArgs::GetCompanyProfile(lookup)) = validate(ToolName::GetCompanyProfile, &args)
        else {
            panic!("expected company profile args");
        };

        let envelope = client_for(&server).companies().profile(&lookup).await.unwrap();
        assert_eq!(envelope.data["name"], "Acme");
    }

    #[tokio::test]
    async fn test_employee_count_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/company/employees/count"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"message": "company not found"})),
            )
            .mount(&server)
            .await;

        let args = json!({"domain": "nowhere.invalid"});
        let Ok(ToolArgs::GetEmployeeCount(lookup)) = validate(ToolName::GetEmployeeCount, &args)
        else {
            panic!("expected employee count args");
        };

        let err = client_for(&server)
            .companies()
            .employee_count(&lookup)
            .await
            .unwrap_err();
        assert!(matches!(err, TuesdayError::Api { status: 404, .. }));
        assert_eq!(err.to_string(), "API request failed: 404 - company not found");
    }

    #[tokio::test]
    async fn test_search_employees_posts_identity() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/company/employees/search"))
            .and(body_partial_json(json!({
                "company_domain": "acme.com",
                "page": 3,
                "per_page": 50
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&server)
            .await;

        let args = json!({"company_domain": "acme.com", "page": 3, "per_page": 50});
        let Ok(ToolArgs::SearchEmployees(search)) = validate(ToolName::SearchEmployees, &args)
        else {
            panic!("expected employee search args");
        };

        let envelope = client_for(&server)
            .companies()
            .search_employees(&search)
            .await
            .unwrap();
        assert!(envelope.data.is_empty());
    }

    #[tokio::test]
    async fn test_company_search() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/company/search"))
            .and(body_partial_json(json!({"organization_industry": ["software"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"name": "Acme"}]
            })))
            .mount(&server)
            .await;

        let args = json!({"organization_industry": ["software"]});
        let Ok(ToolArgs::SearchCompanies(search)) = validate(ToolName::SearchCompanies, &args)
        else {
            panic!("expected company search args");
        };

        let envelope = client_for(&server).companies().search(&search).await.unwrap();
        assert_eq!(envelope.data.len(), 1);
    }
}
