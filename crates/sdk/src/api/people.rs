//! People endpoints.

use super::Envelope;
use crate::client::TuesdayClient;
use crate::error::TuesdayResult;
use serde_json::Value;
use tuesday_core::schema::args::{
    EmailLookup, PeopleSearch, PersonLookup, PersonProfileLookup, PhoneLookup,
};
use tuesday_core::JsonObject;

/// People API for searching and looking up individuals.
pub struct PeopleApi<'a> {
    client: &'a TuesdayClient,
}

impl<'a> PeopleApi<'a> {
    pub(crate) fn new(client: &'a TuesdayClient) -> Self {
        Self { client }
    }

    /// Search people by person and organization filters.
    pub async fn search(&self, search: &PeopleSearch) -> TuesdayResult<Envelope<Vec<Value>>> {
        self.client.http.post("/people/search", search).await
    }

    /// Look up a person by name at a company domain.
    pub async fn lookup(&self, lookup: &PersonLookup) -> TuesdayResult<Envelope<JsonObject>> {
        self.client.http.get_with_query("/people/lookup", lookup).await
    }

    /// Look up a person by email address.
    pub async fn lookup_by_email(
        &self,
        lookup: &EmailLookup,
    ) -> TuesdayResult<Envelope<JsonObject>> {
        self.client
            .http
            .get_with_query("/people/lookup/email", lookup)
            .await
    }

    /// Look up a person by phone number.
    pub async fn lookup_by_phone(
        &self,
        lookup: &PhoneLookup,
    ) -> TuesdayResult<Envelope<JsonObject>> {
        self.client
            .http
            .get_with_query("/people/lookup/phone", lookup)
            .await
    }

    /// Get a person profile from a LinkedIn URL.
    pub async fn profile(
        &self,
        lookup: &PersonProfileLookup,
    ) -> TuesdayResult<Envelope<JsonObject>> {
        self.client.http.get_with_query("/people/profile", lookup).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tuesday_core::schema::validate;
    use tuesday_core::{ToolArgs, ToolName};
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TuesdayClient {
        TuesdayClient::builder()
            .base_url(server.uri().parse().unwrap())
            .api_key("tk_test")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_lookup_by_email_sends_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/people/lookup/email"))
            .and(query_param("email", "ada@example.com"))
            .and(query_param("include_phone", "include"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"name": "Ada Lovelace"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let args = json!({"email": "ada@example.com", "include_phone": "include"});
        let Ok(ToolArgs::LookupPersonByEmail(lookup)) =
            validate(ToolName::LookupPersonByEmail, &args)
        else {
            panic!("expected email lookup args");
        };

        let envelope = client_for(&server).people().lookup_by_email(&lookup).await.unwrap();
        assert_eq!(envelope.data["name"], "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_lookup_omits_absent_optionals() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/people/lookup"))
            .and(query_param("company_domain", "acme.com"))
            .and(query_param("first_name", "Grace"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
            .mount(&server)
            .await;

        let args = json!({"company_domain": "acme.com", "first_name": "Grace"});
        let Ok(ToolArgs::LookupPerson(lookup)) = validate(ToolName::LookupPerson, &args) else {
            panic!("expected person lookup args");
        };

        client_for(&server).people().lookup(&lookup).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let query = requests[0].url.query().unwrap_or_default().to_string();
        assert!(!query.contains("last_name"));
        assert!(!query.contains("title"));
    }

    #[tokio::test]
    async fn test_search_posts_defaults() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/people/search"))
            .and(body_json(json!({
                "page": 1,
                "per_page": 25,
                "include_email": "exclude",
                "include_phone": "exclude",
                "person_titles": ["CTO"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"name": "A"}, {"name": "B"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let args = json!({"person_titles": ["CTO"]});
        let Ok(ToolArgs::SearchPeople(search)) = validate(ToolName::SearchPeople, &args) else {
            panic!("expected people search args");
        };

        let envelope = client_for(&server).people().search(&search).await.unwrap();
        assert_eq!(envelope.data.len(), 2);
    }

    #[tokio::test]
    async fn test_profile_rejects_list_payload() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/people/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [1]})))
            .mount(&server)
            .await;

        let args = json!({"linkedin_url": "https://www.linkedin.com/in/ada"});
        let Ok(ToolArgs::GetPersonProfile(lookup)) = validate(ToolName::GetPersonProfile, &args)
        else {
            panic!("expected profile args");
        };

        let result = client_for(&server).people().profile(&lookup).await;
        assert!(result.is_err());
    }
}
