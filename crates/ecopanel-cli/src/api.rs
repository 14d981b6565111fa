//! Ecopanel API Client

use anyhow::{bail, Context, Result};
use ecopanel::{CompanyProfile, DatasetSummary, SustainabilityDataset};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// API Client for Ecopanel
pub struct EcopanelClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub question: &'a str,
    pub company: &'a CompanyProfile,
    pub data: &'a SustainabilityDataset,
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    answer: String,
}

/// Answer as reported by the server
#[derive(Debug, PartialEq, Eq)]
pub struct AskOutcome {
    pub answer: String,
    /// Server sent the fallback answer (HTTP 203)
    pub degraded: bool,
}

impl EcopanelClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Get the company profile
    pub async fn company(&self) -> Result<CompanyProfile> {
        self.get_json("/company").await
    }

    /// Get the sustainability dataset
    pub async fn sustainability(&self) -> Result<SustainabilityDataset> {
        self.get_json("/sustainability").await
    }

    /// Get totals for `year`, or the latest year
    pub async fn summary(&self, year: Option<i32>) -> Result<DatasetSummary> {
        match year {
            Some(year) => {
                self.get_json(&format!("/sustainability/summary?year={}", year))
                    .await
            }
            None => self.get_json("/sustainability/summary").await,
        }
    }

    /// Ask a question about `company` and `data`
    pub async fn ask(
        &self,
        question: &str,
        company: &CompanyProfile,
        data: &SustainabilityDataset,
    ) -> Result<AskOutcome> {
        let url = format!("{}/ai", self.base_url);
        let request = AskRequest {
            question,
            company,
            data,
        };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Ecopanel API")?;

        let degraded = resp.status() == StatusCode::NON_AUTHORITATIVE_INFORMATION;
        let body: AskResponse = Self::parse(resp).await?;

        Ok(AskOutcome {
            answer: body.answer,
            degraded,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Ecopanel API")?;

        Self::parse(resp).await
    }

    async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecopanel::{fixtures, Locale};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetches_company() {
        let server = MockServer::start().await;
        let company = fixtures::company_profile(Locale::En);
        Mock::given(method("GET"))
            .and(path("/company"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&company))
            .mount(&server)
            .await;

        let fetched = EcopanelClient::new(&format!("{}/", server.uri()))
            .company()
            .await
            .unwrap();

        assert_eq!(fetched, company);
    }

    #[tokio::test]
    async fn test_summary_passes_year() {
        let server = MockServer::start().await;
        let data = fixtures::sustainability_dataset(Locale::En);
        let summary = DatasetSummary::for_year(&data, 2021, Locale::En);
        Mock::given(method("GET"))
            .and(path("/sustainability/summary"))
            .and(query_param("year", "2021"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&summary))
            .mount(&server)
            .await;

        let fetched = EcopanelClient::new(&server.uri())
            .summary(Some(2021))
            .await
            .unwrap();

        assert_eq!(fetched, summary);
    }

    #[tokio::test]
    async fn test_ask_reports_degraded_answers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ai"))
            .and(body_partial_json(json!({"question": "Why?"})))
            .respond_with(
                ResponseTemplate::new(203)
                    .set_body_json(json!({"answer": "No response received from the model."})),
            )
            .mount(&server)
            .await;

        let outcome = EcopanelClient::new(&server.uri())
            .ask(
                "Why?",
                &fixtures::company_profile(Locale::En),
                &fixtures::sustainability_dataset(Locale::En),
            )
            .await
            .unwrap();

        assert!(outcome.degraded);
        assert_eq!(outcome.answer, "No response received from the model.");
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ai"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Upstream error (500): boom"))
            .mount(&server)
            .await;

        let err = EcopanelClient::new(&server.uri())
            .ask(
                "Why?",
                &fixtures::company_profile(Locale::En),
                &fixtures::sustainability_dataset(Locale::En),
            )
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("502"));
        assert!(message.contains("boom"));
    }
}
