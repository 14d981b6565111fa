//! Advisor Application Service (Use Case)
//!
//! Answers a sustainability question: render the prompt, send it to the
//! model once, read the answer out of the reply.

use std::sync::Arc;

use ecopanel::{render_prompt, Answer, DomainError, GenerativeModel, Locale, PromptQuery};

/// Application service for question answering
pub struct AdvisorService<M: GenerativeModel> {
    model: Arc<M>,
    locale: Locale,
}

impl<M: GenerativeModel> AdvisorService<M> {
    pub fn new(model: Arc<M>, locale: Locale) -> Self {
        Self { model, locale }
    }

    /// Answer `query` with a single model call
    pub async fn ask(&self, query: &PromptQuery) -> Result<Answer, DomainError> {
        let prompt = render_prompt(query, self.locale);
        tracing::debug!(
            "Asking {} about {} ({} prompt chars)",
            self.model.model_id(),
            query.company.name,
            prompt.chars().count()
        );

        let extraction = self.model.generate_text(&prompt).await.map_err(|e| {
            if e.is_upstream() {
                tracing::warn!("Model {} call failed: {}", self.model.model_id(), e);
            }
            e
        })?;

        let answer = Answer::from(extraction);
        if answer.degraded {
            tracing::warn!(
                "Model {} reply had no answer text - returning fallback",
                self.model.model_id()
            );
        } else {
            tracing::info!(
                "Answered question for {} ({} chars)",
                query.company.name,
                answer.text.chars().count()
            );
        }

        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ecopanel::{fixtures, GenerateContentRequest, FALLBACK_ANSWER};
    use serde_json::{json, Value};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Replays one canned outcome and records what it was sent
    struct ScriptedModel {
        outcome: fn() -> Result<Value, DomainError>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        fn new(outcome: fn() -> Result<Value, DomainError>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                prompts: Mutex::new(vec![]),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerativeModel for ScriptedModel {
        async fn generate_content(
            &self,
            request: &GenerateContentRequest,
        ) -> Result<Value, DomainError> {
            self.prompts
                .lock()
                .unwrap()
                .push(request.contents[0].parts[0].text.clone());
            (self.outcome)()
        }

        fn model_id(&self) -> &str {
            "scripted"
        }
    }

    fn query(question: &str) -> PromptQuery {
        PromptQuery::new(
            question,
            fixtures::company_profile(Locale::En),
            fixtures::sustainability_dataset(Locale::En),
        )
    }

    #[tokio::test]
    async fn test_answer_from_reply() {
        let model = ScriptedModel::new(|| {
            Ok(json!({"candidates":[{"content":{"parts":[{"text":"Use more solar."}]}}]}))
        });
        let service = AdvisorService::new(model.clone(), Locale::En);

        let answer = service.ask(&query("What next?")).await.unwrap();

        assert_eq!(answer.text, "Use more solar.");
        assert!(!answer.degraded);
        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].ends_with("User question: What next?"));
    }

    #[tokio::test]
    async fn test_malformed_reply_degrades() {
        let model = ScriptedModel::new(|| Ok(json!({"candidates": []})));
        let service = AdvisorService::new(model, Locale::En);

        let answer = service.ask(&query("What next?")).await.unwrap();

        assert_eq!(answer.text, FALLBACK_ANSWER);
        assert!(answer.degraded);
    }

    #[tokio::test]
    async fn test_upstream_error_propagates_without_retry() {
        let model = ScriptedModel::new(|| Err(DomainError::Timeout(Duration::from_secs(30))));
        let service = AdvisorService::new(model.clone(), Locale::En);

        let err = service.ask(&query("What next?")).await.unwrap_err();

        assert!(matches!(err, DomainError::Timeout(_)));
        assert_eq!(model.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_question_is_still_asked() {
        let model = ScriptedModel::new(|| {
            Ok(json!({"candidates":[{"content":{"parts":[{"text":"Ask me anything."}]}}]}))
        });
        let service = AdvisorService::new(model.clone(), Locale::En);

        let answer = service.ask(&query("")).await.unwrap();

        assert_eq!(answer.text, "Ask me anything.");
        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].ends_with("User question: "));
    }

    #[tokio::test]
    async fn test_locale_selects_wording() {
        let model = ScriptedModel::new(|| Ok(json!({})));
        let service = AdvisorService::new(model.clone(), Locale::PtBr);

        let query = PromptQuery::new(
            "E agora?",
            fixtures::company_profile(Locale::PtBr),
            fixtures::sustainability_dataset(Locale::PtBr),
        );
        service.ask(&query).await.unwrap();

        assert!(model.calls()[0].ends_with("Pergunta do usuário: E agora?"));
    }
}
