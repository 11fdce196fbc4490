//! # Tutor Client
//!
//! Wraps a [`GenerationProvider`] with the tutoring prompt and turns every
//! outcome into text the chat window can show. `ask` never fails: a missing
//! API key, a transport error, or an empty answer each map to a fixed
//! message.

use std::sync::Arc;

use log::{info, warn};

use crate::core::config::ResolvedConfig;
use crate::inference::{GeminiProvider, GenerationProvider, GenerationRequest};

/// Shown when no API key is configured. No request is made.
pub const NO_API_KEY_MESSAGE: &str = "ไม่พบ API Key กรุณาตั้งค่า API Key ใน Environment Variable";
/// Shown when the provider call fails for any reason.
pub const CONNECTION_ERROR_MESSAGE: &str = "เกิดข้อผิดพลาดในการเชื่อมต่อกับ AI Tutor";
/// Shown when the provider answers with no text.
pub const NO_ANSWER_MESSAGE: &str = "ขออภัย ไม่สามารถประมวลผลคำตอบได้ในขณะนี้";

/// A question plus the lesson it was asked against, captured at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorRequest {
    pub question: String,
    pub lesson_content: String,
    pub lesson_code: String,
}

pub struct Tutor {
    provider: Option<Arc<dyn GenerationProvider>>,
    model: String,
    temperature: f32,
}

impl Tutor {
    /// `provider: None` means "not configured"; `ask` will answer with
    /// [`NO_API_KEY_MESSAGE`].
    pub fn new(
        provider: Option<Arc<dyn GenerationProvider>>,
        model: String,
        temperature: f32,
    ) -> Self {
        Self {
            provider,
            model,
            temperature,
        }
    }

    /// Builds a Gemini-backed tutor, or an unconfigured one if there is no key.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let provider = config.api_key.clone().map(|key| {
            Arc::new(GeminiProvider::new(key, Some(config.base_url.clone())))
                as Arc<dyn GenerationProvider>
        });
        if provider.is_none() {
            warn!("No Gemini API key configured; the tutor will answer with a setup hint");
        }
        Self::new(provider, config.model_name.clone(), config.temperature)
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Asks one question about the given lesson and returns displayable text.
    pub async fn ask(&self, question: &str, lesson_content: &str, lesson_code: &str) -> String {
        let Some(provider) = &self.provider else {
            return NO_API_KEY_MESSAGE.to_string();
        };

        let prompt = compose_prompt(question, lesson_content, lesson_code);
        let request = GenerationRequest {
            model: &self.model,
            prompt: &prompt,
            temperature: self.temperature,
        };

        match provider.generate(request).await {
            Ok(Some(answer)) => answer,
            Ok(None) => {
                info!("{} returned no answer text", provider.name());
                NO_ANSWER_MESSAGE.to_string()
            }
            Err(e) => {
                warn!("{} request failed: {}", provider.name(), e);
                CONNECTION_ERROR_MESSAGE.to_string()
            }
        }
    }

    pub async fn answer(&self, request: &TutorRequest) -> String {
        self.ask(
            &request.question,
            &request.lesson_content,
            &request.lesson_code,
        )
        .await
    }
}

/// Tutoring persona with the current lesson embedded.
pub fn system_instruction(lesson_content: &str, lesson_code: &str) -> String {
    format!(
        "คุณคือผู้เชี่ยวชาญด้าน Flutter และ Riverpod ที่เก่งมาก\n\
         หน้าที่ของคุณคือสอนนักเรียนไทย\n\
         \n\
         บริบทบทเรียนปัจจุบัน: {lesson_content}\n\
         โค้ดตัวอย่างปัจจุบัน: {lesson_code}\n\
         \n\
         คำแนะนำ:\n\
         1. ตอบคำถามเป็นภาษาไทยที่เข้าใจง่าย กระชับ\n\
         2. อ้างอิงโค้ดตัวอย่างถ้าจำเป็น\n\
         3. เน้น Best Practice ของ Riverpod 2.0+\n\
         4. ถ้าผู้ใช้ถามนอกเรื่อง ให้พยายามโยงกลับมาเรื่อง Flutter หรือ Riverpod อย่างนุ่มนวล"
    )
}

/// The single user turn sent to the model: instruction, blank line, question.
pub fn compose_prompt(question: &str, lesson_content: &str, lesson_code: &str) -> String {
    format!(
        "System Instruction: {}\n\nQuestion: {}",
        system_instruction(lesson_content, lesson_code),
        question
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingProvider, FixedProvider};

    fn tutor_with(provider: Arc<dyn GenerationProvider>) -> Tutor {
        Tutor::new(Some(provider), "test-model".to_string(), 0.7)
    }

    #[tokio::test]
    async fn test_unconfigured_tutor_returns_hint() {
        let tutor = Tutor::new(None, "test-model".to_string(), 0.7);
        assert!(!tutor.is_configured());
        for question in ["", "ref.watch คืออะไร", "anything"] {
            assert_eq!(tutor.ask(question, "ctx", "code").await, NO_API_KEY_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_answer_is_passed_through() {
        let tutor = tutor_with(Arc::new(FixedProvider::answering("คำตอบ")));
        assert_eq!(tutor.ask("q", "ctx", "code").await, "คำตอบ");
    }

    #[tokio::test]
    async fn test_empty_answer_maps_to_fallback() {
        let tutor = tutor_with(Arc::new(FixedProvider::silent()));
        assert_eq!(tutor.ask("q", "ctx", "code").await, NO_ANSWER_MESSAGE);
    }

    #[tokio::test]
    async fn test_provider_error_maps_to_fallback() {
        let tutor = tutor_with(Arc::new(FailingProvider));
        assert_eq!(tutor.ask("q", "ctx", "code").await, CONNECTION_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_prompt_carries_lesson_and_question() {
        let provider = Arc::new(FixedProvider::answering("ok"));
        let tutor = tutor_with(provider.clone());
        let request = TutorRequest {
            question: "ทำไม?".to_string(),
            lesson_content: "# Lesson body".to_string(),
            lesson_code: "final x = 1;".to_string(),
        };
        tutor.answer(&request).await;

        let prompts = provider.prompts();
        assert_eq!(prompts.len(), 1);
        let prompt = &prompts[0];
        assert!(prompt.starts_with("System Instruction: "));
        assert!(prompt.contains("บริบทบทเรียนปัจจุบัน: # Lesson body"));
        assert!(prompt.contains("โค้ดตัวอย่างปัจจุบัน: final x = 1;"));
        assert!(prompt.ends_with("\n\nQuestion: ทำไม?"));
    }

    #[test]
    fn test_system_instruction_lists_four_rules() {
        let instruction = system_instruction("c", "k");
        for rule in ["1. ", "2. ", "3. ", "4. "] {
            assert!(instruction.contains(rule), "missing rule {rule}");
        }
    }
}
