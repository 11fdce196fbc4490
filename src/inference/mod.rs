pub mod provider;
pub mod providers;
pub mod tutor;

pub use provider::{GenerationProvider, GenerationRequest, ProviderError};
pub use providers::GeminiProvider;
pub use tutor::{Tutor, TutorRequest};
