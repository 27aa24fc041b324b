pub mod openai;

pub use openai::OpenAiCompatProvider;
