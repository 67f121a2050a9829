pub mod clipboard;
pub mod git;
pub mod llm;
