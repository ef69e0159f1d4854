//! Resume rewrite service integration
//! Builds the rewrite prompt and calls a chat-completions endpoint

pub mod prompts;
pub mod client;

pub use client::{HttpRewriter, ResumeRewriter, RewriteRequest, RewriteResponse};
