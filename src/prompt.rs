//! Prompt assembly for README generation.
//!
//! Deterministic string assembly only: the payload text is opaque to the rest
//! of the pipeline, which never parses or validates it.

use crate::config::{ReadmeConfig, ReadmeStyle};
use crate::source::SourceFile;

/// Render the per-file code context: each file as its name followed by its
/// content in a code fence, joined by blank lines. Input order is preserved
/// exactly; the model may be sensitive to ordering, so files are never
/// re-sorted here.
pub fn render_code_context(files: &[SourceFile]) -> String {
    files
        .iter()
        .map(|f| format!("File: {}\n```\n{}\n```", f.name, f.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the full instruction payload: generation preferences, the serialized
/// code context, and the fixed structural instructions.
pub fn build_prompt(config: &ReadmeConfig, files: &[SourceFile]) -> String {
    let code_context = render_code_context(files);
    let repo_url = config.repo_url.as_deref().unwrap_or("Not provided");

    format!(
        "You are a world-class technical writer and developer advocate.\n\
         Your task is to generate a professional, high-quality README.md for the following project code:\n\
         \n\
         Project Name: {project_name}\n\
         Repository URL: {repo_url}\n\
         Style: {style}\n\
         Include Badges: {include_badges}\n\
         Include License: {include_license}\n\
         \n\
         --- PROJECT CODE ---\n\
         {code_context}\n\
         --- END PROJECT CODE ---\n\
         \n\
         INSTRUCTIONS:\n\
         1. Analyze the code to understand the project's purpose, main features, and dependencies.\n\
         2. Write a professional README.md with the following sections:\n\
            - Catchy Header (with badges if requested)\n\
            - Clear Description (What is it?)\n\
            - Features (Bullet points)\n\
            - Installation (Step-by-step for a developer)\n\
            - Usage (Code examples based on the provided input)\n\
            - Roadmap (Future ideas based on logic)\n\
            - Contributing (Standard block)\n\
            - License (If requested)\n\
         3. Use high-quality Markdown formatting (bold, italics, tables where appropriate).\n\
         {style_instruction}\n\
         6. Return ONLY the Markdown content.",
        project_name = config.project_name,
        repo_url = repo_url,
        style = config.style,
        include_badges = config.include_badges,
        include_license = config.include_license,
        code_context = code_context,
        style_instruction = style_instruction(config.style),
    )
}

fn style_instruction(style: ReadmeStyle) -> &'static str {
    match style {
        ReadmeStyle::Playful => {
            "4. The style is 'playful': use emojis and a more conversational tone.\n\
             5. Keep the structure complete regardless of tone."
        }
        ReadmeStyle::Minimal => {
            "4. The style is 'minimal': keep it strictly functional.\n\
             5. Omit decorative prose; short sections are fine."
        }
        ReadmeStyle::Comprehensive => {
            "4. The style is 'comprehensive': cover each section in depth.\n\
             5. Prefer concrete detail drawn from the code over boilerplate."
        }
    }
}
