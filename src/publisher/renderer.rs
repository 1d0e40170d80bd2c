//! Header and footer synthesis for published documents
//!
//! Rendering is pure string concatenation: front-matter header + verbatim
//! source content + attribution footer. Timestamps are passed in by the
//! caller so output is a function of its inputs.

use chrono::{DateTime, Local, NaiveDate};
use std::path::Path;

use crate::config::GuideRecord;

/// Layout referenced by published guide pages, relative to pages/guides/
pub const GUIDE_LAYOUT: &str = "../../layouts/MarkdownLayout.astro";

/// Layout referenced by the contributing page, relative to pages/
pub const CONTRIBUTING_LAYOUT: &str = "../layouts/MarkdownLayout.astro";

const SOURCE_URL: &str = "https://github.com/lissy93/git-into-opensource";
const LICENSE_LINE: &str = "Licensed under MIT License, (C) Alicia Sykes <alicia@as93.net> 2023";

/// Identifier stamped into the footer's `using` line
const GENERATOR: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

/// Render the front-matter block and do-not-edit notice for one guide.
///
/// Field order is fixed and consumed downstream by the site layout, so it
/// must stay stable. Absent metadata renders as an empty value.
pub fn render_header(guide: &GuideRecord, updated: NaiveDate) -> String {
    format!(
        "---\n\
         layout: {layout}\n\
         title: {title}\n\
         description: {description}\n\
         author: {author}\n\
         icon: '{icon}'\n\
         tags: '{tags}'\n\
         index: '{index}'\n\
         created: {created}\n\
         updated: {updated}\n\
         ---\n\n\
         <!--\n  IMPORTANT: Do not edit this file directly!\n  It is generated from the /guides directory\n-->\n\n",
        layout = GUIDE_LAYOUT,
        title = guide.title.as_deref().unwrap_or(""),
        description = guide.description.as_deref().unwrap_or(""),
        author = guide.author.as_deref().unwrap_or(""),
        icon = guide.icon.as_deref().unwrap_or(""),
        tags = guide.tags.as_deref().unwrap_or(""),
        index = guide.index.as_deref().unwrap_or(""),
        created = guide.created.as_deref().unwrap_or(""),
        updated = updated.format("%Y-%m-%d"),
    )
}

/// Render the fixed attribution footer appended to every published guide.
pub fn render_footer(source: &Path, generated_at: DateTime<Local>) -> String {
    format!(
        "\n\n<!--\n\
         \tArticle sourced from {source_url}\n\
         \t{license}\n\
         \t---\n\
         \tThis file was auto-generated at {timestamp}\n\
         \tfrom {source}\n\
         \tusing {generator}\n\
         -->\n",
        source_url = SOURCE_URL,
        license = LICENSE_LINE,
        timestamp = generated_at.format("%Y-%m-%d %H:%M:%S"),
        source = source.display(),
        generator = GENERATOR,
    )
}

/// Assemble the full published document for one guide.
pub fn render_guide(
    guide: &GuideRecord,
    content: &str,
    source: &Path,
    updated: NaiveDate,
    generated_at: DateTime<Local>,
) -> String {
    format!(
        "{}{}{}",
        render_header(guide, updated),
        content,
        render_footer(source, generated_at)
    )
}

/// Assemble the published contributing page: fixed front-matter and
/// provenance notice ahead of the verbatim guidelines.
pub fn render_contributing(content: &str) -> String {
    format!(
        "---\n\
         layout: {layout}\n\
         title: Contributing Guidelines\n\
         ---\n\n\
         <!-- This file was auto-generated from ./.github/CONTRIBUTING.md -->\n\n\
         {content}",
        layout = CONTRIBUTING_LAYOUT,
        content = content,
    )
}
