//! Content Generator
//!
//! Assembles plausible-looking demo copy from the template library:
//!
//! - **templates**: Opening/body/closing variants per content type
//! - **placeholder**: The closed set of `{name}` slots and their vocabularies
//!
//! Output is random and not meant to be grammatical or factual, only to look
//! like something a reviewer would triage. Each placeholder occurrence is
//! drawn independently, so a template using `{market}` twice may get two
//! different values.
//!
//! # Example
//!
//! ```rust
//! use marketing_bot::generator::Generator;
//! use marketing_bot::store::ContentType;
//!
//! let mut generator = Generator::new();
//! let draft = generator.generate(ContentType::LinkedinPost, "Houston Q4", "Michael Rosen");
//! assert_eq!(draft.title, "Houston Q4");
//! assert!(!draft.body.contains('{'));
//! ```

pub mod placeholder;
pub mod templates;

use std::sync::OnceLock;

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Captures, Regex};

use crate::store::{ContentType, NewContentItem, Platform, Status};

pub use placeholder::Placeholder;
pub use templates::{templates_for, TemplateSet};

/// Title used when no topic is given
pub const UNTITLED: &str = "Untitled Content";

/// Template set used when a type name is not recognized
pub const FALLBACK_TYPE: ContentType = ContentType::BlogPost;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"))
}

/// Names of `{tokens}` in `template` that are not known placeholders
pub fn unresolved_placeholders(template: &str) -> Vec<String> {
    placeholder_regex()
        .captures_iter(template)
        .filter(|caps| Placeholder::from_name(&caps[1]).is_none())
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Generated copy not yet saved to the store
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedContent {
    pub title: String,
    pub body: String,
    pub content_type: ContentType,
    pub principal: String,
}

impl GeneratedContent {
    /// Turn the draft into a store record for `platform`
    pub fn into_new_item(self, platform: Platform, status: Status) -> NewContentItem {
        NewContentItem {
            title: self.title,
            body: self.body,
            content_type: self.content_type,
            platform,
            status,
            principal: self.principal,
        }
    }
}

/// Template-based content generator
///
/// Uses the thread RNG unless another one is supplied, e.g. a seeded
/// `StdRng` for reproducible output.
pub struct Generator<R = ThreadRng> {
    rng: R,
}

impl Generator<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for Generator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Generator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate copy for `content_type` about `topic`
    pub fn generate(
        &mut self,
        content_type: ContentType,
        topic: &str,
        principal: &str,
    ) -> GeneratedContent {
        let set = templates_for(content_type);

        let opening = self.pick(set.openings);
        let body = self.pick(set.bodies);
        let closing = self.pick(set.closings);

        let mut full = self.interpolate(opening);
        full.push_str(&self.interpolate(body));
        full.push_str(&self.interpolate(closing));

        let title = if topic.is_empty() { UNTITLED } else { topic };

        GeneratedContent {
            title: title.to_string(),
            body: full,
            content_type,
            principal: principal.to_string(),
        }
    }

    /// Like [`generate`](Self::generate), taking the type by wire name
    ///
    /// Unknown names fall back to [`FALLBACK_TYPE`].
    pub fn generate_named(
        &mut self,
        type_name: &str,
        topic: &str,
        principal: &str,
    ) -> GeneratedContent {
        let content_type = type_name.parse().unwrap_or_else(|_| {
            tracing::debug!(type_name, fallback = %FALLBACK_TYPE, "Unknown content type");
            FALLBACK_TYPE
        });
        self.generate(content_type, topic, principal)
    }

    /// Replace every known `{placeholder}` with a random vocabulary value
    ///
    /// Unknown tokens are logged and left as written.
    pub fn interpolate(&mut self, template: &str) -> String {
        let rng = &mut self.rng;
        placeholder_regex()
            .replace_all(template, |caps: &Captures| {
                match Placeholder::from_name(&caps[1]) {
                    Some(p) => p.values().choose(&mut *rng).copied().unwrap_or_default().to_string(),
                    None => {
                        tracing::warn!(token = &caps[0], "Unresolved template placeholder");
                        caps[0].to_string()
                    }
                }
            })
            .into_owned()
    }

    fn pick(&mut self, fragments: &'static [&'static str]) -> &'static str {
        fragments.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded() -> Generator<StdRng> {
        Generator::with_rng(StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_templates_reference_known_placeholders() {
        for &content_type in ContentType::all() {
            for fragment in templates_for(content_type).fragments() {
                assert!(
                    unresolved_placeholders(fragment).is_empty(),
                    "{}: {:?}",
                    content_type,
                    fragment
                );
            }
        }
    }

    #[test]
    fn test_untitled_when_topic_empty() {
        let result = seeded().generate_named("blog_post", "", "Jane");
        assert_eq!(result.title, UNTITLED);
        assert_eq!(result.principal, "Jane");
        assert_eq!(result.content_type, ContentType::BlogPost);
    }

    #[test]
    fn test_generated_bodies_fully_resolved() {
        let mut generator = seeded();
        for _ in 0..50 {
            for &content_type in ContentType::all() {
                let result = generator.generate(content_type, "Topic", "Jane");
                assert!(!result.body.contains('{'), "{}", result.body);
                assert!(!result.body.is_empty());
            }
        }
    }

    #[test]
    fn test_body_built_from_matching_set() {
        let mut generator = seeded();
        let set = templates_for(ContentType::LinkedinPost);

        for _ in 0..20 {
            let result = generator.generate(ContentType::LinkedinPost, "Topic", "Jane");
            // LinkedIn closings carry no placeholders, so they appear verbatim
            assert!(set.closings.iter().any(|c| result.body.ends_with(c)));
        }
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let result = seeded().generate_named("podcast", "Topic", "Jane");
        assert_eq!(result.content_type, FALLBACK_TYPE);
    }

    #[test]
    fn test_interpolate_leaves_unknown_tokens() {
        let mut generator = seeded();
        let out = generator.interpolate("{city} has {units} units");
        assert_eq!(out, "{city} has 143 units");
        assert_eq!(unresolved_placeholders("{city} and {market}"), vec!["city".to_string()]);
    }

    #[test]
    fn test_interpolate_draws_from_vocabulary() {
        let mut generator = seeded();
        for _ in 0..20 {
            let out = generator.interpolate("{source}");
            assert!(Placeholder::Source.values().contains(&out.as_str()));
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = seeded().generate(ContentType::MarketReport, "Q1", "Jane");
        let b = seeded().generate(ContentType::MarketReport, "Q1", "Jane");
        assert_eq!(a, b);
    }

    #[test]
    fn test_into_new_item() {
        let item = seeded()
            .generate(ContentType::LinkedinPost, "Topic", "Jane")
            .into_new_item(Platform::Linkedin, Status::Queued);
        assert_eq!(item.platform, Platform::Linkedin);
        assert_eq!(item.status, Status::Queued);
        assert_eq!(item.title, "Topic");
    }
}
