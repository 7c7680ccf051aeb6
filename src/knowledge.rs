//! Knowledge base
//!
//! Read-only reference material shown next to the review tools: firm facts,
//! market data points, data sources and brand rules. Bundled at compile time.
//!
//! [`KnowledgeBase::search`] and [`KnowledgeBase::stats`] also take the
//! store's content so one query covers both.

use serde::{Deserialize, Serialize};

use crate::store::{ContentItem, ContentType, Status};
use crate::views;

/// Characters of body shown for a content search hit
pub const EXCERPT_CHARS: usize = 80;

const KNOWLEDGE_JSON: &str = include_str!("../data/knowledge.json");

#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeBase {
    pub firm_facts: Vec<FactCategory>,
    pub market_data: Vec<MarketSnapshot>,
    pub data_sources: Vec<DataSource>,
    pub brand_rules: Vec<RuleGroup>,
}

/// A group of firm facts, e.g. "Track Record"
#[derive(Debug, Clone, Deserialize)]
pub struct FactCategory {
    pub category: String,
    pub label: String,
    pub facts: Vec<Fact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub key: String,
    pub value: String,
    pub label: String,
}

/// Metrics for one market over one period
#[derive(Debug, Clone, Deserialize)]
pub struct MarketSnapshot {
    pub market: String,
    pub period: String,
    pub points: Vec<MarketPoint>,
}

impl MarketSnapshot {
    /// Capitalized market name followed by the period
    pub fn title(&self) -> String {
        let mut chars = self.market.chars();
        let market = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        format!("{} \u{2014} {}", market, self.period)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPoint {
    pub metric: String,
    pub value: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    pub name: String,
    /// `None` for subscription-only sources
    pub url: Option<String>,
    pub frequency: String,
    pub notes: String,
}

/// Brand rules of one kind (terminology, tone, compliance, avoid)
#[derive(Debug, Clone, Deserialize)]
pub struct RuleGroup {
    pub kind: String,
    pub label: String,
    pub rules: Vec<BrandRule>,
}

impl RuleGroup {
    /// "Avoid" rules are plain prohibitions without examples
    pub fn has_examples(&self) -> bool {
        self.kind != "avoid"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRule {
    pub rule: String,
    #[serde(default)]
    pub example: Option<String>,
}

impl KnowledgeBase {
    /// Parse the bundled knowledge base
    pub fn load() -> Result<Self, serde_json::Error> {
        serde_json::from_str(KNOWLEDGE_JSON)
    }

    pub fn fact_count(&self) -> usize {
        self.firm_facts.iter().map(|c| c.facts.len()).sum()
    }

    pub fn rule_count(&self) -> usize {
        self.brand_rules.iter().map(|g| g.rules.len()).sum()
    }

    /// Case-insensitive substring search over every section and `content`
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str, content: &[ContentItem]) -> SearchResults {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchResults::default();
        }

        let mut results = SearchResults::default();

        for category in &self.firm_facts {
            for fact in &category.facts {
                let fields = [
                    category.label.as_str(),
                    fact.key.as_str(),
                    fact.label.as_str(),
                    fact.value.as_str(),
                ];
                if matches_any(&needle, &fields) {
                    results.facts.push(FactHit {
                        category: category.label.clone(),
                        fact: fact.clone(),
                    });
                }
            }
        }

        for snapshot in &self.market_data {
            for point in &snapshot.points {
                let fields = [
                    snapshot.market.as_str(),
                    snapshot.period.as_str(),
                    point.metric.as_str(),
                    point.value.as_str(),
                    point.source.as_str(),
                ];
                if matches_any(&needle, &fields) {
                    results.market.push(MarketHit {
                        market: snapshot.title(),
                        point: point.clone(),
                    });
                }
            }
        }

        results.sources = self
            .data_sources
            .iter()
            .filter(|s| {
                matches_any(
                    &needle,
                    &[s.name.as_str(), s.frequency.as_str(), s.notes.as_str()],
                )
            })
            .cloned()
            .collect();

        for group in &self.brand_rules {
            for rule in &group.rules {
                let example = rule.example.as_deref().unwrap_or_default();
                if matches_any(&needle, &[rule.rule.as_str(), example]) {
                    results.rules.push(RuleHit {
                        group: group.label.clone(),
                        rule: rule.clone(),
                    });
                }
            }
        }

        results.content = content
            .iter()
            .filter(|c| matches_any(&needle, &[c.title.as_str(), c.body.as_str()]))
            .map(|c| ContentHit {
                id: c.id.clone(),
                content_type: c.content_type,
                status: c.status,
                title: c.title.clone(),
                excerpt: views::truncate(&c.body, EXCERPT_CHARS),
            })
            .collect();

        tracing::debug!(query, hits = results.len(), "Knowledge search");
        results
    }

    /// Section sizes plus content counts per status
    pub fn stats(&self, content: &[ContentItem]) -> KnowledgeStats {
        KnowledgeStats {
            facts: self.fact_count(),
            market_points: self.market_data.iter().map(|m| m.points.len()).sum(),
            sources: self.data_sources.len(),
            rules: self.rule_count(),
            content_total: content.len(),
            content_by_status: Status::all()
                .iter()
                .map(|&status| StatusCount {
                    status,
                    count: content.iter().filter(|c| c.status == status).count(),
                })
                .collect(),
        }
    }
}

fn matches_any(needle: &str, fields: &[&str]) -> bool {
    fields.iter().any(|f| f.to_lowercase().contains(needle))
}

/// A firm fact with the label of its category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactHit {
    pub category: String,
    #[serde(flatten)]
    pub fact: Fact,
}

/// A market data point with its snapshot title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketHit {
    pub market: String,
    #[serde(flatten)]
    pub point: MarketPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleHit {
    pub group: String,
    #[serde(flatten)]
    pub rule: BrandRule,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentHit {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub status: Status,
    pub title: String,
    pub excerpt: String,
}

/// Matches grouped by section
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    pub facts: Vec<FactHit>,
    pub market: Vec<MarketHit>,
    pub sources: Vec<DataSource>,
    pub rules: Vec<RuleHit>,
    pub content: Vec<ContentHit>,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.facts.len()
            + self.market.len()
            + self.sources.len()
            + self.rules.len()
            + self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: Status,
    pub count: usize,
}

/// Summary counts for `kb stats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeStats {
    pub facts: usize,
    pub market_points: usize,
    pub sources: usize,
    pub rules: usize,
    pub content_total: usize,
    /// Every status in lifecycle order, zero counts included
    pub content_by_status: Vec<StatusCount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::FORBIDDEN_TERMS;
    use crate::store::Platform;
    use chrono::NaiveDate;

    #[test]
    fn test_knowledge_base_loads() {
        let kb = KnowledgeBase::load().unwrap();
        assert_eq!(kb.firm_facts.len(), 5);
        assert_eq!(kb.fact_count(), 42);
        assert_eq!(kb.data_sources.len(), 6);
        assert_eq!(kb.rule_count(), 25);
        assert_eq!(kb.market_data.len(), 3);
    }

    fn content(id: &str, title: &str, body: &str, status: Status) -> ContentItem {
        let created = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        ContentItem {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            content_type: ContentType::BlogPost,
            platform: Platform::Website,
            status,
            principal: "Jane".to_string(),
            created,
            published: (status == Status::Published).then_some(created),
            metrics: None,
        }
    }

    #[test]
    fn test_search_facts_case_insensitive() {
        let kb = KnowledgeBase::load().unwrap();
        let results = kb.search("TOTAL UNITS", &[]);
        assert_eq!(results.facts.len(), 1);
        assert_eq!(results.facts[0].fact.value, "143");
        assert_eq!(results.facts[0].category, "Portfolio");
        assert!(results.content.is_empty());
    }

    #[test]
    fn test_search_covers_every_section() {
        let kb = KnowledgeBase::load().unwrap();

        let market = kb.search("net migration", &[]);
        assert!(market.market.iter().all(|m| m.market.starts_with("Houston")));
        assert!(!market.market.is_empty());

        assert!(!kb.search("costar", &[]).sources.is_empty());
        assert!(!kb.search("workforce housing", &[]).rules.is_empty());
    }

    #[test]
    fn test_search_matches_content_title_and_body() {
        let kb = KnowledgeBase::load().unwrap();
        let items = vec![
            content("content-1", "Phoenix Outlook", &"Rent growth steady. ".repeat(6), Status::Queued),
            content("content-2", "Weekly note", "Our Phoenix basis stays disciplined.", Status::Draft),
            content("content-3", "Houston update", "Occupancy held firm.", Status::Published),
        ];

        let results = kb.search("phoenix", &items);
        let ids: Vec<_> = results.content.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["content-1", "content-2"]);
        assert!(results.content[0].excerpt.ends_with("..."));
        assert_eq!(results.content[0].excerpt.chars().count(), EXCERPT_CHARS + 3);
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let kb = KnowledgeBase::load().unwrap();
        let items = vec![content("content-1", "Title", "Body", Status::Draft)];
        assert!(kb.search("   ", &items).is_empty());
        assert!(kb.search("zzqx-no-such-text", &items).is_empty());
    }

    #[test]
    fn test_stats() {
        let kb = KnowledgeBase::load().unwrap();
        let items = vec![
            content("content-1", "a", "a", Status::Queued),
            content("content-2", "b", "b", Status::Queued),
            content("content-3", "c", "c", Status::Published),
        ];

        let stats = kb.stats(&items);
        assert_eq!(stats.facts, 42);
        assert_eq!(stats.rules, 25);
        assert_eq!(stats.sources, 6);
        assert_eq!(stats.content_total, 3);
        assert_eq!(stats.content_by_status.len(), Status::all().len());

        let count = |status| {
            stats
                .content_by_status
                .iter()
                .find(|c| c.status == status)
                .map(|c| c.count)
        };
        assert_eq!(count(Status::Queued), Some(2));
        assert_eq!(count(Status::Published), Some(1));
        assert_eq!(count(Status::Draft), Some(0));
    }

    #[test]
    fn test_market_title() {
        let kb = KnowledgeBase::load().unwrap();
        assert_eq!(kb.market_data[1].title(), "Houston \u{2014} Q4 2025");
        assert_eq!(kb.market_data[2].title(), "Phoenix \u{2014} 2025");
    }

    #[test]
    fn test_avoid_rules_cover_forbidden_terms() {
        let kb = KnowledgeBase::load().unwrap();
        let avoid = kb.brand_rules.iter().find(|g| g.kind == "avoid").unwrap();
        assert!(!avoid.has_examples());

        let text = avoid
            .rules
            .iter()
            .map(|r| r.rule.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        for term in FORBIDDEN_TERMS {
            assert!(text.contains(term), "{}", term);
        }
    }
}
