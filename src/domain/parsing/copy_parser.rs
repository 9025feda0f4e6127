use crate::domain::copy_result::CopyResult;
use crate::domain::parsing::grammar::{ListShape, list_items, split_label};

pub const FACEBOOK_SENTINEL: &str = "=== FACEBOOK ADS ===";
pub const GOOGLE_SENTINEL: &str = "=== GOOGLE ADS ===";
pub const EMAIL_SENTINEL: &str = "=== EMAIL MARKETING ===";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopySlot {
    FacebookHeadlines,
    FacebookPrimaryTexts,
    FacebookCtas,
    GoogleHeadlines,
    GoogleDescriptions,
    EmailSubjects,
    EmailPreheaders,
    EmailBodies,
}

impl CopySlot {
    fn target(self, result: &mut CopyResult) -> &mut Vec<String> {
        match self {
            CopySlot::FacebookHeadlines => &mut result.facebook.headlines,
            CopySlot::FacebookPrimaryTexts => &mut result.facebook.primary_texts,
            CopySlot::FacebookCtas => &mut result.facebook.ctas,
            CopySlot::GoogleHeadlines => &mut result.google.headlines,
            CopySlot::GoogleDescriptions => &mut result.google.descriptions,
            CopySlot::EmailSubjects => &mut result.email.subjects,
            CopySlot::EmailPreheaders => &mut result.email.preheaders,
            CopySlot::EmailBodies => &mut result.email.bodies,
        }
    }
}

/// A `LABEL:` header opening a sub-list inside a section.
#[derive(Debug, Clone, Copy)]
struct ListRule {
    label: &'static str,
    slot: CopySlot,
    shape: ListShape,
}

#[derive(Debug, Clone, Copy)]
struct SectionRule {
    sentinel: &'static str,
    lists: &'static [ListRule],
}

const fn list(label: &'static str, slot: CopySlot, shape: ListShape) -> ListRule {
    ListRule { label, slot, shape }
}

const SECTION_RULES: &[SectionRule] = &[
    SectionRule {
        sentinel: FACEBOOK_SENTINEL,
        lists: &[
            list("HEADLINES", CopySlot::FacebookHeadlines, ListShape::Lines),
            list("PRIMARY TEXT", CopySlot::FacebookPrimaryTexts, ListShape::Passages),
            list("CTAS", CopySlot::FacebookCtas, ListShape::Lines),
        ],
    },
    SectionRule {
        sentinel: GOOGLE_SENTINEL,
        lists: &[
            list("HEADLINES", CopySlot::GoogleHeadlines, ListShape::Lines),
            list("DESCRIPTIONS", CopySlot::GoogleDescriptions, ListShape::Lines),
        ],
    },
    SectionRule {
        sentinel: EMAIL_SENTINEL,
        lists: &[
            list("SUBJECTS", CopySlot::EmailSubjects, ListShape::Lines),
            list("PREHEADERS", CopySlot::EmailPreheaders, ListShape::Lines),
            list("BODY", CopySlot::EmailBodies, ListShape::Passages),
        ],
    },
];

/// Parse a copy-generation response into its platform sub-lists.
///
/// Missing sections or headers leave the matching lists empty.
pub fn parse_copy(response: &str) -> CopyResult {
    let mut result = CopyResult::default();

    for (section, body) in sections(response) {
        parse_section(section, body, &mut result);
    }

    result
}

/// Section bodies in source order; each runs until the next sentinel.
fn sections(response: &str) -> Vec<(&'static SectionRule, &str)> {
    let mut starts: Vec<(usize, &'static SectionRule)> = SECTION_RULES
        .iter()
        .flat_map(|rule| response.match_indices(rule.sentinel).map(move |(pos, _)| (pos, rule)))
        .collect();
    starts.sort_by_key(|(pos, _)| *pos);

    starts
        .iter()
        .enumerate()
        .map(|(i, (pos, rule))| {
            let body_start = pos + rule.sentinel.len();
            let body_end = starts.get(i + 1).map(|(next, _)| *next).unwrap_or(response.len());
            (*rule, &response[body_start..body_end])
        })
        .collect()
}

fn parse_section(section: &SectionRule, body: &str, result: &mut CopyResult) {
    let mut current: Option<&ListRule> = None;
    let mut buffer: Vec<&str> = Vec::new();

    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("===") {
            continue;
        }

        let header = split_label(trimmed).and_then(|(label, inline)| {
            section.lists.iter().find(|rule| rule.label == label).map(|rule| (rule, inline))
        });

        match header {
            Some((rule, inline)) => {
                flush(current, &mut buffer, result);
                current = Some(rule);
                if !inline.is_empty() {
                    buffer.push(inline);
                }
            }
            None if current.is_some() => buffer.push(line),
            None => {}
        }
    }

    flush(current, &mut buffer, result);
}

fn flush(rule: Option<&ListRule>, buffer: &mut Vec<&str>, result: &mut CopyResult) {
    if let Some(rule) = rule {
        rule.slot.target(result).extend(list_items(buffer, rule.shape));
    }
    buffer.clear();
}
