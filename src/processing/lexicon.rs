//! Static reference data used by the checks
//!
//! Word lists are stored lowercase and already in tokenizer form, so a lookup
//! never needs to normalize a lexicon entry.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Canonical resume sections, in report order.
pub const CANONICAL_SECTIONS: &[&str] = &[
    "contact",
    "summary",
    "experience",
    "skills",
    "education",
    "projects",
];

/// Sections a resume must contain for the "Essential Sections" check.
pub const REQUIRED_SECTIONS: &[&str] = &["experience", "skills", "education"];

/// Header alternatives per canonical section. Longer alternatives come first
/// so the anchored matcher reports the most specific header.
pub const SECTION_HEADERS: &[(&str, &[&str])] = &[
    (
        "contact",
        &["contact information", "contact info", "contact details", "contact", "personal information"],
    ),
    (
        "summary",
        &[
            "summary of qualifications",
            "professional summary",
            "career summary",
            "executive summary",
            "summary",
            "profile",
            "professional profile",
            "career objective",
            "objective",
            "about me",
            "qualifications",
        ],
    ),
    (
        "experience",
        &[
            "professional experience",
            "work experience",
            "relevant experience",
            "employment history",
            "work history",
            "experience",
            "employment",
            "career history",
        ],
    ),
    (
        "skills",
        &[
            "technical skills",
            "core competencies",
            "key skills",
            "skills",
            "competencies",
            "expertise",
            "technologies",
        ],
    ),
    (
        "education",
        &[
            "education and training",
            "academic background",
            "education",
            "academics",
        ],
    ),
    (
        "projects",
        &["personal projects", "key projects", "notable projects", "projects", "portfolio"],
    ),
];

const ACTION_VERB_LIST: &[&str] = &[
    "accelerated", "achieved", "acquired", "adapted", "administered", "advised", "analyzed",
    "architected", "arranged", "assembled", "assessed", "audited", "authored", "automated",
    "balanced", "boosted", "budgeted", "built", "calculated", "captured", "centralized",
    "chaired", "championed", "clarified", "coached", "collaborated", "compiled", "completed",
    "computed", "conceived", "conceptualized", "conducted", "configured", "consolidated",
    "constructed", "consulted", "converted", "coordinated", "created", "cultivated", "cut",
    "debugged", "decreased", "defined", "delivered", "deployed", "designed", "developed",
    "devised", "diagnosed", "directed", "discovered", "drafted", "drove", "earned", "edited",
    "educated", "eliminated", "enabled", "engineered", "enhanced", "established", "evaluated",
    "exceeded", "executed", "expanded", "expedited", "facilitated", "forecasted", "formulated",
    "founded", "generated", "grew", "guided", "headed", "identified", "implemented", "improved",
    "increased", "influenced", "initiated", "innovated", "inspected", "installed", "instituted",
    "integrated", "introduced", "invented", "investigated", "launched", "led", "leveraged",
    "maintained", "managed", "marketed", "maximized", "mentored", "migrated", "minimized",
    "modernized", "monitored", "motivated", "negotiated", "optimized", "orchestrated",
    "organized", "originated", "overhauled", "oversaw", "partnered", "performed", "pioneered",
    "planned", "prepared", "presented", "prioritized", "produced", "programmed", "promoted",
    "proposed", "published", "purchased", "recruited", "redesigned", "reduced", "refactored",
    "refined", "reengineered", "reorganized", "replaced", "researched", "resolved",
    "restructured", "revamped", "reviewed", "revitalized", "saved", "scaled", "scheduled",
    "secured", "simplified", "solved", "spearheaded", "standardized", "streamlined",
    "strengthened", "structured", "supervised", "surpassed", "synthesized", "taught", "tested",
    "trained", "transformed", "translated", "troubleshot", "unified", "upgraded", "validated",
    "won", "wrote",
];

/// Weak verbs and filler phrases, counted as substrings of the lowercased text.
pub const WEAK_PHRASES: &[&str] = &[
    "responsible for",
    "duties included",
    "duties include",
    "worked on",
    "helped",
    "assisted with",
    "assisted in",
    "participated in",
    "tasked with",
    "involved in",
    "was part of",
    "in charge of",
    "handled",
    "utilized",
    "tried to",
];

/// Structural words that hint at tables, multi-column or graphic layouts.
pub const COMPLEX_LAYOUT_KEYWORDS: &[&str] = &["table", "column", "graphic", "chart"];

const STOP_WORD_LIST: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "etc",
    "every", "few", "for", "from", "further", "had", "has", "have", "having", "he", "her",
    "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself",
    "just", "like", "may", "me", "more", "most", "must", "my", "no", "nor", "not", "now", "of",
    "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own", "per",
    "plus", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "them", "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
    "until", "up", "us", "very", "via", "was", "we", "well", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "within", "would", "you", "your",
    "yours", "able", "across", "ability", "candidate", "company", "including", "job", "looking",
    "new", "role", "strong", "team", "work", "working", "years", "year", "experience",
    "required", "requirements", "preferred", "responsibilities", "qualifications", "join",
    "position", "opportunity", "ideal", "seeking", "plus", "highly", "excellent",
];

/// Skill keywords merged into the job-description keywords for a target role.
pub const ROLE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "software-engineer",
        &[
            "javascript", "typescript", "python", "java", "git", "api", "sql", "testing",
            "agile", "docker", "cloud", "microservices", "ci-cd", "algorithms",
        ],
    ),
    (
        "data-scientist",
        &[
            "python", "sql", "statistics", "pandas", "numpy", "tensorflow", "pytorch",
            "modeling", "visualization", "regression", "experimentation", "spark",
        ],
    ),
    (
        "data-analyst",
        &[
            "sql", "excel", "tableau", "python", "dashboards", "reporting", "statistics",
            "visualization", "etl", "forecasting",
        ],
    ),
    (
        "product-manager",
        &[
            "roadmap", "stakeholders", "agile", "scrum", "metrics", "strategy", "analytics",
            "prioritization", "user-research", "launch", "kpis",
        ],
    ),
    (
        "designer",
        &[
            "figma", "sketch", "prototyping", "wireframes", "ux", "ui", "accessibility",
            "typography", "usability", "design-systems",
        ],
    ),
    (
        "marketing",
        &[
            "seo", "sem", "campaigns", "analytics", "content", "branding", "social-media",
            "conversion", "crm", "email-marketing",
        ],
    ),
    (
        "devops-engineer",
        &[
            "kubernetes", "docker", "terraform", "aws", "linux", "ci-cd", "monitoring",
            "ansible", "automation", "observability", "bash",
        ],
    ),
];

/// Common misspellings mapped to their correction.
pub const COMMON_MISSPELLINGS: &[(&str, &str)] = &[
    ("accomodate", "accommodate"),
    ("acheive", "achieve"),
    ("acheived", "achieved"),
    ("adress", "address"),
    ("analyse", "analyze"),
    ("begining", "beginning"),
    ("beleive", "believe"),
    ("buisness", "business"),
    ("calender", "calendar"),
    ("collegue", "colleague"),
    ("comunication", "communication"),
    ("definately", "definitely"),
    ("developement", "development"),
    ("enviroment", "environment"),
    ("experiance", "experience"),
    ("goverment", "government"),
    ("independant", "independent"),
    ("knowlege", "knowledge"),
    ("liase", "liaise"),
    ("maintainance", "maintenance"),
    ("managment", "management"),
    ("occured", "occurred"),
    ("oppurtunity", "opportunity"),
    ("proficent", "proficient"),
    ("recieved", "received"),
    ("reponsible", "responsible"),
    ("seperate", "separate"),
    ("sucessful", "successful"),
    ("succesful", "successful"),
    ("teh", "the"),
    ("untill", "until"),
    ("writting", "writing"),
];

pub static ACTION_VERBS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ACTION_VERB_LIST.iter().copied().collect());

pub static STOP_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORD_LIST.iter().copied().collect());

pub static MISSPELLINGS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| COMMON_MISSPELLINGS.iter().copied().collect());

/// Normalize a user-supplied role identifier (`Data Scientist`,
/// `data_scientist`) to table form.
pub fn normalize_role(role: &str) -> String {
    role.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Skill keywords for a role. Unknown roles get an empty list.
pub fn role_keywords(role: &str) -> &'static [&'static str] {
    let normalized = normalize_role(role);
    ROLE_KEYWORDS
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}

pub fn known_roles() -> impl Iterator<Item = &'static str> {
    ROLE_KEYWORDS.iter().map(|(name, _)| *name)
}
