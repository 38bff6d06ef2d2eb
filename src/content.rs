//! Static copy for the landing and about views.

/// Product name shown in the header.
pub const PRODUCT_NAME: &str = "Enhanced Space Biology Network";

/// Short badge shown at the left of the header.
pub const BADGE: &str = "ESBN 2025";

/// Event line shown above the hero text.
pub const EVENT: &str = "NASA Space Apps Challenge 2025";

/// Hero paragraph for the about view.
pub const ABOUT_HERO: &str = "The Enhanced Space Biology Network is an AI-powered knowledge engine designed to synthesize and analyze NASA's comprehensive bioscience research database, enabling breakthrough discoveries for lunar and Mars exploration.";

/// Mission paragraphs for the about view.
pub const MISSION: &[&str] = &[
    "ESBN bridges the gap between vast repositories of space biology research and actionable insights needed for safe, sustainable human exploration of the Moon and Mars.",
    "By leveraging advanced AI and machine learning, we enable researchers, mission planners, and astronauts to quickly access critical knowledge about biological adaptations, countermeasures, and life support systems.",
];

/// Challenge focus blurb for the about view.
pub const CHALLENGE_FOCUS: &str = "Addressing the NASA Space Apps Challenge by creating an intelligent system that analyzes 608 bioscience publications to support lunar and Mars mission planning, astronaut health management, and advanced life support system development.";

/// A headline figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// A feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// A team card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "608", label: "Publications" },
    Stat { value: "12,000+", label: "Experiments" },
    Stat { value: "50+", label: "Institutions" },
    Stat { value: "2010-2025", label: "Time Span" },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "AI-Powered Analysis",
        description: "Advanced machine learning models analyze and synthesize insights from 608 NASA bioscience publications",
    },
    Feature {
        title: "Comprehensive Database",
        description: "Complete repository of space biology research covering microgravity, radiation, and life support systems",
    },
    Feature {
        title: "Knowledge Synthesis",
        description: "Intelligent extraction of patterns, gaps, and actionable insights across multiple research domains",
    },
    Feature {
        title: "Real-Time Search",
        description: "Lightning-fast semantic search powered by neural networks and knowledge graphs",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember { name: "Research Team", role: "Data Analysis & Curation" },
    TeamMember { name: "AI/ML Team", role: "Algorithm Development" },
    TeamMember { name: "Engineering Team", role: "Platform Architecture" },
    TeamMember { name: "Domain Experts", role: "Space Biology Consultation" },
];
