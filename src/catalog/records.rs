//! Compiled-in publication catalog.

use crate::catalog::models::ResultRecord;

/// Every record the results view can show, in source order.
pub static RECORDS: [ResultRecord; 5] = [
    ResultRecord {
        id: 1,
        title: "Microgravity-Induced Changes in Skeletal Muscle Mitochondrial Function",
        authors: &["Smith, J.", "Johnson, M.", "Williams, K."],
        year: 2023,
        institution: "NASA Ames Research Center",
        abstract_text: "This study examines the effects of prolonged microgravity exposure on mitochondrial function in skeletal muscle tissue. Results indicate significant alterations in oxidative phosphorylation and ATP production.",
        keywords: &["Microgravity", "Mitochondria", "Muscle Atrophy", "Spaceflight"],
        citations: 45,
        relevance: 98,
    },
    ResultRecord {
        id: 2,
        title: "Gene Expression Profiles During Long-Duration Spaceflight",
        authors: &["Chen, L.", "Rodriguez, A.", "Patel, S."],
        year: 2024,
        institution: "Johnson Space Center",
        abstract_text: "Comprehensive transcriptomic analysis of astronaut samples collected before, during, and after 6-month ISS missions reveals adaptive immune responses and metabolic pathway modifications.",
        keywords: &["Genomics", "Transcriptomics", "ISS", "Long-duration Flight"],
        citations: 67,
        relevance: 95,
    },
    ResultRecord {
        id: 3,
        title: "Radiation Effects on Neural Stem Cell Differentiation",
        authors: &["Anderson, T.", "Brown, E."],
        year: 2023,
        institution: "Kennedy Space Center",
        abstract_text: "Investigation of cosmic radiation impacts on neural stem cell proliferation and differentiation patterns using ground-based analogs and space-flown samples.",
        keywords: &["Radiation Biology", "Neuroscience", "Stem Cells", "Space Medicine"],
        citations: 32,
        relevance: 87,
    },
    ResultRecord {
        id: 4,
        title: "Cardiovascular Adaptation in Simulated Mars Gravity",
        authors: &["Martinez, R.", "Lee, H.", "Thompson, D."],
        year: 2024,
        institution: "Glenn Research Center",
        abstract_text: "Study of cardiovascular system responses to Mars-equivalent gravity (0.38g) in human subjects using partial gravity analogs over 30-day periods.",
        keywords: &["Cardiovascular", "Mars Simulation", "Partial Gravity", "Countermeasures"],
        citations: 28,
        relevance: 84,
    },
    ResultRecord {
        id: 5,
        title: "Plant Growth Optimization in Lunar Regolith Simulant",
        authors: &["Davis, K.", "White, J."],
        year: 2023,
        institution: "Langley Research Center",
        abstract_text: "Analysis of plant growth parameters and nutrient uptake in various lunar regolith simulant compositions with biological amendments.",
        keywords: &["Plant Biology", "Lunar Agriculture", "ISRU", "Life Support"],
        citations: 41,
        relevance: 79,
    },
];
