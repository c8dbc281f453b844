//! Slide 6: AI-powered scoring.

use crate::common::{RGBColor, inches};
use crate::deck::draw::{BULLET, TextStyle, add_shape, add_text_box};
use crate::deck::layout::step;
use crate::deck::palette::{BG_CARD, CYAN, GRAY, GREEN, LIGHT_GRAY, PURPLE_LIGHT, WHITE};
use crate::deck::widgets::add_section_header;
use crate::ooxml::pptx::MutableSlide;

const AI_FEATURES: [(&str, &str); 5] = [
    ("🎯  AI Score", "Independent 0–100 score with grade, generated by the LLM"),
    ("💬  Reasoning", "Human-readable explanation of why the AI assigned its score"),
    ("⚠️  Risk Analysis", "Categorized risks with severity, description, and impact"),
    ("💡  Suggestions", "Prioritized, actionable remediation steps"),
    ("⚖️  Comparison", "Side-by-side AI score vs algorithmic score"),
];

/// Name, model, description, accent.
const PROVIDERS: [(&str, &str, &str, RGBColor); 2] = [
    (
        "Google Gemini",
        "gemini-2.5-flash",
        "Cloud API\n20 req/day (free tier)\nGOOGLE_API_KEY secret",
        PURPLE_LIGHT,
    ),
    (
        "Ollama (Local)",
        "llama3.1, qwen2.5, etc.",
        "Air-gapped / private\nOpenAI-compatible API\nNo API key needed",
        GREEN,
    ),
];

const RATE_ITEMS: [&str; 5] = [
    "Configurable scan\ninterval (default: 5m)",
    "Exponential backoff\n5m → 10m → 20m → 30m",
    "Auto-reset on success",
    "Dashboard refresh\nbypasses rate limit",
    "Pause/Resume toggle\nwithout CR changes",
];

pub fn build(slide: &mut MutableSlide) {
    add_section_header(
        slide,
        "🧠 AI-Powered Governance Scoring",
        Some("Deep risk analysis powered by Google Gemini or local Ollama"),
    );

    // What the agent provides
    add_shape(slide, inches(0.8), inches(2.2), inches(5.5), inches(4.8), BG_CARD, Some(0.05));
    add_text_box(
        slide,
        inches(1.1),
        inches(2.4),
        inches(5.0),
        inches(0.4),
        "What the AI Agent Provides",
        &TextStyle::new(18.0, PURPLE_LIGHT).bold(),
    );
    for (i, (title, desc)) in AI_FEATURES.iter().enumerate() {
        let y = step(inches(3.0), i, inches(0.75));
        add_text_box(
            slide,
            inches(1.1),
            y,
            inches(2.5),
            inches(0.35),
            title,
            &TextStyle::new(14.0, WHITE).bold(),
        );
        add_text_box(
            slide,
            inches(1.1),
            y + inches(0.3),
            inches(5.0),
            inches(0.35),
            desc,
            &TextStyle::new(11.0, GRAY),
        );
    }

    // Provider cards
    for (i, (name, model, desc, color)) in PROVIDERS.iter().enumerate() {
        let y = step(inches(2.2), i, inches(2.5));
        add_shape(slide, inches(6.8), y, inches(2.8), inches(2.2), BG_CARD, Some(0.05));
        add_shape(slide, inches(6.8), y, inches(0.06), inches(2.2), *color, None);
        add_text_box(
            slide,
            inches(7.1),
            y + inches(0.2),
            inches(2.4),
            inches(0.35),
            name,
            &TextStyle::new(16.0, *color).bold(),
        );
        add_text_box(
            slide,
            inches(7.1),
            y + inches(0.6),
            inches(2.4),
            inches(0.3),
            &format!("Model: {}", model),
            &TextStyle::new(11.0, LIGHT_GRAY),
        );
        add_text_box(
            slide,
            inches(7.1),
            y + inches(0.95),
            inches(2.4),
            inches(1.0),
            desc,
            &TextStyle::new(10.0, GRAY),
        );
    }

    // Rate limiting
    add_shape(slide, inches(10.0), inches(2.2), inches(2.8), inches(4.8), BG_CARD, Some(0.05));
    add_text_box(
        slide,
        inches(10.0),
        inches(2.3),
        inches(2.8),
        inches(0.4),
        "⏱️ Smart Rate Limiting",
        &TextStyle::new(14.0, CYAN).bold().centered(),
    );
    for (i, item) in RATE_ITEMS.iter().enumerate() {
        add_text_box(
            slide,
            inches(10.2),
            step(inches(2.85), i, inches(0.8)),
            inches(2.5),
            inches(0.7),
            &format!("{}{}", BULLET, item),
            &TextStyle::new(10.0, LIGHT_GRAY),
        );
    }
}
