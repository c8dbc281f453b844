//! Slide 11: closing summary.

use crate::common::inches;
use crate::deck::draw::{TextStyle, add_circle, add_shape, add_text_box};
use crate::deck::layout::step;
use crate::deck::palette::{BG_CARD, GRAY, PURPLE, PURPLE_LIGHT, WHITE};
use crate::ooxml::pptx::MutableSlide;

/// Headline number and its label.
const STATS: [(&str, &str); 5] = [
    ("8", "Governance\nCategories"),
    ("0–100", "Weighted\nScore"),
    ("2", "LLM\nProviders"),
    ("12", "REST API\nEndpoints"),
    ("130+", "Unit\nTests"),
];

pub fn build(slide: &mut MutableSlide) {
    add_circle(slide, inches(10.0), inches(0.5), inches(3.5), PURPLE);
    add_circle(slide, inches(0.5), inches(4.5), inches(3.0), PURPLE_LIGHT);

    add_text_box(
        slide,
        inches(2.0),
        inches(1.5),
        inches(9.5),
        inches(1.0),
        "MCP Governance",
        &TextStyle::new(48.0, WHITE).bold().centered(),
    );

    add_shape(slide, inches(5.15), inches(2.6), inches(3.0), inches(0.5), PURPLE_LIGHT, Some(0.15));
    add_text_box(
        slide,
        inches(5.15),
        inches(2.62),
        inches(3.0),
        inches(0.5),
        "🧠  AI-Powered",
        &TextStyle::new(22.0, WHITE).bold().centered(),
    );

    add_text_box(
        slide,
        inches(2.0),
        inches(3.4),
        inches(9.5),
        inches(0.8),
        "Secure your AI agent infrastructure with\npolicy-driven governance and AI-powered insights.",
        &TextStyle::new(20.0, GRAY).centered(),
    );

    for (i, (number, label)) in STATS.iter().enumerate() {
        let x = step(inches(1.3), i, inches(2.2));
        add_shape(slide, x, inches(4.6), inches(1.8), inches(1.3), BG_CARD, Some(0.06));
        add_text_box(
            slide,
            x,
            inches(4.7),
            inches(1.8),
            inches(0.6),
            number,
            &TextStyle::new(32.0, PURPLE_LIGHT).bold().centered(),
        );
        add_text_box(
            slide,
            x,
            inches(5.2),
            inches(1.8),
            inches(0.6),
            label,
            &TextStyle::new(11.0, GRAY).centered(),
        );
    }

    add_text_box(
        slide,
        inches(2.0),
        inches(6.3),
        inches(9.5),
        inches(0.5),
        "🔗 github.com/techwithhuz/mcp-security-governance    |    📄 MIT License",
        &TextStyle::new(16.0, GRAY).centered(),
    );
}
