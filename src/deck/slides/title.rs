//! Slide 1: title.

use crate::common::inches;
use crate::deck::draw::{TextStyle, add_circle, add_shape, add_text_box};
use crate::deck::layout::step;
use crate::deck::palette::{BG_CARD, GRAY, LIGHT_GRAY, PINK, PURPLE, PURPLE_LIGHT, WHITE};
use crate::ooxml::pptx::MutableSlide;

const TECH_BADGES: [&str; 6] = [
    "☸ Kubernetes",
    "🐹 Go 1.25",
    "⚛ Next.js 14",
    "🤖 Google Gemini",
    "🦙 Ollama",
    "📦 Helm 3",
];

pub fn build(slide: &mut MutableSlide) {
    for (left, top, diameter, color) in [
        (11.0, 1.0, 3.0, PURPLE),
        (1.0, 5.0, 2.5, PURPLE_LIGHT),
        (9.0, 5.5, 1.5, PINK),
    ] {
        add_circle(slide, inches(left), inches(top), inches(diameter), color);
    }

    add_text_box(
        slide,
        inches(5.5),
        inches(0.8),
        inches(2.5),
        inches(1.2),
        "🛡️",
        &TextStyle::new(64.0, WHITE).centered(),
    );
    add_text_box(
        slide,
        inches(1.5),
        inches(2.1),
        inches(10.5),
        inches(1.0),
        "MCP Governance",
        &TextStyle::new(54.0, WHITE).bold().centered(),
    );

    // AI-Powered badge
    add_shape(slide, inches(5.15), inches(3.2), inches(3.0), inches(0.5), PURPLE_LIGHT, Some(0.15));
    add_text_box(
        slide,
        inches(5.15),
        inches(3.22),
        inches(3.0),
        inches(0.5),
        "🧠  AI-Powered",
        &TextStyle::new(22.0, WHITE).bold().centered(),
    );

    add_text_box(
        slide,
        inches(2.0),
        inches(4.0),
        inches(9.5),
        inches(0.8),
        "Kubernetes-native governance for MCP (Model Context Protocol) infrastructure",
        &TextStyle::new(20.0, GRAY).centered(),
    );

    let badge_width = inches(1.7);
    for (i, badge) in TECH_BADGES.iter().enumerate() {
        let x = step(inches(1.5), i, badge_width + inches(0.15));
        add_shape(slide, x, inches(5.2), badge_width, inches(0.45), BG_CARD, Some(0.1));
        add_text_box(
            slide,
            x,
            inches(5.22),
            badge_width,
            inches(0.45),
            badge,
            &TextStyle::new(12.0, LIGHT_GRAY).centered(),
        );
    }

    add_text_box(
        slide,
        inches(3.0),
        inches(6.5),
        inches(7.5),
        inches(0.5),
        "github.com/techwithhuz/mcp-security-governance",
        &TextStyle::new(14.0, GRAY).centered(),
    );
}
