//! Slide 2: why governance is needed.

use crate::common::inches;
use crate::deck::draw::{TextStyle, add_shape, add_text_box};
use crate::deck::layout::{grid_cell, step};
use crate::deck::palette::{AMBER, BG_CARD, PURPLE_LIGHT, RED};
use crate::deck::widgets::{IconCard, add_icon_card, add_section_header};
use crate::ooxml::pptx::MutableSlide;

const PROBLEMS: [IconCard<'static>; 6] = [
    IconCard {
        icon: "🔓",
        title: "No Authentication",
        desc: "MCP servers exposed without\nJWT or mTLS authentication",
        accent: RED,
    },
    IconCard {
        icon: "🌐",
        title: "No Gateway Control",
        desc: "Direct access to MCP tools\nwithout proxy enforcement",
        accent: RED,
    },
    IconCard {
        icon: "🔑",
        title: "No Authorization",
        desc: "No RBAC policies controlling\nwhich agents access which tools",
        accent: AMBER,
    },
    IconCard {
        icon: "📡",
        title: "No Encryption",
        desc: "MCP traffic flowing without\nTLS encryption",
        accent: AMBER,
    },
    IconCard {
        icon: "🧰",
        title: "Tool Sprawl",
        desc: "Servers exposing too many tools\nincreasing attack surface",
        accent: AMBER,
    },
    IconCard {
        icon: "👁️",
        title: "No Visibility",
        desc: "No dashboard or scoring to\nunderstand security posture",
        accent: PURPLE_LIGHT,
    },
];

pub fn build(slide: &mut MutableSlide) {
    add_section_header(
        slide,
        "Why MCP Governance?",
        Some("The Problem: AI Agents Are Expanding — Without Guardrails"),
    );

    for (i, card) in PROBLEMS.iter().enumerate() {
        let (col, row) = grid_cell(i, 3);
        let x = step(inches(0.8), col, inches(4.1));
        let y = step(inches(2.2), row, inches(2.5));
        add_icon_card(slide, x, y, inches(3.7), inches(2.1), card);
    }

    add_shape(slide, inches(3.0), inches(6.7), inches(7.5), inches(0.55), BG_CARD, Some(0.08));
    add_text_box(
        slide,
        inches(3.0),
        inches(6.72),
        inches(7.5),
        inches(0.55),
        "⚠️  Without governance, every MCP server is a potential security gap",
        &TextStyle::new(15.0, AMBER).bold().centered(),
    );
}
