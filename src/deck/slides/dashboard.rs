//! Slide 7: dashboard features.

use crate::common::inches;
use crate::deck::draw::{TextStyle, add_text_box};
use crate::deck::layout::{grid_cell, step};
use crate::deck::palette::{AMBER, CYAN, GRAY, GREEN, PINK, PURPLE, PURPLE_LIGHT, SLATE, VIOLET};
use crate::deck::widgets::{IconCard, add_icon_card, add_section_header};
use crate::ooxml::pptx::MutableSlide;

const FEATURES: [IconCard<'static>; 8] = [
    IconCard {
        icon: "📊",
        title: "Score Gauge",
        desc: "Animated 0–100 dial with\ngrade (A–F) and phase",
        accent: PURPLE,
    },
    IconCard {
        icon: "🧠",
        title: "AI Score Card",
        desc: "AI analysis with risks,\nsuggestions, refresh/pause",
        accent: PURPLE_LIGHT,
    },
    IconCard {
        icon: "📈",
        title: "Trend Chart",
        desc: "Historical score and\nfinding count over time",
        accent: CYAN,
    },
    IconCard {
        icon: "🔍",
        title: "Findings Table",
        desc: "Filterable by severity,\ncategory, resource",
        accent: AMBER,
    },
    IconCard {
        icon: "📦",
        title: "Resource Cards",
        desc: "Agents, MCPServers,\nGateways, Endpoints",
        accent: GREEN,
    },
    IconCard {
        icon: "📋",
        title: "Category Breakdown",
        desc: "Per-category scores\nwith weight visualization",
        accent: VIOLET,
    },
    IconCard {
        icon: "💡",
        title: "Score Explainer",
        desc: "Human-readable scoring\nexplanation",
        accent: PINK,
    },
    IconCard {
        icon: "🗂️",
        title: "Resource Inventory",
        desc: "Per-resource drill-down\nwith individual scores",
        accent: SLATE,
    },
];

pub fn build(slide: &mut MutableSlide) {
    add_section_header(
        slide,
        "Enterprise Dashboard",
        Some("Real-time visibility into your MCP security posture"),
    );

    for (i, card) in FEATURES.iter().enumerate() {
        let (col, row) = grid_cell(i, 4);
        let x = step(inches(0.5), col, inches(3.2));
        let y = step(inches(2.2), row, inches(2.4));
        add_icon_card(slide, x, y, inches(2.9), inches(2.0), card);
    }

    add_text_box(
        slide,
        inches(0.8),
        inches(6.8),
        inches(12.0),
        inches(0.5),
        "3 Tabs:   📊 Overview   |   📦 Resources   |   🔍 Findings        •  Auto-refresh every 15 seconds",
        &TextStyle::new(14.0, GRAY).centered(),
    );
}
