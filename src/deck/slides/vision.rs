//! Slide 3: the four pillars.

use crate::common::inches;
use crate::deck::draw::{TextStyle, add_shape, add_text_box};
use crate::deck::layout::step;
use crate::deck::palette::{CYAN, GRAY, GREEN, PURPLE, PURPLE_LIGHT, WHITE};
use crate::deck::widgets::{IconCard, add_icon_card, add_section_header};
use crate::ooxml::pptx::MutableSlide;

const PILLARS: [IconCard<'static>; 4] = [
    IconCard {
        icon: "🔍",
        title: "Discover",
        desc: "Automatically find all MCP\nresources across every\nnamespace in your cluster",
        accent: CYAN,
    },
    IconCard {
        icon: "📏",
        title: "Evaluate",
        desc: "Score security posture with\nconfigurable policies across\n8 governance categories",
        accent: PURPLE,
    },
    IconCard {
        icon: "🧠",
        title: "Analyze",
        desc: "AI-powered deep risk analysis\nwith reasoning, risks, and\nactionable suggestions",
        accent: PURPLE_LIGHT,
    },
    IconCard {
        icon: "📊",
        title: "Visualize",
        desc: "Real-time enterprise dashboard\nwith trends, findings, and\nper-resource drill-down",
        accent: GREEN,
    },
];

pub fn build(slide: &mut MutableSlide) {
    add_section_header(
        slide,
        "The Vision",
        Some("A unified governance layer for the MCP ecosystem"),
    );

    for (i, card) in PILLARS.iter().enumerate() {
        let x = step(inches(0.6), i, inches(3.15));
        add_icon_card(slide, x, inches(2.3), inches(2.85), inches(2.8), card);

        // Number badge
        add_shape(
            slide,
            x + inches(2.1),
            inches(2.2),
            inches(0.55),
            inches(0.55),
            card.accent,
            Some(0.15),
        );
        add_text_box(
            slide,
            x + inches(2.1),
            inches(2.22),
            inches(0.55),
            inches(0.55),
            &(i + 1).to_string(),
            &TextStyle::new(18.0, WHITE).bold().centered(),
        );
    }

    for i in 0..3 {
        add_text_box(
            slide,
            step(inches(3.2), i, inches(3.15)),
            inches(3.3),
            inches(0.5),
            inches(0.5),
            "→",
            &TextStyle::new(28.0, GRAY).centered(),
        );
    }

    add_text_box(
        slide,
        inches(1.5),
        inches(5.8),
        inches(10.5),
        inches(0.8),
        "\"Shift-left security for AI agent infrastructure — catch misconfigurations before they become breaches.\"",
        &TextStyle::new(16.0, GRAY).centered(),
    );
}
