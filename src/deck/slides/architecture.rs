//! Slide 4: architecture and data flow.

use crate::common::{RGBColor, inches};
use crate::deck::draw::{TextStyle, add_shape, add_text_box};
use crate::deck::layout::step;
use crate::deck::palette::{
    AMBER, BG_CARD, CYAN, GRAY, GREEN, LIGHT_GRAY, PINK, PURPLE, RED, SLATE, VIOLET, WHITE,
};
use crate::deck::widgets::add_section_header;
use crate::ooxml::pptx::MutableSlide;

struct Component {
    /// left, top, width, height in inches
    rect: (f64, f64, f64, f64),
    title: &'static str,
    desc: &'static str,
    color: RGBColor,
}

const COMPONENTS: [Component; 3] = [
    Component {
        rect: (0.8, 2.3, 2.5, 1.5),
        title: "🖥️ Dashboard",
        desc: "Next.js 14\nAuto-refresh 15s\nPort :3000",
        color: PURPLE,
    },
    Component {
        rect: (4.0, 2.3, 5.0, 1.5),
        title: "⚙️ Governance Controller",
        desc: "Go API Server :8090  |  Scoring Engine  |  🧠 AI Agent  |  Discovery",
        color: CYAN,
    },
    Component {
        rect: (10.0, 2.3, 2.5, 1.5),
        title: "☸ K8s API",
        desc: "list / watch\nAll namespaces",
        color: SLATE,
    },
];

const RESOURCES: [(&str, &str, RGBColor); 5] = [
    ("🛡️", "AgentGateway\nBackends, Policies", AMBER),
    ("🤖", "Kagent\nAgents, MCPServers", GREEN),
    ("🌐", "Gateway API\nGateways, HTTPRoutes", VIOLET),
    ("📋", "Governance CRDs\nPolicy, Evaluation", RED),
    ("🧠", "LLM Providers\nGemini, Ollama", PINK),
];

const FLOW_STEPS: [&str; 6] = [
    "1. Controller discovers MCP resources every 30s",
    "2. Reads MCPGovernancePolicy CRD for rules",
    "3. Evaluator scores across 8 categories (0–100)",
    "4. AI Agent sends state to LLM for deep analysis",
    "5. Results exposed via REST API + written to CRD",
    "6. Dashboard polls API every 15s for real-time view",
];

pub fn build(slide: &mut MutableSlide) {
    add_section_header(slide, "How It Works", Some("Architecture & Data Flow"));

    for component in &COMPONENTS {
        let (x, y, w, h) = component.rect;
        let (x, y, w, h) = (inches(x), inches(y), inches(w), inches(h));
        add_shape(slide, x, y, w, h, BG_CARD, Some(0.04));
        add_shape(slide, x, y, w, inches(0.04), component.color, None);
        add_text_box(
            slide,
            x + inches(0.2),
            y + inches(0.15),
            w - inches(0.4),
            inches(0.4),
            component.title,
            &TextStyle::new(16.0, component.color).bold(),
        );
        add_text_box(
            slide,
            x + inches(0.2),
            y + inches(0.6),
            w - inches(0.4),
            inches(0.8),
            component.desc,
            &TextStyle::new(11.0, GRAY),
        );
    }

    let arrow = TextStyle::new(20.0, GRAY).centered();
    add_text_box(slide, inches(3.3), inches(2.7), inches(0.7), inches(0.5), "←→", &arrow);
    add_text_box(slide, inches(9.1), inches(2.7), inches(0.9), inches(0.5), "←→", &arrow);

    for (i, (icon, label, color)) in RESOURCES.iter().enumerate() {
        let x = step(inches(0.5), i, inches(2.55));
        add_shape(slide, x, inches(4.5), inches(2.3), inches(1.2), BG_CARD, Some(0.04));
        add_text_box(
            slide,
            x + inches(0.15),
            inches(4.55),
            inches(0.5),
            inches(0.5),
            icon,
            &TextStyle::new(22.0, *color),
        );
        add_text_box(
            slide,
            x + inches(0.6),
            inches(4.55),
            inches(1.6),
            inches(1.1),
            label,
            &TextStyle::new(11.0, LIGHT_GRAY),
        );
    }

    add_text_box(
        slide,
        inches(0.8),
        inches(6.0),
        inches(12.0),
        inches(0.4),
        "Data Flow:",
        &TextStyle::new(14.0, WHITE).bold(),
    );
    add_text_box(
        slide,
        inches(0.8),
        inches(6.35),
        inches(12.0),
        inches(0.5),
        &FLOW_STEPS.join("   →   "),
        &TextStyle::new(10.0, GRAY),
    );
}
