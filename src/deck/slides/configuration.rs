//! Slide 8: the two custom resources.

use crate::common::{RGBColor, inches};
use crate::deck::draw::{BulletStyle, TextStyle, add_bullet_list, add_shape, add_text_box};
use crate::deck::palette::{BG_CARD, CYAN, GRAY, PURPLE, PURPLE_LIGHT};
use crate::deck::widgets::add_section_header;
use crate::ooxml::pptx::MutableSlide;

const POLICY_ITEMS: [&str; 7] = [
    "require* flags — toggle each governance category",
    "scoringWeights — customize category importance",
    "severityPenalties — tune penalty per severity",
    "targetNamespaces / excludeNamespaces — scope control",
    "maxToolsWarning / maxToolsCritical — tool thresholds",
    "aiAgent block — provider, model, scan interval, on/off",
    "Status subresource — auto-populated with score & phase",
];

const EVALUATION_ITEMS: [&str; 7] = [
    "policyRef — references the governance policy",
    "evaluationScope — cluster / namespace / resource",
    "status.score — overall governance score (0–100)",
    "status.findings — full list with remediation steps",
    "status.scoreBreakdown — per-category scores",
    "status.resourceSummary — discovered resource counts",
    "status.namespaceScores — per-namespace breakdown",
];

/// One resource panel: card, heading, scope line and field list.
#[allow(clippy::too_many_arguments)]
fn resource_panel(
    slide: &mut MutableSlide,
    left: f64,
    text_left: f64,
    heading: &str,
    scope: &str,
    items: &[&str],
    color: RGBColor,
    bullet_color: RGBColor,
) {
    add_shape(slide, inches(left), inches(2.2), inches(5.8), inches(4.8), BG_CARD, Some(0.05));
    let text_left = inches(text_left);
    add_text_box(
        slide,
        text_left,
        inches(2.4),
        inches(5.5),
        inches(0.4),
        heading,
        &TextStyle::new(20.0, color).bold(),
    );
    add_text_box(
        slide,
        text_left,
        inches(2.85),
        inches(5.5),
        inches(0.35),
        scope,
        &TextStyle::new(12.0, GRAY),
    );
    let style = BulletStyle {
        size: 13.0,
        bullet_color,
        ..BulletStyle::default()
    };
    add_bullet_list(slide, text_left, inches(3.3), inches(5.5), inches(3.5), items, &style);
}

pub fn build(slide: &mut MutableSlide) {
    add_section_header(
        slide,
        "Configuration & Custom Resources",
        Some("Everything is driven by Kubernetes CRDs — no external config needed"),
    );

    resource_panel(
        slide,
        0.8,
        1.1,
        "📋 MCPGovernancePolicy",
        "Cluster-scoped  •  Short name: mgp",
        &POLICY_ITEMS,
        PURPLE,
        PURPLE_LIGHT,
    );
    resource_panel(
        slide,
        7.0,
        7.3,
        "📊 GovernanceEvaluation",
        "Cluster-scoped  •  Short names: ge, goveval",
        &EVALUATION_ITEMS,
        CYAN,
        CYAN,
    );
}
