//! Slide 5: grades, category weights and the scoring formula.

use crate::common::{RGBColor, inches};
use crate::deck::draw::{TextStyle, add_shape, add_text_box};
use crate::deck::layout::{bar_width, step, weight_color};
use crate::deck::palette::{
    AMBER, BG_CARD, CYAN, GRAY, GREEN, LIGHT_GRAY, ORANGE, RED, WHITE, YELLOW,
};
use crate::deck::widgets::add_section_header;
use crate::ooxml::pptx::MutableSlide;

/// Weight of the heaviest category; its bar spans the full width.
pub const MAX_WEIGHT: u32 = 25;

const GRADES: [(&str, &str, &str, RGBColor); 5] = [
    ("A", "90–100", "Compliant", GREEN),
    ("B", "70–89", "Warning", CYAN),
    ("C", "50–69", "NonCompliant", AMBER),
    ("D", "30–49", "NonCompliant", ORANGE),
    ("F", "0–29", "Critical", RED),
];

/// Category name, weight in percent, severity.
pub const CATEGORIES: [(&str, u32, &str); 8] = [
    ("AgentGateway Compliance", 25, "Critical"),
    ("Authentication (JWT)", 20, "High"),
    ("Authorization (RBAC)", 15, "High"),
    ("TLS Encryption", 10, "High"),
    ("CORS Policy", 10, "Medium"),
    ("Prompt Guard", 10, "Medium"),
    ("Rate Limiting", 5, "Medium"),
    ("Tool Scope", 5, "Warning"),
];

const PENALTIES: [(&str, &str, RGBColor); 4] = [
    ("Critical", "−40 pts", RED),
    ("High", "−25 pts", AMBER),
    ("Medium", "−15 pts", YELLOW),
    ("Low", "−5 pts", GRAY),
];

pub fn build(slide: &mut MutableSlide) {
    add_section_header(
        slide,
        "Scoring Model",
        Some("Policy-driven 0–100 governance score across 8 categories"),
    );

    // Score gauge panel
    add_shape(slide, inches(0.8), inches(2.2), inches(3.5), inches(4.5), BG_CARD, Some(0.05));
    add_text_box(
        slide,
        inches(0.8),
        inches(2.5),
        inches(3.5),
        inches(0.5),
        "Score Gauge",
        &TextStyle::new(18.0, WHITE).bold().centered(),
    );
    for (i, (grade, range, phase, color)) in GRADES.iter().enumerate() {
        let y = step(inches(3.1), i, inches(0.65));
        add_shape(slide, inches(1.1), y, inches(0.5), inches(0.5), *color, Some(0.1));
        add_text_box(
            slide,
            inches(1.1),
            y + inches(0.02),
            inches(0.5),
            inches(0.5),
            grade,
            &TextStyle::new(20.0, WHITE).bold().centered(),
        );
        add_text_box(
            slide,
            inches(1.8),
            y + inches(0.05),
            inches(1.0),
            inches(0.4),
            range,
            &TextStyle::new(14.0, LIGHT_GRAY),
        );
        add_text_box(
            slide,
            inches(2.8),
            y + inches(0.05),
            inches(1.3),
            inches(0.4),
            phase,
            &TextStyle::new(12.0, *color),
        );
    }

    // Category weights
    add_text_box(
        slide,
        inches(4.8),
        inches(2.2),
        inches(4.0),
        inches(0.4),
        "Category Weights",
        &TextStyle::new(18.0, WHITE).bold(),
    );
    let max_bar = inches(2.5);
    for (i, (category, weight, _severity)) in CATEGORIES.iter().enumerate() {
        let y = step(inches(2.75), i, inches(0.52));
        add_text_box(
            slide,
            inches(4.8),
            y,
            inches(2.5),
            inches(0.35),
            category,
            &TextStyle::new(11.0, LIGHT_GRAY),
        );
        let width = bar_width(max_bar, *weight, MAX_WEIGHT);
        add_shape(
            slide,
            inches(7.3),
            y + inches(0.05),
            width,
            inches(0.25),
            weight_color(*weight),
            Some(0.15),
        );
        add_text_box(
            slide,
            inches(7.3),
            y + inches(0.02),
            width,
            inches(0.3),
            &format!("{}%", weight),
            &TextStyle::new(10.0, WHITE).bold().centered(),
        );
    }

    // Formula
    add_shape(slide, inches(9.5), inches(2.2), inches(3.5), inches(2.3), BG_CARD, Some(0.05));
    add_text_box(
        slide,
        inches(9.5),
        inches(2.3),
        inches(3.5),
        inches(0.4),
        "Scoring Formula",
        &TextStyle::new(16.0, WHITE).bold().centered(),
    );
    let label = TextStyle::new(13.0, CYAN).bold();
    let formula = TextStyle::new(12.0, LIGHT_GRAY);
    add_text_box(
        slide,
        inches(9.7),
        inches(2.8),
        inches(3.1),
        inches(0.5),
        "Category Score =",
        &label,
    );
    add_text_box(
        slide,
        inches(9.7),
        inches(3.15),
        inches(3.1),
        inches(0.4),
        "max(0, 100 - Σ penalties)",
        &formula,
    );
    add_text_box(
        slide,
        inches(9.7),
        inches(3.6),
        inches(3.1),
        inches(0.5),
        "Cluster Score =",
        &label,
    );
    add_text_box(
        slide,
        inches(9.7),
        inches(3.95),
        inches(3.1),
        inches(0.4),
        "Σ(score × weight) / Σ weights",
        &formula,
    );

    // Severity penalties
    add_shape(slide, inches(9.5), inches(4.8), inches(3.5), inches(1.9), BG_CARD, Some(0.05));
    add_text_box(
        slide,
        inches(9.5),
        inches(4.9),
        inches(3.5),
        inches(0.4),
        "Severity Penalties",
        &TextStyle::new(16.0, WHITE).bold().centered(),
    );
    for (i, (severity, points, color)) in PENALTIES.iter().enumerate() {
        let y = step(inches(5.4), i, inches(0.32));
        add_text_box(
            slide,
            inches(9.9),
            y,
            inches(1.5),
            inches(0.3),
            severity,
            &TextStyle::new(12.0, *color).bold(),
        );
        add_text_box(
            slide,
            inches(11.5),
            y,
            inches(1.2),
            inches(0.3),
            points,
            &TextStyle::new(12.0, LIGHT_GRAY),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::MutablePresentation;

    #[test]
    fn test_weight_bars() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide();
        build(slide);

        let bars: Vec<_> = slide
            .shapes()
            .iter()
            .filter(|s| s.frame().x == inches(7.3) && !s.is_text_box())
            .collect();
        assert_eq!(bars.len(), CATEGORIES.len());
        assert_eq!(bars[0].frame().width, inches(2.5));
        assert_eq!(bars[0].fill_color(), Some(GREEN));
        assert_eq!(bars[2].fill_color(), Some(CYAN));
        assert_eq!(bars[7].frame().width, inches(2.5) / 5);
        assert_eq!(bars[7].fill_color(), Some(AMBER));
    }
}
