//! Slide 9: REST endpoints and deployment options.

use crate::common::{RGBColor, inches};
use crate::deck::draw::{TextStyle, add_shape, add_text_box};
use crate::deck::layout::{method_color, step};
use crate::deck::palette::{AMBER, BG_CARD, CYAN, GRAY, GREEN, PURPLE, WHITE};
use crate::deck::widgets::add_section_header;
use crate::ooxml::pptx::MutableSlide;

/// Method, path, description.
pub const ENDPOINTS: [(&str, &str, &str); 10] = [
    ("GET", "/api/health", "Health check + version"),
    ("GET", "/api/governance/score", "Score, grade, phase, categories"),
    ("GET", "/api/governance/findings", "All findings + severity breakdown"),
    ("GET", "/api/governance/resources", "Resource inventory summary"),
    ("GET", "/api/governance/resources/detail", "Per-resource scores & findings"),
    ("GET", "/api/governance/breakdown", "Category score breakdown"),
    ("GET", "/api/governance/trends", "Historical score data points"),
    ("GET", "/api/governance/ai-score", "AI score, risks, suggestions"),
    ("POST", "/api/governance/ai-score/refresh", "Trigger immediate AI eval"),
    ("POST", "/api/governance/ai-score/toggle", "Pause/resume AI scanning"),
];

const DEPLOY_OPTIONS: [(&str, &str, RGBColor); 4] = [
    (
        "Kind (Local Dev)",
        "make create-cluster && make all\nOne-command local setup",
        GREEN,
    ),
    (
        "Helm Chart",
        "helm install mcp-governance\n./charts/mcp-governance",
        PURPLE,
    ),
    (
        "Raw Manifests",
        "kubectl apply -f deploy/\nFull control over resources",
        CYAN,
    ),
    (
        "Production (Registry)",
        "Push to GHCR / Docker Hub\nimagePullPolicy: Always",
        AMBER,
    ),
];

pub fn build(slide: &mut MutableSlide) {
    add_section_header(
        slide,
        "REST API & Deployment",
        Some("12 API endpoints + multiple deployment options"),
    );

    add_shape(slide, inches(0.8), inches(2.2), inches(6.5), inches(4.8), BG_CARD, Some(0.05));
    add_text_box(
        slide,
        inches(1.1),
        inches(2.35),
        inches(6.0),
        inches(0.4),
        "📜 REST API Endpoints (port 8090)",
        &TextStyle::new(16.0, WHITE).bold(),
    );
    for (i, (method, path, desc)) in ENDPOINTS.iter().enumerate() {
        let y = step(inches(2.85), i, inches(0.38));
        add_text_box(
            slide,
            inches(1.1),
            y,
            inches(0.6),
            inches(0.3),
            method,
            &TextStyle::new(10.0, method_color(method)).bold(),
        );
        add_text_box(
            slide,
            inches(1.7),
            y,
            inches(2.8),
            inches(0.3),
            path,
            &TextStyle::new(10.0, CYAN),
        );
        add_text_box(
            slide,
            inches(4.5),
            y,
            inches(2.5),
            inches(0.3),
            desc,
            &TextStyle::new(10.0, GRAY),
        );
    }

    add_shape(slide, inches(7.7), inches(2.2), inches(5.0), inches(4.8), BG_CARD, Some(0.05));
    add_text_box(
        slide,
        inches(8.0),
        inches(2.35),
        inches(4.5),
        inches(0.4),
        "🚀 Deployment Options",
        &TextStyle::new(16.0, WHITE).bold(),
    );
    for (i, (title, desc, color)) in DEPLOY_OPTIONS.iter().enumerate() {
        let y = step(inches(2.9), i, inches(1.1));
        add_shape(slide, inches(7.7), y, inches(0.06), inches(0.9), *color, None);
        add_text_box(
            slide,
            inches(8.1),
            y + inches(0.05),
            inches(4.3),
            inches(0.3),
            title,
            &TextStyle::new(13.0, *color).bold(),
        );
        add_text_box(
            slide,
            inches(8.1),
            y + inches(0.35),
            inches(4.3),
            inches(0.55),
            desc,
            &TextStyle::new(10.0, GRAY),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::MutablePresentation;

    #[test]
    fn test_method_labels_colored() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide();
        build(slide);

        let methods: Vec<_> = slide
            .shapes()
            .iter()
            .filter(|s| {
                s.is_text_box() && s.frame().x == inches(1.1) && s.frame().width == inches(0.6)
            })
            .map(|s| {
                let run = &s.text_body().paragraphs()[0].runs()[0];
                (run.text().to_string(), run.format().color)
            })
            .collect();
        assert_eq!(methods.len(), ENDPOINTS.len());
        assert_eq!(methods[0], ("GET".to_string(), Some(GREEN)));
        assert_eq!(methods[9], ("POST".to_string(), Some(AMBER)));
    }
}
