//! Slide 10: pipelines and test coverage.

use crate::common::inches;
use crate::deck::draw::{BulletStyle, TextStyle, add_bullet_list, add_shape, add_text_box};
use crate::deck::layout::step;
use crate::deck::palette::{BG_CARD, CYAN, GRAY, GREEN, PURPLE_LIGHT, WHITE};
use crate::deck::widgets::add_section_header;
use crate::ooxml::pptx::MutableSlide;

const CI_ITEMS: [&str; 3] = [
    "go vet → go test → go build (controller)",
    "npm ci → npm run build (dashboard)",
    "helm lint (chart validation)",
];

const RELEASE_ITEMS: [&str; 3] = [
    "Multi-arch images (amd64 + arm64) → GHCR",
    "Helm chart → GHCR OCI registry",
    "GitHub Release with install instructions",
];

/// Package, test count, coverage summary.
const TEST_PACKAGES: [(&str, &str, &str); 3] = [
    (
        "pkg/evaluator",
        "85+ tests",
        "All 9 governance checks, scoring engine, penalties, weights, edge cases",
    ),
    (
        "pkg/discovery",
        "17 tests",
        "Nested object traversal helpers (getNestedMap, String, Int, Slice)",
    ),
    (
        "cmd/api",
        "30+ tests",
        "All HTTP handlers, helpers, CORS, trend recording, JSON responses",
    ),
];

pub fn build(slide: &mut MutableSlide) {
    add_section_header(
        slide,
        "CI/CD & Testing",
        Some("Automated pipelines with comprehensive test coverage"),
    );

    // CI pipeline
    add_shape(slide, inches(0.8), inches(2.2), inches(5.8), inches(2.3), BG_CARD, Some(0.05));
    add_text_box(
        slide,
        inches(1.1),
        inches(2.35),
        inches(5.5),
        inches(0.4),
        "🔄 CI Pipeline (Push / PR to main)",
        &TextStyle::new(16.0, GREEN).bold(),
    );
    add_bullet_list(
        slide,
        inches(1.1),
        inches(2.85),
        inches(5.5),
        inches(1.5),
        &CI_ITEMS,
        &BulletStyle {
            size: 13.0,
            bullet_color: GREEN,
            ..BulletStyle::default()
        },
    );

    // Release pipeline
    add_shape(slide, inches(7.0), inches(2.2), inches(5.8), inches(2.3), BG_CARD, Some(0.05));
    add_text_box(
        slide,
        inches(7.3),
        inches(2.35),
        inches(5.5),
        inches(0.4),
        "🏷️ Release Pipeline (Push v* tag)",
        &TextStyle::new(16.0, PURPLE_LIGHT).bold(),
    );
    add_bullet_list(
        slide,
        inches(7.3),
        inches(2.85),
        inches(5.5),
        inches(1.5),
        &RELEASE_ITEMS,
        &BulletStyle {
            size: 13.0,
            bullet_color: PURPLE_LIGHT,
            ..BulletStyle::default()
        },
    );

    // Test coverage
    add_shape(slide, inches(0.8), inches(4.8), inches(12.0), inches(2.3), BG_CARD, Some(0.05));
    add_text_box(
        slide,
        inches(1.1),
        inches(4.95),
        inches(11.5),
        inches(0.4),
        "🧪 Test Coverage",
        &TextStyle::new(18.0, CYAN).bold(),
    );
    for (i, (package, count, desc)) in TEST_PACKAGES.iter().enumerate() {
        let x = step(inches(1.1), i, inches(3.9));
        add_text_box(
            slide,
            x,
            inches(5.5),
            inches(3.5),
            inches(0.3),
            package,
            &TextStyle::new(14.0, WHITE).bold(),
        );
        add_text_box(
            slide,
            x,
            inches(5.85),
            inches(3.5),
            inches(0.3),
            count,
            &TextStyle::new(13.0, CYAN).bold(),
        );
        add_text_box(
            slide,
            x,
            inches(6.15),
            inches(3.5),
            inches(0.7),
            desc,
            &TextStyle::new(10.0, GRAY),
        );
    }
}
