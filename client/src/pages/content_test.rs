use super::*;
use crate::route::SiteRoute;

// =============================================================
// step_number
// =============================================================

#[test]
fn step_number_is_one_based() {
    assert_eq!(step_number(0), "1");
    assert_eq!(step_number(3), "4");
}

// =============================================================
// Home
// =============================================================

#[test]
fn home_has_three_stats_problems_and_steps() {
    assert_eq!(home::HERO_STATS.len(), 3);
    assert_eq!(home::PROBLEMS.len(), 3);
    assert_eq!(home::SOLUTION_STEPS.len(), 3);
    assert_eq!(home::CAPABILITIES.len(), 3);
}

// =============================================================
// Features
// =============================================================

#[test]
fn feature_rows_have_four_non_empty_bullets() {
    assert_eq!(features::FEATURE_ROWS.len(), 3);
    for row in features::FEATURE_ROWS {
        assert_eq!(row.bullets.len(), 4, "{}", row.title);
        assert!(row.bullets.iter().all(|b| !b.is_empty()), "{}", row.title);
    }
}

#[test]
fn feature_rows_alternate_layout() {
    assert_eq!(features::row_classes(0), ("section feature-section", "feature-row"));
    assert_eq!(features::row_classes(1), ("section section-alt feature-section", "feature-row reverse"));
    assert_eq!(features::row_classes(2), features::row_classes(0));
}

#[test]
fn business_grid_has_four_cards() {
    assert_eq!(features::BUSINESS_FEATURES.len(), 4);
}

// =============================================================
// Download
// =============================================================

#[test]
fn download_page_tables_have_four_entries() {
    assert_eq!(download::SYSTEM_REQUIREMENTS.len(), 4);
    assert_eq!(download::INSTALL_STEPS.len(), 4);
    assert_eq!(download::QUICK_TIPS.len(), 4);
    assert_eq!(download::FAQS.len(), 4);
}

#[test]
fn faq_questions_end_with_question_mark() {
    for faq in download::FAQS {
        assert!(faq.question.ends_with('?'), "{}", faq.question);
    }
}

// =============================================================
// About
// =============================================================

#[test]
fn about_gradients_cycle() {
    let gradients: Vec<_> = (0..4).map(about::card_gradient).collect();
    assert_eq!(gradients, ["gradient-blue", "gradient-teal", "gradient-mixed", "gradient-blue"]);
}

#[test]
fn about_team_anchor_matches_footer_fragment() {
    let href = format!("{}#{}", SiteRoute::About.path(), about::TEAM_ANCHOR);
    assert_eq!(href, "/about#team");
    assert_eq!(SiteRoute::from_href(&href), Ok(SiteRoute::About));
}

#[test]
fn about_tables_have_four_entries() {
    assert_eq!(about::PRINCIPLES.len(), 4);
    assert_eq!(about::TIMELINE.len(), 4);
    assert_eq!(about::TEAM.len(), 4);
}

// =============================================================
// Copy hygiene
// =============================================================

#[test]
fn card_copy_is_trimmed_and_non_empty() {
    let cards = home::PROBLEMS
        .iter()
        .chain(features::BUSINESS_FEATURES.iter())
        .chain(download::QUICK_TIPS.iter())
        .chain(about::PRINCIPLES.iter());
    for card in cards {
        assert!(!card.title.is_empty());
        assert_eq!(card.body.trim(), card.body, "{}", card.title);
        assert!(!card.body.contains("  "), "double space in {}", card.title);
    }
}
