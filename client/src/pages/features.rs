//! Features page: one row per headline capability plus a business grid.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::decorations::{Butterfly, Circle, Ornament, Wave, ornament};
use crate::components::icon::{Icon, IconKind};
use crate::components::sections::{CtaBanner, PageHeader, SectionHeading};
use crate::pages::Card;
use crate::route::SiteRoute;

/// A headline capability rendered as an alternating text/visual row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureRow {
    pub tag: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub bullets: [&'static str; 4],
    pub icon: IconKind,
    pub gradient: &'static str,
    pub accent: (&'static str, Ornament),
}

pub const FEATURE_ROWS: [FeatureRow; 3] = [
    FeatureRow {
        tag: "Inclusive Communication",
        title: "ASL Recognition for Meetings",
        body: "Employees who use American Sign Language can actively participate in meetings without an interpreter \
               present. Audibly's computer vision technology recognizes ASL gestures and converts them to text, \
               enabling two-way communication in real-time.",
        bullets: [
            "Works with standard webcams, no specialized hardware",
            "Supports common workplace vocabulary and phrases",
            "Sub-second latency for natural conversation flow",
            "Compatible with Zoom, Teams, Meet, and more",
        ],
        icon: IconKind::Padlock,
        gradient: "gradient-blue",
        accent: ("feature-leaf", Ornament::Leaf { size: 70, flip: false }),
    },
    FeatureRow {
        tag: "Real-Time Transcription",
        title: "Accurate Speech-to-Text",
        body: "Audibly captures audio from any application on your workstation and transcribes it with \
               enterprise-grade accuracy. Meeting discussions, training videos, webinars: everything becomes accessible.",
        bullets: [
            "System-wide audio capture across all applications",
            "Speaker identification for multi-person meetings",
            "Industry terminology and proper noun recognition",
            "Automatic punctuation and formatting",
        ],
        icon: IconKind::Microphone,
        gradient: "gradient-grapefruit",
        accent: ("feature-butterfly", Ornament::Butterfly { size: 50 }),
    },
    FeatureRow {
        tag: "Global Teams",
        title: "Multi-Language Support",
        body: "For organizations with international teams, Audibly can translate captions into the employee's \
               preferred language. Reduce language barriers and ensure consistent understanding across your global workforce.",
        bullets: [
            "Support for major business languages",
            "Real-time translation with minimal delay",
            "Preserves technical terminology and context",
            "Configurable per-user language preferences",
        ],
        icon: IconKind::Languages,
        gradient: "gradient-mixed",
        accent: ("feature-leaf-2", Ornament::Leaf { size: 55, flip: true }),
    },
];

pub const BUSINESS_FEATURES: [Card; 4] = [
    Card {
        icon: IconKind::Monitor,
        title: "Non-Intrusive Overlay",
        body: "Professional caption display that doesn't interfere with presentations or workflows.",
    },
    Card {
        icon: IconKind::Gear,
        title: "IT-Friendly Deployment",
        body: "Simple installation with no infrastructure changes. Runs on individual workstations.",
    },
    Card {
        icon: IconKind::Lightning,
        title: "Low Latency",
        body: "Captions appear in under 200ms, keeping conversations natural and productive.",
    },
    Card {
        icon: IconKind::Shield,
        title: "Data Privacy",
        body: "All processing happens locally. No audio or transcripts leave the employee's device.",
    },
];

/// Section classes for the row at `index`: odd rows sit on the alternate
/// background and mirror their layout.
#[must_use]
pub fn row_classes(index: usize) -> (&'static str, &'static str) {
    if index % 2 == 1 {
        ("section section-alt feature-section", "feature-row reverse")
    } else {
        ("section feature-section", "feature-row")
    }
}

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <Title text=SiteRoute::Features.document_title()/>
        <div class="features-page">
            <PageHeader
                badge="Enterprise Features"
                title="Built for the Modern Workplace"
                subtitle="Professional-grade accessibility tools that integrate with your existing workflow."
                circle_size=300
                accent=("header-butterfly", Ornament::Butterfly { size: 45 })
            />

            {FEATURE_ROWS.into_iter().enumerate().map(|(i, row)| feature_row(i, row)).collect_view()}

            <section class="section section-alt">
                <Wave class="section-wave-top" flip=true/>
                <Circle class="features-grid-circle" size=400/>

                <div class="container">
                    <SectionHeading badge="Enterprise Ready" title="Designed for Business"/>
                    <div class="features-grid">
                        {BUSINESS_FEATURES
                            .into_iter()
                            .map(|card| {
                                view! {
                                    <div class="feature-card">
                                        <div class="feature-card-icon">
                                            <Icon kind=card.icon/>
                                        </div>
                                        <h3>{card.title}</h3>
                                        <p>{card.body}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Wave class="section-wave-bottom"/>
            </section>

            <CtaBanner
                title="Ready to Enable Your Workforce?"
                body="Deploy Audibly and ensure every employee can participate fully."
                action="Get Started"
                href=SiteRoute::Download.path()
            >
                <Butterfly class="cta-butterfly" size=50/>
            </CtaBanner>
        </div>
    }
}

fn feature_row(index: usize, row: FeatureRow) -> impl IntoView {
    let (section_class, row_class) = row_classes(index);
    let alternate = index % 2 == 1;
    let (accent_class, accent) = row.accent;
    view! {
        <section class=section_class>
            {alternate.then(|| view! { <Wave class="section-wave-top" flip=true/> })}
            <div class="container">
                <div class=row_class>
                    <div class="feature-content">
                        <span class="feature-tag">{row.tag}</span>
                        <h2>{row.title}</h2>
                        <p>{row.body}</p>
                        <ul class="feature-list">
                            {row
                                .bullets
                                .into_iter()
                                .map(|bullet| {
                                    view! {
                                        <li>
                                            <Icon kind=IconKind::Check/>
                                            {bullet}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="feature-visual">
                        <div class=format!("feature-icon-wrapper {}", row.gradient)>
                            <Icon kind=row.icon stroke_width="1.5"/>
                        </div>
                        {ornament(accent_class, accent)}
                    </div>
                </div>
            </div>
            {alternate.then(|| view! { <Wave class="section-wave-bottom"/> })}
        </section>
    }
}
