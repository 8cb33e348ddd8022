//! Landing page: hero, the access-bias problem, the product answer, and a
//! closing call to action.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::decorations::{Butterfly, Circle, FloatingLeaves, Leaf, Wave};
use crate::components::icon::{Icon, IconKind};
use crate::components::sections::CtaBanner;
use crate::pages::{Card, Step, step_number};
use crate::route::SiteRoute;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { number: "430M", label: "people globally face hearing-related access bias" },
    Stat { number: "76%", label: "feel excluded from workplace meetings" },
    Stat { number: "100%", label: "meeting inclusion with Audibly" },
];

pub const PROBLEMS: [Card; 3] = [
    Card {
        icon: IconKind::Monitor,
        title: "Virtual Meeting Exclusion",
        body: "Video conferencing auto-captions are unreliable. Employees miss critical decisions, action items, \
               and strategic discussions, creating an uneven playing field where some voices matter less than others.",
    },
    Card {
        icon: IconKind::Users,
        title: "Conference Room Bias",
        body: "In-person meetings, team huddles, and boardroom discussions happen without accommodation. Employees \
               with hearing differences are systematically excluded from the conversations that shape company direction.",
    },
    Card {
        icon: IconKind::BarChart,
        title: "Leadership Pipeline Bias",
        body: "Access barriers compound over time. Employees who can't fully participate in meetings are passed over \
               for promotions, excluded from leadership opportunities, and remain underrepresented at every level.",
    },
];

pub const SOLUTION_STEPS: [Step; 3] = [
    Step {
        title: "Capture Meeting Audio",
        body: "Instantly transcribes Zoom, Teams, Meet, or any conferencing platform with enterprise-grade accuracy.",
    },
    Step {
        title: "Enable Two-Way Participation",
        body: "ASL users can contribute equally. Audibly translates sign language to text so their voice is part of the meeting.",
    },
    Step {
        title: "Professional Meeting Overlay",
        body: "Non-intrusive captions that integrate seamlessly with your meeting workflow. Enterprise-ready from day one.",
    },
];

pub const CAPABILITIES: [(IconKind, &str); 3] = [
    (IconKind::Microphone, "Speech-to-Text"),
    (IconKind::Padlock, "ASL Recognition"),
    (IconKind::Languages, "Multi-Language"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=SiteRoute::Home.document_title()/>
        <div class="home">
            <HeroSection/>
            <ProblemSection/>
            <SolutionSection/>
            <CtaBanner
                title="Eliminate Access Bias in Your Organization"
                body="Create meetings where every employee can contribute equally."
                action="Deploy Audibly Enterprise"
                href=SiteRoute::Download.path()
                icon=IconKind::Download
            >
                <Butterfly class="cta-butterfly-1" size=40/>
                <Butterfly class="cta-butterfly-2" size=55/>
            </CtaBanner>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <FloatingLeaves class="hero-leaves"/>
            <Circle class="hero-circle-1" size=400/>
            <Circle class="hero-circle-2" size=300/>

            <div class="container">
                <div class="hero-content">
                    <span class="hero-badge">"Eliminating Access Bias in the Workplace"</span>
                    <h1 class="hero-title">"Every Voice Heard in " <span class="gradient-text">"Every Meeting"</span></h1>
                    <p class="hero-subtitle">
                        "Access bias excludes 15% of the workforce from full meeting participation. Audibly removes \
                         that barrier, providing real-time captions, ASL recognition, and translation so every \
                         employee can contribute equally, regardless of how they hear or communicate."
                    </p>
                    <div class="hero-actions">
                        <a href=SiteRoute::Download.path() class="btn btn-primary btn-lg">
                            "Request a Demo"
                            <Icon kind=IconKind::ArrowRight size=20/>
                        </a>
                        <a href=SiteRoute::Features.path() class="btn btn-outline btn-lg">
                            "See How It Works"
                        </a>
                    </div>
                    <div class="hero-stats">
                        {HERO_STATS
                            .into_iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat">
                                        <span class="stat-number">{stat.number}</span>
                                        <span class="stat-label">{stat.label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="hero-mockup">
                        <div class="mockup-window">
                            <div class="mockup-header">
                                <span class="dot red"></span>
                                <span class="dot yellow"></span>
                                <span class="dot green"></span>
                            </div>
                            <div class="mockup-content">
                                <div class="caption-demo">
                                    <div class="speaker-badge">"Manager"</div>
                                    <p class="caption-text">
                                        "Let's review the Q4 projections and discuss the timeline for the product launch..."
                                    </p>
                                </div>
                                <div class="asl-indicator">
                                    <Icon kind=IconKind::Padlock size=24/>
                                    <span>"ASL Input Active"</span>
                                </div>
                            </div>
                        </div>
                        <Butterfly class="mockup-butterfly" size=50/>
                    </div>
                </div>
            </div>

            <Wave class="hero-wave"/>
        </section>
    }
}

#[component]
fn ProblemSection() -> impl IntoView {
    view! {
        <section class="section problem-section">
            <div class="container">
                <div class="section-header">
                    <span class="section-badge">"The Access Bias Problem"</span>
                    <h2 class="section-title">"Meetings Create Systemic Exclusion"</h2>
                    <p class="section-subtitle">
                        "When meetings aren't accessible, organizations inadvertently create bias against employees \
                         with hearing differences, limiting their contributions, visibility, and career advancement."
                    </p>
                </div>

                <div class="problem-grid">
                    {PROBLEMS
                        .into_iter()
                        .map(|card| {
                            view! {
                                <div class="problem-card">
                                    <div class="card-icon">
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
            <Leaf class="problem-leaf-1" size=80/>
            <Leaf class="problem-leaf-2" size=60 flip=true/>
        </section>
    }
}

#[component]
fn SolutionSection() -> impl IntoView {
    view! {
        <section class="section section-alt solution-section">
            <Wave class="section-wave-top" flip=true/>
            <Circle class="solution-circle" size=500/>

            <div class="container">
                <div class="solution-content">
                    <div class="solution-text">
                        <span class="section-badge">"Removing the Bias"</span>
                        <h2 class="section-title left-align">"Equal Meeting Participation, Automated"</h2>
                        <p class="solution-lead">
                            "Audibly eliminates access bias by running silently on Windows workstations, ensuring \
                             every employee can fully participate in any meeting, virtual or in-person, without \
                             requiring IT infrastructure changes or special accommodations."
                        </p>

                        <div class="solution-steps">
                            {SOLUTION_STEPS
                                .into_iter()
                                .enumerate()
                                .map(|(i, step)| {
                                    view! {
                                        <div class="solution-step">
                                            <div class="step-number">{step_number(i)}</div>
                                            <div class="step-content">
                                                <h4>{step.title}</h4>
                                                <p>{step.body}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <p class="solution-footer">
                            "Zero configuration. No IT overhead. Deploy organization-wide and create an inclusive meeting culture."
                        </p>
                    </div>

                    <div class="solution-visual">
                        <div class="feature-cards-stack">
                            {CAPABILITIES
                                .into_iter()
                                .map(|(icon, label)| {
                                    view! {
                                        <div class="feature-mini-card">
                                            <Icon kind=icon/>
                                            <span>{label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <Butterfly class="solution-butterfly" size=60/>
                    </div>
                </div>
            </div>

            <Wave class="section-wave-bottom"/>
        </section>
    }
}
