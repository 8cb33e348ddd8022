//! About page: design principles, build process, team, and commitment.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::decorations::{Butterfly, Circle, Leaf, Ornament, Wave};
use crate::components::icon::{Icon, IconKind};
use crate::components::sections::{CtaBanner, PageHeader, SectionHeading};
use crate::config::SiteConfig;
use crate::pages::{Card, Step, step_number};
use crate::route::SiteRoute;

/// Element id of the team section, the target of `/about#team`.
pub const TEAM_ANCHOR: &str = "team";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub focus: &'static str,
}

pub const PRINCIPLES: [Card; 4] = [
    Card {
        icon: IconKind::Clock,
        title: "Immediate Inclusion",
        body: "Bias removal shouldn't require IT tickets or manager approval. Audibly works the moment an employee \
               needs it, because access delayed is access denied.",
    },
    Card {
        icon: IconKind::Users,
        title: "Equity by Design",
        body: "Rather than retrofitting inclusion, we built it into the foundation. Every employee gets the same \
               quality meeting experience: no special requests, no stigma, no second-class participation.",
    },
    Card {
        icon: IconKind::Shield,
        title: "Confidential by Default",
        body: "Meeting content stays on the employee's device and is never transmitted to external servers. Board \
               discussions, HR conversations, and strategic planning remain private.",
    },
    Card {
        icon: IconKind::Smile,
        title: "Professional Integration",
        body: "Audibly integrates seamlessly into corporate workflows with no disruptive overlays or \
               attention-grabbing interfaces. It's enterprise software that respects the professional environment.",
    },
];

pub const GRADIENTS: [&str; 3] = ["gradient-blue", "gradient-teal", "gradient-mixed"];

pub const TIMELINE: [Step; 4] = [
    Step {
        title: "Research",
        body: "We started by listening. Conversations with deaf and hard-of-hearing individuals, non-native speakers, \
               and accessibility advocates shaped our understanding of real needs.",
    },
    Step {
        title: "Prototype",
        body: "Early prototypes focused on core functionality: can we capture audio accurately? Can we recognize ASL \
               reliably? We built ugly tools that worked before beautiful tools that didn't.",
    },
    Step {
        title: "Test",
        body: "Real users tested every feature with real workflows. We watched, took notes, and iterated. Assumptions \
               we held dear were often wrong; user behavior taught us what actually mattered.",
    },
    Step {
        title: "Refine",
        body: "The final product reflects hundreds of small improvements. Faster response times, clearer captions, \
               better defaults. Polish isn't vanity; it's respect for users' time.",
    },
];

pub const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Team Member 1",
        initials: "TM",
        role: "Lead Developer",
        focus: "Core application architecture and real-time audio processing.",
    },
    TeamMember {
        name: "Team Member 2",
        initials: "TM",
        role: "ML Engineer",
        focus: "ASL recognition system and speech-to-text integration.",
    },
    TeamMember {
        name: "Team Member 3",
        initials: "TM",
        role: "UX Designer",
        focus: "Interface design with accessibility and usability at the forefront.",
    },
    TeamMember {
        name: "Team Member 4",
        initials: "TM",
        role: "Frontend Developer",
        focus: "Website and application user interface development.",
    },
];

/// Gradient class for the card at `index` in a grid.
#[must_use]
pub fn card_gradient(index: usize) -> &'static str {
    GRADIENTS[index % GRADIENTS.len()]
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <Title text=SiteRoute::About.document_title()/>
        <div class="about-page">
            <PageHeader
                badge="Our Mission"
                title="Eliminating Access Bias in the Workplace"
                subtitle="Building technology that creates truly inclusive meeting cultures."
                circle_size=350
                accent=("header-butterfly", Ornament::Butterfly { size: 50 })
            />

            <section class="section">
                <div class="container">
                    <div class="philosophy-intro">
                        <h2>"Designing for Workplace Equity"</h2>
                        <p class="lead">
                            "Access bias happens when workplace tools and practices systematically exclude certain \
                             employees. Every design decision in Audibly aims to "
                            <strong>"eliminate these barriers"</strong>
                            ", so meetings become spaces where everyone contributes equally."
                        </p>
                    </div>

                    <div class="principles-grid">
                        {PRINCIPLES
                            .into_iter()
                            .enumerate()
                            .map(|(i, card)| {
                                view! {
                                    <div class="principle-card">
                                        <div class=format!("principle-icon {}", card_gradient(i))>
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

                <Leaf class="philosophy-leaf" size=80/>
            </section>

            <section class="section section-alt">
                <Wave class="section-wave-top" flip=true/>
                <Circle class="process-circle" size=450/>

                <div class="container">
                    <SectionHeading badge="Process" title="How We Built It"/>
                    <div class="timeline">
                        {TIMELINE
                            .into_iter()
                            .enumerate()
                            .map(|(i, step)| {
                                view! {
                                    <div class="timeline-item">
                                        <div class="timeline-marker">
                                            <span>{step_number(i)}</span>
                                        </div>
                                        <div class="timeline-content">
                                            <h3>{step.title}</h3>
                                            <p>{step.body}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Butterfly class="timeline-butterfly" size=50/>
                <Wave class="section-wave-bottom"/>
            </section>

            <section class="section" id=TEAM_ANCHOR>
                <div class="container">
                    <div class="section-header">
                        <span class="section-badge">"Team"</span>
                        <h2 class="section-title">"The People Behind Audibly"</h2>
                        <p class="section-subtitle">
                            "Built during " {config.event_name} " by a team committed to eliminating workplace access bias."
                        </p>
                    </div>

                    <div class="team-grid">
                        {TEAM
                            .into_iter()
                            .enumerate()
                            .map(|(i, member)| {
                                view! {
                                    <div class="team-card">
                                        <div class=format!("team-avatar {}", card_gradient(i))>
                                            <span>{member.initials}</span>
                                        </div>
                                        <h3>{member.name}</h3>
                                        <span class="team-role">{member.role}</span>
                                        <p>{member.focus}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Leaf class="team-leaf-1" size=65/>
                <Leaf class="team-leaf-2" size=50 flip=true/>
            </section>

            <section class="section section-alt mission-section">
                <Wave class="section-wave-top" flip=true/>

                <div class="container">
                    <div class="mission-content">
                        <Butterfly class="mission-butterfly-1" size=40/>
                        <Butterfly class="mission-butterfly-2" size=55/>

                        <h2>"Our Commitment"</h2>
                        <blockquote>
                            "\"Access bias in meetings isn't just an inconvenience. It's a systemic barrier that limits \
                             careers, silences perspectives, and costs organizations their best ideas. We're building \
                             technology that removes these barriers entirely, creating workplaces where every employee \
                             can participate, contribute, and advance.\""
                        </blockquote>
                    </div>
                </div>

                <Wave class="section-wave-bottom"/>
            </section>

            <CtaBanner
                title="Join the Movement Against Access Bias"
                body="Transform your organization's meeting culture today."
                action="Get Audibly for Your Organization"
                href=SiteRoute::Download.path()
            />
        </div>
    }
}
