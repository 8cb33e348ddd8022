//! Download page: installer card, setup guide, tips, and FAQ.
//!
//! The download button is the only outbound link on the site; its target
//! comes from `SiteConfig` rather than markup.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::decorations::{Butterfly, Circle, Leaf, Ornament, Wave};
use crate::components::icon::{Icon, IconKind};
use crate::components::sections::{PageHeader, SectionHeading};
use crate::config::SiteConfig;
use crate::pages::{Card, Step, step_number};
use crate::route::SiteRoute;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const SYSTEM_REQUIREMENTS: [&str; 4] = [
    "Windows 10 or Windows 11",
    "4 GB RAM minimum",
    "Webcam (for ASL recognition)",
    "Internet connection (for initial setup)",
];

pub const INSTALL_STEPS: [Step; 4] = [
    Step {
        title: "Download the Installer",
        body: "Click the download button above to get the Audibly installer. The file is small and downloads quickly.",
    },
    Step {
        title: "Run the Setup",
        body: "Double-click the downloaded file and follow the on-screen instructions. No administrator privileges required.",
    },
    Step {
        title: "Grant Permissions",
        body: "Allow Audibly to access your microphone and camera when prompted for speech recognition and ASL detection.",
    },
    Step {
        title: "Start Using Audibly",
        body: "Look for the Audibly icon in your system tray. Click it to open settings and adjust preferences.",
    },
];

pub const QUICK_TIPS: [Card; 4] = [
    Card {
        icon: IconKind::Monitor,
        title: "Enable Captions",
        body: "Right-click the system tray icon and select \"Show Captions\" to display the overlay.",
    },
    Card {
        icon: IconKind::Play,
        title: "Adjust Position",
        body: "Drag the caption window anywhere on screen. It stays on top of other windows.",
    },
    Card {
        icon: IconKind::Gear,
        title: "Change Settings",
        body: "Customize font size, colors, and enable/disable specific features from the settings menu.",
    },
    Card {
        icon: IconKind::Keyboard,
        title: "Keyboard Shortcut",
        body: "Use Ctrl+Shift+A to quickly toggle captions on and off without clicking.",
    },
];

pub const FAQS: [Faq; 4] = [
    Faq {
        question: "Is Audibly free?",
        answer: "Yes, Audibly is completely free to use. There are no subscriptions, premium tiers, or hidden costs.",
    },
    Faq {
        question: "Does Audibly work offline?",
        answer: "Core features work offline after the initial setup. Some advanced features may require an internet connection.",
    },
    Faq {
        question: "Is my data private?",
        answer: "Absolutely. All audio and video processing happens locally on your computer. We don't collect or \
                 transmit your conversations.",
    },
    Faq {
        question: "Can I use Audibly with Zoom, Teams, etc?",
        answer: "Yes! Audibly works with any application that plays audio or uses your webcam, including all major \
                 video conferencing tools.",
    },
];

#[component]
pub fn DownloadPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <Title text=SiteRoute::Download.document_title()/>
        <div class="download-page">
            <PageHeader
                badge="Get Audibly"
                title="Download Audibly"
                subtitle="Get started in minutes with our simple installation."
                circle_size=350
                accent=("header-leaf", Ornament::Leaf { size: 60, flip: false })
            />

            <section class="section download-hero-section">
                <div class="container">
                    <div class="download-card">
                        <div class="download-card-content">
                            <div class="platform-icon">
                                <Icon kind=IconKind::Windows/>
                            </div>

                            <div class="download-info">
                                <h2>"Audibly for Windows"</h2>
                                <span class="version-badge">"Version " {config.app_version}</span>
                                <p>
                                    "A lightweight Windows application that provides real-time captions, ASL \
                                     recognition, and translation. Runs in your system tray and works with any application."
                                </p>

                                <div class="requirements">
                                    <h4>"System Requirements"</h4>
                                    <ul>
                                        {SYSTEM_REQUIREMENTS.into_iter().map(|req| view! { <li>{req}</li> }).collect_view()}
                                    </ul>
                                </div>

                                <a
                                    href=config.download_url
                                    class="btn btn-primary btn-lg download-btn"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <Icon kind=IconKind::Download size=24/>
                                    "Download for Windows"
                                </a>
                                <p class="download-note">"Free download. No account required."</p>
                            </div>
                        </div>

                        <Butterfly class="download-butterfly" size=55/>
                    </div>
                </div>
            </section>

            <section class="section section-alt">
                <Wave class="section-wave-top" flip=true/>
                <Circle class="install-circle" size=400/>

                <div class="container">
                    <SectionHeading badge="Setup" title="Installation Guide"/>
                    <div class="install-steps">
                        {INSTALL_STEPS
                            .into_iter()
                            .enumerate()
                            .map(|(i, step)| {
                                view! {
                                    <div class="install-step">
                                        <div class="step-icon">
                                            <span>{step_number(i)}</span>
                                        </div>
                                        <div class="step-content">
                                            <h3>{step.title}</h3>
                                            <p>{step.body}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Wave class="section-wave-bottom"/>
            </section>

            <section class="section">
                <div class="container">
                    <SectionHeading badge="Tips" title="Quick Start Tips"/>
                    <div class="tips-grid">
                        {QUICK_TIPS
                            .into_iter()
                            .map(|tip| {
                                view! {
                                    <div class="tip-card">
                                        <div class="tip-icon">
                                            <Icon kind=tip.icon/>
                                        </div>
                                        <h3>{tip.title}</h3>
                                        <p>{tip.body}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Leaf class="tips-leaf" size=70 flip=true/>
            </section>

            <section class="section section-alt">
                <Wave class="section-wave-top" flip=true/>

                <div class="container">
                    <SectionHeading badge="Help" title="Frequently Asked Questions"/>
                    <div class="faq-list">
                        {FAQS
                            .into_iter()
                            .map(|faq| {
                                view! {
                                    <div class="faq-item">
                                        <h3>{faq.question}</h3>
                                        <p>{faq.answer}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Butterfly class="faq-butterfly" size=45/>
                <Wave class="section-wave-bottom"/>
            </section>
        </div>
    }
}
