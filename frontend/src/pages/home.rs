use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::background::AnimatedBackground;
use crate::components::icons::{Icon, IconView};
use crate::components::service_card::{ServiceCard, SERVICES};
use crate::config;
use crate::state::counter::use_counters;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<String>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <div class="landing-page">
            <Hero on_navigate={props.on_navigate.clone()} />
            <Services />
            <About />
            <Contact />
            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #f9fafb;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .page-section {
                    position: relative;
                    padding: 4rem 1rem;
                }
                .section-inner {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .gradient-text {
                    color: transparent;
                    background-clip: text;
                    -webkit-background-clip: text;
                    background-image: linear-gradient(to right, #2563eb, #06b6d4);
                }
                .section-title {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 1rem;
                }
                .section-subtitle {
                    color: #4b5563;
                    text-align: center;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                }
                .glass-panel {
                    background: rgba(255, 255, 255, 0.5);
                    backdrop-filter: blur(16px);
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    on_navigate: Callback<String>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let counters = use_counters();

    let get_started = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(config::SECTION_CONTACT.to_string()))
    };

    let stats = [
        (counters.projects, "Projects Completed"),
        (counters.clients, "Happy Clients"),
        (counters.years, "Years Experience"),
    ];

    html! {
        <section id={config::SECTION_HOME} class="hero">
            <AnimatedBackground />
            <div class="hero-content">
                <div class="hero-badge">{"Next-Gen Tech Solutions"}</div>
                <h1>
                    <span class="gradient-text">{"Transform Your Business"}</span>
                    <br />
                    {"with Advanced Technology"}
                </h1>
                <p class="hero-subtitle">
                    {"Leveraging cutting-edge solutions to propel your business into the future"}
                </p>
                <button class="hero-cta" onclick={get_started}>
                    {"Get Started"}
                    <IconView icon={Icon::ArrowRight} size={20} class="hero-cta-arrow" />
                </button>

                <div class="stats-grid">
                    { for stats.iter().map(|(value, label)| html! {
                        <div class="stat">
                            <div class="stat-value">{ format!("{}+", value) }</div>
                            <div class="stat-label">{ *label }</div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 4rem 1rem 0;
                    overflow: hidden;
                }
                .hero-content {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .hero-badge {
                    display: inline-block;
                    margin-bottom: 1rem;
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                    background: #dbeafe;
                    color: #2563eb;
                }
                .hero h1 {
                    font-size: 3.75rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #4b5563;
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                }
                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 2rem;
                    border: none;
                    border-radius: 0.5rem;
                    color: #ffffff;
                    font-size: 1rem;
                    cursor: pointer;
                    background-image: linear-gradient(to right, #2563eb, #06b6d4);
                    transition: box-shadow 0.2s ease;
                }
                .hero-cta:hover {
                    box-shadow: 0 10px 15px -3px rgba(59, 130, 246, 0.3);
                }
                .hero-cta-arrow {
                    transition: transform 0.2s ease;
                }
                .hero-cta:hover .hero-cta-arrow {
                    transform: translateX(4px);
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-top: 4rem;
                }
                .stat-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #2563eb;
                }
                .stat-label {
                    color: #4b5563;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id={config::SECTION_SERVICES} class="page-section">
            <AnimatedBackground />
            <div class="section-inner">
                <h2 class="section-title">{"Our Services"}</h2>
                <p class="section-subtitle">
                    {"Empowering businesses with advanced technological solutions"}
                </p>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <ServiceCard
                            key={service.title}
                            icon={service.icon}
                            title={service.title}
                            description={service.description}
                        />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .service-card {
                    position: relative;
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    border: 1px solid #e5e7eb;
                    background: rgba(255, 255, 255, 0.5);
                    backdrop-filter: blur(16px);
                    transition: all 0.3s ease;
                }
                .service-card:hover {
                    border-color: #3b82f6;
                    box-shadow: 0 10px 15px -3px rgba(59, 130, 246, 0.1);
                }
                .service-card-glow {
                    position: absolute;
                    inset: 0;
                    border-radius: 0.75rem;
                    opacity: 0;
                    background-image: linear-gradient(to bottom right, rgba(59, 130, 246, 0.05), rgba(6, 182, 212, 0.05));
                    transition: opacity 0.3s ease;
                }
                .service-card:hover .service-card-glow {
                    opacity: 1;
                }
                .service-card-body {
                    position: relative;
                }
                .service-card-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    margin-bottom: 1rem;
                    border-radius: 0.75rem;
                    color: #ffffff;
                    background-image: linear-gradient(to bottom right, #3b82f6, #06b6d4);
                    transition: transform 0.3s ease;
                }
                .service-card:hover .service-card-icon {
                    transform: scale(1.1);
                }
                .service-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .service-card p {
                    color: #4b5563;
                }
                @media (max-width: 1024px) {
                    .services-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id={config::SECTION_ABOUT} class="page-section">
            <AnimatedBackground />
            <div class="section-inner">
                <div class="glass-panel about-panel">
                    <h2 class="section-title">
                        <span class="gradient-text">{"About Us"}</span>
                    </h2>
                    <div class="about-text">
                        <p>
                            {"We are pioneers in technological innovation, specializing in transforming \
                              businesses through advanced digital solutions. Our expertise spans artificial \
                              intelligence, cloud computing, web development, and digital transformation."}
                        </p>
                        <p>
                            {"With a team of expert developers, data scientists, and designers, we deliver \
                              cutting-edge solutions that help businesses stay ahead in the rapidly evolving \
                              digital landscape. Our commitment to innovation and excellence drives us to \
                              consistently deliver exceptional results for our clients."}
                        </p>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about-panel {
                    padding: 2rem;
                }
                .about-text {
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                    color: #4b5563;
                }
                .about-text p + p {
                    margin-top: 1.5rem;
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id={config::SECTION_CONTACT} class="page-section">
            <AnimatedBackground />
            <div class="section-inner contact-inner">
                <h2 class="section-title">
                    <span class="gradient-text">{"Connect With Us"}</span>
                </h2>
                <div class="glass-panel contact-link">
                    <IconView icon={Icon::Mail} class="brand-icon" />
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
                </div>
            </div>
            <style>
                {r#"
                .contact-inner {
                    text-align: center;
                }
                .contact-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                }
                .contact-link a {
                    color: #4b5563;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .contact-link a:hover {
                    color: #2563eb;
                }
                "#}
            </style>
        </section>
    }
}
