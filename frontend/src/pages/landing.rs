use std::rc::Rc;

use chrono::Datelike;
use log::info;
use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::faq::FaqList;
use crate::components::nav::Nav;
use crate::components::service_modal::ServiceModal;
use crate::components::toast::ToastBanner;
use crate::content::{ServiceOffering, SiteContent, Testimonial};
use crate::host::browser::BrowserHost;
use crate::state::modal::{ClickTarget, ModalController};
use crate::state::reveal::{RevealAnimator, SectionId};
use crate::state::scroll::ScrollTracker;
use crate::state::store::{Dispatch, ViewAction, ViewState};
use crate::state::toast::ToastScheduler;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

fn section_class(state: &ViewState, section: SectionId) -> Classes {
    classes!(
        "section-fade",
        state.revealed().contains(section).then(|| "visible")
    )
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Rc<ServiceOffering>,
    on_select: Callback<Rc<ServiceOffering>>,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    let learn_more = {
        let service = service.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(service.clone()))
    };

    html! {
        <div class="service-card">
            {
                if let Some(image) = &service.image {
                    html! { <img class="service-image" src={image.clone()} alt={service.title.clone()} /> }
                } else {
                    html! {}
                }
            }
            <h3>{&service.title}</h3>
            <p class="service-subtitle">{&service.subtitle}</p>
            <p class="service-description">{&service.description}</p>
            <h4 class="benefits-title">{"Key Benefits"}</h4>
            <ul class="benefits">
                { for service.benefits.iter().map(|benefit| html! { <li key={benefit.clone()}>{benefit}</li> }) }
            </ul>
            <div class="service-features">
                {
                    for service.features.iter().map(|feature| html! {
                        <div class="service-feature" key={feature.title.clone()}>
                            <strong>{&feature.title}</strong>
                            <span>{&feature.description}</span>
                        </div>
                    })
                }
            </div>
            <button class="learn-more" onclick={learn_more}>{"Learn More →"}</button>
        </div>
    }
}

fn testimonial_card(testimonial: &Testimonial) -> Html {
    html! {
        <div class="testimonial-card" key={testimonial.author.clone()}>
            <div class="testimonial-header">
                {
                    if let Some(image) = &testimonial.image {
                        html! { <img src={image.clone()} alt={testimonial.author.clone()} /> }
                    } else {
                        html! {}
                    }
                }
                <div>
                    <h4>{&testimonial.author}</h4>
                    <p class="testimonial-position">{&testimonial.position}</p>
                </div>
            </div>
            <div class="stars">{testimonial.stars()}</div>
            <p class="testimonial-quote">{&testimonial.quote}</p>
            <span class="testimonial-metric">{&testimonial.metric}</span>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = &props.content;
    let state = use_reducer(ViewState::default);

    let dispatch: Dispatch = {
        let dispatcher = state.dispatcher();
        Rc::new(move |action: ViewAction| dispatcher.dispatch(action))
    };

    // Scroll progress and reveal animations live for the whole page.
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let mut tracker = BrowserHost::attach("scroll tracker", |host| {
                    ScrollTracker::attach(host, dispatch.clone())
                });
                let mut animator = BrowserHost::attach("reveal animator", |host| {
                    RevealAnimator::attach(host, dispatch.clone(), &SectionId::ALL)
                });
                move || {
                    if let Some(tracker) = tracker.as_mut() {
                        tracker.dispose();
                    }
                    if let Some(animator) = animator.as_mut() {
                        animator.dispose();
                    }
                }
            },
            (),
        );
    }

    // The Escape listener exists only while the overlay is open.
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let mut controller = ModalController::default();
                let open = *open;
                BrowserHost::attach("escape listener", |host| controller.sync(host, &dispatch, open));
                move || controller.dispose()
            },
            state.modal().is_open(),
        );
    }

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |toast| {
                let mut scheduler = ToastScheduler::default();
                let toast = *toast;
                BrowserHost::attach("toast countdown", |host| scheduler.sync(host, &dispatch, toast));
                move || scheduler.dispose()
            },
            *state.toast(),
        );
    }

    let on_toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(ViewAction::ToggleMenu))
    };
    let on_close_menu = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(ViewAction::CloseMenu))
    };
    let on_select_service = {
        let state = state.clone();
        Callback::from(move |service: Rc<ServiceOffering>| {
            info!("Opening details for {}", service.title);
            state.dispatch(ViewAction::SelectService(service));
        })
    };
    let on_close_modal = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(ViewAction::CloseModal))
    };
    let on_modal_click = {
        let state = state.clone();
        Callback::from(move |target: ClickTarget| state.dispatch(ViewAction::ModalClicked(target)))
    };
    let on_toggle_faq = {
        let state = state.clone();
        Callback::from(move |index: usize| state.dispatch(ViewAction::ToggleFaq(index)))
    };
    let show_toast = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ViewAction::ShowToast))
    };

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <Nav
                brand={content.brand.clone()}
                logo={content.logo.clone().map(AttrValue::from)}
                menu_open={state.menu_open()}
                scroll_progress={state.scroll_progress()}
                on_toggle={on_toggle_menu}
                on_close={on_close_menu}
            />

            // Hero Section
            <section id={SectionId::Hero.as_str()} class={classes!("hero", section_class(&state, SectionId::Hero))}>
                <div class="hero-content">
                    <h1>
                        {&content.hero.headline}{" "}
                        <span class="highlight">{&content.hero.highlight}</span>
                    </h1>
                    <p class="hero-subtitle">{&content.hero.tagline}</p>
                    <div class="hero-buttons">
                        <a href="#faq" class="hero-cta">{"Chat with AI Expert"}</a>
                        <button class="hero-secondary" onclick={show_toast}>{"Calculate ROI"}</button>
                    </div>
                    <div class="stats-grid">
                        {
                            for content.stats.iter().map(|stat| html! {
                                <div class="stat" key={stat.label.clone()}>
                                    <span class="stat-value">{&stat.value}</span>
                                    <span class="stat-label">{&stat.label}</span>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            // Features Section
            <section id={SectionId::Features.as_str()} class={section_class(&state, SectionId::Features)}>
                <h2>{"Revolutionize Your Business with AI Automation"}</h2>
                <p class="section-subtitle">{"Transform your business operations with our cutting-edge AI automation solutions"}</p>
                <div class="highlights-grid">
                    {
                        for content.highlights.iter().map(|highlight| html! {
                            <div class="highlight-card" key={highlight.title.clone()}>
                                {
                                    if let Some(image) = &highlight.image {
                                        html! { <img src={image.clone()} alt={highlight.title.clone()} /> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <h3>{&highlight.title}</h3>
                                <p>{&highlight.description}</p>
                            </div>
                        })
                    }
                </div>
            </section>

            // About Section
            <section id={SectionId::About.as_str()} class={section_class(&state, SectionId::About)}>
                <div class="about-grid">
                    <div>
                        <h2>{&content.brand}</h2>
                        { for content.about.paragraphs.iter().map(|p| html! { <p key={p.clone()}>{p}</p> }) }
                    </div>
                    <div>
                        <h3>{"Our Expertise"}</h3>
                        {
                            for content.about.expertise.iter().map(|item| html! {
                                <div class="expertise-card" key={item.title.clone()}>
                                    <h4>{&item.title}</h4>
                                    <p>{&item.description}</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            // Services Section
            <section id={SectionId::Services.as_str()} class={section_class(&state, SectionId::Services)}>
                <h2>{"Our Services"}</h2>
                <p class="section-subtitle">{"Comprehensive automation solutions designed to transform your business operations"}</p>
                <div class="services-grid">
                    {
                        for content.services.iter().map(|service| html! {
                            <ServiceCard
                                key={service.title.clone()}
                                service={service.clone()}
                                on_select={on_select_service.clone()}
                            />
                        })
                    }
                </div>
            </section>

            // Testimonials Section
            <section id={SectionId::Testimonials.as_str()} class={section_class(&state, SectionId::Testimonials)}>
                <h2>{"Success Stories"}</h2>
                <p class="section-subtitle">{"See how other businesses have transformed their operations with our AI automation solutions"}</p>
                <div class="testimonials-grid">
                    { for content.testimonials.iter().map(testimonial_card) }
                </div>
            </section>

            // Consultation CTA
            <section id={SectionId::Contact.as_str()} class={classes!("footer-cta", section_class(&state, SectionId::Contact))}>
                <h2>{&content.call_to_action.headline}</h2>
                <p class="subtitle">{&content.call_to_action.text}</p>
                <div class="hero-buttons">
                    <a href="#services" class="hero-cta">{"Get Started Free"}</a>
                    <a href="#faq" class="hero-secondary">{"Schedule Demo"}</a>
                </div>
            </section>

            // FAQ Section
            <section id={SectionId::Faq.as_str()} class={section_class(&state, SectionId::Faq)}>
                <h2>{"Frequently Asked Questions"}</h2>
                <p class="section-subtitle">{"Get answers to common questions about AI automation"}</p>
                <FaqList
                    entries={content.faqs.clone()}
                    accordion={*state.faq()}
                    on_toggle={on_toggle_faq}
                />
            </section>

            <footer class="site-footer">
                <span class="footer-brand">{&content.brand}</span>
                <div class="footer-links">
                    <a href="#">{"Privacy"}</a>
                    <a href="#">{"Terms"}</a>
                    <a href="#contact">{"Contact"}</a>
                </div>
                <p>{format!("© {} {}. All rights reserved.", year, content.brand)}</p>
            </footer>

            <ToastBanner visible={state.toast().visible()} message={content.toast_message.clone()} />

            {
                if let Some(service) = state.selected_service() {
                    html! {
                        <ServiceModal
                            service={service.clone()}
                            on_close={on_close_modal}
                            on_click={on_modal_click}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                body {
                    margin: 0;
                    background: #111827;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .landing-page {
                    color: #fff;
                    overflow-x: hidden;
                }

                .landing-page section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                }

                .landing-page h2 {
                    font-size: 2.5rem;
                    text-align: center;
                    margin-bottom: 1rem;
                }

                .section-subtitle {
                    text-align: center;
                    color: #9ca3af;
                    font-size: 1.125rem;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                }

                .section-fade {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }

                .section-fade.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                }

                .hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                }

                .highlight {
                    background: linear-gradient(to right, #22d3ee, #a5f3fc);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    max-width: 40rem;
                    margin-bottom: 2rem;
                }

                .hero-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: flex-start;
                }

                .footer-cta .hero-buttons {
                    justify-content: center;
                }

                .hero-cta, .hero-secondary {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-size: 1.125rem;
                    font-weight: 600;
                    text-decoration: none;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }

                .hero-cta {
                    background: linear-gradient(to right, #06b6d4, #0891b2);
                    color: #fff;
                    border: none;
                }

                .hero-secondary {
                    background: transparent;
                    border: 2px solid rgba(6, 182, 212, 0.5);
                    color: #22d3ee;
                }

                .hero-cta:hover, .hero-secondary:hover {
                    transform: scale(1.05);
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                    margin-top: 3rem;
                }

                .stat {
                    display: flex;
                    flex-direction: column;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(6, 182, 212, 0.1);
                    background: rgba(31, 41, 55, 0.3);
                }

                .stat-value {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #22d3ee;
                }

                .stat-label {
                    color: #9ca3af;
                }

                .highlights-grid, .services-grid, .testimonials-grid {
                    display: grid;
                    gap: 2rem;
                }

                .highlights-grid, .testimonials-grid {
                    grid-template-columns: repeat(3, 1fr);
                }

                .services-grid {
                    grid-template-columns: repeat(2, 1fr);
                }

                .highlight-card, .service-card, .testimonial-card, .expertise-card {
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(6, 182, 212, 0.1);
                    background: rgba(31, 41, 55, 0.3);
                    transition: border-color 0.3s ease;
                }

                .highlight-card:hover, .service-card:hover, .testimonial-card:hover, .expertise-card:hover {
                    border-color: rgba(6, 182, 212, 0.3);
                }

                .highlight-card img, .service-image {
                    width: 100%;
                    height: 12rem;
                    object-fit: cover;
                    border-radius: 0.5rem;
                }

                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }

                .about-grid h2 {
                    text-align: left;
                }

                .about-grid p {
                    color: #d1d5db;
                    line-height: 1.7;
                }

                .expertise-card {
                    margin-bottom: 1rem;
                }

                .service-subtitle {
                    color: #22d3ee;
                }

                .service-description {
                    color: #d1d5db;
                    line-height: 1.6;
                }

                .benefits-title {
                    color: #22d3ee;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    font-size: 0.875rem;
                }

                .benefits {
                    list-style: none;
                    padding: 0;
                    color: #d1d5db;
                }

                .benefits li::before {
                    content: '✓ ';
                    color: #22d3ee;
                }

                .service-feature {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 0.75rem;
                    color: #9ca3af;
                }

                .service-feature strong {
                    color: #fff;
                }

                .learn-more {
                    width: 100%;
                    margin-top: 1.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    border: 1px solid rgba(6, 182, 212, 0.2);
                    background: rgba(6, 182, 212, 0.1);
                    color: #22d3ee;
                    font-weight: 600;
                    cursor: pointer;
                }

                .testimonial-header {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .testimonial-header img {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    object-fit: cover;
                }

                .testimonial-header h4 {
                    margin: 0;
                }

                .testimonial-position {
                    margin: 0;
                    color: #9ca3af;
                }

                .stars {
                    color: #eab308;
                    margin: 1rem 0;
                }

                .testimonial-quote {
                    color: #d1d5db;
                }

                .testimonial-metric {
                    color: #22d3ee;
                    font-weight: 600;
                }

                .footer-cta {
                    text-align: center;
                }

                .footer-cta .subtitle {
                    color: #d1d5db;
                    font-size: 1.125rem;
                    margin-bottom: 2rem;
                }

                .site-footer {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                    border-top: 1px solid #1f2937;
                    color: #9ca3af;
                }

                .footer-brand {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #fff;
                }

                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-links a {
                    color: #9ca3af;
                    text-decoration: none;
                }

                .footer-links a:hover {
                    color: #fff;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.5rem;
                    }

                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .highlights-grid, .services-grid, .testimonials-grid, .about-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
