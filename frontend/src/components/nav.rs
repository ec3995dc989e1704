use yew::prelude::*;
use web_sys::MouseEvent;

const LINKS: [(&str, &str); 3] = [
    ("#services", "Services"),
    ("#features", "Features"),
    ("#testimonials", "Testimonials"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: AttrValue,
    pub logo: Option<AttrValue>,
    pub menu_open: bool,
    pub scroll_progress: f64,
    pub on_toggle: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let toggle_menu = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    // Following an anchor closes the mobile menu.
    let close_menu = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let links = |class: &'static str| -> Html {
        LINKS
            .iter()
            .map(|(href, label)| {
                html! {
                    <a href={*href} class={class} onclick={close_menu.clone()}>{*label}</a>
                }
            })
            .collect()
    };

    html! {
        <nav class="top-nav">
            <div class="scroll-progress" style={format!("width: {:.2}%;", props.scroll_progress)}></div>
            <div class="nav-content">
                <a href="#hero" class="nav-logo" onclick={close_menu.clone()}>
                    {
                        if let Some(logo) = &props.logo {
                            html! { <img src={logo.clone()} alt={props.brand.clone()} /> }
                        } else {
                            html! {}
                        }
                    }
                    <span>{props.brand.clone()}</span>
                </a>

                <div class="nav-right">
                    { links("nav-link") }
                    <a href="#contact" class="nav-contact-button">{"Contact Us"}</a>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if props.menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-menu", props.menu_open.then(|| "open"))}>
                { links("mobile-link") }
                <a href="#contact" class="nav-contact-button" onclick={close_menu.clone()}>{"Contact Us"}</a>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    background: linear-gradient(to bottom, rgba(17, 24, 39, 0.9), rgba(17, 24, 39, 0));
                    backdrop-filter: blur(4px);
                }

                .scroll-progress {
                    height: 3px;
                    background: linear-gradient(to right, #06b6d4, #6366f1);
                    transition: width 0.1s linear;
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 700;
                    text-decoration: none;
                }

                .nav-logo img {
                    height: 2rem;
                    width: auto;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link, .mobile-link {
                    color: #d1d5db;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover, .mobile-link:hover {
                    color: #22d3ee;
                }

                .nav-contact-button {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(6, 182, 212, 0.1);
                    color: #22d3ee;
                    text-decoration: none;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #d1d5db;
                    font-size: 1.5rem;
                    cursor: pointer;
                }

                .mobile-menu {
                    position: fixed;
                    top: 80px;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    display: none;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                    padding-top: 3rem;
                    background: rgba(17, 24, 39, 0.95);
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                }

                .mobile-menu.open {
                    opacity: 1;
                    pointer-events: auto;
                }

                .mobile-link {
                    font-size: 1.25rem;
                }

                @media (max-width: 768px) {
                    .nav-right {
                        display: none;
                    }

                    .burger-menu {
                        display: block;
                    }

                    .mobile-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
