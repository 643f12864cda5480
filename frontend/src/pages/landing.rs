use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::components::Link;

use crate::i18n::landing::{LandingText, LANDING};
use crate::utils::sections::{active_section, measure_sections, Section, ACTIVE_OFFSET_PX, SCROLL_THROTTLE_MS};
use crate::Route;

/// Recomputes the active section from the current layout. Keeps the previous
/// one when no section covers the offset.
fn update_active_section(active: &UseStateHandle<Section>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(section) = active_section(measure_sections(&document), ACTIVE_OFFSET_PX) {
        if **active != section {
            active.set(section);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub language: &'static str,
    pub dark_mode: bool,
    pub active: Section,
    pub menu_open: bool,
    pub on_toggle_menu: Callback<MouseEvent>,
    pub on_close_menu: Callback<MouseEvent>,
    pub on_toggle_dark: Callback<MouseEvent>,
    pub on_cycle_language: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let text = LANDING.text(props.language);

    let links = Section::ALL.iter().map(|section| {
        html! {
            <a
                key={section.id()}
                href={section.anchor()}
                class={classes!("nav-link", (props.active == *section).then_some("active"))}
                onclick={props.on_close_menu.clone()}
            >
                {text.nav.label(*section)}
            </a>
        }
    });

    html! {
        <nav class="top-nav">
            <div class="nav-inner">
                <a href={Section::Home.anchor()} class="brand">
                    <i class="fa-solid fa-heart-pulse"></i>
                    {"EliteMed AI"}
                </a>
                <div class={classes!("nav-links", props.menu_open.then_some("open"))}>
                    { for links }
                    <Link<Route> to={Route::Analysis} classes="nav-cta">
                        {text.analyze}
                    </Link<Route>>
                </div>
                <div class="nav-actions">
                    <button class="icon-button" onclick={props.on_toggle_dark.clone()} aria-label="Toggle dark mode">
                        if props.dark_mode {
                            <i class="fa-solid fa-sun"></i>
                        } else {
                            <i class="fa-solid fa-moon"></i>
                        }
                    </button>
                    <button
                        class="language-button"
                        onclick={props.on_cycle_language.clone()}
                        aria-label="Change language"
                        title={LANDING.entry(props.language).native_name}
                    >
                        <i class="fa-solid fa-globe"></i>
                        <span>{props.language.to_uppercase()}</span>
                    </button>
                    <button class="icon-button menu-toggle" onclick={props.on_toggle_menu.clone()} aria-label="Toggle menu">
                        if props.menu_open {
                            <i class="fa-solid fa-xmark"></i>
                        } else {
                            <i class="fa-solid fa-bars"></i>
                        }
                    </button>
                </div>
            </div>
        </nav>
    }
}

const FEATURE_ICONS: [&str; 4] = ["fa-microchip", "fa-bolt", "fa-shield-halved", "fa-puzzle-piece"];

fn hero(text: &LandingText) -> Html {
    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-content fade-up">
                <h1 class="hero-title">{text.hero.title}</h1>
                <p class="hero-subtitle">{text.hero.subtitle}</p>
                <Link<Route> to={Route::Analysis} classes="hero-cta">
                    {text.hero.cta}
                    <i class="fa-solid fa-chevron-right"></i>
                </Link<Route>>
            </div>
        </section>
    }
}

fn features(text: &LandingText) -> Html {
    html! {
        <section id={Section::Features.id()} class="features">
            <h2>{text.features.title}</h2>
            <div class="feature-grid">
                { for text.features.items.iter().zip(FEATURE_ICONS).map(|(item, icon)| html! {
                    <div class="feature-card">
                        <i class={classes!("fa-solid", icon)}></i>
                        <h3>{item.title}</h3>
                        <p>{item.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn technology(text: &LandingText) -> Html {
    html! {
        <section id={Section::Technology.id()} class="technology">
            <div class="technology-copy">
                <h2>{text.technology.title}</h2>
                <p>{text.technology.description}</p>
            </div>
            <div class="technology-visual" aria-hidden="true">
                <i class="fa-solid fa-brain"></i>
            </div>
        </section>
    }
}

fn testimonials(text: &LandingText) -> Html {
    html! {
        <section id={Section::Testimonials.id()} class="testimonials">
            <h2>{text.testimonials.title}</h2>
            <div class="testimonial-grid">
                { for text.testimonials.items.iter().map(|item| html! {
                    <figure class="testimonial">
                        <blockquote>{format!("\u{201c}{}\u{201d}", item.quote)}</blockquote>
                        <figcaption>
                            <strong>{item.name}</strong>
                            <span>{item.role}</span>
                        </figcaption>
                    </figure>
                }) }
            </div>
        </section>
    }
}

fn contact(text: &LandingText) -> Html {
    html! {
        <section id={Section::Contact.id()} class="contact">
            <h2>{text.contact.title}</h2>
            <p>{text.contact.subtitle}</p>
            <a class="hero-cta" href="mailto:contact@elitemed.ai">
                {text.contact.cta}
                <i class="fa-solid fa-envelope"></i>
            </a>
        </section>
    }
}

fn footer(text: &LandingText) -> Html {
    html! {
        <footer class="landing-footer">
            <div class="footer-brand">
                <strong>{"EliteMed AI"}</strong>
                <p>{text.footer.tagline}</p>
            </div>
            <div class="footer-links">
                { for text.footer.links.iter().map(|link| html! {
                    <a href="#">{*link}</a>
                }) }
            </div>
            <p class="footer-rights">{text.footer.rights}</p>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let dark_mode = use_state(|| false);
    let language = use_state(|| LANDING.default_code());
    let menu_open = use_state(|| false);
    let active = use_state(|| Section::Home);

    // Throttled scroll listener for the nav highlight
    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let pending = Rc::new(Cell::new(false));
                    let callback = Closure::<dyn Fn()>::new({
                        let active = active.clone();
                        move || {
                            if pending.replace(true) {
                                return;
                            }
                            let pending = pending.clone();
                            let active = active.clone();
                            spawn_local(async move {
                                TimeoutFuture::new(SCROLL_THROTTLE_MS).await;
                                pending.set(false);
                                update_active_section(&active);
                            });
                        }
                    });
                    match window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                        Ok(()) => {
                            update_active_section(&active);
                            Box::new(move || {
                                if let Some(win) = web_sys::window() {
                                    if let Err(e) = win.remove_event_listener_with_callback(
                                        "scroll",
                                        callback.as_ref().unchecked_ref(),
                                    ) {
                                        log::warn!("Failed to remove scroll listener: {:?}", e);
                                    }
                                }
                            })
                        }
                        Err(e) => {
                            log::error!("Failed to add scroll listener: {:?}", e);
                            Box::new(|| ())
                        }
                    }
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let on_toggle_dark = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_: MouseEvent| dark_mode.set(!*dark_mode))
    };

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let on_cycle_language = {
        let language = language.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            language.set(LANDING.next(*language));
            menu_open.set(false);
        })
    };

    let text = LANDING.text(&language);

    html! {
        <div class={classes!("landing-page", dark_mode.then_some("dark"))}>
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <style>{LANDING_CSS}</style>
            <Nav
                language={*language}
                dark_mode={*dark_mode}
                active={*active}
                menu_open={*menu_open}
                on_toggle_menu={on_toggle_menu}
                on_close_menu={on_close_menu}
                on_toggle_dark={on_toggle_dark}
                on_cycle_language={on_cycle_language}
            />
            <main>
                { hero(text) }
                { features(text) }
                { technology(text) }
                { testimonials(text) }
                { contact(text) }
            </main>
            { footer(text) }
        </div>
    }
}

const LANDING_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }
    .landing-page {
        --bg: #f8fafc;
        --surface: #ffffff;
        --text: #0f172a;
        --muted: #475569;
        --accent: #2563eb;
        --accent-soft: #dbeafe;
        min-height: 100vh;
        background: var(--bg);
        color: var(--text);
        font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif;
        transition: background 0.3s, color 0.3s;
    }
    .landing-page.dark {
        --bg: #0b1120;
        --surface: #111827;
        --text: #f1f5f9;
        --muted: #94a3b8;
        --accent: #60a5fa;
        --accent-soft: #1e3a8a;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 10;
        background: var(--surface);
        box-shadow: 0 1px 8px rgba(0, 0, 0, 0.08);
    }
    .nav-inner {
        max-width: 72rem;
        margin: 0 auto;
        padding: 0.75rem 1rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-weight: 700;
        font-size: 1.25rem;
        color: var(--accent);
        text-decoration: none;
    }
    .nav-links {
        display: flex;
        align-items: center;
        gap: 1.25rem;
    }
    .nav-link {
        color: var(--muted);
        text-decoration: none;
        padding-bottom: 0.25rem;
        border-bottom: 2px solid transparent;
        transition: color 0.2s, border-color 0.2s;
    }
    .nav-link:hover, .nav-link.active {
        color: var(--accent);
        border-bottom-color: var(--accent);
    }
    .nav-cta, .hero-cta {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        background: var(--accent);
        color: white;
        padding: 0.5rem 1.25rem;
        border-radius: 9999px;
        text-decoration: none;
        font-weight: 500;
    }
    .nav-actions {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .icon-button {
        background: var(--accent-soft);
        color: var(--accent);
        border: none;
        border-radius: 9999px;
        width: 2.25rem;
        height: 2.25rem;
        cursor: pointer;
    }
    .language-button {
        display: inline-flex;
        align-items: center;
        gap: 0.375rem;
        background: var(--accent-soft);
        color: var(--accent);
        border: none;
        border-radius: 9999px;
        height: 2.25rem;
        padding: 0 0.75rem;
        font-weight: 600;
        cursor: pointer;
    }
    .menu-toggle {
        display: none;
    }
    section {
        padding: 6rem 1rem;
        max-width: 72rem;
        margin: 0 auto;
    }
    section h2 {
        font-size: 2.25rem;
        text-align: center;
        margin-bottom: 3rem;
    }
    .hero {
        min-height: 90vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    .hero-title {
        font-size: 3.5rem;
        margin-bottom: 1rem;
        background: linear-gradient(45deg, var(--accent), #7c3aed);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-subtitle {
        font-size: 1.5rem;
        color: var(--muted);
        margin-bottom: 2rem;
    }
    .fade-up {
        animation: fade-up 0.8s ease-out;
    }
    @keyframes fade-up {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .feature-grid, .testimonial-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
        gap: 1.5rem;
    }
    .feature-card, .testimonial {
        background: var(--surface);
        border-radius: 1rem;
        padding: 1.5rem;
        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06);
        transition: transform 0.2s;
        margin: 0;
    }
    .feature-card:hover {
        transform: translateY(-4px);
    }
    .feature-card i {
        font-size: 2rem;
        color: var(--accent);
    }
    .feature-card p, .testimonial span {
        color: var(--muted);
    }
    .technology {
        display: grid;
        grid-template-columns: 3fr 2fr;
        gap: 2rem;
        align-items: center;
    }
    .technology h2 {
        text-align: left;
    }
    .technology-copy p {
        font-size: 1.125rem;
        line-height: 1.7;
        color: var(--muted);
    }
    .technology-visual {
        display: flex;
        justify-content: center;
        font-size: 8rem;
        color: var(--accent);
    }
    .testimonial blockquote {
        font-style: italic;
        margin: 0 0 1rem;
    }
    .testimonial figcaption {
        display: flex;
        flex-direction: column;
    }
    .contact {
        text-align: center;
    }
    .contact p {
        color: var(--muted);
        font-size: 1.125rem;
        margin-bottom: 2rem;
    }
    .landing-footer {
        background: var(--surface);
        padding: 2rem 1rem;
        text-align: center;
    }
    .footer-links {
        display: flex;
        justify-content: center;
        gap: 1.5rem;
        margin: 1rem 0;
    }
    .footer-links a {
        color: var(--muted);
        text-decoration: none;
    }
    .footer-rights {
        color: var(--muted);
        font-size: 0.875rem;
    }
    @media (max-width: 768px) {
        .menu-toggle {
            display: inline-block;
        }
        .nav-links {
            display: none;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            flex-direction: column;
            background: var(--surface);
            padding: 1rem;
        }
        .nav-links.open {
            display: flex;
        }
        .hero-title {
            font-size: 2.25rem;
        }
        .technology {
            grid-template-columns: 1fr;
        }
    }
"#;
