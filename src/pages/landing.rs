use yew::prelude::*;

use crate::pages::products::OurProducts;
use crate::pages::services::ServicesSection;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <h1>{"Software that ships."}</h1>
                    <p class="hero-subtitle">
                        {"A small senior team that designs, builds and runs products for companies that would rather not hire a whole department."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#services" class="hero-cta">{"See what we do"}</a>
                        <a href="#contact" class="hero-link">{"Talk to us"}</a>
                    </div>
                </div>
            </header>

            <section class="about-block">
                <h2>{"About us"}</h2>
                <p>{"Twelve engineers and designers, remote first, working with clients in Europe and North America since 2016."}</p>
            </section>

            <OurProducts />

            <section class="technology-block">
                <h2>{"Technology"}</h2>
                <ul class="tech-list">
                    <li>{"Rust, TypeScript, Kotlin and Swift"}</li>
                    <li>{"PostgreSQL, Redis and event streaming"}</li>
                    <li>{"AWS, GCP and bare metal"}</li>
                </ul>
            </section>

            <ServicesSection />

            <footer id="contact" class="footer-cta">
                <div class="footer-content">
                    <h2>{"Have a project in mind?"}</h2>
                    <p class="subtitle">{"Tell us what you are building. We answer every message within one business day."}</p>
                    <a href="mailto:hello@example.com" class="hero-cta">{"hello@example.com"}</a>
                </div>
            </footer>
            <style>
                {r#"
                    .landing-page {
                        background: #0d0d0d;
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        position: relative;
                        padding: 0 1.5rem;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 50% 30%, rgba(30, 144, 255, 0.15), transparent 60%);
                        z-index: 0;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 760px;
                    }
                    .hero-content h1 {
                        font-size: 3.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #bbb;
                        line-height: 1.6;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: center;
                        align-items: center;
                        margin-top: 2.5rem;
                    }
                    .hero-cta {
                        background: #1E90FF;
                        color: #fff;
                        padding: 0.9rem 2rem;
                        border-radius: 999px;
                        text-decoration: none;
                    }
                    .hero-link {
                        color: #1E90FF;
                        text-decoration: none;
                    }
                    .about-block,
                    .technology-block {
                        max-width: 800px;
                        margin: 0 auto;
                        padding: 6rem 2rem;
                        text-align: center;
                    }
                    .tech-list {
                        list-style: none;
                        padding: 0;
                        color: #bbb;
                        line-height: 2;
                    }
                    .footer-cta {
                        padding: 6rem 2rem;
                        text-align: center;
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .footer-cta .subtitle {
                        color: #999;
                        margin-bottom: 2rem;
                    }
                    @media (max-width: 768px) {
                        .hero-content h1 {
                            font-size: 2.4rem;
                        }
                        .hero-cta-group {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
