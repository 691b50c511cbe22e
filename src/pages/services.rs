use yew::prelude::*;

use crate::carousel::CarouselConfig;
use crate::components::card::Card;
use crate::components::scroll_carousel::ScrollLockCarousel;

fn services() -> Vec<Card> {
    vec![
        Card::new(
            "Product Engineering",
            "From first prototype to production. We ship web, mobile and backend systems with your team, not around it.",
            "🛠️",
            "/#contact",
        ),
        Card::new(
            "Cloud & Infrastructure",
            "Migrations, cost reviews and on-call ready deployments on the provider you already use.",
            "☁️",
            "/#contact",
        ),
        Card::new(
            "Data & AI",
            "Pipelines, reporting and practical machine learning features that pay for themselves.",
            "🧠",
            "/#contact",
        ),
        Card::new(
            "Design Systems",
            "Component libraries and UX audits that keep every screen consistent as the product grows.",
            "🎨",
            "/#contact",
        ),
        Card::new(
            "Technical Audits",
            "A fixed-price review of architecture, security and delivery process with a prioritized action list.",
            "🔍",
            "/#contact",
        ),
    ]
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    html! {
        <ScrollLockCarousel
            id={"services".to_string()}
            title={"Services".to_string()}
            subtitle={"Pick one or combine them. Every engagement starts with a free scoping call.".to_string()}
            cards={services()}
            config={CarouselConfig::services()}
        />
    }
}
