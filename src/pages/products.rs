use yew::prelude::*;

use crate::carousel::CarouselConfig;
use crate::components::card::Card;
use crate::components::scroll_carousel::ScrollLockCarousel;

fn products() -> Vec<Card> {
    vec![
        Card::new(
            "Ledgerline",
            "Reconciliation engine for mid-size finance teams. Imports bank feeds and flags mismatches before month end.",
            "📒",
            "/#contact",
        ),
        Card::new(
            "Fieldkit",
            "Offline-first mobile app for technicians. Work orders, photos and signatures sync when the signal comes back.",
            "🧰",
            "/#contact",
        ),
        Card::new(
            "Pulseboard",
            "Operational dashboards wired straight into your existing databases. No warehouse project required.",
            "📈",
            "/#contact",
        ),
        Card::new(
            "Relay",
            "Customer messaging hub that routes email, SMS and chat into one queue with shared history.",
            "📨",
            "/#contact",
        ),
    ]
}

#[function_component(OurProducts)]
pub fn our_products() -> Html {
    html! {
        <ScrollLockCarousel
            id={"products".to_string()}
            title={"Our Products".to_string()}
            subtitle={"Software we build, run and keep improving for clients across industries.".to_string()}
            cards={products()}
            config={CarouselConfig::products()}
        />
    }
}
