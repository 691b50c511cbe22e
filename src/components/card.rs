use yew::prelude::*;

/// One slide in a carousel. The carousel never looks inside it.
#[derive(Clone, PartialEq, Debug)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub link: String,
}

impl Card {
    pub fn new(title: &str, description: &str, icon: &str, link: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            link: link.to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CardViewProps {
    pub card: Card,
    pub width: f64,
    pub active: bool,
}

#[function_component(CardView)]
pub fn card_view(props: &CardViewProps) -> Html {
    let CardViewProps { card, width, active } = props;

    html! {
        <article
            class={classes!("carousel-card", (*active).then(|| "active"))}
            style={format!("flex: 0 0 {:.1}px;", width)}
        >
            <div class="card-icon">{&card.icon}</div>
            <h3>{&card.title}</h3>
            <p>{&card.description}</p>
            <a href={card.link.clone()} class="card-link">{"Learn more →"}</a>
        </article>
    }
}
