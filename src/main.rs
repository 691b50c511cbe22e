use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod scroll_lock;
mod carousel;
mod components {
    pub mod card;
    pub mod scroll_carousel;
}
mod pages {
    pub mod landing;
    pub mod products;
    pub mod services;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the front page"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::<dyn FnMut()>::new(move || {
                if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                    is_scrolled.set(scroll_y > 80.0);
                }
            });

            if let Some(window) = window.as_ref() {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Let the anchor navigate, only close the menu
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"northwind.studio"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="/#products" class="nav-link" onclick={close_menu.clone()}>{"Products"}</a>
                    <a href="/#services" class="nav-link" onclick={close_menu.clone()}>{"Services"}</a>
                    <a href="/#contact" class="nav-contact-button" onclick={close_menu}>{"Contact"}</a>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(13, 13, 13, 0.9);
                        backdrop-filter: blur(10px);
                    }
                    .nav-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                    }
                    .nav-logo, .nav-link, .nav-contact-button {
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 1.5rem;
                        align-items: center;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                    }
                    .burger-menu span {
                        display: block;
                        width: 22px;
                        height: 2px;
                        margin: 4px 0;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: block;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: rgba(13, 13, 13, 0.95);
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
