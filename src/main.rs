use std::rc::Rc;

use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod state;
mod store;
mod components {
    pub mod notice;
}
mod pages {
    pub mod dashboard;
    pub mod funnel;
    pub mod mentorship;
    pub mod opportunity;
    pub mod profile;
    pub mod signup;
    pub mod welcome;
}

use config::FunnelConfig;
use pages::funnel::Funnel;
use store::{LeadStore, SupabaseStore};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, store: Rc<dyn LeadStore>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering funnel");
            html! { <Funnel {store} /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: FunnelConfig,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let store = use_memo(
        |config| SupabaseStore::new(config),
        props.config.clone(),
    );
    let store: Rc<dyn LeadStore> = store;

    html! {
        <BrowserRouter>
            <Switch<Route> render={move |route| switch(route, store.clone())} />
        </BrowserRouter>
    }
}

fn main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    // Missing store credentials are a fatal startup error, nothing in the
    // funnel can run without them.
    let config = match FunnelConfig::from_env() {
        Ok(config) => config,
        Err(err) => panic!("lead store configuration error: {err}"),
    };

    info!("Starting funnel");
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
