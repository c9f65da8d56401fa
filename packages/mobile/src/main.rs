use dioxus::prelude::*;
use views::{Home, Login, Signup, Splash};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Splash {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/home")]
    Home {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        ui::SessionProvider {
            Router::<Route> {}
        }
    }
}
