use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::AuthContextProvider;
use crate::views::{HomePage, LoginPage, LogoutPage, ProfilePage, RegisterPage};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auth/login")]
    Login,
    #[at("/auth/register")]
    Register,
    #[at("/auth/profile")]
    Profile,
    #[at("/auth/logout")]
    Logout,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::Logout => html! { <LogoutPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthContextProvider>
                <Switch<Route> render={switch} />
            </AuthContextProvider>
        </BrowserRouter>
    }
}
