use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="adboard" href="/style/main.css"/>
        <Title text="Adboard"/>

        <Router>
            <Routes>
                <Route path="/" view=ProductsPage/>
                <Route path="/new" view=NewProductPage/>
                <Route path="/edit/:id" view=EditProductPage/>
            </Routes>
        </Router>
    }
}
