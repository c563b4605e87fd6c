//! Application shell: head metadata and routing

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::{provide_toasts, Toaster};
use crate::pages::HomePage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toasts();

    view! {
        <Title text="Start Trading Today - Connect with Expert Brokers"/>
        <Meta
            name="description"
            content="Join thousands of traders and connect with expert brokers to kickstart your trading journey. Get personalized trading advice and support."
        />
        <Meta
            name="keywords"
            content="Trading, Expert Brokers, Trading Advice, Trading Support, Financial Trading, Trading Goals, Trading Services"
        />
        <Meta property="og:title" content="Start Trading Today - Connect with Expert Brokers"/>
        <Meta
            property="og:description"
            content="Join thousands of traders and connect with expert brokers to kickstart your trading journey. Get personalized trading advice and support."
        />
        <Meta property="og:site_name" content="Trading Services"/>
        <Meta property="og:type" content="website"/>
        <Meta property="og:locale" content="en_US"/>
        <Link rel="icon" href="/assets/favicon.svg"/>

        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}
