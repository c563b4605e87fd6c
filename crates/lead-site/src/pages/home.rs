//! Landing page

use leptos::*;

use crate::components::ContactForm;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center p-4 bg-gradient-to-br from-amber-50 to-orange-100">
            <ContactForm/>
        </div>
    }
}
