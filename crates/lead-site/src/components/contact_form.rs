//! Lead capture form bound to the [`LeadForm`] state machine

use std::time::Duration;

use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;

use lead_core::{Field, FormPhase, LeadForm, SubmitOutcome, SUBMIT_FAILURE_MESSAGE};

use crate::components::Toasts;
use crate::config::SiteConfig;
use crate::submit::send_lead;

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let toasts = expect_context::<Toasts>();

    let form = create_rw_signal(LeadForm::new());

    // The countdown interval lives exactly as long as the success phase:
    // entering it acquires the handle, leaving it on any path (reset,
    // failure, unmount) clears it. No tick can fire after exit.
    let countdown_timer: StoredValue<Option<IntervalHandle>> = store_value(None);

    let stop_countdown = move || {
        countdown_timer.update_value(|timer| {
            if let Some(handle) = timer.take() {
                handle.clear();
            }
        });
    };

    create_effect(move |_| {
        let in_success = matches!(form.with(|f| f.phase()), FormPhase::Success { .. });

        if in_success {
            if countdown_timer.with_value(|timer| timer.is_none()) {
                let handle = set_interval_with_handle(
                    move || {
                        form.update(|f| {
                            f.tick();
                        });
                    },
                    Duration::from_secs(1),
                )
                .expect("failed to schedule the reset countdown");
                countdown_timer.set_value(Some(handle));
            }
        } else {
            stop_countdown();
        }
    });

    on_cleanup(stop_countdown);

    let field_error = move |field: Field| form.with(|f| f.errors().get(field).map(|e| e.to_string()));

    let relay = config.relay.clone();
    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Refused while a request is in flight or validation fails; in the
        // latter case the controller has populated the inline errors.
        let lead = match form.try_update(|f| f.submit()).flatten() {
            Some(lead) => lead,
            None => return,
        };

        let relay = relay.clone();
        spawn_local(async move {
            let outcome = send_lead(&relay, &lead).await;
            if let SubmitOutcome::Failed(err) = &outcome {
                logging::warn!("lead submission failed: {}", err);
                toasts.error(SUBMIT_FAILURE_MESSAGE);
            }
            form.update(|f| f.finish(outcome));
        });
    });

    view! {
        <div class="w-full max-w-lg">
            <Show
                when=move || !matches!(form.with(|f| f.phase()), FormPhase::Success { .. })
                fallback=move || {
                    let seconds = move || form.with(|f| f.countdown().unwrap_or(0));
                    view! {
                        <div class="bg-white rounded-2xl shadow-xl p-10 text-center">
                            <div class="w-16 h-16 bg-green-100 text-green-600 rounded-full flex items-center justify-center mx-auto mb-6">
                                <svg class="w-8 h-8" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"/>
                                </svg>
                            </div>
                            <h2 class="text-2xl font-bold text-green-800 mb-3">"Message Sent Successfully!"</h2>
                            <p class="text-green-700 mb-2">"Thank you for your interest in our trading services."</p>
                            <p class="text-green-600 mb-6">
                                "Our expert broker team will contact you within 24 hours to discuss your trading goals and get you started."
                            </p>
                            <div class="inline-flex items-center text-green-600 bg-green-50 px-4 py-2 rounded-full">
                                <svg class="w-4 h-4 mr-2" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z"/>
                                </svg>
                                <span class="text-sm font-medium">"Form will reset in " {seconds} " seconds"</span>
                            </div>
                        </div>
                    }
                }
            >
                <div class="bg-white rounded-2xl shadow-xl p-8">
                    <div class="text-center mb-8">
                        <h1 class="text-3xl font-bold text-gray-900 mb-3">"Start Trading Today"</h1>
                        <p class="text-lg text-gray-600">
                            "Connect with our expert brokers and begin your trading journey"
                        </p>
                    </div>

                    // Browser validation is off so the controller's rules are
                    // the single authority over what blocks a submit.
                    <form on:submit=move |ev| on_submit.call(ev) novalidate=true>
                        <div class="mb-6">
                            <label class="block text-sm font-medium text-gray-700 mb-2">"Full Name *"</label>
                            <input
                                type="text"
                                name="name"
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-amber-500 focus:border-amber-500"
                                prop:value=move || form.with(|f| f.lead().name.clone())
                                on:input=move |ev| form.update(|f| f.input("name", &event_target_value(&ev)))
                            />
                            {move || field_error(Field::Name).map(|msg| view! {
                                <p class="mt-1 text-sm text-red-600">{msg}</p>
                            })}
                        </div>

                        <div class="grid md:grid-cols-2 gap-4">
                            <div class="mb-2">
                                <label class="block text-sm font-medium text-gray-700 mb-2">"Email Address"</label>
                                <input
                                    type="email"
                                    name="email"
                                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-amber-500 focus:border-amber-500"
                                    prop:value=move || form.with(|f| f.lead().email.clone())
                                    on:input=move |ev| form.update(|f| f.input("email", &event_target_value(&ev)))
                                />
                                {move || field_error(Field::Email).map(|msg| view! {
                                    <p class="mt-1 text-sm text-red-600">{msg}</p>
                                })}
                            </div>

                            <div class="mb-2">
                                <label class="block text-sm font-medium text-gray-700 mb-2">"Mobile Number"</label>
                                <input
                                    type="tel"
                                    name="mobile"
                                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-amber-500 focus:border-amber-500"
                                    prop:value=move || form.with(|f| f.lead().mobile.clone())
                                    on:input=move |ev| form.update(|f| f.input("mobile", &event_target_value(&ev)))
                                />
                                {move || field_error(Field::Mobile).map(|msg| view! {
                                    <p class="mt-1 text-sm text-red-600">{msg}</p>
                                })}
                            </div>
                        </div>

                        <p class="text-sm text-gray-500 mb-6">"* Either email or mobile number is required"</p>

                        <div class="mb-6">
                            <label class="block text-sm font-medium text-gray-700 mb-2">"Trading Goals (Optional)"</label>
                            <textarea
                                name="message"
                                rows="4"
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-amber-500 focus:border-amber-500"
                                prop:value=move || form.with(|f| f.lead().message.clone())
                                on:input=move |ev| form.update(|f| f.input("message", &event_target_value(&ev)))
                            ></textarea>
                        </div>

                        <button
                            type="submit"
                            class="w-full py-4 bg-amber-600 hover:bg-amber-700 disabled:opacity-60 disabled:cursor-not-allowed text-white font-semibold rounded-lg transition flex items-center justify-center"
                            disabled=move || form.with(|f| f.is_submitting())
                        >
                            <Show
                                when=move || form.with(|f| f.is_submitting())
                                fallback=|| view! {
                                    <svg class="w-5 h-5 mr-2" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 7h8m0 0v8m0-8l-8 8-4-4-6 6"/>
                                    </svg>
                                    "Connect with Our Brokers"
                                }
                            >
                                <span class="inline-block h-5 w-5 mr-2 border-2 border-white border-t-transparent rounded-full animate-spin"></span>
                                "Sending Message..."
                            </Show>
                        </button>
                    </form>

                    <div class="text-center mt-6">
                        <p class="text-sm text-gray-500">"🔒 Secure & Confidential • Response within 24 hours"</p>
                    </div>
                </div>
            </Show>
        </div>
    }
}
