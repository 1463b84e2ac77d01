//! Subscription plan catalog with direct subscribe.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::profile_gate::ProfileGate;
use crate::net::types::{Card, Plan, SubscriptionPayload};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format;

#[component]
pub fn PlanListPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <div class="plans-page">
            <h1>"Planes de Suscripción"</h1>
            <ProfileGate>
                <PlanCatalog/>
            </ProfileGate>
        </div>
    }
}

#[component]
fn PlanCatalog() -> impl IntoView {
    let plans = RwSignal::new(Vec::<Plan>::new());
    let cards = RwSignal::new(Vec::<Card>::new());
    let selected_card = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let (plans_result, cards_result) = futures::join!(
            crate::net::api::fetch_plans(),
            crate::net::api::fetch_cards()
        );
        match plans_result {
            Ok(found) => plans.set(found),
            Err(e) => error.set(e.to_string()),
        }
        match cards_result {
            Ok(found) => {
                if let Some(first) = found.first() {
                    selected_card.set(first.card_id.clone());
                }
                cards.set(found);
            }
            Err(e) => error.set(e.to_string()),
        }
        loading.set(false);
    });

    let on_subscribe = move |plan_id: String| {
        if busy.get() {
            return;
        }
        let card_id = selected_card.get();
        if card_id.is_empty() {
            error.set("Selecciona una tarjeta antes de suscribirte.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());
        let payload = SubscriptionPayload {
            card_id,
            plan_id,
            tyc: true,
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_subscription(&payload).await {
                    Ok(_) => navigate("/subconfirmation", NavigateOptions::default()),
                    Err(e) => {
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, payload);
        }
    };

    view! {
        <Show when=move || !error.get().is_empty()>
            <p class="page-status page-status--error">{move || error.get()}</p>
        </Show>
        {move || {
            if loading.get() {
                return view! { <p class="page-status">"Cargando planes..."</p> }.into_any();
            }
            if cards.get().is_empty() {
                return view! {
                    <div class="empty-state">
                        <h3>"Necesitas una tarjeta registrada"</h3>
                        <p>"Para suscribirte a un plan primero registra un método de pago."</p>
                        <a class="button" href="/card">
                            "Registrar Tarjeta"
                        </a>
                    </div>
                }
                .into_any();
            }
            let on_subscribe = on_subscribe.clone();
            view! {
                <div class="plans-page__card-picker">
                    <label>"Pagar con"</label>
                    <select
                        class="form-input"
                        prop:value=move || selected_card.get()
                        on:change=move |ev| selected_card.set(event_target_value(&ev))
                    >
                        {cards
                            .get()
                            .into_iter()
                            .map(|card: Card| {
                                view! { <option value=card.card_id.clone()>{card.card_id.clone()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="plans-grid">
                    {plans
                        .get()
                        .into_iter()
                        .map(|plan| {
                            let on_subscribe = on_subscribe.clone();
                            let plan_id = plan.id.clone();
                            view! {
                                <div class="plan-card">
                                    <h3>{plan.name.clone()}</h3>
                                    <p class="plan-card__price">{format::soles_from_cents(plan.amount)}</p>
                                    <p class="plan-card__description">
                                        {plan.description.clone().unwrap_or_default()}
                                    </p>
                                    <button
                                        class="button"
                                        disabled=move || busy.get()
                                        on:click=move |_| on_subscribe(plan_id.clone())
                                    >
                                        "Suscribirme"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }}
    }
}
