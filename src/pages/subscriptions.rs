//! Active subscription list with cancellation.

#[cfg(test)]
#[path = "subscriptions_test.rs"]
mod subscriptions_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::CulqiSubscription;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format;

/// Culqi reports subscription status as a small integer.
fn status_label(status: Option<i64>) -> &'static str {
    match status {
        Some(1) => "Activa",
        Some(2) => "Inactiva",
        Some(_) => "En revisión",
        None => "Desconocido",
    }
}

fn plan_name(subscription: &CulqiSubscription) -> String {
    subscription
        .plan
        .as_ref()
        .and_then(|plan| plan.name.clone())
        .unwrap_or_else(|| "Plan".to_owned())
}

#[component]
pub fn SubscriptionListPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    install_unauth_redirect(session, use_navigate());

    let subscriptions = RwSignal::new(Vec::<CulqiSubscription>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_subscriptions().await {
            Ok(found) => subscriptions.set(found),
            Err(e) => error.set(e.to_string()),
        }
        loading.set(false);
    });

    let on_cancel = move |subscription_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window().is_some_and(|w| {
                w.confirm_with_message("¿Estás seguro de cancelar esta suscripción?")
                    .unwrap_or(false)
            });
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::cancel_subscription(&subscription_id).await {
                    Ok(()) => {
                        subscriptions.update(|list| list.retain(|s| s.id != subscription_id));
                        success.set("Suscripción cancelada exitosamente.".to_owned());
                    }
                    Err(e) => error.set(e.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = subscription_id;
        }
    };

    view! {
        <div class="subscriptions-page">
            <h1>"Mis Suscripciones"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="page-status page-status--error">{move || error.get()}</p>
            </Show>
            <Show when=move || !success.get().is_empty()>
                <p class="page-status page-status--success">{move || success.get()}</p>
            </Show>
            {move || {
                if loading.get() {
                    return view! { <p class="page-status">"Cargando suscripciones..."</p> }.into_any();
                }
                let items = subscriptions.get();
                if items.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <p>"No tienes suscripciones activas."</p>
                            <a class="button" href="/plans">
                                "Ver Planes"
                            </a>
                        </div>
                    }
                    .into_any();
                }
                items
                    .into_iter()
                    .map(|subscription| {
                        let subscription_id = subscription.id.clone();
                        let next_billing = subscription
                            .next_billing_date
                            .and_then(format::epoch_date)
                            .unwrap_or_else(|| "—".to_owned());
                        view! {
                            <div class="subscription-card">
                                <h3>{plan_name(&subscription)}</h3>
                                <span class="badge">{status_label(subscription.status)}</span>
                                <p class="subscription-card__billing">
                                    "Próximo cobro: "
                                    {next_billing}
                                </p>
                                <button
                                    class="button button--danger"
                                    on:click=move |_| on_cancel(subscription_id.clone())
                                >
                                    "Cancelar"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}
