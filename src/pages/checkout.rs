//! Card management: list stored cards and add new ones through the Culqi
//! checkout widget.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::profile_gate::{CustomerProfile, ProfileGate};
use crate::net::types::Card;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let session = expect_context::<SessionState>();
    install_unauth_redirect(session, use_navigate());

    view! {
        <div class="checkout-page">
            <h1>"Mis Tarjetas"</h1>
            <ProfileGate>
                <CardManager/>
            </ProfileGate>
        </div>
    }
}

#[component]
fn CardManager() -> impl IntoView {
    let profile = expect_context::<CustomerProfile>();
    let customer_id = RwSignal::new(None::<String>);
    let cards = RwSignal::new(Vec::<Card>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        // The widget script can load while the card list is being fetched.
        crate::util::culqi::ensure_widget_script();
        leptos::task::spawn_local(async move {
            let (id_result, cards_result) = futures::join!(
                crate::net::api::fetch_customer_id(),
                crate::net::api::fetch_cards()
            );
            match id_result {
                Ok(id) => customer_id.set(Some(id)),
                Err(e) => error.set(e.to_string()),
            }
            match cards_result {
                Ok(found) => cards.set(found),
                Err(e) => error.set(e.to_string()),
            }
            loading.set(false);
        });
    }

    let on_add_card = move |_| {
        #[cfg(feature = "hydrate")]
        {
            error.set(String::new());
            success.set(String::new());
            let Some(cid) = customer_id.get_untracked() else {
                error.set("Tu perfil aún no tiene un identificador de pago.".to_owned());
                return;
            };
            let email = profile
                .0
                .get_untracked()
                .and_then(|customer| customer.email)
                .unwrap_or_default();
            let opened = crate::util::culqi::open_card_checkout(
                "CarWash Pe",
                &email,
                0,
                move |token_id| {
                    let payload = crate::net::types::CardPayload {
                        customer_id: cid.clone(),
                        token_id,
                    };
                    leptos::task::spawn_local(async move {
                        match crate::net::api::create_card(&payload).await {
                            Ok(card) => {
                                cards.update(|list| list.push(card));
                                success.set("Tarjeta registrada correctamente.".to_owned());
                            }
                            Err(e) => error.set(e.to_string()),
                        }
                    });
                },
            );
            if let Err(message) = opened {
                error.set(message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (customer_id, profile);
        }
    };

    view! {
        <Show when=move || !error.get().is_empty()>
            <p class="page-status page-status--error">{move || error.get()}</p>
        </Show>
        <Show when=move || !success.get().is_empty()>
            <p class="page-status page-status--success">{move || success.get()}</p>
        </Show>
        {move || {
            if loading.get() {
                return view! { <p class="page-status">"Cargando tarjetas..."</p> }.into_any();
            }
            let items = cards.get();
            if items.is_empty() {
                return view! {
                    <div class="empty-state">
                        <p>"No tienes tarjetas registradas."</p>
                    </div>
                }
                .into_any();
            }
            items
                .into_iter()
                .map(|card| {
                    view! {
                        <div class="card-row">
                            <span class="card-row__id">{card.card_id.clone()}</span>
                            <span class=if card.active { "badge badge--activa" } else { "badge" }>
                                {if card.active { "Activa" } else { "Inactiva" }}
                            </span>
                            <span class="card-row__date">
                                {card.creation_date.as_deref().map(format::short_date).unwrap_or_default()}
                            </span>
                        </div>
                    }
                })
                .collect_view()
                .into_any()
        }}
        <button class="button" on:click=on_add_card>
            "Agregar Tarjeta"
        </button>
    }
}
