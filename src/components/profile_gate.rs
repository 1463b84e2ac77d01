//! "Customer profile required" wrapper.
//!
//! DESIGN
//! ======
//! Several billing screens (profile, plans, cards) can only work once the
//! user has a billing profile. The original flow re-checked this in every
//! screen; here the check lives in one wrapper. Unlike the role guard this
//! decision is network-bound (the backend answers 404 when no profile
//! exists), so the gate is asynchronous and renders a transitional state.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Customer;

/// Resolved billing profile, provided to the gated subtree via context.
#[derive(Clone, Copy)]
pub struct CustomerProfile(pub RwSignal<Option<Customer>>);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum ProfileCheck {
    #[default]
    Loading,
    Missing,
    Ready,
    Failed(String),
}

/// Render children only when the caller has a billing profile; otherwise
/// prompt to create one.
#[component]
pub fn ProfileGate(children: ChildrenFn) -> impl IntoView {
    let check = RwSignal::new(ProfileCheck::Loading);
    let profile = CustomerProfile(RwSignal::new(None));
    provide_context(profile);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_customer().await {
            Ok(Some(customer)) => {
                profile.0.set(Some(customer));
                check.set(ProfileCheck::Ready);
            }
            Ok(None) => check.set(ProfileCheck::Missing),
            Err(error) => check.set(ProfileCheck::Failed(error.to_string())),
        }
    });

    let navigate = use_navigate();
    view! {
        {move || match check.get() {
            ProfileCheck::Loading => view! {
                <p class="page-status">"Cargando tu perfil..."</p>
            }
            .into_any(),
            ProfileCheck::Missing => {
                let navigate = navigate.clone();
                view! {
                    <div class="profile-prompt">
                        <h3>"Aún no tienes un perfil de facturación"</h3>
                        <p>"Crea tu perfil para poder registrar tarjetas y suscribirte a un plan."</p>
                        <button
                            class="button"
                            on:click=move |_| navigate("/createCustomerForm", NavigateOptions::default())
                        >
                            "Crear Perfil"
                        </button>
                    </div>
                }
                .into_any()
            }
            ProfileCheck::Failed(message) => view! {
                <p class="page-status page-status--error">{message}</p>
            }
            .into_any(),
            ProfileCheck::Ready => children().into_any(),
        }}
    }
}
