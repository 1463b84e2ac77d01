//! Admin panel landing: platform metrics plus the latest signups and
//! complaints. Reached only through the staff-or-superuser route guard.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::net::types::{AdminUser, Reclamo, ReclamoStatus};
use crate::util::format;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let users = RwSignal::new(Vec::<AdminUser>::new());
    let reclamos = RwSignal::new(Vec::<Reclamo>::new());
    let company_count = RwSignal::new(0usize);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let (users_result, reclamos_result, companies_result) = futures::join!(
            crate::net::api::fetch_admin_users(),
            crate::net::api::fetch_admin_reclamos(),
            crate::net::api::fetch_companies()
        );
        match users_result {
            Ok(found) => users.set(found),
            Err(e) => error.set(e.to_string()),
        }
        match reclamos_result {
            Ok(found) => reclamos.set(found),
            Err(e) => error.set(e.to_string()),
        }
        match companies_result {
            Ok(found) => company_count.set(found.len()),
            Err(e) => error.set(e.to_string()),
        }
        loading.set(false);
    });

    let pending_reclamos = move || {
        reclamos
            .get()
            .iter()
            .filter(|r| r.estado == ReclamoStatus::Pendiente)
            .count()
    };

    view! {
        <div class="admin-page">
            <h1>"Panel de Administración"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="page-status page-status--error">{move || error.get()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page-status">"Cargando métricas..."</p> }
            >
                <div class="stats-grid">
                    <StatCard label="Usuarios" value=Signal::derive(move || users.get().len().to_string())/>
                    <StatCard label="Empresas" value=Signal::derive(move || company_count.get().to_string())/>
                    <StatCard label="Reclamos" value=Signal::derive(move || reclamos.get().len().to_string())/>
                    <StatCard label="Reclamos pendientes" value=Signal::derive(move || pending_reclamos().to_string())/>
                </div>
                <div class="admin-page__columns">
                    <section class="admin-panel">
                        <div class="admin-panel__head">
                            <h2>"Últimos usuarios"</h2>
                            <a href="/admin/usuarios">"Ver todos"</a>
                        </div>
                        <ul class="admin-panel__list">
                            {move || {
                                users
                                    .get()
                                    .into_iter()
                                    .rev()
                                    .take(5)
                                    .map(|user| {
                                        view! {
                                            <li>
                                                <span>{user.username.clone()}</span>
                                                <span class="admin-panel__muted">{user.email.clone()}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </section>
                    <section class="admin-panel">
                        <div class="admin-panel__head">
                            <h2>"Últimos reclamos"</h2>
                            <a href="/admin/reclamos">"Ver todos"</a>
                        </div>
                        <ul class="admin-panel__list">
                            {move || {
                                reclamos
                                    .get()
                                    .into_iter()
                                    .take(5)
                                    .map(|reclamo| {
                                        view! {
                                            <li>
                                                <span>{reclamo.nombre.clone()}</span>
                                                <span class="admin-panel__muted">
                                                    {format::short_date(&reclamo.fecha)}
                                                    " · "
                                                    {reclamo.estado.label()}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </section>
                </div>
            </Show>
        </div>
    }
}
