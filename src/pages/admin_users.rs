//! Admin user table.

#[cfg(test)]
#[path = "admin_users_test.rs"]
mod admin_users_test;

use leptos::prelude::*;

use crate::net::types::AdminUser;

fn role_label(is_staff: bool, is_superuser: bool) -> &'static str {
    if is_superuser {
        "Superusuario"
    } else if is_staff {
        "Staff"
    } else {
        "Usuario"
    }
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let users = RwSignal::new(Vec::<AdminUser>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_admin_users().await {
            Ok(found) => users.set(found),
            Err(e) => error.set(e.to_string()),
        }
        loading.set(false);
    });

    view! {
        <div class="admin-page">
            <h1>"Usuarios"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="page-status page-status--error">{move || error.get()}</p>
            </Show>
            {move || {
                if loading.get() {
                    return view! { <p class="page-status">"Cargando usuarios..."</p> }.into_any();
                }
                view! {
                    <table class="admin-table">
                        <thead>
                            <tr>
                                <th>"Usuario"</th>
                                <th>"Nombre"</th>
                                <th>"Correo"</th>
                                <th>"Rol"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {users
                                .get()
                                .into_iter()
                                .map(|user| {
                                    view! {
                                        <tr>
                                            <td>{user.username.clone()}</td>
                                            <td>{format!("{} {}", user.first_name, user.last_name)}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>{role_label(user.is_staff, user.is_superuser)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}
