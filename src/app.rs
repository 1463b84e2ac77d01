//! Application shell: session context, router, role-aware chrome.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::admin_navbar::AdminNavbar;
use crate::components::footer::Footer;
use crate::components::guard::AdminRoute;
use crate::components::navbar::Navbar;
use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::admin_reclamos::AdminReclamosPage;
use crate::pages::admin_users::AdminUsersPage;
use crate::pages::car_detail::CarDetailPage;
use crate::pages::car_form::{AddCarPage, EditCarPage};
use crate::pages::cars::CarListPage;
use crate::pages::checkout::CheckoutPage;
use crate::pages::company::CompanyPage;
use crate::pages::company_form::{AddCompanyPage, EditCompanyPage};
use crate::pages::customer_form::{CreateCustomerPage, UpdateCustomerPage};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::plans::PlanListPage;
use crate::pages::profile::CustomerProfilePage;
use crate::pages::reclamo_form::ReclamoFormPage;
use crate::pages::reclamos::ReclamoListPage;
use crate::pages::register::RegisterPage;
use crate::pages::root_redirect::RootRedirectPage;
use crate::pages::subscription_confirmation::SubscriptionConfirmationPage;
use crate::pages::subscriptions::SubscriptionListPage;
use crate::state::session::{self, SessionState};

/// HTML shell used by the SSR host.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The session store is the single source of truth for "who is logged
    // in"; every consumer reads it through this context handle.
    let session_state = SessionState::new();
    provide_context(session_state);
    session::install_cross_tab_sync(session_state);

    let is_admin = move || session_state.get().is_some_and(|record| record.is_admin());

    view! {
        <Stylesheet id="leptos" href="/pkg/washboard.css"/>
        <Title text="CarWashPe"/>
        <Router>
            <div class="app-shell">
                {move || {
                    if is_admin() {
                        view! { <AdminNavbar/> }.into_any()
                    } else {
                        view! { <Navbar/> }.into_any()
                    }
                }}
                <main class="app-main">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=RootRedirectPage/>
                        <Route path=path!("/home") view=HomePage/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/register") view=RegisterPage/>
                        <Route path=path!("/companies") view=CompanyPage/>
                        <Route path=path!("/add-company") view=AddCompanyPage/>
                        <Route path=path!("/edit-company/:id") view=EditCompanyPage/>
                        <Route path=path!("/companies/:company_id/cars") view=CarListPage/>
                        <Route path=path!("/companies/:company_id/add-car") view=AddCarPage/>
                        <Route path=path!("/companies/:company_id/edit-car/:car_id") view=EditCarPage/>
                        <Route path=path!("/companies/:company_id/car/:car_id") view=CarDetailPage/>
                        <Route path=path!("/plans") view=PlanListPage/>
                        <Route path=path!("/card") view=CheckoutPage/>
                        <Route path=path!("/suscripciones") view=SubscriptionListPage/>
                        <Route path=path!("/subconfirmation") view=SubscriptionConfirmationPage/>
                        <Route path=path!("/createCustomerForm") view=CreateCustomerPage/>
                        <Route path=path!("/update-customer") view=UpdateCustomerPage/>
                        <Route path=path!("/profile") view=CustomerProfilePage/>
                        <Route path=path!("/reclamo") view=ReclamoFormPage/>
                        <Route path=path!("/mis-reclamos") view=ReclamoListPage/>
                        <Route
                            path=path!("/admin")
                            view=|| view! { <AdminRoute><AdminDashboardPage/></AdminRoute> }
                        />
                        <Route
                            path=path!("/admin/usuarios")
                            view=|| view! { <AdminRoute><AdminUsersPage/></AdminRoute> }
                        />
                        <Route
                            path=path!("/admin/reclamos")
                            view=|| view! { <AdminRoute><AdminReclamosPage/></AdminRoute> }
                        />
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2>"Página no encontrada"</h2>
            <a class="button" href="/">
                "Volver al inicio"
            </a>
        </div>
    }
}
