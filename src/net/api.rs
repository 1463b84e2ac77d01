//! Typed REST helpers for every backend endpoint.
//!
//! All calls ride the gateway, which stamps the authorization header and
//! owns session-expiry handling; nothing here touches headers or storage.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::gateway;
use super::types::*;

fn company_endpoint(id: i64) -> String {
    format!("/api/empresas/{id}/")
}

fn company_statistics_endpoint(id: i64) -> String {
    format!("/api/empresas/{id}/estadisticas/")
}

fn cars_by_company_endpoint(company_id: i64) -> String {
    format!("/api/carros/?empresa={company_id}")
}

fn car_endpoint(id: i64) -> String {
    format!("/api/carros/{id}/")
}

fn subscription_endpoint(id: &str) -> String {
    format!("/api/subscriptions/{id}/")
}

fn admin_reclamo_responder_endpoint(id: i64) -> String {
    format!("/api/admin/reclamos/{id}/responder/")
}

/// Authenticate and obtain the session credential.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest {
        username: username.to_owned(),
        password: password.to_owned(),
    };
    gateway::post_json("/login", &body).await
}

/// Register a new account; the backend logs it in and returns a credential.
pub async fn signup(username: &str, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = SignupRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    };
    gateway::post_json("/signup", &body).await
}

/// Companies visible to the caller. The backend scopes the list to the
/// requesting user, so it holds at most one element.
pub async fn fetch_companies() -> Result<Vec<Company>, ApiError> {
    gateway::get_json("/api/empresas/").await
}

/// The caller's company, if one is registered.
pub async fn fetch_company() -> Result<Option<Company>, ApiError> {
    let companies = fetch_companies().await?;
    Ok(companies.into_iter().next())
}

pub async fn fetch_company_by_id(id: i64) -> Result<Company, ApiError> {
    gateway::get_json(&company_endpoint(id)).await
}

pub async fn create_company(payload: &CompanyPayload) -> Result<Company, ApiError> {
    gateway::post_json("/api/empresas/", payload).await
}

pub async fn update_company(id: i64, payload: &CompanyPayload) -> Result<Company, ApiError> {
    gateway::put_json(&company_endpoint(id), payload).await
}

pub async fn delete_company(id: i64) -> Result<(), ApiError> {
    gateway::delete(&company_endpoint(id)).await
}

pub async fn fetch_company_statistics(id: i64) -> Result<CompanyStatistics, ApiError> {
    gateway::get_json(&company_statistics_endpoint(id)).await
}

pub async fn fetch_cars(company_id: i64) -> Result<Vec<Car>, ApiError> {
    gateway::get_json(&cars_by_company_endpoint(company_id)).await
}

pub async fn fetch_car(id: i64) -> Result<Car, ApiError> {
    gateway::get_json(&car_endpoint(id)).await
}

pub async fn create_car(payload: &CarPayload) -> Result<Car, ApiError> {
    gateway::post_json("/api/carros/", payload).await
}

pub async fn update_car(id: i64, payload: &CarPayload) -> Result<Car, ApiError> {
    gateway::put_json(&car_endpoint(id), payload).await
}

pub async fn delete_car(id: i64) -> Result<(), ApiError> {
    gateway::delete(&car_endpoint(id)).await
}

/// The Culqi plan catalog, unwrapped from its envelope.
pub async fn fetch_plans() -> Result<Vec<Plan>, ApiError> {
    let envelope: PlansEnvelope = gateway::get_json("/api/culqi/plans/").await?;
    Ok(envelope.plans)
}

/// The caller's billing profile, or `None` when none exists yet. The
/// backend reports the missing-profile case as a 404.
pub async fn fetch_customer() -> Result<Option<Customer>, ApiError> {
    match gateway::get_json::<Customer>("/api/customers/").await {
        Ok(customer) => Ok(Some(customer)),
        Err(error) if error.is_not_found() => Ok(None),
        Err(error) => Err(error),
    }
}

pub async fn create_customer(payload: &CustomerPayload) -> Result<Customer, ApiError> {
    gateway::post_json("/api/customers/", payload).await
}

pub async fn update_customer(payload: &CustomerPayload) -> Result<Customer, ApiError> {
    gateway::patch_json("/api/customers/edit/", payload).await
}

/// The caller's Culqi customer id, needed to attach cards.
pub async fn fetch_customer_id() -> Result<String, ApiError> {
    let response: CustomerIdResponse = gateway::get_json("/api/customers/me/").await?;
    Ok(response.customer_id)
}

pub async fn fetch_cards() -> Result<Vec<Card>, ApiError> {
    gateway::get_json("/api/cards/").await
}

/// Attach a card tokenized by the Culqi widget to the caller's profile.
pub async fn create_card(payload: &CardPayload) -> Result<Card, ApiError> {
    gateway::post_json("/api/cards/", payload).await
}

/// Live subscriptions, unwrapped from the Culqi passthrough envelope.
pub async fn fetch_subscriptions() -> Result<Vec<CulqiSubscription>, ApiError> {
    let envelope: SubscriptionsEnvelope = gateway::get_json("/api/subscriptions/").await?;
    Ok(envelope.data)
}

pub async fn create_subscription(payload: &SubscriptionPayload) -> Result<CreatedSubscription, ApiError> {
    gateway::post_json("/api/subscriptions/", payload).await
}

pub async fn cancel_subscription(id: &str) -> Result<(), ApiError> {
    gateway::delete(&subscription_endpoint(id)).await
}

/// The caller's own complaints, newest first (backend ordering).
pub async fn fetch_reclamos() -> Result<Vec<Reclamo>, ApiError> {
    gateway::get_json("/api/reclamos/").await
}

pub async fn create_reclamo(payload: &ReclamoPayload) -> Result<Reclamo, ApiError> {
    gateway::post_json("/api/reclamos/", payload).await
}

pub async fn fetch_admin_users() -> Result<Vec<AdminUser>, ApiError> {
    gateway::get_json("/api/admin/users/").await
}

pub async fn fetch_admin_reclamos() -> Result<Vec<Reclamo>, ApiError> {
    gateway::get_json("/api/admin/reclamos/").await
}

/// Record an admin response and status transition on a complaint.
pub async fn respond_reclamo(id: i64, payload: &ReclamoResponsePayload) -> Result<Reclamo, ApiError> {
    gateway::patch_json(&admin_reclamo_responder_endpoint(id), payload).await
}
