//! Wire DTOs for the REST boundary with the backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON shapes exactly (Django REST
//! serializers plus Culqi passthrough payloads) so serde decoding stays
//! lossless. Django serializes decimal fields as strings and Culqi reports
//! money in cents, so the numeric fields that cross those boundaries use
//! custom deserializer helpers instead of bare derives.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account fields returned inside the login/signup response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Login username.
    pub username: String,
    /// Contact email, when the account has one.
    #[serde(default)]
    pub email: Option<String>,
    /// Django staff flag.
    #[serde(default)]
    pub is_staff: bool,
    /// Django superuser flag.
    #[serde(default)]
    pub is_superuser: bool,
}

/// Response body of `POST /login` and `POST /signup`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    /// Bearer credential to present on subsequent requests.
    pub token: String,
    /// The authenticated account.
    pub user: UserAccount,
}

/// Request body of `POST /login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body of `POST /signup`.
#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A car-wash company as returned by `/api/empresas/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    /// Display name.
    pub nombre: String,
    /// Peruvian tax id, optional.
    #[serde(default)]
    pub ruc: Option<String>,
    /// Street address, optional.
    #[serde(default)]
    pub direccion: Option<String>,
}

/// Request body for company create/update.
#[derive(Clone, Debug, Serialize)]
pub struct CompanyPayload {
    pub nombre: String,
    pub ruc: Option<String>,
    pub direccion: Option<String>,
}

/// Vehicle wash status as stored by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    /// Waiting to be washed.
    #[default]
    Espera,
    /// Wash in progress.
    Proceso,
    /// Wash finished.
    Terminado,
}

impl CarStatus {
    /// Human-facing Spanish label, matching the backend's display choices.
    pub fn label(self) -> &'static str {
        match self {
            Self::Espera => "En Espera",
            Self::Proceso => "En Proceso",
            Self::Terminado => "Terminado",
        }
    }

    /// Wire value accepted by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Espera => "espera",
            Self::Proceso => "proceso",
            Self::Terminado => "terminado",
        }
    }

    /// Parse a wire value; unknown values fall back to the waiting state.
    pub fn parse(value: &str) -> Self {
        match value {
            "proceso" => Self::Proceso,
            "terminado" => Self::Terminado,
            _ => Self::Espera,
        }
    }
}

/// A vehicle as returned by `/api/carros/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    /// License plate.
    pub placa: String,
    /// Make.
    pub marca: String,
    /// Paint color, optional.
    #[serde(default)]
    pub color: Option<String>,
    /// Model, optional.
    #[serde(default)]
    pub modelo: Option<String>,
    /// Photo URL, optional.
    #[serde(default)]
    pub foto: Option<String>,
    /// Arrival timestamp (ISO 8601).
    pub dia_llegada: String,
    /// Departure timestamp (ISO 8601), once the wash is done.
    #[serde(default)]
    pub dia_salida: Option<String>,
    /// Owner contact phone.
    pub numero_telefono: String,
    /// Wash price in soles. Django serializes decimals as strings.
    #[serde(deserialize_with = "deserialize_f64_from_decimal")]
    pub precio: f64,
    pub estado: CarStatus,
}

/// Request body for vehicle create/update. `precio` is passed through as the
/// raw form text so the backend's decimal validation owns the parse.
#[derive(Clone, Debug, Serialize)]
pub struct CarPayload {
    pub placa: String,
    pub marca: String,
    pub color: Option<String>,
    pub modelo: Option<String>,
    pub numero_telefono: String,
    pub precio: String,
    pub estado: CarStatus,
    pub dia_salida: Option<String>,
    /// Owning company id; write-only on the backend serializer.
    pub empresa: i64,
}

/// A subscription plan from the Culqi catalog (`/api/culqi/plans/`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Culqi plan id (`pln_...`).
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in cents.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub amount: i64,
    /// ISO currency code, usually `PEN`.
    #[serde(default)]
    pub currency: Option<String>,
}

/// Envelope returned by the plan catalog endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlansEnvelope {
    #[serde(default)]
    pub plans: Vec<Plan>,
}

/// A billing customer profile as returned by `/api/customers/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    /// Culqi customer id (`cus_...`), assigned on creation.
    #[serde(default)]
    pub culqi_id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub address_city: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub creation_date: Option<String>,
}

/// Request body for customer profile create/edit.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CustomerPayload {
    pub address: String,
    pub address_city: String,
    pub country_code: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// Response of `GET /api/customers/me/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CustomerIdResponse {
    pub customer_id: String,
}

/// A stored payment card as returned by `/api/cards/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    /// Culqi card id (`crd_...`).
    pub card_id: String,
    /// Owning Culqi customer id.
    pub customer_id: String,
    pub active: bool,
    #[serde(default)]
    pub creation_date: Option<String>,
}

/// Request body of `POST /api/cards/`; `token_id` comes from the Culqi
/// checkout widget.
#[derive(Clone, Debug, Serialize)]
pub struct CardPayload {
    pub customer_id: String,
    pub token_id: String,
}

/// A live subscription as proxied from Culqi by `GET /api/subscriptions/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CulqiSubscription {
    /// Culqi subscription id (`sub_...`).
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub status: Option<i64>,
    /// Creation time, epoch seconds.
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub creation_date: Option<i64>,
    /// Next charge time, epoch seconds.
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub next_billing_date: Option<i64>,
    #[serde(default)]
    pub plan: Option<SubscriptionPlanRef>,
}

/// Plan summary embedded in a Culqi subscription.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlanRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Envelope of the Culqi subscription list passthrough.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SubscriptionsEnvelope {
    #[serde(default)]
    pub data: Vec<CulqiSubscription>,
}

/// Request body of `POST /api/subscriptions/`.
#[derive(Clone, Debug, Serialize)]
pub struct SubscriptionPayload {
    pub card_id: String,
    pub plan_id: String,
    /// Terms-and-conditions acceptance; the backend requires `true`.
    pub tyc: bool,
}

/// The locally persisted subscription returned on create.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CreatedSubscription {
    pub id: i64,
    pub subscription_id: String,
    pub plan_id: String,
    pub card_id: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub status: i64,
    #[serde(default)]
    pub next_billing_date: Option<String>,
}

/// Complaint triage status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReclamoStatus {
    /// Submitted, not yet handled.
    #[default]
    Pendiente,
    /// An admin has responded.
    Atendido,
    /// Resolved and closed.
    Cerrado,
}

impl ReclamoStatus {
    /// Human-facing Spanish label, matching the backend's display choices.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::Atendido => "Atendido",
            Self::Cerrado => "Cerrado",
        }
    }

    /// Wire value accepted by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pendiente => "pendiente",
            Self::Atendido => "atendido",
            Self::Cerrado => "cerrado",
        }
    }

    /// Parse a wire value; unknown values fall back to pending.
    pub fn parse(value: &str) -> Self {
        match value {
            "atendido" => Self::Atendido,
            "cerrado" => Self::Cerrado,
            _ => Self::Pendiente,
        }
    }
}

/// A complaint as returned by `/api/reclamos/` and the admin triage list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reclamo {
    pub id: i64,
    /// Submitting user id.
    pub usuario: i64,
    /// Contact name given on the form.
    pub nombre: String,
    pub email: String,
    #[serde(default)]
    pub telefono: String,
    pub mensaje: String,
    /// Submission timestamp (ISO 8601).
    pub fecha: String,
    pub estado: ReclamoStatus,
    /// Admin response text, once triaged.
    #[serde(default)]
    pub respuesta: Option<String>,
}

/// Request body of `POST /api/reclamos/`.
#[derive(Clone, Debug, Serialize)]
pub struct ReclamoPayload {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub mensaje: String,
}

/// Request body of the admin respond endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct ReclamoResponsePayload {
    pub respuesta: String,
    pub estado: ReclamoStatus,
}

/// An account row in the admin user table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

/// Per-status vehicle count inside the company statistics response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatusCount {
    pub estado: CarStatus,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub cantidad: i64,
}

/// Company identity echoed inside the statistics response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CompanyInfo {
    pub nombre: String,
    #[serde(default)]
    pub ruc: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
}

/// Response of `GET /api/empresas/{id}/estadisticas/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CompanyStatistics {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub carros_registrados: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub carros_terminados: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub carros_pendientes: i64,
    /// Revenue across finished washes, in soles.
    #[serde(deserialize_with = "deserialize_f64_from_decimal")]
    pub ingresos_totales: f64,
    #[serde(deserialize_with = "deserialize_f64_from_decimal")]
    pub promedio_por_carro: f64,
    #[serde(default)]
    pub stats_por_estado: Vec<StatusCount>,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub carros_ultimo_mes: i64,
    pub empresa_info: CompanyInfo,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    i64_from_value(&value).map_err(D::Error::custom)
}

fn deserialize_opt_i64_from_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    i64_from_value(&value).map(Some).map_err(D::Error::custom)
}

fn i64_from_value(value: &serde_json::Value) -> Result<i64, String> {
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err("expected integer-compatible number".to_owned())
        }
        _ => Err("expected number".to_owned()),
    }
}

/// Django serializes `DecimalField` as a quoted string (`"150.00"`), while
/// aggregate endpoints emit plain numbers. Accept both.
fn deserialize_f64_from_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("expected finite number")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected decimal string, got {raw:?}"))),
        _ => Err(D::Error::custom("expected number or decimal string")),
    }
}
