use super::*;

#[test]
fn login_response_decodes_token_and_flags() {
    let body = serde_json::json!({
        "token": "9c3b1e",
        "user": {
            "username": "ana",
            "email": "ana@example.com",
            "is_staff": false,
            "is_superuser": false
        }
    });
    let decoded: LoginResponse = serde_json::from_value(body).unwrap();
    assert_eq!(decoded.token, "9c3b1e");
    assert_eq!(decoded.user.username, "ana");
    assert!(!decoded.user.is_staff);
}

#[test]
fn user_account_defaults_missing_role_flags_to_false() {
    let body = serde_json::json!({ "username": "bob" });
    let decoded: UserAccount = serde_json::from_value(body).unwrap();
    assert!(!decoded.is_staff);
    assert!(!decoded.is_superuser);
    assert_eq!(decoded.email, None);
}

#[test]
fn car_decodes_decimal_string_price() {
    let body = serde_json::json!({
        "id": 7,
        "placa": "ABC-123",
        "marca": "Toyota",
        "color": "rojo",
        "modelo": "Yaris",
        "foto": null,
        "dia_llegada": "2025-03-01T09:30:00Z",
        "dia_salida": null,
        "numero_telefono": "+51999888777",
        "precio": "150.00",
        "estado": "espera"
    });
    let decoded: Car = serde_json::from_value(body).unwrap();
    assert!((decoded.precio - 150.0).abs() < f64::EPSILON);
    assert_eq!(decoded.estado, CarStatus::Espera);
}

#[test]
fn car_decodes_numeric_price_too() {
    let body = serde_json::json!({
        "id": 8,
        "placa": "XYZ-987",
        "marca": "Kia",
        "dia_llegada": "2025-03-02T10:00:00Z",
        "numero_telefono": "987654321",
        "precio": 85.5,
        "estado": "terminado"
    });
    let decoded: Car = serde_json::from_value(body).unwrap();
    assert!((decoded.precio - 85.5).abs() < f64::EPSILON);
    assert_eq!(decoded.estado, CarStatus::Terminado);
}

#[test]
fn car_status_round_trips_wire_values() {
    for status in [CarStatus::Espera, CarStatus::Proceso, CarStatus::Terminado] {
        assert_eq!(CarStatus::parse(status.as_str()), status);
    }
}

#[test]
fn car_status_parse_falls_back_to_espera() {
    assert_eq!(CarStatus::parse("desconocido"), CarStatus::Espera);
}

#[test]
fn plans_envelope_decodes_cent_amounts() {
    let body = serde_json::json!({
        "plans": [
            { "id": "pln_1", "name": "Mensual", "description": "Lavados ilimitados", "amount": 2990, "currency": "PEN" }
        ],
        "paging": {},
        "remaining_items": 0
    });
    let decoded: PlansEnvelope = serde_json::from_value(body).unwrap();
    assert_eq!(decoded.plans.len(), 1);
    assert_eq!(decoded.plans[0].amount, 2990);
}

#[test]
fn plans_envelope_defaults_to_empty_list() {
    let decoded: PlansEnvelope = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(decoded.plans.is_empty());
}

#[test]
fn subscriptions_envelope_tolerates_sparse_culqi_items() {
    let body = serde_json::json!({
        "data": [
            {
                "id": "sub_live_1",
                "status": 1,
                "creation_date": 1_714_000_000,
                "next_billing_date": 1_716_600_000.0,
                "plan": { "id": "pln_1", "name": "Mensual" }
            },
            { "id": "sub_live_2", "next_billing_date": null }
        ]
    });
    let decoded: SubscriptionsEnvelope = serde_json::from_value(body).unwrap();
    assert_eq!(decoded.data.len(), 2);
    assert_eq!(decoded.data[0].next_billing_date, Some(1_716_600_000));
    assert_eq!(decoded.data[1].status, None);
    assert_eq!(decoded.data[1].plan, None);
}

#[test]
fn reclamo_decodes_with_admin_response() {
    let body = serde_json::json!({
        "id": 3,
        "usuario": 11,
        "nombre": "Carlos",
        "email": "carlos@example.com",
        "telefono": "",
        "mensaje": "El lavado dejó manchas.",
        "fecha": "2025-04-10T15:20:11.000Z",
        "estado": "atendido",
        "respuesta": "Lo lamentamos, coordine un relavado."
    });
    let decoded: Reclamo = serde_json::from_value(body).unwrap();
    assert_eq!(decoded.estado, ReclamoStatus::Atendido);
    assert!(decoded.respuesta.is_some());
}

#[test]
fn reclamo_status_parse_falls_back_to_pendiente() {
    assert_eq!(ReclamoStatus::parse("otro"), ReclamoStatus::Pendiente);
    assert_eq!(ReclamoStatus::parse("cerrado"), ReclamoStatus::Cerrado);
}

#[test]
fn company_statistics_decodes_mixed_numeric_shapes() {
    let body = serde_json::json!({
        "carros_registrados": 12,
        "carros_terminados": 9,
        "carros_pendientes": 3,
        "ingresos_totales": 1350.0,
        "promedio_por_carro": 150.0,
        "stats_por_estado": [
            { "estado": "espera", "cantidad": 2 },
            { "estado": "terminado", "cantidad": 9 }
        ],
        "carros_ultimo_mes": 5,
        "empresa_info": { "nombre": "Lavadero Sur", "ruc": "20123456789", "direccion": null }
    });
    let decoded: CompanyStatistics = serde_json::from_value(body).unwrap();
    assert_eq!(decoded.carros_registrados, 12);
    assert_eq!(decoded.stats_por_estado[1].cantidad, 9);
    assert_eq!(decoded.empresa_info.nombre, "Lavadero Sur");
}

#[test]
fn created_subscription_decodes_local_record() {
    let body = serde_json::json!({
        "id": 1,
        "subscription_id": "sub_abc",
        "plan_id": "pln_1",
        "card_id": "crd_9",
        "status": 1,
        "creation_date": "2025-05-01T00:00:00Z",
        "next_billing_date": "2025-06-01T00:00:00Z",
        "metadata": {}
    });
    let decoded: CreatedSubscription = serde_json::from_value(body).unwrap();
    assert_eq!(decoded.subscription_id, "sub_abc");
    assert_eq!(decoded.status, 1);
}
