use super::*;

#[test]
fn company_endpoints_format_expected_paths() {
    assert_eq!(company_endpoint(4), "/api/empresas/4/");
    assert_eq!(company_statistics_endpoint(4), "/api/empresas/4/estadisticas/");
}

#[test]
fn car_endpoints_format_expected_paths() {
    assert_eq!(cars_by_company_endpoint(7), "/api/carros/?empresa=7");
    assert_eq!(car_endpoint(31), "/api/carros/31/");
}

#[test]
fn subscription_endpoint_embeds_culqi_id() {
    assert_eq!(subscription_endpoint("sub_abc123"), "/api/subscriptions/sub_abc123/");
}

#[test]
fn admin_responder_endpoint_formats_expected_path() {
    assert_eq!(admin_reclamo_responder_endpoint(9), "/api/admin/reclamos/9/responder/");
}
