use super::*;
use crate::net::types::SubscriptionPlanRef;

#[test]
fn status_label_maps_culqi_codes() {
    assert_eq!(status_label(Some(1)), "Activa");
    assert_eq!(status_label(Some(2)), "Inactiva");
    assert_eq!(status_label(Some(3)), "En revisión");
    assert_eq!(status_label(None), "Desconocido");
}

#[test]
fn plan_name_falls_back_when_culqi_omits_it() {
    let bare = CulqiSubscription {
        id: "sub_1".to_owned(),
        status: None,
        creation_date: None,
        next_billing_date: None,
        plan: None,
    };
    assert_eq!(plan_name(&bare), "Plan");

    let named = CulqiSubscription {
        plan: Some(SubscriptionPlanRef {
            id: Some("pln_1".to_owned()),
            name: Some("Mensual".to_owned()),
        }),
        ..bare
    };
    assert_eq!(plan_name(&named), "Mensual");
}
