use campus_core::{
    attach_responsables, default_sidebar, filter_by_role, filter_events, is_valid_national_id,
    published, responsable_ids, search_responsables, validate_identification,
    validate_registration, CatalogFilter, Event, FilteredMenu, IdentificationError,
    IdentificationKind, MenuConfig, MenuNode, NewUser, PaymentFilter, ProfileUpdate,
    RegistrationError, RegistrationForm, RegistrationPolicy, ResponsableSummary, Role,
    RouteDecision, RouteGuard, Session, SessionProfile, SessionUser, UserProfile,
};
use chrono::NaiveDate;
use serde_json::json;

fn session_for(role: Role) -> Session {
    Session::signed_in(
        SessionUser {
            id: "u-1".to_string(),
            email: Some("ana@example.edu".to_string()),
        },
        Some(SessionProfile {
            id: "u-1".to_string(),
            nombre1: "Ana".to_string(),
            apellido1: "Pérez".to_string(),
            rol: role,
        }),
    )
}

fn item_urls(nodes: &[MenuNode]) -> Vec<String> {
    let mut urls = vec![];
    for node in nodes {
        if let MenuNode::Section(section) = node {
            for item in &section.children {
                urls.push(item.url.clone());
                for child in item.children.iter().flatten() {
                    urls.push(child.url.clone());
                }
            }
        }
    }
    urls
}

#[test]
fn national_id_checksum_and_fallback_are_separate() {
    assert!(is_valid_national_id("1710034065"));
    assert!(!is_valid_national_id("1710034066"));
    assert!(!is_valid_national_id("PA12345"));

    assert_eq!(
        validate_identification("PA12345"),
        Ok(IdentificationKind::ForeignDocument)
    );
    assert_eq!(
        validate_identification("1710034066"),
        Err(IdentificationError::InvalidNationalId)
    );
}

#[test]
fn sidebar_follows_the_session_role() {
    let config = MenuConfig::from_json(
        &json!({
            "nodes": [
                {
                    "type": "section",
                    "heading": "HOME",
                    "children": [
                        { "name": "Dashboard", "url": "" },
                        {
                            "name": "Mi Perfil",
                            "url": "/perfil",
                            "allowed_roles": ["administrador", "general"]
                        }
                    ]
                },
                {
                    "type": "section",
                    "heading": "ADMINISTRACIÓN",
                    "children": [
                        {
                            "name": "Eventos",
                            "url": "/eventos",
                            "allowed_roles": ["administrador"],
                            "children": [{ "name": "Crear evento", "url": "/eventos/crear" }]
                        },
                        {
                            "name": "Usuarios",
                            "url": "/usuarios",
                            "allowed_roles": ["administrador"],
                            "children": [{ "name": "Crear usuario", "url": "/usuarios/crear" }]
                        }
                    ]
                }
            ]
        })
        .to_string(),
    )
    .unwrap();
    let guard = RouteGuard::default();
    let mut menu = FilteredMenu::new(&config.nodes);

    let anonymous = Session::anonymous();
    assert_eq!(
        guard.decide(&anonymous),
        RouteDecision::Redirect("/auth/login".to_string())
    );
    let urls = item_urls(menu.view(anonymous.role()));
    assert!(!urls.contains(&"/perfil".to_string()));
    assert!(!urls.contains(&"/usuarios/crear".to_string()));

    let general = session_for(Role::General);
    assert_eq!(guard.decide(&general), RouteDecision::Allow);
    let urls = item_urls(menu.view(general.role()));
    assert!(urls.contains(&"/perfil".to_string()));
    assert!(!urls.contains(&"/eventos/crear".to_string()));

    let admin = session_for(Role::Administrador);
    let urls = item_urls(menu.view(admin.role()));
    assert!(urls.contains(&"/perfil".to_string()));
    assert!(urls.contains(&"/eventos/crear".to_string()));
    assert!(urls.contains(&"/usuarios/crear".to_string()));
}

#[test]
fn configured_menu_round_trip() {
    let config = MenuConfig::new(default_sidebar().to_vec());
    let json = serde_json::to_string(&config).unwrap();
    let loaded = MenuConfig::from_json(&json).unwrap();
    assert_eq!(loaded, config);

    for role in [None, Some(Role::General), Some(Role::Administrador)] {
        let filtered = filter_by_role(&loaded.nodes, role);
        assert_eq!(filter_by_role(&filtered, role), filtered);
    }
}

#[test]
fn register_then_list_events() {
    let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let form = RegistrationForm {
        email: "Luis@Example.edu".to_string(),
        password: "clave-segura".to_string(),
        confirm_password: "clave-segura".to_string(),
        nombre1: "Luis".to_string(),
        apellido1: "Andrade".to_string(),
        cedula: "0912345675".to_string(),
        telefono: "0987654321".to_string(),
        fecha_nacimiento: "1988-11-02".to_string(),
        ..Default::default()
    };
    let registration = validate_registration(&form, &RegistrationPolicy::default(), today).unwrap();
    assert_eq!(registration.email, "luis@example.edu");

    let profile = UserProfile {
        id: "u-2".to_string(),
        nombre1: registration.nombre1,
        nombre2: registration.nombre2,
        apellido1: registration.apellido1,
        apellido2: registration.apellido2,
        cedula: registration.cedula,
        telefono: registration.telefono,
        email: registration.email,
        fecha_nacimiento: registration.fecha_nacimiento,
        rol: Role::General,
        is_active: true,
    };

    let candidates = search_responsables(std::slice::from_ref(&profile), "andr");
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].full_name, "Luis Andrade");

    let events: Vec<Event> = serde_json::from_value(json!([
        { "id": 1, "nombre": "Curso de Rust", "estado": "publicado", "tipo": "curso",
          "audiencia": "publico", "es_pagado": true, "costo": 40.0, "responsable_id": "u-2" },
        { "id": 2, "nombre": "Webinar", "estado": "borrador", "tipo": "webinar",
          "audiencia": "publico", "responsable_id": "u-2" },
        { "id": 3, "nombre": "Congreso", "estado": "publicado", "tipo": "congreso",
          "audiencia": "publico" }
    ]))
    .unwrap();

    assert_eq!(responsable_ids(&events), vec!["u-2"]);

    let catalog: Vec<i64> = published(&events).iter().map(|event| event.id).collect();
    assert_eq!(catalog, vec![1, 3]);

    let paid = filter_events(
        &events,
        &CatalogFilter {
            payment: PaymentFilter::PaidOnly,
            ..Default::default()
        },
    );
    assert_eq!(paid.len(), 1);
    assert_eq!(paid[0].price_label(), "$40");

    let joined = attach_responsables(events, &[ResponsableSummary::from(&profile)]);
    let responsables: Vec<Option<String>> = joined
        .iter()
        .map(|row| row.responsable.as_ref().map(|r| r.display_name()))
        .collect();
    assert_eq!(
        responsables,
        vec![
            Some("Luis Andrade".to_string()),
            Some("Luis Andrade".to_string()),
            None
        ]
    );
}

#[test]
fn registration_errors_have_messages() {
    let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let form = RegistrationForm {
        nombre1: "Luis".to_string(),
        apellido1: "Andrade".to_string(),
        cedula: "0912345674".to_string(),
        ..Default::default()
    };
    let error = validate_registration(&form, &RegistrationPolicy::default(), today).unwrap_err();
    assert_eq!(
        error,
        RegistrationError::Identification(IdentificationError::InvalidNationalId)
    );
    assert_eq!(error.to_string(), "The 10 digit national ID is not valid");
}

#[test]
fn admin_created_user_edits_and_deactivates_the_profile() {
    let new_user: NewUser = serde_json::from_value(json!({
        "nombre1": "Carla",
        "apellido1": "Mena",
        "cedula": "0509876546",
        "telefono": "0981112233",
        "email": "carla@example.edu",
        "fecha_nacimiento": "1995-07-20",
        "password": "temporal",
        "rol_usuario": "general"
    }))
    .unwrap();
    let mut profile = new_user.validate().unwrap().into_profile("u-7");
    assert_eq!(profile.status_label(), "Activo");

    let update = ProfileUpdate {
        nombre2: " Sofía ".to_string(),
        telefono: "0981112244 ".to_string(),
        ..ProfileUpdate::from_profile(&profile)
    };
    update.normalize().unwrap().apply_to(&mut profile);
    assert_eq!(profile.full_name(), "Carla Sofía Mena");
    assert_eq!(profile.telefono, "0981112244");

    profile.deactivate();
    assert_eq!(profile.status_label(), "Inactivo");
    assert_eq!(profile.rol, Role::General);
}
