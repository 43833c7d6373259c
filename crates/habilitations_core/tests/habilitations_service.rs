use habilitations_core::db::open_db_in_memory;
use habilitations_core::{
    filter_from_selection, AdminCredentials, DeveloperForm, FormError, HabilitationsService,
    PasswordChange, Profile, RepoError, ServiceError, SqliteDeveloperRepository,
    SqliteProfileRepository, NO_FILTER_PROFILE_ID,
};
use rusqlite::Connection;

type SqliteService<'conn> =
    HabilitationsService<SqliteDeveloperRepository<'conn>, SqliteProfileRepository<'conn>>;

fn seeded_db() -> Connection {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("INSERT INTO profile (id, name) VALUES (1, 'admin'), (2, 'dev');")
        .unwrap();
    conn
}

fn service(conn: &Connection) -> SqliteService<'_> {
    HabilitationsService::new(
        SqliteDeveloperRepository::try_new(conn).unwrap(),
        SqliteProfileRepository::try_new(conn).unwrap(),
    )
}

fn form(last: &str, first: &str, profile: Profile) -> DeveloperForm {
    DeveloperForm {
        last_name: last.to_string(),
        first_name: first.to_string(),
        phone: "0102030405".to_string(),
        email: "dev@example.com".to_string(),
        profile: Some(profile),
        initial_password: None,
    }
}

#[test]
fn filter_choices_start_with_no_filter_entry() {
    let conn = seeded_db();
    let service = service(&conn);

    let choices = service.filter_choices().unwrap();
    assert_eq!(choices.len(), 3);
    assert_eq!(choices[0].id, NO_FILTER_PROFILE_ID);
    assert_eq!(choices[0].display_name(), "");
    assert_eq!(service.list_profiles().unwrap().len(), 2);
}

#[test]
fn selection_drives_developer_filter() {
    let conn = seeded_db();
    let service = service(&conn);
    service
        .add_developer(&form("Doe", "John", Profile::new(1, "admin")))
        .unwrap();
    service
        .add_developer(&form("Roe", "Jane", Profile::new(2, "dev")))
        .unwrap();

    let all = service
        .list_developers(filter_from_selection(NO_FILTER_PROFILE_ID))
        .unwrap();
    assert_eq!(all.len(), 2);

    let devs = service.list_developers(filter_from_selection(2)).unwrap();
    assert_eq!(devs.len(), 1);
    assert_eq!(devs[0].last_name.as_deref(), Some("Roe"));
}

#[test]
fn add_defaults_initial_password_to_last_name() {
    let conn = seeded_db();
    let service = service(&conn);
    service
        .add_developer(&form("Doe", "John", Profile::new(1, "admin")))
        .unwrap();

    assert!(service
        .authenticate_admin(&AdminCredentials::new("Doe", "John", "Doe"))
        .unwrap());
}

#[test]
fn add_uses_explicit_initial_password() {
    let conn = seeded_db();
    let service = service(&conn);
    let mut input = form("Doe", "John", Profile::new(1, "admin"));
    input.initial_password = Some("secret".to_string());
    service.add_developer(&input).unwrap();

    assert!(service
        .authenticate_admin(&AdminCredentials::new("Doe", "John", "secret"))
        .unwrap());
    assert!(!service
        .authenticate_admin(&AdminCredentials::new("Doe", "John", "Doe"))
        .unwrap());
}

#[test]
fn invalid_forms_never_reach_the_store() {
    let conn = seeded_db();
    let service = service(&conn);

    let mut missing_email = form("Doe", "John", Profile::new(1, "admin"));
    missing_email.email = String::new();
    assert!(matches!(
        service.add_developer(&missing_email),
        Err(ServiceError::Form(FormError::EmptyField("email")))
    ));

    let mut missing_profile = form("Doe", "John", Profile::new(1, "admin"));
    missing_profile.profile = None;
    assert!(matches!(
        service.add_developer(&missing_profile),
        Err(ServiceError::Form(FormError::MissingProfile))
    ));

    assert!(service.list_developers(None).unwrap().is_empty());
}

#[test]
fn update_applies_form_to_existing_developer() {
    let conn = seeded_db();
    let service = service(&conn);
    service
        .add_developer(&form("Doe", "John", Profile::new(2, "dev")))
        .unwrap();
    let id = service.list_developers(None).unwrap()[0].id;

    let mut edit = form("Doe", "Johnny", Profile::new(1, "admin"));
    edit.phone = "0999999999".to_string();
    service.update_developer(id, &edit).unwrap();

    let developer = &service.list_developers(Some(1)).unwrap()[0];
    assert_eq!(developer.id, id);
    assert_eq!(developer.first_name.as_deref(), Some("Johnny"));
    assert_eq!(developer.phone.as_deref(), Some("0999999999"));
    assert!(developer.profile.is_admin());
}

#[test]
fn change_password_validates_confirmation() {
    let conn = seeded_db();
    let service = service(&conn);
    service
        .add_developer(&form("Doe", "John", Profile::new(1, "admin")))
        .unwrap();
    let id = service.list_developers(None).unwrap()[0].id;

    assert!(matches!(
        service.change_password(id, &PasswordChange::new("abc", "abd")),
        Err(ServiceError::Form(FormError::PasswordMismatch))
    ));
    assert!(matches!(
        service.change_password(id, &PasswordChange::new("", "")),
        Err(ServiceError::Form(FormError::EmptyPassword))
    ));

    service
        .change_password(id, &PasswordChange::new("fresh", "fresh"))
        .unwrap();
    assert!(service
        .authenticate_admin(&AdminCredentials::new("Doe", "John", "fresh"))
        .unwrap());
}

#[test]
fn delete_unknown_developer_surfaces_not_found() {
    let conn = seeded_db();
    let service = service(&conn);

    assert!(matches!(
        service.delete_developer(7),
        Err(ServiceError::Repo(RepoError::NotFound(7)))
    ));
}

#[test]
fn delete_removes_developer() {
    let conn = seeded_db();
    let service = service(&conn);
    service
        .add_developer(&form("Doe", "John", Profile::new(1, "admin")))
        .unwrap();
    let id = service.list_developers(None).unwrap()[0].id;

    service.delete_developer(id).unwrap();
    assert!(service.list_developers(None).unwrap().is_empty());
}

#[test]
fn blank_credentials_are_rejected_before_query() {
    let conn = seeded_db();
    let service = service(&conn);

    assert!(matches!(
        service.authenticate_admin(&AdminCredentials::new(" ", "John", "secret")),
        Err(ServiceError::Form(FormError::EmptyField("last_name")))
    ));
    assert!(matches!(
        service.authenticate_admin(&AdminCredentials::new("Doe", "John", "")),
        Err(ServiceError::Form(FormError::EmptyPassword))
    ));
}
