#[macro_use]
extern crate rocket;

use rocket::{Build, Rocket};

use handler::api_handler::{api_version, create_admin};
use listings::handler::{
    admin_list_listings, approve_listing, create_listing, get_listing, list_listings,
    reject_listing, update_listing,
};
use organisations::handler::{get_organisation, register_organisation};
use users::handler::{get_current_user, register_user, verify_user};

use crate::repository::initialize_db;

mod config;
mod db_migrations;
mod guard;
mod handler;
mod listings;
mod logger;
mod model;
mod organisations;
mod repository;
#[cfg(test)]
mod test;
mod users;
mod util;

#[launch]
fn launch() -> Rocket<Build> {
    logger::setup_logger();
    rocket()
}

fn rocket() -> Rocket<Build> {
    initialize_db().unwrap();
    rocket::build()
        .mount("/api", routes![api_version, create_admin])
        .mount(
            "/organisations",
            routes![register_organisation, get_organisation],
        )
        .mount("/users", routes![register_user, get_current_user])
        .mount("/admin/users", routes![verify_user])
        .mount(
            "/materials",
            routes![list_listings, get_listing, create_listing, update_listing],
        )
        .mount(
            "/admin/materials",
            routes![admin_list_listings, approve_listing, reject_listing],
        )
}

///
/// every test gets its own sqlite file named after its thread, see [`test::refresh_db`]
///
#[cfg(test)]
mod api_tests {
    use rocket::http::Status;
    use rocket::local::blocking::Client;

    use crate::test::{cleanup, create_user_db_entry, refresh_db};

    use super::rocket;

    #[test]
    fn version() {
        refresh_db();
        let client = Client::tracked(rocket()).expect("Valid Rocket Instance");
        let res = client.get(uri!("/api/version")).dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert_eq!(
            res.into_string().unwrap(),
            format!(r#"{{"version":"{}"}}"#, env!("CARGO_PKG_VERSION"))
        );
        cleanup();
    }

    #[test]
    fn create_admin_missing_fields() {
        refresh_db();
        let client = Client::tracked(rocket()).expect("Valid Rocket Instance");
        let res = client.post(uri!("/api/admin")).dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        cleanup();
    }

    #[test]
    fn create_admin() {
        refresh_db();
        let client = Client::tracked(rocket()).expect("Valid Rocket Instance");
        let res = client
            .post(uri!("/api/admin"))
            .body(r#"{"username":"admin","password":"password"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Created);
        cleanup();
    }

    #[test]
    fn create_admin_if_admin_exists() {
        refresh_db();
        create_user_db_entry("admin", None, true, true);
        let client = Client::tracked(rocket()).expect("Valid Rocket Instance");
        let res = client
            .post(uri!("/api/admin"))
            .body(r#"{"username":"second","password":"password"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        cleanup();
    }
}
