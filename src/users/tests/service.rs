mod register_tests {
    use crate::model::error::user_errors::RegisterUserError;
    use crate::model::request::RegisterUserRequest;
    use crate::users::service::register;
    use crate::test::*;

    fn request(username: &str, password: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            username: username.to_string(),
            password: password.to_string(),
            organisation_id: None,
        }
    }

    #[test]
    fn register_user() {
        refresh_db();
        let hospital = create_organisation_db_entry("Union Hospital", "91420100MA4K2B3C4D");
        let mut request = request(" owner ", "password");
        request.organisation_id = Some(hospital);
        let user = register(request).unwrap();
        assert_eq!(1, user.id);
        assert_eq!("owner", user.username);
        assert_eq!(Some(hospital), user.organisation_id);
        assert!(!user.verified);
        assert!(!user.admin);
        cleanup();
    }

    #[test]
    fn register_without_organisation() {
        refresh_db();
        let user = register(request("volunteer", "password")).unwrap();
        assert_eq!(None, user.organisation_id);
        cleanup();
    }

    #[test]
    fn register_unknown_organisation() {
        refresh_db();
        let mut request = request("owner", "password");
        request.organisation_id = Some(3);
        assert_eq!(
            RegisterUserError::OrganisationNotFound,
            register(request).unwrap_err()
        );
        cleanup();
    }

    #[test]
    fn register_taken_username() {
        refresh_db();
        create_user_db_entry("owner", None, false, false);
        let res = register(request("OWNER", "password")).unwrap_err();
        assert_eq!(RegisterUserError::UsernameTaken, res);
        cleanup();
    }

    #[test]
    fn register_blank_credentials() {
        refresh_db();
        assert_eq!(
            RegisterUserError::MissingCredentials,
            register(request("  ", "password")).unwrap_err()
        );
        assert_eq!(
            RegisterUserError::MissingCredentials,
            register(request("owner", "")).unwrap_err()
        );
        cleanup();
    }
}

mod create_admin_tests {
    use crate::model::error::user_errors::CreateAdminError;
    use crate::model::request::NewAuth;
    use crate::users::service::create_admin;
    use crate::test::*;

    fn auth(username: &str) -> NewAuth {
        NewAuth {
            username: username.to_string(),
            password: "password".to_string(),
        }
    }

    #[test]
    fn create_first_admin() {
        refresh_db();
        let admin = create_admin(auth("admin")).unwrap();
        assert!(admin.admin);
        assert!(admin.verified);
        cleanup();
    }

    #[test]
    fn create_second_admin() {
        refresh_db();
        create_admin(auth("admin")).unwrap();
        assert_eq!(
            CreateAdminError::AlreadyExists,
            create_admin(auth("second")).unwrap_err()
        );
        cleanup();
    }
}

mod verify_user_tests {
    use crate::model::error::user_errors::VerifyUserError;
    use crate::users::service::{check_auth, verify_user, CheckAuthResult};
    use crate::test::*;

    #[test]
    fn verify_existing_user() {
        refresh_db();
        let (_, owner, _) = create_default_users();
        verify_user(owner).unwrap();
        match check_auth("owner", "password") {
            CheckAuthResult::Valid(user) => assert!(user.verified),
            other => panic!("expected valid credentials, got {other:?}"),
        }
        cleanup();
    }

    #[test]
    fn verify_missing_user() {
        refresh_db();
        assert_eq!(VerifyUserError::UserNotFound, verify_user(99).unwrap_err());
        cleanup();
    }
}

mod check_auth_tests {
    use crate::users::service::{check_auth, CheckAuthResult};
    use crate::test::*;

    #[test]
    fn check_auth_valid() {
        refresh_db();
        let (_, owner, _) = create_default_users();
        match check_auth("Owner", "password") {
            CheckAuthResult::Valid(user) => {
                assert_eq!(Some(owner), user.id);
                assert_eq!(Some(1), user.organisation_id);
            }
            other => panic!("expected valid credentials, got {other:?}"),
        }
        cleanup();
    }

    #[test]
    fn check_auth_wrong_password() {
        refresh_db();
        create_default_users();
        assert_eq!(CheckAuthResult::Invalid, check_auth("owner", "wrong"));
        cleanup();
    }

    #[test]
    fn check_auth_unknown_user() {
        refresh_db();
        assert_eq!(CheckAuthResult::Invalid, check_auth("nobody", "password"));
        cleanup();
    }
}
