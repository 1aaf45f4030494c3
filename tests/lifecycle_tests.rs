//! Lifecycle handler tests
//!
//! Exercises create/read/update/delete and the presence checker against an
//! in-memory Vault, including the failure-wrapping and drift behaviors.

mod common;

use common::MockVault;
use vault_auth_controller::reconciler::{
    create, delete, is_github_backend_present, read, update, ReconcileError,
};
use vault_auth_controller::resource::{GithubAuthBackend, GithubAuthBackendSpec};

fn spec(path: &str) -> GithubAuthBackendSpec {
    GithubAuthBackendSpec {
        path: path.to_string(),
        description: String::new(),
        organization: "octopilot".to_string(),
        base_url: String::new(),
        bypass_github_mfa: false,
        ttl: None,
        max_ttl: None,
    }
}

fn applied_backend(path: &str) -> GithubAuthBackend {
    let mut backend = GithubAuthBackend::new(spec(path));
    backend.set_id(path);
    backend
}

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn create_enables_mount_and_writes_config_once() {
        let vault = MockVault::new();
        let mut backend = GithubAuthBackend::new(spec("github"));

        create(&mut backend, &vault).await.expect("create succeeds");

        assert_eq!(backend.id(), "github");
        assert!(vault.has_mount("github"));

        let writes = vault.config_writes();
        assert_eq!(writes.len(), 1, "create delegates to exactly one config write");
        assert_eq!(writes[0].0, "auth/github/config");
    }

    #[tokio::test]
    async fn create_rejects_trailing_separator_before_any_remote_call() {
        let vault = MockVault::new();
        let mut backend = GithubAuthBackend::new(spec("github/"));

        let err = create(&mut backend, &vault).await.expect_err("create fails");

        assert!(matches!(err, ReconcileError::Validation(_)));
        assert!(!backend.exists());
        assert!(!vault.has_mount("github"));
        assert!(vault.config_writes().is_empty());
    }

    #[tokio::test]
    async fn create_propagates_enable_failure() {
        let vault = MockVault::new().failing_enable();
        let mut backend = GithubAuthBackend::new(spec("github"));

        let err = create(&mut backend, &vault).await.expect_err("create fails");

        let text = format!("{err:#}");
        assert!(text.contains("error enabling github auth backend"));
        assert!(text.contains("permission denied"));
        assert!(!backend.exists(), "identity is only assigned after a successful enable");
    }

    // The identifier is assigned before the config-write delegation is
    // confirmed; a failed delegation leaves an enabled-but-unconfigured
    // mount behind, recorded as existing. Pinned here on purpose.
    #[tokio::test]
    async fn create_keeps_id_when_config_write_fails() {
        let vault = MockVault::new().failing_write();
        let mut backend = GithubAuthBackend::new(spec("github"));

        let err = create(&mut backend, &vault).await.expect_err("create fails");

        assert!(matches!(err, ReconcileError::Remote(_)));
        assert_eq!(backend.id(), "github");
        assert!(vault.has_mount("github"));
    }

    #[tokio::test]
    async fn create_then_read_keeps_resource_present() {
        let vault = MockVault::new();
        let mut backend = GithubAuthBackend::new(spec("github"));

        create(&mut backend, &vault).await.expect("create succeeds");
        read(&mut backend, &vault).await.expect("read succeeds");

        assert!(backend.exists());
        assert_eq!(backend.id(), "github");
    }
}

mod update_tests {
    use super::*;

    #[tokio::test]
    async fn update_omits_ttl_keys_when_unset() {
        let vault = MockVault::new().with_mount("github", "github", "");
        let mut backend = applied_backend("github");

        update(&mut backend, &vault).await.expect("update succeeds");

        let writes = vault.config_writes();
        let payload = writes[0].1.as_object().expect("payload is an object");
        assert!(!payload.contains_key("ttl"));
        assert!(!payload.contains_key("max_ttl"));
        assert_eq!(payload["organization"], "octopilot");
        assert_eq!(payload["base_url"], "");
        assert_eq!(payload["bypass_github_mfa"], false);
    }

    #[tokio::test]
    async fn update_writes_ttl_keys_when_set() {
        let vault = MockVault::new().with_mount("github", "github", "");
        let mut backend = applied_backend("github");
        backend.spec.ttl = Some("1h".to_string());
        backend.spec.max_ttl = Some("24h".to_string());

        update(&mut backend, &vault).await.expect("update succeeds");

        let writes = vault.config_writes();
        assert_eq!(writes[0].1["ttl"], "1h");
        assert_eq!(writes[0].1["max_ttl"], "24h");
    }

    #[tokio::test]
    async fn update_wraps_write_failure_with_path() {
        let vault = MockVault::new().failing_write();
        let mut backend = applied_backend("github");

        let err = update(&mut backend, &vault).await.expect_err("update fails");

        let text = format!("{err:#}");
        assert!(text.contains("error updating configuration in Vault for path github"));
        assert!(text.contains("internal server error"));
    }

    #[tokio::test]
    async fn update_resynchronizes_via_read() {
        // The config write lands, but the mount has been disabled out of
        // band: the delegated read detects the drift.
        let vault = MockVault::new();
        let mut backend = applied_backend("github");

        update(&mut backend, &vault).await.expect("update succeeds");

        assert_eq!(vault.config_writes().len(), 1);
        assert!(!backend.exists(), "drift detected during the delegated read");
    }
}

mod read_tests {
    use super::*;

    #[tokio::test]
    async fn read_clears_id_when_backend_is_absent() {
        let vault = MockVault::new();
        let mut backend = applied_backend("github");

        read(&mut backend, &vault).await.expect("drift is not an error");

        assert!(!backend.exists());
        assert_eq!(backend.id(), "");
    }

    #[tokio::test]
    async fn read_is_a_no_op_when_backend_is_present() {
        let vault = MockVault::new().with_mount("github", "github", "");
        let mut backend = applied_backend("github");

        read(&mut backend, &vault).await.expect("read succeeds");

        assert!(backend.exists());
        assert_eq!(backend.id(), "github");
    }

    #[tokio::test]
    async fn read_wraps_listing_failure_with_path() {
        let vault = MockVault::new().failing_list();
        let mut backend = applied_backend("github");

        let err = read(&mut backend, &vault).await.expect_err("read fails");

        let text = format!("{err:#}");
        assert!(text.contains("unable to check auth backends in Vault for path github"));
        assert!(backend.exists(), "a failed check must not clear the identifier");
    }
}

mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn delete_disables_the_mount() {
        let vault = MockVault::new().with_mount("github", "github", "");
        let mut backend = applied_backend("github");

        delete(&mut backend, &vault).await.expect("delete succeeds");

        assert!(!vault.has_mount("github"));
    }

    #[tokio::test]
    async fn delete_propagates_wrapped_disable_failure() {
        let vault = MockVault::new().failing_disable();
        let mut backend = applied_backend("github");

        let err = delete(&mut backend, &vault).await.expect_err("delete fails");

        let text = format!("{err:#}");
        assert!(text.contains("disabling"));
        assert!(text.contains("network error: connection reset"));
    }
}

mod presence_tests {
    use super::*;

    #[tokio::test]
    async fn present_for_exact_path_and_type() {
        let vault = MockVault::new().with_mount("github", "github", "");
        let present = is_github_backend_present(&vault, "github")
            .await
            .expect("check succeeds");
        assert!(present);
    }

    #[tokio::test]
    async fn absent_when_type_differs() {
        let vault = MockVault::new().with_mount("github", "token", "");
        let present = is_github_backend_present(&vault, "github")
            .await
            .expect("check succeeds");
        assert!(!present);
    }

    #[tokio::test]
    async fn absent_when_path_differs() {
        let vault = MockVault::new().with_mount("github-corp", "github", "");
        let present = is_github_backend_present(&vault, "github")
            .await
            .expect("check succeeds");
        assert!(!present);
    }

    #[tokio::test]
    async fn absent_on_empty_server() {
        let vault = MockVault::new();
        let present = is_github_backend_present(&vault, "github")
            .await
            .expect("check succeeds");
        assert!(!present);
    }

    #[tokio::test]
    async fn listing_failure_is_an_error() {
        let vault = MockVault::new().failing_list();
        let err = is_github_backend_present(&vault, "github")
            .await
            .expect_err("check fails");
        assert!(format!("{err:#}").contains("error reading auth backends from Vault"));
    }
}
