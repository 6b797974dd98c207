//! End-to-end release check scenarios

mod helper;

use rstest::rstest;
use tempfile::TempDir;

use helper::{FakeDistributions, MockRegistry, SiteFixture, read_outputs};
use pypi_release_check::error::ReleaseCheckError;
use pypi_release_check::local::{LocalError, SitePackages};
use pypi_release_check::output::{OutputSink, release_outputs};
use pypi_release_check::release::check_release;

#[rstest]
#[case::newer_than_published("1.2.0", vec!["1.0.0", "1.1.0"], "true")]
#[case::already_published("1.0.0", vec!["1.0.0", "1.1.0"], "false")]
#[case::never_published("0.1.0", vec![], "true")]
#[case::prerelease_published("2.0.0", vec!["1.0.0", "2.0.0rc1"], "true")]
#[tokio::test]
async fn writes_version_and_decision(
    #[case] local: &str,
    #[case] published: Vec<&str>,
    #[case] should_release: &str,
) {
    let source = FakeDistributions::new()
        .with_package("requests", "2.32.0")
        .with_editable("my-project", local, "/work/my-project/src");
    let registry = MockRegistry::new().with_versions("my-project", published);

    let decision = check_release(&source, &registry, None).await.unwrap();

    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("github_output");
    OutputSink::File(out_path.clone())
        .emit(&release_outputs(&decision))
        .unwrap();

    let outputs = read_outputs(&out_path);
    assert_eq!(outputs["version"], local);
    assert_eq!(outputs["should-release"], should_release);
}

#[tokio::test]
async fn explicit_name_bypasses_inference() {
    let source = FakeDistributions::new()
        .with_editable("alpha", "1.0.0", "/work/alpha")
        .with_editable("beta", "3.0.0", "/work/beta");
    let registry = MockRegistry::new().with_versions("beta", vec!["2.0.0"]);

    let decision = check_release(&source, &registry, Some("beta")).await.unwrap();

    assert_eq!(decision.resolved_version, "3.0.0");
    assert!(decision.should_release);
}

#[tokio::test]
async fn ambiguous_inference_lists_candidates() {
    let source = FakeDistributions::new()
        .with_editable("beta", "3.0.0", "/work/beta")
        .with_editable("alpha", "1.0.0", "/work/alpha");
    let registry = MockRegistry::new();

    let err = check_release(&source, &registry, None).await.unwrap_err();

    match err {
        ReleaseCheckError::Local(LocalError::AmbiguousPackage { candidates }) => {
            assert_eq!(candidates, vec!["alpha", "beta"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn remote_failure_is_not_treated_as_unpublished() {
    let source = FakeDistributions::new().with_editable("demo", "0.1.0", "/work/demo");

    let err = check_release(&source, &MockRegistry::failing(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ReleaseCheckError::RemoteQuery(_)));
}

#[tokio::test]
async fn resolves_from_site_packages_directory() {
    let site = SiteFixture::new();
    site.install("requests", "2.32.0")
        .install_editable("my_project", "1.2.0", "/work/my-project/src");
    let source = SitePackages::new(vec![site.path().to_path_buf()]);
    let registry = MockRegistry::new().with_versions("my_project", vec!["1.1.0"]);

    let decision = check_release(&source, &registry, None).await.unwrap();

    assert_eq!(decision.resolved_version, "1.2.0");
    assert!(decision.should_release);
}
