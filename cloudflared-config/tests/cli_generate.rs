use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn generate() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("cloudflared-config"))
}

const DEFAULT_JSON: &str = r#"{"enabled":false,"mode":"token","token":"","tunnel_name":"","post_quantum":true,"edge_ip_version":"auto","protocol":"auto","loglevel":"info","tunnels":[]}"#;

#[test]
fn json_reflects_enabled_configuration_without_disabled_routes() {
    let expected = concat!(
        r#"{"enabled":true,"mode":"token","token":"eyJhIjoiYmMifQ==","tunnel_name":"mytun","#,
        r#""post_quantum":true,"edge_ip_version":"auto","protocol":"auto","loglevel":"info","#,
        r#""tunnels":[{"hostname":"a.example.com","service":"http","url":"http://127.0.0.1:80"},"#,
        r#"{"hostname":"b.example.com","service":"https","url":"https://127.0.0.1:443"},"#,
        r#"{"hostname":"ssh.example.com","service":"tcp","url":"tcp://127.0.0.1:22"}]}"#,
        "\n"
    );

    generate()
        .arg("--json")
        .arg("--config-file")
        .arg(fixture("fixtures/config-enabled.xml"))
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn json_falls_back_to_default_object_without_plugin_subtree() {
    generate()
        .arg("--json")
        .arg("--config-file")
        .arg(fixture("fixtures/config-no-plugin.xml"))
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{DEFAULT_JSON}\n")));
}

#[test]
fn json_falls_back_to_default_object_for_malformed_input() {
    generate()
        .arg("--json")
        .arg("--config-file")
        .arg(fixture("fixtures/config-malformed.xml"))
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{DEFAULT_JSON}\n")));
}

#[test]
fn json_falls_back_to_default_object_for_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");

    generate()
        .arg("--json")
        .arg("--config-file")
        .arg(dir.path().join("absent.xml"))
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{DEFAULT_JSON}\n")));
}

#[test]
fn config_renders_ingress_for_enabled_configuration() {
    generate()
        .arg("--config")
        .arg("--config-file")
        .arg(fixture("fixtures/config-enabled.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("tunnel: mytun"))
        .stdout(predicate::str::contains(
            "credentials-file: /usr/local/etc/cloudflared/cert.pem",
        ))
        .stdout(predicate::str::contains("hostname: a.example.com"))
        .stdout(predicate::str::contains("service: http://127.0.0.1:80"))
        .stdout(predicate::str::contains("noTLSVerify: true"))
        .stdout(predicate::str::contains("service: https://127.0.0.1:443"))
        .stdout(predicate::str::contains("noTLSVerify: false"))
        .stdout(predicate::str::contains("service: tcp://127.0.0.1:22"))
        .stdout(predicate::str::contains("service: http_status:404"))
        .stdout(predicate::str::contains("off.example.com").not());
}

#[test]
fn config_is_the_default_output_mode() {
    let with_flag = generate()
        .arg("--config")
        .arg("--config-file")
        .arg(fixture("fixtures/config-enabled.xml"))
        .assert()
        .success();

    let without_flag = generate()
        .arg("--config-file")
        .arg(fixture("fixtures/config-enabled.xml"))
        .assert()
        .success();

    assert_eq!(
        with_flag.get_output().stdout,
        without_flag.get_output().stdout
    );
}

#[test]
fn config_emits_disabled_document_when_plugin_is_disabled() {
    generate()
        .arg("--config")
        .arg("--config-file")
        .arg(fixture("fixtures/config-disabled.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("tunnel: disabled"))
        .stdout(predicate::str::contains("service: http_status:503"))
        .stdout(predicate::str::contains("a.example.com").not());
}

#[test]
fn config_emits_disabled_document_for_malformed_input() {
    generate()
        .arg("--config")
        .arg("--config-file")
        .arg(fixture("fixtures/config-malformed.xml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("tunnel: disabled"))
        .stdout(predicate::str::contains("service: http_status:503"));
}
