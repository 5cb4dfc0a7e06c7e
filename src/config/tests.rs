use super::*;
use std::fs;
use tempfile::TempDir;

fn language<'a>(config: &'a LintgateConfig, name: &str) -> &'a LanguageConfig {
    config.languages.iter().find(|lang| lang.name == name).unwrap()
}

#[test]
fn test_config_loads_defaults() {
    let config = LintgateConfig::defaults().expect("Should load default config");

    assert_eq!(
        config.tools.required,
        vec!["pylint", "yapf", "gofmt", "golangci-lint", "git"]
    );
    assert!(!config.tools.skip_check);

    let names: Vec<&str> = config.languages.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["python", "go"]);

    let go = language(&config, "go");
    assert_eq!(go.linter.target, LintTarget::Packages);
    assert_eq!(go.linter.output, LintOutput::GolangciJson);
    assert_eq!(go.linter.args, vec!["run", "--output.json.path=stdout"]);

    let python = language(&config, "python");
    assert!(python.formatter.exclude.iter().any(|p| p == "*_pb2.py"));

    assert_eq!(config.commit_msg.prefix, "#");
    assert!(config.debug.enabled);
    assert_eq!(config.debug.patterns.len(), 3);
}

#[test]
fn test_defaults_validate() {
    let config = LintgateConfig::defaults().unwrap();
    assert!(config.validate().is_ok());
}

#[test]
fn test_repo_config_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("lintgate.toml"),
        r#"
[tools]
required = ["git"]
skip_check = true

[[languages]]
name = "shell"
extensions = [".sh"]

[languages.linter]
command = "shellcheck"

[languages.formatter]
command = "shfmt"
args = ["-w"]
"#,
    )
    .unwrap();

    let config = LintgateConfig::load_from(dir.path(), None).unwrap();

    assert_eq!(config.tools.required, vec!["git"]);
    assert!(config.tools.skip_check);
    assert_eq!(config.languages.len(), 1);
    assert_eq!(config.languages[0].linter.target, LintTarget::Files);
    assert_eq!(config.languages[0].linter.output, LintOutput::Text);
    // Untouched sections keep their defaults
    assert_eq!(config.debug.patterns.len(), 3);
}

#[test]
fn test_custom_yaml_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hooks.yml");
    fs::write(&path, "commit_msg:\n  pattern: 'ABC-[0-9]+'\n  prefix: 'refs '\n").unwrap();

    let config = LintgateConfig::load_from(dir.path(), Some(&path)).unwrap();

    assert_eq!(config.commit_msg.pattern, "ABC-[0-9]+");
    assert_eq!(config.commit_msg.prefix, "refs ");
    assert!(config.commit_msg.enabled);
}

#[test]
fn test_missing_custom_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = LintgateConfig::load_from(dir.path(), Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}

#[test]
fn test_validate_rejects_bad_patterns() {
    let mut config = LintgateConfig::defaults().unwrap();
    config.debug.patterns.push(DebugPatternConfig {
        name: "broken".to_string(),
        regex: "(".to_string(),
        exclude: None,
    });
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("broken"));

    let mut config = LintgateConfig::defaults().unwrap();
    config.languages[0].formatter.exclude.push("[".to_string());
    assert!(config.validate().is_err());

    let mut config = LintgateConfig::defaults().unwrap();
    config.languages[1].extensions.clear();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("'go' has no extensions"));
}
