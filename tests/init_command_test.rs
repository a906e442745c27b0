#[cfg(test)]
mod init_command_tests {
    use assert_cmd::cargo::cargo_bin_cmd;

    use mdsplice_lib::config::{self, Config};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_init_command_creates_config_file() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let temp_path = temp_dir.path();
        let config_path = temp_path.join(".mdsplice.toml");

        let mut cmd = cargo_bin_cmd!("mdsplice");
        cmd.current_dir(temp_path)
            .arg("init")
            .assert()
            .success()
            .stdout(predicates::str::contains("Created default configuration file"));

        assert!(config_path.exists());

        let config_content = fs::read_to_string(&config_path).expect("Failed to read config file");
        assert!(config_content.contains("[languages]"));
        assert!(config_content.contains("[[inject]]"));
        assert!(Config::load(&config_path).is_ok());
    }

    #[test]
    fn test_init_command_with_custom_path() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");

        let mut cmd = cargo_bin_cmd!("mdsplice");
        cmd.current_dir(temp_dir.path())
            .args(["init", "--config", "docs.toml"])
            .assert()
            .success();

        assert!(temp_dir.path().join("docs.toml").exists());
        assert!(!temp_dir.path().join(".mdsplice.toml").exists());
    }

    #[test]
    fn test_init_command_refuses_to_overwrite() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let config_path = temp_dir.path().join(".mdsplice.toml");
        fs::write(&config_path, "# Existing config").expect("Failed to create config file");

        let mut cmd = cargo_bin_cmd!("mdsplice");
        cmd.current_dir(temp_dir.path())
            .env("NO_COLOR", "1")
            .arg("init")
            .assert()
            .code(2)
            .stderr(predicates::str::contains("Configuration file already exists"));

        let config_content = fs::read_to_string(config_path).expect("Failed to read config file");
        assert_eq!(config_content, "# Existing config");
    }

    #[test]
    fn test_create_default_config_fails_if_file_exists() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let config_path = temp_dir.path().join(".mdsplice.toml");
        fs::write(&config_path, "# Existing config").expect("Failed to create config file");

        let result = config::create_default_config(&config_path);

        match result {
            Err(err) => {
                let err_string = err.to_string();
                assert!(err_string.contains("Configuration file already exists"));
            }
            Ok(_) => panic!("Expected an error but got Ok"),
        }
    }
}
