use latticesync::cli::{execute, load_config, Commands};
use latticesync::mapper::ResonanceConfig;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_config_reads_full_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("resonance.json");
    fs::write(&path, r#"{"angle_multiplier": 3, "offset_distance": 42.0}"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(
        config,
        ResonanceConfig {
            angle_multiplier: 3,
            offset_distance: 42.0
        }
    );
}

#[test]
fn test_load_config_fills_missing_fields_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(&path, r#"{"offset_distance": 1.5}"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.angle_multiplier, ResonanceConfig::default().angle_multiplier);
    assert_eq!(config.offset_distance, 1.5);
}

#[test]
fn test_load_config_rejects_malformed_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ angle_multiplier: ").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("invalid config"));
}

#[test]
fn test_map_command_accepts_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wide.json");
    fs::write(&path, serde_json::to_string(&ResonanceConfig::wide()).unwrap()).unwrap();

    let result = execute(Commands::Map {
        text: "Axiomatic Sync".to_string(),
        config: Some(path),
        wide: false,
        json: true,
    });
    assert!(result.is_ok());
}

#[test]
fn test_map_command_reports_missing_config() {
    let dir = tempdir().unwrap();
    let result = execute(Commands::Map {
        text: "x".to_string(),
        config: Some(dir.path().join("absent.json")),
        wide: false,
        json: false,
    });
    assert!(result.is_err());
}

#[test]
fn test_genome_and_sector_commands_succeed() {
    assert!(execute(Commands::Genome {
        sequence: "AGATTACAGGAT".to_string(),
        json: true,
    })
    .is_ok());
    assert!(execute(Commands::Sector {
        text: "Conceptual content of LatticeSync_Core.py".to_string(),
        base: 1000.0,
        json: false,
    })
    .is_ok());
}

#[test]
fn test_pinched_lattice_index_out_of_range_fails() {
    let result = execute(Commands::Lattice {
        index: Some(1010),
        pinched: true,
        json: false,
    });
    assert!(result.is_err());
}

#[test]
fn test_mirror_discover_and_handshake_commands_succeed() {
    assert!(execute(Commands::Mirror {
        text: "GENOMIC_DISTORTION_MARKER::ARTHRITIS_INFLAMMATION_CASCADE_SIG_7B".to_string(),
        json: true,
    })
    .is_ok());
    assert!(execute(Commands::Discover {
        text: "A novel algorithm for prime number distribution analysis".to_string(),
        stability: 0.9,
        json: true,
    })
    .is_ok());
    assert!(execute(Commands::Handshake {
        identity: "architect@example.com".to_string(),
        password: "hunter2".to_string(),
    })
    .is_ok());
}
