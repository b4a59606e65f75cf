use anyhow::Context;
use colored::Colorize;
use onm_mapping::{HashKeyedMapping, MappingError, ObjectNodeMapping, PersistConfig};
use onm_types::{ObjectKey, ObjectValue};

use crate::cli::*;

type ValueMapping = HashKeyedMapping<ObjectValue>;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    match cli.command {
        Command::Build(args) => cmd_build(&config, args, &cli.format),
        Command::Inspect(_) => cmd_inspect(&config, &cli.format),
        Command::Lookup(args) => cmd_lookup(&config, args, &cli.format),
        Command::Nodes(_) => cmd_nodes(&config, &cli.format),
    }
}

/// Config file first, then command-line overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<PersistConfig> {
    let mut config = match &cli.config {
        Some(path) => PersistConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => PersistConfig::default(),
    };
    if let Some(dir) = &cli.persist_dir {
        config.persist_dir = dir.clone();
    }
    if let Some(name) = &cli.filename {
        config.mapping_filename = name.clone();
    }
    tracing::debug!(path = %config.mapping_path().display(), "mapping location resolved");
    Ok(config)
}

fn load(config: &PersistConfig) -> anyhow::Result<ValueMapping> {
    ValueMapping::from_persist_config(config)
        .with_context(|| format!("loading mapping {}", config.mapping_path().display()))
}

fn cmd_build(config: &PersistConfig, args: BuildArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let input = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let objects: Vec<ObjectValue> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ObjectValue::parse)
        .collect();
    let read = objects.len();

    let mapping = ValueMapping::from_objects(objects)?;
    let path = mapping
        .persist_with(config)
        .with_context(|| format!("persisting mapping to {}", config.mapping_path().display()))?;
    tracing::info!(objects = mapping.len(), path = %path.display(), "mapping built");

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "path": path.display().to_string(),
                "objects_read": read,
                "objects_stored": mapping.len(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!(
                "{} Persisted {} objects to {}",
                "✓".green().bold(),
                mapping.len().to_string().bold(),
                path.display().to_string().bold()
            );
            if read > mapping.len() {
                println!(
                    "  {} {} lines shared a string form with a later line",
                    "note:".yellow(),
                    read - mapping.len()
                );
            }
        }
    }
    Ok(())
}

fn cmd_inspect(config: &PersistConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let mapping = load(config)?;
    let entries: Vec<(ObjectKey, &ObjectValue)> = mapping
        .keys()
        .into_iter()
        .filter_map(|key| mapping.get(&key).map(|obj| (key, obj)))
        .collect();

    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = entries
                .iter()
                .map(|(key, obj)| {
                    serde_json::json!({
                        "key": key.to_hex(),
                        "kind": obj.kind(),
                        "text": obj.to_string(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => {
            println!(
                "{} objects in {}",
                entries.len().to_string().bold(),
                config.mapping_path().display()
            );
            for (key, obj) in entries {
                println!("  {}  {:<5}  {}", key.to_hex().yellow(), obj.kind().cyan(), obj);
            }
        }
    }
    Ok(())
}

fn cmd_lookup(config: &PersistConfig, args: LookupArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let mapping = load(config)?;
    let (key, object) = match (&args.key, &args.text) {
        (Some(hex), _) => {
            let key = ObjectKey::from_hex(hex).with_context(|| format!("parsing key {hex:?}"))?;
            let object = mapping
                .get(&key)
                .cloned()
                .ok_or(MappingError::NotFound { key })?;
            mapping.validate_object(&object)?;
            (key, object)
        }
        (None, Some(text)) => {
            let object = mapping
                .from_text(text)
                .with_context(|| format!("looking up {text:?}"))?;
            (ObjectKey::of(text), object)
        }
        (None, None) => anyhow::bail!("lookup needs node text or --key"),
    };

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "key": key.to_hex(),
                "kind": object.kind(),
                "object": object,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("{} {} ({})", key.to_hex().yellow(), object, object.kind().cyan());
        }
    }
    Ok(())
}

fn cmd_nodes(config: &PersistConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let mapping = load(config)?;
    let objects: Vec<ObjectValue> = mapping
        .keys()
        .iter()
        .filter_map(|key| mapping.get(key).cloned())
        .collect();
    let nodes = mapping.to_nodes(&objects);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&nodes)?),
        OutputFormat::Text => {
            for node in &nodes {
                println!("{}  {}", node.id.dimmed(), node.text);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("onm").chain(args.iter().copied())).unwrap()
    }

    fn build_fixture(dir: &std::path::Path) -> String {
        let input = dir.join("objects.txt");
        std::fs::write(&input, "42\nhello\n\n3.14\n'42'\n").unwrap();
        input.display().to_string()
    }

    #[test]
    fn build_persists_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let input = build_fixture(dir.path());
        let store = dir.path().join("store");
        let store = store.to_str().unwrap();

        run_command(cli(&["build", input.as_str(), "--persist-dir", store])).unwrap();

        let mapping = ValueMapping::from_persist_config(&PersistConfig::in_dir(store)).unwrap();
        // "42" and '42' share a string form; the quoted string came last.
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.from_text("42").unwrap(), ObjectValue::from("42"));
        assert_eq!(mapping.from_text("3.14").unwrap(), ObjectValue::Float(3.14));
    }

    #[test]
    fn lookup_inspect_and_nodes_read_persisted_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let input = build_fixture(dir.path());
        let store = dir.path().join("store");
        let store = store.to_str().unwrap();
        run_command(cli(&["build", input.as_str(), "--persist-dir", store, "--filename", "m.bin"])).unwrap();

        let common = ["--persist-dir", store, "--filename", "m.bin"];
        run_command(cli(&[&["lookup", "hello"][..], &common[..]].concat())).unwrap();
        run_command(cli(&[&["inspect", "--format", "json"][..], &common[..]].concat())).unwrap();
        run_command(cli(&[&["nodes"][..], &common[..]].concat())).unwrap();
    }

    #[test]
    fn lookup_miss_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = build_fixture(dir.path());
        let store = dir.path().join("store");
        let store = store.to_str().unwrap();
        run_command(cli(&["build", input.as_str(), "--persist-dir", store])).unwrap();

        let err = run_command(cli(&["lookup", "absent", "--persist-dir", store])).unwrap_err();
        assert!(format!("{err:#}").contains("no object registered"));
    }

    #[test]
    fn lookup_by_hex_key() {
        let dir = tempfile::tempdir().unwrap();
        let input = build_fixture(dir.path());
        let store = dir.path().join("store");
        let store = store.to_str().unwrap();
        run_command(cli(&["build", input.as_str(), "--persist-dir", store])).unwrap();

        let hex = ObjectKey::of("hello").to_hex();
        run_command(cli(&["lookup", "--key", hex.as_str(), "--persist-dir", store])).unwrap();

        let absent = ObjectKey::of("absent").to_hex();
        let err = run_command(cli(&["lookup", "--key", absent.as_str(), "--persist-dir", store]))
            .unwrap_err();
        assert!(format!("{err:#}").contains("no object registered"));

        let err = run_command(cli(&["lookup", "--key", "xyz", "--persist-dir", store])).unwrap_err();
        assert!(format!("{err:#}").contains("invalid hex"));
    }

    #[test]
    fn missing_mapping_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("empty");
        let result = run_command(cli(&["inspect", "--persist-dir", store.to_str().unwrap()]));
        assert!(result.is_err());
    }

    #[test]
    fn config_file_sets_location() {
        let dir = tempfile::tempdir().unwrap();
        let input = build_fixture(dir.path());
        let config_path = dir.path().join("onm.toml");
        let store = dir.path().join("from-config");
        std::fs::write(
            &config_path,
            format!(
                "persist_dir = {:?}\nmapping_filename = \"cfg.bin\"\n",
                store.display().to_string()
            ),
        )
        .unwrap();

        run_command(cli(&["build", input.as_str(), "--config", config_path.to_str().unwrap()])).unwrap();
        assert!(store.join("cfg.bin").exists());
    }
}
