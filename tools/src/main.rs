// Exports the definition's built-in checkpoint table to a file the host's
// checkpoint loader can seed from. Thin glue: resolve the network, write the
// table, log anything that goes wrong and exit nonzero.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use bitcoin_definition_core::{BitcoinDefinition, NetworkId};
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Network tag: main, test, regTest or oldTestNet2.
    #[clap(long, default_value = "main")]
    network: String,

    /// File the checkpoint table is written to.
    #[clap(long, default_value = "checkpoints.txt")]
    output: PathBuf,

    /// Output format: text or json.
    #[clap(long, default_value = "text")]
    format: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string())),
        )
        .init();

    if let Err(err) = run(Cli::parse()) {
        error!("checkpoint export failed: {:#}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    let network = resolve_network(&cli.network)
        .with_context(|| format!("unknown network tag {:?}", cli.network))?;
    let definition = BitcoinDefinition::new();

    let mut table: Vec<(u32, String)> = Vec::new();
    if network == NetworkId::MAIN {
        definition.init_checkpoints(&mut table);
    } else {
        info!("no built-in checkpoints for {}, writing an empty table", network);
    }

    let body = match cli.format.as_str() {
        "text" => render_text(&table),
        "json" => serde_json::to_string_pretty(&table).context("encoding checkpoint table")?,
        other => bail!("unknown output format {other:?}"),
    };

    fs::write(&cli.output, body)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!(
        "wrote {} checkpoints for {} to {}",
        table.len(),
        network,
        cli.output.display()
    );
    Ok(())
}

fn resolve_network(tag: &str) -> Option<NetworkId> {
    [
        NetworkId::MAIN,
        NetworkId::TEST,
        NetworkId::REG_TEST,
        NetworkId::OLD_TEST_NET2,
    ]
    .into_iter()
    .find(|network| network.tag() == tag)
}

fn render_text(table: &[(u32, String)]) -> String {
    let mut out = String::from("# height hash\n");
    for (height, hash) in table {
        let _ = writeln!(out, "{height} {hash}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_standard_tags_only() {
        assert_eq!(resolve_network("main"), Some(NetworkId::MAIN));
        assert_eq!(resolve_network("oldTestNet2"), Some(NetworkId::OLD_TEST_NET2));
        assert_eq!(resolve_network("unitTest"), None);
        assert_eq!(resolve_network("bogus"), None);
    }

    #[test]
    fn writes_the_production_table_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("checkpoints.txt");
        run(Cli {
            network: "main".to_string(),
            output: output.clone(),
            format: "text".to_string(),
        })
        .unwrap();

        let body = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("91722 "));
        assert!(lines[5].starts_with("200000 "));
    }

    #[test]
    fn writes_an_empty_json_table_for_regtest() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("checkpoints.json");
        run(Cli {
            network: "regTest".to_string(),
            output: output.clone(),
            format: "json".to_string(),
        })
        .unwrap();

        let body = fs::read_to_string(&output).unwrap();
        let table: Vec<(u32, String)> = serde_json::from_str(&body).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn rejects_unknown_tags_and_formats() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(Cli {
            network: "signet".to_string(),
            output: dir.path().join("x.txt"),
            format: "text".to_string(),
        })
        .is_err());
        assert!(run(Cli {
            network: "main".to_string(),
            output: dir.path().join("x.txt"),
            format: "yaml".to_string(),
        })
        .is_err());
    }
}
