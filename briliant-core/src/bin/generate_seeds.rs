use std::{env, fs, path::Path, process::exit};

use anyhow::{Context, Result};
use briliant_core::seeds::{parse_seed_list, render_seed_table};

const TABLES: [(&str, &str, u16); 2] = [
    ("MAIN_SEEDS", "nodes_main.txt", 8544),
    ("TEST_SEEDS", "nodes_test.txt", 9333),
];

fn read_table(dir: &Path, name: &str, file: &str, default_port: u16) -> Result<String> {
    let path = dir.join(file);
    let contents =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let specs = parse_seed_list(&contents, default_port)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    eprintln!("{}: {} seeds", path.display(), specs.len());
    Ok(render_seed_table(name, &specs))
}

fn main() -> Result<()> {
    let dir = if let Some(arg) = env::args().nth(1) {
        arg
    } else {
        eprintln!("Usage: generate_seeds <dir with nodes_main.txt and nodes_test.txt>");
        exit(1);
    };
    let dir = Path::new(&dir);

    let tables = TABLES
        .iter()
        .map(|(name, file, port)| read_table(dir, name, file, *port))
        .collect::<Result<Vec<_>>>()?;

    println!("// Generated by `generate_seeds` from contrib/seeds. Do not edit by hand.");
    println!();
    println!("use crate::seeds::SeedSpec6;");
    print!("\n{}", tables.join("\n"));
    Ok(())
}
