use anyhow::Result;

fn main() -> Result<()> {
    ghost::cli::run_cli()
}
