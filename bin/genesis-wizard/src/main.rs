use genesis_wizard_bin::cli;

fn main() -> anyhow::Result<()> {
    cli::run_cli()
}
