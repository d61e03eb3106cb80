fn main() -> anyhow::Result<()> {
    traygen::cli::run()
}
