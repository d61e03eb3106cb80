use anyhow::Context;
use args::CliArgs;
use env_logger::{Builder, Target};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::tray::{self, TrayGenerator};

mod args;

pub fn run() -> anyhow::Result<()> {
    let args = args::parse_cli_args();
    setup_logging(&args);

    log::info!("Parsed CLI args and initialized logger!");

    let result = generate(args);

    if let Err(e) = &result {
        log::error!("Error occurred: {}", e);
        log::error!("Caused by: {}", e.root_cause());
        log::info!("Exiting cleanly with error :/");
    } else {
        log::info!("Exiting cleanly with success :)");
    }

    result
}

fn generate(args: CliArgs) -> anyhow::Result<()> {
    if args.num_samples != 1 || args.multiple_samples {
        log::warn!("Multiple samples are not implemented, generating a single sample");
    }

    let generator = TrayGenerator::new(
        args.tray_size,
        args.num_blocks,
        args.min_block_size,
        args.max_block_size,
    )
    .context("validating tray and block sizes")?;

    let mut rng = match args.seed {
        Some(seed) => {
            log::info!("Seeding block generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let blocks = generator.generate(&mut rng);

    log::info!(
        "Generated {} blocks for tray {}",
        blocks.len(),
        generator.tray_size()
    );

    for format in args.file_format {
        let data = generator.dump(format, &blocks);

        if args.stdout {
            println!("{data}");
        } else {
            let path = tray::output_path(&args.file_name, format);
            tray::save_data_to_file(&data, &path)
                .with_context(|| format!("writing {} data to {:?}", format, path))?;
            log::info!("Wrote {} bytes of {} data to {:?}", data.len(), format, path);
        }
    }

    Ok(())
}

fn setup_logging(args: &CliArgs) {
    let mut logger = Builder::new();

    if let Some(filters) = &args.log_filter {
        // Configure with the RUST_LOG directives string from the cli arg.
        logger.parse_filters(filters.as_str())
    } else {
        // Configure just the log level.
        logger.filter_level(args.log_level.into())
    };

    // Log to stderr so that data printed with --stdout stays clean.
    logger.target(Target::Stderr).init();
}
