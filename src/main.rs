#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("`draft6` CLI is only available with the `cli` feature");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn main() -> std::process::ExitCode {
    use std::{
        fs::File,
        io::BufReader,
        path::{Path, PathBuf},
        process::ExitCode,
    };

    use clap::Parser;

    #[derive(Parser)]
    #[command(name = "draft6")]
    struct Cli {
        /// A path to a JSON instance (i.e. filename.json) to validate (may be specified multiple times).
        #[arg(short = 'i', long = "instance")]
        instances: Option<Vec<PathBuf>>,

        /// The JSON Schema to validate with (i.e. schema.json).
        #[arg(value_parser, required_unless_present("version"))]
        schema: Option<PathBuf>,

        /// Show program's version number and exit.
        #[arg(short = 'v', long = "version")]
        version: bool,
    }

    fn read_json(path: &Path) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    fn validate_instances(
        instances: &[PathBuf],
        schema_path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let schema_json = read_json(schema_path)?;
        for instance in instances {
            let instance_json = read_json(instance)?;
            let validation = draft6::validate(&schema_json, &instance_json)?;
            let filename = instance.to_string_lossy();
            if validation.is_valid() {
                println!("{} - VALID", filename);
            } else {
                // Validation failures are reported, not treated as a
                // process failure; only I/O, parse, and schema errors are.
                println!("{} - INVALID. Errors:", filename);
                let mut index = 0;
                for (path, tags) in validation.errors() {
                    for tag in tags {
                        index += 1;
                        println!("{}. {}: {}", index, path, tag);
                    }
                }
            }
        }
        Ok(())
    }

    let config = Cli::parse();

    if config.version {
        println!(concat!("Version: ", env!("CARGO_PKG_VERSION")));
        return ExitCode::SUCCESS;
    }

    if let Some(schema) = config.schema {
        if let Some(instances) = config.instances {
            if let Err(error) = validate_instances(&instances, &schema) {
                eprintln!("Error: {}", error);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
