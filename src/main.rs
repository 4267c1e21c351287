use clap::Parser;
use imgopt::config::{self, OptimizeConfig};
use imgopt::output;
use imgopt::run;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "imgopt")]
#[command(about = "Re-encode a directory tree of images as web-optimized WebP")]
#[command(long_about = "\
Re-encode a directory tree of images as web-optimized WebP

Every .jpg, .jpeg, .png and .webp file below the source directory is
written to the output directory as WebP, scaled down to fit 1920x1080.
Images wider than 400px also get a 400x300 center-cropped thumbnail.

  assets/images/
  ├── hero.jpg                     → optimized/hero.webp, hero-thumb.webp
  ├── trips/beach.png              → optimized/beach.webp, beach-thumb.webp
  └── optimized/                   # output, never re-read

Outputs are flat: subdirectories are not mirrored, and a later file with
the same stem overwrites an earlier one.")]
#[command(version)]
struct Cli {
    /// Source directory to walk
    #[arg(long, default_value = config::DEFAULT_SOURCE_DIR)]
    source: PathBuf,

    /// Output directory [default: <SOURCE>/optimized]
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> OptimizeConfig {
        match self.output {
            Some(output) => OptimizeConfig::new(self.source, output),
            None => OptimizeConfig::for_source(self.source),
        }
    }
}

fn main() -> ExitCode {
    let config = Cli::parse().into_config();

    match run::run(config, &mut |event| output::print_process_event(event)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_fatal(&err);
            ExitCode::FAILURE
        }
    }
}
