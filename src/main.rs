use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use phone_numerology::analysis::{AnalysisResult, Birthdate, PhoneNumerology};
use phone_numerology::{batch, config, input, output};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze one phone number for the birthdate
    Analyze {
        /// Phone number, e.g. 0978-759-196
        phone: String,

        /// Print the JSON summary instead of the text report
        #[arg(long)]
        json: bool,

        /// Accept any digit string instead of requiring 09XXXXXXXX
        #[arg(long)]
        any_format: bool,

        /// Also save the text report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Rank every number in a list file, best first
    Rank {
        /// File with one phone number per line
        #[arg(default_value = batch::DEFAULT_NUMBERS_FILE)]
        file: PathBuf,

        /// Number of detailed reports to print after the table
        #[arg(long, default_value_t = 3)]
        top: usize,

        /// Tab-separated output for scripting (score, number, stars)
        #[arg(long)]
        tsv: bool,

        /// Save the full ranking and every report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Recommend two-digit patterns for the birthdate
    Recommend {
        /// How many patterns to print (defaults to config, then 10)
        #[arg(long)]
        count: Option<usize>,

        /// Print the patterns as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "phone-numerology")]
#[command(about = "Phone number numerology analysis CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/phone-numerology/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Birthdate as YYYY/MM/DD (overrides the config file)
    #[arg(short, long, global = true)]
    birthdate: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    phone_numerology::logging::init_logging(cli.verbose);
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let effective_scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = phone_numerology::scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Command line wins over config, config wins over the built-in default
    let birthdate_input = cli
        .birthdate
        .clone()
        .or_else(|| config.birthdate.clone())
        .unwrap_or_else(|| config::DEFAULT_BIRTHDATE.to_string());
    let birthdate: Birthdate = match input::validate_birthdate(&birthdate_input) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    tracing::debug!(%birthdate, "using birthdate");

    let analyzer = PhoneNumerology::from_birthdate(birthdate).with_scoring(effective_scoring);
    let use_colors = output::should_use_colors();

    match cli.command {
        Commands::Analyze {
            phone,
            json,
            any_format,
            output: output_path,
        } => {
            let display = if any_format {
                phone
            } else {
                match input::validate_mobile_number(&phone) {
                    Ok(digits) => input::format_display(&digits),
                    Err(e) => {
                        eprintln!("{}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            };

            let analysis = match analyzer.comprehensive_analysis(&display) {
                Ok(a) => a,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            if json {
                match output::summary_json(&analysis) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Failed to serialize analysis: {}", e);
                        std::process::exit(EXIT_IO);
                    }
                }
            } else {
                println!("{}", output::format_report(&analysis, use_colors));
            }

            if let Some(path) = output_path {
                save_or_exit(&path, &output::format_report(&analysis, false));
                eprintln!("Report saved to {}", path.display());
            }
        }
        Commands::Rank {
            file,
            top,
            tsv,
            output: output_path,
        } => {
            let numbers = match batch::load_numbers(&file) {
                Ok(n) => n,
                Err(e) => {
                    eprintln!("{:#}", e);
                    std::process::exit(EXIT_IO);
                }
            };

            let ranked = batch::rank_numbers(&analyzer, &numbers);

            if tsv {
                let text = output::format_tsv(&ranked);
                if !text.is_empty() {
                    println!("{}", text);
                }
            } else {
                println!("{}", output::format_ranking_table(&ranked, use_colors));
                for analysis in ranked.iter().take(top) {
                    println!();
                    println!("{}", output::format_report(analysis, use_colors));
                }
            }

            if let Some(path) = output_path {
                save_or_exit(&path, &full_ranking_text(&ranked));
                eprintln!("Ranking saved to {}", path.display());
            }

            if cli.verbose {
                eprintln!(
                    "Ranked {} of {} numbers in {:?}",
                    ranked.len(),
                    numbers.len(),
                    start_time.elapsed()
                );
            }
        }
        Commands::Recommend { count, json } => {
            let count = count
                .or(config.recommend_count)
                .unwrap_or(config::DEFAULT_RECOMMEND_COUNT);
            let candidates = analyzer.recommend_numbers(count);

            if json {
                match serde_json::to_string_pretty(&candidates) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Failed to serialize recommendations: {}", e);
                        std::process::exit(EXIT_IO);
                    }
                }
            } else {
                println!(
                    "Recommended patterns for {} ({}命):",
                    analyzer.birthdate(),
                    analyzer.birth_element().label()
                );
                println!(
                    "{}",
                    output::format_recommendations(&candidates, use_colors)
                );
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Ranking table followed by every detailed report, without colors.
fn full_ranking_text(ranked: &[AnalysisResult]) -> String {
    let mut text = output::format_ranking_table(ranked, false);
    for analysis in ranked {
        text.push_str("\n\n");
        text.push_str(&output::format_report(analysis, false));
    }
    text.push('\n');
    text
}

fn save_or_exit(path: &std::path::Path, text: &str) {
    if let Err(e) = output::save_report(path, text) {
        eprintln!("{:#}", e);
        std::process::exit(EXIT_IO);
    }
}
