use clap::{Arg, Command};
use log::LevelFilter;
use phishnet::classifier::{Classifier, RemoteResult};
use phishnet::config::HeuristicConfig;
use std::process;

fn main() {
    let matches = Command::new("phishnet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Heuristic phishing URL classifier")
        .long_about(
            "PhishNet - local fallback classifier for phishing URLs:\n\
             \x20 • Weighted signal scoring with critical-override verdicts\n\
             \x20 • Severity-ranked, human-readable reasons per verdict\n\
             \x20 • Completion of partial remote classification results\n\
             \x20 • Keyword/TLD/shortener lists configurable as data",
        )
        .arg(
            Arg::new("url")
                .value_name("URL")
                .help("URL or text to classify")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Heuristic configuration file path (YAML)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate the default heuristic configuration file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the full result as JSON instead of a report")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("remote-result")
                .long("remote-result")
                .value_name("FILE")
                .help("Complete a partial remote result (JSON) for the given URL")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging with per-signal detail")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(path) = matches.get_one::<String>("generate-config") {
        match HeuristicConfig::generate_default(path) {
            Ok(()) => {
                println!("Default configuration written to {}", path);
                return;
            }
            Err(e) => {
                eprintln!("Failed to write configuration: {}", e);
                process::exit(2);
            }
        }
    }

    let Some(url) = matches.get_one::<String>("url") else {
        eprintln!("No URL given. Try: phishnet https://example.com");
        process::exit(2);
    };

    let classifier = match matches.get_one::<String>("config") {
        Some(path) => match Classifier::load_from_file(path) {
            Ok(classifier) => classifier,
            Err(e) => {
                eprintln!("Failed to load configuration {}: {}", path, e);
                process::exit(2);
            }
        },
        None => Classifier::default(),
    };

    let result = match matches.get_one::<String>("remote-result") {
        Some(path) => {
            let remote: RemoteResult = match std::fs::read_to_string(path)
                .map_err(|e| e.to_string())
                .and_then(|s| serde_json::from_str(&s).map_err(|e| e.to_string()))
            {
                Ok(remote) => remote,
                Err(e) => {
                    eprintln!("Failed to read remote result {}: {}", path, e);
                    process::exit(2);
                }
            };
            classifier.complete_remote(url, remote)
        }
        None => classifier.classify(url),
    };

    if matches.get_flag("json") {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                process::exit(2);
            }
        }
    } else {
        print_report(url, &result);
    }

    if result.phishing {
        process::exit(1);
    }
}

fn print_report(url: &str, result: &phishnet::ClassificationResult) {
    println!("URL: {}", url);
    if result.phishing {
        println!(
            "Verdict: PHISHING (risk {:.1}%, score {:.3})",
            result.risk_percentage, result.score
        );
    } else {
        println!(
            "Verdict: SAFE (safety {:.1}%, score {:.3})",
            result.safety_percentage, result.score
        );
    }
    println!(
        "Source: {}",
        if result.heuristic { "heuristic" } else { "remote" }
    );
    println!("{}", result.explanation);

    if !result.reasons.is_empty() {
        println!("Reasons:");
        for reason in &result.reasons {
            println!("  [{:?}] {}: {}", reason.severity, reason.title, reason.description);
        }
    }
}
