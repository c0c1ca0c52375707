use anyhow::Context;
use anyhow::Result;
use clap::arg;
use clap::Command;
use perl_version::Version;

fn args() -> Command {
    Command::new("perl_version")
        .about("Compare and sort perl versions")
        .long_about("Take a list of perl versions (lax or strict), sort and print them in descending order")
        .arg(arg!(versions: <version>... "Versions to compare and sort"))
        .arg(arg!(--"skip-invalid" "Skip invalid versions"))
        .arg(arg!(--"at-least" <target> "Only keep versions at least as new as <target>"))
        .arg(arg!(--format <format> "How to print each version")
            .value_parser(["raw", "string", "normal", "numify"])
            .default_value("raw")
        )
        .arg(arg!(--ascending "output in ascending order")
            .overrides_with("descending")
        )
        .arg(arg!(--descending "output in descending order (default)")
            .overrides_with("ascending")
        )
}

fn render(v: &Version, format: &str) -> String {
    match format {
        "string" => v.to_string(),
        "normal" => v.normal(),
        "numify" => v.numify().to_string(),
        _ => v.raw().to_string(),
    }
}

fn run(matches: &clap::ArgMatches) -> Result<()> {

    let texts = matches.get_many::<String>("versions").context("version expected")?;
    let skip_invalid = matches.get_flag("skip-invalid");
    let descending = !matches.get_flag("ascending");
    let format = matches.get_one::<String>("format").map(String::as_str).unwrap_or("raw");

    let target = match matches.get_one::<String>("at-least") {
        Some(t) => Some(perl_version::parse(t).with_context(|| format!("invalid target version {t}"))?),
        None => None,
    };

    let mut versions = Vec::new();
    let mut err = 0;
    for text in texts {
        match perl_version::parse(text) {
            Ok(v) => versions.push(v),
            Err(e) if skip_invalid => {
                tracing::debug!("skipping {text}: {e}");
            }
            Err(e) => {
                eprintln!("error: {e}");
                err += 1;
            }
        }
    }
    if err > 0 {
        std::process::exit(1);
    }

    if let Some(target) = &target {
        versions.retain(|v| v.greater_than_or_equal(target));
    }

    versions.sort_by(Version::total_cmp);
    versions.dedup_by(|a, b| a.components() == b.components());

    if descending {
        versions.reverse();
    }

    for v in versions {
        println!("{}", render(&v, format));
    }

    Ok(())
}

fn main() -> Result<()> {

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .without_time()
        .with_max_level(tracing::Level::TRACE)
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("PERL_VERSION_LOG"))
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    perl_version::init_grammars();

    let matches = args().get_matches_from(wild::args());
    run(&matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(argv: &[&str]) -> Vec<String> {
        let matches = args().get_matches_from(argv.iter().copied());
        let format = matches.get_one::<String>("format").unwrap().clone();
        let mut versions: Vec<Version> = matches
            .get_many::<String>("versions")
            .unwrap()
            .map(|s| perl_version::parse(s).unwrap())
            .collect();
        versions.sort_by(Version::total_cmp);
        versions.iter().map(|v| render(v, &format)).collect()
    }

    #[test]
    fn cli_parses() {
        args().debug_assert();
    }

    #[test]
    fn render_formats() {
        assert_eq!(sorted(&["perl_version", "1.2", "v1.2.3"]), ["v1.2.3", "1.2"]);
        assert_eq!(sorted(&["perl_version", "--format", "normal", "1.2", "v1.2.3"]), ["v1.2.3", "v1.200.0"]);
        assert_eq!(sorted(&["perl_version", "--format", "string", "undef"]), ["0"]);
        assert_eq!(sorted(&["perl_version", "--format", "numify", "v1.2.3"]), ["1.002003"]);
    }
}
