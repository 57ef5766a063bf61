// third-party imports
use clap::Parser;

// local imports
use wcmatch::{cli::Opt, settings::Settings};

#[test]
fn test_options_from_env() {
    // SAFETY: this is the only test in the binary touching the environment.
    unsafe {
        std::env::set_var("WCMATCH_ANYTHING", "%");
        std::env::set_var("WCMATCH_IGNORE_CASE", "true");
        std::env::set_var("WCMATCH_NO_SETS", "1");
    }

    let settings = Settings::default();
    let opt = Opt::try_parse_from(["wcmatch", "%.rs"]).unwrap();
    let cards = opt.cards(&settings);
    assert_eq!(cards.anything, '%');
    assert_eq!(cards.single, '?');
    assert!(!cards.set_enabled);
    assert!(opt.ignore_case(&settings));

    let opt = Opt::try_parse_from(["wcmatch", "--anything", "#", "--match-case", "#.rs"]).unwrap();
    assert_eq!(opt.cards(&settings).anything, '#');
    assert!(!opt.ignore_case(&settings));
}
