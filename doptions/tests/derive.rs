use doptions::{Application, ParseError, Value, ValueError};
use pretty_assertions::assert_eq;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Value)]
enum LogLevel {
    Debug,
    #[default]
    Info,
    #[doptions(alias = "warning")]
    Warn,
    Error,
    #[doptions(rename = "crit", alias = "critical", alias = "fatal")]
    Critical,
}

#[derive(Debug, PartialEq, Eq, Value)]
enum OutputFormat {
    PlainText,
    Json,
}

#[derive(Debug, PartialEq, Eq, Value)]
enum Jobs {
    Auto,
    Count(u32),
}

#[derive(Debug, PartialEq, Eq, Value)]
enum Target {
    All,
    Named { name: String },
}

#[derive(Debug, Default, PartialEq, Eq, Value)]
struct Port(u16);

#[derive(Debug, Default, PartialEq, Eq, Value)]
struct Quiet {
    enabled: bool,
}

#[test]
fn enum_names() {
    assert_eq!(LogLevel::from_arg("debug").unwrap(), LogLevel::Debug);
    assert_eq!(LogLevel::from_arg("warn").unwrap(), LogLevel::Warn);
    assert_eq!(LogLevel::from_arg("crit").unwrap(), LogLevel::Critical);
}

#[test]
fn enum_names_ignore_case() {
    assert_eq!(LogLevel::from_arg("DEBUG").unwrap(), LogLevel::Debug);
    assert_eq!(LogLevel::from_arg("Info").unwrap(), LogLevel::Info);
    assert_eq!(LogLevel::from_arg("WaRnInG").unwrap(), LogLevel::Warn);
}

#[test]
fn enum_aliases() {
    assert_eq!(LogLevel::from_arg("warning").unwrap(), LogLevel::Warn);
    assert_eq!(LogLevel::from_arg("critical").unwrap(), LogLevel::Critical);
    assert_eq!(LogLevel::from_arg("fatal").unwrap(), LogLevel::Critical);

    // Renaming replaces the default spelling
    assert!(LogLevel::from_arg("Critical").is_ok());
    assert!(LogLevel::from_arg("crit").is_ok());
}

#[test]
fn enum_mismatch_lists_primary_names() {
    let err = LogLevel::from_arg("verbose").unwrap_err();

    match err {
        ValueError::ShouldBe { ref arg, expected } => {
            assert_eq!(arg, "verbose");
            assert_eq!(expected, ["debug", "info", "warn", "error", "crit"]);
        }
        ref err => panic!("unexpected error: {err}"),
    }

    assert_eq!(
        err.to_string(),
        "\"verbose\" should be one of: debug, info, warn, error, crit"
    );
}

#[test]
fn enum_names_are_kebab_case() {
    assert_eq!(
        OutputFormat::from_arg("plain-text").unwrap(),
        OutputFormat::PlainText
    );
    assert!(OutputFormat::from_arg("PlainText").is_err());
}

#[test]
fn fallback_variants() {
    assert_eq!(Jobs::from_arg("auto").unwrap(), Jobs::Auto);
    assert_eq!(Jobs::from_arg("AUTO").unwrap(), Jobs::Auto);
    assert_eq!(Jobs::from_arg("8").unwrap(), Jobs::Count(8));

    assert!(matches!(
        Jobs::from_arg("lots"),
        Err(ValueError::InvalidLiteral { .. })
    ));

    assert_eq!(Target::from_arg("all").unwrap(), Target::All);
    assert_eq!(
        Target::from_arg("core").unwrap(),
        Target::Named {
            name: "core".to_owned()
        }
    );
}

#[test]
fn newtypes_delegate() {
    assert_eq!(Port::from_arg("8080").unwrap(), Port(8080));
    assert!(matches!(
        Port::from_arg("80000"),
        Err(ValueError::OutOfRange { .. })
    ));

    assert!(Port::TAKES_ARGUMENT);
    assert!(!Quiet::TAKES_ARGUMENT);
}

#[test]
fn derived_types_as_options() {
    let mut level = LogLevel::default();
    let mut quiet = Quiet::default();
    let mut serve = false;
    let mut port = Port(80);
    let mut jobs = Jobs::Auto;

    {
        let mut app = Application::new();
        app.add_option("-l,--log-level", &mut level)
            .unwrap()
            .add_option("-q,--quiet", &mut quiet)
            .unwrap();
        app.add_command("serve", &mut serve)
            .unwrap()
            .add_option("-p,--port", &mut port)
            .unwrap()
            .add_option("-j,--jobs", &mut jobs)
            .unwrap();

        app.parse(&["-q", "--log-level", "Warning", "serve", "-j", "4", "-p", "9000"])
            .unwrap();
    }

    assert_eq!(level, LogLevel::Warn);
    assert_eq!(quiet, Quiet { enabled: true });
    assert!(serve);
    assert_eq!(port, Port(9000));
    assert_eq!(jobs, Jobs::Count(4));
}

#[test]
fn derived_type_errors_carry_the_option() {
    let mut level = LogLevel::default();
    let mut app = Application::new();
    app.add_option("-l,--log-level", &mut level).unwrap();

    let err = app.parse(&["-l", "loud"]).unwrap_err();

    match err {
        ParseError::Value {
            ref option,
            error: ValueError::ShouldBe { .. },
        } => assert_eq!(option, "-l"),
        ref err => panic!("unexpected error: {err}"),
    }
}
