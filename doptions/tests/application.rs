use doptions::{Application, BuildError, NameValidationConfig, ParseError};
use pretty_assertions::assert_eq;

#[test]
fn global_option_then_command() {
    let mut verbose = false;
    let mut build = false;
    let mut test = false;
    let mut jobs = 1u32;

    {
        let mut app = Application::new();
        app.add_option("-v,--verbose", &mut verbose).unwrap();
        app.add_command("build", &mut build)
            .unwrap()
            .add_option("-j,--jobs", &mut jobs)
            .unwrap();
        app.add_command("test", &mut test).unwrap();

        app.parse(&["-v", "build", "--jobs", "4"]).unwrap();
    }

    assert!(verbose);
    assert!(build);
    assert!(!test);
    assert_eq!(jobs, 4);
}

#[test]
fn global_options_only() {
    let mut verbose = false;
    let mut build = false;

    {
        let mut app = Application::new();
        app.add_option("-v,--verbose", &mut verbose).unwrap();
        app.add_command("build", &mut build).unwrap();

        app.parse(&["--verbose"]).unwrap();
    }

    assert!(verbose);
    assert!(!build);
}

#[test]
fn empty_argument_list() {
    let mut verbose = false;
    let mut build = false;

    {
        let mut app = Application::new();
        app.add_option("-v", &mut verbose).unwrap();
        app.add_command("build", &mut build).unwrap();

        app.parse::<String>(&[]).unwrap();
    }

    assert!(!verbose);
    assert!(!build);
}

#[test]
fn global_options_belong_before_the_command() {
    let mut verbose = false;
    let mut build = false;

    {
        let mut app = Application::new();
        app.add_option("-v", &mut verbose).unwrap();
        app.add_command("build", &mut build).unwrap();

        let err = app.parse(&["build", "-v"]).unwrap_err();
        assert!(matches!(err, ParseError::UnknownArgument(ref token) if token == "-v"));
    }

    assert!(!verbose);
    assert!(!build);
}

#[test]
fn only_one_command_runs() {
    let mut build = false;
    let mut test = false;

    {
        let mut app = Application::new();
        app.add_command("build", &mut build).unwrap();
        app.add_command("test", &mut test).unwrap();

        let err = app.parse(&["build", "test"]).unwrap_err();
        assert!(matches!(err, ParseError::UnknownArgument(ref token) if token == "test"));
    }

    assert!(!build);
    assert!(!test);
}

#[test]
fn unknown_command() {
    let mut build = false;
    let mut app = Application::new();
    app.add_command("build", &mut build).unwrap();

    let err = app.parse(&["deploy"]).unwrap_err();
    assert!(matches!(err, ParseError::UnknownArgument(ref token) if token == "deploy"));
}

#[test]
fn command_options_are_not_global() {
    let mut build = false;
    let mut jobs = 1u32;
    let mut app = Application::new();
    app.add_command("build", &mut build)
        .unwrap()
        .add_option("--jobs", &mut jobs)
        .unwrap();

    let err = app.parse(&["--jobs", "4", "build"]).unwrap_err();
    assert!(matches!(err, ParseError::UnknownArgument(ref token) if token == "--jobs"));
}

#[test]
fn global_and_command_options_may_share_names() {
    let mut outer = false;
    let mut inner = false;
    let mut build = false;

    {
        let mut app = Application::new();
        app.add_option("-v", &mut outer).unwrap();
        app.add_command("build", &mut build)
            .unwrap()
            .add_option("-v", &mut inner)
            .unwrap();

        app.parse(&["build", "-v"]).unwrap();
    }

    assert!(!outer);
    assert!(inner);
    assert!(build);
}

#[test]
fn command_failure_keeps_global_values() {
    let mut verbose = false;
    let mut build = false;
    let mut jobs = 1u32;

    {
        let mut app = Application::new();
        app.add_option("-v", &mut verbose).unwrap();
        app.add_command("build", &mut build)
            .unwrap()
            .add_option("--jobs", &mut jobs)
            .unwrap();

        let err = app.parse(&["-v", "build", "--jobs", "many"]).unwrap_err();
        assert!(err.value_error().is_some());
    }

    assert!(verbose);
    assert!(!build);
    assert_eq!(jobs, 1);
}

#[test]
fn duplicate_global_option() {
    let mut verbose = false;
    let mut app = Application::new();
    app.add_option("-v,--verbose", &mut verbose).unwrap();

    let err = app.parse(&["-v", "--verbose"]).unwrap_err();
    assert!(matches!(err, ParseError::DuplicateArgument { .. }));
}

#[test]
fn duplicate_registrations() {
    let mut verbose = false;
    let mut quiet = false;
    let mut first = false;
    let mut second = false;

    let mut app = Application::new();
    app.add_option("-v", &mut verbose).unwrap();
    app.add_command("build", &mut first).unwrap();

    assert_eq!(
        app.add_option("-v,--verbose", &mut quiet).unwrap_err(),
        BuildError::DuplicateName("-v".to_owned())
    );
    assert_eq!(
        app.add_command("build", &mut second).unwrap_err(),
        BuildError::DuplicateName("build".to_owned())
    );

    let commands: Vec<&str> = app.commands().map(|command| command.name()).collect();
    assert_eq!(commands, ["build"]);
    assert_eq!(app.options().count(), 1);
}

#[test]
fn configuration_reaches_commands() {
    let config = NameValidationConfig {
        allow_dots: true,
        short_name_limit: 1,
        ..NameValidationConfig::default()
    };

    let mut run = false;
    let mut target = String::new();

    {
        let mut app = Application::with_config(config);
        assert!(app.config().allow_dots);

        // Two characters is a long name under this configuration
        app.add_command("go", &mut run)
            .unwrap()
            .add_option("--build.target", &mut target)
            .unwrap();

        app.parse(&["go", "--build.target", "x86"]).unwrap();
    }

    assert!(run);
    assert_eq!(target, "x86");
}

#[test]
fn default_configuration_rejects_dots() {
    let mut target = String::new();
    let mut app = Application::new();

    assert!(matches!(
        app.add_option("--build.target", &mut target),
        Err(BuildError::InvalidName(_))
    ));
}

#[test]
fn reserved_names() {
    let config = NameValidationConfig {
        reserved_names: vec!["help".to_owned()],
        ..NameValidationConfig::default()
    };

    let mut help = false;
    let mut help_command = false;
    let mut app = Application::with_config(config);

    assert!(matches!(
        app.add_option("--help", &mut help),
        Err(BuildError::ReservedName(_))
    ));
    assert!(matches!(
        app.add_command("help", &mut help_command),
        Err(BuildError::ReservedName(_))
    ));
}

#[test]
fn owned_arguments() {
    let mut jobs = 0u8;
    let mut build = false;
    let args: Vec<String> = ["build", "-j", "8"].map(String::from).into();

    {
        let mut app = Application::new();
        app.add_command("build", &mut build)
            .unwrap()
            .add_option("-j", &mut jobs)
            .unwrap();

        app.parse(&args).unwrap();
    }

    assert!(build);
    assert_eq!(jobs, 8);
}

#[test]
fn missing_global_value() {
    let mut number = 0i32;
    let mut app = Application::new();
    app.add_option("-n,--number", &mut number).unwrap();

    let err = app.parse(&["--number"]).unwrap_err();
    assert!(matches!(err, ParseError::InsufficientValues(ref option) if option == "--number"));
}

#[test]
fn missing_command_value() {
    let mut build = false;
    let mut jobs = 1u32;

    {
        let mut app = Application::new();
        app.add_command("build", &mut build)
            .unwrap()
            .add_option("-j,--jobs", &mut jobs)
            .unwrap();

        let err = app.parse(&["build", "--jobs"]).unwrap_err();
        assert!(matches!(err, ParseError::InsufficientValues(ref option) if option == "--jobs"));
    }

    assert!(!build);
    assert_eq!(jobs, 1);
}
