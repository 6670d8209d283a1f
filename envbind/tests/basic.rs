use std::collections::HashMap;

use envbind::Record;

#[test]
fn binds_every_scalar_kind() {
    #[derive(Record, Debug, Default, PartialEq)]
    pub struct Config {
        #[env(from = "FOO")]
        pub string: String,
        #[env(from = "FOO")]
        pub boolean: bool,
        #[env(from = "FOO")]
        pub int: isize,
        #[env(from = "FOO")]
        pub int8: i8,
        #[env(from = "FOO")]
        pub int16: i16,
        #[env(from = "FOO")]
        pub int32: i32,
        #[env(from = "FOO")]
        pub int64: i64,
        #[env(from = "FOO")]
        pub uint: usize,
        #[env(from = "FOO")]
        pub uint8: u8,
        #[env(from = "FOO")]
        pub uint16: u16,
        #[env(from = "FOO")]
        pub uint32: u32,
        #[env(from = "FOO")]
        pub uint64: u64,
    }

    let env = HashMap::from([("FOO", "117")]);
    let expected = Config {
        string: "117".into(),
        boolean: true,
        int: 117,
        int8: 117,
        int16: 117,
        int32: 117,
        int64: 117,
        uint: 117,
        uint8: 117,
        uint16: 117,
        uint32: 117,
        uint64: 117,
    };

    let mut actual = Config::default();
    envbind::bind(&mut actual, &env).unwrap();

    assert_eq!(expected, actual);
}

#[test]
fn overrides_existing_values() {
    #[derive(Record, Debug)]
    pub struct Config {
        #[env(from = "FOO")]
        pub foo: String,
    }

    let env = HashMap::from([("FOO", "117")]);
    let mut config = Config {
        foo: "existing value".into(),
    };
    envbind::bind(&mut config, &env).unwrap();

    assert_eq!(config.foo, "117");
}

#[test]
fn unset_optional_text_becomes_empty() {
    #[derive(Record, Debug)]
    pub struct Config {
        #[env(from = "FOO_MISSING")]
        pub foo: String,
    }

    let env = HashMap::<&str, &str>::new();
    let mut config = Config {
        foo: "existing value".into(),
    };
    envbind::bind(&mut config, &env).unwrap();

    assert_eq!(config.foo, "");
}

#[test]
fn boolean_fields_follow_truthy_rule() {
    #[derive(Record, Debug, Default)]
    pub struct Config {
        #[env(from = "FOO_117")]
        pub set: bool,
        #[env(from = "FOO_MISSING")]
        pub missing: bool,
        #[env(from = "FOO_0")]
        pub zero: bool,
        #[env(from = "FOO_EMPTY")]
        pub empty: bool,
        #[env(from = "FOO_FALSE")]
        pub lower: bool,
        #[env(from = "FOO_FALSE_UPPER")]
        pub upper: bool,
        #[env(from = "FOO_FALSE_TITLE")]
        pub title: bool,
        #[env(from = "FOO_NO")]
        pub no: bool,
    }

    let env = HashMap::from([
        ("FOO_117", "117"),
        ("FOO_0", "0"),
        ("FOO_EMPTY", ""),
        ("FOO_FALSE", "false"),
        ("FOO_FALSE_UPPER", "FALSE"),
        ("FOO_FALSE_TITLE", "False"),
        ("FOO_NO", "no"),
    ]);
    let mut config = Config {
        missing: true,
        ..Config::default()
    };
    envbind::bind(&mut config, &env).unwrap();

    assert!(config.set);
    assert!(!config.missing);
    assert!(!config.zero);
    assert!(!config.empty);
    assert!(!config.lower);
    assert!(!config.upper);
    assert!(config.title);
    assert!(config.no);
}

#[test]
fn ignores_fields_without_env_attribute() {
    #[derive(Record, Debug, Default)]
    #[allow(dead_code)]
    pub struct Config {
        #[env(from = "FOO")]
        pub foo: String,
        pub bar: String,
        baz: String,
        pub nested: Vec<u8>,
    }

    let env = HashMap::from([("FOO", "117"), ("BAR", "bar"), ("BAZ", "baz")]);
    let mut config = Config::default();
    envbind::bind(&mut config, &env).unwrap();

    assert_eq!(config.foo, "117");
    assert_eq!(config.bar, "");
    assert_eq!(config.baz, "");
    assert!(config.nested.is_empty());
}

#[test]
fn implicit_env_name_uses_uppercase_field() {
    #[derive(Record, Debug, Default)]
    pub struct Config {
        #[env(from)]
        pub port: u16,
        #[env(from)]
        pub r#type: String,
    }

    let env = HashMap::from([("PORT", "8080"), ("TYPE", "worker")]);
    let mut config = Config::default();
    envbind::bind(&mut config, &env).unwrap();

    assert_eq!(config.port, 8080);
    assert_eq!(config.r#type, "worker");
}

#[test]
fn fully_qualified_scalar_paths() {
    #[derive(Record, Debug, Default)]
    pub struct Config {
        #[env(from = "NAME")]
        pub name: std::string::String,
        #[env(from = "COUNT")]
        pub count: ::core::primitive::u32,
    }

    let env = HashMap::from([("NAME", "svc"), ("COUNT", "3")]);
    let mut config = Config::default();
    envbind::bind(&mut config, &env).unwrap();

    assert_eq!(config.name, "svc");
    assert_eq!(config.count, 3);
}

#[test]
fn binding_twice_is_idempotent() {
    #[derive(Record, Debug, Default, Clone, PartialEq)]
    pub struct Config {
        #[env(from = "FOO")]
        pub foo: u8,
        #[env(from = "BAR")]
        pub bar: i8,
        #[env(from = "MISSING", required)]
        pub missing: String,
    }

    let env = HashMap::from([("FOO", "117"), ("BAR", "1177")]);

    let mut first = Config::default();
    let first_errors = envbind::bind(&mut first, &env).unwrap_err();
    let mut second = Config::default();
    let second_errors = envbind::bind(&mut second, &env).unwrap_err();

    assert_eq!(first, second);
    assert_eq!(first_errors, second_errors);
    assert_eq!(first_errors.len(), 2);

    let mut again = first.clone();
    let again_errors = envbind::bind(&mut again, &env).unwrap_err();
    assert_eq!(first, again);
    assert_eq!(first_errors, again_errors);
}

#[test]
fn binds_from_process_environment() {
    #[derive(Record, Debug, Default)]
    pub struct Config {
        #[env(from = "ENVBIND_BASIC_DATABASE_URL", required)]
        pub database_url: String,
        #[env(from = "ENVBIND_BASIC_WORKERS")]
        pub workers: u8,
    }

    let mut config = Config::default();
    let result = temp_env::with_vars(
        [
            (
                "ENVBIND_BASIC_DATABASE_URL",
                Some("postgres://postgres@postgres/postgres"),
            ),
            ("ENVBIND_BASIC_WORKERS", Some("4")),
        ],
        || config.bind_from_env(),
    );

    assert!(result.is_ok());
    assert_eq!(config.database_url, "postgres://postgres@postgres/postgres");
    assert_eq!(config.workers, 4);
}
