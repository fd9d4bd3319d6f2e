use glue::{Engine, EngineConfig, GlueError, GlueOption, GlueOptions};

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Alpha {
    pub a: i32,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Beta {
    pub b: i32,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct SameA {
    pub a: i32,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct TaggedB {
    #[glue("a")]
    pub b: i32,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Abc {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Ab {
    pub a: i32,
    pub b: i32,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Cd {
    pub c: i32,
    pub d: i32,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Labelled {
    pub a: i32,
    pub label: String,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct NumericLabel {
    pub a: i32,
    pub label: u64,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct Excluded {
    #[glue("-")]
    pub a: i32,
    pub b: i32,
}

#[derive(Debug, Default, Clone, glue::Record)]
pub struct PrivateA {
    a: i32,
}

impl PrivateA {
    fn new(a: i32) -> Self {
        Self { a }
    }

    fn a(&self) -> i32 {
        self.a
    }
}

#[test]
fn test_strict_missing_field() {
    let engine = Engine::default();
    let mut alpha = Alpha::default();

    let err = engine
        .glue_with(&mut alpha, &Beta { b: 1023 }, &[GlueOption::Strict])
        .expect_err("`a` has no counterpart");
    assert_eq!(err, GlueError::UnsatisfiedField { alias: "a" });
    assert!(err.to_string().contains("`a`"));
}

#[test]
fn test_favor_source() {
    let engine = Engine::default();
    let mut alpha = Alpha { a: -1 };

    engine
        .glue_with(&mut alpha, &SameA { a: 1023 }, &[GlueOption::FavorSource])
        .expect("glue succeeds");
    assert_eq!(alpha.a, 1023);
}

#[test]
fn test_favor_source_uses_source_alias() {
    let engine = Engine::default();
    let mut alpha = Alpha { a: -1 };
    let tagged = TaggedB { b: 1023 };

    engine
        .glue_with(&mut alpha, &tagged, &[GlueOption::FavorSource])
        .expect("glue succeeds");
    assert_eq!(alpha.a, 1023);

    // Without the option the destination drives and finds no `a`
    let mut alpha = Alpha { a: -1 };
    engine.glue(&mut alpha, &tagged).expect("glue succeeds");
    assert_eq!(alpha.a, -1);
}

#[test]
fn test_strict_favor_source() {
    let engine = Engine::default();
    let options = [GlueOption::Strict, GlueOption::FavorSource];
    let mut abc = Abc {
        a: -1,
        ..Abc::default()
    };

    engine
        .glue_with(&mut abc, &Ab { a: 1023, b: 511 }, &options)
        .expect("every source field is satisfied");
    assert_eq!(abc.a, 1023);
    assert_eq!(abc.b, 511);

    let err = engine
        .glue_with(&mut abc, &Cd { c: 2047, d: 4095 }, &options)
        .expect_err("`d` has no counterpart");
    assert_eq!(err, GlueError::UnsatisfiedField { alias: "d" });

    // Fields copied before the failure are kept
    assert_eq!(abc.c, 2047);
}

#[test]
fn test_strict_type_mismatch_is_not_an_error() {
    let engine = Engine::default();
    let mut labelled = Labelled {
        a: 0,
        label: "kept".to_string(),
    };

    engine
        .glue_with(
            &mut labelled,
            &NumericLabel { a: 7, label: 99 },
            &[GlueOption::Strict],
        )
        .expect("mismatched types are skipped even in strict mode");
    assert_eq!(labelled.a, 7);
    assert_eq!(labelled.label, "kept");
}

#[test]
fn test_options_are_order_independent() {
    let first = GlueOptions::default().with(&[GlueOption::Strict, GlueOption::FavorSource]);
    let second = GlueOptions::default().with(&[
        GlueOption::FavorSource,
        GlueOption::Strict,
        GlueOption::Strict,
    ]);
    assert_eq!(first, second);
}

#[test]
fn test_configured_defaults() {
    let config: EngineConfig =
        serde_json::from_str(r#"{ "defaults": { "favor_source": true } }"#).expect("valid config");
    assert_eq!(config.attribute_capacity, 32);
    let engine = Engine::new(config);

    // Favor-source is on without passing the option
    let mut alpha = Alpha { a: -1 };
    engine
        .glue(&mut alpha, &TaggedB { b: 64 })
        .expect("glue succeeds");
    assert_eq!(alpha.a, 64);

    // Call options add to the defaults
    let err = engine
        .glue_with(&mut alpha, &Cd::default(), &[GlueOption::Strict])
        .expect_err("`c` has no counterpart");
    assert_eq!(err, GlueError::UnsatisfiedField { alias: "c" });
}

#[test]
fn test_favor_source_never_writes_excluded_field() {
    let engine = Engine::default();
    let mut excluded = Excluded { a: -1, b: 0 };

    engine
        .glue_with(&mut excluded, &Ab { a: 5, b: 6 }, &[GlueOption::FavorSource])
        .expect("glue succeeds");
    assert_eq!(excluded.a, -1);
    assert_eq!(excluded.b, 6);

    // Skipped silently, not reported as unsatisfied
    engine
        .glue_with(
            &mut excluded,
            &Ab { a: 7, b: 8 },
            &[GlueOption::FavorSource, GlueOption::Strict],
        )
        .expect("an excluded counterpart is skipped");
    assert_eq!(excluded.a, -1);
    assert_eq!(excluded.b, 8);
}

#[test]
fn test_strict_skips_restricted_counterpart() {
    let engine = Engine::default();

    // Restricted source field
    let mut alpha = Alpha { a: 1 };
    engine
        .glue_with(&mut alpha, &PrivateA::new(99), &[GlueOption::Strict])
        .expect("restricted fields are skipped regardless of strictness");
    assert_eq!(alpha.a, 1);

    // Restricted destination field, resolved under favor-source
    let mut private = PrivateA::new(3);
    engine
        .glue_with(
            &mut private,
            &SameA { a: 42 },
            &[GlueOption::Strict, GlueOption::FavorSource],
        )
        .expect("restricted fields are skipped regardless of strictness");
    assert_eq!(private.a(), 3);
}
